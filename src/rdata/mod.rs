//! DNS record data (RDATA) types.
//!
//! Every record type the codec models lives here, organized the same way
//! the record formats group themselves:
//!
//! - **Address records**: A, AAAA
//! - **Name records**: CNAME, NS, PTR, the mailbox family (MB, MD, MF,
//!   MG, MR), MX
//! - **Authority records**: SOA
//! - **Text records**: TXT, HINFO, MINFO
//! - **Service records**: SRV, NAPTR, WKS
//! - **Pseudo-records**: OPT
//! - **Everything else**: [`Unknown`], preserved verbatim
//!
//! Each variant implements the same contract: decode from a
//! [`WireReader`] given the RDLENGTH window, and encode into a
//! [`WireWriter`]. The enclosing resource record owns its RDATA
//! exclusively and frames it with the 16-bit RDLENGTH on the wire.

pub mod address;
pub mod authority;
pub mod name;
pub mod opt;
pub mod service;
pub mod text;
pub mod unknown;

pub use address::{A, AAAA};
pub use authority::SOA;
pub use name::{CNAME, MB, MD, MF, MG, MR, MX, NS, PTR};
pub use opt::OPT;
pub use service::{NAPTR, SRV, WKS};
pub use text::{HINFO, MINFO, TXT};
pub use unknown::Unknown;

use crate::name::Name as DomainName;
use crate::rtype::{RecordType, Type};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// DNS record data.
///
/// A closed tagged sum over the modeled record payloads, with
/// [`RData::Unknown`] as the catch-all for everything else. The mapping
/// from the numeric record type to a variant is a pure function
/// ([`RData::decode`] / [`RData::empty`]); the reverse direction is
/// [`RData::rtype`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RData {
    /// IPv4 address (A record).
    A(A),
    /// IPv6 address (AAAA record).
    AAAA(AAAA),
    /// Canonical name (CNAME record).
    CNAME(CNAME),
    /// Name server (NS record).
    NS(NS),
    /// Domain name pointer (PTR record).
    PTR(PTR),
    /// Mailbox domain name (MB record).
    MB(MB),
    /// Mail destination (MD record, obsolete).
    MD(MD),
    /// Mail forwarder (MF record, obsolete).
    MF(MF),
    /// Mail group member (MG record).
    MG(MG),
    /// Mail rename domain name (MR record).
    MR(MR),
    /// Mail exchange (MX record).
    MX(MX),
    /// Start of authority (SOA record).
    SOA(SOA),
    /// Text strings (TXT record).
    TXT(TXT),
    /// Host information (HINFO record).
    HINFO(HINFO),
    /// Mailbox information (MINFO record).
    MINFO(MINFO),
    /// Well-known services (WKS record).
    WKS(WKS),
    /// Service locator (SRV record).
    SRV(SRV),
    /// Naming authority pointer (NAPTR record).
    NAPTR(NAPTR),
    /// EDNS(0) pseudo-record payload (OPT record).
    OPT(OPT),
    /// Unknown record type, preserved as raw bytes.
    Unknown(Unknown),
}

impl RData {
    /// Decodes RDATA of the given type from the reader.
    ///
    /// `data_size` is the RDLENGTH window reserved by the enclosing
    /// record. Types outside the modeled set (including NULL) decode as
    /// [`RData::Unknown`].
    pub fn decode(rtype: Type, reader: &mut WireReader<'_>, data_size: usize) -> Self {
        match rtype.as_known() {
            Some(RecordType::A) => Self::A(A::decode(reader, data_size)),
            Some(RecordType::AAAA) => Self::AAAA(AAAA::decode(reader, data_size)),
            Some(RecordType::CNAME) => Self::CNAME(CNAME::decode(reader, data_size)),
            Some(RecordType::NS) => Self::NS(NS::decode(reader, data_size)),
            Some(RecordType::PTR) => Self::PTR(PTR::decode(reader, data_size)),
            Some(RecordType::MB) => Self::MB(MB::decode(reader, data_size)),
            Some(RecordType::MD) => Self::MD(MD::decode(reader, data_size)),
            Some(RecordType::MF) => Self::MF(MF::decode(reader, data_size)),
            Some(RecordType::MG) => Self::MG(MG::decode(reader, data_size)),
            Some(RecordType::MR) => Self::MR(MR::decode(reader, data_size)),
            Some(RecordType::MX) => Self::MX(MX::decode(reader, data_size)),
            Some(RecordType::SOA) => Self::SOA(SOA::decode(reader, data_size)),
            Some(RecordType::TXT) => Self::TXT(TXT::decode(reader, data_size)),
            Some(RecordType::HINFO) => Self::HINFO(HINFO::decode(reader, data_size)),
            Some(RecordType::MINFO) => Self::MINFO(MINFO::decode(reader, data_size)),
            Some(RecordType::WKS) => Self::WKS(WKS::decode(reader, data_size)),
            Some(RecordType::SRV) => Self::SRV(SRV::decode(reader, data_size)),
            Some(RecordType::NAPTR) => Self::NAPTR(NAPTR::decode(reader, data_size)),
            Some(RecordType::OPT) => Self::OPT(OPT::decode(reader, data_size)),
            Some(RecordType::NULL) | None => {
                Self::Unknown(Unknown::decode(rtype.to_u16(), reader, data_size))
            }
        }
    }

    /// Constructs the empty variant for the given type.
    ///
    /// Used by the record envelope when RDLENGTH is zero: the variant is
    /// chosen but its decoder is never invoked.
    pub fn empty(rtype: Type) -> Self {
        match rtype.as_known() {
            Some(RecordType::A) => Self::A(A::new(Ipv4Addr::UNSPECIFIED)),
            Some(RecordType::AAAA) => Self::AAAA(AAAA::new(Ipv6Addr::UNSPECIFIED)),
            Some(RecordType::CNAME) => Self::CNAME(CNAME::new(DomainName::root())),
            Some(RecordType::NS) => Self::NS(NS::new(DomainName::root())),
            Some(RecordType::PTR) => Self::PTR(PTR::new(DomainName::root())),
            Some(RecordType::MB) => Self::MB(MB::new(DomainName::root())),
            Some(RecordType::MD) => Self::MD(MD::new(DomainName::root())),
            Some(RecordType::MF) => Self::MF(MF::new(DomainName::root())),
            Some(RecordType::MG) => Self::MG(MG::new(DomainName::root())),
            Some(RecordType::MR) => Self::MR(MR::new(DomainName::root())),
            Some(RecordType::MX) => Self::MX(MX::new(0, DomainName::root())),
            Some(RecordType::SOA) => Self::SOA(SOA::new(
                DomainName::root(),
                DomainName::root(),
                0,
                0,
                0,
                0,
                0,
            )),
            Some(RecordType::TXT) => Self::TXT(TXT::default()),
            Some(RecordType::HINFO) => Self::HINFO(HINFO::new("", "")),
            Some(RecordType::MINFO) => {
                Self::MINFO(MINFO::new(DomainName::root(), DomainName::root()))
            }
            Some(RecordType::WKS) => Self::WKS(WKS::new(Ipv4Addr::UNSPECIFIED, 0, Vec::new())),
            Some(RecordType::SRV) => Self::SRV(SRV::new(0, 0, 0, DomainName::root())),
            Some(RecordType::NAPTR) => {
                Self::NAPTR(NAPTR::new(0, 0, "", "", "", DomainName::root()))
            }
            Some(RecordType::OPT) => Self::OPT(OPT::new(Vec::new())),
            Some(RecordType::NULL) | None => {
                Self::Unknown(Unknown::new(rtype.to_u16(), Vec::new()))
            }
        }
    }

    /// Writes this RDATA to the wire (without the RDLENGTH prefix, which
    /// the enclosing record back-patches).
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        match self {
            Self::A(r) => r.encode(writer),
            Self::AAAA(r) => r.encode(writer),
            Self::CNAME(r) => r.encode(writer),
            Self::NS(r) => r.encode(writer),
            Self::PTR(r) => r.encode(writer),
            Self::MB(r) => r.encode(writer),
            Self::MD(r) => r.encode(writer),
            Self::MF(r) => r.encode(writer),
            Self::MG(r) => r.encode(writer),
            Self::MR(r) => r.encode(writer),
            Self::MX(r) => r.encode(writer),
            Self::SOA(r) => r.encode(writer),
            Self::TXT(r) => r.encode(writer),
            Self::HINFO(r) => r.encode(writer),
            Self::MINFO(r) => r.encode(writer),
            Self::WKS(r) => r.encode(writer),
            Self::SRV(r) => r.encode(writer),
            Self::NAPTR(r) => r.encode(writer),
            Self::OPT(r) => r.encode(writer),
            Self::Unknown(r) => r.encode(writer),
        }
    }

    /// Returns the record type tag for this RDATA.
    pub fn rtype(&self) -> Type {
        match self {
            Self::A(_) => Type::Known(RecordType::A),
            Self::AAAA(_) => Type::Known(RecordType::AAAA),
            Self::CNAME(_) => Type::Known(RecordType::CNAME),
            Self::NS(_) => Type::Known(RecordType::NS),
            Self::PTR(_) => Type::Known(RecordType::PTR),
            Self::MB(_) => Type::Known(RecordType::MB),
            Self::MD(_) => Type::Known(RecordType::MD),
            Self::MF(_) => Type::Known(RecordType::MF),
            Self::MG(_) => Type::Known(RecordType::MG),
            Self::MR(_) => Type::Known(RecordType::MR),
            Self::MX(_) => Type::Known(RecordType::MX),
            Self::SOA(_) => Type::Known(RecordType::SOA),
            Self::TXT(_) => Type::Known(RecordType::TXT),
            Self::HINFO(_) => Type::Known(RecordType::HINFO),
            Self::MINFO(_) => Type::Known(RecordType::MINFO),
            Self::WKS(_) => Type::Known(RecordType::WKS),
            Self::SRV(_) => Type::Known(RecordType::SRV),
            Self::NAPTR(_) => Type::Known(RecordType::NAPTR),
            Self::OPT(_) => Type::Known(RecordType::OPT),
            Self::Unknown(u) => Type::from_u16(u.type_code()),
        }
    }

    /// Returns the IPv4 address if this is an A record.
    pub fn as_a(&self) -> Option<Ipv4Addr> {
        match self {
            Self::A(a) => Some(a.address()),
            _ => None,
        }
    }

    /// Returns the IPv6 address if this is an AAAA record.
    pub fn as_aaaa(&self) -> Option<Ipv6Addr> {
        match self {
            Self::AAAA(aaaa) => Some(aaaa.address()),
            _ => None,
        }
    }

    /// Returns the target name if this is a CNAME record.
    pub fn as_cname(&self) -> Option<&DomainName> {
        match self {
            Self::CNAME(cname) => Some(cname.target()),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(r) => write!(f, "{r}"),
            Self::AAAA(r) => write!(f, "{r}"),
            Self::CNAME(r) => write!(f, "{r}"),
            Self::NS(r) => write!(f, "{r}"),
            Self::PTR(r) => write!(f, "{r}"),
            Self::MB(r) => write!(f, "{r}"),
            Self::MD(r) => write!(f, "{r}"),
            Self::MF(r) => write!(f, "{r}"),
            Self::MG(r) => write!(f, "{r}"),
            Self::MR(r) => write!(f, "{r}"),
            Self::MX(r) => write!(f, "{r}"),
            Self::SOA(r) => write!(f, "{r}"),
            Self::TXT(r) => write!(f, "{r}"),
            Self::HINFO(r) => write!(f, "{r}"),
            Self::MINFO(r) => write!(f, "{r}"),
            Self::WKS(r) => write!(f, "{r}"),
            Self::SRV(r) => write!(f, "{r}"),
            Self::NAPTR(r) => write!(f, "{r}"),
            Self::OPT(r) => write!(f, "{r}"),
            Self::Unknown(r) => write!(f, "{r}"),
        }
    }
}
