//! DNS record types.
//!
//! This module defines the record types the codec models: the RFC 1035
//! registry plus AAAA (RFC 3596), SRV (RFC 2782), NAPTR (RFC 3403) and
//! the OPT pseudo-record (RFC 6891). Types outside this set decode into
//! the opaque [`crate::rdata::Unknown`] payload and re-encode verbatim.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u16)]
pub enum RecordType {
    /// IPv4 host address - RFC 1035
    A = 1,

    /// Authoritative name server - RFC 1035
    NS = 2,

    /// Mail destination (obsolete, use MX) - RFC 1035
    MD = 3,

    /// Mail forwarder (obsolete, use MX) - RFC 1035
    MF = 4,

    /// Canonical name for an alias - RFC 1035
    CNAME = 5,

    /// Start of a zone of authority - RFC 1035
    SOA = 6,

    /// Mailbox domain name (experimental) - RFC 1035
    MB = 7,

    /// Mail group member (experimental) - RFC 1035
    MG = 8,

    /// Mail rename domain name (experimental) - RFC 1035
    MR = 9,

    /// Null record (experimental) - RFC 1035
    NULL = 10,

    /// Well-known service description - RFC 1035
    WKS = 11,

    /// Domain name pointer - RFC 1035
    PTR = 12,

    /// Host information - RFC 1035
    HINFO = 13,

    /// Mailbox or mail list information - RFC 1035
    MINFO = 14,

    /// Mail exchange - RFC 1035
    MX = 15,

    /// Text strings - RFC 1035
    TXT = 16,

    /// IPv6 host address - RFC 3596
    AAAA = 28,

    /// Service locator - RFC 2782
    SRV = 33,

    /// Naming authority pointer - RFC 3403
    NAPTR = 35,

    /// EDNS(0) option pseudo-record - RFC 6891
    OPT = 41,
}

impl RecordType {
    /// Returns the numeric value of the type.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Creates a record type from its numeric value.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true for the mailbox family and other types whose RDATA
    /// is a single domain name (the OPT pseudo-record excluded).
    #[inline]
    pub const fn is_name_only(self) -> bool {
        matches!(
            self,
            Self::NS
                | Self::MD
                | Self::MF
                | Self::CNAME
                | Self::MB
                | Self::MG
                | Self::MR
                | Self::PTR
        )
    }

    /// Returns the human-readable name of the type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::MD => "MD",
            Self::MF => "MF",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::MB => "MB",
            Self::MG => "MG",
            Self::MR => "MR",
            Self::NULL => "NULL",
            Self::WKS => "WKS",
            Self::PTR => "PTR",
            Self::HINFO => "HINFO",
            Self::MINFO => "MINFO",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::AAAA => "AAAA",
            Self::SRV => "SRV",
            Self::NAPTR => "NAPTR",
            Self::OPT => "OPT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type value that can represent both known record types and unknown
/// numeric values.
///
/// Decoding never rejects a type: unrecognized values are carried through
/// as [`Type::Unknown`] and their RDATA is preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A known record type.
    Known(RecordType),
    /// An unknown type value, preserved as-is.
    Unknown(u16),
}

impl Type {
    /// Creates a type from a u16 value.
    #[inline]
    pub fn from_u16(value: u16) -> Self {
        RecordType::from_u16(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Known(t) => t.to_u16(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the known record type, if any.
    #[inline]
    pub const fn as_known(self) -> Option<RecordType> {
        match self {
            Self::Known(t) => Some(t),
            Self::Unknown(_) => None,
        }
    }
}

impl From<RecordType> for Type {
    fn from(t: RecordType) -> Self {
        Self::Known(t)
    }
}

impl From<u16> for Type {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{t}"),
            Self::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}
