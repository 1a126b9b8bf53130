//! Name-based record types: CNAME, NS, PTR, the mailbox family (MB, MD,
//! MF, MG, MR), and MX.
//!
//! Apart from MX's preference field, each of these carries a single
//! compressed domain name. The RDLENGTH window is informational for all
//! of them; the name's own framing determines its length.

use crate::name::Name;
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CNAME record - Canonical name for an alias (RFC 1035).
///
/// A resolver encountering a CNAME restarts its query with the canonical
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CNAME {
    /// The canonical domain name.
    cname: Name,
}

impl CNAME {
    /// Creates a new CNAME record.
    #[inline]
    pub fn new(cname: Name) -> Self {
        Self { cname }
    }

    /// Returns the canonical name (target).
    #[inline]
    pub fn target(&self) -> &Name {
        &self.cname
    }

    /// Reads a CNAME record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            cname: reader.read_domain_name(true),
        }
    }

    /// Writes the CNAME record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.cname, true);
    }
}

impl fmt::Display for CNAME {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cname)
    }
}

/// NS record - Authoritative name server (RFC 1035).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NS {
    /// The name server domain name.
    nsdname: Name,
}

impl NS {
    /// Creates a new NS record.
    #[inline]
    pub fn new(nsdname: Name) -> Self {
        Self { nsdname }
    }

    /// Returns the name server name.
    #[inline]
    pub fn nsdname(&self) -> &Name {
        &self.nsdname
    }

    /// Reads an NS record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            nsdname: reader.read_domain_name(true),
        }
    }

    /// Writes the NS record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.nsdname, true);
    }
}

impl fmt::Display for NS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nsdname)
    }
}

/// PTR record - Domain name pointer (RFC 1035), used for reverse lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PTR {
    /// The pointed-to domain name.
    ptrdname: Name,
}

impl PTR {
    /// Creates a new PTR record.
    #[inline]
    pub fn new(ptrdname: Name) -> Self {
        Self { ptrdname }
    }

    /// Returns the pointed-to domain name.
    #[inline]
    pub fn ptrdname(&self) -> &Name {
        &self.ptrdname
    }

    /// Reads a PTR record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            ptrdname: reader.read_domain_name(true),
        }
    }

    /// Writes the PTR record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.ptrdname, true);
    }
}

impl fmt::Display for PTR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ptrdname)
    }
}

/// MB record - Mailbox domain name (RFC 1035, experimental).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MB {
    /// Host with the specified mailbox.
    madname: Name,
}

impl MB {
    /// Creates a new MB record.
    #[inline]
    pub fn new(madname: Name) -> Self {
        Self { madname }
    }

    /// Returns the mailbox host name.
    #[inline]
    pub fn madname(&self) -> &Name {
        &self.madname
    }

    /// Reads an MB record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            madname: reader.read_domain_name(true),
        }
    }

    /// Writes the MB record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.madname, true);
    }
}

impl fmt::Display for MB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.madname)
    }
}

/// MD record - Mail destination (RFC 1035, obsolete; use MX).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MD {
    /// Host with a mail agent for the domain.
    madname: Name,
}

impl MD {
    /// Creates a new MD record.
    #[inline]
    pub fn new(madname: Name) -> Self {
        Self { madname }
    }

    /// Returns the mail agent host name.
    #[inline]
    pub fn madname(&self) -> &Name {
        &self.madname
    }

    /// Reads an MD record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            madname: reader.read_domain_name(true),
        }
    }

    /// Writes the MD record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.madname, true);
    }
}

impl fmt::Display for MD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.madname)
    }
}

/// MF record - Mail forwarder (RFC 1035, obsolete; use MX).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MF {
    /// Host with a mail forwarding agent for the domain.
    madname: Name,
}

impl MF {
    /// Creates a new MF record.
    #[inline]
    pub fn new(madname: Name) -> Self {
        Self { madname }
    }

    /// Returns the forwarding agent host name.
    #[inline]
    pub fn madname(&self) -> &Name {
        &self.madname
    }

    /// Reads an MF record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            madname: reader.read_domain_name(true),
        }
    }

    /// Writes the MF record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.madname, true);
    }
}

impl fmt::Display for MF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.madname)
    }
}

/// MG record - Mail group member (RFC 1035, experimental).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MG {
    /// Mailbox that is a member of the mail group.
    mgmname: Name,
}

impl MG {
    /// Creates a new MG record.
    #[inline]
    pub fn new(mgmname: Name) -> Self {
        Self { mgmname }
    }

    /// Returns the group member mailbox name.
    #[inline]
    pub fn mgmname(&self) -> &Name {
        &self.mgmname
    }

    /// Reads an MG record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            mgmname: reader.read_domain_name(true),
        }
    }

    /// Writes the MG record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.mgmname, true);
    }
}

impl fmt::Display for MG {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mgmname)
    }
}

/// MR record - Mail rename domain name (RFC 1035, experimental).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MR {
    /// Mailbox that is the proper rename of the specified mailbox.
    newname: Name,
}

impl MR {
    /// Creates a new MR record.
    #[inline]
    pub fn new(newname: Name) -> Self {
        Self { newname }
    }

    /// Returns the renamed mailbox name.
    #[inline]
    pub fn newname(&self) -> &Name {
        &self.newname
    }

    /// Reads an MR record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            newname: reader.read_domain_name(true),
        }
    }

    /// Writes the MR record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.newname, true);
    }
}

impl fmt::Display for MR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.newname)
    }
}

/// MX record - Mail exchange (RFC 1035).
///
/// Specifies a mail server accepting mail for the owner name, with a
/// preference value where lower means more preferred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MX {
    /// The preference (lower is more preferred).
    preference: u16,
    /// The mail exchange domain name.
    exchange: Name,
}

impl MX {
    /// Creates a new MX record.
    #[inline]
    pub fn new(preference: u16, exchange: Name) -> Self {
        Self {
            preference,
            exchange,
        }
    }

    /// Returns the preference value.
    #[inline]
    pub const fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the mail exchange domain name.
    #[inline]
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    /// Reads an MX record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            preference: reader.read_u16(),
            exchange: reader.read_domain_name(true),
        }
    }

    /// Writes the MX record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_u16(self.preference);
        writer.write_domain_name(&self.exchange, true);
    }
}

impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

impl PartialOrd for MX {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MX {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Lower preference = higher priority
        self.preference.cmp(&other.preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const WWW_GOOGLE: &[u8] = b"\x03\x77\x77\x77\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00";

    #[test]
    fn test_name_family_decode() {
        // The whole single-name family reads the same wire form.
        let mut reader = WireReader::new(WWW_GOOGLE);
        let cname = CNAME::decode(&mut reader, WWW_GOOGLE.len());
        assert!(reader.is_ok());
        assert_eq!(cname.target().as_bytes(), b"www.google.com");

        let mut reader = WireReader::new(WWW_GOOGLE);
        assert_eq!(
            NS::decode(&mut reader, WWW_GOOGLE.len()).nsdname().as_bytes(),
            b"www.google.com"
        );

        let mut reader = WireReader::new(WWW_GOOGLE);
        assert_eq!(
            PTR::decode(&mut reader, WWW_GOOGLE.len())
                .ptrdname()
                .as_bytes(),
            b"www.google.com"
        );

        let mut reader = WireReader::new(WWW_GOOGLE);
        assert_eq!(
            MB::decode(&mut reader, WWW_GOOGLE.len()).madname().as_bytes(),
            b"www.google.com"
        );

        let mut reader = WireReader::new(WWW_GOOGLE);
        assert_eq!(
            MG::decode(&mut reader, WWW_GOOGLE.len()).mgmname().as_bytes(),
            b"www.google.com"
        );

        let mut reader = WireReader::new(WWW_GOOGLE);
        assert_eq!(
            MR::decode(&mut reader, WWW_GOOGLE.len()).newname().as_bytes(),
            b"www.google.com"
        );
    }

    #[test]
    fn test_cname_roundtrip() {
        let cname = CNAME::new(Name::from_str("www.l.google.com").unwrap());

        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);
        cname.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        assert_eq!(CNAME::decode(&mut reader, len), cname);
    }

    #[test]
    fn test_mx_roundtrip() {
        let mx = MX::new(10, Name::from_str("mail.example.com").unwrap());

        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);
        mx.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = MX::decode(&mut reader, len);
        assert_eq!(parsed, mx);
        assert_eq!(parsed.to_string(), "10 mail.example.com");
    }

    #[test]
    fn test_mx_ordering() {
        let mx1 = MX::new(10, Name::from_str("mail1.example.com").unwrap());
        let mx2 = MX::new(20, Name::from_str("mail2.example.com").unwrap());

        assert!(mx1 < mx2);
    }
}
