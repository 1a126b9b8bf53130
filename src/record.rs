//! DNS resource records.
//!
//! A resource record (RR) is the envelope around every piece of DNS
//! data: owner name, type, class, TTL, and the type-specific RDATA
//! framed by a 16-bit RDLENGTH.
//!
//! # Wire Format
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                      NAME                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TYPE                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     CLASS                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TTL                      |
//! |                                               |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                   RDLENGTH                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                     RDATA                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::class::{Class, RecordClass};
use crate::error::Error;
use crate::name::Name;
use crate::rdata::RData;
use crate::rtype::Type;
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS resource record.
///
/// The record owns its RDATA exclusively; the record type is derived
/// from the RDATA variant's tag rather than stored separately, so the
/// two can never disagree. For the OPT pseudo-record the class and TTL
/// fields carry the requestor's UDP payload size and the extended
/// rcode/flags; the codec preserves the raw values without interpreting
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// The owner name this record is about.
    name: Name,
    /// The record class (or, for OPT, the UDP payload size).
    rclass: Class,
    /// Time to live in seconds (or, for OPT, extended rcode/flags).
    ttl: u32,
    /// The record data.
    rdata: RData,
}

impl ResourceRecord {
    /// Creates a new resource record.
    pub fn new(name: Name, rclass: Class, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Creates an A record in the IN class.
    pub fn a(name: Name, ttl: u32, addr: std::net::Ipv4Addr) -> Self {
        Self::new(
            name,
            Class::Known(RecordClass::IN),
            ttl,
            RData::A(crate::rdata::A::new(addr)),
        )
    }

    /// Creates an AAAA record in the IN class.
    pub fn aaaa(name: Name, ttl: u32, addr: std::net::Ipv6Addr) -> Self {
        Self::new(
            name,
            Class::Known(RecordClass::IN),
            ttl,
            RData::AAAA(crate::rdata::AAAA::new(addr)),
        )
    }

    /// Creates a CNAME record in the IN class.
    pub fn cname(name: Name, ttl: u32, target: Name) -> Self {
        Self::new(
            name,
            Class::Known(RecordClass::IN),
            ttl,
            RData::CNAME(crate::rdata::CNAME::new(target)),
        )
    }

    /// Creates an MX record in the IN class.
    pub fn mx(name: Name, ttl: u32, preference: u16, exchange: Name) -> Self {
        Self::new(
            name,
            Class::Known(RecordClass::IN),
            ttl,
            RData::MX(crate::rdata::MX::new(preference, exchange)),
        )
    }

    /// Creates a TXT record in the IN class.
    pub fn txt(name: Name, ttl: u32, text: impl Into<Vec<u8>>) -> Self {
        Self::new(
            name,
            Class::Known(RecordClass::IN),
            ttl,
            RData::TXT(crate::rdata::TXT::from_string(text)),
        )
    }

    /// Returns the owner name.
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the record type (derived from the RDATA variant).
    #[inline]
    pub fn rtype(&self) -> Type {
        self.rdata.rtype()
    }

    /// Returns the record class.
    #[inline]
    pub const fn rclass(&self) -> Class {
        self.rclass
    }

    /// Returns the TTL in seconds.
    #[inline]
    pub const fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the record data.
    #[inline]
    pub fn rdata(&self) -> &RData {
        &self.rdata
    }

    /// Reads a resource record from the wire.
    ///
    /// The RDATA variant is chosen from the type tag and handed the
    /// RDLENGTH window. A decoder that consumes a different number of
    /// bytes than RDLENGTH latches [`Error::InvalidData`]. A zero
    /// RDLENGTH constructs the variant without invoking its decoder.
    pub fn decode(reader: &mut WireReader<'_>) -> Self {
        let name = reader.read_domain_name(true);
        let rtype = Type::from_u16(reader.read_u16());
        let rclass = Class::from_u16(reader.read_u16());
        let ttl = reader.read_u32();
        let rdlength = reader.read_u16() as usize;

        let rdata = if rdlength == 0 {
            RData::empty(rtype)
        } else {
            let expected_end = reader.position() + rdlength;
            let rdata = RData::decode(rtype, reader, rdlength);
            if reader.is_ok() && reader.position() != expected_end {
                reader.fail(Error::InvalidData);
            }
            rdata
        };

        Self {
            name,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Writes the resource record to the wire.
    ///
    /// RDLENGTH is not known until the RDATA is written (names inside it
    /// may compress), so a placeholder is written first and back-patched
    /// afterwards.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.name, true);
        writer.write_u16(self.rtype().to_u16());
        writer.write_u16(self.rclass.to_u16());
        writer.write_u32(self.ttl);

        let len_pos = writer.position();
        writer.write_u16(0);
        self.rdata.encode(writer);

        let end = writer.position();
        let rdlength = (end - len_pos).saturating_sub(2);
        writer.seek(len_pos);
        writer.write_u16(rdlength as u16);
        writer.seek(end);
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.rclass,
            self.rtype(),
            self.rdata
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdata::Unknown;
    use crate::rtype::RecordType;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    #[test]
    fn test_record_roundtrip() {
        let original = ResourceRecord::a(
            Name::from_str("www.example.com").unwrap(),
            3600,
            Ipv4Addr::new(10, 0, 0, 1),
        );

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        original.encode(&mut writer);
        let len = writer.finish().unwrap();

        // name(17) + type/class(4) + ttl(4) + rdlength(2) + rdata(4)
        assert_eq!(len, 31);
        // The back-patched RDLENGTH.
        assert_eq!(&buf[25..27], &[0x00, 0x04]);

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = ResourceRecord::decode(&mut reader);
        assert!(reader.is_ok());
        assert_eq!(parsed, original);
        assert_eq!(reader.position(), len);
    }

    #[test]
    fn test_record_rdlength_frames_compressed_name() {
        // A CNAME whose target compresses against the owner: RDLENGTH
        // must be the compressed size, not the expanded one.
        let owner = Name::from_str("www.example.com").unwrap();
        let target = Name::from_str("cdn.www.example.com").unwrap();
        let record = ResourceRecord::cname(owner, 60, target);

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        record.encode(&mut writer);
        let len = writer.finish().unwrap();

        // Owner is 17 bytes; the target is |3cdn| + pointer = 6 bytes.
        assert_eq!(&buf[25..27], &[0x00, 0x06]);

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = ResourceRecord::decode(&mut reader);
        assert!(reader.is_ok());
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_unknown_type_preserved() {
        let record = ResourceRecord::new(
            Name::from_str("example.com").unwrap(),
            Class::Known(RecordClass::IN),
            300,
            RData::Unknown(Unknown::new(999, vec![0xAB, 0xCD])),
        );

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        record.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = ResourceRecord::decode(&mut reader);
        assert!(reader.is_ok());
        assert_eq!(parsed.rtype(), Type::Unknown(999));
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_rdlength_mismatch() {
        // An A record framed with RDLENGTH 6: the decoder consumes 4, so
        // the envelope flags the mismatch.
        let mut data = Vec::new();
        data.extend_from_slice(&[3, b'w', b'w', b'w', 0]); // owner
        data.extend_from_slice(&1u16.to_be_bytes()); // type A
        data.extend_from_slice(&1u16.to_be_bytes()); // class IN
        data.extend_from_slice(&60u32.to_be_bytes()); // ttl
        data.extend_from_slice(&6u16.to_be_bytes()); // rdlength (wrong)
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]); // rdata

        let mut reader = WireReader::new(&data);
        ResourceRecord::decode(&mut reader);
        assert_eq!(reader.status(), Some(Error::InvalidData));
    }

    #[test]
    fn test_record_zero_rdlength() {
        // RDLENGTH 0 still chooses the variant; the decoder never runs.
        let mut data = Vec::new();
        data.extend_from_slice(&[0]); // root owner
        data.extend_from_slice(&16u16.to_be_bytes()); // type TXT
        data.extend_from_slice(&1u16.to_be_bytes()); // class IN
        data.extend_from_slice(&0u32.to_be_bytes()); // ttl
        data.extend_from_slice(&0u16.to_be_bytes()); // rdlength 0

        let mut reader = WireReader::new(&data);
        let record = ResourceRecord::decode(&mut reader);
        assert!(reader.is_ok());
        assert_eq!(reader.position(), data.len());
        assert!(matches!(record.rdata(), RData::TXT(t) if t.strings().is_empty()));
    }

    #[test]
    fn test_record_truncated_rdata() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0]); // root owner
        data.extend_from_slice(&1u16.to_be_bytes()); // type A
        data.extend_from_slice(&1u16.to_be_bytes()); // class IN
        data.extend_from_slice(&60u32.to_be_bytes()); // ttl
        data.extend_from_slice(&4u16.to_be_bytes()); // rdlength
        data.extend_from_slice(&[1, 2]); // only half the address

        let mut reader = WireReader::new(&data);
        ResourceRecord::decode(&mut reader);
        assert_eq!(reader.status(), Some(Error::BufferOverflow));
    }

    #[test]
    fn test_record_display() {
        let record = ResourceRecord::a(
            Name::from_str("example.com").unwrap(),
            300,
            Ipv4Addr::new(192, 0, 2, 1),
        );
        let display = record.to_string();

        assert!(display.contains("example.com"));
        assert!(display.contains("300"));
        assert!(display.contains("IN"));
        assert!(display.contains('A'));
        assert!(display.contains("192.0.2.1"));
    }

    #[test]
    fn test_record_txt_helper() {
        let record = ResourceRecord::txt(
            Name::from_str("example.com").unwrap(),
            60,
            "v=spf1 -all",
        );
        assert_eq!(record.rtype(), Type::Known(RecordType::TXT));
        assert!(matches!(record.rdata(), RData::TXT(_)));
    }
}
