//! DNS question section.
//!
//! Each question carries a domain name, a query type, and a query class.
//!
//! # Wire Format
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                     QNAME                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     QTYPE                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     QCLASS                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::class::{Class, RecordClass};
use crate::name::Name;
use crate::rtype::{RecordType, Type};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS question.
///
/// A typical query has one question, though the protocol allows several.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The domain name being queried.
    pub qname: Name,

    /// The type of record being requested.
    pub qtype: Type,

    /// The class of the query (usually IN).
    pub qclass: Class,
}

impl Question {
    /// Creates a new question.
    #[inline]
    pub fn new(qname: Name, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            qname,
            qtype: Type::Known(qtype),
            qclass: Class::Known(qclass),
        }
    }

    /// Creates a question with generic type and class values.
    #[inline]
    pub fn new_generic(qname: Name, qtype: Type, qclass: Class) -> Self {
        Self {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a question for an A record lookup.
    #[inline]
    pub fn a(name: Name) -> Self {
        Self::new(name, RecordType::A, RecordClass::IN)
    }

    /// Creates a question for an AAAA record lookup.
    #[inline]
    pub fn aaaa(name: Name) -> Self {
        Self::new(name, RecordType::AAAA, RecordClass::IN)
    }

    /// Creates a question for an MX record lookup.
    #[inline]
    pub fn mx(name: Name) -> Self {
        Self::new(name, RecordType::MX, RecordClass::IN)
    }

    /// Creates a question for a TXT record lookup.
    #[inline]
    pub fn txt(name: Name) -> Self {
        Self::new(name, RecordType::TXT, RecordClass::IN)
    }

    /// Creates a question for a PTR (reverse DNS) lookup.
    #[inline]
    pub fn ptr(name: Name) -> Self {
        Self::new(name, RecordType::PTR, RecordClass::IN)
    }

    /// Returns the record type if known.
    #[inline]
    pub fn record_type(&self) -> Option<RecordType> {
        self.qtype.as_known()
    }

    /// Returns the record class if known.
    #[inline]
    pub fn record_class(&self) -> Option<RecordClass> {
        self.qclass.as_known()
    }

    /// Reads a question from the wire.
    pub fn decode(reader: &mut WireReader<'_>) -> Self {
        let qname = reader.read_domain_name(true);
        let qtype = Type::from_u16(reader.read_u16());
        let qclass = Class::from_u16(reader.read_u16());
        Self {
            qname,
            qtype,
            qclass,
        }
    }

    /// Writes the question to the wire.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.qname, true);
        writer.write_u16(self.qtype.to_u16());
        writer.write_u16(self.qclass.to_u16());
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_question_creation() {
        let name = Name::from_str("example.com").unwrap();
        let q = Question::a(name.clone());

        assert_eq!(q.qname, name);
        assert_eq!(q.qtype, Type::Known(RecordType::A));
        assert_eq!(q.qclass, Class::Known(RecordClass::IN));
    }

    #[test]
    fn test_question_roundtrip() {
        let original = Question::aaaa(Name::from_str("www.example.com").unwrap());

        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);
        original.encode(&mut writer);
        let len = writer.finish().unwrap();
        assert_eq!(len, 17 + 4);

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = Question::decode(&mut reader);
        assert!(reader.is_ok());
        assert_eq!(parsed, original);
        assert_eq!(reader.position(), len);
    }

    #[test]
    fn test_question_unknown_type_preserved() {
        let q = Question::new_generic(
            Name::from_str("example.com").unwrap(),
            Type::Unknown(999),
            Class::Unknown(7),
        );

        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);
        q.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = Question::decode(&mut reader);
        assert_eq!(parsed.qtype, Type::Unknown(999));
        assert_eq!(parsed.qclass, Class::Unknown(7));
    }

    #[test]
    fn test_question_display() {
        let q = Question::mx(Name::from_str("example.com").unwrap());
        assert_eq!(q.to_string(), "example.com IN MX");
    }
}
