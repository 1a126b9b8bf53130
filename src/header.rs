//! DNS message header.
//!
//! The header is a fixed 12-byte structure at the start of every DNS
//! message: an ID, a packed flags word, and the four section counts.
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ANCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    NSCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The Z bits are discarded on decode and written as zero on encode.

use crate::opcode::OpCode;
use crate::rcode::ResponseCode;
use crate::wire::{WireReader, WireWriter};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the DNS header in bytes.
pub const HEADER_SIZE: usize = 12;

bitflags! {
    /// DNS header flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u16 {
        /// Query/Response: 0 = query, 1 = response.
        const QR = 0x8000;

        /// Authoritative Answer.
        const AA = 0x0400;

        /// Truncation.
        const TC = 0x0200;

        /// Recursion Desired.
        const RD = 0x0100;

        /// Recursion Available.
        const RA = 0x0080;
    }
}

impl Default for HeaderFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for HeaderFlags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for HeaderFlags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// DNS message header.
///
/// The opcode and rcode nibbles are stored raw so that messages carrying
/// reserved values still decode; [`Header::opcode`] and [`Header::rcode`]
/// give the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Header {
    /// Message identifier for matching requests to responses.
    pub id: u16,

    /// Flag bits (QR, AA, TC, RD, RA).
    pub flags: HeaderFlags,

    /// Raw 4-bit operation code.
    opcode: u8,

    /// Raw 4-bit response code.
    rcode: u8,

    /// Number of questions.
    pub qd_count: u16,

    /// Number of answer records.
    pub an_count: u16,

    /// Number of authority records.
    pub ns_count: u16,

    /// Number of additional records.
    pub ar_count: u16,
}

impl Header {
    /// Creates a new header with the given message ID.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Creates a query header with a random ID and recursion requested.
    pub fn query() -> Self {
        Self {
            id: rand::random(),
            flags: HeaderFlags::RD,
            qd_count: 1,
            ..Self::default()
        }
    }

    /// Creates a response header matching a query header.
    pub fn response_from(query: &Header) -> Self {
        Self {
            id: query.id,
            flags: HeaderFlags::QR | (query.flags & HeaderFlags::RD),
            opcode: query.opcode,
            qd_count: query.qd_count,
            ..Self::default()
        }
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        !self.flags.contains(HeaderFlags::QR)
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.flags.contains(HeaderFlags::QR)
    }

    /// Returns true if the response is authoritative.
    #[inline]
    pub fn is_authoritative(&self) -> bool {
        self.flags.contains(HeaderFlags::AA)
    }

    /// Returns true if the message was truncated.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.flags.contains(HeaderFlags::TC)
    }

    /// Returns true if recursion was requested.
    #[inline]
    pub fn recursion_desired(&self) -> bool {
        self.flags.contains(HeaderFlags::RD)
    }

    /// Returns true if recursion is available.
    #[inline]
    pub fn recursion_available(&self) -> bool {
        self.flags.contains(HeaderFlags::RA)
    }

    /// Sets or clears the QR flag.
    #[inline]
    pub fn set_response(&mut self, response: bool) {
        self.flags.set(HeaderFlags::QR, response);
    }

    /// Returns the typed opcode, if the raw value is assigned.
    #[inline]
    pub fn opcode(&self) -> Option<OpCode> {
        OpCode::from_u8(self.opcode)
    }

    /// Returns the raw 4-bit opcode value.
    #[inline]
    pub const fn opcode_value(&self) -> u8 {
        self.opcode
    }

    /// Sets the opcode.
    #[inline]
    pub fn set_opcode(&mut self, opcode: OpCode) {
        self.opcode = opcode.to_u8();
    }

    /// Sets the raw opcode value (masked to 4 bits).
    #[inline]
    pub fn set_opcode_value(&mut self, value: u8) {
        self.opcode = value & 0x0F;
    }

    /// Returns the typed response code, if the raw value is assigned.
    #[inline]
    pub fn rcode(&self) -> Option<ResponseCode> {
        ResponseCode::from_u8(self.rcode)
    }

    /// Returns the raw 4-bit response code value.
    #[inline]
    pub const fn rcode_value(&self) -> u8 {
        self.rcode
    }

    /// Sets the response code.
    #[inline]
    pub fn set_rcode(&mut self, rcode: ResponseCode) {
        self.rcode = rcode.to_u8();
    }

    /// Sets the raw response code value (masked to 4 bits).
    #[inline]
    pub fn set_rcode_value(&mut self, value: u8) {
        self.rcode = value & 0x0F;
    }

    /// Returns the total record count across the three record sections.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.an_count as usize + self.ns_count as usize + self.ar_count as usize
    }

    /// Reads a header from the wire.
    pub fn decode(reader: &mut WireReader<'_>) -> Self {
        let id = reader.read_u16();
        let fields = reader.read_u16();

        let flags = HeaderFlags::from_bits_truncate(fields);
        let opcode = ((fields >> 11) & 0x0F) as u8;
        let rcode = (fields & 0x0F) as u8;

        let qd_count = reader.read_u16();
        let an_count = reader.read_u16();
        let ns_count = reader.read_u16();
        let ar_count = reader.read_u16();

        Self {
            id,
            flags,
            opcode,
            rcode,
            qd_count,
            an_count,
            ns_count,
            ar_count,
        }
    }

    /// Writes the header to the wire.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_u16(self.id);

        let mut fields = self.flags.bits();
        fields |= u16::from(self.opcode & 0x0F) << 11;
        fields |= u16::from(self.rcode & 0x0F);
        writer.write_u16(fields);

        writer.write_u16(self.qd_count);
        writer.write_u16(self.an_count);
        writer.write_u16(self.ns_count);
        writer.write_u16(self.ar_count);
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{:04X} opcode:{} rcode:{}",
            self.id, self.opcode, self.rcode
        )?;

        if self.is_response() {
            write!(f, " QR")?;
        }
        if self.is_authoritative() {
            write!(f, " AA")?;
        }
        if self.is_truncated() {
            write!(f, " TC")?;
        }
        if self.recursion_desired() {
            write!(f, " RD")?;
        }
        if self.recursion_available() {
            write!(f, " RA")?;
        }

        write!(
            f,
            " QD:{} AN:{} NS:{} AR:{}",
            self.qd_count, self.an_count, self.ns_count, self.ar_count
        )
    }
}
