//! OPT pseudo-record payload (RFC 6891).

use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// OPT record - EDNS(0) pseudo-record payload (RFC 6891).
///
/// The OPT record repurposes the enclosing record's fields:
///
/// ```text
/// +------------+--------------+------------------------------+
/// | Field Name | Field Type   | Description                  |
/// +------------+--------------+------------------------------+
/// | NAME       | domain name  | MUST be 0 (root domain)      |
/// | TYPE       | u16          | OPT (41)                     |
/// | CLASS      | u16          | requestor's UDP payload size |
/// | TTL        | u32          | extended RCODE and flags     |
/// | RDLEN      | u16          | length of all RDATA          |
/// | RDATA      | octet stream | {attribute,value} pairs      |
/// +------------+--------------+------------------------------+
/// ```
///
/// The codec preserves the raw CLASS and TTL values on the enclosing
/// [`ResourceRecord`](crate::ResourceRecord) and never interprets them;
/// the option payload here is an inner u16-length-prefixed opaque blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct OPT {
    /// The raw option payload.
    data: Vec<u8>,
}

impl OPT {
    /// Creates a new OPT payload.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the raw option payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads an OPT record payload: an inner u16 length followed by that
    /// many opaque bytes, all within the RDLENGTH window.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        let inner_len = reader.read_u16() as usize;
        let data = reader
            .read_bytes(inner_len)
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        Self { data }
    }

    /// Writes the OPT record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_u16(self.data.len() as u16);
        writer.write_bytes(&self.data);
    }
}

impl fmt::Display for OPT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OPT len={}", self.data.len())
    }
}
