//! Unknown/opaque record type handling.

use crate::wire::{WireReader, WireWriter};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unknown record type - preserves raw RDATA.
///
/// Record types without explicit decoding support keep their RDATA as an
/// opaque byte run of exactly RDLENGTH bytes, re-encodable verbatim.
///
/// Per RFC 3597, unknown record data is rendered as
/// `\# <length> <hex-data>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unknown {
    /// The record type code.
    type_code: u16,
    /// The raw RDATA bytes.
    data: Vec<u8>,
}

impl Unknown {
    /// Creates a new unknown record payload.
    pub fn new(type_code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            type_code,
            data: data.into(),
        }
    }

    /// Returns the record type code.
    #[inline]
    pub const fn type_code(&self) -> u16 {
        self.type_code
    }

    /// Returns the raw RDATA.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RDATA as a hex string.
    pub fn data_hex(&self) -> String {
        HEXLOWER.encode(&self.data)
    }

    /// Reads exactly `data_size` bytes of opaque payload.
    pub fn decode(type_code: u16, reader: &mut WireReader<'_>, data_size: usize) -> Self {
        let data = reader
            .read_bytes(data_size)
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        Self { type_code, data }
    }

    /// Writes the opaque payload verbatim.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_bytes(&self.data);
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\# {} {}", self.data.len(), self.data_hex())
    }
}
