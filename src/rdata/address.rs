//! Address record types (A, AAAA).

use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A record - IPv4 host address (RFC 1035).
///
/// The RDATA is exactly 4 bytes, the address in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct A {
    /// The IPv4 address.
    address: Ipv4Addr,
}

impl A {
    /// Creates a new A record.
    #[inline]
    pub const fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }

    /// Returns the IPv4 address.
    #[inline]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Reads an A record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        let address = reader
            .read_bytes(4)
            .map(|b| Ipv4Addr::from(<[u8; 4]>::try_from(b).unwrap()))
            .unwrap_or(Ipv4Addr::UNSPECIFIED);
        Self { address }
    }

    /// Writes the A record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_bytes(&self.address.octets());
    }
}

impl From<Ipv4Addr> for A {
    fn from(address: Ipv4Addr) -> Self {
        Self::new(address)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// AAAA record - IPv6 host address (RFC 3596).
///
/// The RDATA is exactly 16 bytes, the address in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AAAA {
    /// The IPv6 address.
    address: Ipv6Addr,
}

impl AAAA {
    /// Creates a new AAAA record.
    #[inline]
    pub const fn new(address: Ipv6Addr) -> Self {
        Self { address }
    }

    /// Returns the IPv6 address.
    #[inline]
    pub const fn address(&self) -> Ipv6Addr {
        self.address
    }

    /// Reads an AAAA record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        let address = reader
            .read_bytes(16)
            .map(|b| Ipv6Addr::from(<[u8; 16]>::try_from(b).unwrap()))
            .unwrap_or(Ipv6Addr::UNSPECIFIED);
        Self { address }
    }

    /// Writes the AAAA record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_bytes(&self.address.octets());
    }
}

impl From<Ipv6Addr> for AAAA {
    fn from(address: Ipv6Addr) -> Self {
        Self::new(address)
    }
}

impl fmt::Display for AAAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
