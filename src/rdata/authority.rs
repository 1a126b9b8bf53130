//! Authority record types (SOA).

use crate::name::Name;
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SOA record - Start of a zone of authority (RFC 1035).
///
/// # Wire Format
///
/// Two compressed domain names (MNAME, RNAME) followed by five unsigned
/// 32-bit values (SERIAL, REFRESH, RETRY, EXPIRE, MINIMUM).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SOA {
    /// Primary name server for the zone.
    mname: Name,
    /// Mailbox of the responsible person (@ encoded as the first dot).
    rname: Name,
    /// Zone serial number.
    serial: u32,
    /// Refresh interval in seconds.
    refresh: u32,
    /// Retry interval in seconds.
    retry: u32,
    /// Expire time in seconds.
    expire: u32,
    /// Minimum TTL / negative caching TTL in seconds.
    minimum: u32,
}

impl SOA {
    /// Creates a new SOA record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Self {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// Returns the primary name server.
    #[inline]
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// Returns the responsible person's mailbox name.
    #[inline]
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// Returns the zone serial number.
    #[inline]
    pub const fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the refresh interval in seconds.
    #[inline]
    pub const fn refresh(&self) -> u32 {
        self.refresh
    }

    /// Returns the retry interval in seconds.
    #[inline]
    pub const fn retry(&self) -> u32 {
        self.retry
    }

    /// Returns the expire time in seconds.
    #[inline]
    pub const fn expire(&self) -> u32 {
        self.expire
    }

    /// Returns the minimum / negative caching TTL in seconds.
    #[inline]
    pub const fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Reads an SOA record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            mname: reader.read_domain_name(true),
            rname: reader.read_domain_name(true),
            serial: reader.read_u32(),
            refresh: reader.read_u32(),
            retry: reader.read_u32(),
            expire: reader.read_u32(),
            minimum: reader.read_u32(),
        }
    }

    /// Writes the SOA record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.mname, true);
        writer.write_domain_name(&self.rname, true);
        writer.write_u32(self.serial);
        writer.write_u32(self.refresh);
        writer.write_u32(self.retry);
        writer.write_u32(self.expire);
        writer.write_u32(self.minimum);
    }
}

impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire,
            self.minimum
        )
    }
}
