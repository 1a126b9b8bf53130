//! Service-related record types (SRV, NAPTR, WKS).

use crate::name::Name;
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::net::Ipv4Addr;

/// SRV record - Service locator (RFC 2782).
///
/// Used by protocols like SIP and XMPP to find service endpoints.
///
/// The target is carried as consecutive `<character-string>`s filling
/// the RDLENGTH window rather than as a compressed domain name, and is
/// written back as a single character string; see DESIGN.md for the
/// round-trip rationale behind this framing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SRV {
    /// Priority (lower is more preferred).
    priority: u16,
    /// Weight for load balancing among equal priorities.
    weight: u16,
    /// TCP/UDP port number.
    port: u16,
    /// Target host name.
    target: Name,
}

impl SRV {
    /// Creates a new SRV record.
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Returns the priority (lower = more preferred).
    #[inline]
    pub const fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight for load balancing.
    #[inline]
    pub const fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port number.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the target host name.
    #[inline]
    pub fn target(&self) -> &Name {
        &self.target
    }

    /// Reads an SRV record payload.
    pub fn decode(reader: &mut WireReader<'_>, data_size: usize) -> Self {
        let priority = reader.read_u16();
        let weight = reader.read_u16();
        let port = reader.read_u16();

        // The target fills the window after the three fixed fields as
        // consecutive character strings. A trailing empty piece is the
        // name terminator and is dropped; the rest join with dots.
        let window = data_size.saturating_sub(6);
        let start = reader.position();
        let mut pieces: Vec<Vec<u8>> = Vec::new();
        while reader.is_ok() && reader.position() - start < window {
            pieces.push(reader.read_char_string());
        }
        if pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
        }

        let mut text = SmallVec::<[u8; 64]>::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                text.push(b'.');
            }
            text.extend_from_slice(piece);
        }

        Self {
            priority,
            weight,
            port,
            target: Name::from_dotted(text),
        }
    }

    /// Writes the SRV record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_u16(self.priority);
        writer.write_u16(self.weight);
        writer.write_u16(self.port);
        writer.write_char_string(self.target.as_bytes());
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// NAPTR record - Naming authority pointer (RFC 3403).
///
/// Used for URI scheme routing and other DDDS applications. The
/// replacement name is always uncompressed; a compression pointer inside
/// it poisons the buffer with
/// [`LabelCompressionDisallowed`](crate::Error::LabelCompressionDisallowed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NAPTR {
    /// Order (lower = processed first).
    order: u16,
    /// Preference among equal order values.
    preference: u16,
    /// Flags controlling interpretation.
    flags: Vec<u8>,
    /// Service field.
    services: Vec<u8>,
    /// Regular expression for rewriting.
    regexp: Vec<u8>,
    /// Replacement domain name (never compressed).
    replacement: Name,
}

impl NAPTR {
    /// Creates a new NAPTR record.
    pub fn new(
        order: u16,
        preference: u16,
        flags: impl Into<Vec<u8>>,
        services: impl Into<Vec<u8>>,
        regexp: impl Into<Vec<u8>>,
        replacement: Name,
    ) -> Self {
        Self {
            order,
            preference,
            flags: flags.into(),
            services: services.into(),
            regexp: regexp.into(),
            replacement,
        }
    }

    /// Returns the order value.
    #[inline]
    pub const fn order(&self) -> u16 {
        self.order
    }

    /// Returns the preference value.
    #[inline]
    pub const fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the flags.
    pub fn flags(&self) -> &[u8] {
        &self.flags
    }

    /// Returns the service field.
    pub fn services(&self) -> &[u8] {
        &self.services
    }

    /// Returns the rewrite expression.
    pub fn regexp(&self) -> &[u8] {
        &self.regexp
    }

    /// Returns the replacement domain name.
    pub fn replacement(&self) -> &Name {
        &self.replacement
    }

    /// Reads a NAPTR record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            order: reader.read_u16(),
            preference: reader.read_u16(),
            flags: reader.read_char_string(),
            services: reader.read_char_string(),
            regexp: reader.read_char_string(),
            replacement: reader.read_domain_name(false),
        }
    }

    /// Writes the NAPTR record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_u16(self.order);
        writer.write_u16(self.preference);
        writer.write_char_string(&self.flags);
        writer.write_char_string(&self.services);
        writer.write_char_string(&self.regexp);
        writer.write_domain_name(&self.replacement, false);
    }
}

impl fmt::Display for NAPTR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\" \"{}\" \"{}\" {}",
            self.order,
            self.preference,
            String::from_utf8_lossy(&self.flags),
            String::from_utf8_lossy(&self.services),
            String::from_utf8_lossy(&self.regexp),
            self.replacement
        )
    }
}

/// WKS record - Well-known service description (RFC 1035).
///
/// An IPv4 address, an IP protocol number, and a bitmap with one bit per
/// port. The bitmap spans whatever remains of the RDLENGTH window and is
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WKS {
    /// The host address.
    address: Ipv4Addr,
    /// IP protocol number (e.g. 6 for TCP).
    protocol: u8,
    /// Service bitmap, one bit per port.
    bitmap: Vec<u8>,
}

impl WKS {
    /// Creates a new WKS record.
    pub fn new(address: Ipv4Addr, protocol: u8, bitmap: impl Into<Vec<u8>>) -> Self {
        Self {
            address,
            protocol,
            bitmap: bitmap.into(),
        }
    }

    /// Returns the host address.
    #[inline]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Returns the IP protocol number.
    #[inline]
    pub const fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Returns the service bitmap.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Reads a WKS record payload.
    pub fn decode(reader: &mut WireReader<'_>, data_size: usize) -> Self {
        let address = reader
            .read_bytes(4)
            .map(|b| Ipv4Addr::from(<[u8; 4]>::try_from(b).unwrap()))
            .unwrap_or(Ipv4Addr::UNSPECIFIED);
        let protocol = reader.read_u8();

        let bitmap_len = data_size.saturating_sub(5);
        let bitmap = reader
            .read_bytes(bitmap_len)
            .map(<[u8]>::to_vec)
            .unwrap_or_default();

        Self {
            address,
            protocol,
            bitmap,
        }
    }

    /// Writes the WKS record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_bytes(&self.address.octets());
        writer.write_u8(self.protocol);
        writer.write_bytes(&self.bitmap);
    }
}

impl fmt::Display for WKS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} bitmap[{}]",
            self.address,
            self.protocol,
            self.bitmap.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::str::FromStr;

    #[test]
    fn test_srv_decode() {
        // 20 0 5269 alt2.xmpp-server.l.google.com
        let data = b"\x00\x14\x00\x00\x14\x95\x04\x61\x6c\x74\x32\x0b\x78\x6d\x70\x70\x2d\x73\x65\x72\x76\x65\x72\x01\x6c\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00";
        let mut reader = WireReader::new(data);
        let srv = SRV::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert_eq!(srv.priority(), 20);
        assert_eq!(srv.weight(), 0);
        assert_eq!(srv.port(), 5269);
        assert_eq!(srv.target().as_bytes(), b"alt2.xmpp-server.l.google.com");
    }

    #[test]
    fn test_srv_roundtrip_own_encoding() {
        // The encoder frames the target as one character string; decoding
        // that framing must produce the same record.
        let srv = SRV::new(
            10,
            5,
            5060,
            Name::from_str("sip.example.com").unwrap(),
        );

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        srv.encode(&mut writer);
        let len = writer.finish().unwrap();
        assert_eq!(len, 6 + 1 + 15);

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = SRV::decode(&mut reader, len);
        assert!(reader.is_ok());
        assert_eq!(parsed, srv);
    }

    #[test]
    fn test_naptr_decode() {
        // order=50 pref=51 flags="s" services="SIP+D2T" regexp=""
        // replacement=_sip._tcp.icscf.brn56.iit.ims
        let data = b"\x00\x32\x00\x33\x01\x73\x07\x53\x49\x50\x2b\x44\x32\x54\x00\x04\x5f\x73\x69\x70\x04\x5f\x74\x63\x70\x05\x69\x63\x73\x63\x66\x05\x62\x72\x6e\x35\x36\x03\x69\x69\x74\x03\x69\x6d\x73\x00";
        let mut reader = WireReader::new(data);
        let naptr = NAPTR::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert_eq!(naptr.order(), 50);
        assert_eq!(naptr.preference(), 51);
        assert_eq!(naptr.flags(), b"s");
        assert_eq!(naptr.services(), b"SIP+D2T");
        assert!(naptr.regexp().is_empty());
        assert_eq!(
            naptr.replacement().as_bytes(),
            b"_sip._tcp.icscf.brn56.iit.ims"
        );
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_naptr_rejects_compressed_replacement() {
        // Same record but the replacement is a compression pointer.
        let data = b"\x00\x32\x00\x33\x01\x73\x07\x53\x49\x50\x2b\x44\x32\x54\x00\xc0\x00";
        let mut reader = WireReader::new(data);
        NAPTR::decode(&mut reader, data.len());

        assert_eq!(reader.status(), Some(Error::LabelCompressionDisallowed));
    }

    #[test]
    fn test_naptr_roundtrip() {
        let naptr = NAPTR::new(
            50,
            51,
            "s",
            "SIP+D2T",
            "",
            Name::from_str("_sip._tcp.icscf.brn56.iit.ims").unwrap(),
        );

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        naptr.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = NAPTR::decode(&mut reader, len);
        assert!(reader.is_ok());
        assert_eq!(parsed, naptr);
        assert_eq!(reader.position(), len);
    }

    #[test]
    fn test_wks_decode() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xAA, 0xFF, 0xEF];
        let mut reader = WireReader::new(&data);
        let wks = WKS::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert_eq!(wks.address(), Ipv4Addr::new(1, 2, 3, 4));
        assert_eq!(wks.protocol(), 0xAA);
        assert_eq!(wks.bitmap(), &[0xFF, 0xEF]);
    }

    #[test]
    fn test_wks_roundtrip() {
        let wks = WKS::new(Ipv4Addr::new(10, 0, 0, 1), 6, vec![0x80, 0x01]);

        let mut buf = [0u8; 16];
        let mut writer = WireWriter::new(&mut buf);
        wks.encode(&mut writer);
        let len = writer.finish().unwrap();
        assert_eq!(len, 7);

        let mut reader = WireReader::new(&buf[..len]);
        assert_eq!(WKS::decode(&mut reader, len), wks);
    }

    #[test]
    fn test_wks_empty_bitmap() {
        let data = [10, 0, 0, 1, 6];
        let mut reader = WireReader::new(&data);
        let wks = WKS::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert!(wks.bitmap().is_empty());
    }
}
