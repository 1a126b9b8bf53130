//! Text-based record types (TXT, HINFO, MINFO).

use crate::name::Name;
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// TXT record - Text strings (RFC 1035).
///
/// Holds one or more `<character-string>`s, each up to 255 bytes,
/// commonly used for SPF, DKIM and domain verification data. The strings
/// are binary and preserved byte-exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TXT {
    /// The text strings (each up to 255 bytes).
    strings: SmallVec<[Vec<u8>; 2]>,
}

impl TXT {
    /// Creates a new TXT record with the given strings.
    pub fn new(strings: impl IntoIterator<Item = impl Into<Vec<u8>>>) -> Self {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a TXT record from a single string.
    pub fn from_string(s: impl Into<Vec<u8>>) -> Self {
        Self {
            strings: smallvec::smallvec![s.into()],
        }
    }

    /// Returns the text strings.
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// Returns all strings concatenated, the semantic value for
    /// protocols that span multiple character-strings.
    pub fn data(&self) -> Vec<u8> {
        self.strings
            .iter()
            .flat_map(|s| s.iter().copied())
            .collect()
    }

    /// Returns the concatenated data as a UTF-8 string if valid.
    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.data()).ok()
    }

    /// Reads a TXT record payload.
    ///
    /// Character strings are read until the cursor has advanced
    /// `data_size` bytes from the start of the payload, or the buffer is
    /// poisoned.
    pub fn decode(reader: &mut WireReader<'_>, data_size: usize) -> Self {
        let mut strings = SmallVec::new();
        let start = reader.position();
        while reader.is_ok() && reader.position() - start < data_size {
            strings.push(reader.read_char_string());
        }
        Self { strings }
    }

    /// Writes the TXT record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        for s in &self.strings {
            writer.write_char_string(s);
        }
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for s in &self.strings {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "\"{}\"", String::from_utf8_lossy(s))?;
        }
        Ok(())
    }
}

/// HINFO record - Host information (RFC 1035).
///
/// Two character strings naming the CPU type and operating system.
/// Rarely published today for security reasons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HINFO {
    /// CPU type.
    cpu: Vec<u8>,
    /// Operating system.
    os: Vec<u8>,
}

impl HINFO {
    /// Creates a new HINFO record.
    pub fn new(cpu: impl Into<Vec<u8>>, os: impl Into<Vec<u8>>) -> Self {
        Self {
            cpu: cpu.into(),
            os: os.into(),
        }
    }

    /// Returns the CPU type.
    pub fn cpu(&self) -> &[u8] {
        &self.cpu
    }

    /// Returns the operating system.
    pub fn os(&self) -> &[u8] {
        &self.os
    }

    /// Reads an HINFO record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            cpu: reader.read_char_string(),
            os: reader.read_char_string(),
        }
    }

    /// Writes the HINFO record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_char_string(&self.cpu);
        writer.write_char_string(&self.os);
    }
}

impl fmt::Display for HINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" \"{}\"",
            String::from_utf8_lossy(&self.cpu),
            String::from_utf8_lossy(&self.os)
        )
    }
}

/// MINFO record - Mailbox or mail list information (RFC 1035).
///
/// Two compressed domain names: the responsible mailbox and the error
/// mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MINFO {
    /// Mailbox responsible for the mailing list or mailbox.
    rmailbx: Name,
    /// Mailbox to receive error messages.
    emailbx: Name,
}

impl MINFO {
    /// Creates a new MINFO record.
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Self { rmailbx, emailbx }
    }

    /// Returns the responsible mailbox name.
    #[inline]
    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    /// Returns the error mailbox name.
    #[inline]
    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }

    /// Reads a MINFO record payload.
    pub fn decode(reader: &mut WireReader<'_>, _data_size: usize) -> Self {
        Self {
            rmailbx: reader.read_domain_name(true),
            emailbx: reader.read_domain_name(true),
        }
    }

    /// Writes the MINFO record payload.
    pub fn encode(&self, writer: &mut WireWriter<'_>) {
        writer.write_domain_name(&self.rmailbx, true);
        writer.write_domain_name(&self.emailbx, true);
    }
}

impl fmt::Display for MINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_txt_decode_window() {
        // Two strings exactly filling the window.
        let data = [0x02, 0x65, 0x65, 0x03, 0x64, 0x64, 0x64];
        let mut reader = WireReader::new(&data);
        let txt = TXT::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert_eq!(txt.strings(), &[b"ee".to_vec(), b"ddd".to_vec()]);
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_txt_decode_includes_empty_strings() {
        // A zero length byte inside the window is an empty string, not a
        // terminator.
        let data = [0x02, 0x65, 0x65, 0x00];
        let mut reader = WireReader::new(&data);
        let txt = TXT::decode(&mut reader, data.len());

        assert!(reader.is_ok());
        assert_eq!(txt.strings(), &[b"ee".to_vec(), b"".to_vec()]);
    }

    #[test]
    fn test_txt_roundtrip() {
        let txt = TXT::new(vec!["v=spf1 ", "include:example.com ~all"]);

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        txt.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        assert_eq!(TXT::decode(&mut reader, len), txt);
    }

    #[test]
    fn test_txt_data_concatenation() {
        let txt = TXT::new(vec!["Hello, ", "World!"]);
        assert_eq!(txt.data(), b"Hello, World!");
        assert_eq!(txt.text(), Some("Hello, World!".to_string()));
        assert_eq!(txt.strings().len(), 2);
    }

    #[test]
    fn test_hinfo_roundtrip() {
        let hinfo = HINFO::new("Intel", "Linux");

        let mut buf = [0u8; 16];
        let mut writer = WireWriter::new(&mut buf);
        hinfo.encode(&mut writer);
        let len = writer.finish().unwrap();
        assert_eq!(len, 12);

        let mut reader = WireReader::new(&buf[..len]);
        let parsed = HINFO::decode(&mut reader, len);
        assert_eq!(parsed, hinfo);
        assert_eq!(parsed.cpu(), b"Intel");
        assert_eq!(parsed.os(), b"Linux");
    }

    #[test]
    fn test_minfo_roundtrip() {
        let minfo = MINFO::new(
            Name::from_str("admin.example.com").unwrap(),
            Name::from_str("errors.example.com").unwrap(),
        );

        let mut buf = [0u8; 64];
        let mut writer = WireWriter::new(&mut buf);
        minfo.encode(&mut writer);
        let len = writer.finish().unwrap();

        let mut reader = WireReader::new(&buf[..len]);
        assert_eq!(MINFO::decode(&mut reader, len), minfo);
    }
}
