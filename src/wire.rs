//! Wire format buffers.
//!
//! This module provides the two cursor buffers the codec is built on: a
//! [`WireReader`] over a borrowed byte region and a [`WireWriter`] over a
//! caller-provided output region. Both carry a sticky error status: the
//! first failure latches the buffer, after which every read returns a
//! zero/empty value and every write is a no-op. Callers check
//! [`WireReader::status`] / [`WireWriter::finish`] once, at the message
//! boundary, instead of handling per-field errors.
//!
//! Domain names use the RFC 1035 compression scheme. A name on the wire
//! is a sequence of length-prefixed labels ending in a zero octet, or
//! ending in a two-octet pointer whose top bits are `11` and whose low 14
//! bits are an absolute offset from the start of the message:
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! | 1  1|                OFFSET                   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The reader chases pointers recursively and rejects cycles by tracking
//! the offsets at which a name read has been entered. The writer shares
//! suffixes by scanning the already-written output for a byte-exact
//! occurrence of each remaining suffix; the scan is a plain byte match
//! over the prior buffer and may therefore reuse any earlier occurrence,
//! not only label-aligned ones.

use crate::error::{Error, Result};
use crate::name::Name;
use crate::{MAX_DOMAIN_LEN, MAX_LABEL_LEN};
use smallvec::SmallVec;

/// A cursor for reading DNS wire format data.
///
/// Borrows the message bytes for the lifetime of the read. Not safe for
/// concurrent use; decode distinct inputs with distinct readers.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    /// The underlying data.
    data: &'a [u8],
    /// Current position.
    pos: usize,
    /// Sticky error status; the first failure wins.
    status: Option<Error>,
    /// Offsets at which a domain-name read has been entered, for
    /// compression loop detection.
    visited: SmallVec<[usize; 8]>,
}

impl<'a> WireReader<'a> {
    /// Creates a new wire reader over the given bytes.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            status: None,
            visited: SmallVec::new(),
        }
    }

    /// Returns the underlying data.
    #[inline]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the current cursor position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total capacity (input length).
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes between the cursor and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns the sticky error status, if any.
    #[inline]
    pub const fn status(&self) -> Option<Error> {
        self.status
    }

    /// Returns true if no error has been latched.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.status.is_none()
    }

    /// Latches an error. The first error wins; later calls are no-ops.
    #[inline]
    pub fn fail(&mut self, err: Error) {
        if self.status.is_none() {
            self.status = Some(err);
        }
    }

    /// Sets the cursor position. Fails if `pos` is past the end.
    pub fn seek(&mut self, pos: usize) {
        if self.status.is_some() {
            return;
        }
        if pos > self.data.len() {
            self.fail(Error::BufferOverflow);
            return;
        }
        self.pos = pos;
    }

    /// Advances the cursor by `n`, returning the previous position.
    ///
    /// Returns `None` and latches `BufferOverflow` if the cursor would
    /// escape the capacity; the cursor is left unchanged.
    fn advance(&mut self, n: usize) -> Option<usize> {
        if self.status.is_some() {
            return None;
        }
        match self.pos.checked_add(n) {
            Some(end) if end <= self.data.len() => {
                let start = self.pos;
                self.pos = end;
                Some(start)
            }
            _ => {
                self.fail(Error::BufferOverflow);
                None
            }
        }
    }

    /// Reads a single byte (0 once poisoned).
    #[inline]
    pub fn read_u8(&mut self) -> u8 {
        self.advance(1).map(|p| self.data[p]).unwrap_or(0)
    }

    /// Reads a big-endian u16 (0 once poisoned).
    #[inline]
    pub fn read_u16(&mut self) -> u16 {
        self.advance(2)
            .map(|p| u16::from_be_bytes([self.data[p], self.data[p + 1]]))
            .unwrap_or(0)
    }

    /// Reads a big-endian u32 (0 once poisoned).
    #[inline]
    pub fn read_u32(&mut self) -> u32 {
        self.advance(4)
            .map(|p| u32::from_be_bytes(self.data[p..p + 4].try_into().unwrap()))
            .unwrap_or(0)
    }

    /// Reads `n` bytes, returning a borrowed view and advancing the
    /// cursor. Returns `None` on overflow.
    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> Option<&'a [u8]> {
        self.advance(n).map(|p| &self.data[p..p + n])
    }

    /// Reads an RFC 1035 `<character-string>`: a u8 length then that many
    /// bytes, byte-exact. A zero length yields an empty value.
    pub fn read_char_string(&mut self) -> Vec<u8> {
        let len = self.read_u8() as usize;
        let mut value = Vec::new();
        if len > 0 {
            if let Some(bytes) = self.read_bytes(len) {
                value.extend_from_slice(bytes);
            }
        }
        value
    }

    /// Reads an RFC 1035 `<domain-name>`, following compression pointers.
    ///
    /// With `compression_allowed` false a pointer latches
    /// [`Error::LabelCompressionDisallowed`] (some RDATA formats, such as
    /// the NAPTR replacement, forbid compression). A pointer cycle
    /// latches [`Error::LabelCompressionLoop`]. The partial name
    /// assembled before a failure is returned but must be discarded by
    /// the caller along with everything else from a poisoned buffer.
    pub fn read_domain_name(&mut self, compression_allowed: bool) -> Name {
        let mut text = SmallVec::<[u8; 64]>::new();
        self.read_domain_name_into(compression_allowed, &mut text);
        Name::from_dotted(text)
    }

    fn read_domain_name_into(
        &mut self,
        compression_allowed: bool,
        text: &mut SmallVec<[u8; 64]>,
    ) {
        if self.status.is_some() {
            return;
        }

        // Entering a second time at the same offset means the pointers
        // form a cycle.
        if self.visited.contains(&self.pos) {
            self.fail(Error::LabelCompressionLoop);
            return;
        }
        self.visited.push(self.pos);

        loop {
            let ctrl = self.read_u8();

            // Zero terminates the name (also taken once poisoned, since
            // reads then return zero).
            if ctrl == 0 {
                break;
            }

            // Top two bits set: compression pointer.
            if ctrl >> 6 == 0b11 {
                if !compression_allowed {
                    self.fail(Error::LabelCompressionDisallowed);
                    return;
                }

                let low = self.read_u8();
                let target = ((ctrl as usize & 0x3F) << 8) + low as usize;

                let save = self.pos;
                self.seek(target);
                let mut tail = SmallVec::new();
                self.read_domain_name_into(true, &mut tail);
                self.seek(save);

                if !text.is_empty() {
                    text.push(b'.');
                }
                text.extend_from_slice(&tail);

                // A pointer always ends the name; there is no zero octet
                // after it.
                break;
            }

            // Otherwise a label of 1..=63 bytes. This also rejects the
            // reserved 01/10 control patterns, whose values exceed 63.
            if ctrl as usize > MAX_LABEL_LEN {
                self.fail(Error::LabelTooLong);
                return;
            }

            if !text.is_empty() {
                text.push(b'.');
            }
            match self.read_bytes(ctrl as usize) {
                Some(bytes) => text.extend_from_slice(bytes),
                None => return,
            }
        }

        self.visited.pop();

        if text.len() > MAX_DOMAIN_LEN {
            self.fail(Error::DomainTooLong);
        }
    }
}

/// A cursor for writing DNS wire format data into a caller-provided
/// buffer.
///
/// The buffer's length is the capacity; an overflowing write latches
/// [`Error::BufferOverflow`] without touching memory past the end.
/// Partial output written before a failure is not rolled back and must be
/// treated as unusable.
#[derive(Debug)]
pub struct WireWriter<'a> {
    /// The output region.
    buf: &'a mut [u8],
    /// Current position.
    pos: usize,
    /// Sticky error status; the first failure wins.
    status: Option<Error>,
}

impl<'a> WireWriter<'a> {
    /// Creates a new wire writer over the given output region.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            status: None,
        }
    }

    /// Returns the current cursor position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the sticky error status, if any.
    #[inline]
    pub const fn status(&self) -> Option<Error> {
        self.status
    }

    /// Returns true if no error has been latched.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.status.is_none()
    }

    /// Latches an error. The first error wins; later calls are no-ops.
    #[inline]
    pub fn fail(&mut self, err: Error) {
        if self.status.is_none() {
            self.status = Some(err);
        }
    }

    /// Consumes the writer, returning the number of bytes written or the
    /// latched error.
    #[inline]
    pub fn finish(self) -> Result<usize> {
        match self.status {
            Some(err) => Err(err),
            None => Ok(self.pos),
        }
    }

    /// Sets the cursor position. Fails if `pos` is past the capacity.
    pub fn seek(&mut self, pos: usize) {
        if self.status.is_some() {
            return;
        }
        if pos > self.buf.len() {
            self.fail(Error::BufferOverflow);
            return;
        }
        self.pos = pos;
    }

    fn advance(&mut self, n: usize) -> Option<usize> {
        if self.status.is_some() {
            return None;
        }
        match self.pos.checked_add(n) {
            Some(end) if end <= self.buf.len() => {
                let start = self.pos;
                self.pos = end;
                Some(start)
            }
            _ => {
                self.fail(Error::BufferOverflow);
                None
            }
        }
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        if let Some(p) = self.advance(1) {
            self.buf[p] = value;
        }
    }

    /// Writes a big-endian u16.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        if let Some(p) = self.advance(2) {
            self.buf[p..p + 2].copy_from_slice(&value.to_be_bytes());
        }
    }

    /// Writes a big-endian u32.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        if let Some(p) = self.advance(4) {
            self.buf[p..p + 4].copy_from_slice(&value.to_be_bytes());
        }
    }

    /// Writes a slice of bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        if let Some(p) = self.advance(bytes.len()) {
            self.buf[p..p + bytes.len()].copy_from_slice(bytes);
        }
    }

    /// Writes an RFC 1035 `<character-string>`: a u8 length then the
    /// bytes. The length must fit in a u8; validating that is the
    /// caller's responsibility, and a longer input truncates the length
    /// prefix.
    pub fn write_char_string(&mut self, value: &[u8]) {
        self.write_u8(value.len() as u8);
        self.write_bytes(value);
    }

    /// Writes an RFC 1035 `<domain-name>`, compressing against earlier
    /// output when allowed.
    ///
    /// The name is first canonicalized into `|len|bytes|...|0` form. With
    /// compression enabled, each suffix (outermost label first) is
    /// searched for in the already-written region; the first byte-exact
    /// occurrence at an offset below 2^14 is replaced by a pointer and
    /// ends the name. The empty name writes a single zero octet.
    pub fn write_domain_name(&mut self, name: &Name, compression_allowed: bool) {
        let text = name.as_bytes();

        if text.len() > MAX_DOMAIN_LEN {
            self.fail(Error::DomainTooLong);
            return;
        }
        if text.is_empty() {
            self.write_u8(0);
            return;
        }

        // Canonical wire form of the whole name, plus the offset of each
        // label within it so suffixes can be taken per label.
        let mut scratch = SmallVec::<[u8; 256]>::new();
        let mut label_starts = SmallVec::<[usize; 16]>::new();
        for label in text.split(|&b| b == b'.') {
            if label.len() > MAX_LABEL_LEN {
                self.fail(Error::LabelTooLong);
                return;
            }
            label_starts.push(scratch.len());
            scratch.push(label.len() as u8);
            scratch.extend_from_slice(label);
        }
        scratch.push(0);

        if !compression_allowed {
            self.write_bytes(&scratch);
            return;
        }

        for &start in &label_starts {
            let suffix = &scratch[start..];
            if let Some(k) = self.find_suffix(suffix) {
                self.write_u16(0xC000 | k as u16);
                return;
            }
            let label_len = scratch[start] as usize;
            self.write_bytes(&scratch[start..start + 1 + label_len]);
        }
        self.write_u8(0);
    }

    /// Scans the written region `[0, pos)` for the first byte-exact
    /// occurrence of `suffix` at a pointer-encodable offset.
    fn find_suffix(&self, suffix: &[u8]) -> Option<usize> {
        let written = &self.buf[..self.pos];
        if written.len() <= suffix.len() {
            return None;
        }
        let limit = (written.len() - suffix.len()).min(0x4000);
        (0..limit).find(|&k| &written[k..k + suffix.len()] == suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_reader_primitives() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u8(), 0x12);
        assert_eq!(reader.read_u16(), 0x3456);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.read_bytes(2), Some(&[0x78, 0x9A][..]));
        assert_eq!(reader.remaining(), 0);
        assert!(reader.is_ok());
    }

    #[test]
    fn test_reader_overflow_latches() {
        let data = [0x12, 0x34];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u32(), 0);
        assert_eq!(reader.status(), Some(Error::BufferOverflow));
        // The failed access leaves the cursor unchanged.
        assert_eq!(reader.position(), 0);

        // Everything after the latch is a zero-yielding no-op.
        assert_eq!(reader.read_u8(), 0);
        assert_eq!(reader.read_u16(), 0);
        assert_eq!(reader.read_bytes(1), None);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_reader_first_error_wins() {
        let mut reader = WireReader::new(&[]);
        reader.fail(Error::LabelTooLong);
        reader.fail(Error::InvalidData);
        assert_eq!(reader.status(), Some(Error::LabelTooLong));
    }

    #[test]
    fn test_reader_seek_bounds() {
        let data = [0u8; 4];
        let mut reader = WireReader::new(&data);

        reader.seek(4);
        assert!(reader.is_ok());

        reader.seek(5);
        assert_eq!(reader.status(), Some(Error::BufferOverflow));
    }

    #[test]
    fn test_read_char_string() {
        let data = [
            0x05, b'h', b'e', b'l', b'l', b'o', 0x00, b'a', b'h', b'o', b'j',
        ];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_char_string(), b"hello");
        assert_eq!(reader.read_char_string(), b"");
        assert!(reader.is_ok());
    }

    #[test]
    fn test_read_char_string_truncated() {
        let data = [0x05, b'h', b'i'];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_char_string(), b"");
        assert_eq!(reader.status(), Some(Error::BufferOverflow));
    }

    #[test]
    fn test_read_domain_name() {
        let data = b"\x03\x77\x77\x77\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00";
        let mut reader = WireReader::new(data);

        let name = reader.read_domain_name(true);
        assert!(reader.is_ok());
        assert_eq!(name.as_bytes(), b"www.google.com");
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_read_domain_name_root() {
        let mut reader = WireReader::new(&[0x00]);
        let name = reader.read_domain_name(true);
        assert!(reader.is_ok());
        assert!(name.is_root());
    }

    #[test]
    fn test_read_compressed_name() {
        // example.com at 0, www.<ptr 0> at 13
        let data = [
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, // offset 0
            3, b'w', b'w', b'w', 0xC0, 0x00, // offset 13
        ];
        let mut reader = WireReader::new(&data);

        let first = reader.read_domain_name(true);
        assert_eq!(first.as_bytes(), b"example.com");
        assert_eq!(reader.position(), 13);

        let second = reader.read_domain_name(true);
        assert!(reader.is_ok());
        assert_eq!(second.as_bytes(), b"www.example.com");
        // The cursor stops after the 2-byte pointer.
        assert_eq!(reader.position(), 19);
    }

    #[test]
    fn test_read_name_compression_loop() {
        // Self-referencing pointer.
        let data = [0xC0, 0x00];
        let mut reader = WireReader::new(&data);

        reader.read_domain_name(true);
        assert_eq!(reader.status(), Some(Error::LabelCompressionLoop));
    }

    #[test]
    fn test_read_name_pointer_cycle() {
        // Two pointers referencing each other.
        let data = [0xC0, 0x02, 0xC0, 0x00];
        let mut reader = WireReader::new(&data);

        reader.read_domain_name(true);
        assert_eq!(reader.status(), Some(Error::LabelCompressionLoop));
    }

    #[test]
    fn test_read_name_compression_disallowed() {
        let data = [3, b'w', b'w', b'w', 0xC0, 0x00];
        let mut reader = WireReader::new(&data);

        reader.read_domain_name(false);
        assert_eq!(reader.status(), Some(Error::LabelCompressionDisallowed));
    }

    #[test]
    fn test_read_name_label_too_long() {
        // 0x40 is both an over-long label length and a reserved control
        // pattern; either way the name is rejected.
        let data = [0x40, b'x'];
        let mut reader = WireReader::new(&data);

        reader.read_domain_name(true);
        assert_eq!(reader.status(), Some(Error::LabelTooLong));
    }

    #[test]
    fn test_read_name_domain_too_long() {
        // Five labels of 63 bytes: 4 * 64 + 4 dots > 255 in text form.
        let mut data = Vec::new();
        for _ in 0..5 {
            data.push(63);
            data.extend_from_slice(&[b'a'; 63]);
        }
        data.push(0);

        let mut reader = WireReader::new(&data);
        reader.read_domain_name(true);
        assert_eq!(reader.status(), Some(Error::DomainTooLong));
    }

    #[test]
    fn test_writer_primitives() {
        let mut buf = [0u8; 16];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_u8(0x12);
        writer.write_u16(0x3456);
        writer.write_u32(0x789A_BCDE);

        assert_eq!(writer.position(), 7);
        assert!(writer.is_ok());
        assert_eq!(&buf[..7], &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE]);
    }

    #[test]
    fn test_writer_overflow_latches() {
        let mut buf = [0u8; 4];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_u16(0x1234);
        writer.write_u32(0x5678_9ABC);
        assert_eq!(writer.status(), Some(Error::BufferOverflow));
        assert_eq!(writer.position(), 2);

        // No-op after the latch.
        writer.write_u8(0xFF);
        assert_eq!(writer.position(), 2);
        assert_eq!(buf, [0x12, 0x34, 0x00, 0x00]);
    }

    #[test]
    fn test_write_char_string() {
        let mut buf = [b'x'; 8];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_char_string(b"");
        assert_eq!(buf[0], 0x00);
        assert_eq!(buf[1], b'x');

        let mut writer = WireWriter::new(&mut buf);
        writer.write_char_string(b"ah");
        assert_eq!(&buf[..4], &[0x02, b'a', b'h', b'x']);
    }

    #[test]
    fn test_write_domain_name() {
        let mut buf = [b'x'; 16];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_domain_name(&Name::from_str("abc.com").unwrap(), true);
        assert!(writer.is_ok());
        assert_eq!(
            &buf[..10],
            &[3, b'a', b'b', b'c', 3, b'c', b'o', b'm', 0, b'x']
        );
    }

    #[test]
    fn test_write_empty_domain_name() {
        let mut buf = [b'x'; 4];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_domain_name(&Name::root(), true);
        assert_eq!(writer.position(), 1);
        assert_eq!(&buf[..2], &[0x00, b'x']);
    }

    #[test]
    fn test_write_domain_name_compression() {
        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_domain_name(&Name::from_str("example.com").unwrap(), true);
        assert_eq!(writer.position(), 13);

        // The whole second name shares the suffix written at offset 0.
        writer.write_domain_name(&Name::from_str("www.example.com").unwrap(), true);
        assert!(writer.is_ok());
        assert_eq!(writer.position(), 19);
        assert_eq!(&buf[13..19], &[3, b'w', b'w', b'w', 0xC0, 0x00]);

        // Both names survive a read back.
        let mut reader = WireReader::new(&buf[..19]);
        assert_eq!(reader.read_domain_name(true).as_bytes(), b"example.com");
        assert_eq!(
            reader.read_domain_name(true).as_bytes(),
            b"www.example.com"
        );
        assert!(reader.is_ok());
    }

    #[test]
    fn test_write_domain_name_full_pointer() {
        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_domain_name(&Name::from_str("example.com").unwrap(), true);
        // Unrelated fields between the two name occurrences, as in a
        // real record.
        writer.write_u16(0x0001);
        let pos = writer.position();

        // The repeated name collapses to a single pointer.
        writer.write_domain_name(&Name::from_str("example.com").unwrap(), true);
        assert_eq!(writer.position(), pos + 2);
        assert_eq!(&buf[pos..pos + 2], &[0xC0, 0x00]);
    }

    #[test]
    fn test_write_domain_name_uncompressed() {
        let mut buf = [0u8; 32];
        let mut writer = WireWriter::new(&mut buf);

        writer.write_domain_name(&Name::from_str("abc.com").unwrap(), false);
        let first_len = writer.position();

        // With compression disabled the repeat is written verbatim.
        writer.write_domain_name(&Name::from_str("abc.com").unwrap(), false);
        assert!(writer.is_ok());
        assert_eq!(writer.position(), first_len * 2);
        assert_eq!(&buf[..first_len], &buf[first_len..first_len * 2]);
    }

    #[test]
    fn test_write_domain_name_label_too_long() {
        // Built from raw parts so the writer itself has to enforce the
        // label limit.
        let mut text = SmallVec::new();
        text.extend_from_slice(&[b'a'; 64]);
        let name = Name::from_dotted(text);

        let mut buf = [0u8; 128];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_domain_name(&name, true);
        assert_eq!(writer.status(), Some(Error::LabelTooLong));
    }

    #[test]
    fn test_write_domain_name_too_long() {
        let mut text = SmallVec::new();
        for i in 0..64 {
            if i > 0 {
                text.push(b'.');
            }
            text.extend_from_slice(b"abcd");
        }
        assert!(text.len() > MAX_DOMAIN_LEN);
        let name = Name::from_dotted(text);

        let mut buf = [0u8; 512];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_domain_name(&name, true);
        assert_eq!(writer.status(), Some(Error::DomainTooLong));
    }

    #[test]
    fn test_back_patch_via_seek() {
        let mut buf = [0u8; 8];
        let mut writer = WireWriter::new(&mut buf);

        let mark = writer.position();
        writer.write_u16(0);
        writer.write_u32(0xAABB_CCDD);
        let end = writer.position();

        writer.seek(mark);
        writer.write_u16(4);
        writer.seek(end);

        assert!(writer.is_ok());
        assert_eq!(writer.position(), 6);
        assert_eq!(&buf[..6], &[0x00, 0x04, 0xAA, 0xBB, 0xCC, 0xDD]);
    }
}
