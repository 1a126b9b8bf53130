//! Codec error types.
//!
//! Errors double as the sticky status carried by the wire buffers: the
//! first failure latches a buffer and every later operation on it becomes
//! a no-op. Callers inspect the status at well-defined checkpoints (the
//! end of a message decode or encode) rather than per field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Codec errors.
///
/// Each variant is a terminal condition: once one is raised on a buffer,
/// the buffer stays poisoned and partial results must be discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Error {
    /// The cursor would escape the buffer capacity.
    #[error("buffer overflow: cursor would escape the buffer capacity")]
    BufferOverflow,

    /// Framing mismatch: an RDATA decoder consumed a number of bytes
    /// different from its RDLENGTH, or a message carried trailing bytes.
    #[error("invalid data: framing does not match the bytes consumed")]
    InvalidData,

    /// A compression pointer cycle was detected while reading a name.
    #[error("label compression loop detected")]
    LabelCompressionLoop,

    /// A compression pointer appeared where the record format forbids it
    /// (e.g. the NAPTR replacement field).
    #[error("label compression used where it is not allowed")]
    LabelCompressionDisallowed,

    /// A label exceeds the 63 octet maximum.
    #[error("label too long: exceeds the 63 octet maximum")]
    LabelTooLong,

    /// A domain name exceeds the 255 octet maximum.
    #[error("domain name too long: exceeds the 255 octet maximum")]
    DomainTooLong,

    /// The input exceeds the 512 byte UDP message limit.
    #[error("message too long: exceeds the 512 byte limit")]
    MessageTooLong,
}

impl Error {
    /// Returns true if this error was raised while handling a domain name.
    #[inline]
    pub const fn is_name_error(self) -> bool {
        matches!(
            self,
            Self::LabelCompressionLoop
                | Self::LabelCompressionDisallowed
                | Self::LabelTooLong
                | Self::DomainTooLong
        )
    }

    /// Returns true if this error indicates a malformed or truncated
    /// message that should be dropped.
    #[inline]
    pub const fn is_malformed(self) -> bool {
        matches!(
            self,
            Self::BufferOverflow | Self::InvalidData | Self::LabelCompressionLoop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::LabelTooLong.to_string(),
            "label too long: exceeds the 63 octet maximum"
        );
        assert_eq!(
            Error::MessageTooLong.to_string(),
            "message too long: exceeds the 512 byte limit"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::LabelCompressionLoop.is_name_error());
        assert!(Error::DomainTooLong.is_name_error());
        assert!(!Error::BufferOverflow.is_name_error());

        assert!(Error::BufferOverflow.is_malformed());
        assert!(Error::InvalidData.is_malformed());
        assert!(!Error::LabelTooLong.is_malformed());
    }
}
