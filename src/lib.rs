//! # dnswire
//!
//! A DNS wire-format codec following RFC 1035 and its extensions.
//!
//! This crate converts DNS messages between their on-the-wire byte
//! representation and a structured in-memory form. It is a pure,
//! single-threaded library: no sockets, no timers, no logging. Callers
//! own all I/O and hand the codec byte buffers.
//!
//! ## Features
//!
//! - **RFC 1035 message format** with name compression on both the read
//!   path (pointer chasing with loop detection) and the write path
//!   (best-effort suffix sharing)
//! - **Classic record types** (A, NS, CNAME, SOA, MX, TXT, HINFO, MINFO,
//!   WKS, PTR and the mailbox family) plus AAAA (RFC 3596), SRV
//!   (RFC 2782), NAPTR (RFC 3403) and the OPT pseudo-record envelope
//!   (RFC 6891)
//! - **Unknown record types** preserved verbatim and re-encodable
//! - **Latching error model**: the first failure poisons a buffer and
//!   short-circuits everything after it; callers check one status at the
//!   message boundary
//!
//! ## Example
//!
//! ```rust
//! use dnswire::{Message, Name, Question};
//! use std::str::FromStr;
//!
//! // Build a query and encode it into a caller-provided buffer.
//! let query = Message::query(Question::a(Name::from_str("example.com").unwrap()));
//! let mut buf = [0u8; dnswire::MAX_MSG_LEN];
//! let len = query.encode(&mut buf).unwrap();
//!
//! // Decode it back.
//! let parsed = Message::decode(&buf[..len]).unwrap();
//! assert_eq!(parsed.id(), query.id());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;
pub mod rcode;
pub mod rdata;
pub mod record;
pub mod rtype;
pub mod wire;

// Re-exports for convenience
pub use class::{Class, RecordClass};
pub use error::{Error, Result};
pub use header::{Header, HeaderFlags};
pub use message::Message;
pub use name::Name;
pub use opcode::OpCode;
pub use question::Question;
pub use rcode::ResponseCode;
pub use rdata::RData;
pub use record::ResourceRecord;
pub use rtype::{RecordType, Type};
pub use wire::{WireReader, WireWriter};

/// Maximum length of a DNS label (63 octets per RFC 1035).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a domain name (255 octets per RFC 1035).
pub const MAX_DOMAIN_LEN: usize = 255;

/// Maximum size of a UDP DNS message without EDNS0 (512 bytes per RFC 1035).
///
/// [`Message::decode`] refuses inputs larger than this.
pub const MAX_MSG_LEN: usize = 512;
