//! DNS domain name representation.
//!
//! A domain name is held as its dotted text form: label bytes joined with
//! `.`, with no trailing dot. The empty value denotes the root. Label
//! bytes are binary and preserved exactly as they appeared on the wire;
//! comparison is byte-exact (case-sensitive as stored).
//!
//! The wire form (length-prefixed labels, compression pointers) never
//! appears here; conversion lives in [`crate::wire`].

use crate::error::{Error, Result};
use crate::{MAX_DOMAIN_LEN, MAX_LABEL_LEN};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A DNS domain name in dotted text form.
///
/// # Example
///
/// ```rust
/// use dnswire::Name;
/// use std::str::FromStr;
///
/// let name = Name::from_str("www.example.com").unwrap();
/// assert_eq!(name.label_count(), 3);
///
/// // A single trailing dot is consumed.
/// assert_eq!(name, Name::from_str("www.example.com.").unwrap());
///
/// // Comparison is byte-exact.
/// assert_ne!(name, Name::from_str("WWW.EXAMPLE.COM").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    /// Dotted text bytes, no trailing dot. Empty means root.
    text: SmallVec<[u8; 64]>,
}

impl Name {
    /// Creates the root domain name.
    #[inline]
    pub fn root() -> Self {
        Self {
            text: SmallVec::new(),
        }
    }

    /// Creates a name from already-validated dotted bytes.
    ///
    /// Used by the wire reader, which enforces the label and name limits
    /// while assembling, and by the SRV target decoder, which reproduces
    /// the window contents verbatim.
    #[inline]
    pub(crate) fn from_dotted(text: SmallVec<[u8; 64]>) -> Self {
        Self { text }
    }

    /// Returns the dotted text bytes (no trailing dot, empty for root).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Returns the length of the dotted text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if this is the root domain.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this is the root domain (alias for [`is_root`]).
    ///
    /// [`is_root`]: Name::is_root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns an iterator over the label byte slices.
    ///
    /// The root name yields no labels.
    pub fn labels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let is_root = self.text.is_empty();
        self.text.split(|&b| b == b'.').filter(move |_| !is_root)
    }

    /// Returns the number of labels (0 for root).
    pub fn label_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.labels().count()
        }
    }
}

impl FromStr for Name {
    type Err = Error;

    /// Parses a name from dotted text.
    ///
    /// A single trailing dot is consumed; `""` and `"."` produce the
    /// root. Labels longer than 63 bytes or a total longer than 255
    /// bytes are rejected, as are empty labels anywhere else.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }

        let s = s.strip_suffix('.').unwrap_or(s);

        if s.len() > MAX_DOMAIN_LEN {
            return Err(Error::DomainTooLong);
        }

        for label in s.split('.') {
            if label.is_empty() {
                return Err(Error::InvalidData);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(Error::LabelTooLong);
            }
        }

        Ok(Self {
            text: SmallVec::from_slice(s.as_bytes()),
        })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            return write!(f, ".");
        }
        write!(f, "{}", String::from_utf8_lossy(&self.text))
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&String::from_utf8_lossy(&self.text))
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
