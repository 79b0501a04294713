//! # latin1-view - Encoding Registry and Latin-1 Character Views
//!
//! A small registry of named character encodings with IANA alias
//! resolution, and zero-copy character views over byte buffers for the
//! single-byte encodings it supports.
//!
//! ## Features
//!
//! - **Zero-copy views**: characters are decoded from a shared buffer on demand
//! - **Composable slicing**: subsequences of subsequences share the same buffer
//! - **IANA aliases**: case-sensitive lookup of every registered spelling
//! - **Errors as values**: bad indices and ranges come back as [`Error`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use latin1_view::{Encoding, registry, to_char_sequence};
//!
//! let encoding = registry::resolve("latin1").unwrap();
//! assert_eq!(encoding, Encoding::ISO_8859_1);
//!
//! let text = to_char_sequence(vec![0x63, 0x61, 0x66, 0xE9], encoding);
//! assert_eq!(text.to_string(), "café");
//! assert_eq!(text.subsequence(1, 3).unwrap().to_string(), "af");
//! ```

#![deny(missing_docs)]

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

mod decoder;
mod latin1;
pub mod registry;
mod sequence;

pub use decoder::{Decoder, decode, to_char_sequence, to_chars};
pub use latin1::{Chars, Latin1Chars};
pub use sequence::CharSequence;

/// Result type for view and registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by character views and encoding lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index or slice boundary lies outside the view
    OutOfBounds {
        /// The offending index, start, or end
        index: isize,
    },
    /// A slice was requested with `start > end`
    InvalidRange {
        /// Requested start
        start: isize,
        /// Requested end
        end: isize,
    },
    /// No encoding is registered under this alias
    UnknownEncoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { index } => write!(f, "index out of bounds: {}", index),
            Error::InvalidRange { start, end } => {
                write!(f, "invalid range: {} > {}", start, end)
            }
            Error::UnknownEncoding(alias) => write!(f, "unknown encoding: {}", alias),
        }
    }
}

impl std::error::Error for Error {}

/// Supported character encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Encoding {
    /// ANSI X3.4-1986 (7-bit), RFC 2046
    US_ASCII,
    /// ISO-8859-1 (Latin-1) - Western European
    ISO_8859_1,
}

impl Encoding {
    /// Every supported encoding
    pub const ALL: [Encoding; 2] = [Encoding::US_ASCII, Encoding::ISO_8859_1];

    /// The IANA preferred MIME name
    pub fn mime_name(self) -> &'static str {
        match self {
            Encoding::US_ASCII => "US-ASCII",
            Encoding::ISO_8859_1 => "ISO-8859-1",
        }
    }

    /// The registered IANA name
    pub fn iana_name(self) -> &'static str {
        match self {
            Encoding::US_ASCII => "US-ASCII",
            Encoding::ISO_8859_1 => "ISO_8859-1:1987",
        }
    }

    /// Both names of this encoding
    pub fn metadata(self) -> EncodingInfo {
        EncodingInfo {
            mime_name: self.mime_name(),
            iana_name: self.iana_name(),
        }
    }

    /// Registered aliases of this encoding, including its own names
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        registry::aliases_of(self)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Resolve a case-sensitive IANA alias.
    fn from_str(s: &str) -> Result<Self> {
        registry::resolve(s).ok_or_else(|| Error::UnknownEncoding(s.to_string()))
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.mime_name())
    }
}

/// Names of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodingInfo {
    /// The IANA preferred MIME name
    pub mime_name: &'static str,
    /// The registered IANA name
    pub iana_name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_names() {
        assert_eq!(Encoding::US_ASCII.mime_name(), "US-ASCII");
        assert_eq!(Encoding::US_ASCII.iana_name(), "US-ASCII");
        assert_eq!(Encoding::ISO_8859_1.mime_name(), "ISO-8859-1");
        assert_eq!(Encoding::ISO_8859_1.iana_name(), "ISO_8859-1:1987");
        assert_eq!(Encoding::ISO_8859_1.to_string(), "ISO-8859-1");
    }

    #[test]
    fn test_metadata() {
        assert_eq!(
            Encoding::ISO_8859_1.metadata(),
            EncodingInfo {
                mime_name: "ISO-8859-1",
                iana_name: "ISO_8859-1:1987",
            }
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("latin1".parse::<Encoding>(), Ok(Encoding::ISO_8859_1));
        assert_eq!("IBM367".parse::<Encoding>(), Ok(Encoding::US_ASCII));

        let e = "utf-8".parse::<Encoding>().unwrap_err();
        assert_eq!(e, Error::UnknownEncoding("utf-8".to_string()));
        assert_eq!(e.to_string(), "unknown encoding: utf-8");
    }

    #[test]
    fn test_encoding_aliases() {
        let latin1: Vec<_> = Encoding::ISO_8859_1.aliases().collect();
        assert!(latin1.contains(&"iso-ir-100"));
        assert!(latin1.contains(&"l1"));
        assert!(!latin1.contains(&"us"));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Encoding::US_ASCII).unwrap(),
            r#""US-ASCII""#
        );
        assert_eq!(
            serde_json::to_string(&Encoding::ISO_8859_1.metadata()).unwrap(),
            r#"{"mime_name":"ISO-8859-1","iana_name":"ISO_8859-1:1987"}"#
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::OutOfBounds { index: 11 }.to_string(),
            "index out of bounds: 11"
        );
        assert_eq!(
            Error::InvalidRange { start: 6, end: 4 }.to_string(),
            "invalid range: 6 > 4"
        );
    }
}
