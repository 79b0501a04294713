//! Selecting a character view for an encoding.

use std::sync::Arc;

use crate::{Encoding, Latin1Chars};

/// The decoding strategy used for an [`Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoder {
    /// One byte per character, code point equal to the byte value.
    Latin1,
}

impl Decoder {
    /// Build a character view over `data` with this strategy.
    pub fn decode(self, data: impl Into<Arc<[u8]>>) -> Latin1Chars {
        match self {
            Decoder::Latin1 => Latin1Chars::new(data),
        }
    }
}

impl Encoding {
    /// The decoder that turns bytes in this encoding into characters.
    pub fn decoder(self) -> Decoder {
        match self {
            // US-ASCII bytes are a subset of Latin-1.
            Encoding::US_ASCII => Decoder::Latin1,
            Encoding::ISO_8859_1 => Decoder::Latin1,
        }
    }
}

/// Character view over `data` decoded as `encoding`.
pub fn to_char_sequence(data: impl Into<Arc<[u8]>>, encoding: Encoding) -> Latin1Chars {
    encoding.decoder().decode(data)
}

/// Decode `data` into a vector of characters.
pub fn to_chars(data: impl Into<Arc<[u8]>>, encoding: Encoding) -> Vec<char> {
    to_char_sequence(data, encoding).chars().collect()
}

/// Decode `data` into an owned string.
pub fn decode(data: impl Into<Arc<[u8]>>, encoding: Encoding) -> String {
    to_char_sequence(data, encoding).to_string()
}
