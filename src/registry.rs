//! IANA character set aliases.
//!
//! The table is case-sensitive: only the spellings registered with IANA
//! resolve, so `"latin1"` is found but `"LATIN1"` is not.
//!
//! ```rust
//! use latin1_view::{Encoding, registry};
//!
//! assert_eq!(registry::resolve("l1"), Some(Encoding::ISO_8859_1));
//! assert_eq!(registry::resolve("utf-8"), None);
//! ```
//!
//! See <https://www.iana.org/assignments/character-sets/character-sets.xhtml>.

use crate::Encoding;

/// Registered aliases, grouped by encoding.
static IANA_ALIASES: &[(&str, Encoding)] = &[
    // ANSI X3.4-1986, RFC 2046
    ("ANSI_X3.4-1968", Encoding::US_ASCII),
    ("ANSI_X3.4-1986", Encoding::US_ASCII),
    ("cp367", Encoding::US_ASCII),
    ("csASCII", Encoding::US_ASCII),
    ("IBM367", Encoding::US_ASCII),
    ("ISO_646.irv:1991", Encoding::US_ASCII),
    ("iso-ir-6", Encoding::US_ASCII),
    ("ISO646-US", Encoding::US_ASCII),
    ("us", Encoding::US_ASCII),
    ("US-ASCII", Encoding::US_ASCII),
    // ISO 8859-1:1987, RFC 1345
    ("CP819", Encoding::ISO_8859_1),
    ("csISOLatin1", Encoding::ISO_8859_1),
    ("IBM819", Encoding::ISO_8859_1),
    ("ISO-8859-1", Encoding::ISO_8859_1),
    ("ISO_8859-1", Encoding::ISO_8859_1),
    ("ISO_8859-1:1987", Encoding::ISO_8859_1),
    ("iso-ir-100", Encoding::ISO_8859_1),
    ("l1", Encoding::ISO_8859_1),
    ("latin1", Encoding::ISO_8859_1),
];

/// Look up an encoding by one of its registered aliases.
///
/// Matching is exact. Returns `None` for anything not in the table; there
/// is no fallback encoding.
pub fn resolve(alias: &str) -> Option<Encoding> {
    IANA_ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|&(_, encoding)| encoding)
}

/// Every `(alias, encoding)` pair in the table.
pub fn aliases() -> impl Iterator<Item = (&'static str, Encoding)> {
    IANA_ALIASES.iter().copied()
}

pub(crate) fn aliases_of(encoding: Encoding) -> impl Iterator<Item = &'static str> {
    IANA_ALIASES
        .iter()
        .filter(move |(_, e)| *e == encoding)
        .map(|&(name, _)| name)
}
