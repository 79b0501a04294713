//! Zero-copy ASCII/Latin-1 character views.
//!
//! A [`Latin1Chars`] decodes a window of a shared byte buffer on demand:
//! every byte is one character whose code point is the byte's unsigned
//! value. This is the original ISO-8859-1 code page (the first 256 Unicode
//! code points), not the windows-1252 remapping that the WHATWG Encoding
//! standard gives the same label. US-ASCII data is a subset and decodes
//! through the same view.
//!
//! ```rust
//! use latin1_view::Latin1Chars;
//!
//! let root = Latin1Chars::new(b"0123456789".to_vec());
//! let digits = root.subsequence(2, 8).unwrap().subsequence(2, 5).unwrap();
//! assert_eq!(digits.to_string(), "456");
//! assert_eq!(digits.char_at(0), Ok('4'));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::sequence::{CharSequence, check_range};
use crate::{Error, Result};

/// Read-only character view over a shared byte buffer.
///
/// Clones and subsequences are O(1): they share the buffer and only copy
/// the window coordinates. The buffer is freed when the last view over it
/// is dropped.
#[derive(Clone)]
pub struct Latin1Chars {
    data: Arc<[u8]>,
    offset: usize,
    len: usize,
    // invariant: offset + len <= data.len()
}

impl Latin1Chars {
    /// Create a view spanning the whole buffer.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        let len = data.len();
        Self::window(data, 0, len)
    }

    fn window(data: Arc<[u8]>, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= data.len());
        Self { data, offset, len }
    }

    /// Number of characters visible through this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character at `index` within this view.
    ///
    /// Fails with [`Error::OutOfBounds`] carrying `index` when it is
    /// negative or not less than [`len`](Self::len).
    pub fn char_at(&self, index: isize) -> Result<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .ok_or(Error::OutOfBounds { index })
    }

    /// Character at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_bytes().get(index).map(|&b| char::from(b))
    }

    /// View over `[start, end)` of this view, sharing the same buffer.
    ///
    /// Coordinates are relative to this view, so slicing a slice is the
    /// same as slicing the root at the composed offsets. `subsequence(n, n)`
    /// is an empty view for any `n` in `0..=len`.
    pub fn subsequence(&self, start: isize, end: isize) -> Result<Self> {
        let (start, end) = check_range(start, end, self.len)?;
        Ok(Self::window(
            Arc::clone(&self.data),
            self.offset + start,
            end - start,
        ))
    }

    /// The raw bytes under this view.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.offset..self.offset + self.len]
    }

    /// Iterate over the characters of this view.
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            bytes: self.as_bytes().iter(),
        }
    }
}

impl CharSequence for Latin1Chars {
    fn len(&self) -> usize {
        self.len
    }

    fn char_at(&self, index: isize) -> Result<char> {
        Latin1Chars::char_at(self, index)
    }

    fn subsequence(&self, start: isize, end: isize) -> Result<Self> {
        Latin1Chars::subsequence(self, start, end)
    }

    fn to_chars(&self) -> Vec<char> {
        self.chars().collect()
    }

    fn to_chars_range(&self, start: isize, end: isize) -> Result<Vec<char>> {
        let (start, end) = check_range(start, end, self.len)?;
        Ok(self.as_bytes()[start..end]
            .iter()
            .map(|&b| char::from(b))
            .collect())
    }
}

impl fmt::Display for Latin1Chars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Latin1Chars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latin1Chars")
            .field("text", &self.to_string())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .finish()
    }
}

impl PartialEq for Latin1Chars {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Latin1Chars {}

impl PartialEq<str> for Latin1Chars {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Latin1Chars {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl From<Vec<u8>> for Latin1Chars {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Latin1Chars {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> IntoIterator for &'a Latin1Chars {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

/// Iterator over the characters of a [`Latin1Chars`].
#[derive(Clone, Debug)]
pub struct Chars<'a> {
    bytes: std::slice::Iter<'a, u8>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        self.bytes.next().map(|&b| char::from(b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        self.bytes.next_back().map(|&b| char::from(b))
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl FusedIterator for Chars<'_> {}
