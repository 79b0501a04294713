//! Indexable character sequences.

use crate::{Error, Result};

/// A read-only, indexable and sliceable sequence of characters.
///
/// Indices are signed so that a negative position can be reported back to
/// the caller as an [`Error::OutOfBounds`] carrying the offending value.
pub trait CharSequence {
    /// Number of characters in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `index`, or [`Error::OutOfBounds`] outside `[0, len)`.
    fn char_at(&self, index: isize) -> Result<char>;

    /// Sequence over the half-open range `[start, end)` of this one.
    ///
    /// Errors are checked in order: a negative `start`, then an `end`
    /// past the end, then `start > end`.
    fn subsequence(&self, start: isize, end: isize) -> Result<Self>
    where
        Self: Sized;

    /// Collect every character into a vector.
    fn to_chars(&self) -> Vec<char> {
        (0..self.len() as isize)
            .filter_map(|i| self.char_at(i).ok())
            .collect()
    }

    /// Collect the characters in `[start, end)`, with the same checks as
    /// [`CharSequence::subsequence`].
    fn to_chars_range(&self, start: isize, end: isize) -> Result<Vec<char>> {
        let (start, end) = check_range(start, end, self.len())?;
        (start..end).map(|i| self.char_at(i as isize)).collect()
    }
}

/// Validate `[start, end)` against a sequence of `len` characters and return
/// it as unsigned bounds.
pub(crate) fn check_range(start: isize, end: isize, len: usize) -> Result<(usize, usize)> {
    // Slice lengths never exceed isize::MAX.
    let len = len as isize;
    if start < 0 {
        return Err(Error::OutOfBounds { index: start });
    }
    if end > len {
        return Err(Error::OutOfBounds { index: end });
    }
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    Ok((start as usize, end as usize))
}
