//! Half-open byte ranges over document text.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open `[begin, end)` byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begin after end");
        Self { begin, end }
    }

    /// Zero-width span at `at`.
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { begin: at, end: at }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `other` lies entirely within `self`.
    #[must_use]
    pub const fn contains_span(&self, other: Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn covering(&self, other: Span) -> Span {
        Span::new(self.begin.min(other.begin), self.end.max(other.end))
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
