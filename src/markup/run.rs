//! Half-open ranges over a line

use std::fmt;

/// A half-open `[index, index + length)` range of byte offsets in a line
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Run {
    /// Offset of the first byte covered
    pub index: usize,
    /// Number of bytes covered
    pub length: usize,
}

impl Run {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Build a run from start and end offsets, empty if `end <= start`
    pub fn between(start: usize, end: usize) -> Self {
        Self::new(start, end.saturating_sub(start))
    }

    /// Offset one past the last byte covered
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `other` begins inside this run.
    ///
    /// Only meaningful when `other` does not start before `self`, which is
    /// how the reflow sweep uses it. Not symmetric.
    pub fn is_overlapped_by(&self, other: &Run) -> bool {
        other.index >= self.index && other.index < self.end()
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{} ({})", self.index, self.end(), self.length)
    }
}
