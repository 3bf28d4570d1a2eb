//! Text selection representation.

/// A half-open range of UTF-16 code-unit offsets.
///
/// The range is always normalized such that `start <= end`. Offsets count
/// code units, not bytes or characters; use [`crate::text::byte_offset`] to
/// slice a `str` with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRange {
    /// Start offset of the selection (inclusive).
    pub start: usize,
    /// End offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width range at `offset`.
    #[inline]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `offset` lies inside the half-open range.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Clamp both ends into `0..=len`.
    #[inline]
    pub fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Intersection with `other`, or `None` when they do not overlap.
    pub fn intersect(&self, other: SelectionRange) -> Option<SelectionRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(SelectionRange { start, end })
    }

    /// Shift both ends by `delta`, saturating at zero.
    pub fn shifted(self, delta: isize) -> Self {
        let shift = |v: usize| v.saturating_add_signed(delta);
        Self::new(shift(self.start), shift(self.end))
    }
}
