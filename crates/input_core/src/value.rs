//! The text/caret/selection triple and the edit result type.

use crate::selection::SelectionRange;
use crate::text::{clamp_offset, len16};

/// Authoritative state of one numeric field.
///
/// Invariants (restored by [`NumericValue::clamped`]):
/// - `caret <= len16(text)`
/// - a present `selection` is non-empty and lies within `0..=len16(text)`
///
/// All offsets are UTF-16 code units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericValue {
    pub text: String,
    pub caret: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub selection: Option<SelectionRange>,
}

impl NumericValue {
    /// Empty text, caret at 0, no selection.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// `text` with the caret at its end and no selection.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = len16(&text);
        Self {
            text,
            caret,
            selection: None,
        }
    }

    /// Builder: move the caret (clamped).
    pub fn with_caret(mut self, caret: usize) -> Self {
        self.caret = caret;
        self.clamped()
    }

    /// Builder: select `range` (clamped) and put the caret at its end.
    pub fn with_selection(mut self, range: SelectionRange) -> Self {
        self.caret = range.end;
        self.selection = Some(range);
        self.clamped()
    }

    /// Length of the text in UTF-16 code units.
    #[inline]
    pub fn len16(&self) -> usize {
        len16(&self.text)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The range an insertion replaces: the selection if any, else the caret.
    #[inline]
    pub fn edit_range(&self) -> SelectionRange {
        self.selection
            .unwrap_or_else(|| SelectionRange::caret(self.caret))
    }

    /// Return a copy with every offset clamped onto a valid boundary.
    ///
    /// Empty selections collapse to `None`.
    pub fn clamped(mut self) -> Self {
        self.caret = clamp_offset(&self.text, self.caret);
        self.selection = self.selection.and_then(|range| {
            let start = clamp_offset(&self.text, range.start);
            let end = clamp_offset(&self.text, range.end);
            let range = SelectionRange::new(start, end);
            (!range.is_empty()).then_some(range)
        });
        self
    }

    /// `true` if the invariants hold without clamping.
    pub fn is_well_formed(&self) -> bool {
        self.clone().clamped() == *self
    }
}

/// Outcome of applying one key or replacement to a value.
///
/// `Rejected` always means "unchanged": callers must not apply partial
/// effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditResult {
    Rejected,
    Updated(NumericValue),
}

impl EditResult {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, EditResult::Rejected)
    }

    /// The updated value, if any.
    #[inline]
    pub fn updated(&self) -> Option<&NumericValue> {
        match self {
            EditResult::Updated(value) => Some(value),
            EditResult::Rejected => None,
        }
    }

    /// Consume into the updated value, if any.
    #[inline]
    pub fn into_updated(self) -> Option<NumericValue> {
        match self {
            EditResult::Updated(value) => Some(value),
            EditResult::Rejected => None,
        }
    }

    /// Write an update into `target`.
    ///
    /// Returns `true` if `target` changed.
    pub fn apply_to(self, target: &mut NumericValue) -> bool {
        match self {
            EditResult::Updated(value) if value != *target => {
                *target = value;
                true
            }
            _ => false,
        }
    }
}
