//! Key classification and edit primitives shared by all policies.

use input_core::{
    EditResult, NumericValue, NumpadKey, SelectionRange, clamp_offset, len16, next_boundary16,
    prev_boundary16,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Backward,
    Forward,
}

/// What a policy has to do for a key.
pub(crate) enum KeyEdit {
    /// Fully resolved without policy-specific rules.
    Resolved(EditResult),
    Insert(char),
    Delete(Direction),
    ToggleSign,
    Separator,
}

/// Resolve the keys every policy treats the same way.
///
/// `value` must already be clamped.
pub(crate) fn classify(key: &NumpadKey, value: &NumericValue) -> KeyEdit {
    match key {
        NumpadKey::Next | NumpadKey::Prev | NumpadKey::Done => {
            KeyEdit::Resolved(EditResult::Updated(value.clone()))
        }
        NumpadKey::Clear => KeyEdit::Resolved(EditResult::Updated(NumericValue::empty())),
        NumpadKey::SelectAll => KeyEdit::Resolved(EditResult::Updated(select_all(value))),
        NumpadKey::Custom(_) => KeyEdit::Resolved(EditResult::Rejected),
        NumpadKey::Digit(_) => match key.digit_char() {
            Some(c) => KeyEdit::Insert(c),
            None => KeyEdit::Resolved(EditResult::Rejected),
        },
        NumpadKey::Backspace => KeyEdit::Delete(Direction::Backward),
        NumpadKey::DeleteForward => KeyEdit::Delete(Direction::Forward),
        NumpadKey::Minus => KeyEdit::ToggleSign,
        NumpadKey::Decimal => KeyEdit::Separator,
    }
}

pub(crate) fn select_all(value: &NumericValue) -> NumericValue {
    let len = value.len16();
    NumericValue {
        text: value.text.clone(),
        caret: len,
        selection: (len > 0).then(|| SelectionRange::new(0, len)),
    }
}

/// The range a delete key removes, or `None` at a text boundary.
pub(crate) fn delete_target(value: &NumericValue, direction: Direction) -> Option<SelectionRange> {
    if let Some(selection) = value.selection {
        return Some(selection);
    }
    let caret = value.caret;
    match direction {
        Direction::Backward if caret > 0 => Some(SelectionRange::new(
            prev_boundary16(&value.text, caret),
            caret,
        )),
        Direction::Forward if caret < value.len16() => Some(SelectionRange::new(
            caret,
            next_boundary16(&value.text, caret),
        )),
        _ => None,
    }
}

/// Add or remove a leading `-`, shifting caret and selection with it.
pub(crate) fn toggle_leading_minus(value: &NumericValue) -> NumericValue {
    let (text, delta) = match value.text.strip_prefix('-') {
        Some(rest) => (rest.to_string(), -1),
        None => (format!("-{}", value.text), 1),
    };
    NumericValue {
        text,
        caret: value.caret.saturating_add_signed(delta),
        selection: value.selection.map(|s| s.shifted(delta)),
    }
    .clamped()
}

/// Clamp a caller-supplied range onto `text`.
pub(crate) fn clamp_range(text: &str, range: SelectionRange) -> SelectionRange {
    SelectionRange::new(clamp_offset(text, range.start), clamp_offset(text, range.end))
}

/// A value with the caret at `caret` and no selection.
pub(crate) fn with_caret(text: String, caret: usize) -> NumericValue {
    let caret = caret.min(len16(&text));
    NumericValue {
        text,
        caret,
        selection: None,
    }
    .clamped()
}
