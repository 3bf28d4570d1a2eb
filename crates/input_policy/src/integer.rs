//! Bounded integer policy: at most `max_digits` digits, optional leading `-`.

use crate::edit::{self, KeyEdit, clamp_range, delete_target, toggle_leading_minus, with_caret};
use crate::error::PolicyConfigError;
use crate::keypad;
use crate::policy::InputPolicy;
use input_core::{
    EditResult, NumericValue, NumpadKey, SelectionRange, count_digits, len16, slice16, splice,
};
use keypad_layout::{KeyboardLayout, LayoutContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntegerConfig {
    pub max_digits: usize,
    pub allow_negative: bool,
}

impl Default for IntegerConfig {
    fn default() -> Self {
        Self {
            max_digits: 9,
            allow_negative: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerPolicy {
    config: IntegerConfig,
}

impl IntegerPolicy {
    pub fn new(config: IntegerConfig) -> Result<Self, PolicyConfigError> {
        if config.max_digits == 0 {
            return Err(PolicyConfigError::ZeroCapacity {
                field: "max_digits",
            });
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &IntegerConfig {
        &self.config
    }

    /// Parse a field's text. A lone `-` or empty text has no value.
    pub fn parse_value(&self, text: &str) -> Option<i64> {
        text.parse().ok()
    }

    /// Digits and an optional leading `-` only, within the digit budget.
    fn accepts(&self, text: &str) -> bool {
        let shape_ok = text.char_indices().all(|(i, c)| match c {
            '0'..='9' => true,
            '-' => i == 0 && self.config.allow_negative,
            _ => false,
        });
        shape_ok && count_digits(text) <= self.config.max_digits
    }

    fn insert_digit(&self, value: &NumericValue, digit: char) -> EditResult {
        let range = value.edit_range();
        let present = count_digits(&value.text);
        let replaced = count_digits(slice16(&value.text, range));
        let remaining = self.config.max_digits as isize - (present - replaced) as isize;
        if remaining <= 0 {
            return EditResult::Rejected;
        }
        let mut buf = [0u8; 4];
        self.replace(value, range, digit.encode_utf8(&mut buf))
    }

    fn delete(&self, value: &NumericValue, direction: edit::Direction) -> EditResult {
        let Some(target) = delete_target(value, direction) else {
            return EditResult::Updated(value.clone());
        };
        let text = splice(&value.text, target, "");
        EditResult::Updated(with_caret(text, target.start))
    }

    fn toggle_sign(&self, value: &NumericValue) -> EditResult {
        if !self.config.allow_negative {
            return EditResult::Rejected;
        }
        let next = toggle_leading_minus(value);
        if self.accepts(&next.text) {
            EditResult::Updated(next)
        } else {
            EditResult::Rejected
        }
    }
}

impl InputPolicy for IntegerPolicy {
    fn apply(&self, key: &NumpadKey, value: &NumericValue) -> EditResult {
        let value = value.clone().clamped();
        match edit::classify(key, &value) {
            KeyEdit::Resolved(result) => result,
            KeyEdit::Insert(digit) => self.insert_digit(&value, digit),
            KeyEdit::Delete(direction) => self.delete(&value, direction),
            KeyEdit::ToggleSign => self.toggle_sign(&value),
            KeyEdit::Separator => EditResult::Rejected,
        }
    }

    fn replace(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult {
        let value = value.clone().clamped();
        let range = clamp_range(&value.text, range);
        let candidate = splice(&value.text, range, text);
        if !self.accepts(&candidate) {
            return EditResult::Rejected;
        }
        EditResult::Updated(with_caret(candidate, range.start + len16(text)))
    }

    fn finalize_display(&self, value: &NumericValue) -> NumericValue {
        if value.text == "-" {
            return NumericValue::empty();
        }
        value.clone().clamped()
    }

    fn keyboard_layout(&self, ctx: LayoutContext) -> KeyboardLayout {
        let bottom_left = if self.config.allow_negative {
            keypad::sign_key()
        } else {
            keypad::blank_key()
        };
        keypad::number_pad(bottom_left, Vec::new(), ctx)
    }
}
