//! Bounded decimal policy.
//!
//! Text has the shape `[-]digits[sep digits]` with independent budgets for
//! the integer and the fraction part. Insertions that overflow a budget are
//! trimmed rather than rejected where possible:
//!
//! - fraction overflow trims the tail of the inserted run (keeping at least
//!   one inserted character), then drops existing fraction digits right
//!   before it, so typing at the end of a full fraction replaces the last
//!   digit;
//! - integer overflow trims the tail of the inserted run only, and rejects
//!   when the insertion does not cover the overflow.

use crate::edit::{self, KeyEdit, clamp_range, delete_target, toggle_leading_minus, with_caret};
use crate::error::PolicyConfigError;
use crate::keypad;
use crate::policy::InputPolicy;
use input_core::{EditResult, NumericValue, NumpadKey, SelectionRange, len16, slice16, splice};
use keypad_layout::{KeyboardLayout, LayoutContext};

/// Separators accepted on input and rewritten to the configured one.
const ALTERNATE_SEPARATORS: [char; 3] = ['.', ',', '\u{066B}'];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecimalConfig {
    pub max_integer_digits: usize,
    pub max_fraction_digits: usize,
    pub allow_negative: bool,
    pub decimal_separator: char,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            max_integer_digits: 9,
            max_fraction_digits: 2,
            allow_negative: false,
            decimal_separator: '.',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalPolicy {
    config: DecimalConfig,
}

/// Where the parts of a valid decimal text sit, in UTF-16 offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Anatomy {
    int_start: usize,
    int_end: usize,
    frac_start: usize,
    len: usize,
}

impl Anatomy {
    fn int_digits(&self) -> usize {
        self.int_end - self.int_start
    }

    fn frac_digits(&self) -> usize {
        self.len - self.frac_start
    }

    fn int_region(&self) -> SelectionRange {
        SelectionRange::new(self.int_start, self.int_end)
    }

    fn frac_region(&self) -> SelectionRange {
        SelectionRange::new(self.frac_start, self.len)
    }
}

impl DecimalPolicy {
    pub fn new(config: DecimalConfig) -> Result<Self, PolicyConfigError> {
        if config.max_integer_digits == 0 {
            return Err(PolicyConfigError::ZeroCapacity {
                field: "max_integer_digits",
            });
        }
        let sep = config.decimal_separator;
        if sep.is_ascii_digit() || sep == '-' || sep == ':' || sep.is_whitespace() {
            return Err(PolicyConfigError::InvalidSeparator { separator: sep });
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &DecimalConfig {
        &self.config
    }

    /// Parse a field's text into a float, accepting any known separator.
    pub fn parse_value(&self, text: &str) -> Option<f64> {
        let normalized: String = text
            .chars()
            .map(|c| if self.is_separator(c) { '.' } else { c })
            .collect();
        normalized.parse().ok()
    }

    fn is_separator(&self, c: char) -> bool {
        c == self.config.decimal_separator || ALTERNATE_SEPARATORS.contains(&c)
    }

    fn normalize_separators(&self, text: &str) -> String {
        let sep = self.config.decimal_separator;
        text.chars()
            .map(|c| if self.is_separator(c) { sep } else { c })
            .collect()
    }

    /// Locate the parts of `text`, or `None` if its shape is invalid.
    ///
    /// Budgets are not checked here.
    fn anatomy(&self, text: &str) -> Option<Anatomy> {
        let sep = self.config.decimal_separator;
        let mut int_start = 0;
        let mut int_end = None;
        let mut frac_start = 0;
        let mut offset = 0;
        for (i, c) in text.chars().enumerate() {
            match c {
                '0'..='9' => {}
                '-' if i == 0 && self.config.allow_negative => int_start = 1,
                c if c == sep && int_end.is_none() && self.config.max_fraction_digits > 0 => {
                    int_end = Some(offset);
                    frac_start = offset + c.len_utf16();
                }
                _ => return None,
            }
            offset += c.len_utf16();
        }
        let len = offset;
        Some(Anatomy {
            int_start,
            int_end: int_end.unwrap_or(len),
            frac_start: if int_end.is_some() { frac_start } else { len },
            len,
        })
    }

    fn within_budget(&self, anatomy: &Anatomy) -> bool {
        anatomy.int_digits() <= self.config.max_integer_digits
            && anatomy.frac_digits() <= self.config.max_fraction_digits
    }

    fn insert(&self, value: &NumericValue, range: SelectionRange, raw: &str) -> EditResult {
        let sep = self.config.decimal_separator;
        let mut inserted = self.normalize_separators(raw);
        if inserted.is_empty() {
            if range.is_empty() {
                return EditResult::Updated(value.clone());
            }
            return self.delete_range(value, range);
        }
        if inserted.starts_with(sep) {
            let prefix = slice16(&value.text, SelectionRange::new(0, range.start));
            if prefix.is_empty() || prefix == "-" {
                inserted.insert(0, '0');
            }
        }

        let mut text = splice(&value.text, range, &inserted);
        let Some(mut anatomy) = self.anatomy(&text) else {
            return EditResult::Rejected;
        };
        let mut span_start = range.start;
        let mut span_len = len16(&inserted);

        let max_frac = self.config.max_fraction_digits;
        if anatomy.frac_digits() > max_frac {
            let overflow = anatomy.frac_digits() - max_frac;
            let span = SelectionRange::new(span_start, span_start + span_len);
            let Some(overlap) = span.intersect(anatomy.frac_region()) else {
                return EditResult::Rejected;
            };
            let trim_tail = overflow.min(overlap.len() - 1);
            let remaining = overflow - trim_tail;
            if remaining > overlap.start - anatomy.frac_start {
                return EditResult::Rejected;
            }
            text = splice(
                &text,
                SelectionRange::new(overlap.end - trim_tail, overlap.end),
                "",
            );
            text = splice(
                &text,
                SelectionRange::new(overlap.start - remaining, overlap.start),
                "",
            );
            span_len -= trim_tail;
            span_start -= remaining;
            anatomy = match self.anatomy(&text) {
                Some(a) => a,
                None => return EditResult::Rejected,
            };
        }

        let max_int = self.config.max_integer_digits;
        if anatomy.int_digits() > max_int {
            let overflow = anatomy.int_digits() - max_int;
            let span = SelectionRange::new(span_start, span_start + span_len);
            let overlap = span
                .intersect(anatomy.int_region())
                .unwrap_or(SelectionRange::caret(span_start));
            if overlap.len() < overflow {
                return EditResult::Rejected;
            }
            text = splice(
                &text,
                SelectionRange::new(overlap.end - overflow, overlap.end),
                "",
            );
            span_len -= overflow;
            if span_len == 0 && range.is_empty() {
                return EditResult::Rejected;
            }
            anatomy = match self.anatomy(&text) {
                Some(a) => a,
                None => return EditResult::Rejected,
            };
        }

        if !self.within_budget(&anatomy) {
            return EditResult::Rejected;
        }
        EditResult::Updated(with_caret(text, span_start + span_len))
    }

    fn delete(&self, value: &NumericValue, direction: edit::Direction) -> EditResult {
        match delete_target(value, direction) {
            Some(target) => self.delete_range(value, target),
            None => EditResult::Updated(value.clone()),
        }
    }

    fn delete_range(&self, value: &NumericValue, target: SelectionRange) -> EditResult {
        let sep = self.config.decimal_separator;
        let mut text = splice(&value.text, target, "");
        if text.ends_with(sep) {
            text.pop();
        }
        let Some(anatomy) = self.anatomy(&text) else {
            return EditResult::Rejected;
        };
        if anatomy.int_digits() > self.config.max_integer_digits {
            return EditResult::Rejected;
        }
        if anatomy.frac_digits() > self.config.max_fraction_digits {
            let excess = anatomy.frac_digits() - self.config.max_fraction_digits;
            text = splice(
                &text,
                SelectionRange::new(anatomy.len - excess, anatomy.len),
                "",
            );
        }
        EditResult::Updated(with_caret(text, target.start))
    }

    fn toggle_sign(&self, value: &NumericValue) -> EditResult {
        if !self.config.allow_negative {
            return EditResult::Rejected;
        }
        let next = toggle_leading_minus(value);
        match self.anatomy(&next.text) {
            Some(anatomy) if self.within_budget(&anatomy) => EditResult::Updated(next),
            _ => EditResult::Rejected,
        }
    }
}

impl InputPolicy for DecimalPolicy {
    fn apply(&self, key: &NumpadKey, value: &NumericValue) -> EditResult {
        let value = value.clone().clamped();
        match edit::classify(key, &value) {
            KeyEdit::Resolved(result) => result,
            KeyEdit::Insert(digit) => {
                let mut buf = [0u8; 4];
                self.insert(&value, value.edit_range(), digit.encode_utf8(&mut buf))
            }
            KeyEdit::Separator => {
                if self.config.max_fraction_digits == 0 {
                    return EditResult::Rejected;
                }
                let mut buf = [0u8; 4];
                let sep = self.config.decimal_separator.encode_utf8(&mut buf);
                self.insert(&value, value.edit_range(), sep)
            }
            KeyEdit::Delete(direction) => self.delete(&value, direction),
            KeyEdit::ToggleSign => self.toggle_sign(&value),
        }
    }

    fn replace(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult {
        let value = value.clone().clamped();
        let range = clamp_range(&value.text, range);
        self.insert(&value, range, text)
    }

    fn finalize_display(&self, value: &NumericValue) -> NumericValue {
        let sep = self.config.decimal_separator;
        let mut text = value.text.clone();
        if text.ends_with(sep) {
            text.pop();
        }
        if text == "-" {
            return NumericValue::empty();
        }
        let digits_at = usize::from(text.starts_with('-'));
        if text[digits_at..].starts_with(sep) {
            text.insert(digits_at, '0');
        }
        if text == value.text {
            return value.clone().clamped();
        }
        NumericValue::new(text)
    }

    fn keyboard_layout(&self, ctx: LayoutContext) -> KeyboardLayout {
        let bottom_left = if self.config.max_fraction_digits > 0 {
            keypad::text_key(self.config.decimal_separator.to_string(), NumpadKey::Decimal)
        } else {
            keypad::blank_key()
        };
        let extras = if self.config.allow_negative {
            vec![keypad::sign_key()]
        } else {
            Vec::new()
        };
        keypad::number_pad(bottom_left, extras, ctx)
    }
}
