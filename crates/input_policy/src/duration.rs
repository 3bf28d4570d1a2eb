//! Bounded duration policy.
//!
//! Digits shift in from the right like a kitchen timer: typing `1`, `2`, `5`
//! with a minutes limit shows `1`, `12`, `1:25`. Every edit rebuilds the
//! whole canonical text from the digit buffer, so the caret always ends up at
//! the end.

use crate::edit::{self, KeyEdit, clamp_range, delete_target, toggle_leading_minus};
use crate::keypad;
use crate::policy::InputPolicy;
use input_core::{EditResult, NumericValue, NumpadKey, SelectionRange, splice};
use keypad_layout::{Anchor, KeyboardLayout, LayoutContext};

const CLEAR_TITLE: &str = "C";

/// Seconds per unit, least significant first.
const UNIT_SECONDS: [u64; 4] = [1, 60, 3_600, 86_400];

/// The coarsest unit a duration field shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeLimit {
    Seconds,
    #[default]
    Minutes,
    Hours,
    Days,
}

impl TimeLimit {
    /// Number of `:`-separated groups.
    pub const fn unit_count(self) -> usize {
        match self {
            TimeLimit::Seconds => 1,
            TimeLimit::Minutes => 2,
            TimeLimit::Hours => 3,
            TimeLimit::Days => 4,
        }
    }

    /// Raw digits a field with this limit accepts.
    pub const fn capacity(self) -> usize {
        self.unit_count() * 2
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DurationConfig {
    pub max_time_limit: TimeLimit,
    pub allow_negative: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationPolicy {
    config: DurationConfig,
}

/// Sign plus significant digits, no separators.
struct DigitBuffer {
    negative: bool,
    digits: String,
}

impl DurationPolicy {
    pub fn new(config: DurationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DurationConfig {
        &self.config
    }

    fn limit(&self) -> TimeLimit {
        self.config.max_time_limit
    }

    /// Total seconds of a duration text, groups weighted from the right.
    ///
    /// Returns `None` for empty text, unparsable groups or more groups than
    /// the limit shows.
    ///
    /// ```
    /// use input_policy::{DurationConfig, DurationPolicy, TimeLimit};
    ///
    /// let p = DurationPolicy::new(DurationConfig {
    ///     max_time_limit: TimeLimit::Hours,
    ///     allow_negative: true,
    /// });
    /// assert_eq!(p.total_seconds("1:02:03"), Some(3723));
    /// assert_eq!(p.total_seconds("-90"), Some(-90));
    /// assert_eq!(p.total_seconds(""), None);
    /// ```
    pub fn total_seconds(&self, text: &str) -> Option<i64> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() {
            return None;
        }
        let groups: Vec<&str> = body.split(':').collect();
        if groups.len() > self.limit().unit_count() {
            return None;
        }
        let mut total: i64 = 0;
        for (group, unit) in groups.iter().rev().zip(UNIT_SECONDS) {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let n: i64 = group.parse().ok()?;
            total = total.checked_add(n.checked_mul(unit as i64)?)?;
        }
        Some(if negative { -total } else { total })
    }

    /// Canonical text for `seconds` with carry-over between units.
    ///
    /// The coarsest unit allowed by the limit absorbs everything above it.
    pub fn format_seconds(&self, seconds: i64) -> String {
        let mut rest = seconds.unsigned_abs();
        let count = self.limit().unit_count();
        let mut groups = Vec::with_capacity(count);
        for i in (1..count).rev() {
            let unit = UNIT_SECONDS[i];
            groups.push(rest / unit);
            rest %= unit;
        }
        groups.push(rest);

        let first = groups
            .iter()
            .position(|&g| g != 0)
            .unwrap_or(groups.len() - 1);
        let mut out = String::new();
        if seconds < 0 {
            out.push('-');
        }
        for (i, g) in groups[first..].iter().enumerate() {
            if i == 0 {
                out.push_str(&g.to_string());
            } else {
                out.push(':');
                out.push_str(&format!("{g:02}"));
            }
        }
        out
    }

    /// Strip separators and leading zeros, or `None` on a foreign character.
    fn normalize(&self, candidate: &str) -> Option<DigitBuffer> {
        let mut negative = false;
        let mut digits = String::new();
        for (i, c) in candidate.chars().enumerate() {
            match c {
                '0'..='9' => digits.push(c),
                ':' => {}
                c if c.is_whitespace() => {}
                '-' if i == 0 && self.config.allow_negative => negative = true,
                _ => return None,
            }
        }
        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() {
            "0".to_string()
        } else {
            significant.to_string()
        };
        Some(DigitBuffer { negative, digits })
    }

    /// Group a digit buffer from the right, least significant unit last.
    fn format(&self, buffer: &DigitBuffer) -> String {
        let digits = buffer.digits.as_str();
        let mut groups: Vec<&str> = Vec::with_capacity(self.limit().unit_count());
        let mut end = digits.len();
        for _ in 1..self.limit().unit_count() {
            let start = end.saturating_sub(2);
            groups.push(&digits[start..end]);
            end = start;
        }
        groups.push(&digits[..end]);
        groups.reverse();

        while groups.len() > 1 && (groups[0].is_empty() || groups[0] == "0") {
            groups.remove(0);
        }

        let mut out = String::new();
        if buffer.negative {
            out.push('-');
        }
        for (i, g) in groups.iter().enumerate() {
            if i == 0 {
                out.push_str(g);
            } else {
                out.push(':');
                out.push_str(&format!("{g:0>2}"));
            }
        }
        out
    }

    /// Rebuild the canonical text from an edited candidate.
    fn derive(&self, candidate: &str) -> EditResult {
        match self.normalize(candidate) {
            Some(buffer) => self.emit(buffer),
            None => EditResult::Rejected,
        }
    }

    fn emit(&self, buffer: DigitBuffer) -> EditResult {
        if buffer.digits.len() > self.limit().capacity() {
            return EditResult::Rejected;
        }
        EditResult::Updated(NumericValue::new(self.format(&buffer)))
    }

    fn insert(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult {
        self.derive(&splice(&value.text, range, text))
    }

    fn delete(&self, value: &NumericValue, direction: edit::Direction) -> EditResult {
        match delete_target(value, direction) {
            Some(target) => {
                let Some(mut buffer) = self.normalize(&splice(&value.text, target, "")) else {
                    return EditResult::Rejected;
                };
                // Deleting down to zero also drops the sign.
                if buffer.digits == "0" {
                    buffer.negative = false;
                }
                self.emit(buffer)
            }
            None => EditResult::Updated(value.clone()),
        }
    }

    fn toggle_sign(&self, value: &NumericValue) -> EditResult {
        if !self.config.allow_negative {
            return EditResult::Rejected;
        }
        self.derive(&toggle_leading_minus(value).text)
    }
}

impl InputPolicy for DurationPolicy {
    fn apply(&self, key: &NumpadKey, value: &NumericValue) -> EditResult {
        let value = value.clone().clamped();
        match edit::classify(key, &value) {
            KeyEdit::Resolved(result) => result,
            KeyEdit::Insert(digit) => {
                let mut buf = [0u8; 4];
                self.insert(&value, value.edit_range(), digit.encode_utf8(&mut buf))
            }
            KeyEdit::Delete(direction) => self.delete(&value, direction),
            KeyEdit::ToggleSign => self.toggle_sign(&value),
            KeyEdit::Separator => EditResult::Rejected,
        }
    }

    fn replace(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult {
        let value = value.clone().clamped();
        let range = clamp_range(&value.text, range);
        self.insert(&value, range, text)
    }

    fn finalize_display(&self, value: &NumericValue) -> NumericValue {
        if value.text.is_empty() {
            return value.clone().clamped();
        }
        match self.total_seconds(&value.text) {
            Some(seconds) => NumericValue::new(self.format_seconds(seconds)),
            None => value.clone().clamped(),
        }
    }

    fn keyboard_layout(&self, ctx: LayoutContext) -> KeyboardLayout {
        let bottom_left = if self.config.allow_negative {
            keypad::sign_key()
        } else {
            keypad::blank_key()
        };
        KeyboardLayout::zstack([
            keypad::number_pad(bottom_left, Vec::new(), ctx),
            KeyboardLayout::overlay(
                Anchor::TopTrailing,
                KeyboardLayout::button(CLEAR_TITLE, NumpadKey::Clear),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(limit: TimeLimit, allow_negative: bool) -> DurationPolicy {
        DurationPolicy::new(DurationConfig {
            max_time_limit: limit,
            allow_negative,
        })
    }

    fn type_digits(p: &DurationPolicy, digits: &str) -> Vec<String> {
        let mut value = NumericValue::empty();
        let mut shown = Vec::new();
        for c in digits.chars() {
            let key = NumpadKey::Digit(c as u8 - b'0');
            if let EditResult::Updated(next) = p.apply(&key, &value) {
                value = next;
            }
            shown.push(value.text.clone());
        }
        shown
    }

    #[test]
    fn digits_shift_in_from_the_right() {
        let p = policy(TimeLimit::Minutes, false);
        assert_eq!(type_digits(&p, "125"), ["1", "12", "1:25"]);
    }

    #[test]
    fn hours_limit_groups_three_units() {
        let p = policy(TimeLimit::Hours, false);
        assert_eq!(
            type_digits(&p, "10203"),
            ["1", "10", "1:02", "10:20", "1:02:03"]
        );
    }

    #[test]
    fn capacity_is_enforced() {
        let p = policy(TimeLimit::Minutes, false);
        let v = NumericValue::new("12:34");
        assert_eq!(p.apply(&NumpadKey::Digit(5), &v), EditResult::Rejected);

        let p = policy(TimeLimit::Seconds, false);
        assert_eq!(type_digits(&p, "123"), ["1", "12", "12"]);
    }

    #[test]
    fn leading_zeros_are_dropped() {
        let p = policy(TimeLimit::Minutes, false);
        assert_eq!(type_digits(&p, "0"), ["0"]);
        assert_eq!(type_digits(&p, "005"), ["0", "0", "5"]);
        assert_eq!(type_digits(&p, "1000"), ["1", "10", "1:00", "10:00"]);
    }

    #[test]
    fn edits_always_place_caret_at_end() {
        let p = policy(TimeLimit::Minutes, false);
        let v = NumericValue::new("1:25").with_caret(0);
        let v = p.apply(&NumpadKey::Digit(3), &v).into_updated().unwrap();
        assert_eq!(v.text, "31:25");
        assert_eq!(v.caret, 5);
    }

    #[test]
    fn backspace_shifts_digits_right() {
        let p = policy(TimeLimit::Minutes, false);
        let v = p
            .apply(&NumpadKey::Backspace, &NumericValue::new("1:25"))
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("12"));

        let v = p
            .apply(&NumpadKey::Backspace, &NumericValue::new("5"))
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("0"));
    }

    #[test]
    fn separators_and_decimal_key() {
        let p = policy(TimeLimit::Minutes, false);
        let v = NumericValue::new("1:25");
        assert_eq!(p.apply(&NumpadKey::Decimal, &v), EditResult::Rejected);

        let pasted = p
            .replace(&NumericValue::empty(), SelectionRange::caret(0), "2: 30")
            .into_updated()
            .unwrap();
        assert_eq!(pasted, NumericValue::new("2:30"));
        assert_eq!(
            p.replace(&NumericValue::empty(), SelectionRange::caret(0), "2.30"),
            EditResult::Rejected
        );
    }

    #[test]
    fn minus_toggles_sign_when_allowed() {
        let p = policy(TimeLimit::Minutes, true);
        let v = p
            .apply(&NumpadKey::Minus, &NumericValue::new("1:25"))
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("-1:25"));
        let v = p.apply(&NumpadKey::Minus, &v).into_updated().unwrap();
        assert_eq!(v, NumericValue::new("1:25"));

        let p = policy(TimeLimit::Minutes, false);
        assert_eq!(
            p.apply(&NumpadKey::Minus, &NumericValue::new("1:25")),
            EditResult::Rejected
        );
    }

    #[test]
    fn backspace_to_zero_drops_the_sign() {
        let p = policy(TimeLimit::Minutes, true);
        let v = p
            .apply(&NumpadKey::Minus, &NumericValue::empty())
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("-0"));

        let v = p.apply(&NumpadKey::Backspace, &v).into_updated().unwrap();
        assert_eq!(v, NumericValue::new("0"));

        let v = p
            .apply(&NumpadKey::Backspace, &NumericValue::new("-5"))
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("0"));

        let v = p
            .apply(&NumpadKey::Backspace, &NumericValue::new("-1:25"))
            .into_updated()
            .unwrap();
        assert_eq!(v, NumericValue::new("-12"));
    }

    #[test]
    fn format_is_idempotent_on_its_own_output() {
        for limit in [TimeLimit::Seconds, TimeLimit::Minutes, TimeLimit::Hours, TimeLimit::Days] {
            let p = policy(limit, true);
            for raw in ["0", "7", "59", "100", "1234", "-905", "120000", "99999999"] {
                let EditResult::Updated(first) =
                    p.replace(&NumericValue::empty(), SelectionRange::caret(0), raw)
                else {
                    continue;
                };
                let again = p
                    .replace(&NumericValue::empty(), SelectionRange::caret(0), &first.text)
                    .into_updated()
                    .unwrap();
                assert_eq!(again, first, "{limit:?} {raw}");
            }
        }
    }

    #[test]
    fn finalize_carries_between_units() {
        let p = policy(TimeLimit::Minutes, true);
        assert_eq!(p.finalize_display(&NumericValue::new("90")), NumericValue::new("1:30"));
        assert_eq!(p.finalize_display(&NumericValue::new("1:75")), NumericValue::new("2:15"));
        assert_eq!(p.finalize_display(&NumericValue::new("-0")), NumericValue::new("0"));
        assert_eq!(p.finalize_display(&NumericValue::empty()), NumericValue::empty());

        let p = policy(TimeLimit::Hours, false);
        assert_eq!(
            p.finalize_display(&NumericValue::new("99:99")),
            NumericValue::new("1:40:39")
        );

        let p = policy(TimeLimit::Seconds, false);
        assert_eq!(p.finalize_display(&NumericValue::new("90")), NumericValue::new("90"));
    }

    #[test]
    fn format_seconds_uses_the_leading_unit_for_overflow() {
        let p = policy(TimeLimit::Minutes, true);
        assert_eq!(p.format_seconds(0), "0");
        assert_eq!(p.format_seconds(59), "59");
        assert_eq!(p.format_seconds(3_600), "60:00");
        assert_eq!(p.format_seconds(-61), "-1:01");

        let p = policy(TimeLimit::Days, false);
        assert_eq!(p.format_seconds(90_061), "1:01:01:01");
        assert_eq!(p.format_seconds(3_600), "1:00:00");
    }

    #[test]
    fn total_seconds_rejects_foreign_text() {
        let p = policy(TimeLimit::Minutes, false);
        assert_eq!(p.total_seconds("1:2:3"), None);
        assert_eq!(p.total_seconds("1::"), None);
        assert_eq!(p.total_seconds("a"), None);
        assert_eq!(p.total_seconds("1:30"), Some(90));
    }

    #[test]
    fn layout_overlays_clear_key() {
        let layout = policy(TimeLimit::Minutes, false).keyboard_layout(LayoutContext::TABBED);
        assert!(matches!(layout, KeyboardLayout::ZStack { .. }));
        assert_eq!(layout.title_for(NumpadKey::Clear), Some(CLEAR_TITLE));
        assert!(!layout.contains_key(NumpadKey::Minus));
        assert!(!layout.contains_key(NumpadKey::Decimal));
    }
}
