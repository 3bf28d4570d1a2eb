//! Abstract keypad keys.
//!
//! `NumpadKey` is the only vocabulary that crosses from an external keypad
//! renderer into the engine. Renderers translate taps into these; hosts and
//! policies never see raw touch or keyboard events.

use std::fmt;
use std::str::FromStr;

/// A key event from an on-screen (or hardware-mapped) numeric keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumpadKey {
    /// A decimal digit. Payloads above 9 are rejected by every policy.
    Digit(u8),
    /// The decimal separator key.
    Decimal,
    /// Sign toggle.
    Minus,
    Backspace,
    DeleteForward,
    Clear,
    SelectAll,
    Next,
    Prev,
    Done,
    /// App-defined key; policies never act on it.
    Custom(&'static str),
}

impl NumpadKey {
    /// Digit key for `d`, or `None` when `d > 9`.
    #[inline]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 { Some(Self::Digit(d)) } else { None }
    }

    /// `true` for the keys the host resolves itself (`Next`, `Prev`, `Done`).
    #[inline]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::Next | Self::Prev | Self::Done)
    }

    /// The ASCII digit for a valid `Digit` key.
    #[inline]
    pub fn digit_char(&self) -> Option<char> {
        match *self {
            Self::Digit(d) if d <= 9 => Some(char::from(b'0' + d)),
            _ => None,
        }
    }
}

impl fmt::Display for NumpadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumpadKey::Digit(d) => write!(f, "{d}"),
            NumpadKey::Decimal => f.write_str("decimal"),
            NumpadKey::Minus => f.write_str("minus"),
            NumpadKey::Backspace => f.write_str("backspace"),
            NumpadKey::DeleteForward => f.write_str("delete_forward"),
            NumpadKey::Clear => f.write_str("clear"),
            NumpadKey::SelectAll => f.write_str("select_all"),
            NumpadKey::Next => f.write_str("next"),
            NumpadKey::Prev => f.write_str("prev"),
            NumpadKey::Done => f.write_str("done"),
            NumpadKey::Custom(tag) => write!(f, "custom:{tag}"),
        }
    }
}

/// Error returned when a key name cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKeyError {
    input: String,
}

impl ParseKeyError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown numpad key: '{}'", self.input)
    }
}

impl std::error::Error for ParseKeyError {}

/// Parses the names produced by `Display`, except `custom:*`, whose tag must
/// be `'static`.
///
/// ```
/// use input_core::NumpadKey;
///
/// assert_eq!("7".parse(), Ok(NumpadKey::Digit(7)));
/// assert_eq!("backspace".parse(), Ok(NumpadKey::Backspace));
/// assert!("custom:x".parse::<NumpadKey>().is_err());
/// ```
impl FromStr for NumpadKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "decimal" | "." => NumpadKey::Decimal,
            "minus" | "-" => NumpadKey::Minus,
            "backspace" => NumpadKey::Backspace,
            "delete_forward" => NumpadKey::DeleteForward,
            "clear" => NumpadKey::Clear,
            "select_all" => NumpadKey::SelectAll,
            "next" => NumpadKey::Next,
            "prev" => NumpadKey::Prev,
            "done" => NumpadKey::Done,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '0'..='9'), None) => NumpadKey::Digit(c as u8 - b'0'),
                    _ => {
                        return Err(ParseKeyError {
                            input: s.to_string(),
                        });
                    }
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_constructor_bounds() {
        assert_eq!(NumpadKey::digit(9), Some(NumpadKey::Digit(9)));
        assert_eq!(NumpadKey::digit(10), None);
    }

    #[test]
    fn digit_char_rejects_out_of_range_payload() {
        assert_eq!(NumpadKey::Digit(4).digit_char(), Some('4'));
        assert_eq!(NumpadKey::Digit(12).digit_char(), None);
        assert_eq!(NumpadKey::Minus.digit_char(), None);
    }

    #[test]
    fn navigation_keys() {
        assert!(NumpadKey::Next.is_navigation());
        assert!(NumpadKey::Prev.is_navigation());
        assert!(NumpadKey::Done.is_navigation());
        assert!(!NumpadKey::Clear.is_navigation());
        assert!(!NumpadKey::Custom("tab").is_navigation());
    }

    #[test]
    fn display_names_parse_back() {
        let keys = [
            NumpadKey::Digit(0),
            NumpadKey::Decimal,
            NumpadKey::Minus,
            NumpadKey::Backspace,
            NumpadKey::DeleteForward,
            NumpadKey::Clear,
            NumpadKey::SelectAll,
            NumpadKey::Next,
            NumpadKey::Prev,
            NumpadKey::Done,
        ];
        for key in keys {
            assert_eq!(key.to_string().parse::<NumpadKey>(), Ok(key));
        }
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = "12".parse::<NumpadKey>().unwrap_err();
        assert_eq!(err.input(), "12");
        assert_eq!(err.to_string(), "unknown numpad key: '12'");
    }
}
