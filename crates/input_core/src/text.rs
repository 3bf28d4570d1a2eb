//! UTF-16 code-unit offset utilities.
//!
//! Carets and selections are measured in UTF-16 code units so they line up
//! with the offsets most text-rendering layers report. Rust strings are
//! UTF-8, so every slice goes through these conversions. All functions clamp
//! instead of panicking: offsets past the end land on the end, offsets inside
//! a surrogate pair snap back to the start of that character.

use crate::selection::SelectionRange;

/// Length of `s` in UTF-16 code units.
///
/// ```
/// use input_core::len16;
///
/// assert_eq!(len16("12.5"), 4);
/// assert_eq!(len16("€"), 1);
/// assert_eq!(len16("𝟙"), 2); // outside the BMP: a surrogate pair
/// ```
#[inline]
pub fn len16(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Convert a code-unit offset into a byte offset on a char boundary.
///
/// ```
/// use input_core::byte_offset;
///
/// let s = "a€b";
/// assert_eq!(byte_offset(s, 0), 0);
/// assert_eq!(byte_offset(s, 1), 1);
/// assert_eq!(byte_offset(s, 2), 4);
/// assert_eq!(byte_offset(s, 3), 5);
/// assert_eq!(byte_offset(s, 99), 5);
/// ```
pub fn byte_offset(s: &str, offset16: usize) -> usize {
    let mut units = 0usize;
    for (idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset16 {
            return idx;
        }
        units = next;
    }
    s.len()
}

/// Convert a byte offset into a code-unit offset.
///
/// Byte offsets inside a multi-byte character count as the start of it.
pub fn utf16_offset(s: &str, byte: usize) -> usize {
    let mut units = 0usize;
    for (idx, ch) in s.char_indices() {
        if idx + ch.len_utf8() > byte {
            break;
        }
        units += ch.len_utf16();
    }
    units
}

/// Clamp a code-unit offset into `0..=len16(s)` and onto a char boundary.
///
/// ```
/// use input_core::clamp_offset;
///
/// let s = "1𝟙";
/// assert_eq!(clamp_offset(s, 2), 1); // inside the surrogate pair
/// assert_eq!(clamp_offset(s, 3), 3);
/// assert_eq!(clamp_offset(s, 10), 3);
/// ```
#[inline]
pub fn clamp_offset(s: &str, offset16: usize) -> usize {
    utf16_offset(s, byte_offset(s, offset16))
}

/// Offset of the character boundary before `offset16`, or 0 at the start.
pub fn prev_boundary16(s: &str, offset16: usize) -> usize {
    let byte = byte_offset(s, offset16);
    match s[..byte].chars().next_back() {
        Some(ch) => utf16_offset(s, byte) - ch.len_utf16(),
        None => 0,
    }
}

/// Offset of the character boundary after `offset16`, or the end.
pub fn next_boundary16(s: &str, offset16: usize) -> usize {
    let byte = byte_offset(s, offset16);
    match s[byte..].chars().next() {
        Some(ch) => utf16_offset(s, byte) + ch.len_utf16(),
        None => len16(s),
    }
}

/// Borrow the text covered by a code-unit range.
#[inline]
pub fn slice16(s: &str, range: SelectionRange) -> &str {
    let start = byte_offset(s, range.start);
    let end = byte_offset(s, range.end).max(start);
    &s[start..end]
}

/// Replace the code-unit `range` of `s` with `replacement`.
///
/// ```
/// use input_core::{SelectionRange, splice};
///
/// assert_eq!(splice("1234", SelectionRange::new(1, 3), "9"), "194");
/// assert_eq!(splice("12", SelectionRange::caret(2), "3"), "123");
/// assert_eq!(splice("12", SelectionRange::new(1, 40), ""), "1");
/// ```
pub fn splice(s: &str, range: SelectionRange, replacement: &str) -> String {
    let start = byte_offset(s, range.start);
    let end = byte_offset(s, range.end).max(start);
    let mut out = String::with_capacity(s.len() - (end - start) + replacement.len());
    out.push_str(&s[..start]);
    out.push_str(replacement);
    out.push_str(&s[end..]);
    out
}

/// Number of ASCII digits in `s`.
#[inline]
pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}
