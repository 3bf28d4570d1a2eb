#![no_main]

use input_core::{EditResult, NumericValue, SelectionRange, count_digits, len16};
use input_policy::{DecimalConfig, DecimalPolicy, InputPolicy, IntegerConfig, IntegerPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mid = (0..=text.len() / 2)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let (start, pasted) = text.split_at(mid);

    let integer = match IntegerPolicy::new(IntegerConfig {
        max_digits: 6,
        allow_negative: true,
    }) {
        Ok(p) => p,
        Err(_) => return,
    };
    let decimal = match DecimalPolicy::new(DecimalConfig {
        max_integer_digits: 4,
        max_fraction_digits: 3,
        allow_negative: true,
        decimal_separator: '.',
    }) {
        Ok(p) => p,
        Err(_) => return,
    };

    let value = NumericValue::new(start);
    let start_len = len16(start);
    let range = SelectionRange::new(start_len / 3, start_len);

    if let EditResult::Updated(next) = integer.replace(&value, range, pasted) {
        assert!(next.is_well_formed());
        assert!(count_digits(&next.text) <= 6, "{next:?}");
        assert!(!next.text.chars().skip(1).any(|c| c == '-'), "{next:?}");
    }
    if let EditResult::Updated(next) = decimal.replace(&value, range, pasted) {
        assert!(next.is_well_formed());
        let unsigned = next.text.strip_prefix('-').unwrap_or(&next.text);
        let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        assert!(int.len() <= 4 && frac.len() <= 3, "{next:?}");
        assert!(!frac.contains('.'), "{next:?}");
    }
});
