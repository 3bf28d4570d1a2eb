#![no_main]

use input_core::{NumericValue, NumpadKey, SelectionRange};
use input_policy::{
    DecimalConfig, DecimalPolicy, DurationConfig, DurationPolicy, InputPolicy, IntegerConfig,
    IntegerPolicy, Policy, TimeLimit,
};
use libfuzzer_sys::fuzz_target;

fn policy_from(byte: u8) -> Policy {
    let allow_negative = byte & 0x80 != 0;
    match byte % 3 {
        0 => IntegerPolicy::new(IntegerConfig {
            max_digits: usize::from((byte >> 2) & 0x7) + 1,
            allow_negative,
        })
        .map(Policy::from)
        .expect("max_digits is at least 1"),
        1 => DecimalPolicy::new(DecimalConfig {
            max_integer_digits: usize::from((byte >> 2) & 0x3) + 1,
            max_fraction_digits: usize::from((byte >> 4) & 0x3),
            allow_negative,
            decimal_separator: if byte & 0x40 != 0 { ',' } else { '.' },
        })
        .map(Policy::from)
        .expect("separator and budgets are valid"),
        _ => {
            let max_time_limit = match (byte >> 2) & 0x3 {
                0 => TimeLimit::Seconds,
                1 => TimeLimit::Minutes,
                2 => TimeLimit::Hours,
                _ => TimeLimit::Days,
            };
            DurationPolicy::new(DurationConfig {
                max_time_limit,
                allow_negative,
            })
            .into()
        }
    }
}

fn key_from(byte: u8) -> NumpadKey {
    match byte % 20 {
        d @ 0..=9 => NumpadKey::Digit(d),
        10 => NumpadKey::Decimal,
        11 => NumpadKey::Minus,
        12 => NumpadKey::Backspace,
        13 => NumpadKey::DeleteForward,
        14 => NumpadKey::Clear,
        15 => NumpadKey::SelectAll,
        16 => NumpadKey::Next,
        17 => NumpadKey::Digit(byte),
        18 => NumpadKey::Custom("fuzz"),
        _ => NumpadKey::Done,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&config, rest)) = data.split_first() else {
        return;
    };
    let policy = policy_from(config);
    let mut value = NumericValue::empty();
    for pair in rest.chunks(2) {
        // Move the caret or selection somewhere arbitrary, possibly out of range.
        if let [key, offset] = *pair {
            if offset & 1 == 0 {
                value.caret = usize::from(offset >> 1);
                value.selection = None;
            } else {
                value.selection = Some(SelectionRange::new(0, usize::from(offset >> 1)));
            }
            value = value.clamped();
            match policy.apply(&key_from(key), &value) {
                input_core::EditResult::Rejected => {}
                input_core::EditResult::Updated(next) => {
                    assert!(next.is_well_formed(), "{next:?}");
                    value = next;
                }
            }
        }
    }
    let finalized = policy.finalize_display(&value);
    assert!(finalized.is_well_formed(), "{finalized:?}");
});
