use input_policy::{
    DecimalConfig, DecimalPolicy, DurationConfig, DurationPolicy, InputPolicy, IntegerConfig,
    IntegerPolicy, TimeLimit,
};
use input_core::NumpadKey;
use keypad_layout::LayoutContext;
use policy_test_support::{diff_lines, snapshot_lines};

const DIGIT_ROWS: &str = r#"
      aspect_ratio 1.6
        button "1" -> 1
      aspect_ratio 1.6
        button "2" -> 2
      aspect_ratio 1.6
        button "3" -> 3
      aspect_ratio 1.6
        button "4" -> 4
      aspect_ratio 1.6
        button "5" -> 5
      aspect_ratio 1.6
        button "6" -> 6
      aspect_ratio 1.6
        button "7" -> 7
      aspect_ratio 1.6
        button "8" -> 8
      aspect_ratio 1.6
        button "9" -> 9
"#;

fn assert_outline(actual: &impl std::fmt::Display, expected: &str) {
    let actual = snapshot_lines(&actual.to_string());
    let expected = snapshot_lines(expected);
    assert!(
        actual == expected,
        "layout outline mismatch:\n{}",
        diff_lines(&expected, &actual)
    );
}

#[test]
fn standalone_signed_integer_pad() {
    let policy = IntegerPolicy::new(IntegerConfig {
        max_digits: 6,
        allow_negative: true,
    })
    .unwrap();
    let expected = format!(
        "hstack\n  boxed padding=6,6,6,6\n    grid columns=3 spacing=6{DIGIT_ROWS}{}",
        r#"      aspect_ratio 1.6
        button "±" -> minus
      aspect_ratio 1.6
        button "0" -> 0
      aspect_ratio 1.6
        image_button "delete.left" -> backspace
  boxed padding=6,0,6,0
    vstack
      spacer flex=1
      spacer flex=1
      spacer flex=1
      button "Done" -> done
"#
    );
    assert_outline(&policy.keyboard_layout(LayoutContext::STANDALONE), &expected);
}

#[test]
fn tabbed_decimal_pad() {
    let policy = DecimalPolicy::new(DecimalConfig {
        allow_negative: true,
        decimal_separator: ',',
        ..DecimalConfig::default()
    })
    .unwrap();
    let expected = format!(
        "hstack\n  boxed padding=6,6,6,6\n    grid columns=3 spacing=6{DIGIT_ROWS}{}",
        r#"      aspect_ratio 1.6
        button "," -> decimal
      aspect_ratio 1.6
        button "0" -> 0
      aspect_ratio 1.6
        image_button "delete.left" -> backspace
  boxed padding=6,0,6,0
    vstack
      image_button "chevron.up" -> prev
      image_button "chevron.down" -> next
      aspect_ratio 1.6
        button "±" -> minus
      spacer flex=1
      button "Done" -> done
"#
    );
    assert_outline(&policy.keyboard_layout(LayoutContext::TABBED), &expected);
}

#[test]
fn duration_pad_overlays_clear() {
    let policy = DurationPolicy::new(DurationConfig {
        max_time_limit: TimeLimit::Hours,
        allow_negative: false,
    });
    let layout = policy.keyboard_layout(LayoutContext::TABBED);
    let outline = layout.to_string();
    let lines = snapshot_lines(&outline);
    assert_eq!(lines[0], "zstack");
    assert_eq!(lines[1], "  hstack");
    assert_eq!(
        &lines[lines.len() - 2..],
        ["  overlay top_trailing", "    button \"C\" -> clear"]
    );
    let zero = lines
        .iter()
        .position(|line| line == "          button \"0\" -> 0")
        .expect("digit 0 in the grid");
    assert_eq!(lines[zero - 2], "        spacer flex=1", "{outline}");
}

#[test]
fn unsigned_integer_pad_leaves_a_spacer_left_of_zero() {
    let policy = IntegerPolicy::new(IntegerConfig::default()).unwrap();
    let layout = policy.keyboard_layout(LayoutContext::STANDALONE);
    let lines = snapshot_lines(&layout.to_string());
    let zero = lines
        .iter()
        .position(|line| line == "        button \"0\" -> 0")
        .expect("digit 0 in the grid");
    assert_eq!(lines[zero - 2], "      spacer flex=1");
    assert!(!layout.contains_key(NumpadKey::Minus));
}

#[test]
fn keys_are_listed_in_reading_order() {
    let policy = IntegerPolicy::new(IntegerConfig::default()).unwrap();
    let keys = policy.keyboard_layout(LayoutContext::TABBED).keys();
    let mut expected: Vec<NumpadKey> = (1..=9).map(NumpadKey::Digit).collect();
    expected.extend([
        NumpadKey::Digit(0),
        NumpadKey::Backspace,
        NumpadKey::Prev,
        NumpadKey::Next,
        NumpadKey::Done,
    ]);
    assert_eq!(keys, expected);
}
