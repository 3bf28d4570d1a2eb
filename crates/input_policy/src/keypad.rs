//! The number pad every policy builds its layout from.
//!
//! ```text
//! hstack
//!   boxed            (3-column digit grid, policy-specific bottom-left key)
//!   boxed            (side column: prev/next or spacers, extras, done)
//! ```

use input_core::NumpadKey;
use keypad_layout::{EdgeInsets, KeyboardLayout, LayoutContext};

const GRID_SPACING: f32 = 6.0;
const KEY_ASPECT: f32 = 1.6;
const PAD_INSET: f32 = 6.0;

pub(crate) const BACKSPACE_IMAGE: &str = "delete.left";
pub(crate) const PREV_IMAGE: &str = "chevron.up";
pub(crate) const NEXT_IMAGE: &str = "chevron.down";
pub(crate) const SIGN_TITLE: &str = "±";

fn key(title: impl Into<String>, key: NumpadKey) -> KeyboardLayout {
    KeyboardLayout::aspect_ratio(KEY_ASPECT, KeyboardLayout::button(title, key))
}

fn digit(d: u8) -> KeyboardLayout {
    key(d.to_string(), NumpadKey::Digit(d))
}

pub(crate) fn sign_key() -> KeyboardLayout {
    key(SIGN_TITLE, NumpadKey::Minus)
}

/// Filler for a grid cell with no key.
pub(crate) fn blank_key() -> KeyboardLayout {
    KeyboardLayout::spacer(1.0)
}

pub(crate) fn text_key(title: impl Into<String>, k: NumpadKey) -> KeyboardLayout {
    key(title, k)
}

/// Build the pad. `bottom_left` fills the cell left of `0`; pass
/// [`blank_key`] to leave it blank. `extras` go into the side
/// column between navigation and `Done`.
pub(crate) fn number_pad(
    bottom_left: KeyboardLayout,
    extras: Vec<KeyboardLayout>,
    ctx: LayoutContext,
) -> KeyboardLayout {
    let mut cells: Vec<KeyboardLayout> = (1..=9).map(digit).collect();
    cells.push(bottom_left);
    cells.push(digit(0));
    cells.push(KeyboardLayout::aspect_ratio(
        KEY_ASPECT,
        KeyboardLayout::image_button(BACKSPACE_IMAGE, NumpadKey::Backspace),
    ));
    let grid = KeyboardLayout::grid(3, GRID_SPACING, cells);

    let mut side = navigation(ctx);
    side.extend(extras);
    side.push(KeyboardLayout::spacer(1.0));
    side.push(KeyboardLayout::button("Done", NumpadKey::Done));

    KeyboardLayout::hstack([
        KeyboardLayout::boxed(EdgeInsets::all(PAD_INSET), grid),
        KeyboardLayout::boxed(
            EdgeInsets::symmetric(0.0, PAD_INSET),
            KeyboardLayout::vstack(side),
        ),
    ])
}

fn navigation(ctx: LayoutContext) -> Vec<KeyboardLayout> {
    if ctx.has_tab_order {
        vec![
            KeyboardLayout::image_button(PREV_IMAGE, NumpadKey::Prev),
            KeyboardLayout::image_button(NEXT_IMAGE, NumpadKey::Next),
        ]
    } else {
        vec![KeyboardLayout::spacer(1.0), KeyboardLayout::spacer(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_pad_has_no_navigation_keys() {
        let pad = number_pad(blank_key(), Vec::new(), LayoutContext::STANDALONE);
        assert!(!pad.contains_key(NumpadKey::Next));
        assert!(!pad.contains_key(NumpadKey::Prev));
        assert!(pad.contains_key(NumpadKey::Done));
    }

    #[test]
    fn pad_contains_every_digit_and_backspace() {
        let pad = number_pad(blank_key(), Vec::new(), LayoutContext::TABBED);
        for d in 0..=9 {
            assert!(pad.contains_key(NumpadKey::Digit(d)), "missing digit {d}");
        }
        assert!(pad.contains_key(NumpadKey::Backspace));
        assert!(pad.contains_key(NumpadKey::Next));
    }
}
