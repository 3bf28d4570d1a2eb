//! # keypad_layout
//!
//! A small declarative vocabulary for describing a numeric keypad.
//!
//! Input policies emit a [`KeyboardLayout`] tree reflecting what they accept
//! (a minus key only when negatives are allowed, a separator key only for
//! decimals); an external renderer walks the tree, draws it and turns taps
//! back into [`input_core::NumpadKey`]s. The tree is plain data: nothing in
//! this crate measures, draws or hit-tests.

mod node;
mod outline;

pub use node::{Anchor, EdgeInsets, KeyboardLayout};

/// Facts about the hosting context that change which keys a layout shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutContext {
    /// `false` for standalone popovers: navigation buttons become spacers.
    pub has_tab_order: bool,
}

impl LayoutContext {
    pub const TABBED: LayoutContext = LayoutContext {
        has_tab_order: true,
    };
    pub const STANDALONE: LayoutContext = LayoutContext {
        has_tab_order: false,
    };
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::TABBED
    }
}
