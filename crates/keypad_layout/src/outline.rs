//! Deterministic text outline of a layout tree, for snapshot tests and
//! debug logging.
//!
//! One node per line, two spaces of indentation per level:
//!
//! ```text
//! vstack
//!   grid columns=3 spacing=8
//!     button "1" -> 1
//!   spacer flex=1
//! ```

use crate::node::KeyboardLayout;
use std::fmt;

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &KeyboardLayout, depth: usize) -> fmt::Result {
    if depth > 0 {
        writeln!(f)?;
    }
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match node {
        KeyboardLayout::VStack { .. } => f.write_str("vstack")?,
        KeyboardLayout::HStack { .. } => f.write_str("hstack")?,
        KeyboardLayout::ZStack { .. } => f.write_str("zstack")?,
        KeyboardLayout::Grid {
            columns, spacing, ..
        } => write!(f, "grid columns={columns} spacing={spacing}")?,
        KeyboardLayout::Boxed { padding, .. } => write!(
            f,
            "boxed padding={},{},{},{}",
            padding.top, padding.leading, padding.bottom, padding.trailing
        )?,
        KeyboardLayout::AspectRatio { ratio, .. } => write!(f, "aspect_ratio {ratio}")?,
        KeyboardLayout::Overlay { anchor, .. } => write!(f, "overlay {}", anchor.name())?,
        KeyboardLayout::Spacer { flex } => write!(f, "spacer flex={flex}")?,
        KeyboardLayout::Button { title, key } => write!(f, "button {title:?} -> {key}")?,
        KeyboardLayout::ImageButton { image, key } => {
            write!(f, "image_button {image:?} -> {key}")?
        }
        KeyboardLayout::Empty => f.write_str("empty")?,
    }
    for child in node.children() {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}
