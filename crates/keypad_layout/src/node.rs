use input_core::NumpadKey;

/// Placement of an overlay inside its parent stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Anchor {
    pub const fn name(self) -> &'static str {
        match self {
            Anchor::TopLeading => "top_leading",
            Anchor::Top => "top",
            Anchor::TopTrailing => "top_trailing",
            Anchor::Leading => "leading",
            Anchor::Center => "center",
            Anchor::Trailing => "trailing",
            Anchor::BottomLeading => "bottom_leading",
            Anchor::Bottom => "bottom",
            Anchor::BottomTrailing => "bottom_trailing",
        }
    }
}

/// Padding in renderer points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const fn all(v: f32) -> Self {
        Self {
            top: v,
            leading: v,
            bottom: v,
            trailing: v,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }
}

/// One node of a keypad layout tree.
///
/// Plain data: the renderer that walks it owns all sizing, drawing and
/// hit-testing. Buttons carry the [`NumpadKey`] they send when tapped.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyboardLayout {
    VStack {
        children: Vec<KeyboardLayout>,
    },
    HStack {
        children: Vec<KeyboardLayout>,
    },
    ZStack {
        children: Vec<KeyboardLayout>,
    },
    Grid {
        columns: u16,
        spacing: f32,
        items: Vec<KeyboardLayout>,
    },
    Boxed {
        padding: EdgeInsets,
        child: Box<KeyboardLayout>,
    },
    AspectRatio {
        ratio: f32,
        child: Box<KeyboardLayout>,
    },
    Overlay {
        anchor: Anchor,
        child: Box<KeyboardLayout>,
    },
    Spacer {
        flex: f32,
    },
    Button {
        title: String,
        key: NumpadKey,
    },
    ImageButton {
        image: String,
        key: NumpadKey,
    },
    Empty,
}

impl KeyboardLayout {
    pub fn vstack(children: impl IntoIterator<Item = KeyboardLayout>) -> Self {
        KeyboardLayout::VStack {
            children: children.into_iter().collect(),
        }
    }

    pub fn hstack(children: impl IntoIterator<Item = KeyboardLayout>) -> Self {
        KeyboardLayout::HStack {
            children: children.into_iter().collect(),
        }
    }

    pub fn zstack(children: impl IntoIterator<Item = KeyboardLayout>) -> Self {
        KeyboardLayout::ZStack {
            children: children.into_iter().collect(),
        }
    }

    pub fn grid(
        columns: u16,
        spacing: f32,
        items: impl IntoIterator<Item = KeyboardLayout>,
    ) -> Self {
        KeyboardLayout::Grid {
            columns,
            spacing,
            items: items.into_iter().collect(),
        }
    }

    pub fn boxed(padding: EdgeInsets, child: KeyboardLayout) -> Self {
        KeyboardLayout::Boxed {
            padding,
            child: Box::new(child),
        }
    }

    pub fn aspect_ratio(ratio: f32, child: KeyboardLayout) -> Self {
        KeyboardLayout::AspectRatio {
            ratio,
            child: Box::new(child),
        }
    }

    pub fn overlay(anchor: Anchor, child: KeyboardLayout) -> Self {
        KeyboardLayout::Overlay {
            anchor,
            child: Box::new(child),
        }
    }

    pub fn spacer(flex: f32) -> Self {
        KeyboardLayout::Spacer { flex }
    }

    pub fn button(title: impl Into<String>, key: NumpadKey) -> Self {
        KeyboardLayout::Button {
            title: title.into(),
            key,
        }
    }

    pub fn image_button(image: impl Into<String>, key: NumpadKey) -> Self {
        KeyboardLayout::ImageButton {
            image: image.into(),
            key,
        }
    }

    /// Direct children of this node, in order.
    pub fn children(&self) -> &[KeyboardLayout] {
        match self {
            KeyboardLayout::VStack { children }
            | KeyboardLayout::HStack { children }
            | KeyboardLayout::ZStack { children } => children,
            KeyboardLayout::Grid { items, .. } => items,
            KeyboardLayout::Boxed { child, .. }
            | KeyboardLayout::AspectRatio { child, .. }
            | KeyboardLayout::Overlay { child, .. } => std::slice::from_ref(child.as_ref()),
            KeyboardLayout::Spacer { .. }
            | KeyboardLayout::Button { .. }
            | KeyboardLayout::ImageButton { .. }
            | KeyboardLayout::Empty => &[],
        }
    }

    /// The key this node sends, for buttons.
    pub fn key(&self) -> Option<NumpadKey> {
        match self {
            KeyboardLayout::Button { key, .. } | KeyboardLayout::ImageButton { key, .. } => {
                Some(*key)
            }
            _ => None,
        }
    }

    /// Every key reachable in the tree, depth-first in document order.
    pub fn keys(&self) -> Vec<NumpadKey> {
        let mut out = Vec::new();
        collect_keys(self, &mut out);
        out
    }

    pub fn contains_key(&self, key: NumpadKey) -> bool {
        self.key() == Some(key) || self.children().iter().any(|c| c.contains_key(key))
    }

    /// Title of the first text button sending `key`.
    pub fn title_for(&self, key: NumpadKey) -> Option<&str> {
        if let KeyboardLayout::Button { title, key: k } = self
            && *k == key
        {
            return Some(title.as_str());
        }
        self.children().iter().find_map(|c| c.title_for(key))
    }
}

fn collect_keys(node: &KeyboardLayout, out: &mut Vec<NumpadKey>) {
    if let Some(key) = node.key() {
        out.push(key);
    }
    for child in node.children() {
        collect_keys(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyboardLayout {
        KeyboardLayout::vstack([
            KeyboardLayout::grid(
                3,
                8.0,
                [
                    KeyboardLayout::button("1", NumpadKey::Digit(1)),
                    KeyboardLayout::aspect_ratio(
                        1.0,
                        KeyboardLayout::button("2", NumpadKey::Digit(2)),
                    ),
                ],
            ),
            KeyboardLayout::overlay(
                Anchor::TopTrailing,
                KeyboardLayout::image_button("delete.left", NumpadKey::Backspace),
            ),
            KeyboardLayout::spacer(1.0),
            KeyboardLayout::Empty,
        ])
    }

    #[test]
    fn keys_are_collected_depth_first() {
        assert_eq!(
            sample().keys(),
            vec![
                NumpadKey::Digit(1),
                NumpadKey::Digit(2),
                NumpadKey::Backspace
            ]
        );
    }

    #[test]
    fn contains_key_walks_wrappers() {
        let layout = sample();
        assert!(layout.contains_key(NumpadKey::Digit(2)));
        assert!(layout.contains_key(NumpadKey::Backspace));
        assert!(!layout.contains_key(NumpadKey::Minus));
    }

    #[test]
    fn title_for_ignores_image_buttons() {
        let layout = sample();
        assert_eq!(layout.title_for(NumpadKey::Digit(1)), Some("1"));
        assert_eq!(layout.title_for(NumpadKey::Backspace), None);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(KeyboardLayout::Empty.children().is_empty());
        assert!(KeyboardLayout::spacer(2.0).children().is_empty());
    }
}
