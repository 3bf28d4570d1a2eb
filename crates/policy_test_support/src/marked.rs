use input_core::{NumericValue, SelectionRange};

/// Parse marker notation into a value.
///
/// Without markers the caret sits at the end. Panics on malformed input.
pub fn parse_marked(marked: &str) -> NumericValue {
    let mut text = String::with_capacity(marked.len());
    let mut offset = 0usize;
    let mut caret = None;
    let mut sel_start = None;
    let mut sel_end = None;
    for ch in marked.chars() {
        match ch {
            '|' => {
                assert!(caret.is_none(), "duplicate caret marker in {marked:?}");
                caret = Some(offset);
            }
            '[' => {
                assert!(sel_start.is_none(), "duplicate '[' in {marked:?}");
                sel_start = Some(offset);
            }
            ']' => {
                assert!(sel_start.is_some(), "']' before '[' in {marked:?}");
                assert!(sel_end.is_none(), "duplicate ']' in {marked:?}");
                sel_end = Some(offset);
            }
            _ => {
                text.push(ch);
                offset += ch.len_utf16();
            }
        }
    }
    match (sel_start, sel_end) {
        (Some(start), Some(end)) => {
            assert!(caret.is_none(), "caret and selection both given in {marked:?}");
            NumericValue::new(text).with_selection(SelectionRange::new(start, end))
        }
        (None, None) => {
            let value = NumericValue::new(text);
            match caret {
                Some(caret) => value.with_caret(caret),
                None => value,
            }
        }
        _ => panic!("unbalanced selection markers in {marked:?}"),
    }
}

/// Render a value in marker notation. The caret is always written.
pub fn format_marked(value: &NumericValue) -> String {
    let mut out = String::with_capacity(value.text.len() + 2);
    let mut offset = 0usize;
    let marker_at = |offset: usize| -> Option<&'static str> {
        match value.selection {
            Some(range) if offset == range.start && offset == range.end => Some("[]"),
            Some(range) if offset == range.start => Some("["),
            Some(range) if offset == range.end => Some("]"),
            Some(_) => None,
            None if offset == value.caret => Some("|"),
            None => None,
        }
    };
    for ch in value.text.chars() {
        if let Some(marker) = marker_at(offset) {
            out.push_str(marker);
        }
        out.push(ch);
        offset += ch.len_utf16();
    }
    if let Some(marker) = marker_at(offset) {
        out.push_str(marker);
    }
    out
}
