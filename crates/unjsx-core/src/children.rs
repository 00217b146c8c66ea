//! Conversion of the content between an opening and closing tag.

use crate::emit::single_quoted;

/// Convert element children into a call argument.
///
/// Plain text becomes a string literal. Content holding nested markup is
/// also wrapped whole as one string literal; nested elements and sibling
/// lists are not decomposed into call arguments. Returns `None` for empty
/// content. `_indent` is accepted for callers that lay out nested calls.
pub fn convert_children(children: &str, _indent: &str) -> Option<String> {
    let children = children.trim();
    if children.is_empty() {
        return None;
    }

    Some(single_quoted(children))
}
