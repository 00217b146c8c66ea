//! Extraction of `return` statements whose body is JSX.
//!
//! Two forms are recognized, in this order:
//!
//! ```text
//! return (
//!   <div>...</div>
//! );
//!
//! return <Icon />;
//! ```
//!
//! The second pattern runs on the output of the first. Any other `return`
//! is left untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::element::ElementConverter;

static PARENTHESIZED_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)return\s+\(\s*\n?\s*(<[\s\S]*?>[\s\S]*?</[^>]+>)\s*\);")
        .expect("Invalid parenthesized return regex")
});

static INLINE_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)return\s+(<[^;]+>);").expect("Invalid inline return regex")
});

/// Rewrite every JSX `return` in `buffer`.
///
/// Returns the rewritten buffer and the number of statements converted.
pub fn extract_returns(buffer: &str, converter: &ElementConverter<'_>) -> (String, usize) {
    let mut count = 0;

    let buffer = PARENTHESIZED_RETURN_RE
        .replace_all(buffer, |caps: &Captures| rewrite(caps, converter, &mut count))
        .into_owned();
    let buffer = INLINE_RETURN_RE
        .replace_all(&buffer, |caps: &Captures| rewrite(caps, converter, &mut count))
        .into_owned();

    (buffer, count)
}

/// Replace one matched statement, keeping its indentation.
fn rewrite(caps: &Captures<'_>, converter: &ElementConverter<'_>, count: &mut usize) -> String {
    *count += 1;

    let indent = &caps[1];
    let inner_indent = format!("{}{}", indent, converter.options().indent_unit);
    let converted = converter.convert(caps[2].trim(), &inner_indent);

    format!("{}return {};", indent, converted)
}
