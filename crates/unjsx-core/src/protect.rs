//! Masking of brace-delimited expressions.
//!
//! Before markup is matched, every `{...}` span without nested braces is
//! swapped for a `__PROTECTED_<n>__` token so that `>` or `<` inside an
//! expression cannot be mistaken for a tag boundary. The table built here
//! lives for one pipeline run and is used afterwards to put the original
//! text back.
//!
//! Nested braces are not handled: in `{a.map(x => ({y: x}))}` only the
//! innermost brace-free span `{y: x}` is masked.

use regex::Regex;
use std::sync::LazyLock;

static EXPRESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("Invalid expression regex"));

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^__PROTECTED_(\d+)__$").expect("Invalid placeholder regex"));

/// Build the placeholder token for a table index.
pub fn placeholder(index: usize) -> String {
    format!("__PROTECTED_{}__", index)
}

/// Ordered table of masked expressions for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtectedExpressions {
    /// Original text (braces included), indexed by placeholder number
    entries: Vec<String>,
}

impl ProtectedExpressions {
    /// Mask every brace-delimited expression in `source`.
    ///
    /// Returns the masked buffer and the table needed to restore it.
    pub fn protect(source: &str) -> (String, Self) {
        let mut table = Self::default();

        let masked = EXPRESSION_RE
            .replace_all(source, |caps: &regex::Captures| {
                let index = table.entries.len();
                table.entries.push(caps[0].to_string());
                placeholder(index)
            })
            .into_owned();

        (masked, table)
    }

    /// Replace each placeholder in `buffer` with its original text, in table order.
    pub fn restore(&self, buffer: &str) -> String {
        let mut restored = buffer.to_string();
        for (index, original) in self.entries.iter().enumerate() {
            restored = restored.replace(&placeholder(index), original);
        }
        restored
    }

    /// Original text for an index, braces included.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Look up a whole placeholder token such as `__PROTECTED_3__`.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        let caps = PLACEHOLDER_RE.captures(token)?;
        let index: usize = caps[1].parse().ok()?;
        self.get(index)
    }

    /// Iterate over `(index, original)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(String::as_str).enumerate()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
