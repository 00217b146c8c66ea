//! Translation of JSX attribute lists into object literals.

use regex::Regex;
use std::sync::LazyLock;

use crate::emit::single_quoted;
use crate::protect::ProtectedExpressions;

/// One attribute occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Name as written in the source
    pub name: String,

    /// Value and how it was written
    pub value: AttributeValue,
}

/// An attribute value from JSX.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Expression: onClick={handler}
    Expression(String),
    /// Double-quoted string: title="text"
    DoubleQuoted(String),
    /// Single-quoted string: title='text'
    SingleQuoted(String),
    /// Name only: disabled
    Implicit,
}

impl AttributeValue {
    /// Render the value as it appears in the props object.
    pub fn to_js(&self) -> String {
        match self {
            AttributeValue::Expression(expr) => expr.clone(),
            AttributeValue::DoubleQuoted(text) | AttributeValue::SingleQuoted(text) => {
                single_quoted(text)
            }
            AttributeValue::Implicit => "true".to_string(),
        }
    }
}

impl Attribute {
    /// Object key for this attribute.
    ///
    /// `class` and `for` become their DOM property names; hyphenated names
    /// are quoted so they stay valid keys.
    pub fn key(&self) -> String {
        match self.name.as_str() {
            "class" => "className".to_string(),
            "for" => "htmlFor".to_string(),
            name if name.contains('-') => format!("'{}'", name),
            name => name.to_string(),
        }
    }

    /// `key: value` entry for the props object.
    pub fn to_entry(&self) -> String {
        format!("{}: {}", self.key(), self.value.to_js())
    }
}

// Match: name, name={expr}, name="text", name='text', or a masked name=__PROTECTED_n__
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\w+(?:-\w+)*)(?:=(?:\{([^}]*)\}|"([^"]*)"|'([^']*)'|(__PROTECTED_\d+__)))?"#,
    )
    .expect("Invalid attribute regex")
});

/// Parse every attribute occurrence in source order.
///
/// Repeated names are kept. When `expressions` is given, masked values are
/// resolved back to the expression they stand for.
pub fn parse_attributes(attrs: &str, expressions: Option<&ProtectedExpressions>) -> Vec<Attribute> {
    ATTRIBUTE_RE
        .captures_iter(attrs)
        .map(|caps| {
            let name = caps[1].to_string();

            let value = if let Some(m) = caps.get(2) {
                expression_value(m.as_str())
            } else if let Some(m) = caps.get(3) {
                AttributeValue::DoubleQuoted(m.as_str().to_string())
            } else if let Some(m) = caps.get(4) {
                AttributeValue::SingleQuoted(m.as_str().to_string())
            } else if let Some(m) = caps.get(5) {
                let token = m.as_str();
                match expressions.and_then(|table| table.resolve(token)) {
                    Some(original) => expression_value(&original[1..original.len() - 1]),
                    None => AttributeValue::Expression(token.to_string()),
                }
            } else {
                AttributeValue::Implicit
            };

            Attribute { name, value }
        })
        .collect()
}

/// An empty `{}` carries nothing to pass along, so it counts as a bare name.
fn expression_value(expr: &str) -> AttributeValue {
    if expr.is_empty() {
        AttributeValue::Implicit
    } else {
        AttributeValue::Expression(expr.to_string())
    }
}

/// Translate a raw attribute list into `null` or `{ key: value, ... }`.
pub fn translate_attributes(attrs: &str, expressions: Option<&ProtectedExpressions>) -> String {
    if attrs.trim().is_empty() {
        return "null".to_string();
    }

    let entries: Vec<String> = parse_attributes(attrs, expressions)
        .iter()
        .map(Attribute::to_entry)
        .collect();

    if entries.is_empty() {
        "null".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}
