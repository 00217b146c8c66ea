//! Conversion of a single JSX element into a `createElement` call.

use regex::Regex;
use std::sync::LazyLock;

use crate::attributes::translate_attributes;
use crate::children::convert_children;
use crate::emit::{create_element_call, create_element_call_with_children};
use crate::protect::ProtectedExpressions;
use crate::traits::ConvertOptions;

/// A recognized element span.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpan<'a> {
    /// Tag name (e.g., "div" or "Button")
    pub tag: &'a str,

    /// Raw attribute list between the tag name and `>` or `/>`
    pub attrs: &'a str,

    /// Content between the tags, `None` when self-closing
    pub children: Option<&'a str>,
}

impl ElementSpan<'_> {
    pub fn is_self_closing(&self) -> bool {
        self.children.is_none()
    }
}

static SELF_CLOSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(\w+)([^>]*?)/>\s*$").expect("Invalid self-closing regex")
});

// The closing name is captured separately and compared after matching.
static WITH_CHILDREN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(\w+)([^>]*?)>([\s\S]*)</(\w+)>\s*$").expect("Invalid element regex")
});

/// Classify trimmed markup as a self-closing element or an element whose
/// closing tag name equals its opening tag name.
pub fn parse_element(jsx: &str) -> Option<ElementSpan<'_>> {
    if let Some(caps) = SELF_CLOSING_RE.captures(jsx) {
        return Some(ElementSpan {
            tag: caps.get(1)?.as_str(),
            attrs: caps.get(2)?.as_str(),
            children: None,
        });
    }

    let caps = WITH_CHILDREN_RE.captures(jsx)?;
    let tag = caps.get(1)?.as_str();
    if caps.get(4)?.as_str() != tag {
        return None;
    }

    Some(ElementSpan {
        tag,
        attrs: caps.get(2)?.as_str(),
        children: Some(caps.get(3)?.as_str()),
    })
}

/// Converts element markup into call expressions.
#[derive(Debug, Clone, Copy)]
pub struct ElementConverter<'a> {
    options: &'a ConvertOptions,
    expressions: Option<&'a ProtectedExpressions>,
}

impl<'a> ElementConverter<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            expressions: None,
        }
    }

    /// Resolve masked attribute values through the table of the current run.
    pub fn with_expressions(mut self, expressions: &'a ProtectedExpressions) -> Self {
        self.expressions = Some(expressions);
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        self.options
    }

    /// Convert one element. Markup that is not a recognizable element is
    /// returned unchanged.
    pub fn convert(&self, jsx: &str, indent: &str) -> String {
        let jsx = jsx.trim();
        let Some(element) = parse_element(jsx) else {
            return jsx.to_string();
        };

        let namespace = &self.options.namespace;
        let props = translate_attributes(element.attrs, self.expressions);

        let children = element.children.and_then(|children| {
            let child_indent = format!("{}{}", indent, self.options.indent_unit);
            convert_children(children, &child_indent)
        });

        match children {
            Some(children) => create_element_call_with_children(
                namespace,
                element.tag,
                &props,
                &children,
                indent,
                &self.options.indent_unit,
            ),
            None => create_element_call(namespace, element.tag, &props),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(jsx: &str) -> String {
        ElementConverter::new(&ConvertOptions::default()).convert(jsx, "")
    }

    #[test]
    fn parses_self_closing() {
        let element = parse_element(r#"<Icon name="star" />"#).unwrap();

        assert_eq!(element.tag, "Icon");
        assert_eq!(element.attrs, r#" name="star" "#);
        assert!(element.is_self_closing());
    }

    #[test]
    fn parses_with_children() {
        let element = parse_element("<p class=\"x\">Some <b>bold</b></p>").unwrap();

        assert_eq!(element.tag, "p");
        assert_eq!(element.children, Some("Some <b>bold</b>"));
    }

    #[test]
    fn rejects_mismatched_close_tag() {
        assert_eq!(parse_element("<div>text</span>"), None);
        assert_eq!(parse_element("<Div>text</div>"), None);
    }

    #[test]
    fn converts_self_closing_with_expression() {
        assert_eq!(
            convert("<Input value={v} />"),
            "React.createElement('Input', { value: v })"
        );
    }

    #[test]
    fn converts_text_child_to_third_argument() {
        assert_eq!(
            convert("<div>Hello</div>"),
            "React.createElement(\n  'div',\n  null,\n  'Hello'\n)"
        );
    }

    #[test]
    fn empty_elements_use_two_argument_form() {
        assert_eq!(convert("<br></br>"), "React.createElement('br', null)");
        assert_eq!(convert("<br/>"), "React.createElement('br', null)");
        assert_eq!(convert("<br />"), "React.createElement('br', null)");
        assert_eq!(
            convert("<div class=\"gap\">  \n  </div>"),
            "React.createElement('div', { className: 'gap' })"
        );
    }

    #[test]
    fn nested_children_are_wrapped_as_text() {
        assert_eq!(
            convert("<ul><li>One</li></ul>"),
            "React.createElement(\n  'ul',\n  null,\n  '<li>One</li>'\n)"
        );
    }

    #[test]
    fn indentation_applies_to_arguments() {
        let options = ConvertOptions::with_namespace("h");
        let call = ElementConverter::new(&options).convert("<em>x</em>", "    ");

        assert_eq!(call, "h.createElement(\n      'em',\n      null,\n      'x'\n    )");
    }

    #[test]
    fn passes_through_unrecognized_markup() {
        assert_eq!(convert("not markup"), "not markup");
        assert_eq!(convert("<a>open only"), "<a>open only");
        assert_eq!(convert("<>fragment</>"), "<>fragment</>");
    }

    #[test]
    fn trims_input_before_matching() {
        assert_eq!(convert("\n   <hr/>\n"), "React.createElement('hr', null)");
    }
}
