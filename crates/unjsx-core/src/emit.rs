//! Call-expression formatting.

/// Wrap text in single quotes, escaping any single quote not already escaped.
pub fn single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');

    let mut escaped = false;
    for ch in text.chars() {
        if ch == '\'' && !escaped {
            out.push('\\');
        }
        escaped = ch == '\\' && !escaped;
        out.push(ch);
    }

    out.push('\'');
    out
}

/// Two-argument form: `NS.createElement('tag', props)`.
pub fn create_element_call(namespace: &str, tag: &str, props: &str) -> String {
    format!("{}.createElement('{}', {})", namespace, tag, props)
}

/// Three-argument form, one argument per line.
///
/// `indent` is the indentation of the closing parenthesis; arguments sit one
/// `unit` deeper.
pub fn create_element_call_with_children(
    namespace: &str,
    tag: &str,
    props: &str,
    children: &str,
    indent: &str,
    unit: &str,
) -> String {
    format!(
        "{namespace}.createElement(\n{indent}{unit}'{tag}',\n{indent}{unit}{props},\n{indent}{unit}{children}\n{indent})"
    )
}
