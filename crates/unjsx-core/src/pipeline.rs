//! The lowering pipeline: protect, extract, restore.
//!
//! The order is fixed. Restoring before extraction would expose raw
//! expressions to the markup patterns, and extracting before protection
//! would let `>` inside expressions end a tag early.

use crate::element::ElementConverter;
use crate::protect::ProtectedExpressions;
use crate::statement::extract_returns;
use crate::traits::{ConvertOptions, JsxLowering, Lowered};

/// Lower every recognizable JSX `return` statement in `source`.
pub fn lower(source: &str, options: &ConvertOptions) -> Lowered {
    let (masked, expressions) = ProtectedExpressions::protect(source);

    let converter = ElementConverter::new(options).with_expressions(&expressions);
    let (extracted, statements) = extract_returns(&masked, &converter);

    let output = expressions.restore(&extracted);

    tracing::debug!(
        statements,
        protected = expressions.len(),
        "Lowered buffer of {} bytes",
        source.len()
    );

    Lowered {
        changed: output != source,
        output,
        statements,
        protected: expressions.len(),
    }
}

/// Lowering to `<namespace>.createElement(...)` calls.
#[derive(Debug, Clone, Default)]
pub struct CreateElementLowering {
    options: ConvertOptions,
}

impl CreateElementLowering {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl JsxLowering for CreateElementLowering {
    fn name(&self) -> &'static str {
        "create-element"
    }

    fn extensions(&self) -> &[&'static str] {
        &["tsx", "jsx"]
    }

    fn lower(&self, source: &str) -> Lowered {
        lower(source, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lower_default(source: &str) -> Lowered {
        lower(source, &ConvertOptions::default())
    }

    #[test]
    fn converts_component_with_expressions() {
        let source = r#"export function Field({ value, onChange }) {
  return (
    <label class="field" for={id}>Name</label>
  );
}

export function Name({ v }) {
  return <Input value={v} onChange={e => onChange(e.target.value)} />;
}
"#;
        let result = lower_default(source);

        assert_eq!(
            result.output,
            r#"export function Field({ value, onChange }) {
  return React.createElement(
      'label',
      { className: 'field', htmlFor: id },
      'Name'
    );
}

export function Name({ v }) {
  return React.createElement('Input', { value: v, onChange: e => onChange(e.target.value) });
}
"#
        );
        assert_eq!(result.statements, 2);
        assert!(result.changed);
    }

    #[test]
    fn arrow_in_expression_does_not_end_the_tag() {
        let result = lower_default("  return <button onClick={() => go()} disabled />;\n");

        assert_eq!(
            result.output,
            "  return React.createElement('button', { onClick: () => go(), disabled: true });\n"
        );
    }

    #[test]
    fn non_jsx_source_is_unchanged() {
        let source = "function add(x) {\n  const o = { a: 1 };\n  return x + 1;\n}\n";
        let result = lower_default(source);

        assert_eq!(result.output, source);
        assert_eq!(result.statements, 0);
        assert_eq!(result.protected, 1);
        assert!(!result.changed);
    }

    #[test]
    fn expression_children_are_restored_inside_the_literal() {
        let result = lower_default("  return <h1>{title}</h1>;\n");

        assert_eq!(
            result.output,
            "  return React.createElement(\n      'h1',\n      null,\n      '{title}'\n    );\n"
        );
    }

    #[test]
    fn uses_configured_namespace() {
        let lowering = CreateElementLowering::new(ConvertOptions::with_namespace("Preact"));
        let result = lowering.lower("  return <br/>;\n");

        assert_eq!(result.output, "  return Preact.createElement('br', null);\n");
        assert_eq!(lowering.name(), "create-element");
        assert_eq!(lowering.extensions(), &["tsx", "jsx"]);
    }

    #[test]
    fn nested_brace_expression_is_only_partly_protected() {
        // The outer span keeps its raw `=>`; only `{y: x}` is masked and restored.
        let source = "  return <ul>{a.map(x => ({y: x}))}</ul>;\n";
        let result = lower_default(source);

        assert_eq!(result.protected, 1);
        assert!(result.output.contains("{a.map(x => ({y: x}))}"));
    }

    #[test]
    fn brace_free_function_body_is_masked_whole() {
        // The body is itself a protected span, so the extractor never sees
        // the return statement inside it.
        let source = "function A() {\n  return <br/>;\n}\n";
        let result = lower_default(source);

        assert_eq!(result.output, source);
        assert_eq!(result.statements, 0);
        assert_eq!(result.protected, 1);
    }
}
