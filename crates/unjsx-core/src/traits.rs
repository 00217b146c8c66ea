//! Shared options, results, and the lowering trait.

/// Options for one lowering run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Object whose `createElement` is called (e.g., "React")
    pub namespace: String,

    /// One indentation level used when laying out multi-line calls
    pub indent_unit: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            namespace: "React".to_string(),
            indent_unit: "  ".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Options calling `createElement` on the given namespace.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}

/// Result of lowering one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered {
    /// Transformed text
    pub output: String,

    /// Number of `return` statements rewritten
    pub statements: usize,

    /// Number of expressions masked during the run
    pub protected: usize,

    /// Whether the output differs from the input
    pub changed: bool,
}

/// Trait for JSX lowering strategies.
pub trait JsxLowering: Send + Sync {
    /// Strategy identifier (e.g., "create-element")
    fn name(&self) -> &'static str;

    /// File extensions this strategy handles
    fn extensions(&self) -> &[&'static str];

    /// Lower every recognizable JSX `return` statement in `source`.
    fn lower(&self, source: &str) -> Lowered;
}
