//! Regex-driven lowering of JSX to explicit `createElement` calls.
//!
//! This crate rewrites `return` statements whose body is JSX markup into
//! nested call expressions without parsing the host language. The pipeline
//! masks brace-delimited expressions, converts the markup it can recognize,
//! and restores the masked text. Anything the patterns do not recognize is
//! left in place, so unconverted JSX in the output is an expected outcome.

pub mod attributes;
pub mod children;
pub mod element;
pub mod emit;
pub mod files;
pub mod pipeline;
pub mod protect;
pub mod statement;
pub mod traits;

pub use attributes::{parse_attributes, translate_attributes, Attribute, AttributeValue};
pub use children::convert_children;
pub use element::{parse_element, ElementConverter, ElementSpan};
pub use files::{convert_all, convert_file, discover_sources, FileReport, FilesError};
pub use pipeline::{lower, CreateElementLowering};
pub use protect::ProtectedExpressions;
pub use statement::extract_returns;
pub use traits::{ConvertOptions, JsxLowering, Lowered};
