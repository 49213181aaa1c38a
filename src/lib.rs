//! # confjson
//!
//! confjson translates a small declarative configuration language into JSON.
//! A document is a sequence of `var NAME value` declarations and bare values;
//! values are numbers, `'( ... )` arrays and `{ ... }` constant-expression
//! blocks that may add numbers or arrays and call the builtins `min` and
//! `concat`.
//!
//! ```text
//! <!-- screen geometry -->
//! var WIDTH 640
//! var SIZES '(16 32 {WIDTH + 0.5})
//! {concat(SIZES, min(SIZES, 8))}
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for parsing and evaluation.
///
/// Parsing and evaluation happen in the same pass, so a single error family
/// covers lexical mistakes, malformed syntax and invalid operations alike.
///
/// # Responsibilities
/// - Defines one variant per failure mode, each with its source offset.
/// - Exposes a fieldless `ErrorKind` for matching on the category.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the cursor, parser, evaluator and value types.
/// - Provides the entry points for parsing whole documents.
pub mod interpreter;
/// General utilities shared by the library and the command-line tool.
pub mod util;

pub use error::{ConfigSyntaxError, ErrorKind};
pub use interpreter::{parser::document::Document, value::core::Value};

/// Parses and evaluates a configuration document.
///
/// Every call uses its own cursor and a fresh environment; nothing is shared
/// between calls.
///
/// # Errors
/// Returns the first error met in left-to-right order.
///
/// # Examples
/// ```
/// use confjson::{Document, ErrorKind, Value, parse};
///
/// let doc = parse("var A 5 {A + 3}").unwrap();
/// assert_eq!(doc, Document::Single(Value::Integer(8)));
///
/// let err = parse("{min()}").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::EmptyArguments);
/// ```
pub fn parse(source: &str) -> Result<Document, ConfigSyntaxError> {
    interpreter::parser::document::parse_document(source)
}

/// Renders a document as JSON.
///
/// Pretty output uses two-space indentation. Non-ASCII characters are never
/// escaped.
///
/// # Errors
/// Returns an error only if the serializer itself fails.
///
/// # Examples
/// ```
/// use confjson::{parse, to_json};
///
/// let doc = parse("'(1 2.5)").unwrap();
/// assert_eq!(to_json(&doc, false).unwrap(), "[1,2.5]");
/// assert_eq!(to_json(&doc, true).unwrap(), "[\n  1,\n  2.5\n]");
/// ```
pub fn to_json(document: &Document, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
}
