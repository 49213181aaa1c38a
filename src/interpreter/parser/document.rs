use serde::Serialize;
use tracing::debug;

use crate::interpreter::{
    cursor::Cursor,
    evaluator::core::Environment,
    lexer::Token,
    parser::core::{ParseResult, parse_value},
    value::core::Value,
};

/// The result of parsing a whole document.
///
/// Declarations never contribute to the output; only bare top-level values
/// do. A document with exactly one bare value unwraps to that value, any
/// other count (including zero) yields the ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// The only bare value of the document.
    Single(Value),
    /// All bare values, in source order.
    Sequence(Vec<Value>),
}

impl Document {
    /// Builds a document from the bare values of a source, in order.
    #[must_use]
    pub fn from_values(mut values: Vec<Value>) -> Self {
        if values.len() == 1
           && let Some(value) = values.pop()
        {
            return Self::Single(value);
        }
        Self::Sequence(values)
    }

    /// Returns the bare values, in source order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }
}

/// Parses a document with a fresh environment.
///
/// See [`parse_document_with`].
pub fn parse_document(source: &str) -> ParseResult<Document> {
    parse_document_with(source, &mut Environment::new())
}

/// Parses a document, binding its declarations into `env`.
///
/// Top-level units are processed strictly left to right:
///
/// - `var NAME value` evaluates `value` against the bindings made so far and
///   binds it, replacing any earlier binding of `NAME`;
/// - anything else is parsed as a value and appended to the output.
///
/// The first error aborts the parse; no partial document is returned.
///
/// # Example
/// ```
/// use confjson::{
///     Value,
///     interpreter::{evaluator::core::Environment, parser::document::parse_document_with},
/// };
///
/// let mut env = Environment::new();
/// let doc = parse_document_with("var A 5 {A + 3}", &mut env).unwrap();
///
/// assert_eq!(doc.values(), &[Value::Integer(8)]);
/// assert_eq!(env.get("A"), Some(&Value::Integer(5)));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_document_with(source: &str, env: &mut Environment) -> ParseResult<Document> {
    let mut cursor = Cursor::new(source);
    let mut values = Vec::new();

    while let Some(token) = cursor.peek()? {
        if token == Token::Var {
            cursor.consume(Token::Var)?;
            let (name, _) = cursor.read_name()?;
            let value = parse_value(&mut cursor, env)?;
            debug!(variable = name, %value, "declaration");
            if let Some(previous) = env.define(name, value) {
                debug!(variable = name, %previous, "redefined variable");
            }
        } else {
            let value = parse_value(&mut cursor, env)?;
            debug!(%value, "top-level value");
            values.push(value);
        }
    }

    Ok(Document::from_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigSyntaxError, ErrorKind};

    #[test]
    fn single_value_unwraps() {
        assert_eq!(parse_document("'(1 2 3)").unwrap(),
                   Document::Single(Value::from(vec![Value::Integer(1),
                                                     Value::Integer(2),
                                                     Value::Integer(3)])));
    }

    #[test]
    fn several_values_form_a_sequence() {
        assert_eq!(parse_document("1 2.5").unwrap(),
                   Document::Sequence(vec![Value::Integer(1), Value::Float(2.5)]));
    }

    #[test]
    fn declarations_only_give_empty_sequence() {
        let mut env = Environment::new();
        assert_eq!(parse_document_with("var A 1 <!-- nothing else -->", &mut env).unwrap(),
                   Document::Sequence(Vec::new()));
        assert_eq!(env.len(), 1);
        assert_eq!(parse_document("").unwrap(), Document::Sequence(Vec::new()));
    }

    #[test]
    fn redefinition_affects_later_references_only() {
        let doc = parse_document("var A 1 {A} var A 2 {A}").unwrap();
        assert_eq!(doc.values(), &[Value::Integer(1), Value::Integer(2)]);
    }

    #[test]
    fn var_requires_a_name() {
        let err = parse_document("var a 1").unwrap_err();
        assert_eq!(err,
                   ConfigSyntaxError::ExpectedName { found:  "'a'".to_string(),
                                                     offset: 4, });
    }

    #[test]
    fn var_requires_a_value() {
        let err = parse_document("var A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn serializes_untagged() {
        let doc = parse_document("var N 2 '({N + 1}) 4.0").unwrap();
        assert_eq!(serde_json::to_string(&doc).unwrap(), "[[3],4.0]");
    }
}
