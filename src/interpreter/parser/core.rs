use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        cursor::Cursor,
        evaluator::core::Environment,
        lexer::Token,
        parser::literal::{parse_array, parse_const_expr, parse_number, starts_number},
        value::core::Value,
    },
};

pub type ParseResult<T> = Result<T, ConfigSyntaxError>;

/// Parses one value.
///
/// This is the entry point for everything that can appear after `var NAME`,
/// inside an array literal, or at the top level of a document. The next
/// significant token decides the form:
///
/// - `'` starts an array literal,
/// - `{` starts a constant-expression block,
/// - a digit or `-` starts a number.
///
/// # Parameters
/// - `cursor`: Cursor positioned before the value.
/// - `env`: Variables visible to any block inside the value.
///
/// # Errors
/// `UnexpectedToken` if the next token cannot start a value, including at end
/// of input. Errors from the chosen form are propagated unchanged.
pub fn parse_value(cursor: &mut Cursor<'_>, env: &Environment) -> ParseResult<Value> {
    match cursor.peek()? {
        Some(Token::Quote) => parse_array(cursor, env),
        Some(Token::LBrace) => parse_const_expr(cursor, env),
        Some(token) if starts_number(token) => parse_number(cursor),
        _ => Err(ConfigSyntaxError::UnexpectedToken { token:  cursor.found(),
                                                      offset: cursor.offset(), }),
    }
}
