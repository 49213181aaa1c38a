use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        cursor::Cursor,
        evaluator::core::Environment,
        lexer::Token,
        parser::{core::{ParseResult, parse_value}, expression::parse_expression},
        value::core::Value,
    },
};

/// Returns `true` if `token` may start a number: a digit or a `-`.
///
/// A literal such as `.5` is a valid float only after a minus sign.
pub(in crate::interpreter::parser) fn starts_number(token: Token<'_>) -> bool {
    match token {
        Token::Integer(_) | Token::Minus => true,
        Token::Float(text) => !text.starts_with('.'),
        _ => false,
    }
}

/// Parses a numeric literal.
///
/// Classification is lexical: a literal containing `.` or an exponent marker
/// is a float, anything else is an integer.
///
/// # Errors
/// - `ExpectedNumber` if a `-` is not immediately followed by a number.
/// - `LiteralTooLarge` if an integer literal does not fit in `i64`, or a
///   float literal rounds to infinity.
pub fn parse_number(cursor: &mut Cursor<'_>) -> ParseResult<Value> {
    cursor.peek()?;
    let found = cursor.found();
    let offset = cursor.offset();

    match cursor.next_lexeme()? {
        Some(lexeme) => match lexeme.token {
            Token::Integer(text) => {
                text.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| ConfigSyntaxError::LiteralTooLarge { literal: text.to_string(),
                                                                      offset })
            },
            Token::Float(text) => match text.parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Value::Float(x)),
                Ok(_) => Err(ConfigSyntaxError::LiteralTooLarge { literal: text.to_string(),
                                                                  offset }),
                Err(_) => Err(ConfigSyntaxError::ExpectedNumber { found, offset }),
            },
            _ => Err(ConfigSyntaxError::ExpectedNumber { found, offset }),
        },
        None => Err(ConfigSyntaxError::ExpectedNumber { found, offset }),
    }
}

/// Parses an array literal of the form `'( value value ... )`.
///
/// Elements are separated by trivia only. `'()` is the empty array.
///
/// # Errors
/// - `UnexpectedChar` if `'` is not followed by `(`.
/// - `UnterminatedArray` if the input ends before the closing `)`.
/// - `NestingTooDeep` if the array opens one level too many.
pub fn parse_array(cursor: &mut Cursor<'_>, env: &Environment) -> ParseResult<Value> {
    cursor.peek()?;
    cursor.nested(|cursor| {
              let start = cursor.consume(Token::Quote)?.span.start;
              cursor.consume(Token::LParen)?;

              let mut elements = Vec::new();
              loop {
                  match cursor.peek()? {
                      Some(Token::RParen) => {
                          cursor.consume(Token::RParen)?;
                          break;
                      },
                      Some(_) => elements.push(parse_value(cursor, env)?),
                      None => {
                          return Err(ConfigSyntaxError::UnterminatedArray { start,
                                                                            offset:
                                                                                cursor.offset() });
                      },
                  }
              }

              Ok(Value::from(elements))
          })
}

/// Parses and evaluates a constant-expression block `{ expr }`.
///
/// # Errors
/// `UnexpectedChar` if the expression is not followed by `}`, and
/// `NestingTooDeep` if the block opens one level too many. Errors from the
/// expression are propagated unchanged.
pub fn parse_const_expr(cursor: &mut Cursor<'_>, env: &Environment) -> ParseResult<Value> {
    cursor.peek()?;
    cursor.nested(|cursor| {
              cursor.consume(Token::LBrace)?;
              let value = parse_expression(cursor, env)?;
              cursor.consume(Token::RBrace)?;

              Ok(value)
          })
}
