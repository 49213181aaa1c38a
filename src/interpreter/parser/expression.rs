use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        cursor::Cursor,
        evaluator::{binary::core::eval_add, core::Environment, function::core::lookup_builtin},
        lexer::Token,
        parser::{
            core::ParseResult,
            literal::{parse_array, parse_number, starts_number},
            utils::parse_comma_separated,
        },
        value::core::Value,
    },
};

/// Parses and evaluates a full expression.
///
/// `+` is left-associative: `a + b + c` is `(a + b) + c`. Each sum is
/// computed as soon as its right operand is known.
///
/// Grammar: `expr := term ("+" term)*`
///
/// # Errors
/// `TypeMismatch` or `Overflow` from an addition, and any error from the
/// terms.
pub fn parse_expression(cursor: &mut Cursor<'_>, env: &Environment) -> ParseResult<Value> {
    let mut left = parse_term(cursor, env)?;

    while cursor.peek()? == Some(Token::Plus) {
        let offset = cursor.consume(Token::Plus)?.span.start;
        let right = parse_term(cursor, env)?;
        left = eval_add(&left, &right, offset)?;
    }

    Ok(left)
}

/// Parses and evaluates a single term.
///
/// Grammar:
/// ```text
/// term := "(" expr ")" | call | NAME | array | number
/// call := word "(" (expr ("," expr)*)? ")"
/// ```
///
/// A word followed by `(` is always a function call and is resolved through
/// the builtin table, whatever its case. Otherwise the word must be an
/// uppercase name, which is looked up in `env`.
///
/// # Errors
/// - `UndefinedVariable` for a name with no binding.
/// - `ExpectedName` for a lowercase word used as a variable.
/// - `UnknownFunction` for a call to anything but a builtin.
/// - `UnexpectedToken` if the next token cannot start a term.
/// - `NestingTooDeep` if a parenthesis or call opens one level too many.
pub fn parse_term(cursor: &mut Cursor<'_>, env: &Environment) -> ParseResult<Value> {
    match cursor.peek()? {
        Some(Token::LParen) => {
            cursor.nested(|cursor| {
                      cursor.consume(Token::LParen)?;
                      let value = parse_expression(cursor, env)?;
                      cursor.consume(Token::RParen)?;
                      Ok(value)
                  })
        },
        Some(token @ (Token::Name(name) | Token::Word(name))) => {
            let offset = cursor.offset();
            cursor.consume(token)?;

            if cursor.peek()? == Some(Token::LParen) {
                return parse_function_call(cursor, env, name, offset);
            }

            match token {
                Token::Name(_) => env.lookup(name, offset),
                _ => Err(ConfigSyntaxError::ExpectedName { found: format!("'{name}'"),
                                                           offset }),
            }
        },
        Some(Token::Quote) => parse_array(cursor, env),
        Some(token) if starts_number(token) => parse_number(cursor),
        _ => Err(ConfigSyntaxError::UnexpectedToken { token:  cursor.found(),
                                                      offset: cursor.offset(), }),
    }
}

/// Parses the argument list of a builtin call and applies the builtin.
///
/// The name is resolved before any argument is read, so a call to an unknown
/// function is reported at its name. Arguments are evaluated left to right.
fn parse_function_call(cursor: &mut Cursor<'_>,
                       env: &Environment,
                       name: &str,
                       offset: usize)
                       -> ParseResult<Value> {
    let builtin = lookup_builtin(name, offset)?;

    let arguments = cursor.nested(|cursor| {
                              cursor.consume(Token::LParen)?;
                              parse_comma_separated(cursor, env, parse_expression, Token::RParen)
                          })?;

    builtin.call(&arguments, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::cursor::MAX_NESTING_DEPTH};

    fn eval(source: &str, env: &Environment) -> ParseResult<Value> {
        parse_expression(&mut Cursor::new(source), env)
    }

    fn eval_empty(source: &str) -> ParseResult<Value> {
        eval(source, &Environment::new())
    }

    #[test]
    fn addition_is_left_associative() {
        assert_eq!(eval_empty("1 + 2 + 3").unwrap(), Value::Integer(6));
        assert_eq!(eval_empty("1 + 2.5").unwrap(), Value::Float(3.5));
        assert_eq!(eval_empty("'(1) + '(2) + '()").unwrap().to_string(), "[1, 2]");
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(eval_empty("'(1) + ('(2) + '(3))").unwrap().to_string(), "[1, 2, 3]");
        assert_eq!(eval_empty("((4))").unwrap(), Value::Integer(4));
    }

    #[test]
    fn variables_are_substituted_by_value() {
        let mut env = Environment::new();
        env.define("A", Value::Integer(5));
        env.define("XS", Value::from(vec![Value::Integer(1)]));
        assert_eq!(eval("A + 3", &env).unwrap(), Value::Integer(8));
        assert_eq!(eval("XS + XS", &env).unwrap().to_string(), "[1, 1]");
    }

    #[test]
    fn builtin_calls() {
        assert_eq!(eval_empty("min(1, 2, 3)").unwrap(), Value::Integer(1));
        assert_eq!(eval_empty("min('(3 1 2))").unwrap(), Value::Integer(1));
        assert_eq!(eval_empty("concat('(1 2), 3, '(4))").unwrap().to_string(), "[1, 2, 3, 4]");
        assert_eq!(eval_empty("concat()").unwrap(), Value::from(Vec::<Value>::new()));
        assert_eq!(eval_empty("min(2, 1 + 5) + concat (1) + 0").unwrap_err().kind(),
                   ErrorKind::TypeMismatch);
        assert_eq!(eval_empty("min(concat('(4), 2), 3)").unwrap(), Value::Integer(2));
    }

    #[test]
    fn undefined_variable_names_identifier() {
        let err = eval_empty("1 + WIDTH").unwrap_err();
        assert_eq!(err,
                   ConfigSyntaxError::UndefinedVariable { name:   "WIDTH".to_string(),
                                                          offset: 4, });
    }

    #[test]
    fn unknown_function_reported_before_arguments() {
        let err = eval_empty("max(B)").unwrap_err();
        assert_eq!(err,
                   ConfigSyntaxError::UnknownFunction { name:   "max".to_string(),
                                                        offset: 0, });
        let err = eval_empty("F(1)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFunction);
    }

    #[test]
    fn lowercase_word_is_not_a_variable() {
        let err = eval_empty("min").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedName);
    }

    #[test]
    fn argument_list_errors() {
        assert_eq!(eval_empty("min()").unwrap_err().kind(), ErrorKind::EmptyArguments);
        assert_eq!(eval_empty("min(1 2)").unwrap_err().kind(), ErrorKind::UnexpectedChar);
        assert_eq!(eval_empty("min(1,)").unwrap_err().kind(), ErrorKind::UnexpectedToken);
        assert_eq!(eval_empty("min(1").unwrap_err().kind(), ErrorKind::UnexpectedChar);
    }

    #[test]
    fn deep_parentheses_and_calls_are_rejected() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = eval_empty(&source).unwrap_err();
        assert_eq!(err,
                   ConfigSyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                       offset: MAX_NESTING_DEPTH, });

        let source = format!("{}1{}", "min(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(eval_empty(&source).unwrap_err().kind(), ErrorKind::NestingTooDeep);

        let source = format!("{}1{}", "min((".repeat(64), "))".repeat(64));
        assert_eq!(eval_empty(&source).unwrap(), Value::Integer(1));
    }

    #[test]
    fn type_mismatch_points_at_operator() {
        let err = eval_empty("1 + '(2)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.offset(), 2);
    }
}
