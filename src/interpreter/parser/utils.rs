use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        cursor::Cursor, evaluator::core::Environment, lexer::Token, parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// The opening token must already be consumed. `parse_item` is called for
/// each element, after which either a comma (to continue) or `closing` (to
/// end the list) must follow. An immediately encountered closing token
/// produces an empty list; a trailing comma is not accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// - Errors from `parse_item`.
/// - `UnexpectedChar` if an item is followed by anything but a comma or the
///   closing token, including end of input.
pub(in crate::interpreter::parser) fn parse_comma_separated<'s, T>(
    cursor: &mut Cursor<'s>,
    env: &Environment,
    parse_item: impl Fn(&mut Cursor<'s>, &Environment) -> ParseResult<T>,
    closing: Token<'s>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.peek()? == Some(closing) {
        cursor.consume(closing)?;
        return Ok(items);
    }

    loop {
        items.push(parse_item(cursor, env)?);
        match cursor.peek()? {
            Some(Token::Comma) => {
                cursor.consume(Token::Comma)?;
            },
            Some(token) if token == closing => {
                cursor.consume(closing)?;
                break;
            },
            _ => {
                return Err(ConfigSyntaxError::UnexpectedChar { expected: format!("',' or {closing}"),
                                                               found:    cursor.found(),
                                                               offset:   cursor.offset(), });
            },
        }
    }

    Ok(items)
}
