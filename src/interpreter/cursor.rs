use std::ops::Range;

use logos::{Lexer, Logos};

use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        lexer::{COMMENT_CLOSE, Token},
        parser::core::ParseResult,
    },
};

/// Maximum number of arrays, blocks, parentheses and calls that may be open
/// at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A significant token together with its text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'s> {
    /// The token kind.
    pub token: Token<'s>,
    /// The exact source text of the token.
    pub text:  &'s str,
    /// Byte range of the token in the source.
    pub span:  Range<usize>,
}

/// Read position over one source text.
///
/// The cursor owns the lexer and at most one token of lookahead. It only ever
/// moves forward: whitespace and comments are skipped lazily, right before
/// the next significant token is needed, so errors surface in the order a
/// left-to-right reader would meet them.
pub struct Cursor<'s> {
    lexer:     Lexer<'s, Token<'s>>,
    peeked:    Option<Lexeme<'s>>,
    exhausted: bool,
    depth:     usize,
}

impl<'s> Cursor<'s> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer:     Token::lexer(source),
               peeked:    None,
               exhausted: false,
               depth:     0, }
    }

    /// Advances past any run of whitespace and `<!-- ... -->` comments.
    ///
    /// Comments do not nest: the first `-->` after the opening marker ends
    /// the comment, whatever it contains.
    ///
    /// # Errors
    /// - `UnterminatedComment` if a comment runs to the end of input.
    /// - `UnexpectedChar` if a character cannot start any token.
    pub fn skip_trivia(&mut self) -> ParseResult<()> {
        if self.peeked.is_some() {
            return Ok(());
        }

        while let Some(result) = self.lexer.next() {
            let span = self.lexer.span();
            match result {
                Ok(Token::CommentOpen) => self.skip_comment(span.start)?,
                Ok(token) => {
                    self.peeked = Some(Lexeme { token,
                                                text: self.lexer.slice(),
                                                span });
                    return Ok(());
                },
                Err(()) => {
                    return Err(ConfigSyntaxError::UnexpectedChar { expected: "a token".to_string(),
                                                                   found:    format!("'{}'",
                                                                                     self.lexer
                                                                                         .slice()),
                                                                   offset:   span.start, });
                },
            }
        }

        self.exhausted = true;
        Ok(())
    }

    fn skip_comment(&mut self, start: usize) -> ParseResult<()> {
        match self.lexer.remainder().find(COMMENT_CLOSE) {
            Some(end) => {
                self.lexer.bump(end + COMMENT_CLOSE.len());
                Ok(())
            },
            None => Err(ConfigSyntaxError::UnterminatedComment { offset: start }),
        }
    }

    /// Returns the next significant token without consuming it, or `None` at
    /// end of input.
    pub fn peek(&mut self) -> ParseResult<Option<Token<'s>>> {
        self.skip_trivia()?;
        Ok(self.peeked.as_ref().map(|lexeme| lexeme.token))
    }

    /// Consumes and returns the next significant token.
    pub fn next_lexeme(&mut self) -> ParseResult<Option<Lexeme<'s>>> {
        self.skip_trivia()?;
        Ok(self.peeked.take())
    }

    /// Consumes the next token, which must be `expected`.
    ///
    /// # Errors
    /// `UnexpectedChar` naming both the expected and the found token.
    pub fn consume(&mut self, expected: Token<'s>) -> ParseResult<Lexeme<'s>> {
        if self.peek()? == Some(expected)
           && let Some(lexeme) = self.peeked.take()
        {
            return Ok(lexeme);
        }

        Err(ConfigSyntaxError::UnexpectedChar { expected: expected.to_string(),
                                                found:    self.found(),
                                                offset:   self.offset(), })
    }

    /// Reads a variable name and returns it with its byte offset.
    ///
    /// # Errors
    /// `ExpectedName` if the next token is not a run of uppercase letters.
    pub fn read_name(&mut self) -> ParseResult<(&'s str, usize)> {
        if let Some(Token::Name(name)) = self.peek()? {
            let offset = self.offset();
            self.peeked = None;
            return Ok((name, offset));
        }

        Err(ConfigSyntaxError::ExpectedName { found:  self.found(),
                                              offset: self.offset(), })
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Every construct that can contain values (arrays, blocks, parenthesized
    /// expressions and call argument lists) goes through here, which bounds
    /// the recursion of the parser.
    ///
    /// # Errors
    /// `NestingTooDeep` at the lookahead token if [`MAX_NESTING_DEPTH`] levels
    /// are already open; otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ConfigSyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                           offset: self.offset(), });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Byte offset of the lookahead token, of the end of input once the
    /// source is exhausted, or of the end of the last consumed token.
    #[must_use]
    pub fn offset(&self) -> usize {
        match &self.peeked {
            Some(lexeme) => lexeme.span.start,
            None if self.exhausted => self.lexer.source().len(),
            None => self.lexer.span().end,
        }
    }

    /// Describes the lookahead token for diagnostics.
    #[must_use]
    pub fn found(&self) -> String {
        self.peeked
            .as_ref()
            .map_or_else(|| "end of input".to_string(), |lexeme| format!("'{}'", lexeme.text))
    }
}
