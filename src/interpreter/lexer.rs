use std::fmt;

use logos::Logos;

/// Marker that opens a comment block.
pub const COMMENT_OPEN: &str = "<!--";
/// Marker that closes a comment block.
pub const COMMENT_CLOSE: &str = "-->";

/// Represents a lexical token in the source input.
///
/// Numeric tokens keep the literal as written; classification into integer
/// or float is decided here, by the shape of the text, and never by value.
/// Comment bodies are not tokens: the lexer only recognises the opening
/// marker and the [`Cursor`](crate::interpreter::cursor::Cursor) skips the
/// rest.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'s> {
    /// Numeric literals with a fraction or exponent, such as `3.14`, `-.5`,
    /// `2.` or `2.1e-10`.
    #[regex(r"-?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"-?[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice())]
    Float(&'s str),
    /// Integer literals, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", |lex| lex.slice())]
    Integer(&'s str),
    /// `var`
    #[token("var")]
    Var,
    /// Variable names: one or more uppercase ASCII letters.
    #[regex(r"[A-Z]+", |lex| lex.slice())]
    Name(&'s str),
    /// Lowercase words such as `min` or `concat`.
    #[regex(r"[a-z][a-zA-Z]*", |lex| lex.slice())]
    Word(&'s str),
    /// `-` not followed by a number.
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `,`
    #[token(",")]
    Comma,
    /// `'`
    #[token("'")]
    Quote,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `<!--`
    #[token("<!--")]
    CommentOpen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(text) | Self::Integer(text) | Self::Name(text) | Self::Word(text) => {
                write!(f, "'{text}'")
            },
            Self::Var => f.write_str("'var'"),
            Self::Minus => f.write_str("'-'"),
            Self::Plus => f.write_str("'+'"),
            Self::Comma => f.write_str("','"),
            Self::Quote => f.write_str("'''"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::LBrace => f.write_str("'{'"),
            Self::RBrace => f.write_str("'}'"),
            Self::CommentOpen => write!(f, "'{COMMENT_OPEN}'"),
            Self::Ignored => f.write_str("whitespace"),
        }
    }
}
