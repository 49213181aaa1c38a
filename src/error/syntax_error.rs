use thiserror::Error;

/// Represents all errors that can occur while parsing and evaluating a
/// configuration document.
///
/// The first error aborts the whole parse, so a caller only ever sees the
/// failure that comes first in left-to-right scan order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigSyntaxError {
    /// A specific token was required but something else was found.
    #[error("Expected {expected}, found {found}.")]
    UnexpectedChar {
        /// Description of what the parser required.
        expected: String,
        /// The text actually found, or `end of input`.
        found:    String,
        /// Byte offset of the offending text.
        offset:   usize,
    },
    /// A variable name (one or more uppercase letters) was required.
    #[error("Expected a name made of uppercase letters, found {found}.")]
    ExpectedName {
        /// The text actually found.
        found:  String,
        /// Byte offset of the offending text.
        offset: usize,
    },
    /// A `-` was not followed by a number.
    #[error("Expected a number, found {found}.")]
    ExpectedNumber {
        /// The text actually found.
        found:  String,
        /// Byte offset of the offending text.
        offset: usize,
    },
    /// A `<!--` comment was never closed by `-->`.
    #[error("Comment is never closed with '-->'.")]
    UnterminatedComment {
        /// Byte offset of the opening `<!--`.
        offset: usize,
    },
    /// The input ended inside an array literal.
    #[error("Array opened at offset {start} is never closed with ')'.")]
    UnterminatedArray {
        /// Byte offset of the opening `'`.
        start:  usize,
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A value was required but the next token cannot start one.
    #[error("Unexpected token {token}; expected a number, an array or a '{{...}}' block.")]
    UnexpectedToken {
        /// The text actually found, or `end of input`.
        token:  String,
        /// Byte offset of the offending text.
        offset: usize,
    },
    /// Called a function that is not a builtin.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// Byte offset of the function name.
        offset: usize,
    },
    /// Referenced a variable that has not been declared yet.
    #[error("Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// Byte offset of the reference.
        offset: usize,
    },
    /// An operation was applied to values of incompatible types.
    #[error("Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// Byte offset of the operator or function name.
        offset:  usize,
    },
    /// A function that needs at least one candidate received none.
    #[error("Function '{name}' received no values to choose from.")]
    EmptyArguments {
        /// The name of the function.
        name:   String,
        /// Byte offset of the function name.
        offset: usize,
    },
    /// A numeric literal is out of range: an integer that does not fit in
    /// `i64`, or a float too large to be finite.
    #[error("Numeric literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// An addition left the range of its numeric type: `i64` for integers,
    /// finite `f64` for floats.
    #[error("Overflow while adding {left} and {right}.")]
    Overflow {
        /// Left operand, as displayed.
        left:   String,
        /// Right operand, as displayed.
        right:  String,
        /// Byte offset of the `+`.
        offset: usize,
    },
    /// Arrays, blocks, parentheses or calls are nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::cursor::MAX_NESTING_DEPTH).
    #[error("Nesting is deeper than {limit} levels.")]
    NestingTooDeep {
        /// The depth limit.
        limit:  usize,
        /// Byte offset of the opening token that crossed the limit.
        offset: usize,
    },
}

/// Fieldless mirror of [`ConfigSyntaxError`] for matching on the failure
/// category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedChar,
    ExpectedName,
    ExpectedNumber,
    UnterminatedComment,
    UnterminatedArray,
    UnexpectedToken,
    UnknownFunction,
    UndefinedVariable,
    TypeMismatch,
    EmptyArguments,
    LiteralTooLarge,
    Overflow,
    NestingTooDeep,
}

impl ConfigSyntaxError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use confjson::{ErrorKind, parse};
    ///
    /// let err = parse("{B + 1}").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedChar { .. } => ErrorKind::UnexpectedChar,
            Self::ExpectedName { .. } => ErrorKind::ExpectedName,
            Self::ExpectedNumber { .. } => ErrorKind::ExpectedNumber,
            Self::UnterminatedComment { .. } => ErrorKind::UnterminatedComment,
            Self::UnterminatedArray { .. } => ErrorKind::UnterminatedArray,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::EmptyArguments { .. } => ErrorKind::EmptyArguments,
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Returns the byte offset in the source at which the scan failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedChar { offset, .. }
            | Self::ExpectedName { offset, .. }
            | Self::ExpectedNumber { offset, .. }
            | Self::UnterminatedComment { offset }
            | Self::UnterminatedArray { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnknownFunction { offset, .. }
            | Self::UndefinedVariable { offset, .. }
            | Self::TypeMismatch { offset, .. }
            | Self::EmptyArguments { offset, .. }
            | Self::LiteralTooLarge { offset, .. }
            | Self::Overflow { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
