/// The cursor module tracks the read position over the source.
///
/// The cursor owns the lexer, buffers one token of lookahead and skips
/// whitespace and `<!-- ... -->` comments before every significant token.
///
/// # Responsibilities
/// - Provides `peek`, `consume` and `read_name` to the parser.
/// - Reports unterminated comments and stray characters with their offsets.
pub mod cursor;
/// The evaluator module computes values as they are parsed.
///
/// There is no syntax tree: every expression is evaluated the moment its
/// operands are known, against a flat environment of declared names.
///
/// # Responsibilities
/// - Implements the type-directed `+` operator.
/// - Holds the builtin functions `min` and `concat`.
/// - Stores declared variables for later reference.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// # Responsibilities
/// - Converts the input into numbers, names, words, keywords and punctuation.
/// - Classifies numeric literals as integer or float by their shape.
pub mod lexer;
/// The parser module drives a single left-to-right pass over the source.
///
/// # Responsibilities
/// - Dispatches between numbers, arrays and constant-expression blocks.
/// - Parses expressions and builtin calls inside blocks.
/// - Separates declarations from bare values at the top level.
pub mod parser;
/// The value module defines the runtime data type.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, floats and nested arrays.
/// - Implements numeric ordering, display and JSON serialization.
pub mod value;
