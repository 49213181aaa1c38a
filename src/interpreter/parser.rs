/// Core parsing entry points.
///
/// Holds the result alias and the value dispatcher that decides, from one
/// token of lookahead, whether a number, an array or a block follows.
pub mod core;

/// Literal values.
///
/// Parses numbers, `'( ... )` arrays and `{ ... }` constant-expression
/// blocks.
pub mod literal;

/// Expressions inside `{ ... }` blocks.
///
/// Parses and evaluates `+` chains over terms, variable references and
/// builtin calls in a single pass.
pub mod expression;

/// Utility functions for the parser.
pub mod utils;

/// The top-level driver.
///
/// Separates `var` declarations from bare values and assembles the final
/// document.
pub mod document;
