/// Binary operator evaluation.
///
/// The language has a single infix operator, `+`, whose meaning depends on
/// the operand types: numeric sum or array concatenation.
pub mod binary;

/// Core evaluation types: the result alias and the variable environment.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the builtin functions, such as one-level
/// argument flattening.
pub mod utils;

/// Builtin function calls.
///
/// Holds the builtin lookup table and the implementations of `min` and
/// `concat`.
pub mod function;
