/// Dispatch of `+` on operand types.
pub mod core;
/// Array concatenation.
pub mod array;
/// Numeric addition.
pub mod scalar;
