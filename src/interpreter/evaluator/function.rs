/// The builtin lookup table and call dispatch.
pub mod core;
/// The `concat` function implementation.
///
/// Joins flattened arguments into a new array.
pub mod concat;
/// The `min` function implementation.
///
/// Returns the smallest of the flattened arguments.
pub mod min;
