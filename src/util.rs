/// Source locations.
///
/// Converts the byte offsets carried by errors into one-based line and column
/// numbers for human-readable diagnostics.
pub mod position;
