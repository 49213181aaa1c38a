/// Syntax and evaluation errors.
///
/// Every failure the engine can report, from an unclosed comment to adding an
/// array to a number, belongs to one error family. Each variant carries the
/// offending text where there is one and the byte offset at which the scan
/// stopped.
pub mod syntax_error;

pub use syntax_error::{ConfigSyntaxError, ErrorKind};
