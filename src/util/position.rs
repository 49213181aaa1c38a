use std::fmt;

/// A one-based line and column in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Location {
    /// Computes the location of byte `offset` in `source`.
    ///
    /// Offsets past the end of the source are clamped to the end.
    ///
    /// # Example
    /// ```
    /// use confjson::util::position::Location;
    ///
    /// let source = "var A 1\nvar B {C}";
    /// assert_eq!(Location::of(source, 15), Location { line: 2, column: 8 });
    /// ```
    #[must_use]
    pub fn of(source: &str, offset: usize) -> Self {
        let prefix = source.get(..offset.min(source.len())).unwrap_or(source);
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);

        Self { line:   prefix.matches('\n').count() + 1,
               column: prefix[line_start..].chars().count() + 1, }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
