//! Recoverable compile diagnostics.

use std::fmt;

use super::SourceLine;

/// A problem in the input that the compiler recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What was skipped or assumed.
    pub message: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Diagnostic {
    /// Create a new diagnostic at the given location.
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a diagnostic pointing at the start of a source line.
    pub fn at(line: &SourceLine<'_>, message: impl Into<String>) -> Self {
        Self::new(message, line.number, line.column())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}
