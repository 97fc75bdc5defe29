use std::fmt::Display;

use colored::Colorize;

use crate::lexer::Position;

/// A syntactic failure: the expected-token descriptor and the token
/// actually found, both tied to a position. The parser fails at the first
/// error without attempting recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: Position,
    pub expected: String,
    pub found: String,
    pub message: String,
}

impl ParseError {
    pub fn new(position: Position, expected: impl Into<String>, found: impl Into<String>) -> Self {
        let expected = expected.into();
        let found = found.into();
        let message = format!("expected {expected}, found {found}");
        Self {
            position,
            expected,
            found,
            message,
        }
    }

    pub fn eof(expected: impl Into<String>, position: Position) -> Self {
        Self::new(position, expected, "end of input")
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = "^".red();
        write!(
            f,
            "{} |{}\n    {}",
            self.position,
            self.message,
            marker
        )
    }
}

impl std::error::Error for ParseError {}
