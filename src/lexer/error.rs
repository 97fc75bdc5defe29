use std::fmt::Display;

use super::Position;

/// The three ways scanning can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnterminatedString,
    UnterminatedBlockComment,
    UnexpectedCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
    pub message: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::UnterminatedBlockComment => "unterminated block comment",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        };
        write!(f, "{label}: {}", self.message)
    }
}

impl std::error::Error for LexError {}
