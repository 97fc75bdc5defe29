//! Unified error type for the `compile` entry point.

use std::fmt::Display;

use crate::ast::Position;
use crate::lexer::LexError;
use crate::parser::ParseError;

/// Reserved for invariants the emitter relies on. In a well-formed pipeline
/// this is unreachable; everything the emitter can be asked to render has
/// already been validated by the parser. `position` is the AST node the
/// emitter was rendering when the invariant broke, when one was in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenError {
    pub message: String,
    pub position: Option<Position>,
}

impl CodeGenError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
        }
    }
}

impl Display for CodeGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "internal error at {position}: {}", self.message),
            None => write!(f, "internal error: {}", self.message),
        }
    }
}

impl std::error::Error for CodeGenError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    CodeGen(CodeGenError),
}

impl From<LexError> for CompileError {
    fn from(value: LexError) -> Self {
        CompileError::Lex(value)
    }
}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        CompileError::Parse(value)
    }
}

impl From<CodeGenError> for CompileError {
    fn from(value: CodeGenError) -> Self {
        CompileError::CodeGen(value)
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "LexError at {}: {}", e.position, e),
            CompileError::Parse(e) => write!(f, "ParseError at {}: {}", e.position, e.message),
            CompileError::CodeGen(e) => match e.position {
                Some(position) => write!(f, "CodeGenError at {position}: {}", e.message),
                None => write!(f, "CodeGenError: {}", e.message),
            },
        }
    }
}

impl std::error::Error for CompileError {}
