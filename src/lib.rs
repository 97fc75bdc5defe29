pub mod ast;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;

use ast::Program;
use error::CompileError;
use lexer::Token;

/// Runs the full lexer → parser → emitter pipeline over `source`, returning
/// the generated Solidity text.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = ast_of(source)?;
    Ok(emitter::emit(&program)?)
}

/// Diagnostic accessor exposing just the token stream, for tooling that
/// wants to inspect lexing without running the rest of the pipeline.
pub fn tokens_of(source: &str) -> Result<Vec<Token>, CompileError> {
    Ok(lexer::tokenize(source)?)
}

/// Diagnostic accessor exposing the parsed AST.
pub fn ast_of(source: &str) -> Result<Program, CompileError> {
    let tokens = tokens_of(source)?;
    Ok(parser::parse(tokens)?)
}
