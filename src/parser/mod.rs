//! Recursive-descent parser with one-token lookahead and precedence
//! climbing for expressions.

mod contract;
mod error;
mod expression;
mod function;
mod statement;
mod types;

pub use error::ParseError;

use log::trace;

use crate::ast::Program;
use crate::lexer::{Position, Token, TokenKind};

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> &Token {
        // `tokenize` always appends a terminating EOF, so this never runs
        // past the end of `tokens`.
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn position(&self) -> Position {
        self.peek().position
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected_desc: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let found = self.peek().clone();
            if found.kind == TokenKind::Eof {
                return Err(ParseError::eof(expected_desc, found.position));
            }
            Err(ParseError::new(
                found.position,
                expected_desc,
                format!("{:?} ({:?})", found.kind, found.lexeme),
            ))
        }
    }
}

/// Parse a token sequence into a `Program` AST.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    let mut parser = Parser::new(tokens);
    let mut contracts = vec![];

    while !parser.check(TokenKind::Eof) {
        trace!("parsing top-level contract at {}", parser.position());
        contracts.push(contract::parse_contract(&mut parser)?);
    }

    Ok(Program { contracts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn empty_program_parses() {
        let program = parse(tokenize("").unwrap()).unwrap();
        assert!(program.contracts.is_empty());
    }

    #[test]
    fn empty_contract_parses() {
        let program = parse(tokenize("合约 代币 { }").unwrap()).unwrap();
        assert_eq!(program.contracts.len(), 1);
        assert_eq!(program.contracts[0].name, "代币");
    }

    #[test]
    fn running_out_of_tokens_reports_end_of_input() {
        let err = parse(tokenize("合约 代币 {").unwrap()).unwrap_err();
        assert_eq!(err.found, "end of input");
    }
}
