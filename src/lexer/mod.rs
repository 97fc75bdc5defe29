//! Lexical analysis for the Chinese-keyword contract surface syntax.
//!
//! The lexer is single-pass with one code-point of lookahead. It tries, in
//! order, whitespace/comment skipping, string literals, numeric literals,
//! keyword-or-identifier scanning (longest-match over the keyword table in
//! [`keywords`]), and punctuation/operators.

mod error;
mod keywords;
mod position;
mod token;

pub use error::{LexError, LexErrorKind};
pub use keywords::{is_cjk, is_identifier_continue, is_identifier_start, match_keyword, BUILTIN_MEMBERS};
pub use position::Position;
pub use token::{Token, TokenKind};

use log::trace;
use std::iter::Peekable;
use std::str::Chars;

pub type LexResult<T> = Result<T, LexError>;

/// Longest-match over the fixed punctuation/operator table. Ordered
/// longest-first so e.g. `==` is tried before `=`.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("=>", TokenKind::FatArrow),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("=", TokenKind::Eq),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("!", TokenKind::Bang),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
];

pub struct Lexer<'a> {
    source: &'a str,
    iterator: Peekable<Chars<'a>>,
    /// byte offset of `iterator`'s next character within `source`
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            iterator: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek(&mut self) -> Option<char> {
        self.iterator.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.iterator.next()?;
        self.offset += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        Some(c)
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.rest().starts_with("//") => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let start = self.position();
                    self.advance_n(2);
                    loop {
                        if self.rest().starts_with("*/") {
                            self.advance_n(2);
                            break;
                        }
                        if self.advance().is_none() {
                            return Err(LexError::new(
                                LexErrorKind::UnterminatedBlockComment,
                                start,
                                "block comment starting here was never closed",
                            ));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scans a string literal and returns its *raw* source slice (quotes and
    /// escapes untouched) as the lexeme — the lexeme is always the exact
    /// source slice. Unescaping happens later, in the parser, when a
    /// `Literal` AST node is built from this token.
    fn lex_string(&mut self) -> LexResult<Token> {
        let start = self.position();
        let start_offset = self.offset;
        self.advance(); // opening quote
        loop {
            match self.advance() {
                None | Some('\n') => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        start,
                        "string literal starting here was never closed",
                    ))
                }
                Some('"') => break,
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(LexError::new(
                            LexErrorKind::UnterminatedString,
                            start,
                            "string literal starting here was never closed",
                        ));
                    }
                }
                Some(_) => {}
            }
        }
        let lexeme = &self.source[start_offset..self.offset];
        Ok(Token::new(TokenKind::StringLiteral, lexeme, start))
    }

    fn lex_number(&mut self) -> Token {
        let start = self.position();
        let mut lexeme = String::new();
        if self.rest().starts_with("0x") || self.rest().starts_with("0X") {
            lexeme.push(self.advance().unwrap());
            lexeme.push(self.advance().unwrap());
            while let Some(c) = self.peek() {
                if c.is_ascii_hexdigit() {
                    lexeme.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        } else {
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    lexeme.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        Token::new(TokenKind::Integer, lexeme, start)
    }

    fn lex_keyword_or_identifier(&mut self) -> Token {
        let start = self.position();
        if let Some((kind, len)) = match_keyword(self.rest()) {
            let mut lexeme = String::new();
            for _ in 0..len {
                lexeme.push(self.advance().unwrap());
            }
            return Token::new(kind, lexeme, start);
        }

        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if is_identifier_continue(c) {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Id, lexeme, start)
    }

    fn lex_operator(&mut self) -> LexResult<Token> {
        let start = self.position();
        for (spelling, kind) in OPERATORS {
            if self.rest().starts_with(spelling) {
                self.advance_n(spelling.chars().count());
                return Ok(Token::new(*kind, *spelling, start));
            }
        }
        let found = self.peek();
        Err(LexError::new(
            LexErrorKind::UnexpectedCharacter,
            start,
            format!("unexpected character {found:?}"),
        ))
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = vec![];

        loop {
            self.skip_whitespace_and_comments()?;

            let Some(c) = self.peek() else {
                tokens.push(Token::eof(self.position()));
                break;
            };

            let token = match c {
                '"' => self.lex_string()?,
                '0'..='9' => self.lex_number(),
                c if is_identifier_start(c) => self.lex_keyword_or_identifier(),
                _ => self.lex_operator()?,
            };

            trace!("lexed {token}");
            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Tokenize `source` into a finite sequence terminated by `EOF`.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).lex()
}
