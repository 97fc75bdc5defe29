use super::Position;

/// The closed set of token kinds this lexer ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TokenKind {
    // structural keywords
    Contract,
    Function,
    Constructor,
    Event,
    Return, // doubles as `returns`/`return`, disambiguated by the parser
    If,
    Else,
    While,
    For,
    Mapping,

    // visibility
    Public,
    Private,
    Internal,
    External,

    // mutability
    Pure,
    View,
    Payable,

    // types
    IntType,
    UintType,
    StringType,
    BoolType,
    AddressType,
    BytesType,

    // built-in literals/identifiers rewritten by the emitter
    True,
    False,

    // literals
    Integer,
    StringLiteral,

    // identifier
    Id,

    // punctuation / operators, longest-match
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    FatArrow,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,
    Bang,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,
    Colon,

    Eof,
}

/// A single lexical token: kind, exact source slice, and source position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.position)
    }
}
