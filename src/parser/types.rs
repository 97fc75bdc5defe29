use crate::ast::Type;
use crate::lexer::TokenKind;

use super::{ParseResult, Parser};

/// `Type := PrimitiveType | "mapping" "(" Type "=>" Type ")"`.
pub fn parse_type(parser: &mut Parser) -> ParseResult<Type> {
    if parser.matches(TokenKind::Mapping) {
        parser.expect(TokenKind::LParen, "'(' after 'mapping'")?;
        let key = parse_type(parser)?;
        parser.expect(TokenKind::FatArrow, "'=>' in mapping type")?;
        let value = parse_type(parser)?;
        parser.expect(TokenKind::RParen, "')' closing mapping type")?;
        return Ok(Type::Mapping(Box::new(key), Box::new(value)));
    }

    let name = match parser.peek_kind() {
        TokenKind::IntType => "int256",
        TokenKind::UintType => "uint256",
        TokenKind::StringType => "string",
        TokenKind::BoolType => "bool",
        TokenKind::AddressType => "address",
        TokenKind::BytesType => "bytes",
        _ => {
            let found = parser.peek().clone();
            return Err(super::ParseError::new(
                found.position,
                "a type",
                format!("{:?}", found.kind),
            ));
        }
    };
    parser.advance();
    Ok(Type::Primitive(name.to_owned()))
}

/// Whether the current token could start a `Type` production — used by the
/// statement parser to disambiguate a `VarDecl` from an `ExprStmt`/control
/// construct.
pub fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::IntType
            | TokenKind::UintType
            | TokenKind::StringType
            | TokenKind::BoolType
            | TokenKind::AddressType
            | TokenKind::BytesType
            | TokenKind::Mapping
    )
}
