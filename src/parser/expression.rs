//! Expression parsing by precedence climbing.

use crate::ast::{AssignOp, BinaryOp, Expression, Literal, LiteralKind, UnaryOp};
use crate::lexer::TokenKind;

use super::{ParseError, ParseResult, Parser};

fn binary_precedence(kind: TokenKind) -> Option<(u8, BinaryOp)> {
    use TokenKind::*;
    Some(match kind {
        OrOr => (2, BinaryOp::Or),
        AndAnd => (3, BinaryOp::And),
        EqEq => (4, BinaryOp::Eq),
        NotEq => (4, BinaryOp::NotEq),
        Lt => (5, BinaryOp::Lt),
        LtEq => (5, BinaryOp::LtEq),
        Gt => (5, BinaryOp::Gt),
        GtEq => (5, BinaryOp::GtEq),
        Plus => (6, BinaryOp::Add),
        Minus => (6, BinaryOp::Sub),
        Star => (7, BinaryOp::Mul),
        Slash => (7, BinaryOp::Div),
        Percent => (7, BinaryOp::Mod),
        _ => return None,
    })
}

fn assign_op(kind: TokenKind) -> Option<AssignOp> {
    Some(match kind {
        TokenKind::Eq => AssignOp::Assign,
        TokenKind::PlusEq => AssignOp::AddAssign,
        TokenKind::MinusEq => AssignOp::SubAssign,
        TokenKind::StarEq => AssignOp::MulAssign,
        TokenKind::SlashEq => AssignOp::DivAssign,
        _ => return None,
    })
}

/// Entry point: parses an assignment (prec. 1, right-assoc), falling
/// through to the binary/unary/postfix ladder for its operands.
pub fn parse_expression(parser: &mut Parser) -> ParseResult<Expression> {
    let left = parse_binary(parser, 2)?;

    if let Some(operator) = assign_op(parser.peek_kind()) {
        let position = parser.position();
        if !left.is_assignable() {
            return Err(ParseError::new(
                position,
                "an assignable target (identifier, member, or index)",
                format!("{:?}", left),
            ));
        }
        parser.advance();
        // right-associative: recurse into parse_expression, not parse_binary
        let value = parse_expression(parser)?;
        return Ok(Expression::Assignment {
            target: Box::new(left),
            operator,
            value: Box::new(value),
            position,
        });
    }

    Ok(left)
}

/// Precedence climbing over the binary operator table (prec. 2-7), left
/// associative throughout.
fn parse_binary(parser: &mut Parser, min_prec: u8) -> ParseResult<Expression> {
    let mut left = parse_unary(parser)?;

    while let Some((prec, operator)) = binary_precedence(parser.peek_kind()) {
        if prec < min_prec {
            break;
        }
        let position = parser.position();
        parser.advance();
        let right = parse_binary(parser, prec + 1)?;
        left = Expression::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            position,
        };
    }

    Ok(left)
}

/// Prefix `!`/`-` (prec. 8).
fn parse_unary(parser: &mut Parser) -> ParseResult<Expression> {
    let operator = match parser.peek_kind() {
        TokenKind::Bang => UnaryOp::Not,
        TokenKind::Minus => UnaryOp::Neg,
        _ => return parse_postfix(parser),
    };
    let position = parser.position();
    parser.advance();
    let operand = parse_unary(parser)?;
    Ok(Expression::Unary {
        operator,
        operand: Box::new(operand),
        prefix: true,
        position,
    })
}

/// Call/index/member, left-associatively chained (prec. 9).
fn parse_postfix(parser: &mut Parser) -> ParseResult<Expression> {
    let mut expr = parse_primary(parser)?;

    loop {
        match parser.peek_kind() {
            TokenKind::LParen => {
                let position = parser.position();
                parser.advance();
                let mut args = vec![];
                if !parser.check(TokenKind::RParen) {
                    loop {
                        args.push(parse_expression(parser)?);
                        if !parser.matches(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                parser.expect(TokenKind::RParen, "')' closing call arguments")?;
                expr = Expression::Call {
                    callee: Box::new(expr),
                    args,
                    position,
                };
            }
            TokenKind::LBracket => {
                let position = parser.position();
                parser.advance();
                let index = parse_expression(parser)?;
                parser.expect(TokenKind::RBracket, "']' closing index expression")?;
                expr = Expression::Index {
                    object: Box::new(expr),
                    index: Box::new(index),
                    position,
                };
            }
            TokenKind::Dot => {
                let position = parser.position();
                parser.advance();
                let name = parser.expect(TokenKind::Id, "a property name after '.'")?;
                expr = Expression::Member {
                    object: Box::new(expr),
                    property: name.lexeme,
                    position,
                };
            }
            _ => break,
        }
    }

    Ok(expr)
}

fn parse_primary(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.peek().clone();
    let position = token.position;

    match token.kind {
        TokenKind::LParen => {
            parser.advance();
            let inner = parse_expression(parser)?;
            parser.expect(TokenKind::RParen, "')' closing parenthesized expression")?;
            Ok(inner)
        }
        TokenKind::Id => {
            parser.advance();
            // Built-in identifiers (消息发送者 etc.) are kept as plain
            // `Identifier` nodes here; the msg./block./tx. rewrite happens
            // at emission time, so the parser does not special-case them.
            Ok(Expression::Identifier {
                name: token.lexeme,
                position,
            })
        }
        TokenKind::Integer => {
            parser.advance();
            Ok(Expression::Literal {
                literal: Literal {
                    value: token.lexeme,
                    kind: LiteralKind::Integer,
                },
                position,
            })
        }
        TokenKind::StringLiteral => {
            parser.advance();
            Ok(Expression::Literal {
                literal: Literal {
                    value: unescape_string_lexeme(&token.lexeme),
                    kind: LiteralKind::String,
                },
                position,
            })
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expression::Literal {
                literal: Literal {
                    value: "true".to_owned(),
                    kind: LiteralKind::Boolean,
                },
                position,
            })
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expression::Literal {
                literal: Literal {
                    value: "false".to_owned(),
                    kind: LiteralKind::Boolean,
                },
                position,
            })
        }
        _ => Err(ParseError::new(
            position,
            "an expression",
            format!("{:?} ({:?})", token.kind, token.lexeme),
        )),
    }
}

/// Strips the surrounding quotes and unescapes `\"`, `\\`, `\n`, `\t` from a
/// raw `StringLiteral` token lexeme (the lexer kept the slice untouched;
/// unescaping is the parser's job).
fn unescape_string_lexeme(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    unescape::unescape(inner).unwrap_or_else(|| inner.to_owned())
}
