use log::trace;

use crate::ast::{Constructor, Contract, Event, StateVariable, Visibility};
use crate::lexer::TokenKind;

use super::expression::parse_expression;
use super::function::{parse_function, parse_param_list};
use super::statement::parse_block;
use super::types::{parse_type, starts_type};
use super::{ParseError, ParseResult, Parser};

fn visibility_from(kind: TokenKind) -> Option<Visibility> {
    Some(match kind {
        TokenKind::Public => Visibility::Public,
        TokenKind::Private => Visibility::Private,
        TokenKind::Internal => Visibility::Internal,
        TokenKind::External => Visibility::External,
        _ => return None,
    })
}

/// `Contract := "contract" Identifier "{" ContractMember* "}"`.
pub(super) fn parse_contract(parser: &mut Parser) -> ParseResult<Contract> {
    let position = parser.position();
    parser.expect(TokenKind::Contract, "'合约'")?;
    let name = parser.expect(TokenKind::Id, "a contract name")?;
    parser.expect(TokenKind::LBrace, "'{' starting a contract body")?;

    let mut state_variables = vec![];
    let mut events = vec![];
    let mut constructor = None;
    let mut functions = vec![];

    while !parser.check(TokenKind::RBrace) {
        match parser.peek_kind() {
            TokenKind::Event => events.push(parse_event(parser)?),
            TokenKind::Constructor => {
                let parsed = parse_constructor(parser)?;
                if constructor.is_some() {
                    return Err(ParseError::new(
                        parsed.position,
                        "at most one constructor per contract",
                        "a second 'constructor'",
                    ));
                }
                constructor = Some(parsed);
            }
            TokenKind::Function => functions.push(parse_function(parser)?),
            kind if visibility_from(kind).is_some() || starts_type(kind) => {
                state_variables.push(parse_state_variable(parser)?)
            }
            _ => {
                let found = parser.peek().clone();
                return Err(ParseError::new(
                    found.position,
                    "an event, constructor, state variable, or function",
                    format!("{:?} ({:?})", found.kind, found.lexeme),
                ));
            }
        }
    }

    parser.expect(TokenKind::RBrace, "'}' closing a contract body")?;
    trace!("parsed contract {}", name.lexeme);

    Ok(Contract {
        name: name.lexeme,
        state_variables,
        events,
        constructor,
        functions,
        position,
    })
}

fn parse_event(parser: &mut Parser) -> ParseResult<Event> {
    let position = parser.position();
    parser.expect(TokenKind::Event, "'事件'")?;
    let name = parser.expect(TokenKind::Id, "an event name")?;
    let params = parse_param_list(parser)?;
    parser.expect(TokenKind::Semicolon, "';' ending an event declaration")?;
    Ok(Event {
        name: name.lexeme,
        params,
        position,
    })
}

fn parse_constructor(parser: &mut Parser) -> ParseResult<Constructor> {
    let position = parser.position();
    parser.expect(TokenKind::Constructor, "'构造函数'")?;
    let params = parse_param_list(parser)?;
    let body = parse_block(parser)?;
    Ok(Constructor {
        params,
        body,
        position,
    })
}

/// `([Visibility] Type | Type [Visibility]) Identifier ("=" Expression)?
/// ";"`. The visibility keyword may sit either before the type
/// (`公开 字符串 名称;`) or right after it (`映射(地址 => 整数) 公开 余额;`);
/// both orders appear in surface sources, so it is checked on both sides
/// of `parse_type`. Unlike a function's default visibility (public), an
/// omitted visibility here defaults to `private`.
fn parse_state_variable(parser: &mut Parser) -> ParseResult<StateVariable> {
    let position = parser.position();
    let mut visibility = visibility_from(parser.peek_kind());
    if visibility.is_some() {
        parser.advance();
    }
    let var_type = parse_type(parser)?;
    if visibility.is_none() {
        if let Some(v) = visibility_from(parser.peek_kind()) {
            parser.advance();
            visibility = Some(v);
        }
    }
    let visibility = visibility.unwrap_or(Visibility::Private);
    let name = parser.expect(TokenKind::Id, "a state variable name")?;
    let initial_value = if parser.matches(TokenKind::Eq) {
        Some(parse_expression(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon, "';' ending a state variable declaration")?;
    Ok(StateVariable {
        name: name.lexeme,
        var_type,
        visibility,
        initial_value,
        position,
    })
}
