use crate::ast::{Function, Mutability, Parameter, Visibility};
use crate::lexer::TokenKind;

use super::statement::parse_block;
use super::types::parse_type;
use super::{ParseResult, Parser};

/// `"(" ParamList? ")"`, used by functions, constructors, and events alike.
pub(super) fn parse_param_list(parser: &mut Parser) -> ParseResult<Vec<Parameter>> {
    parser.expect(TokenKind::LParen, "'(' starting a parameter list")?;
    let mut params = vec![];
    if !parser.check(TokenKind::RParen) {
        loop {
            let param_type = parse_type(parser)?;
            let name = parser.expect(TokenKind::Id, "a parameter name")?;
            params.push(Parameter {
                name: name.lexeme,
                param_type,
            });
            if !parser.matches(TokenKind::Comma) {
                break;
            }
        }
    }
    parser.expect(TokenKind::RParen, "')' closing a parameter list")?;
    Ok(params)
}

fn parse_modifier(kind: TokenKind) -> Option<Modifier> {
    Some(match kind {
        TokenKind::Public => Modifier::Visibility(Visibility::Public),
        TokenKind::Private => Modifier::Visibility(Visibility::Private),
        TokenKind::Internal => Modifier::Visibility(Visibility::Internal),
        TokenKind::External => Modifier::Visibility(Visibility::External),
        TokenKind::Pure => Modifier::Mutability(Mutability::Pure),
        TokenKind::View => Modifier::Mutability(Mutability::View),
        TokenKind::Payable => Modifier::Mutability(Mutability::Payable),
        _ => return None,
    })
}

enum Modifier {
    Visibility(Visibility),
    Mutability(Mutability),
}

/// `Function := "function" Identifier "(" ParamList? ")" Modifier*
///   ("returns" Type)? Block`. `Modifier ∈ Visibility ∪ Mutability`, order
/// is not constrained by the grammar; the emitter is the one that fixes
/// visibility-before-mutability on output.
pub(super) fn parse_function(parser: &mut Parser) -> ParseResult<Function> {
    let position = parser.position();
    parser.expect(TokenKind::Function, "'函数'")?;
    let name = parser.expect(TokenKind::Id, "a function name")?;
    let params = parse_param_list(parser)?;

    let mut visibility = Visibility::default();
    let mut mutability = Mutability::default();
    while let Some(modifier) = parse_modifier(parser.peek_kind()) {
        match modifier {
            Modifier::Visibility(v) => visibility = v,
            Modifier::Mutability(m) => mutability = m,
        }
        parser.advance();
    }

    let return_type = if parser.matches(TokenKind::Return) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Function {
        name: name.lexeme,
        params,
        return_type,
        visibility,
        mutability,
        body,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_function_str(src: &str) -> Function {
        let tokens = tokenize(src).unwrap();
        let mut parser = Parser::new(tokens);
        parse_function(&mut parser).unwrap()
    }

    #[test]
    fn defaults_are_public_and_non_mutating() {
        let f = parse_function_str("函数 读取() { }");
        assert_eq!(f.visibility, Visibility::Public);
        assert_eq!(f.mutability, Mutability::None);
        assert!(f.return_type.is_none());
    }

    #[test]
    fn modifiers_and_return_type_parse_in_grammar_order() {
        let f = parse_function_str("函数 查询余额(地址 账户) 公开 只读 返回 整数 { }");
        assert_eq!(f.visibility, Visibility::Public);
        assert_eq!(f.mutability, Mutability::View);
        assert_eq!(f.return_type.unwrap().render(), "int256");
        assert_eq!(f.params[0].name, "账户");
    }
}
