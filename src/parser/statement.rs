use crate::ast::{Block, ElseBranch, Statement};
use crate::lexer::TokenKind;

use super::expression::parse_expression;
use super::types::{parse_type, starts_type};
use super::{ParseResult, Parser};

/// `"{" Statement* "}"`.
pub(super) fn parse_block(parser: &mut Parser) -> ParseResult<Block> {
    parser.expect(TokenKind::LBrace, "'{' starting a block")?;
    let mut statements = vec![];
    while !parser.check(TokenKind::RBrace) {
        statements.push(parse_statement(parser)?);
    }
    parser.expect(TokenKind::RBrace, "'}' closing a block")?;
    Ok(Block { statements })
}

/// `Statement := ReturnStmt | IfStmt | ForStmt | WhileStmt | VarDecl |
/// ExprStmt`. A leading type-starting token is the only signal that
/// distinguishes a `VarDecl` from an `ExprStmt`; everything else falls
/// through to one of the fixed control-keyword branches or an expression
/// statement.
fn parse_statement(parser: &mut Parser) -> ParseResult<Statement> {
    match parser.peek_kind() {
        TokenKind::Return => parse_return(parser),
        TokenKind::If => parse_if(parser),
        TokenKind::For => parse_for(parser),
        TokenKind::While => parse_while(parser),
        kind if starts_type(kind) => parse_variable_declaration(parser),
        _ => parse_expression_statement(parser),
    }
}

fn parse_return(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    parser.expect(TokenKind::Return, "'返回'")?;
    let value = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expression(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "';' ending a return statement")?;
    Ok(Statement::Return { value, position })
}

fn parse_if(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    parser.expect(TokenKind::If, "'如果'")?;
    parser.expect(TokenKind::LParen, "'(' starting an if condition")?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::RParen, "')' closing an if condition")?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.matches(TokenKind::Else) {
        // `else if` is a nested If in the else slot; a bare `else { ... }`
        // is a plain block.
        if parser.check(TokenKind::If) {
            Some(Box::new(ElseBranch::If(parse_if(parser)?)))
        } else {
            Some(Box::new(ElseBranch::Block(parse_block(parser)?)))
        }
    } else {
        None
    };

    Ok(Statement::If {
        condition,
        then_block,
        else_block,
        position,
    })
}

fn parse_for(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    parser.expect(TokenKind::For, "'对于'")?;
    parser.expect(TokenKind::LParen, "'(' starting a for clause")?;

    let init = if parser.check(TokenKind::Semicolon) {
        None
    } else if starts_type(parser.peek_kind()) {
        Some(Box::new(parse_variable_declaration(parser)?))
    } else {
        Some(Box::new(parse_expression_statement(parser)?))
    };
    if init.is_none() {
        parser.expect(TokenKind::Semicolon, "';' after an empty for-init clause")?;
    }

    let condition = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expression(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "';' after a for-condition clause")?;

    let update = if parser.check(TokenKind::RParen) {
        None
    } else {
        Some(parse_expression(parser)?)
    };
    parser.expect(TokenKind::RParen, "')' closing a for clause")?;

    let body = parse_block(parser)?;

    Ok(Statement::For {
        init,
        condition,
        update,
        body,
        position,
    })
}

fn parse_while(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    parser.expect(TokenKind::While, "'当'")?;
    parser.expect(TokenKind::LParen, "'(' starting a while condition")?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::RParen, "')' closing a while condition")?;
    let body = parse_block(parser)?;
    Ok(Statement::While {
        condition,
        body,
        position,
    })
}

/// `Type Identifier ("=" Expression)? ";"`. Both the block-level `VarDecl`
/// and a for-loop's init clause share this production; the for-loop is
/// the only caller that does not itself consume the trailing `;` (the
/// clause separator plays that role there).
pub(super) fn parse_variable_declaration(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    let var_type = parse_type(parser)?;
    let name = parser.expect(TokenKind::Id, "a variable name")?;
    let initializer = if parser.matches(TokenKind::Eq) {
        Some(parse_expression(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon, "';' ending a variable declaration")?;
    Ok(Statement::VariableDeclaration {
        name: name.lexeme,
        var_type,
        initializer,
        position,
    })
}

fn parse_expression_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let position = parser.position();
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon, "';' ending an expression statement")?;
    Ok(Statement::Expression {
        expression,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Expression};
    use crate::lexer::tokenize;

    fn parse_block_str(src: &str) -> Block {
        let tokens = tokenize(src).unwrap();
        let mut parser = Parser::new(tokens);
        parse_block(&mut parser).unwrap()
    }

    #[test]
    fn if_else_if_chain_is_flattened_into_nested_if() {
        let block = parse_block_str(
            "{ 如果 (真) { 返回 真; } 否则 如果 (假) { 返回 假; } 否则 { 返回 真; } }",
        );
        let Statement::If { else_block, .. } = &block.statements[0] else {
            panic!("expected if statement");
        };
        let Some(branch) = else_block else {
            panic!("expected else-if branch");
        };
        assert!(matches!(**branch, ElseBranch::If(_)));
    }

    #[test]
    fn return_without_value_parses() {
        let block = parse_block_str("{ 返回; }");
        assert!(matches!(
            block.statements[0],
            Statement::Return { value: None, .. }
        ));
    }

    #[test]
    fn variable_declaration_disambiguated_from_expression_statement() {
        let block = parse_block_str("{ 整数 余额 = 1; 余额 = 余额 + 1; }");
        assert!(matches!(
            block.statements[0],
            Statement::VariableDeclaration { .. }
        ));
        let Statement::Expression { expression, .. } = &block.statements[1] else {
            panic!("expected expression statement");
        };
        assert!(matches!(expression, Expression::Assignment { .. }));
    }

    #[test]
    fn for_loop_clauses_parse() {
        let block = parse_block_str("{ 对于 (整数 i = 0; i < 10; i = i + 1) { } }");
        let Statement::For {
            init,
            condition,
            update,
            ..
        } = &block.statements[0]
        else {
            panic!("expected for statement");
        };
        assert!(matches!(
            init.as_deref(),
            Some(Statement::VariableDeclaration { .. })
        ));
        assert!(matches!(
            condition,
            Some(Expression::Binary {
                operator: BinaryOp::Lt,
                ..
            })
        ));
        assert!(update.is_some());
    }
}
