//! Statement and block rendering.

use crate::ast::{Block, ElseBranch, Statement};

use super::expression::render_expression;
use super::Writer;

pub(super) fn render_block(writer: &mut Writer, block: &Block) {
    writer.push("{");
    if block.statements.is_empty() {
        writer.push("}");
        return;
    }
    writer.newline();
    writer.indent();
    for statement in &block.statements {
        render_statement(writer, statement);
    }
    writer.dedent();
    writer.line_start();
    writer.push("}");
}

fn render_statement(writer: &mut Writer, statement: &Statement) {
    match statement {
        Statement::Return { value, .. } => {
            writer.line_start();
            match value {
                Some(expr) => writer.push(&format!("return {};", render_expression(expr))),
                None => writer.push("return;"),
            }
            writer.newline();
        }
        Statement::If {
            condition,
            then_block,
            else_block,
            ..
        } => {
            writer.line_start();
            writer.push(&format!("if ({}) ", render_expression(condition)));
            render_block(writer, then_block);
            render_else(writer, else_block.as_deref());
            writer.newline();
        }
        Statement::For {
            init,
            condition,
            update,
            body,
            ..
        } => {
            writer.line_start();
            let init_text = init
                .as_deref()
                .map(render_for_clause_statement)
                .unwrap_or_default();
            let condition_text = condition.as_ref().map(render_expression).unwrap_or_default();
            let update_text = update.as_ref().map(render_expression).unwrap_or_default();
            writer.push(&format!("for ({init_text}; {condition_text}; {update_text}) "));
            render_block(writer, body);
            writer.newline();
        }
        Statement::While {
            condition, body, ..
        } => {
            writer.line_start();
            writer.push(&format!("while ({}) ", render_expression(condition)));
            render_block(writer, body);
            writer.newline();
        }
        Statement::Expression { expression, .. } => {
            writer.line_start();
            writer.push(&format!("{};", render_expression(expression)));
            writer.newline();
        }
        Statement::VariableDeclaration {
            name,
            var_type,
            initializer,
            ..
        } => {
            writer.line_start();
            match initializer {
                Some(expr) => writer.push(&format!(
                    "{} {name} = {};",
                    var_type.render(),
                    render_expression(expr)
                )),
                None => writer.push(&format!("{} {name};", var_type.render())),
            }
            writer.newline();
        }
    }
}

/// Renders a for-loop init/update clause without its own trailing `;` — the
/// surrounding `for (...)` header supplies the separators.
fn render_for_clause_statement(statement: &Statement) -> String {
    match statement {
        Statement::VariableDeclaration {
            name,
            var_type,
            initializer,
            ..
        } => match initializer {
            Some(expr) => format!("{} {name} = {}", var_type.render(), render_expression(expr)),
            None => format!("{} {name}", var_type.render()),
        },
        Statement::Expression { expression, .. } => render_expression(expression),
        other => unreachable!("for-init clause cannot be a {other:?}"),
    }
}

/// `else if` chains are nested `If` statements in the else slot; this
/// flattens them back onto one line instead of nesting braces.
fn render_else(writer: &mut Writer, else_block: Option<&ElseBranch>) {
    let Some(branch) = else_block else {
        return;
    };
    writer.push(" else ");
    match branch {
        ElseBranch::Block(block) => render_block(writer, block),
        ElseBranch::If(Statement::If {
            condition,
            then_block,
            else_block,
            ..
        }) => {
            writer.push(&format!("if ({}) ", render_expression(condition)));
            render_block(writer, then_block);
            render_else(writer, else_block.as_deref());
        }
        ElseBranch::If(other) => unreachable!("else-if branch held a non-If statement: {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;
    use crate::ast::{BinaryOp, Expression, Literal, LiteralKind, Type};

    fn pos() -> Position {
        Position::start()
    }

    fn render(block: &Block) -> String {
        let mut writer = Writer::new();
        render_block(&mut writer, block);
        writer.into_string()
    }

    #[test]
    fn empty_block_has_no_interior_lines() {
        let block = Block { statements: vec![] };
        assert_eq!(render(&block), "{}");
    }

    #[test]
    fn return_with_and_without_value() {
        let block = Block {
            statements: vec![
                Statement::Return {
                    value: Some(Expression::Literal {
                        literal: Literal {
                            value: "true".to_owned(),
                            kind: LiteralKind::Boolean,
                        },
                        position: pos(),
                    }),
                    position: pos(),
                },
                Statement::Return {
                    value: None,
                    position: pos(),
                },
            ],
        };
        let out = render(&block);
        assert!(out.contains("return true;"));
        assert!(out.contains("return;"));
    }

    #[test]
    fn else_if_chain_flattens_onto_one_line_per_branch() {
        let inner_if = Statement::If {
            condition: Expression::Identifier {
                name: "b".to_owned(),
                position: pos(),
            },
            then_block: Block { statements: vec![] },
            else_block: None,
            position: pos(),
        };
        let outer_if = Statement::If {
            condition: Expression::Identifier {
                name: "a".to_owned(),
                position: pos(),
            },
            then_block: Block { statements: vec![] },
            else_block: Some(Box::new(ElseBranch::If(inner_if))),
            position: pos(),
        };
        let block = Block {
            statements: vec![outer_if],
        };
        let rendered = render(&block);
        assert!(rendered.contains("if (a) {} else if (b) {}"));
    }

    #[test]
    fn variable_declaration_renders_type_name_and_initializer() {
        let block = Block {
            statements: vec![Statement::VariableDeclaration {
                name: "余额".to_owned(),
                var_type: Type::Primitive("int256".to_owned()),
                initializer: Some(Expression::Literal {
                    literal: Literal {
                        value: "0".to_owned(),
                        kind: LiteralKind::Integer,
                    },
                    position: pos(),
                }),
                position: pos(),
            }],
        };
        assert!(render(&block).contains("int256 余额 = 0;"));
    }

    #[test]
    fn for_loop_clauses_render_without_duplicate_semicolons() {
        let block = Block {
            statements: vec![Statement::For {
                init: Some(Box::new(Statement::VariableDeclaration {
                    name: "i".to_owned(),
                    var_type: Type::Primitive("int256".to_owned()),
                    initializer: Some(Expression::Literal {
                        literal: Literal {
                            value: "0".to_owned(),
                            kind: LiteralKind::Integer,
                        },
                        position: pos(),
                    }),
                    position: pos(),
                })),
                condition: Some(Expression::Binary {
                    left: Box::new(Expression::Identifier {
                        name: "i".to_owned(),
                        position: pos(),
                    }),
                    operator: BinaryOp::Lt,
                    right: Box::new(Expression::Literal {
                        literal: Literal {
                            value: "10".to_owned(),
                            kind: LiteralKind::Integer,
                        },
                        position: pos(),
                    }),
                    position: pos(),
                }),
                update: None,
                body: Block { statements: vec![] },
                position: pos(),
            }],
        };
        assert!(render(&block).contains("for (int256 i = 0; i < 10; ) {}"));
    }
}
