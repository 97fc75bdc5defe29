//! Precedence-aware expression rendering, sharing the parser's precedence
//! table so that parenthesization is exactly the minimum needed to
//! round-trip.

use crate::ast::{AssignOp, BinaryOp, Expression, Literal, LiteralKind, UnaryOp};
use crate::lexer::BUILTIN_MEMBERS;

/// Precedence of the operator an expression sits at for rendering purposes.
/// Atoms (identifiers, literals) are given the highest value so they never
/// need wrapping.
fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Assignment { .. } => 1,
        Expression::Binary { operator, .. } => binary_precedence(*operator),
        Expression::Unary { .. } => 8,
        Expression::Call { .. } | Expression::Member { .. } | Expression::Index { .. } => 9,
        Expression::Identifier { .. } | Expression::Literal { .. } => 10,
    }
}

fn binary_precedence(operator: BinaryOp) -> u8 {
    match operator {
        BinaryOp::Or => 2,
        BinaryOp::And => 3,
        BinaryOp::Eq | BinaryOp::NotEq => 4,
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => 5,
        BinaryOp::Add | BinaryOp::Sub => 6,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 7,
    }
}

fn assign_op_str(operator: AssignOp) -> &'static str {
    match operator {
        AssignOp::Assign => "=",
        AssignOp::AddAssign => "+=",
        AssignOp::SubAssign => "-=",
        AssignOp::MulAssign => "*=",
        AssignOp::DivAssign => "/=",
    }
}

fn binary_op_str(operator: BinaryOp) -> &'static str {
    match operator {
        BinaryOp::Or => "||",
        BinaryOp::And => "&&",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
    }
}

fn unary_op_str(operator: UnaryOp) -> &'static str {
    match operator {
        UnaryOp::Not => "!",
        UnaryOp::Neg => "-",
    }
}

/// Rewrites a built-in identifier (`消息发送者` etc.) to its Solidity member
/// expression text. This is purely textual — the AST keeps the plain
/// `Identifier` node it was parsed as.
fn rewrite_identifier(name: &str) -> &str {
    BUILTIN_MEMBERS.get(name).copied().unwrap_or(name)
}

fn render_literal(literal: &Literal) -> String {
    match literal.kind {
        LiteralKind::Integer | LiteralKind::Address | LiteralKind::Boolean => {
            literal.value.clone()
        }
        LiteralKind::String => format!("\"{}\"", escape_string(&literal.value)),
    }
}

fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `expr` as a top-level expression: never wrapped in parentheses.
pub(super) fn render_expression(expr: &Expression) -> String {
    render_at(expr, 0)
}

/// Render `expr` as an operand that requires at least `min_prec` to avoid
/// being wrapped in parentheses.
fn render_at(expr: &Expression, min_prec: u8) -> String {
    let text = match expr {
        Expression::Assignment {
            target,
            operator,
            value,
            ..
        } => {
            // target is always an Identifier/Member/Index, all precedence
            // 9, so it never needs wrapping here.
            let target = render_at(target, 9);
            // right-associative: same-precedence value needs no parens.
            let value = render_at(value, 1);
            format!("{target} {} {value}", assign_op_str(*operator))
        }
        Expression::Binary {
            left,
            operator,
            right,
            ..
        } => {
            let prec = binary_precedence(*operator);
            let left = render_at(left, prec);
            // left-associative: right operand needs strictly higher
            // precedence to avoid changing the grouping on re-parse.
            let right = render_at(right, prec + 1);
            format!("{left} {} {right}", binary_op_str(*operator))
        }
        Expression::Unary {
            operator, operand, ..
        } => {
            let operand = render_at(operand, 8);
            format!("{}{operand}", unary_op_str(*operator))
        }
        Expression::Call { callee, args, .. } => {
            let callee = render_at(callee, 9);
            let args = args
                .iter()
                .map(|arg| render_at(arg, 1))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{callee}({args})")
        }
        Expression::Member {
            object, property, ..
        } => {
            let object = render_at(object, 9);
            format!("{object}.{property}")
        }
        Expression::Index { object, index, .. } => {
            let object = render_at(object, 9);
            let index = render_at(index, 1);
            format!("{object}[{index}]")
        }
        Expression::Identifier { name, .. } => rewrite_identifier(name).to_owned(),
        Expression::Literal { literal, .. } => render_literal(literal),
    };

    if precedence(expr) < min_prec {
        format!("({text})")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    fn pos() -> Position {
        Position::start()
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier {
            name: name.to_owned(),
            position: pos(),
        }
    }

    fn binary(left: Expression, operator: BinaryOp, right: Expression) -> Expression {
        Expression::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            position: pos(),
        }
    }

    #[test]
    fn precedence_suppresses_redundant_parens() {
        // a + b * c == d && !e
        let expr = binary(
            binary(
                binary(ident("a"), BinaryOp::Add, binary(ident("b"), BinaryOp::Mul, ident("c"))),
                BinaryOp::Eq,
                ident("d"),
            ),
            BinaryOp::And,
            Expression::Unary {
                operator: UnaryOp::Not,
                operand: Box::new(ident("e")),
                prefix: true,
                position: pos(),
            },
        );
        assert_eq!(render_expression(&expr), "a + b * c == d && !e");
    }

    #[test]
    fn right_associated_subtraction_is_parenthesized() {
        // a - (b - c) must keep its parens; a - b - c must not.
        let nested = binary(ident("a"), BinaryOp::Sub, binary(ident("b"), BinaryOp::Sub, ident("c")));
        assert_eq!(render_expression(&nested), "a - (b - c)");

        let left_assoc = binary(binary(ident("a"), BinaryOp::Sub, ident("b")), BinaryOp::Sub, ident("c"));
        assert_eq!(render_expression(&left_assoc), "a - b - c");
    }

    #[test]
    fn builtin_identifier_rewrites_to_member_text() {
        assert_eq!(render_expression(&ident("消息发送者")), "msg.sender");
    }

    #[test]
    fn member_on_binary_expression_is_parenthesized() {
        let expr = Expression::Member {
            object: Box::new(binary(ident("a"), BinaryOp::Add, ident("b"))),
            property: "foo".to_owned(),
            position: pos(),
        };
        assert_eq!(render_expression(&expr), "(a + b).foo");
    }
}
