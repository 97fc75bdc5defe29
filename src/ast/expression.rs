use super::{Literal, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// Expression variants: one tagged sum with inline variant data, rather
/// than a one-struct-per-variant split, since expressions here have no
/// type-checking payload to carry alongside them and the extra indirection
/// would not earn its keep.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assignment {
        target: Box<Expression>,
        operator: AssignOp,
        value: Box<Expression>,
        position: Position,
    },
    Binary {
        left: Box<Expression>,
        operator: BinaryOp,
        right: Box<Expression>,
        position: Position,
    },
    Unary {
        operator: UnaryOp,
        operand: Box<Expression>,
        prefix: bool,
        position: Position,
    },
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
        position: Position,
    },
    Member {
        object: Box<Expression>,
        property: String,
        position: Position,
    },
    Index {
        object: Box<Expression>,
        index: Box<Expression>,
        position: Position,
    },
    Identifier {
        name: String,
        position: Position,
    },
    Literal {
        literal: Literal,
        position: Position,
    },
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::Assignment { position, .. }
            | Expression::Binary { position, .. }
            | Expression::Unary { position, .. }
            | Expression::Call { position, .. }
            | Expression::Member { position, .. }
            | Expression::Index { position, .. }
            | Expression::Identifier { position, .. }
            | Expression::Literal { position, .. } => *position,
        }
    }

    /// Whether this expression is an assignable target: an identifier, a
    /// member access, or an index access.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expression::Identifier { .. } | Expression::Member { .. } | Expression::Index { .. }
        )
    }
}
