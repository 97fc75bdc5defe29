use super::{Block, Position, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Internal,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    #[default]
    None,
    Pure,
    View,
    Payable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<super::Parameter>,
    pub return_type: Option<Type>,
    pub visibility: Visibility,
    pub mutability: Mutability,
    pub body: Block,
    pub position: Position,
}
