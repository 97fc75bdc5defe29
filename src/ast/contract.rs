use super::{Block, Expression, Function, Position, Type, Visibility};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateVariable {
    pub name: String,
    pub var_type: Type,
    pub visibility: Visibility,
    pub initial_value: Option<Expression>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub params: Vec<Parameter>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub params: Vec<Parameter>,
    pub body: Block,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub name: String,
    pub state_variables: Vec<StateVariable>,
    pub events: Vec<Event>,
    pub constructor: Option<Constructor>,
    pub functions: Vec<Function>,
    pub position: Position,
}
