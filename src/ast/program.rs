use super::Contract;

/// The AST root: an ordered sequence of contracts.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub contracts: Vec<Contract>,
}
