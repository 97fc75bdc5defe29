//! Signature rendering for functions, constructors, events, and state
//! variables.

use crate::ast::{Constructor, Event, Function, Mutability, Parameter, StateVariable, Visibility};

use super::expression::render_expression;
use super::statement::render_block;
use super::Writer;

fn render_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.param_type.render(), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Private => "private",
        Visibility::Internal => "internal",
        Visibility::External => "external",
    }
}

fn mutability_keyword(mutability: Mutability) -> Option<&'static str> {
    match mutability {
        Mutability::None => None,
        Mutability::Pure => Some("pure"),
        Mutability::View => Some("view"),
        Mutability::Payable => Some("payable"),
    }
}

/// A state variable omits its visibility keyword when it is `private`, the
/// default — Solidity already treats an unqualified declaration that way.
pub(super) fn render_state_variable(writer: &mut Writer, var: &StateVariable) {
    writer.line_start();
    let visibility = match var.visibility {
        Visibility::Private => String::new(),
        other => format!(" {}", visibility_keyword(other)),
    };
    let initializer = var
        .initial_value
        .as_ref()
        .map(|expr| format!(" = {}", render_expression(expr)))
        .unwrap_or_default();
    writer.push(&format!(
        "{}{visibility} {}{initializer};",
        var.var_type.render(),
        var.name
    ));
    writer.newline();
}

pub(super) fn render_event(writer: &mut Writer, event: &Event) {
    writer.line_start();
    writer.push(&format!("event {}({});", event.name, render_params(&event.params)));
    writer.newline();
}

pub(super) fn render_constructor(writer: &mut Writer, constructor: &Constructor) {
    writer.line_start();
    writer.push(&format!("constructor({}) ", render_params(&constructor.params)));
    render_block(writer, &constructor.body);
    writer.newline();
}

/// Unlike a state variable, a function always prints its visibility
/// keyword, defaulting to `public` — Solidity requires an explicit
/// visibility specifier on every function. Mutability prints only when it
/// is not `none`.
pub(super) fn render_function(writer: &mut Writer, function: &Function) {
    writer.line_start();
    let mut signature = format!(
        "function {}({}) {}",
        function.name,
        render_params(&function.params),
        visibility_keyword(function.visibility)
    );
    if let Some(mutability) = mutability_keyword(function.mutability) {
        signature.push(' ');
        signature.push_str(mutability);
    }
    if let Some(return_type) = &function.return_type {
        signature.push_str(" returns (");
        signature.push_str(&return_type.render());
        signature.push(')');
    }
    signature.push(' ');
    writer.push(&signature);
    render_block(writer, &function.body);
    writer.newline();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Type};
    use crate::lexer::Position;

    fn pos() -> Position {
        Position::start()
    }

    #[test]
    fn default_visibility_function_still_prints_public() {
        let function = Function {
            name: "读取".to_owned(),
            params: vec![],
            return_type: None,
            visibility: Visibility::default(),
            mutability: Mutability::default(),
            body: Block { statements: vec![] },
            position: pos(),
        };
        let mut writer = Writer::new();
        render_function(&mut writer, &function);
        assert!(writer.into_string().contains("function 读取() public {}"));
    }

    #[test]
    fn private_state_variable_omits_visibility_keyword() {
        let var = StateVariable {
            name: "余额".to_owned(),
            var_type: Type::Primitive("int256".to_owned()),
            visibility: Visibility::Private,
            initial_value: None,
            position: pos(),
        };
        let mut writer = Writer::new();
        render_state_variable(&mut writer, &var);
        assert_eq!(writer.into_string(), "int256 余额;\n");
    }

    #[test]
    fn function_signature_orders_visibility_before_mutability_and_return() {
        let function = Function {
            name: "查询余额".to_owned(),
            params: vec![Parameter {
                name: "账户".to_owned(),
                param_type: Type::Primitive("address".to_owned()),
            }],
            return_type: Some(Type::Primitive("int256".to_owned())),
            visibility: Visibility::Public,
            mutability: Mutability::View,
            body: Block { statements: vec![] },
            position: pos(),
        };
        let mut writer = Writer::new();
        render_function(&mut writer, &function);
        assert!(writer
            .into_string()
            .contains("function 查询余额(address 账户) public view returns (int256) {}"));
    }
}
