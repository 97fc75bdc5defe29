//! AST-directed Solidity emitter. `emit` is total on any well-formed
//! `Program` produced by the parser: no lookups back into the source, no
//! fallible rendering beyond the reserved `CodeGenError` for invariants
//! that should be unreachable in practice.

mod expression;
mod function;
mod statement;

use log::debug;

use crate::ast::{Contract, Program};
use crate::error::CodeGenError;

use function::{render_constructor, render_event, render_function, render_state_variable};

const PREAMBLE: &str = "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.0;\n\n";

/// Growable output buffer with managed indentation, accumulating output
/// line by line rather than building the whole string in one `format!`
/// call.
struct Writer {
    buffer: String,
    indent_level: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }

    fn line_start(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("    ");
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level -= 1;
    }

    fn into_string(self) -> String {
        self.buffer
    }
}

/// Render a full `Program` to a Solidity source string, preceded by the
/// fixed pragma preamble.
pub fn emit(program: &Program) -> Result<String, CodeGenError> {
    let mut writer = Writer::new();
    writer.push(PREAMBLE);
    for (index, contract) in program.contracts.iter().enumerate() {
        if index > 0 {
            writer.newline();
        }
        render_contract(&mut writer, contract)?;
    }
    Ok(writer.into_string())
}

/// Contract members are reordered on output: state variables, events,
/// constructor, then functions, regardless of source order. Source order
/// is preserved within each group.
fn render_contract(writer: &mut Writer, contract: &Contract) -> Result<(), CodeGenError> {
    debug!("emitting contract {}", contract.name);
    writer.push(&format!("contract {} ", contract.name));

    let is_empty = contract.state_variables.is_empty()
        && contract.events.is_empty()
        && contract.constructor.is_none()
        && contract.functions.is_empty();

    if is_empty {
        writer.push("{}");
        writer.newline();
        return Ok(());
    }

    writer.push("{");
    writer.newline();
    writer.indent();

    let mut wrote_group = false;
    if !contract.state_variables.is_empty() {
        for var in &contract.state_variables {
            render_state_variable(writer, var);
        }
        wrote_group = true;
    }
    if !contract.events.is_empty() {
        if wrote_group {
            writer.newline();
        }
        for event in &contract.events {
            render_event(writer, event);
        }
        wrote_group = true;
    }
    if let Some(constructor) = &contract.constructor {
        if wrote_group {
            writer.newline();
        }
        render_constructor(writer, constructor);
        wrote_group = true;
    }
    if !contract.functions.is_empty() {
        if wrote_group {
            writer.newline();
        }
        for (index, function) in contract.functions.iter().enumerate() {
            if index > 0 {
                writer.newline();
            }
            render_function(writer, function);
        }
    }

    writer.dedent();
    writer.line_start();
    writer.push("}");
    writer.newline();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn emit_source(src: &str) -> String {
        let program = parse(tokenize(src).unwrap()).unwrap();
        emit(&program).unwrap()
    }

    #[test]
    fn preamble_precedes_every_contract() {
        let out = emit_source("合约 代币 { }");
        assert!(out.starts_with(PREAMBLE));
    }

    #[test]
    fn empty_contract_has_no_blank_interior_lines() {
        let out = emit_source("合约 代币 { }");
        assert!(out.contains("contract 代币 {}"));
    }

    #[test]
    fn members_reorder_regardless_of_source_order() {
        let out = emit_source(
            "合约 代币 { 函数 读取() { } 构造函数() { } 事件 转账(地址 到); 整数 余额; }",
        );
        let var_pos = out.find("余额").unwrap();
        let event_pos = out.find("event").unwrap();
        let ctor_pos = out.find("constructor").unwrap();
        let fn_pos = out.find("function").unwrap();
        assert!(var_pos < event_pos);
        assert!(event_pos < ctor_pos);
        assert!(ctor_pos < fn_pos);
    }

    #[test]
    fn token_contract_skeleton_scenario() {
        let out = emit_source(r#"合约 我的代币 { 公开 字符串 名称 = "我的代币"; }"#);
        assert!(out.contains(r#"string public 名称 = "我的代币";"#));
        assert!(out.contains("contract 我的代币"));
    }

    #[test]
    fn mapping_and_constructor_scenario() {
        let out = emit_source(
            "合约 C { 映射(地址 => 整数) 公开 余额; 构造函数(整数 初始供应量) { 余额[消息发送者] = 初始供应量; } }",
        );
        assert!(out.contains("mapping(address => int256) public 余额;"));
        assert!(out.contains("constructor(int256 初始供应量) {"));
        assert!(out.contains("余额[msg.sender] = 初始供应量;"));
    }

    #[test]
    fn view_function_scenario() {
        let out = emit_source(
            "合约 C { 函数 查询余额(地址 账户) 公开 只读 返回 整数 { 返回 余额[账户]; } }",
        );
        assert!(out.contains("function 查询余额(address 账户) public view returns (int256) {"));
    }
}
