//! End-to-end scenario: a minimal contract with one public string state
//! variable compiles to the expected Solidity skeleton.

#[test]
fn token_contract_skeleton_emits_pragma_and_public_string() {
    let source = r#"合约 我的代币 { 公开 字符串 名称 = "我的代币"; }"#;

    let output = zhuan::compile(source).expect("valid source should compile");

    assert!(output.starts_with("// SPDX-License-Identifier: MIT\npragma solidity ^0.8.0;\n"));
    assert!(output.contains("contract 我的代币"));
    assert!(output.contains(r#"string public 名称 = "我的代币";"#));
}
