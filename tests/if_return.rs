//! End-to-end scenario: an `if`/`return` pair inside a function body, with
//! the built-in `消息发送者` identifier and boolean literals rewritten.

#[test]
fn if_return_rewrites_builtins_and_boolean_literals() {
    let source = "合约 代币 { \
        映射(地址 => 整数) 私有 余额; \
        函数 提款(整数 金额) { \
            如果 (余额[消息发送者] >= 金额) { 返回 真; } \
            返回 假; \
        } \
    }";

    let output = zhuan::compile(source).expect("valid source should compile");

    assert!(output.contains("if (余额[msg.sender] >= 金额) {"));
    assert!(output.contains("return true;"));
    assert!(output.contains("return false;"));
}
