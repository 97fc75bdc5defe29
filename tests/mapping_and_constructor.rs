//! End-to-end scenario: a mapping state variable plus a constructor that
//! indexes it with the `msg.sender` rewrite.

#[test]
fn mapping_state_variable_and_constructor_emit_correctly() {
    let source = "合约 代币 { \
        映射(地址 => 整数) 公开 余额; \
        构造函数(整数 初始供应量) { 余额[消息发送者] = 初始供应量; } \
    }";

    let output = zhuan::compile(source).expect("valid source should compile");

    assert!(output.contains("mapping(address => int256) public 余额;"));
    assert!(output.contains("constructor(int256 初始供应量) {"));
    assert!(output.contains("余额[msg.sender] = 初始供应量;"));
}
