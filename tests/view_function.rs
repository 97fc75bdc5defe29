//! End-to-end scenario: a `view` function with an explicit return type and
//! a parameter, rendered with visibility before mutability.

#[test]
fn view_function_orders_visibility_then_mutability_then_return() {
    let source = "合约 代币 { \
        映射(地址 => 整数) 私有 余额; \
        函数 查询余额(地址 账户) 公开 只读 返回 整数 { 返回 余额[账户]; } \
    }";

    let output = zhuan::compile(source).expect("valid source should compile");

    assert!(output.contains("function 查询余额(address 账户) public view returns (int256) {"));
    assert!(output.contains("return 余额[账户];"));
}
