//! End-to-end scenario: a missing `;` after a state variable is reported
//! as a `ParseError` naming the expected token and the position where it
//! was expected.

use zhuan::error::CompileError;

#[test]
fn missing_semicolon_after_state_variable_is_a_parse_error_at_the_right_position() {
    let source = "合约 代币 {\n    整数 余额\n}";

    let err = zhuan::compile(source).unwrap_err();

    let CompileError::Parse(parse_error) = err else {
        panic!("expected a ParseError, got {err:?}");
    };

    // the '}' that follows the missing ';' sits on line 3, column 1.
    assert_eq!(parse_error.position.line, 3);
    assert_eq!(parse_error.position.column, 1);
    assert!(parse_error.expected.contains(';'));
}
