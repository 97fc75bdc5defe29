//! The fixed Chinese-keyword table plus the longest-match lookup used by
//! the lexer to tell keywords apart from identifiers that merely start
//! with the same code points (e.g. `余额X` vs. a hypothetical `余`
//! keyword).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::TokenKind;

/// All multi-codepoint keyword spellings, longest first so a linear scan
/// finds the longest match without needing a trie. The table is small
/// (~30 entries) so a `HashMap` keyed by byte-length bucket plus a
/// descending-length `Vec` is simpler than building one.
pub static KEYWORDS: Lazy<Vec<(&'static str, TokenKind)>> = Lazy::new(|| {
    let mut table = vec![
        ("合约", TokenKind::Contract),
        ("函数", TokenKind::Function),
        ("构造函数", TokenKind::Constructor),
        ("事件", TokenKind::Event),
        ("返回", TokenKind::Return),
        ("如果", TokenKind::If),
        ("否则", TokenKind::Else),
        ("当", TokenKind::While),
        ("对于", TokenKind::For),
        ("映射", TokenKind::Mapping),
        ("公开", TokenKind::Public),
        ("私有", TokenKind::Private),
        ("内部", TokenKind::Internal),
        ("外部", TokenKind::External),
        ("纯函数", TokenKind::Pure),
        ("只读", TokenKind::View),
        ("可支付", TokenKind::Payable),
        ("整数", TokenKind::IntType),
        ("无符号整数", TokenKind::UintType),
        ("字符串", TokenKind::StringType),
        ("布尔", TokenKind::BoolType),
        ("地址", TokenKind::AddressType),
        ("字节", TokenKind::BytesType),
        ("真", TokenKind::True),
        ("假", TokenKind::False),
    ];
    // descending by code-point length: longest match wins ("无符号整数"
    // must be tried before "整数" would otherwise win as a prefix).
    table.sort_by_key(|(spelling, _)| std::cmp::Reverse(spelling.chars().count()));
    table
});

/// Keyword spellings that the emitter rewrites to a `msg.`/`block.`/`tx.`
/// member expression rather than to a bare Solidity identifier.
pub static BUILTIN_MEMBERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("消息发送者", "msg.sender"),
        ("消息值", "msg.value"),
        ("区块时间戳", "block.timestamp"),
        ("区块号", "block.number"),
        ("交易发送者", "tx.origin"),
    ])
});

/// A CJK Unified Ideograph (common block) or its Extension A block.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// Whether `c` can continue an identifier that has already started:
/// letter, digit, underscore, or CJK ideograph.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_cjk(c)
}

/// Whether `c` can start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || is_cjk(c)
}

/// Try to match the longest keyword spelling at the start of `rest`, such
/// that the match is not immediately followed by an identifier-continuation
/// code point. Returns the matched spelling's `TokenKind` and its length in
/// code points.
pub fn match_keyword(rest: &str) -> Option<(TokenKind, usize)> {
    for (spelling, kind) in KEYWORDS.iter() {
        let len = spelling.chars().count();
        if !rest.starts_with(spelling) {
            continue;
        }
        let following = rest[spelling.len()..].chars().next();
        let blocked = following.is_some_and(is_identifier_continue);
        if !blocked {
            return Some((*kind, len));
        }
    }
    None
}
