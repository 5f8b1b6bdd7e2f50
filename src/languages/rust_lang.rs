//! Rust table

use crate::pattern::LanguageTable;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, code_tail};

pub(super) fn rust() -> Tokenizer {
    let table = code_tail(c_comments(
        LanguageTable::builder()
            .rule("raw_hash_string", r##"(?s)r#".*?"#"##, TokenKind::RawString, 83)
            .rule("raw_string", r#"r"[^"]*""#, TokenKind::RawString, 82)
            .rule("byte_string", r#"b"(?:[^"\\\n]|\\.)*""#, TokenKind::String, 81)
            .rule("string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("open_string", r#""(?:[^"\\\n]|\\.)*"#, TokenKind::Error, 79)
            .rule("char", r"'(?:[^'\\\n]|\\.)'", TokenKind::Char, 78)
            .rule("lifetime", r"'[A-Za-z_]\w*", TokenKind::Lifetime, 77)
            .rule("attribute", r"#!?\[[^\]\n]*\]", TokenKind::Attribute, 70)
            .rule("macro", r"[A-Za-z_]\w*!", TokenKind::MacroName, 55),
    ))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "match", "loop", "while", "for", "break", "continue", "return",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "as", "async", "await", "const", "crate", "dyn", "enum", "extern", "fn", "impl",
            "in", "let", "mod", "move", "mut", "pub", "ref", "static", "struct", "super",
            "trait", "type", "union", "unsafe", "use", "where", "self", "Self",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
            "i32", "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Box", "Rc", "Arc",
            "Option", "Result", "Cow",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "Some", "None", "Ok", "Err"])
    .build();
    Tokenizer::new(table)
}
