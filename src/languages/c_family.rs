//! C, C++, C#, and Java tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, c_strings, code_tail};

const C_CONTROL: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "goto",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "const", "enum", "extern", "inline", "register", "restrict", "sizeof", "static",
    "struct", "typedef", "union", "volatile",
];

const C_TYPES: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned", "size_t",
    "ssize_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t",
    "uint64_t", "bool", "FILE",
];

const C_CONSTANTS: &[&str] = &["NULL", "true", "false", "EOF", "stdin", "stdout", "stderr"];

pub(super) fn c() -> Tokenizer {
    let builder = LanguageTable::builder().rule_opts(
        "preprocessor",
        r"#\s*[A-Za-z]+",
        TokenKind::Preprocessor,
        70,
        PatternOptions::line_start(),
    );
    let table = code_tail(c_strings(c_comments(builder)))
        .keywords(TokenKind::ControlKeyword, C_CONTROL)
        .keywords(TokenKind::Keyword, C_KEYWORDS)
        .keywords(TokenKind::TypeName, C_TYPES)
        .keywords(TokenKind::Constant, C_CONSTANTS)
        .build();
    Tokenizer::new(table)
}

pub(super) fn cpp() -> Tokenizer {
    let builder = LanguageTable::builder()
        .rule_opts(
            "preprocessor",
            r"#\s*[A-Za-z]+",
            TokenKind::Preprocessor,
            70,
            PatternOptions::line_start(),
        )
        .rule("raw_string", r#"(?s)R"\(.*?\)""#, TokenKind::RawString, 82);
    let table = code_tail(c_strings(c_comments(builder)))
        .keywords(TokenKind::ControlKeyword, C_CONTROL)
        .keywords(TokenKind::Keyword, C_KEYWORDS)
        .keywords(
            TokenKind::Keyword,
            &[
                "class", "namespace", "template", "typename", "new", "delete", "public",
                "private", "protected", "virtual", "override", "final", "using", "try", "catch",
                "throw", "operator", "friend", "explicit", "constexpr", "decltype", "noexcept",
                "mutable", "typeid",
            ],
        )
        .keywords(TokenKind::TypeName, C_TYPES)
        .keywords(
            TokenKind::TypeName,
            &["wchar_t", "string", "wstring", "vector", "map", "set", "auto"],
        )
        .keywords(TokenKind::Constant, &["NULL", "nullptr", "true", "false", "this"])
        .build();
    Tokenizer::new(table)
}

pub(super) fn csharp() -> Tokenizer {
    let builder = LanguageTable::builder()
        .rule("verbatim_string", r#"(?s)@"(?:[^"]|"")*""#, TokenKind::RawString, 82)
        .rule("interp_string", r#"\$"(?:[^"\\\n]|\\.)*""#, TokenKind::String, 81);
    let table = code_tail(c_strings(c_comments(builder)))
        .keywords(
            TokenKind::ControlKeyword,
            &[
                "if", "else", "for", "foreach", "while", "do", "switch", "case", "default",
                "break", "continue", "return", "goto", "try", "catch", "finally", "throw",
                "yield", "await",
            ],
        )
        .keywords(
            TokenKind::Keyword,
            &[
                "abstract", "as", "async", "base", "checked", "class", "const", "delegate",
                "enum", "event", "explicit", "extern", "fixed", "implicit", "in", "interface",
                "internal", "is", "lock", "namespace", "new", "operator", "out", "override",
                "params", "partial", "private", "protected", "public", "readonly", "ref",
                "sealed", "sizeof", "stackalloc", "static", "struct", "typeof", "unchecked",
                "unsafe", "using", "var", "virtual", "where",
            ],
        )
        .keywords(
            TokenKind::TypeName,
            &[
                "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint",
                "long", "ulong", "short", "ushort", "object", "string", "void", "dynamic",
            ],
        )
        .keywords(TokenKind::Constant, &["true", "false", "null", "this"])
        .build();
    Tokenizer::new(table)
}

pub(super) fn java() -> Tokenizer {
    let builder =
        LanguageTable::builder().rule("annotation", r"@[A-Za-z_][\w.]*", TokenKind::Attribute, 70);
    let table = code_tail(c_strings(c_comments(builder)))
        .keywords(
            TokenKind::ControlKeyword,
            &[
                "if", "else", "for", "while", "do", "switch", "case", "default", "break",
                "continue", "return", "try", "catch", "finally", "throw", "throws",
            ],
        )
        .keywords(
            TokenKind::Keyword,
            &[
                "abstract", "assert", "class", "const", "enum", "extends", "final",
                "implements", "import", "instanceof", "interface", "native", "new", "package",
                "private", "protected", "public", "record", "sealed", "static", "strictfp",
                "super", "synchronized", "transient", "var", "volatile",
            ],
        )
        .keywords(
            TokenKind::TypeName,
            &[
                "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
                "String", "Object", "Integer", "Long", "Double", "Boolean", "List", "Map", "Set",
            ],
        )
        .keywords(TokenKind::Constant, &["true", "false", "null", "this"])
        .build();
    Tokenizer::new(table)
}
