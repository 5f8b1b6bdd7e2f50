//! Go, Swift, Kotlin, Dart, and Scala tables

use crate::pattern::LanguageTable;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, c_strings, code_tail};

pub(super) fn go() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder().rule("raw_string", r"(?s)`[^`]*`", TokenKind::RawString, 82),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "for", "range", "switch", "case", "default", "break", "continue",
            "return", "goto", "fallthrough", "select",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "chan", "const", "defer", "func", "go", "import", "interface", "map", "package",
            "struct", "type", "var",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int",
            "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16",
            "uint32", "uint64", "uintptr", "any",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "nil", "iota"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn swift() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder().rule("attribute", r"@[A-Za-z_]\w*", TokenKind::Attribute, 70),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "guard", "for", "while", "repeat", "switch", "case", "default",
            "break", "continue", "return", "throw", "do", "catch", "defer",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "as", "associatedtype", "class", "deinit", "enum", "extension", "func", "import",
            "in", "init", "inout", "internal", "is", "lazy", "let", "mutating", "operator",
            "override", "private", "protocol", "public", "static", "struct", "subscript",
            "throws", "try", "typealias", "var", "weak", "where", "willSet", "didSet", "some",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "Int", "Int8", "Int16", "Int32", "Int64", "UInt", "Double", "Float", "Bool",
            "String", "Character", "Array", "Dictionary", "Set", "Optional", "Any", "Void",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "nil", "self", "Self", "super"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn kotlin() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder()
            .rule("raw_string", r#"(?s)""".*?""""#, TokenKind::RawString, 82)
            .rule("annotation", r"@[A-Za-z_][\w.]*", TokenKind::Attribute, 70),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "when", "for", "while", "do", "break", "continue", "return", "try",
            "catch", "finally", "throw",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "abstract", "as", "class", "companion", "const", "constructor", "data", "enum",
            "fun", "import", "in", "init", "inline", "interface", "internal", "is", "lateinit",
            "object", "open", "operator", "out", "override", "package", "private", "protected",
            "public", "sealed", "suspend", "typealias", "val", "var", "vararg", "by",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "Int", "Long", "Short", "Byte", "Float", "Double", "Boolean", "Char", "String",
            "Unit", "Any", "Nothing", "List", "Map", "Set", "Array",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "null", "this", "super", "it"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn dart() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder()
            .rule("raw_string", r#"r'[^'\n]*'|r"[^"\n]*""#, TokenKind::RawString, 82)
            .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 81)
            .rule("annotation", r"@[A-Za-z_]\w*", TokenKind::Attribute, 70),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "for", "while", "do", "switch", "case", "default", "break",
            "continue", "return", "try", "catch", "finally", "throw", "rethrow", "await",
            "yield",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "abstract", "as", "assert", "async", "class", "const", "covariant", "enum",
            "extends", "extension", "external", "factory", "final", "get", "implements",
            "import", "in", "is", "late", "library", "mixin", "new", "operator", "part",
            "required", "set", "static", "typedef", "var", "with",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "int", "double", "num", "bool", "String", "List", "Map", "Set", "Object", "Future",
            "Stream", "void", "dynamic",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "null", "this", "super"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn scala() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder()
            .rule("raw_string", r#"(?s)""".*?""""#, TokenKind::RawString, 82)
            .rule("annotation", r"@[A-Za-z_]\w*", TokenKind::Attribute, 70),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "for", "while", "do", "match", "case", "return", "try", "catch",
            "finally", "throw", "yield",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "abstract", "class", "def", "extends", "final", "given", "implicit", "import",
            "lazy", "new", "object", "override", "package", "private", "protected", "sealed",
            "trait", "type", "using", "val", "var", "with",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "Int", "Long", "Short", "Byte", "Float", "Double", "Boolean", "Char", "String",
            "Unit", "Any", "AnyRef", "Nothing", "Option", "List", "Map", "Seq", "Vector",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "null", "this", "super", "None", "Some"])
    .build();
    Tokenizer::new(table)
}
