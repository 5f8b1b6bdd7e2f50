//! JavaScript, TypeScript, and CSS tables

use crate::pattern::LanguageTable;
use crate::structure::Structure;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, code_tail};

const JS_CONTROL: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "try", "catch", "finally", "throw", "await", "yield",
];

const JS_KEYWORDS: &[&str] = &[
    "async", "class", "const", "delete", "export", "extends", "function", "get", "import",
    "in", "instanceof", "let", "new", "of", "set", "static", "typeof", "var", "void", "with",
];

const JS_CONSTANTS: &[&str] = &[
    "true", "false", "null", "undefined", "this", "super", "NaN", "Infinity", "globalThis",
];

fn js_base() -> crate::pattern::LanguageTableBuilder {
    c_comments(LanguageTable::builder())
        .rule("template_string", r"(?s)`(?:[^`\\]|\\.)*`", TokenKind::String, 82)
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
        .rule("open_string", r#"["'](?:[^"'\\\n]|\\.)*"#, TokenKind::Error, 79)
        // Best effort: a slash run that looks like a literal is one;
        // division expressions occasionally lose.
        .rule("regex", r"/(?:[^/\\\n*]|\\.)(?:[^/\\\n]|\\.)*/[dgimsuvy]*", TokenKind::Regex, 76)
}

pub(super) fn javascript() -> Tokenizer {
    let table = code_tail(js_base())
        .keywords(TokenKind::ControlKeyword, JS_CONTROL)
        .keywords(TokenKind::Keyword, JS_KEYWORDS)
        .keywords(TokenKind::Constant, JS_CONSTANTS)
        .keywords(
            TokenKind::TypeName,
            &["Array", "Object", "String", "Number", "Boolean", "Promise", "Map", "Set", "Date", "RegExp", "Error", "Symbol", "BigInt", "JSON", "Math"],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn typescript() -> Tokenizer {
    let table = code_tail(js_base().rule("decorator", r"@[A-Za-z_][\w.]*", TokenKind::Attribute, 70))
        .keywords(TokenKind::ControlKeyword, JS_CONTROL)
        .keywords(TokenKind::Keyword, JS_KEYWORDS)
        .keywords(
            TokenKind::Keyword,
            &[
                "abstract", "as", "declare", "enum", "implements", "interface", "is", "keyof",
                "namespace", "override", "private", "protected", "public", "readonly",
                "satisfies", "type",
            ],
        )
        .keywords(TokenKind::Constant, JS_CONSTANTS)
        .keywords(
            TokenKind::TypeName,
            &[
                "any", "bigint", "boolean", "never", "number", "object", "string", "symbol",
                "unknown", "void", "Array", "Promise", "Record", "Partial", "Readonly", "Map",
                "Set",
            ],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn css() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("block_comment", r"(?s)/\*.*?\*/", TokenKind::BlockComment, 90)
        .rule("open_block_comment", r"(?s)/\*.*", TokenKind::BlockComment, 89)
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
        .rule("hex_color", r"#[0-9a-fA-F]{3,8}\b", TokenKind::Constant, 72)
        .rule("selector", r"[.#][A-Za-z_-][\w-]*", TokenKind::CssSelector, 70)
        .rule("at_rule", r"@[A-Za-z-]+", TokenKind::Attribute, 70)
        .rule("important", r"![A-Za-z]+", TokenKind::Keyword, 68)
        .rule(
            "dimension",
            r"-?\d+(?:\.\d+)?(?:px|em|rem|ex|ch|vw|vh|vmin|vmax|pt|pc|cm|mm|in|deg|rad|turn|ms|s|fr|%)",
            TokenKind::CssUnit,
            65,
        )
        .rule("number", r"-?\d+(?:\.\d+)?", TokenKind::Number, 60)
        .rule("identifier", r"-{0,2}[A-Za-z_][\w-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[>+~*=^|$]+", TokenKind::Operator, 30)
        .rule("punct", r"[{}()\[\];,.:]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .fallback_kind(TokenKind::Text)
        .build();
    // Property names sit before `:`; the key pass picks them out of the
    // generic identifiers.
    Tokenizer::with_structure(table, Structure::KeyValue { key_kind: TokenKind::CssProperty })
}
