//! Built-in language tables
//!
//! Every table here is pure data fed to the generic scanner: ordered
//! pattern rules, a keyword map, and a structural shape. Tables are
//! grouped by family; shared rule bundles live in this module.
//!
//! Priority bands (higher wins; insertion order breaks ties):
//! comments 89-95, strings 76-88, annotations/specials 65-75,
//! numbers 60, words 45-58, operators 30, punctuation 20, whitespace 10.

mod c_family;
mod data;
mod markup;
mod misc;
mod modern;
mod rust_lang;
mod scripting;
mod shell;
mod web;

use crate::pattern::LanguageTableBuilder;
use crate::registry::Language;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

/// Build the tokenizer for a builtin language
pub(crate) fn build(language: Language) -> Option<Tokenizer> {
    let tokenizer = match language {
        Language::None => return None,
        Language::C => c_family::c(),
        Language::Cpp => c_family::cpp(),
        Language::CSharp => c_family::csharp(),
        Language::Java => c_family::java(),
        Language::Rust => rust_lang::rust(),
        Language::Go => modern::go(),
        Language::Swift => modern::swift(),
        Language::Kotlin => modern::kotlin(),
        Language::Dart => modern::dart(),
        Language::Scala => modern::scala(),
        Language::Python => scripting::python(),
        Language::Ruby => scripting::ruby(),
        Language::Lua => scripting::lua(),
        Language::Perl => scripting::perl(),
        Language::Php => scripting::php(),
        Language::JavaScript => web::javascript(),
        Language::TypeScript => web::typescript(),
        Language::Css => web::css(),
        Language::Html => markup::html(),
        Language::Xml => markup::xml(),
        Language::Markdown => markup::markdown(),
        Language::Json => data::json(),
        Language::Yaml => data::yaml(),
        Language::Toml => data::toml(),
        Language::Ini => data::ini(),
        Language::Bash => shell::bash(),
        Language::PowerShell => shell::powershell(),
        Language::Batch => shell::batch(),
        Language::Sql => misc::sql(),
        Language::Haskell => misc::haskell(),
        Language::R => misc::r(),
        Language::Zig => misc::zig(),
        Language::Makefile => misc::makefile(),
        Language::Dockerfile => misc::dockerfile(),
    };
    Some(tokenizer)
}

/// C-style comments: `//` lines, `///` docs, `/* */` blocks, and an
/// unterminated-block rule so half-typed comments still tokenize.
pub(super) fn c_comments(builder: LanguageTableBuilder) -> LanguageTableBuilder {
    builder
        .rule("doc_block", r"(?s)/\*\*.*?\*/", TokenKind::DocComment, 93)
        .rule("doc_line", r"//[/!][^\n]*", TokenKind::DocComment, 92)
        .rule("line_comment", r"//[^\n]*", TokenKind::LineComment, 91)
        .rule("block_comment", r"(?s)/\*.*?\*/", TokenKind::BlockComment, 90)
        .rule("open_block_comment", r"(?s)/\*.*", TokenKind::BlockComment, 89)
}

/// Double-quoted strings with escapes plus character literals; an
/// unterminated string runs to end of line as an error span.
pub(super) fn c_strings(builder: LanguageTableBuilder) -> LanguageTableBuilder {
    builder
        .rule("string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("open_string", r#""(?:[^"\\\n]|\\.)*"#, TokenKind::Error, 79)
        .rule("char", r"'(?:[^'\\\n]|\\.)'", TokenKind::Char, 78)
}

/// Integer and float literals in the common notations
pub(super) const NUMBER: &str = r"0[xX][0-9a-fA-F][0-9a-fA-F_]*|0[bB][01][01_]*|0[oO][0-7][0-7_]*|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?[A-Za-z]*";

/// The word/number/operator/punctuation/whitespace rules every
/// code-like table ends with.
pub(super) fn code_tail(builder: LanguageTableBuilder) -> LanguageTableBuilder {
    builder
        .rule("number", NUMBER, TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_][A-Za-z0-9_]*", TokenKind::Identifier, 50)
        .rule("operator", r"[-+*/%=!<>&|^~?]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{};,.:@#$`\\]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
}
