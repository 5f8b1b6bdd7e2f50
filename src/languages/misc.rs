//! SQL, Haskell, R, Zig, Makefile, and Dockerfile tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::structure::Structure;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, c_strings, code_tail, NUMBER};

pub(super) fn sql() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("line_comment", r"--[^\n]*", TokenKind::LineComment, 91)
        .rule("block_comment", r"(?s)/\*.*?\*/", TokenKind::BlockComment, 90)
        .rule("string", r"'(?:[^']|'')*'", TokenKind::String, 80)
        .rule("quoted_ident", r#""[^"\n]*"|`[^`\n]*`"#, TokenKind::Identifier, 78)
        .rule("number", NUMBER, TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_][A-Za-z0-9_]*", TokenKind::Identifier, 50)
        .rule("operator", r"[-+*/%=!<>|]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\],.;:@]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .case_insensitive_keywords()
        .keywords(
            TokenKind::Keyword,
            &[
                "select", "from", "where", "insert", "into", "values", "update", "set",
                "delete", "create", "drop", "alter", "table", "index", "view", "join", "inner",
                "left", "right", "full", "outer", "on", "group", "by", "order", "having",
                "limit", "offset", "union", "all", "distinct", "as", "and", "or", "not", "in",
                "like", "between", "is", "exists", "primary", "foreign", "key", "references",
                "constraint", "unique", "default", "cascade", "begin", "commit", "rollback",
                "transaction", "grant", "revoke", "with",
            ],
        )
        .keywords(
            TokenKind::ControlKeyword,
            &["case", "when", "then", "else", "end", "if"],
        )
        .keywords(
            TokenKind::TypeName,
            &[
                "int", "integer", "bigint", "smallint", "decimal", "numeric", "real", "float",
                "double", "char", "varchar", "text", "date", "time", "timestamp", "boolean",
                "blob", "serial", "uuid", "json", "jsonb",
            ],
        )
        .keywords(TokenKind::Constant, &["null", "true", "false", "current_timestamp"])
        .build();
    Tokenizer::new(table)
}

pub(super) fn haskell() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("block_comment", r"(?s)\{-.*?-\}", TokenKind::BlockComment, 91)
        .rule("line_comment", r"--[^\n]*", TokenKind::LineComment, 90)
        .rule("string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("char", r"'(?:[^'\\\n]|\\.)'", TokenKind::Char, 78)
        .rule("pragma", r"(?s)\{-#.*?#-\}", TokenKind::Attribute, 92)
        .rule("number", NUMBER, TokenKind::Number, 60)
        .rule("type_name", r"[A-Z][A-Za-z0-9_']*", TokenKind::TypeName, 52)
        .rule("identifier", r"[a-z_][A-Za-z0-9_']*", TokenKind::Identifier, 50)
        .rule("operator", r"[-+*/%=!<>&|^~?$.:]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{},;`@\\]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(
            TokenKind::Keyword,
            &[
                "module", "import", "data", "newtype", "type", "class", "instance", "deriving",
                "where", "let", "in", "do", "qualified", "hiding", "infix", "infixl", "infixr",
                "foreign",
            ],
        )
        .keywords(
            TokenKind::ControlKeyword,
            &["if", "then", "else", "case", "of"],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn r() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
        .rule("number", r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?L?", TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z.][\w.]*", TokenKind::Identifier, 50)
        .rule("operator", r"<-|->|%[a-z%]+%|[-+*/^=!<>&|~?]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{},;:@$]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(
            TokenKind::ControlKeyword,
            &["if", "else", "for", "while", "repeat", "break", "next", "return"],
        )
        .keywords(TokenKind::Keyword, &["function", "library", "require", "in"])
        .keywords(
            TokenKind::Constant,
            &["TRUE", "FALSE", "NULL", "NA", "NaN", "Inf", "T", "F"],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn zig() -> Tokenizer {
    let table = code_tail(c_strings(c_comments(
        LanguageTable::builder()
            .rule("multiline_string", r"\\\\[^\n]*", TokenKind::RawString, 82)
            .rule("builtin", r"@[A-Za-z]\w*", TokenKind::MacroName, 70),
    )))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "else", "while", "for", "switch", "break", "continue", "return", "defer",
            "errdefer", "orelse", "catch", "try", "unreachable",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "const", "var", "fn", "pub", "export", "extern", "inline", "noinline", "comptime",
            "struct", "enum", "union", "error", "packed", "align", "and", "or", "test",
            "threadlocal", "usingnamespace", "async", "await", "suspend", "resume",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "u128", "isize",
            "usize", "f16", "f32", "f64", "f128", "bool", "void", "type", "anytype",
            "anyerror", "noreturn", "c_int", "c_char",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "null", "undefined"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn makefile() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule(
            "variable",
            r"\$\([^)\n]*\)|\$\{[^}\n]*\}|\$[A-Za-z@<^*?%]",
            TokenKind::ShellVariable,
            75,
        )
        .rule("assign_op", r"[:?+!]?=", TokenKind::Operator, 35)
        .rule("number", r"\b\d+\b", TokenKind::Number, 60)
        .rule("identifier", r"[.A-Za-z0-9_][\w./%-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[|&<>;]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{},.:@\\*%-]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(
            TokenKind::Keyword,
            &[
                "include", "ifeq", "ifneq", "ifdef", "ifndef", "else", "endif", "define",
                "endef", "export", "unexport", "override", "vpath",
            ],
        )
        .keywords(TokenKind::Constant, &[".PHONY", ".DEFAULT", ".SUFFIXES"])
        .build();
    // Target names read as keys: a word followed by `:`.
    Tokenizer::with_structure(table, Structure::KeyValue { key_kind: TokenKind::FunctionName })
}

pub(super) fn dockerfile() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"'[^'\n]*'", TokenKind::String, 80)
        .rule("variable", r"\$\{[^}\n]*\}|\$[A-Za-z_]\w*", TokenKind::ShellVariable, 75)
        .rule("option", r"--[A-Za-z][\w-]*", TokenKind::ShellOption, 55)
        .rule("number", r"\b\d+(?:\.\d+)?\b", TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_][\w./:-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[|&<>=]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{},.;:@\\]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .case_insensitive_keywords()
        .keywords(
            TokenKind::Keyword,
            &[
                "from", "run", "cmd", "label", "expose", "env", "add", "copy", "entrypoint",
                "volume", "user", "workdir", "arg", "onbuild", "stopsignal", "healthcheck",
                "shell", "maintainer", "as",
            ],
        )
        .build();
    Tokenizer::new(table)
}
