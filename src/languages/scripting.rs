//! Python, Ruby, Lua, Perl, and PHP tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

use super::{c_comments, code_tail};

pub(super) fn python() -> Tokenizer {
    let table = code_tail(
        LanguageTable::builder()
            .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
            .rule("triple_dq", r#"(?s)[rRbBuUfF]{0,2}""".*?""""#, TokenKind::DocComment, 85)
            .rule("triple_sq", r"(?s)[rRbBuUfF]{0,2}'''.*?'''", TokenKind::DocComment, 85)
            .rule("dq_string", r#"[rRbBuUfF]{0,2}"(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("sq_string", r"[rRbBuUfF]{0,2}'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
            .rule("open_string", r#"["'](?:[^"'\\\n]|\\.)*"#, TokenKind::Error, 79)
            .rule("decorator", r"@[A-Za-z_][\w.]*", TokenKind::Attribute, 70),
    )
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "elif", "else", "for", "while", "try", "except", "finally", "break",
            "continue", "return", "raise", "pass", "yield", "with",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "and", "as", "assert", "async", "await", "class", "def", "del", "from", "global",
            "import", "in", "is", "lambda", "nonlocal", "not", "or",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &[
            "int", "float", "complex", "str", "bytes", "bool", "list", "dict", "set", "tuple",
            "frozenset", "object", "type",
        ],
    )
    .keywords(TokenKind::Constant, &["True", "False", "None", "self", "cls"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn ruby() -> Tokenizer {
    let table = code_tail(
        LanguageTable::builder()
            .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
            .rule_opts(
                "block_comment",
                r"(?s)=begin.*?=end",
                TokenKind::BlockComment,
                89,
                PatternOptions {
                    at_line_start: true,
                    dot_matches_newline: true,
                    ..Default::default()
                },
            )
            .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
            .rule("symbol", r":[A-Za-z_]\w*[?!]?", TokenKind::Constant, 72)
            .rule("instance_var", r"@{1,2}[A-Za-z_]\w*", TokenKind::ShellVariable, 71)
            .rule("global_var", r"\$[A-Za-z_]\w*", TokenKind::ShellVariable, 71)
            .rule("method_word", r"[A-Za-z_]\w*[?!]", TokenKind::Identifier, 52),
    )
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "elsif", "else", "unless", "case", "when", "while", "until", "for", "break",
            "next", "redo", "retry", "return", "begin", "rescue", "ensure", "raise", "yield",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "alias", "and", "attr_accessor", "attr_reader", "attr_writer", "class", "def",
            "defined?", "do", "end", "in", "module", "not", "or", "require", "require_relative",
            "then", "undef",
        ],
    )
    .keywords(TokenKind::Constant, &["true", "false", "nil", "self", "super"])
    .build();
    Tokenizer::new(table)
}

pub(super) fn lua() -> Tokenizer {
    let table = code_tail(
        LanguageTable::builder()
            .rule("block_comment", r"(?s)--\[\[.*?\]\]", TokenKind::BlockComment, 91)
            .rule("comment", r"--[^\n]*", TokenKind::LineComment, 90)
            .rule("long_string", r"(?s)\[\[.*?\]\]", TokenKind::RawString, 82)
            .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80),
    )
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "then", "elseif", "else", "for", "while", "repeat", "until", "break",
            "return", "goto", "do", "end",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &["and", "function", "in", "local", "not", "or"],
    )
    .keywords(TokenKind::Constant, &["true", "false", "nil", "self"])
    .keywords(
        TokenKind::FunctionName,
        &["print", "pairs", "ipairs", "tostring", "tonumber", "require", "pcall", "error"],
    )
    .build();
    Tokenizer::new(table)
}

pub(super) fn perl() -> Tokenizer {
    let table = code_tail(
        LanguageTable::builder()
            .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
            .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
            .rule("match_regex", r"m/(?:[^/\\\n]|\\.)*/[a-z]*", TokenKind::Regex, 76)
            .rule(
                "subst_regex",
                r"s/(?:[^/\\\n]|\\.)*/(?:[^/\\\n]|\\.)*/[a-z]*",
                TokenKind::Regex,
                76,
            )
            .rule("variable", r"[\$@%][A-Za-z_]\w*", TokenKind::ShellVariable, 72),
    )
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "elsif", "else", "unless", "for", "foreach", "while", "until", "last",
            "next", "redo", "return", "die",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "and", "bless", "do", "eq", "ge", "gt", "le", "lt", "my", "ne", "no", "not", "or",
            "our", "package", "require", "sub", "use", "local",
        ],
    )
    .keywords(TokenKind::Constant, &["undef"])
    .keywords(
        TokenKind::FunctionName,
        &["print", "printf", "push", "pop", "shift", "unshift", "split", "join", "map", "grep"],
    )
    .build();
    Tokenizer::new(table)
}

pub(super) fn php() -> Tokenizer {
    let table = code_tail(c_comments(
        LanguageTable::builder()
            .rule("open_tag", r"<\?php\b|<\?=|\?>", TokenKind::Preprocessor, 95)
            .rule("hash_comment", r"#[^\n]*", TokenKind::LineComment, 88)
            .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
            .rule("sq_string", r"'(?:[^'\\\n]|\\.)*'", TokenKind::String, 80)
            .rule("variable", r"\$[A-Za-z_]\w*", TokenKind::ShellVariable, 72)
            .rule("attribute", r"#\[[^\]\n]*\]", TokenKind::Attribute, 89),
    ))
    .keywords(
        TokenKind::ControlKeyword,
        &[
            "if", "elseif", "else", "for", "foreach", "while", "do", "switch", "case",
            "default", "break", "continue", "return", "try", "catch", "finally", "throw",
            "match", "yield",
        ],
    )
    .keywords(
        TokenKind::Keyword,
        &[
            "abstract", "as", "class", "clone", "const", "declare", "echo", "enum", "extends",
            "final", "fn", "function", "global", "implements", "include", "include_once",
            "instanceof", "interface", "namespace", "new", "private", "protected", "public",
            "readonly", "require", "require_once", "static", "trait", "use", "var",
        ],
    )
    .keywords(
        TokenKind::TypeName,
        &["array", "bool", "callable", "float", "int", "iterable", "mixed", "object", "string", "void"],
    )
    .keywords(TokenKind::Constant, &["true", "false", "null", "this", "parent", "self"])
    .build();
    Tokenizer::new(table)
}
