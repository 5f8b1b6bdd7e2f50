//! JSON, YAML, TOML, and INI tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::structure::Structure;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

pub(super) fn json() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("string", r#""(?:[^"\\]|\\.)*""#, TokenKind::String, 80)
        .rule("open_string", r#""(?:[^"\\\n]|\\.)*"#, TokenKind::Error, 79)
        .rule("number", r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?", TokenKind::Number, 60)
        .rule("word", r"[A-Za-z_]\w*", TokenKind::Identifier, 50)
        .rule("punct", r"[{}\[\],:]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(TokenKind::Constant, &["true", "false", "null"])
        .build();
    Tokenizer::with_structure(table, Structure::KeyValue { key_kind: TokenKind::Key })
}

pub(super) fn yaml() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule_opts(
            "document_marker",
            r"(?:---|\.\.\.)[ \t]*",
            TokenKind::Punctuation,
            85,
            PatternOptions::line_start(),
        )
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"'(?:[^']|'')*'", TokenKind::String, 80)
        .rule("anchor", r"&[\w-]+", TokenKind::YamlAnchor, 75)
        .rule("alias", r"\*[\w-]+", TokenKind::YamlAlias, 75)
        .rule("type_tag", r"!!?[\w/!-]*", TokenKind::YamlTag, 75)
        .rule("number", r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?", TokenKind::Number, 60)
        .rule("word", r"[A-Za-z_][\w-]*", TokenKind::Identifier, 50)
        .rule("block_scalar", r"[|>][+-]?", TokenKind::Operator, 30)
        .rule("punct", r"[{}\[\],:?-]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .case_insensitive_keywords()
        .keywords(TokenKind::Constant, &["true", "false", "null", "yes", "no", "on", "off"])
        .fallback_kind(TokenKind::Text)
        .build();
    Tokenizer::with_structure(table, Structure::KeyValue { key_kind: TokenKind::Key })
}

pub(super) fn toml() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule_opts(
            "section",
            r"\[\[?[^\]\n]*\]\]?",
            TokenKind::SectionHeader,
            85,
            PatternOptions::line_start(),
        )
        .rule("ml_basic_string", r#"(?s)""".*?""""#, TokenKind::String, 82)
        .rule("ml_literal_string", r"(?s)'''.*?'''", TokenKind::RawString, 82)
        .rule("basic_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule("literal_string", r"'[^'\n]*'", TokenKind::RawString, 80)
        .rule(
            "datetime",
            r"\d{4}-\d{2}-\d{2}(?:[Tt ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[Zz]|[+-]\d{2}:\d{2})?)?",
            TokenKind::Number,
            65,
        )
        .rule("number", r"[+-]?(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)", TokenKind::Number, 60)
        .rule_opts(
            "key",
            r"[A-Za-z0-9_.-]+",
            TokenKind::Key,
            55,
            PatternOptions::line_start(),
        )
        .rule("word", r"[A-Za-z_][\w-]*", TokenKind::Identifier, 50)
        .rule("operator", r"=", TokenKind::Operator, 30)
        .rule("punct", r"[{}\[\],.]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(TokenKind::Constant, &["true", "false", "inf", "nan"])
        .fallback_kind(TokenKind::Text)
        .build();
    Tokenizer::new(table)
}

pub(super) fn ini() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"[;#][^\n]*", TokenKind::LineComment, 90)
        .rule_opts(
            "section",
            r"\[[^\]\n]*\]",
            TokenKind::SectionHeader,
            85,
            PatternOptions::line_start(),
        )
        .rule("dq_string", r#""(?:[^"\\\n]|\\.)*""#, TokenKind::String, 80)
        .rule_opts(
            "key",
            r"[ \t]*[A-Za-z0-9_.-]+",
            TokenKind::Key,
            55,
            PatternOptions::line_start(),
        )
        .rule("number", r"[+-]?\d+(?:\.\d+)?", TokenKind::Number, 60)
        .rule("word", r"[A-Za-z_][\w-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[=:]", TokenKind::Operator, 30)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .rule("value_text", r"[^\n]+", TokenKind::Text, 5)
        .case_insensitive_keywords()
        .keywords(TokenKind::Constant, &["true", "false", "yes", "no", "on", "off"])
        .fallback_kind(TokenKind::Text)
        .build();
    Tokenizer::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn described(tokenizer: &Tokenizer, text: &str) -> Vec<(String, TokenKind)> {
        tokenizer
            .tokens(text)
            .map(|t| (t.text(text).to_string(), t.kind))
            .collect()
    }

    #[test]
    fn test_json_key_detection() {
        let tokens = described(&json(), r#"{"a":1}"#);
        assert_eq!(
            tokens,
            vec![
                ("{".to_string(), TokenKind::Punctuation),
                ("\"a\"".to_string(), TokenKind::Key),
                (":".to_string(), TokenKind::Punctuation),
                ("1".to_string(), TokenKind::Number),
                ("}".to_string(), TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_json_string_value_not_key() {
        let tokens = described(&json(), r#"{"a": "b"}"#);
        assert!(tokens.contains(&("\"a\"".to_string(), TokenKind::Key)));
        assert!(tokens.contains(&("\"b\"".to_string(), TokenKind::String)));
    }

    #[test]
    fn test_json_constants() {
        let tokens = described(&json(), "[true, null]");
        assert!(tokens.contains(&("true".to_string(), TokenKind::Constant)));
        assert!(tokens.contains(&("null".to_string(), TokenKind::Constant)));
    }

    #[test]
    fn test_yaml_keys_anchors_aliases() {
        let text = "base: &ref\n  flag: Yes\nother: *ref\n";
        let tokens = described(&yaml(), text);
        assert!(tokens.contains(&("base".to_string(), TokenKind::Key)));
        assert!(tokens.contains(&("&ref".to_string(), TokenKind::YamlAnchor)));
        assert!(tokens.contains(&("*ref".to_string(), TokenKind::YamlAlias)));
        // Case-insensitive constant table.
        assert!(tokens.contains(&("Yes".to_string(), TokenKind::Constant)));
    }

    #[test]
    fn test_toml_section_and_key() {
        let text = "[server]\nport = 8080\n";
        let tokens = described(&toml(), text);
        assert_eq!(tokens[0], ("[server]".to_string(), TokenKind::SectionHeader));
        assert!(tokens.contains(&("port".to_string(), TokenKind::Key)));
        assert!(tokens.contains(&("8080".to_string(), TokenKind::Number)));
    }

    #[test]
    fn test_toml_datetime() {
        let tokens = described(&toml(), "t = 1979-05-27T07:32:00Z\n");
        assert!(tokens
            .iter()
            .any(|(lex, kind)| lex == "1979-05-27T07:32:00Z" && *kind == TokenKind::Number));
    }

    #[test]
    fn test_ini_section_key_value() {
        let text = "[core]\nname = glint\n; note\n";
        let tokens = described(&ini(), text);
        assert_eq!(tokens[0], ("[core]".to_string(), TokenKind::SectionHeader));
        assert!(tokens.contains(&("name".to_string(), TokenKind::Key)));
        assert!(tokens.contains(&("; note".to_string(), TokenKind::LineComment)));
    }
}
