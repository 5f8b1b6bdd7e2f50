//! HTML, XML, and Markdown tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::structure::Structure;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

pub(super) fn html() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"(?s)<!--.*?-->", TokenKind::BlockComment, 95)
        .rule("open_comment", r"(?s)<!--.*", TokenKind::BlockComment, 94)
        .rule("doctype", r"(?i)<!DOCTYPE[^>]*>", TokenKind::Doctype, 93)
        .rule("tag", r"(?s)</?[A-Za-z!][^<>]*>", TokenKind::Tag, 90)
        .rule("entity", r"&#?[A-Za-z0-9]+;", TokenKind::Entity, 70)
        .rule("text", r"[^<&]+", TokenKind::Text, 10)
        .fallback_kind(TokenKind::Text)
        .build();
    Tokenizer::with_structure(table, Structure::Markup)
}

pub(super) fn xml() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("comment", r"(?s)<!--.*?-->", TokenKind::BlockComment, 95)
        .rule("open_comment", r"(?s)<!--.*", TokenKind::BlockComment, 94)
        .rule("cdata", r"(?s)<!\[CDATA\[.*?\]\]>", TokenKind::RawString, 94)
        .rule("prolog", r"(?s)<\?.*?\?>", TokenKind::Preprocessor, 93)
        .rule("doctype", r"(?i)<!DOCTYPE[^>]*>", TokenKind::Doctype, 92)
        .rule("tag", r"(?s)</?[A-Za-z_][^<>]*>", TokenKind::Tag, 90)
        .rule("entity", r"&#?[A-Za-z0-9]+;", TokenKind::Entity, 70)
        .rule("text", r"[^<&]+", TokenKind::Text, 10)
        .fallback_kind(TokenKind::Text)
        .build();
    Tokenizer::with_structure(table, Structure::Markup)
}

pub(super) fn markdown() -> Tokenizer {
    let line_start = PatternOptions::line_start();
    let fenced = PatternOptions {
        at_line_start: true,
        dot_matches_newline: true,
        ..Default::default()
    };
    let table = LanguageTable::builder()
        .rule_opts("fenced_code", r"(?:```|~~~).*?\n(?s).*?\n(?:```|~~~)", TokenKind::CodeBlock, 95, fenced)
        .rule_opts("open_fenced_code", r"(?s)(?:```|~~~).*", TokenKind::CodeBlock, 94, fenced)
        .rule_opts("heading", r"#{1,6}[^\n]*", TokenKind::Heading, 90, line_start)
        .rule_opts("blockquote", r">[^\n]*", TokenKind::Blockquote, 75, line_start)
        .rule_opts("hr", r"(?:-{3,}|\*{3,}|_{3,})[ \t]*", TokenKind::Punctuation, 74, line_start)
        .rule_opts("list", r"[ \t]*(?:[-*+]|\d+\.)[ \t]+", TokenKind::ListMarker, 72, line_start)
        .rule("escape", r"\\[\\`*_{}\[\]()#+.!<>-]", TokenKind::Escape, 86)
        .rule("code_span", r"`[^`\n]+`", TokenKind::CodeSpan, 85)
        .rule("image", r"!\[[^\]\n]*\]\([^)\n]*\)", TokenKind::Link, 80)
        .rule("link", r"\[[^\]\n]*\]\([^)\n]*\)", TokenKind::Link, 80)
        .rule("ref_link", r"\[[^\]\n]*\]\[[^\]\n]*\]", TokenKind::Link, 79)
        .rule("autolink", r"<[A-Za-z][A-Za-z0-9+.-]*:[^>\n ]*>", TokenKind::Link, 78)
        .rule("bold", r"\*\*[^*\n]+\*\*|__[^_\n]+__", TokenKind::Bold, 77)
        .rule("italic", r"\*[^*\n]+\*|_[^_\n]+_", TokenKind::Italic, 76)
        .rule("strikethrough", r"~~[^~\n]+~~", TokenKind::Bold, 76)
        .rule("word", r"\w+", TokenKind::Text, 50)
        .rule("space", r"\s+", TokenKind::Text, 10)
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
    fn test_html_tag_decomposition() {
        let text = r#"<div class="x">hi</div>"#;
        let tokens = described(&html(), text);
        assert_eq!(
            &tokens[..7],
            &[
                ("<".to_string(), TokenKind::Punctuation),
                ("div".to_string(), TokenKind::TagName),
                (" ".to_string(), TokenKind::Text),
                ("class".to_string(), TokenKind::AttributeName),
                ("=".to_string(), TokenKind::Punctuation),
                ("\"x\"".to_string(), TokenKind::AttributeValue),
                (">".to_string(), TokenKind::Punctuation),
            ]
        );
        assert!(tokens.contains(&("hi".to_string(), TokenKind::Text)));
    }

    #[test]
    fn test_html_comment_and_entity() {
        let tokens = described(&html(), "<!-- note -->&amp;");
        assert_eq!(tokens[0].1, TokenKind::BlockComment);
        assert_eq!(tokens[1], ("&amp;".to_string(), TokenKind::Entity));
    }

    #[test]
    fn test_xml_prolog_and_cdata() {
        let text = "<?xml version=\"1.0\"?><a><![CDATA[x<y]]></a>";
        let tokens = described(&xml(), text);
        assert_eq!(tokens[0].1, TokenKind::Preprocessor);
        assert!(tokens
            .iter()
            .any(|(lex, kind)| lex == "<![CDATA[x<y]]>" && *kind == TokenKind::RawString));
    }

    #[test]
    fn test_markdown_heading_only_at_line_start() {
        let tokens = described(&markdown(), "# Title\nnot # heading");
        assert_eq!(tokens[0], ("# Title".to_string(), TokenKind::Heading));
        assert!(!tokens[1..]
            .iter()
            .any(|(_, kind)| *kind == TokenKind::Heading));
    }

    #[test]
    fn test_markdown_inline_spans() {
        let tokens = described(&markdown(), "**b** *i* `c` [t](u)");
        assert_eq!(tokens[0].1, TokenKind::Bold);
        assert!(tokens.contains(&("*i*".to_string(), TokenKind::Italic)));
        assert!(tokens.contains(&("`c`".to_string(), TokenKind::CodeSpan)));
        assert!(tokens.contains(&("[t](u)".to_string(), TokenKind::Link)));
    }

    #[test]
    fn test_markdown_fenced_code() {
        let text = "```rust\nlet x = 1;\n```";
        let tokens = described(&markdown(), text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, TokenKind::CodeBlock);
    }

    #[test]
    fn test_markdown_list_and_quote() {
        let tokens = described(&markdown(), "- item\n> quote");
        assert_eq!(tokens[0], ("- ".to_string(), TokenKind::ListMarker));
        assert!(tokens.contains(&("> quote".to_string(), TokenKind::Blockquote)));
    }
}
