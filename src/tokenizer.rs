//! A tokenizer: one language table plus its structural pass
//!
//! `Tokenizer` pairs an immutable [`LanguageTable`] with the
//! [`Structure`] shape its language needs. One `TokenStream` iterator
//! type covers all three shapes, so no boxing is needed and the stream
//! stays lazy end to end.

use std::collections::VecDeque;

use crate::pattern::LanguageTable;
use crate::scanner::{scan, Scan};
use crate::structure::{decompose_tag, detect_key, Structure};
use crate::token::{Token, TokenKind};

/// A ready-to-use tokenizer for one language
pub struct Tokenizer {
    table: LanguageTable,
    structure: Structure,
}

impl Tokenizer {
    /// Tokenizer with no structural pass
    pub fn new(table: LanguageTable) -> Self {
        Self::with_structure(table, Structure::Flat)
    }

    /// Tokenizer with an explicit structural pass
    pub fn with_structure(table: LanguageTable, structure: Structure) -> Self {
        Self { table, structure }
    }

    /// The underlying language table
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    /// Lazily tokenize `text` from the beginning
    pub fn tokens<'t>(&'t self, text: &'t str) -> TokenStream<'t> {
        TokenStream {
            inner: scan(&self.table, text),
            structure: self.structure,
            text,
            pending: VecDeque::new(),
        }
    }
}

/// Lazy token stream with structural post-processing applied
pub struct TokenStream<'t> {
    inner: Scan<'t>,
    structure: Structure,
    text: &'t str,
    pending: VecDeque<Token>,
}

impl<'t> Iterator for TokenStream<'t> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let token = self.inner.next()?;
        match self.structure {
            Structure::Flat => Some(token),
            Structure::KeyValue { key_kind } => Some(detect_key(self.text, token, key_kind)),
            Structure::Markup => {
                if token.kind != TokenKind::Tag {
                    return Some(token);
                }
                match decompose_tag(self.text, token) {
                    Some(parts) => {
                        self.pending.extend(parts);
                        self.pending.pop_front()
                    }
                    // Malformed tag: the coarse token stands.
                    None => Some(token),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::LanguageTable;

    fn markup_table() -> LanguageTable {
        LanguageTable::builder()
            .rule("tag", r"</?[^<>\n]*>", TokenKind::Tag, 90)
            .rule("text", r"[^<]+", TokenKind::Text, 10)
            .fallback_kind(TokenKind::Text)
            .build()
    }

    #[test]
    fn test_flat_stream_passthrough() {
        let table = LanguageTable::builder()
            .rule("word", r"\w+", TokenKind::Identifier, 50)
            .rule("space", r"\s+", TokenKind::Text, 10)
            .build();
        let tokenizer = Tokenizer::new(table);
        let kinds: Vec<_> = tokenizer.tokens("a b").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Text, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_markup_stream_decomposes_tags() {
        let tokenizer = Tokenizer::with_structure(markup_table(), Structure::Markup);
        let text = "<b>hi</b>";
        let tokens: Vec<_> = tokenizer.tokens(text).collect();

        // Partition survives decomposition.
        assert_eq!(tokens.first().unwrap().start, 0);
        assert_eq!(tokens.last().unwrap().end(), text.len());
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Punctuation,
                TokenKind::TagName,
                TokenKind::Punctuation,
                TokenKind::Text,
                TokenKind::Punctuation,
                TokenKind::TagName,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_markup_stream_malformed_tag_passthrough() {
        let tokenizer = Tokenizer::with_structure(markup_table(), Structure::Markup);
        let text = "<@!>";
        let tokens: Vec<_> = tokenizer.tokens(text).collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Tag);
        assert_eq!(tokens[0].len, text.len());
    }

    #[test]
    fn test_key_value_stream() {
        let table = LanguageTable::builder()
            .rule("string", r#""(?:[^"\\]|\\.)*""#, TokenKind::String, 80)
            .rule("number", r"\d+", TokenKind::Number, 60)
            .rule("punct", r"[{}\[\],:]", TokenKind::Punctuation, 20)
            .rule("space", r"\s+", TokenKind::Text, 10)
            .build();
        let tokenizer =
            Tokenizer::with_structure(table, Structure::KeyValue { key_kind: TokenKind::Key });
        let text = r#"{"a":1}"#;
        let described: Vec<_> = tokenizer
            .tokens(text)
            .map(|t| (t.text(text), t.kind))
            .collect();
        assert_eq!(
            described,
            vec![
                ("{", TokenKind::Punctuation),
                ("\"a\"", TokenKind::Key),
                (":", TokenKind::Punctuation),
                ("1", TokenKind::Number),
                ("}", TokenKind::Punctuation),
            ]
        );
    }
}
