//! The generic scanner
//!
//! One scanning algorithm serves every language: walk the text left to
//! right, try each table pattern anchored at the current position, emit
//! the winning match as a token, and advance by its length. A position
//! no pattern covers produces a single-character fallback token, so the
//! scanner makes progress on every step and terminates on any input.

use crate::pattern::LanguageTable;
use crate::token::Token;

/// Scan `text` against a language table
///
/// Returns a lazy iterator of tokens forming a contiguous partition of
/// the text: consecutive, non-overlapping, first starting at 0, last
/// ending at `text.len()`. Consumption can stop at any point; no work
/// happens past the last pulled token.
pub fn scan<'t>(table: &'t LanguageTable, text: &'t str) -> Scan<'t> {
    Scan {
        table,
        text,
        pos: 0,
    }
}

/// Lazy token iterator over one text buffer
///
/// Each call to [`scan`] starts over from offset 0; there is no state
/// shared between scans.
pub struct Scan<'t> {
    table: &'t LanguageTable,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Scan<'t> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos >= self.text.len() {
            return None;
        }
        let at = self.pos;

        // Patterns are priority-sorted with a stable sort, so the first
        // pattern that matches is the highest-priority match, with table
        // order breaking ties inside an equal-priority band.
        let hit = self
            .table
            .patterns()
            .iter()
            .find_map(|rule| rule.match_at(self.text, at).map(|len| (len, rule)));

        let token = match hit {
            Some((len, rule)) => {
                let lexeme = &self.text[at..at + len];
                let kind = self.table.resolve_kind(rule.kind, lexeme);
                Token::new(at, len, kind)
            }
            None => {
                // No pattern covers this character: emit it alone under
                // the fallback kind and keep going.
                let len = self.text[at..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                Token::new(at, len, self.table.fallback_kind())
            }
        };

        self.pos = token.end();
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::LanguageTable;
    use crate::token::TokenKind;

    fn test_table() -> LanguageTable {
        LanguageTable::builder()
            .rule("comment", r"//[^\n]*", TokenKind::LineComment, 90)
            .rule("number", r"\d+", TokenKind::Number, 60)
            .rule("word", r"[A-Za-z_]\w*", TokenKind::Identifier, 50)
            .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
            .keywords(TokenKind::ControlKeyword, &["if"])
            .build()
    }

    fn collect(table: &LanguageTable, text: &str) -> Vec<Token> {
        scan(table, text).collect()
    }

    fn assert_partition(tokens: &[Token], len: usize) {
        if len == 0 {
            assert!(tokens.is_empty());
            return;
        }
        assert_eq!(tokens.first().unwrap().start, 0);
        assert_eq!(tokens.last().unwrap().end(), len);
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
    }

    #[test]
    fn test_empty_input() {
        let table = test_table();
        assert!(collect(&table, "").is_empty());
    }

    #[test]
    fn test_partition_invariant() {
        let table = test_table();
        for text in [
            "if x 12 // done",
            "   ",
            "word",
            "\u{1F600} emoji ☃ input",
            "no\nnewline // trailing",
        ] {
            let tokens = collect(&table, text);
            assert_partition(&tokens, text.len());
        }
    }

    #[test]
    fn test_keyword_reclassification() {
        let table = test_table();
        let tokens = collect(&table, "if iffy");
        assert_eq!(tokens[0].kind, TokenKind::ControlKeyword);
        // Whole-lexeme lookup: "iffy" stays an identifier.
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_priority_beats_table_order() {
        // A lower-priority rule added first must lose to a later
        // higher-priority one.
        let table = LanguageTable::builder()
            .rule("word", r"\w+", TokenKind::Identifier, 10)
            .rule("number", r"\d+", TokenKind::Number, 60)
            .build();
        let tokens = collect(&table, "42");
        assert_eq!(tokens[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_tie_break_is_table_order() {
        let table = LanguageTable::builder()
            .rule("first", r"ab", TokenKind::Keyword, 50)
            .rule("second", r"a", TokenKind::String, 50)
            .build();
        let tokens = collect(&table, "ab");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].len, 2);
    }

    #[test]
    fn test_fallback_character() {
        let table = test_table();
        // '?' is outside every rule in the test table.
        let tokens = collect(&table, "a ? b");
        assert_partition(&tokens, 5);
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].len, 1);
    }

    #[test]
    fn test_fallback_multibyte_character() {
        // A table with no rules at all: everything is fallback, and
        // multi-byte characters come out whole.
        let table = LanguageTable::builder().build();
        let text = "a☃b";
        let tokens = collect(&table, text);
        assert_partition(&tokens, text.len());
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(text), "☃");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Unknown));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let table = test_table();
        let text = "if a // b\n12 ?";
        let first: Vec<_> = scan(&table, text).collect();
        let second: Vec<_> = scan(&table, text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lazy_early_stop() {
        let table = test_table();
        let mut tokens = scan(&table, "one two three");
        assert_eq!(tokens.next().unwrap().kind, TokenKind::Identifier);
        // Dropping the iterator here does no further work.
    }
}
