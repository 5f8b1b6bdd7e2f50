//! Pattern rules and language tables
//!
//! A language is pure configuration: an ordered list of anchored regex
//! patterns, a keyword map for reclassifying identifiers, and a couple
//! of per-table flags. Tables are built once and shared read-only
//! across any number of concurrent scans.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::error::{HighlightError, Result};
use crate::token::TokenKind;

/// Per-pattern matching options
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternOptions {
    /// Compile the regex case-insensitively
    pub case_insensitive: bool,
    /// Let `.` match newlines (for multi-line constructs)
    pub dot_matches_newline: bool,
    /// Only try this pattern at offset 0 or just after a newline
    pub at_line_start: bool,
}

impl PatternOptions {
    /// Options for a multi-line construct pattern
    pub fn multiline() -> Self {
        Self {
            dot_matches_newline: true,
            ..Default::default()
        }
    }

    /// Options for a line-anchored pattern
    pub fn line_start() -> Self {
        Self {
            at_line_start: true,
            ..Default::default()
        }
    }
}

/// A single pattern rule
///
/// Matches anchored at a scan position and assigns a token kind to the
/// match. Rules are tried in priority order (highest first); within an
/// equal-priority band, table insertion order decides.
#[derive(Debug)]
pub struct Pattern {
    /// Name for debugging and error reporting
    pub name: String,
    /// Compiled regex, anchored at the haystack start
    regex: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Priority (higher = tried first)
    pub priority: i32,
    /// Matching options this pattern was compiled with
    pub options: PatternOptions,
}

impl Pattern {
    /// Compile a pattern rule with default options
    pub fn new(name: &str, pattern: &str, kind: TokenKind, priority: i32) -> Result<Self> {
        Self::with_options(name, pattern, kind, priority, PatternOptions::default())
    }

    /// Compile a pattern rule with explicit options
    pub fn with_options(
        name: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
        options: PatternOptions,
    ) -> Result<Self> {
        // \A pins the match to the scan position; a bare find would
        // report matches later in the text.
        let anchored = format!(r"\A(?:{pattern})");
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(options.case_insensitive)
            .dot_matches_new_line(options.dot_matches_newline)
            .build()
            .map_err(|source| HighlightError::Pattern {
                name: name.to_string(),
                source: Box::new(source),
            })?;
        Ok(Self {
            name: name.to_string(),
            regex,
            kind,
            priority,
            options,
        })
    }

    /// Attempt an anchored match at byte offset `at`
    ///
    /// Returns the match length in bytes. Zero-length matches are
    /// treated as misses so the scanner always makes progress.
    pub fn match_at(&self, text: &str, at: usize) -> Option<usize> {
        if at >= text.len() {
            return None;
        }
        if self.options.at_line_start && at > 0 && text.as_bytes()[at - 1] != b'\n' {
            return None;
        }
        self.regex
            .find(&text[at..])
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// A complete language table: ordered patterns plus keyword map
///
/// Immutable once built. The keyword map only ever reclassifies a match
/// whose pattern-assigned kind equals `identifier_kind`; it never
/// changes a match's length.
pub struct LanguageTable {
    patterns: Vec<Pattern>,
    keywords: HashMap<String, TokenKind>,
    keywords_case_insensitive: bool,
    identifier_kind: TokenKind,
    fallback_kind: TokenKind,
}

impl LanguageTable {
    /// Start building a table
    pub fn builder() -> LanguageTableBuilder {
        LanguageTableBuilder::new()
    }

    /// Patterns in priority order (highest first, stable within bands)
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Kind emitted for characters no pattern matches
    pub fn fallback_kind(&self) -> TokenKind {
        self.fallback_kind
    }

    /// Resolve the final kind for a match
    ///
    /// Applies keyword reclassification when the pattern-assigned kind
    /// is this table's identifier kind and the lexeme is in the map.
    pub fn resolve_kind(&self, kind: TokenKind, lexeme: &str) -> TokenKind {
        if kind != self.identifier_kind || self.keywords.is_empty() {
            return kind;
        }
        let mapped = if self.keywords_case_insensitive {
            self.keywords.get(&lexeme.to_lowercase()).copied()
        } else {
            self.keywords.get(lexeme).copied()
        };
        mapped.unwrap_or(kind)
    }
}

/// Builder for [`LanguageTable`]
///
/// Pattern compile failures are debug-asserted and skipped at runtime:
/// tables are static data, and the per-language tests exercise every
/// table so a bad pattern cannot survive unnoticed.
pub struct LanguageTableBuilder {
    patterns: Vec<Pattern>,
    keywords: HashMap<String, TokenKind>,
    keywords_case_insensitive: bool,
    identifier_kind: TokenKind,
    fallback_kind: TokenKind,
}

impl LanguageTableBuilder {
    fn new() -> Self {
        Self {
            patterns: Vec::new(),
            keywords: HashMap::new(),
            keywords_case_insensitive: false,
            identifier_kind: TokenKind::Identifier,
            fallback_kind: TokenKind::Unknown,
        }
    }

    /// Add a pattern rule with default options
    pub fn rule(self, name: &str, pattern: &str, kind: TokenKind, priority: i32) -> Self {
        self.rule_opts(name, pattern, kind, priority, PatternOptions::default())
    }

    /// Add a pattern rule with explicit options
    pub fn rule_opts(
        mut self,
        name: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
        options: PatternOptions,
    ) -> Self {
        match Pattern::with_options(name, pattern, kind, priority, options) {
            Ok(rule) => self.patterns.push(rule),
            Err(err) => {
                debug_assert!(false, "pattern `{name}` failed to compile: {err}");
            }
        }
        self
    }

    /// Map a set of lexemes to a kind in the keyword table
    pub fn keywords(mut self, kind: TokenKind, words: &[&str]) -> Self {
        for word in words {
            let key = if self.keywords_case_insensitive {
                word.to_lowercase()
            } else {
                (*word).to_string()
            };
            self.keywords.insert(key, kind);
        }
        self
    }

    /// Make keyword lookup case-insensitive (call before `keywords`)
    pub fn case_insensitive_keywords(mut self) -> Self {
        self.keywords_case_insensitive = true;
        self
    }

    /// Set the kind eligible for keyword reclassification
    pub fn identifier_kind(mut self, kind: TokenKind) -> Self {
        self.identifier_kind = kind;
        self
    }

    /// Set the kind emitted for unmatched characters
    pub fn fallback_kind(mut self, kind: TokenKind) -> Self {
        self.fallback_kind = kind;
        self
    }

    /// Finish the table
    pub fn build(mut self) -> LanguageTable {
        // Stable sort: insertion order is the tie-break within a band.
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
        LanguageTable {
            patterns: self.patterns,
            keywords: self.keywords,
            keywords_case_insensitive: self.keywords_case_insensitive,
            identifier_kind: self.identifier_kind,
            fallback_kind: self.fallback_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_match() {
        let rule = Pattern::new("number", r"\d+", TokenKind::Number, 50).unwrap();
        // Anchored: only matches that start exactly at the offset count.
        assert_eq!(rule.match_at("123 abc", 0), Some(3));
        assert_eq!(rule.match_at("abc 123", 0), None);
        assert_eq!(rule.match_at("abc 123", 4), Some(3));
        assert_eq!(rule.match_at("", 0), None);
    }

    #[test]
    fn test_line_start_option() {
        let rule = Pattern::with_options(
            "heading",
            r"#+[^\n]*",
            TokenKind::Heading,
            90,
            PatternOptions::line_start(),
        )
        .unwrap();
        assert_eq!(rule.match_at("# title", 0), Some(7));
        assert_eq!(rule.match_at("a # b", 2), None);
        assert_eq!(rule.match_at("a\n# b", 2), Some(3));
    }

    #[test]
    fn test_multiline_option() {
        let rule = Pattern::with_options(
            "block_comment",
            r"/\*.*?\*/",
            TokenKind::BlockComment,
            95,
            PatternOptions::multiline(),
        )
        .unwrap();
        assert_eq!(rule.match_at("/* a\nb */ x", 0), Some(9));
    }

    #[test]
    fn test_bad_pattern_reports_name() {
        let err = Pattern::new("broken", r"[unclosed", TokenKind::Text, 0).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_keyword_reclassification() {
        let table = LanguageTable::builder()
            .keywords(TokenKind::TypeName, &["int"])
            .keywords(TokenKind::ControlKeyword, &["if"])
            .build();
        assert_eq!(
            table.resolve_kind(TokenKind::Identifier, "int"),
            TokenKind::TypeName
        );
        assert_eq!(
            table.resolve_kind(TokenKind::Identifier, "if"),
            TokenKind::ControlKeyword
        );
        assert_eq!(
            table.resolve_kind(TokenKind::Identifier, "x"),
            TokenKind::Identifier
        );
        // Only the identifier kind is eligible.
        assert_eq!(table.resolve_kind(TokenKind::String, "int"), TokenKind::String);
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let table = LanguageTable::builder()
            .case_insensitive_keywords()
            .keywords(TokenKind::Keyword, &["SELECT"])
            .build();
        for lexeme in ["select", "SELECT", "Select"] {
            assert_eq!(
                table.resolve_kind(TokenKind::Identifier, lexeme),
                TokenKind::Keyword
            );
        }
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let table = LanguageTable::builder()
            .rule("low", r"a", TokenKind::Text, 10)
            .rule("first", r"b", TokenKind::Keyword, 50)
            .rule("second", r"c", TokenKind::String, 50)
            .build();
        let names: Vec<_> = table.patterns().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "low"]);
    }
}
