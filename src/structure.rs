//! Structural post-processing for markup and key/value languages
//!
//! Some languages' natural lexical unit is coarser than what styling
//! needs: a whole `<tag attr="v">` span, or a string that is really a
//! mapping key. The passes here refine those coarse tokens after the
//! generic scan without disturbing the partition invariant: the
//! sub-tokens of one coarse match always reconstruct its span exactly,
//! and a coarse token whose internals don't parse is passed through
//! unchanged.

use crate::token::{Token, TokenKind};

/// Which structural pass a tokenizer runs after the generic scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// No post-processing; scanner tokens pass through as-is
    Flat,
    /// Decompose coarse [`TokenKind::Tag`] spans into punctuation,
    /// tag name, and attribute tokens
    Markup,
    /// Reclassify strings and bare words followed by `:` as keys
    KeyValue {
        /// Kind assigned to detected keys (`Key`, `CssProperty`, ...)
        key_kind: TokenKind,
    },
}

/// Reclassify a token as a key if a `:` separator follows it
///
/// Only strings and plain identifiers are eligible; everything else is
/// returned unchanged. Skips whitespace between the token and the
/// separator, nothing more.
pub(crate) fn detect_key(text: &str, token: Token, key_kind: TokenKind) -> Token {
    if !matches!(token.kind, TokenKind::String | TokenKind::Identifier) {
        return token;
    }
    let next = text[token.end()..].chars().find(|c| !c.is_whitespace());
    if next == Some(':') {
        token.with_kind(key_kind)
    } else {
        token
    }
}

/// Split a coarse tag token into its structural parts
///
/// Expects a span shaped like `<name attr="value" ...>` (or `</name>`,
/// `<name/>`). Returns `None` when the span doesn't parse as a tag, in
/// which case the caller emits the coarse token unchanged. Emitted
/// offsets are absolute positions in `text`, and the parts concatenate
/// to exactly the coarse span.
pub(crate) fn decompose_tag(text: &str, coarse: Token) -> Option<Vec<Token>> {
    let span = coarse.text(text);
    if span.len() < 2 || !span.starts_with('<') || !span.ends_with('>') {
        return None;
    }
    let base = coarse.start;
    let mut parts = Vec::new();

    let open_len = if span.starts_with("</") { 2 } else { 1 };
    let close_len = if span.ends_with("/>") { 2 } else { 1 };
    let body_end = span.len() - close_len;
    if open_len > body_end {
        return None;
    }
    parts.push(Token::new(base, open_len, TokenKind::Punctuation));

    let mut at = open_len;
    let name_end = take_while(span, at, body_end, is_name_char);
    if name_end > at {
        parts.push(Token::new(base + at, name_end - at, TokenKind::TagName));
        at = name_end;
    }

    while at < body_end {
        let ch = span[at..].chars().next()?;
        if ch.is_whitespace() {
            let end = take_while(span, at, body_end, char::is_whitespace);
            parts.push(Token::new(base + at, end - at, TokenKind::Text));
            at = end;
        } else if ch == '=' {
            parts.push(Token::new(base + at, 1, TokenKind::Punctuation));
            at += 1;
            let ws_end = take_while(span, at, body_end, char::is_whitespace);
            if ws_end > at {
                parts.push(Token::new(base + at, ws_end - at, TokenKind::Text));
                at = ws_end;
            }
            if at >= body_end {
                continue;
            }
            let quote = span[at..].chars().next()?;
            let value_end = if quote == '"' || quote == '\'' {
                let rest = &span[at + 1..body_end];
                let close = rest.find(quote)?;
                at + 1 + close + 1
            } else {
                take_while(span, at, body_end, |c| !c.is_whitespace())
            };
            if value_end > at {
                parts.push(Token::new(base + at, value_end - at, TokenKind::AttributeValue));
                at = value_end;
            }
        } else if is_name_char(ch) {
            let end = take_while(span, at, body_end, is_name_char);
            parts.push(Token::new(base + at, end - at, TokenKind::AttributeName));
            at = end;
        } else {
            // Unrecognized structure; let the coarse token stand.
            return None;
        }
    }

    parts.push(Token::new(base + body_end, close_len, TokenKind::Punctuation));
    Some(parts)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.' | '!')
}

/// End offset of the run of `pred` characters in `span[from..to]`
fn take_while(span: &str, from: usize, to: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = from;
    for (off, ch) in span[from..to].char_indices() {
        if !pred(ch) {
            break;
        }
        end = from + off + ch.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(parts: &[Token], coarse: Token) {
        assert_eq!(parts.first().unwrap().start, coarse.start);
        assert_eq!(parts.last().unwrap().end(), coarse.end());
        for pair in parts.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
    }

    #[test]
    fn test_tag_with_attribute() {
        let text = r#"<div class="x">"#;
        let coarse = Token::new(0, text.len(), TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);

        let described: Vec<_> = parts.iter().map(|t| (t.text(text), t.kind)).collect();
        assert_eq!(
            described,
            vec![
                ("<", TokenKind::Punctuation),
                ("div", TokenKind::TagName),
                (" ", TokenKind::Text),
                ("class", TokenKind::AttributeName),
                ("=", TokenKind::Punctuation),
                ("\"x\"", TokenKind::AttributeValue),
                (">", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_closing_and_self_closing_tags() {
        let text = "</p>";
        let coarse = Token::new(0, 4, TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);
        assert_eq!(parts[0].len, 2);
        assert_eq!(parts[1].kind, TokenKind::TagName);

        let text = "<br/>";
        let coarse = Token::new(0, 5, TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);
        assert_eq!(parts.last().unwrap().len, 2);
    }

    #[test]
    fn test_tag_at_nonzero_offset() {
        let text = "text <a href=x> more";
        let coarse = Token::new(5, 10, TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);
        let href = parts.iter().find(|t| t.kind == TokenKind::AttributeName).unwrap();
        assert_eq!(href.text(text), "href");
        assert_eq!(href.start, 8);
        let value = parts.iter().find(|t| t.kind == TokenKind::AttributeValue).unwrap();
        assert_eq!(value.text(text), "x");
    }

    #[test]
    fn test_boolean_attribute() {
        let text = "<input disabled>";
        let coarse = Token::new(0, text.len(), TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);
        assert!(parts
            .iter()
            .any(|t| t.kind == TokenKind::AttributeName && t.text(text) == "disabled"));
    }

    #[test]
    fn test_spaced_equals() {
        let text = r#"<a b = "c">"#;
        let coarse = Token::new(0, text.len(), TokenKind::Tag);
        let parts = decompose_tag(text, coarse).unwrap();
        assert_covers(&parts, coarse);
        let value = parts.iter().find(|t| t.kind == TokenKind::AttributeValue).unwrap();
        assert_eq!(value.text(text), "\"c\"");
    }

    #[test]
    fn test_malformed_tag_falls_back() {
        // Unclosed quote and stray structure both refuse to decompose.
        for text in [r#"<a b=">"#, "<a @#$>", "<"] {
            let coarse = Token::new(0, text.len(), TokenKind::Tag);
            assert!(decompose_tag(text, coarse).is_none(), "{text}");
        }
    }

    #[test]
    fn test_key_detection() {
        let text = r#"{"a":1}"#;
        let string = Token::new(1, 3, TokenKind::String);
        assert_eq!(
            detect_key(text, string, TokenKind::Key).kind,
            TokenKind::Key
        );

        // Not followed by a colon: unchanged.
        let text = r#"["a", 1]"#;
        let string = Token::new(1, 3, TokenKind::String);
        assert_eq!(
            detect_key(text, string, TokenKind::Key).kind,
            TokenKind::String
        );
    }

    #[test]
    fn test_key_detection_skips_whitespace() {
        let text = "name  : value";
        let word = Token::new(0, 4, TokenKind::Identifier);
        assert_eq!(detect_key(text, word, TokenKind::Key).kind, TokenKind::Key);
    }

    #[test]
    fn test_key_detection_ineligible_kind() {
        let text = "42: x";
        let number = Token::new(0, 2, TokenKind::Number);
        assert_eq!(
            detect_key(text, number, TokenKind::Key).kind,
            TokenKind::Number
        );
    }
}
