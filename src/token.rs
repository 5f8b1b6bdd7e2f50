//! Token model for syntax highlighting
//!
//! A token is a classified span of the source text: a byte offset, a
//! byte length, and a semantic kind. Tokens own no text; they are index
//! ranges into the caller's buffer.

/// A classified span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first byte of the span
    pub start: usize,
    /// Length of the span in bytes
    pub len: usize,
    /// Semantic classification of the span
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, len: usize, kind: TokenKind) -> Self {
        Self { start, len, kind }
    }

    /// Byte offset one past the last byte of the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice the originating text to this token's lexeme
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.start..self.end()]
    }

    /// Copy of this token with a different kind, same span
    pub fn with_kind(self, kind: TokenKind) -> Self {
        Self { kind, ..self }
    }
}

/// Semantic token kinds
///
/// A closed enumeration covering general code categories plus the
/// markup-, stylesheet-, and data-format-specific kinds. `Text` is for
/// spans that carry no classification (whitespace, prose); `Unknown` is
/// the fallback for characters no pattern recognizes, `Error` for spans
/// a table explicitly flags as wrong (e.g. unterminated literals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Declaration keywords (fn, class, struct, let)
    Keyword,
    /// Control-flow keywords (if, else, while, return)
    ControlKeyword,
    /// Type names (int, String, i32)
    TypeName,
    /// Plain identifiers; the kind keyword tables reclassify
    Identifier,
    /// Function names
    FunctionName,
    /// Macro names (println!, vec!)
    MacroName,
    /// Constants and enum variants (true, NULL, None)
    Constant,
    /// String literals
    String,
    /// Raw string literals
    RawString,
    /// Character literals
    Char,
    /// Numeric literals
    Number,
    /// Line comments (// or #)
    LineComment,
    /// Block comments (/* */)
    BlockComment,
    /// Documentation comments (/// or /** */)
    DocComment,
    /// Operators (+ - * / == =>)
    Operator,
    /// Punctuation (braces, commas, semicolons)
    Punctuation,
    /// Attributes and annotations (#[derive], @Override)
    Attribute,
    /// Preprocessor directives (#include, <?xml ?>)
    Preprocessor,
    /// Regular expression literals
    Regex,
    /// Lifetime annotations ('a)
    Lifetime,
    /// Labels (loop labels, batch :labels)
    Label,
    /// Escape sequences standing alone (markdown \*)
    Escape,
    /// Unclassified text and whitespace
    Text,
    /// A whole tag before structural decomposition
    Tag,
    /// Markup tag names (div, xsl:template)
    TagName,
    /// Markup attribute names
    AttributeName,
    /// Markup attribute values
    AttributeValue,
    /// Character entities (&amp;)
    Entity,
    /// Document type declarations (<!DOCTYPE html>)
    Doctype,
    /// CSS class/id selectors (.name, #name)
    CssSelector,
    /// CSS property names
    CssProperty,
    /// CSS dimension values (10px, 2em)
    CssUnit,
    /// Markdown headings
    Heading,
    /// Markdown bold spans
    Bold,
    /// Markdown italic spans
    Italic,
    /// Markdown links and images
    Link,
    /// Markdown inline code
    CodeSpan,
    /// Markdown fenced code blocks
    CodeBlock,
    /// Markdown list markers
    ListMarker,
    /// Markdown blockquote lines
    Blockquote,
    /// Object/mapping keys (JSON, YAML)
    Key,
    /// INI-style section headers
    SectionHeader,
    /// YAML anchors (&name)
    YamlAnchor,
    /// YAML aliases (*name)
    YamlAlias,
    /// YAML type tags (!!str)
    YamlTag,
    /// Shell variables ($HOME, ${x})
    ShellVariable,
    /// Shell command position words
    ShellCommand,
    /// Shell command-line options (-v, --help)
    ShellOption,
    /// Spans a table flags as malformed
    Error,
    /// Fallback for characters outside every pattern
    Unknown,
}

impl TokenKind {
    /// Get a human-readable name for this token kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::ControlKeyword => "ControlKeyword",
            TokenKind::TypeName => "TypeName",
            TokenKind::Identifier => "Identifier",
            TokenKind::FunctionName => "FunctionName",
            TokenKind::MacroName => "MacroName",
            TokenKind::Constant => "Constant",
            TokenKind::String => "String",
            TokenKind::RawString => "RawString",
            TokenKind::Char => "Char",
            TokenKind::Number => "Number",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::DocComment => "DocComment",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Attribute => "Attribute",
            TokenKind::Preprocessor => "Preprocessor",
            TokenKind::Regex => "Regex",
            TokenKind::Lifetime => "Lifetime",
            TokenKind::Label => "Label",
            TokenKind::Escape => "Escape",
            TokenKind::Text => "Text",
            TokenKind::Tag => "Tag",
            TokenKind::TagName => "TagName",
            TokenKind::AttributeName => "AttributeName",
            TokenKind::AttributeValue => "AttributeValue",
            TokenKind::Entity => "Entity",
            TokenKind::Doctype => "Doctype",
            TokenKind::CssSelector => "CssSelector",
            TokenKind::CssProperty => "CssProperty",
            TokenKind::CssUnit => "CssUnit",
            TokenKind::Heading => "Heading",
            TokenKind::Bold => "Bold",
            TokenKind::Italic => "Italic",
            TokenKind::Link => "Link",
            TokenKind::CodeSpan => "CodeSpan",
            TokenKind::CodeBlock => "CodeBlock",
            TokenKind::ListMarker => "ListMarker",
            TokenKind::Blockquote => "Blockquote",
            TokenKind::Key => "Key",
            TokenKind::SectionHeader => "SectionHeader",
            TokenKind::YamlAnchor => "YamlAnchor",
            TokenKind::YamlAlias => "YamlAlias",
            TokenKind::YamlTag => "YamlTag",
            TokenKind::ShellVariable => "ShellVariable",
            TokenKind::ShellCommand => "ShellCommand",
            TokenKind::ShellOption => "ShellOption",
            TokenKind::Error => "Error",
            TokenKind::Unknown => "Unknown",
        }
    }

    /// Parse a token kind from its name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|kind| kind.name() == name)
    }

    /// All kinds, in declaration order
    pub fn all() -> &'static [TokenKind] {
        ALL_KINDS
    }
}

const ALL_KINDS: &[TokenKind] = &[
    TokenKind::Keyword,
    TokenKind::ControlKeyword,
    TokenKind::TypeName,
    TokenKind::Identifier,
    TokenKind::FunctionName,
    TokenKind::MacroName,
    TokenKind::Constant,
    TokenKind::String,
    TokenKind::RawString,
    TokenKind::Char,
    TokenKind::Number,
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::DocComment,
    TokenKind::Operator,
    TokenKind::Punctuation,
    TokenKind::Attribute,
    TokenKind::Preprocessor,
    TokenKind::Regex,
    TokenKind::Lifetime,
    TokenKind::Label,
    TokenKind::Escape,
    TokenKind::Text,
    TokenKind::Tag,
    TokenKind::TagName,
    TokenKind::AttributeName,
    TokenKind::AttributeValue,
    TokenKind::Entity,
    TokenKind::Doctype,
    TokenKind::CssSelector,
    TokenKind::CssProperty,
    TokenKind::CssUnit,
    TokenKind::Heading,
    TokenKind::Bold,
    TokenKind::Italic,
    TokenKind::Link,
    TokenKind::CodeSpan,
    TokenKind::CodeBlock,
    TokenKind::ListMarker,
    TokenKind::Blockquote,
    TokenKind::Key,
    TokenKind::SectionHeader,
    TokenKind::YamlAnchor,
    TokenKind::YamlAlias,
    TokenKind::YamlTag,
    TokenKind::ShellVariable,
    TokenKind::ShellCommand,
    TokenKind::ShellOption,
    TokenKind::Error,
    TokenKind::Unknown,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span() {
        let token = Token::new(4, 3, TokenKind::Number);
        assert_eq!(token.end(), 7);
        assert_eq!(token.text("abc 123 def"), "123");
    }

    #[test]
    fn test_with_kind_keeps_span() {
        let token = Token::new(2, 5, TokenKind::String);
        let key = token.with_kind(TokenKind::Key);
        assert_eq!(key.start, 2);
        assert_eq!(key.len, 5);
        assert_eq!(key.kind, TokenKind::Key);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for kind in TokenKind::all() {
            assert_eq!(TokenKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenKind::from_name("NotAKind"), None);
        assert_eq!(TokenKind::from_name(""), None);
    }
}
