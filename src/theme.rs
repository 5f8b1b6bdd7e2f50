//! Token styling for terminal preview
//!
//! The engine stops at token kinds; this module is the consumer side:
//! a mapping from kind to visual style, with a built-in default and
//! optional overrides from a TOML theme file:
//!
//! ```text
//! [Keyword]
//! fg = "magenta"
//! bold = true
//!
//! [LineComment]
//! fg = "bright-black"
//! italic = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{HighlightError, Result};
use crate::token::TokenKind;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its theme-file name
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: add bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: add italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: add underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the plain default style
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A complete kind-to-style mapping
pub struct Theme {
    styles: HashMap<TokenKind, Style>,
}

impl Theme {
    /// Style for a token kind (plain style for unmapped kinds)
    pub fn style(&self, kind: TokenKind) -> Style {
        self.styles.get(&kind).copied().unwrap_or_default()
    }

    /// Override the style for a kind
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles.insert(kind, style);
    }

    /// Load a theme file, overriding defaults per kind
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut theme = Theme::default();
        theme.apply(&contents)?;
        Ok(theme)
    }

    /// Apply TOML theme text on top of the current mapping
    pub fn apply(&mut self, contents: &str) -> Result<()> {
        let value: toml::Value = contents.parse()?;
        let table = value
            .as_table()
            .ok_or_else(|| HighlightError::Theme("expected a table of token kinds".into()))?;

        for (name, entry) in table {
            let kind = TokenKind::from_name(name)
                .ok_or_else(|| HighlightError::UnknownTokenKind(name.clone()))?;
            let mut style = self.style(kind);

            let entry = entry.as_table().ok_or_else(|| {
                HighlightError::Theme(format!("entry for `{name}` is not a table"))
            })?;
            if let Some(fg) = entry.get("fg").and_then(|v| v.as_str()) {
                style.fg = Color::from_name(fg)
                    .ok_or_else(|| HighlightError::Theme(format!("unknown color `{fg}`")))?;
            }
            if let Some(bg) = entry.get("bg").and_then(|v| v.as_str()) {
                style.bg = Color::from_name(bg)
                    .ok_or_else(|| HighlightError::Theme(format!("unknown color `{bg}`")))?;
            }
            if let Some(bold) = entry.get("bold").and_then(|v| v.as_bool()) {
                style.bold = bold;
            }
            if let Some(italic) = entry.get("italic").and_then(|v| v.as_bool()) {
                style.italic = italic;
            }
            if let Some(underline) = entry.get("underline").and_then(|v| v.as_bool()) {
                style.underline = underline;
            }
            self.set(kind, style);
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        use TokenKind::*;

        let mut styles = HashMap::new();
        let mut set = |kind: TokenKind, style: Style| {
            styles.insert(kind, style);
        };

        set(Keyword, Style::fg(Color::Magenta).with_bold());
        set(ControlKeyword, Style::fg(Color::Magenta).with_bold());
        set(TypeName, Style::fg(Color::Yellow));
        set(FunctionName, Style::fg(Color::Blue));
        set(MacroName, Style::fg(Color::BrightCyan));
        set(Constant, Style::fg(Color::BrightRed));
        set(String, Style::fg(Color::Green));
        set(RawString, Style::fg(Color::Green));
        set(Char, Style::fg(Color::Green));
        set(Number, Style::fg(Color::Cyan));
        set(LineComment, Style::fg(Color::BrightBlack).with_italic());
        set(BlockComment, Style::fg(Color::BrightBlack).with_italic());
        set(DocComment, Style::fg(Color::BrightGreen).with_italic());
        set(Operator, Style::fg(Color::BrightWhite));
        set(Attribute, Style::fg(Color::BrightBlue));
        set(Preprocessor, Style::fg(Color::BrightMagenta));
        set(Regex, Style::fg(Color::BrightYellow));
        set(Lifetime, Style::fg(Color::BrightMagenta));
        set(Label, Style::fg(Color::Yellow).with_underline());
        set(Escape, Style::fg(Color::BrightYellow));
        set(Tag, Style::fg(Color::Blue));
        set(TagName, Style::fg(Color::Blue).with_bold());
        set(AttributeName, Style::fg(Color::Cyan));
        set(AttributeValue, Style::fg(Color::Green));
        set(Entity, Style::fg(Color::BrightYellow));
        set(Doctype, Style::fg(Color::BrightBlack));
        set(CssSelector, Style::fg(Color::Blue).with_bold());
        set(CssProperty, Style::fg(Color::Cyan));
        set(CssUnit, Style::fg(Color::BrightCyan));
        set(Heading, Style::fg(Color::Blue).with_bold());
        set(Bold, Style::default().with_bold());
        set(Italic, Style::default().with_italic());
        set(Link, Style::fg(Color::Cyan).with_underline());
        set(CodeSpan, Style::fg(Color::Green));
        set(CodeBlock, Style::fg(Color::Green));
        set(ListMarker, Style::fg(Color::Yellow).with_bold());
        set(Blockquote, Style::fg(Color::BrightBlack).with_italic());
        set(Key, Style::fg(Color::Blue));
        set(SectionHeader, Style::fg(Color::Magenta).with_bold());
        set(YamlAnchor, Style::fg(Color::BrightMagenta));
        set(YamlAlias, Style::fg(Color::BrightMagenta));
        set(YamlTag, Style::fg(Color::BrightYellow));
        set(ShellVariable, Style::fg(Color::BrightRed));
        set(ShellCommand, Style::fg(Color::Blue).with_bold());
        set(ShellOption, Style::fg(Color::Cyan));
        set(Error, Style::fg(Color::Red).with_underline());

        Self { styles }
    }
}
