//! glint - a pattern-table syntax tokenizer
//!
//! Splits source text into a contiguous stream of classified tokens
//! using per-language tables of anchored, prioritized regex patterns.
//! Tables are built lazily and shared through a concurrent registry,
//! so callers normally need only two calls:
//!
//! ```
//! use glint::{get_tokenizer, Language, TokenKind};
//!
//! let tokenizer = get_tokenizer(Language::Rust).unwrap();
//! let source = "fn main() {}";
//! let kinds: Vec<_> = tokenizer.tokens(source).map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Keyword);
//! ```

mod error;
mod languages;
mod pattern;
mod registry;
mod scanner;
mod structure;
mod theme;
mod token;
mod tokenizer;

pub use error::{HighlightError, Result};
pub use pattern::{LanguageTable, LanguageTableBuilder, Pattern, PatternOptions};
pub use registry::{get_tokenizer, global, Language, TokenizerRegistry};
pub use scanner::{scan, Scan};
pub use structure::Structure;
pub use theme::{Color, Style, Theme};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenStream, Tokenizer};
