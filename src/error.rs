//! Error types for glint

use thiserror::Error;

/// Result type alias for glint operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// The scanner itself is total over its inputs; these errors only arise
/// at the edges: compiling an authored pattern, resolving a language
/// name, or loading a theme file.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern `{name}`: {source}")]
    Pattern {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown token kind: {0}")]
    UnknownTokenKind(String),

    #[error("theme file: {0}")]
    Theme(String),

    #[error("theme parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
