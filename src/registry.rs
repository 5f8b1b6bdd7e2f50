//! Language identifiers and the tokenizer registry
//!
//! Tables are pure data built on demand: the first request for a
//! language constructs its tokenizer under the registry write lock and
//! caches it for the process lifetime; later lookups share the cached
//! instance behind an `Arc` with no further locking.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::languages;
use crate::tokenizer::Tokenizer;

/// Supported content languages
///
/// `None` means "no highlighting": the registry resolves it to no
/// tokenizer and the caller renders the text unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    None,
    C,
    Cpp,
    CSharp,
    Java,
    Rust,
    Go,
    Swift,
    Kotlin,
    Dart,
    Scala,
    Python,
    Ruby,
    Lua,
    Perl,
    Php,
    JavaScript,
    TypeScript,
    Css,
    Html,
    Xml,
    Markdown,
    Json,
    Yaml,
    Toml,
    Ini,
    Bash,
    PowerShell,
    Batch,
    Sql,
    Haskell,
    R,
    Zig,
    Makefile,
    Dockerfile,
}

impl Language {
    /// Every language except `None`, in display order
    pub fn all() -> &'static [Language] {
        &ALL_LANGUAGES
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::None => "None",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Dart => "Dart",
            Language::Scala => "Scala",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::Lua => "Lua",
            Language::Perl => "Perl",
            Language::Php => "PHP",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Css => "CSS",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Markdown => "Markdown",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
            Language::Ini => "INI",
            Language::Bash => "Bash",
            Language::PowerShell => "PowerShell",
            Language::Batch => "Batch",
            Language::Sql => "SQL",
            Language::Haskell => "Haskell",
            Language::R => "R",
            Language::Zig => "Zig",
            Language::Makefile => "Makefile",
            Language::Dockerfile => "Dockerfile",
        }
    }

    /// Resolve a language from a user-facing name or common alias
    pub fn from_name(name: &str) -> Option<Language> {
        let lowered = name.to_lowercase();
        let found = match lowered.as_str() {
            "none" => Language::None,
            "c" => Language::C,
            "c++" | "cpp" | "cxx" => Language::Cpp,
            "c#" | "csharp" => Language::CSharp,
            "java" => Language::Java,
            "rust" => Language::Rust,
            "go" | "golang" => Language::Go,
            "swift" => Language::Swift,
            "kotlin" => Language::Kotlin,
            "dart" => Language::Dart,
            "scala" => Language::Scala,
            "python" => Language::Python,
            "ruby" => Language::Ruby,
            "lua" => Language::Lua,
            "perl" => Language::Perl,
            "php" => Language::Php,
            "javascript" | "js" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "css" => Language::Css,
            "html" => Language::Html,
            "xml" => Language::Xml,
            "markdown" | "md" => Language::Markdown,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "toml" => Language::Toml,
            "ini" => Language::Ini,
            "bash" | "sh" | "shell" => Language::Bash,
            "powershell" | "pwsh" => Language::PowerShell,
            "batch" | "bat" => Language::Batch,
            "sql" => Language::Sql,
            "haskell" => Language::Haskell,
            "r" => Language::R,
            "zig" => Language::Zig,
            "makefile" | "make" => Language::Makefile,
            "dockerfile" | "docker" => Language::Dockerfile,
            _ => return None,
        };
        Some(found)
    }

    /// Resolve a language from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Language> {
        let lowered = ext.to_lowercase();
        let found = match lowered.as_str() {
            "c" | "h" => Language::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Language::Cpp,
            "cs" => Language::CSharp,
            "java" => Language::Java,
            "rs" => Language::Rust,
            "go" => Language::Go,
            "swift" => Language::Swift,
            "kt" | "kts" => Language::Kotlin,
            "dart" => Language::Dart,
            "scala" | "sc" => Language::Scala,
            "py" | "pyw" => Language::Python,
            "rb" => Language::Ruby,
            "lua" => Language::Lua,
            "pl" | "pm" => Language::Perl,
            "php" => Language::Php,
            "js" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "css" => Language::Css,
            "html" | "htm" => Language::Html,
            "xml" | "svg" | "xsl" => Language::Xml,
            "md" | "markdown" | "mkd" => Language::Markdown,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "toml" => Language::Toml,
            "ini" | "cfg" | "conf" => Language::Ini,
            "sh" | "bash" => Language::Bash,
            "ps1" | "psm1" => Language::PowerShell,
            "bat" | "cmd" => Language::Batch,
            "sql" => Language::Sql,
            "hs" => Language::Haskell,
            "r" => Language::R,
            "zig" => Language::Zig,
            "mk" => Language::Makefile,
            _ => return None,
        };
        Some(found)
    }

    /// Detect a language from a file path
    ///
    /// Checks well-known extensionless filenames first, then falls back
    /// to the extension.
    pub fn from_path(path: &Path) -> Option<Language> {
        let filename = path.file_name()?.to_str()?;
        match filename.to_lowercase().as_str() {
            "makefile" | "gnumakefile" => return Some(Language::Makefile),
            "dockerfile" | "containerfile" => return Some(Language::Dockerfile),
            _ => {}
        }
        Language::from_extension(path.extension()?.to_str()?)
    }
}

const ALL_LANGUAGES: [Language; 34] = [
    Language::C,
    Language::Cpp,
    Language::CSharp,
    Language::Java,
    Language::Rust,
    Language::Go,
    Language::Swift,
    Language::Kotlin,
    Language::Dart,
    Language::Scala,
    Language::Python,
    Language::Ruby,
    Language::Lua,
    Language::Perl,
    Language::Php,
    Language::JavaScript,
    Language::TypeScript,
    Language::Css,
    Language::Html,
    Language::Xml,
    Language::Markdown,
    Language::Json,
    Language::Yaml,
    Language::Toml,
    Language::Ini,
    Language::Bash,
    Language::PowerShell,
    Language::Batch,
    Language::Sql,
    Language::Haskell,
    Language::R,
    Language::Zig,
    Language::Makefile,
    Language::Dockerfile,
];

/// Lazily-populated cache of per-language tokenizers
///
/// Lookups of cached entries take the read lock only; a miss upgrades
/// to the write lock, re-checks, then builds, so a table is constructed
/// at most once even under concurrent first requests.
pub struct TokenizerRegistry {
    cache: RwLock<HashMap<Language, Arc<Tokenizer>>>,
}

impl TokenizerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the tokenizer for a language, building it on first request
    ///
    /// Returns `None` for [`Language::None`]; the caller renders the
    /// text with a single default style.
    pub fn get(&self, language: Language) -> Option<Arc<Tokenizer>> {
        if language == Language::None {
            return None;
        }
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(tokenizer) = cache.get(&language) {
                return Some(Arc::clone(tokenizer));
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        if let Some(tokenizer) = cache.get(&language) {
            return Some(Arc::clone(tokenizer));
        }
        let tokenizer = Arc::new(languages::build(language)?);
        cache.insert(language, Arc::clone(&tokenizer));
        Some(tokenizer)
    }

    /// Register or override the tokenizer for a language
    pub fn register(&self, language: Language, tokenizer: Tokenizer) {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.insert(language, Arc::new(tokenizer));
    }

    /// Drop every cached tokenizer (primarily for tests)
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.clear();
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<TokenizerRegistry> = Lazy::new(TokenizerRegistry::new);

/// The process-wide registry
pub fn global() -> &'static TokenizerRegistry {
    &GLOBAL
}

/// Shorthand for `global().get(language)`
pub fn get_tokenizer(language: Language) -> Option<Arc<Tokenizer>> {
    GLOBAL.get(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::LanguageTable;
    use crate::token::TokenKind;

    #[test]
    fn test_none_has_no_tokenizer() {
        let registry = TokenizerRegistry::new();
        assert!(registry.get(Language::None).is_none());
    }

    #[test]
    fn test_build_once_and_share() {
        let registry = TokenizerRegistry::new();
        let first = registry.get(Language::Rust).unwrap();
        let second = registry.get(Language::Rust).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_every_language_builds() {
        let registry = TokenizerRegistry::new();
        for language in Language::all() {
            assert!(registry.get(*language).is_some(), "{}", language.name());
        }
    }

    #[test]
    fn test_register_override_and_clear() {
        let registry = TokenizerRegistry::new();
        let table = LanguageTable::builder()
            .rule("anything", r"(?s).+", TokenKind::Text, 50)
            .build();
        registry.register(Language::Json, Tokenizer::new(table));

        let tokenizer = registry.get(Language::Json).unwrap();
        let tokens: Vec<_> = tokenizer.tokens("{}").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);

        registry.clear();
        let rebuilt = registry.get(Language::Json).unwrap();
        let tokens: Vec<_> = rebuilt.tokens("{}").collect();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_concurrent_first_requests() {
        let registry = Arc::new(TokenizerRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get(Language::Python).unwrap())
            })
            .collect();
        let tokenizers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for pair in tokenizers.windows(2) {
            assert!(Arc::ptr_eq(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn test_detection() {
        assert_eq!(Language::from_path(Path::new("main.rs")), Some(Language::Rust));
        assert_eq!(Language::from_path(Path::new("Makefile")), Some(Language::Makefile));
        assert_eq!(Language::from_path(Path::new("Dockerfile")), Some(Language::Dockerfile));
        assert_eq!(Language::from_path(Path::new("a/b/app.TS")), Some(Language::TypeScript));
        assert_eq!(Language::from_path(Path::new("no_extension")), None);
        assert_eq!(Language::from_name("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_name("JS"), Some(Language::JavaScript));
        assert_eq!(Language::from_name("klingon"), None);
    }
}
