//! glint - syntax highlighting for the terminal
//!
//! Tokenizes a file (or stdin) with a language table and prints the
//! text with ANSI styling, or dumps the raw token stream.

use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use unicode_width::UnicodeWidthStr;

use glint::{get_tokenizer, Color, HighlightError, Language, Result, Theme, Token};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

struct Options {
    file: Option<PathBuf>,
    language: Option<Language>,
    theme: Option<PathBuf>,
    dump_tokens: bool,
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options {
        file: None,
        language: None,
        theme: None,
        dump_tokens: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--list-languages" => {
                for language in Language::all() {
                    println!("{}", language.name());
                }
                return Ok(());
            }
            "--tokens" | "-t" => {
                options.dump_tokens = true;
            }
            "--lang" | "-l" => {
                i += 1;
                let name = args
                    .get(i)
                    .ok_or_else(|| HighlightError::UnknownLanguage("<missing>".into()))?;
                let language = Language::from_name(name)
                    .ok_or_else(|| HighlightError::UnknownLanguage(name.clone()))?;
                options.language = Some(language);
            }
            "--theme" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| HighlightError::Theme("--theme requires a file".into()))?;
                options.theme = Some(PathBuf::from(path));
            }
            other => {
                if other.starts_with('-') {
                    eprintln!("Unknown option: {}", other);
                    print_usage();
                    process::exit(1);
                }
                options.file = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let source = match &options.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let language = options
        .language
        .or_else(|| options.file.as_deref().and_then(Language::from_path))
        .unwrap_or(Language::None);

    let theme = match &options.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    match get_tokenizer(language) {
        Some(tokenizer) => {
            let tokens: Vec<Token> = tokenizer.tokens(&source).collect();
            if options.dump_tokens {
                dump_tokens(&source, &tokens)?;
            } else {
                print_styled(&source, &tokens, &theme)?;
            }
        }
        None => {
            // No table for this input: pass the text through unstyled.
            let mut stdout = io::stdout();
            stdout.write_all(source.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Print the source with each token styled per the theme
fn print_styled(source: &str, tokens: &[Token], theme: &Theme) -> Result<()> {
    let mut stdout = io::stdout();
    for token in tokens {
        let style = theme.style(token.kind);
        let text = token.text(source);
        if style.is_default() {
            queue!(stdout, Print(text))?;
            continue;
        }
        if style.fg != Color::Default {
            queue!(stdout, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(stdout, SetBackgroundColor(term_color(style.bg)))?;
        }
        if style.bold {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(stdout, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(stdout, SetAttribute(Attribute::Underlined))?;
        }
        queue!(stdout, Print(text), ResetColor, SetAttribute(Attribute::Reset))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Print one line per token: offset, length, kind, and a text preview
fn dump_tokens(source: &str, tokens: &[Token]) -> Result<()> {
    let mut stdout = io::stdout();
    for token in tokens {
        let preview = preview(token.text(source), 40);
        writeln!(
            stdout,
            "{:>6} {:>5}  {:<14} {}",
            token.start,
            token.len,
            token.kind.name(),
            preview
        )?;
    }
    stdout.flush()?;
    Ok(())
}

/// Escape control characters and clip the text to `max` display columns
fn preview(text: &str, max: usize) -> String {
    let escaped: String = text
        .chars()
        .map(|c| match c {
            '\n' => "\\n".to_string(),
            '\t' => "\\t".to_string(),
            '\r' => "\\r".to_string(),
            _ => c.to_string(),
        })
        .collect();

    let mut clipped = String::new();
    for c in escaped.chars() {
        if clipped.width() + c.to_string().width() > max {
            clipped.push('…');
            break;
        }
        clipped.push(c);
    }
    clipped
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
    }
}

fn print_usage() {
    println!("glint {} - terminal syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: glint [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and prints it with syntax highlighting.");
    println!("The language is detected from the file name unless --lang is given.");
    println!();
    println!("Options:");
    println!("  -l, --lang NAME    Force the language (see --list-languages)");
    println!("  -t, --tokens       Dump the token stream instead of styled text");
    println!("      --theme FILE   Load style overrides from a TOML theme file");
    println!("      --list-languages  List supported language names");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
}

fn print_version() {
    println!("glint {}", env!("CARGO_PKG_VERSION"));
}
