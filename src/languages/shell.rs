//! Bash, PowerShell, and Batch tables

use crate::pattern::{LanguageTable, PatternOptions};
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

pub(super) fn bash() -> Tokenizer {
    let line_start = PatternOptions::line_start();
    let table = LanguageTable::builder()
        .rule_opts("shebang", r"#![^\n]*", TokenKind::Preprocessor, 95, line_start)
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule("dq_string", r#"(?s)"(?:[^"\\]|\\.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"(?s)'[^']*'", TokenKind::String, 80)
        .rule(
            "variable",
            r"\$\{[^}\n]*\}|\$[A-Za-z_]\w*|\$[0-9#?@*!$-]",
            TokenKind::ShellVariable,
            75,
        )
        .rule(
            "control",
            r"\b(?:if|then|elif|else|fi|for|while|until|do|done|case|esac|in|select|function|time)\b",
            TokenKind::ControlKeyword,
            56,
        )
        .rule_opts("function_def", r"[A-Za-z_][\w-]*[ \t]*\(\)", TokenKind::FunctionName, 55, line_start)
        .rule_opts("command", r"[A-Za-z_][\w./-]*", TokenKind::ShellCommand, 52, line_start)
        .rule("option", r"--?[A-Za-z][\w-]*", TokenKind::ShellOption, 51)
        .rule("number", r"\b\d+\b", TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_][\w-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[|&;<>!=~]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{}`,.:*?/\\+-]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .keywords(
            TokenKind::Keyword,
            &["alias", "declare", "eval", "exec", "exit", "export", "local", "readonly", "return", "set", "shift", "source", "trap", "unset"],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn powershell() -> Tokenizer {
    let table = LanguageTable::builder()
        .rule("block_comment", r"(?s)<#.*?#>", TokenKind::BlockComment, 91)
        .rule("comment", r"#[^\n]*", TokenKind::LineComment, 90)
        .rule("dq_string", r#"(?s)"(?:[^"`]|`.)*""#, TokenKind::String, 80)
        .rule("sq_string", r"(?s)'[^']*'", TokenKind::String, 80)
        .rule("variable", r"\$(?:[A-Za-z_]\w*|\{[^}\n]*\})", TokenKind::ShellVariable, 75)
        .rule("type_accel", r"\[[A-Za-z][\w.]*\]", TokenKind::TypeName, 70)
        .rule("cmdlet", r"[A-Za-z]+-[A-Za-z]\w*", TokenKind::ShellCommand, 55)
        .rule("option", r"-[A-Za-z]\w*", TokenKind::ShellOption, 52)
        .rule("number", r"\b\d+(?:\.\d+)?(?:kb|mb|gb|tb|pb)?\b", TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_]\w*", TokenKind::Identifier, 50)
        .rule("operator", r"[|&;<>!=+*/%]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{}@,.:`]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .case_insensitive_keywords()
        .keywords(
            TokenKind::ControlKeyword,
            &["if", "elseif", "else", "switch", "foreach", "for", "while", "do", "break", "continue", "return", "try", "catch", "finally", "throw", "trap"],
        )
        .keywords(
            TokenKind::Keyword,
            &["begin", "class", "end", "enum", "filter", "function", "in", "param", "process", "using", "workflow"],
        )
        .build();
    Tokenizer::new(table)
}

pub(super) fn batch() -> Tokenizer {
    let line_start = PatternOptions::line_start();
    let rem = PatternOptions {
        at_line_start: true,
        case_insensitive: true,
        ..Default::default()
    };
    let table = LanguageTable::builder()
        .rule_opts("rem_comment", r"[ \t]*rem\b[^\n]*", TokenKind::LineComment, 91, rem)
        .rule_opts("colon_comment", r"::[^\n]*", TokenKind::LineComment, 90, line_start)
        .rule_opts("label", r":[A-Za-z_][\w-]*", TokenKind::Label, 85, line_start)
        .rule("dq_string", r#""[^"\n]*""#, TokenKind::String, 80)
        .rule("variable", r"%[A-Za-z_]\w*%|%%?~?[A-Za-z0-9]", TokenKind::ShellVariable, 75)
        .rule("option", r"/[A-Za-z]+", TokenKind::ShellOption, 55)
        .rule("number", r"\b\d+\b", TokenKind::Number, 60)
        .rule("identifier", r"[A-Za-z_][\w.-]*", TokenKind::Identifier, 50)
        .rule("operator", r"[|&<>=@^!]+", TokenKind::Operator, 30)
        .rule("punct", r"[()\[\]{},.:;*?\\+-]", TokenKind::Punctuation, 20)
        .rule("space", r"[ \t\r\n]+", TokenKind::Text, 10)
        .case_insensitive_keywords()
        .keywords(
            TokenKind::ControlKeyword,
            &["if", "else", "for", "goto", "call", "exit", "not", "exist", "defined", "errorlevel", "in", "do"],
        )
        .keywords(
            TokenKind::Keyword,
            &["echo", "set", "setlocal", "endlocal", "shift", "pause", "choice", "pushd", "popd", "cd", "copy", "del", "move", "start", "title", "type", "cls"],
        )
        .keywords(TokenKind::Constant, &["on", "off", "nul", "con"])
        .build();
    Tokenizer::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn described(tokenizer: &Tokenizer, text: &str) -> Vec<(String, TokenKind)> {
        tokenizer
            .tokens(text)
            .map(|t| (t.text(text).to_string(), t.kind))
            .collect()
    }

    #[test]
    fn test_bash_shebang_vs_comment() {
        let tokens = described(&bash(), "#!/bin/sh\n# note\n");
        assert_eq!(tokens[0], ("#!/bin/sh".to_string(), TokenKind::Preprocessor));
        assert!(tokens.contains(&("# note".to_string(), TokenKind::LineComment)));
    }

    #[test]
    fn test_bash_variables_and_options() {
        let tokens = described(&bash(), "grep -r --include '*.rs' \"$HOME\" ${DIR}");
        assert_eq!(tokens[0], ("grep".to_string(), TokenKind::ShellCommand));
        assert!(tokens.contains(&("-r".to_string(), TokenKind::ShellOption)));
        assert!(tokens.contains(&("--include".to_string(), TokenKind::ShellOption)));
        assert!(tokens.contains(&("${DIR}".to_string(), TokenKind::ShellVariable)));
    }

    #[test]
    fn test_bash_control_keywords_anywhere() {
        let tokens = described(&bash(), "if true; then echo hi; fi");
        assert!(tokens.contains(&("if".to_string(), TokenKind::ControlKeyword)));
        assert!(tokens.contains(&("then".to_string(), TokenKind::ControlKeyword)));
        assert!(tokens.contains(&("fi".to_string(), TokenKind::ControlKeyword)));
    }

    #[test]
    fn test_powershell_cmdlet() {
        let tokens = described(&powershell(), "Get-ChildItem -Path $home");
        assert_eq!(tokens[0], ("Get-ChildItem".to_string(), TokenKind::ShellCommand));
        assert!(tokens.contains(&("-Path".to_string(), TokenKind::ShellOption)));
        assert!(tokens.contains(&("$home".to_string(), TokenKind::ShellVariable)));
    }

    #[test]
    fn test_batch_label_and_rem() {
        let tokens = described(&batch(), "REM setup\n:start\necho %PATH%\n");
        assert_eq!(tokens[0].1, TokenKind::LineComment);
        assert!(tokens.contains(&(":start".to_string(), TokenKind::Label)));
        assert!(tokens.contains(&("%PATH%".to_string(), TokenKind::ShellVariable)));
    }
}
