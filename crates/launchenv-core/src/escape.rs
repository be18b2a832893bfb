//! Double-quote escaping for shell `export` values.
//!
//! Every escaped value is meant to sit between the double quotes of
//! `export name="...";`. Inside double quotes a POSIX shell treats `$`,
//! backtick, `"` and `\` specially, so those are the only characters that
//! ever need rewriting.

use serde::{Deserialize, Serialize};

/// Quoting contract for an exported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Nothing in the value expands: `$`, backtick, `"` and `\` are all escaped.
    Safe,
    /// Only quoting is protected. `$name` and backticks still expand when sourced.
    Permissive,
}

impl EscapeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscapeMode::Safe => "safe",
            EscapeMode::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EscapeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "safe" | "escaped" => Ok(EscapeMode::Safe),
            "permissive" | "raw" => Ok(EscapeMode::Permissive),
            _ => Err(format!(
                "Unknown escape mode '{}'. Known modes: safe, permissive",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("value contains a NUL byte at offset {offset}, which a shell variable cannot hold")]
    NulByte { offset: usize },

    #[error("value is not valid UTF-8: {reason}")]
    InvalidUtf8 { reason: String },
}

/// Escape `value` for use inside a double-quoted shell string.
pub fn escape(value: &str, mode: EscapeMode) -> Result<String, EscapeError> {
    if let Some(offset) = value.find('\0') {
        return Err(EscapeError::NulByte { offset });
    }

    Ok(match mode {
        EscapeMode::Safe => escape_safe(value),
        EscapeMode::Permissive => escape_permissive(value),
    })
}

/// Like [`escape`], for raw bytes such as values read from `OsStr`.
pub fn escape_bytes(value: &[u8], mode: EscapeMode) -> Result<String, EscapeError> {
    let text = std::str::from_utf8(value).map_err(|e| EscapeError::InvalidUtf8 {
        reason: e.to_string(),
    })?;
    escape(text, mode)
}

fn escape_safe(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        if matches!(ch, '"' | '$' | '`' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

// A run of backslashes directly before `"` or at the end of the value is
// doubled, otherwise it would swallow the escaping backslash or the closing
// quote. All other backslashes are left for the shell to interpret.
fn escape_permissive(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    let mut pending_backslashes = 0usize;

    for ch in value.chars() {
        match ch {
            '\\' => pending_backslashes += 1,
            '"' => {
                push_backslashes(&mut out, pending_backslashes * 2);
                pending_backslashes = 0;
                out.push_str("\\\"");
            }
            _ => {
                push_backslashes(&mut out, pending_backslashes);
                pending_backslashes = 0;
                out.push(ch);
            }
        }
    }

    push_backslashes(&mut out, pending_backslashes * 2);
    out
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\\', count));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::process::Command;
    use std::str::FromStr;

    /// Source `script` with `sh`, then print the variable `name` verbatim.
    pub(crate) fn sourced_value(script: &str, name: &str) -> String {
        let output = Command::new("sh")
            .arg("-c")
            .arg(format!("{script}printf '%s' \"${name}\""))
            .output()
            .expect("sh should be available");
        assert!(
            output.status.success(),
            "sh failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf-8 output")
    }

    fn round_trip(value: &str, mode: EscapeMode) -> String {
        let script = format!("export x=\"{}\";\n", escape(value, mode).unwrap());
        sourced_value(&script, "x")
    }

    #[test]
    fn test_safe_escapes_quotes_dollars_backticks_and_backslashes() {
        assert_eq!(
            escape(r#"a"b$c`d\e"#, EscapeMode::Safe).unwrap(),
            r#"a\"b\$c\`d\\e"#
        );
    }

    #[test]
    fn test_safe_leaves_single_quotes_and_spaces() {
        assert_eq!(
            escape("foo 'date bar", EscapeMode::Safe).unwrap(),
            "foo 'date bar"
        );
    }

    #[test]
    fn test_permissive_only_escapes_quotes() {
        assert_eq!(
            escape(r#"$HOME/`id` "x""#, EscapeMode::Permissive).unwrap(),
            r#"$HOME/`id` \"x\""#
        );
    }

    #[test]
    fn test_permissive_keeps_interior_backslashes() {
        assert_eq!(
            escape(r"\$HOME a\b", EscapeMode::Permissive).unwrap(),
            r"\$HOME a\b"
        );
    }

    #[test]
    fn test_permissive_doubles_backslashes_before_quote_and_at_end() {
        assert_eq!(
            escape(r#"a\"b"#, EscapeMode::Permissive).unwrap(),
            r#"a\\\"b"#
        );
        assert_eq!(escape(r"trailing\\", EscapeMode::Permissive).unwrap(), r"trailing\\\\");
    }

    #[test]
    fn test_nul_byte_rejected_in_both_modes() {
        for mode in [EscapeMode::Safe, EscapeMode::Permissive] {
            assert_eq!(
                escape("ab\0c", mode),
                Err(EscapeError::NulByte { offset: 2 })
            );
        }
    }

    #[test]
    fn test_escape_bytes_rejects_invalid_utf8() {
        let result = escape_bytes(&[b'o', b'k', 0xff], EscapeMode::Safe);
        assert!(matches!(result, Err(EscapeError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_escape_bytes_valid_utf8() {
        assert_eq!(
            escape_bytes("p@nda$".as_bytes(), EscapeMode::Safe).unwrap(),
            r"p@nda\$"
        );
    }

    #[test]
    fn test_escape_mode_from_str() {
        assert_eq!(EscapeMode::from_str("SAFE"), Ok(EscapeMode::Safe));
        assert_eq!(
            EscapeMode::from_str("permissive"),
            Ok(EscapeMode::Permissive)
        );
        let err = EscapeMode::from_str("loose").unwrap_err();
        assert!(err.contains("Unknown escape mode 'loose'"));
    }

    #[test]
    fn test_escape_mode_serde() {
        assert_eq!(
            serde_json::to_string(&EscapeMode::Permissive).unwrap(),
            "\"permissive\""
        );
        let parsed: EscapeMode = serde_json::from_str("\"safe\"").unwrap();
        assert_eq!(parsed, EscapeMode::Safe);
    }

    #[test]
    fn test_safe_round_trips_through_sh() {
        let values = [
            "plain",
            "$a b c",
            "foo `date` bar",
            "$(date)",
            "say \"hi\"",
            r"back\slash",
            r"\$(date)",
            r#"ends with \"#,
            "p@nda$arecool",
            "multi\nline",
            "quote'single",
            "",
        ];
        for value in values {
            assert_eq!(round_trip(value, EscapeMode::Safe), value, "value {value:?}");
        }
    }

    #[test]
    fn test_safe_does_not_run_command_substitution() {
        let value = round_trip("`echo pwned` $(echo pwned)", EscapeMode::Safe);
        assert_eq!(value, "`echo pwned` $(echo pwned)");
    }

    #[test]
    fn test_permissive_expands_prior_variable() {
        let script = format!(
            "export x=\"bar\";\nexport y=\"{}\";\n",
            escape("$x", EscapeMode::Permissive).unwrap()
        );
        assert_eq!(sourced_value(&script, "y"), "bar");
    }

    #[test]
    fn test_permissive_cannot_break_out_of_quotes() {
        let values = [r#"a\"; echo pwned; x=""#, r"trailing\", r#"\\""#];
        for value in values {
            let script = format!(
                "export x=\"{}\";\n",
                escape(value, EscapeMode::Permissive).unwrap()
            );
            let output = Command::new("sh")
                .arg("-c")
                .arg(format!("{script}printf '%s' \"$x\""))
                .output()
                .unwrap();
            assert!(output.status.success(), "value {value:?} broke the script");
            let stdout = String::from_utf8(output.stdout).unwrap();
            assert_eq!(stdout, value, "value {value:?}");
        }
    }
}
