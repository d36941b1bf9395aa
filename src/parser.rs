//! Line-format translation parsing.
//!
//! The format is one mapping per line, `key: value`. Lines that are
//! empty or start with `#` are ignored, the first `:` is the separator
//! (later colons stay in the value), and both sides are trimmed.
//!
//! The default mode is deliberately lenient: a localization layer must
//! never fail its caller over a malformed line, so anything that does
//! not parse is dropped. [`parse_text_strict`] surfaces the dropped
//! lines instead, for diagnostic tooling.

use std::path::Path;

use thiserror::Error;

use crate::key::{
    HashedKey,
    KeyMap,
};

/// A single rejected input line, reported by strict-mode parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-indexed line number within the parsed content.
    pub line_number: usize,
    /// The offending line, verbatim.
    pub line: String,
    /// Why the line was rejected.
    pub reason: DiagnosticReason,
}

/// Rejection reason for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticReason {
    /// The line has no `:` separator.
    MissingSeparator,
    /// The line's key already appeared earlier in the same content.
    DuplicateKey,
}

impl std::fmt::Display for DiagnosticReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("missing ':' separator"),
            Self::DuplicateKey => f.write_str("duplicate key"),
        }
    }
}

/// Errors from the parsing entry points.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Strict mode only: one or more lines were rejected.
    #[error("translation content was rejected:\n{}", format_diagnostics(.0))]
    Malformed(Vec<LineDiagnostic>),

    /// Loading translations from a file path is not implemented. The
    /// entry point fails loudly rather than returning partial results.
    #[error("loading translations from a file path is not supported")]
    PathLoadingUnsupported,
}

/// Formats diagnostics as a numbered list for error display.
fn format_diagnostics(diagnostics: &[LineDiagnostic]) -> String {
    diagnostics
        .iter()
        .enumerate()
        .map(|(i, diagnostic)| {
            format!(
                "  {}. line {} ({}): {}",
                i + 1,
                diagnostic.line_number,
                diagnostic.reason,
                diagnostic.line
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses line-format content into a hashed-key map, leniently.
///
/// Malformed lines and duplicate keys are dropped (first occurrence
/// wins); empty input yields an empty map. Input may use either `\n` or
/// `\r\n` line endings — parsing is not coupled to the host platform's
/// newline convention.
#[must_use]
pub fn parse_text(content: &str) -> KeyMap<String> {
    let (entries, _) = parse_lines(content);

    entries
}

/// Parses line-format content, rejecting anything the lenient mode
/// would silently drop.
///
/// The mapping rules are identical to [`parse_text`]; the difference is
/// that malformed lines and in-text duplicate keys are collected and
/// returned as an error instead of being discarded.
///
/// # Errors
/// [`ParseError::Malformed`] listing every rejected line.
pub fn parse_text_strict(content: &str) -> Result<KeyMap<String>, ParseError> {
    let (entries, diagnostics) = parse_lines(content);

    if diagnostics.is_empty() {
        Ok(entries)
    } else {
        Err(ParseError::Malformed(diagnostics))
    }
}

/// Parses a translation file from disk.
///
/// Not implemented: the core performs no file-system access. The entry
/// point is kept to preserve the documented contract and always fails.
///
/// # Errors
/// Always [`ParseError::PathLoadingUnsupported`].
pub fn parse_file(path: &Path) -> Result<KeyMap<String>, ParseError> {
    tracing::debug!(path = %path.display(), "path-based translation loading requested");

    Err(ParseError::PathLoadingUnsupported)
}

/// Shared line scanner for both parsing modes.
fn parse_lines(content: &str) -> (KeyMap<String>, Vec<LineDiagnostic>) {
    let mut entries = KeyMap::default();
    let mut diagnostics = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            tracing::debug!(line_number = index + 1, "dropping line without ':' separator");
            diagnostics.push(LineDiagnostic {
                line_number: index + 1,
                line: line.to_string(),
                reason: DiagnosticReason::MissingSeparator,
            });
            continue;
        };

        let hashed = HashedKey::of(key.trim());

        if let std::collections::hash_map::Entry::Vacant(slot) = entries.entry(hashed) {
            slot.insert(value.trim().to_string());
        } else {
            tracing::debug!(line_number = index + 1, key = key.trim(), "dropping duplicate key");
            diagnostics.push(LineDiagnostic {
                line_number: index + 1,
                line: line.to_string(),
                reason: DiagnosticReason::DuplicateKey,
            });
        }
    }

    (entries, diagnostics)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn parses_simple_mappings() {
        let result = parse_text("a: 1\n#comment\n\nb: 2");

        expect_that!(result.len(), eq(2));
        expect_that!(result.get(&HashedKey::of("a")), some(eq(&"1".to_string())));
        expect_that!(result.get(&HashedKey::of("b")), some(eq(&"2".to_string())));
    }

    #[googletest::test]
    fn splits_on_first_colon_only() {
        let result = parse_text("k: v: w");

        expect_that!(result.get(&HashedKey::of("k")), some(eq(&"v: w".to_string())));
    }

    #[googletest::test]
    fn first_occurrence_wins_for_duplicate_keys() {
        let result = parse_text("k: 1\nk: 2");

        expect_that!(result.len(), eq(1));
        expect_that!(result.get(&HashedKey::of("k")), some(eq(&"1".to_string())));
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_comments("# a\n# b")]
    #[case::only_blank_lines("\n\n\n")]
    #[case::no_separator("noColon")]
    fn lenient_mode_yields_empty_map(#[case] content: &str) {
        assert_that!(parse_text(content).len(), eq(0));
    }

    #[googletest::test]
    fn accepts_crlf_line_endings() {
        let result = parse_text("a: 1\r\nb: 2\r\n");

        expect_that!(result.len(), eq(2));
        expect_that!(result.get(&HashedKey::of("a")), some(eq(&"1".to_string())));
        expect_that!(result.get(&HashedKey::of("b")), some(eq(&"2".to_string())));
    }

    #[googletest::test]
    fn trims_keys_and_values() {
        let result = parse_text("  greeting  :   Hello world  ");

        expect_that!(result.get(&HashedKey::of("greeting")), some(eq(&"Hello world".to_string())));
    }

    #[googletest::test]
    fn comment_marker_is_only_recognized_at_column_zero() {
        // An indented comment has no colon either, so it is dropped as
        // malformed rather than as a comment; a '#' inside a key stays.
        let result = parse_text("#skipped: 1\n a#b: 2");

        expect_that!(result.len(), eq(1));
        expect_that!(result.get(&HashedKey::of("a#b")), some(eq(&"2".to_string())));
    }

    #[googletest::test]
    fn strict_mode_accepts_clean_content() {
        let result = parse_text_strict("a: 1\n# note\nb: 2");

        let entries = result.unwrap();
        expect_that!(entries.len(), eq(2));
    }

    #[googletest::test]
    fn strict_mode_reports_malformed_and_duplicate_lines() {
        let error = parse_text_strict("a: 1\nnoColon\na: 2").unwrap_err();

        let ParseError::Malformed(diagnostics) = error else {
            panic!("expected ParseError::Malformed, got: {error}");
        };
        expect_that!(
            diagnostics,
            elements_are![
                all![
                    field!(LineDiagnostic.line_number, eq(&2)),
                    field!(LineDiagnostic.reason, eq(&DiagnosticReason::MissingSeparator))
                ],
                all![
                    field!(LineDiagnostic.line_number, eq(&3)),
                    field!(LineDiagnostic.reason, eq(&DiagnosticReason::DuplicateKey))
                ]
            ]
        );
    }

    #[googletest::test]
    fn strict_mode_error_formats_numbered_list() {
        let error = parse_text_strict("noColon\nk: 1\nk: 2").unwrap_err();

        let message = format!("{error}");
        expect_that!(message, contains_substring("1. line 1 (missing ':' separator): noColon"));
        expect_that!(message, contains_substring("2. line 3 (duplicate key): k: 2"));
    }

    #[googletest::test]
    fn path_loading_fails_loudly() {
        let result = parse_file(Path::new("strings/pl.lang"));

        expect_that!(result, err(pat!(ParseError::PathLoadingUnsupported)));
    }
}
