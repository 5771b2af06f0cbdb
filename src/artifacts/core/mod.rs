//! Core utilities and shared types
//!
//! This module contains the error taxonomy shared by the rendering pipeline
//! and small byte helpers used across the application.
//!
//! Only [`RenderError::MalformedHunkSequence`] is ever returned to the caller of a
//! render. The syntax variants are produced by a [`SyntaxProvider`] and absorbed by
//! the pipeline, which degrades to unclassified plain text instead.
//!
//! [`SyntaxProvider`]: crate::artifacts::syntax::SyntaxProvider

use crate::artifacts::diff::hunk::HunkKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no grammar registered for language {language:?}")]
    UnsupportedLanguage { language: String },

    #[error("failed to parse {language} source: {reason}")]
    ParseFailure { language: String, reason: String },

    #[error(
        "{kind} hunk spans bytes {window_start}..{window_end} but the buffer is only {buffer_len} bytes long"
    )]
    MalformedHunkSequence {
        kind: HunkKind,
        window_start: usize,
        window_end: usize,
        buffer_len: usize,
    },

    #[error("token span {start}..{end} ends before it starts")]
    InvalidSpan { start: usize, end: usize },
}

impl RenderError {
    /// Whether the pipeline may swallow this error and keep rendering.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RenderError::MalformedHunkSequence { .. })
    }
}

pub fn count_line_breaks(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"", 0)]
    #[case(b"no newline", 0)]
    #[case(b"a\n", 1)]
    #[case(b"b\nc\n", 2)]
    #[case(b"\r\n\r\n\n", 3)]
    fn test_count_line_breaks(#[case] input: &[u8], #[case] expected: usize) {
        assert_eq!(count_line_breaks(input), expected);
    }

    #[test]
    fn test_only_malformed_hunks_are_fatal() {
        let fatal = RenderError::MalformedHunkSequence {
            kind: HunkKind::Add,
            window_start: 4,
            window_end: 9,
            buffer_len: 6,
        };
        let unsupported = RenderError::UnsupportedLanguage {
            language: "cobol".to_string(),
        };

        assert!(!fatal.is_recoverable());
        assert!(unsupported.is_recoverable());
        assert_eq!(
            fatal.to_string(),
            "add hunk spans bytes 4..9 but the buffer is only 6 bytes long"
        );
    }
}
