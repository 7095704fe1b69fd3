//! Parser error types for carve-parser.

use std::fmt;

/// Why a source unit was rejected by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A `}` with no open brace left to close.
    UnbalancedClose,
    /// End of input reached with a brace still open.
    UnclosedBrace { opened_at: usize },
    UnterminatedString,
    UnterminatedTextBlock,
    UnterminatedChar,
    UnterminatedBlockComment,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedClose => write!(f, "closing brace without a matching open brace"),
            Self::UnclosedBrace { opened_at } => {
                write!(f, "end of input inside a block opened at offset {opened_at}")
            }
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedTextBlock => write!(f, "unterminated text block"),
            Self::UnterminatedChar => write!(f, "unterminated character literal"),
            Self::UnterminatedBlockComment => write!(f, "unterminated block comment"),
        }
    }
}

/// Unbalanced delimiters found while scanning a source unit.
///
/// `offset` is the byte offset where the depth went negative, or where the
/// input ended (or a raw newline appeared) inside a literal or comment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed source at offset {offset} (line {line}): {reason}")]
pub struct MalformedSourceError {
    pub offset: usize,
    pub line: u32,
    pub reason: MalformedReason,
}

/// Errors that can occur during method extraction.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error(transparent)]
    Malformed(#[from] MalformedSourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// The scanner failure, if this error came from malformed input.
    #[must_use]
    pub const fn as_malformed(&self) -> Option<&MalformedSourceError> {
        match self {
            Self::Malformed(error) => Some(error),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_error_names_offset_and_line() {
        let error = MalformedSourceError {
            offset: 42,
            line: 3,
            reason: MalformedReason::UnbalancedClose,
        };
        assert_eq!(
            error.to_string(),
            "malformed source at offset 42 (line 3): closing brace without a matching open brace"
        );
    }

    #[test]
    fn parser_error_is_transparent_over_malformed() {
        let inner = MalformedSourceError {
            offset: 7,
            line: 1,
            reason: MalformedReason::UnclosedBrace { opened_at: 2 },
        };
        let error = ParserError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
        assert_eq!(error.as_malformed(), Some(&inner));
    }
}
