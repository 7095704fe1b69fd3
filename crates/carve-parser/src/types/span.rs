use serde::{Deserialize, Serialize};

/// Lexical classification of a stretch of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Code,
    StringLiteral,
    CharLiteral,
    LineComment,
    BlockComment,
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::StringLiteral => "string_literal",
            Self::CharLiteral => "char_literal",
            Self::LineComment => "line_comment",
            Self::BlockComment => "block_comment",
        };
        write!(f, "{s}")
    }
}

/// A half-open byte range `[start, end)` of one kind.
///
/// The spans of a scan partition the source in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl LexicalSpan {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        self.kind == SpanKind::Code
    }

    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_kind_serializes_in_snake_case() {
        for kind in [
            SpanKind::Code,
            SpanKind::StringLiteral,
            SpanKind::CharLiteral,
            SpanKind::LineComment,
            SpanKind::BlockComment,
        ] {
            let value = serde_json::to_value(kind).expect("serialize span kind");
            assert_eq!(value.as_str(), Some(kind.to_string().as_str()));
        }
    }
}
