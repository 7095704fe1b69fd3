//! Lexical classification of source text.
//!
//! Partitions a [`SourceUnit`] into code, string/char literal and comment
//! spans with a byte-level state machine. Every delimiter is ASCII, so span
//! boundaries always fall on UTF-8 character boundaries.

use crate::error::{MalformedReason, MalformedSourceError};
use crate::source::SourceUnit;
use crate::types::{LexicalSpan, SpanKind};

/// Split `unit` into spans that cover it without gaps or overlaps.
///
/// # Errors
/// Returns [`MalformedSourceError`] for an unterminated string, text block,
/// character literal or block comment. A line comment may run to end of input.
pub fn classify(unit: &SourceUnit<'_>) -> Result<Vec<LexicalSpan>, MalformedSourceError> {
    Lexer::new(unit).run()
}

struct Lexer<'u, 'a> {
    unit: &'u SourceUnit<'a>,
    bytes: &'a [u8],
    pos: usize,
    spans: Vec<LexicalSpan>,
}

impl<'u, 'a> Lexer<'u, 'a> {
    fn new(unit: &'u SourceUnit<'a>) -> Self {
        Self {
            unit,
            bytes: unit.text().as_bytes(),
            pos: 0,
            spans: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<LexicalSpan>, MalformedSourceError> {
        let mut code_start = 0;
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let kind = match (self.bytes[start], self.peek(1)) {
                (b'/', Some(b'/')) => {
                    self.line_comment();
                    SpanKind::LineComment
                }
                (b'/', Some(b'*')) => {
                    self.block_comment()?;
                    SpanKind::BlockComment
                }
                (b'"', _) => {
                    self.string()?;
                    SpanKind::StringLiteral
                }
                (b'\'', _) => {
                    self.char_literal()?;
                    SpanKind::CharLiteral
                }
                _ => {
                    self.pos += 1;
                    continue;
                }
            };
            self.push(SpanKind::Code, code_start, start);
            self.push(kind, start, self.pos);
            code_start = self.pos;
        }
        self.push(SpanKind::Code, code_start, self.bytes.len());
        Ok(self.spans)
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn push(&mut self, kind: SpanKind, start: usize, end: usize) {
        if start < end {
            self.spans.push(LexicalSpan { kind, start, end });
        }
    }

    fn error(&self, offset: usize, reason: MalformedReason) -> MalformedSourceError {
        self.unit.malformed(offset, reason)
    }

    // The newline stays in the following code span.
    fn line_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn block_comment(&mut self) -> Result<(), MalformedSourceError> {
        self.pos += 2;
        while self.pos + 1 < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.bytes[self.pos + 1] == b'/' {
                self.pos += 2;
                return Ok(());
            }
            self.pos += 1;
        }
        Err(self.error(self.bytes.len(), MalformedReason::UnterminatedBlockComment))
    }

    fn string(&mut self) -> Result<(), MalformedSourceError> {
        if self.bytes[self.pos..].starts_with(b"\"\"\"") {
            return self.text_block();
        }
        self.quoted(b'"', MalformedReason::UnterminatedString)
    }

    fn char_literal(&mut self) -> Result<(), MalformedSourceError> {
        self.quoted(b'\'', MalformedReason::UnterminatedChar)
    }

    /// Single-line literal closed by `quote`; a raw newline terminates it as malformed.
    fn quoted(&mut self, quote: u8, reason: MalformedReason) -> Result<(), MalformedSourceError> {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b'\n' => return Err(self.error(self.pos, reason)),
                byte if byte == quote => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => self.pos += 1,
            }
        }
        Err(self.error(self.bytes.len(), reason))
    }

    fn text_block(&mut self) -> Result<(), MalformedSourceError> {
        self.pos += 3;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'\\' {
                self.pos += 2;
            } else if self.bytes[self.pos..].starts_with(b"\"\"\"") {
                self.pos += 3;
                return Ok(());
            } else {
                self.pos += 1;
            }
        }
        Err(self.error(self.bytes.len(), MalformedReason::UnterminatedTextBlock))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn kinds(source: &str) -> Vec<(SpanKind, &str)> {
        let unit = SourceUnit::new(source);
        classify(&unit)
            .expect("source should classify")
            .iter()
            .map(|span| (span.kind, span.text(source)))
            .collect()
    }

    fn failure(source: &str) -> MalformedSourceError {
        let unit = SourceUnit::new(source);
        classify(&unit).expect_err("source should be rejected")
    }

    #[test]
    fn string_with_escaped_quotes_and_braces_is_one_span() {
        let source = r#"String json = "{\"key\": \"value\"}";"#;
        assert_eq!(
            kinds(source),
            vec![
                (SpanKind::Code, "String json = "),
                (SpanKind::StringLiteral, r#""{\"key\": \"value\"}""#),
                (SpanKind::Code, ";"),
            ]
        );
    }

    #[test]
    fn comments_are_split_from_code() {
        let source = "int x = 10; // another comment }\n/* { */ y();";
        assert_eq!(
            kinds(source),
            vec![
                (SpanKind::Code, "int x = 10; "),
                (SpanKind::LineComment, "// another comment }"),
                (SpanKind::Code, "\n"),
                (SpanKind::BlockComment, "/* { */"),
                (SpanKind::Code, " y();"),
            ]
        );
    }

    #[test]
    fn char_literals_hide_quotes_and_braces() {
        let source = "char a = '\"'; char b = '{'; char c = '\\'';";
        let literals: Vec<&str> = kinds(source)
            .into_iter()
            .filter(|(kind, _)| *kind == SpanKind::CharLiteral)
            .map(|(_, text)| text)
            .collect();
        assert_eq!(literals, vec!["'\"'", "'{'", "'\\''"]);
    }

    #[test]
    fn text_block_spans_lines() {
        let source = "String s = \"\"\"\n  { \"quoted\" }\n  \"\"\";";
        let spans = kinds(source);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].0, SpanKind::StringLiteral);
        assert!(spans[1].1.starts_with("\"\"\"") && spans[1].1.ends_with("\"\"\""));
    }

    #[test]
    fn empty_string_is_not_a_text_block() {
        assert_eq!(
            kinds("a = \"\";"),
            vec![
                (SpanKind::Code, "a = "),
                (SpanKind::StringLiteral, "\"\""),
                (SpanKind::Code, ";"),
            ]
        );
    }

    #[test]
    fn comment_markers_inside_strings_are_text() {
        let source = r#"s = "// not a comment /* nor this";"#;
        let spans = kinds(source);
        assert_eq!(spans[1], (SpanKind::StringLiteral, r#""// not a comment /* nor this""#));
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn spans_partition_the_source() {
        let source = "a /* b */ \"c\" 'd' // e\nf";
        let unit = SourceUnit::new(source);
        let spans = classify(&unit).expect("source should classify");
        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start, cursor);
            assert!(!span.is_empty());
            cursor = span.end;
        }
        assert_eq!(cursor, source.len());
    }

    #[test]
    fn line_comment_may_end_at_end_of_input() {
        assert_eq!(
            kinds("x(); // trailing"),
            vec![
                (SpanKind::Code, "x(); "),
                (SpanKind::LineComment, "// trailing"),
            ]
        );
    }

    #[test]
    fn empty_source_has_no_spans() {
        assert!(kinds("").is_empty());
    }

    #[rstest]
    #[case::string_at_eof("s = \"open", MalformedReason::UnterminatedString, 9)]
    #[case::string_across_newline("s = \"open\n\";", MalformedReason::UnterminatedString, 9)]
    #[case::char_at_eof("c = '{", MalformedReason::UnterminatedChar, 6)]
    #[case::block_comment("/* never closed", MalformedReason::UnterminatedBlockComment, 15)]
    #[case::text_block("t = \"\"\"\nbody", MalformedReason::UnterminatedTextBlock, 12)]
    fn unterminated_delimiters_are_malformed(
        #[case] source: &str,
        #[case] reason: MalformedReason,
        #[case] offset: usize,
    ) {
        let error = failure(source);
        assert_eq!(error.reason, reason);
        assert_eq!(error.offset, offset);
    }
}
