//! Coarse tokens over the code spans of a scan.
//!
//! Only what the boundary walk and the signature grammar need: words,
//! brackets, `->` and single punctuation bytes. Each string or char literal
//! becomes one opaque token; comments produce none.

use crate::types::{LexicalSpan, SpanKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Identifier, keyword or number.
    Word,
    Literal,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Arrow,
    Punct(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is_punct(&self, byte: u8) -> bool {
        self.kind == TokenKind::Punct(byte)
    }
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte >= 0x80
}

pub(crate) fn tokenize(source: &str, spans: &[LexicalSpan]) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();

    for span in spans {
        match span.kind {
            SpanKind::Code => tokenize_code(bytes, span.start, span.end, &mut tokens),
            SpanKind::StringLiteral | SpanKind::CharLiteral => tokens.push(Token {
                kind: TokenKind::Literal,
                start: span.start,
                end: span.end,
            }),
            SpanKind::LineComment | SpanKind::BlockComment => {}
        }
    }

    tokens
}

fn tokenize_code(bytes: &[u8], start: usize, end: usize, tokens: &mut Vec<Token>) {
    let mut pos = start;
    while pos < end {
        let byte = bytes[pos];
        if byte.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let token_start = pos;
        let kind = if is_word_byte(byte) {
            while pos < end && is_word_byte(bytes[pos]) {
                pos += 1;
            }
            TokenKind::Word
        } else {
            pos += 1;
            match byte {
                b'{' => TokenKind::OpenBrace,
                b'}' => TokenKind::CloseBrace,
                b'(' => TokenKind::OpenParen,
                b')' => TokenKind::CloseParen,
                b'-' if pos < end && bytes[pos] == b'>' => {
                    pos += 1;
                    TokenKind::Arrow
                }
                other => TokenKind::Punct(other),
            }
        };

        tokens.push(Token {
            kind,
            start: token_start,
            end: pos,
        });
    }
}
