//! Snippet check: is this text exactly one method or constructor?

use tracing::debug;

use crate::lexer;
use crate::signature::{self, Header};
use crate::source::SourceUnit;
use crate::tokens::{self, Token, TokenKind};

/// A top-level member of a snippet: its header tokens and how it ended.
struct Member<'t> {
    header: &'t [Token],
    has_body: bool,
}

/// Returns `true` when `snippet` holds a single method or constructor
/// declaration, either with a body or terminated by `;` (abstract and
/// interface methods).
///
/// Blank text, several members, fields, type declarations and anything the
/// scanner rejects as malformed all yield `false`.
#[must_use]
pub fn is_single_method(snippet: &str) -> bool {
    if snippet.trim().is_empty() {
        return false;
    }

    let unit = SourceUnit::new(snippet);
    let spans = match lexer::classify(&unit) {
        Ok(spans) => spans,
        Err(error) => {
            debug!(%error, "snippet is malformed");
            return false;
        }
    };
    let tokens = tokens::tokenize(snippet, &spans);

    let Some(members) = split_members(&tokens) else {
        return false;
    };
    let [member] = members.as_slice() else {
        debug!(count = members.len(), "snippet is not a single member");
        return false;
    };

    match signature::classify(member.header, snippet) {
        Header::Callable(signature) => member.has_body || signature.return_type.is_some(),
        _ => false,
    }
}

/// Split at depth-zero bodies and `;`. `None` when braces don't balance or the
/// last member is left open.
fn split_members(tokens: &[Token]) -> Option<Vec<Member<'_>>> {
    let mut members = Vec::new();
    let mut start = 0;
    let mut header_end = None;
    let mut braces = 0usize;
    let mut parens = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => parens += 1,
            TokenKind::CloseParen => parens = parens.saturating_sub(1),
            TokenKind::OpenBrace => {
                // A `{` inside parentheses belongs to an annotation or argument.
                if braces == 0 && parens == 0 && header_end.is_none() {
                    header_end = Some(index);
                }
                braces += 1;
            }
            TokenKind::CloseBrace => {
                braces = braces.checked_sub(1)?;
                if braces == 0 && parens == 0 {
                    if let Some(end) = header_end.take() {
                        members.push(Member {
                            header: &tokens[start..end],
                            has_body: true,
                        });
                        start = index + 1;
                    }
                }
            }
            TokenKind::Punct(b';') if braces == 0 && parens == 0 => {
                if start < index {
                    members.push(Member {
                        header: &tokens[start..index],
                        has_body: false,
                    });
                }
                start = index + 1;
            }
            _ => {}
        }
    }

    (braces == 0 && start == tokens.len()).then_some(members)
}
