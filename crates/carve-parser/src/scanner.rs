//! Method boundary scanner.
//!
//! One left-to-right pass over the code tokens of a [`SourceUnit`]. Brace
//! nesting is tracked with an explicit stack of [`Frame`]s instead of
//! recursion; the unit itself is a root frame below the stack that is never
//! popped.
//! Every `{` classifies the header before it (see [`crate::signature`]) and
//! pushes a frame; a method frame owns a candidate that is closed by the `}`
//! popping it, i.e. the brace that returns the depth to the candidate's
//! baseline.

use tracing::{debug, trace};

use crate::error::{MalformedReason, MalformedSourceError};
use crate::lexer;
use crate::signature::{self, Header, Signature};
use crate::source::SourceUnit;
use crate::tokens::{self, Token, TokenKind};
use crate::types::{MethodCandidate, ScanOutput};

/// Scans one source unit for method candidates.
///
/// A scanner holds no state between calls to [`Scanner::scan`], so separate
/// units can be scanned on separate threads.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    unit: SourceUnit<'a>,
    type_name: Option<String>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            unit: SourceUnit::new(text),
            type_name: None,
        }
    }

    /// Treat the unit as the body of type `name`, so top-level `name(...)`
    /// headers are recognized as constructors.
    #[must_use]
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn unit(&self) -> &SourceUnit<'a> {
        &self.unit
    }

    /// Classify the unit and find every method candidate.
    ///
    /// # Errors
    /// Returns [`MalformedSourceError`] on unbalanced braces or unterminated
    /// literals and comments. There is no partial result.
    pub fn scan(&self) -> Result<ScanOutput, MalformedSourceError> {
        let spans = lexer::classify(&self.unit)?;
        let tokens = tokens::tokenize(self.unit.text(), &spans);
        let methods = BoundaryWalk::new(&self.unit, &tokens, self.type_name.clone()).run()?;
        Ok(ScanOutput { spans, methods })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FrameKind {
    /// Named or anonymous type body (also the unit itself).
    Type { name: Option<String>, is_enum: bool },
    Method,
    Block,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Depth before this frame's `{`.
    baseline: usize,
    opened_at: usize,
    candidate: Option<usize>,
    /// Token index where the current header starts, one entry per open `(`
    /// plus the statement level.
    segments: Vec<usize>,
    /// Inside an enum body before the first `;`.
    enum_constants: bool,
}

impl Frame {
    fn new(kind: FrameKind, baseline: usize, opened_at: usize, first_token: usize) -> Self {
        let enum_constants = matches!(kind, FrameKind::Type { is_enum: true, .. });
        Self {
            kind,
            baseline,
            opened_at,
            candidate: None,
            segments: vec![first_token],
            enum_constants,
        }
    }

    fn header_start(&self) -> usize {
        self.segments.last().copied().unwrap_or_default()
    }

    fn restart_header(&mut self, token_index: usize) {
        if let Some(start) = self.segments.last_mut() {
            *start = token_index;
        }
    }

    fn type_name(&self) -> Option<&str> {
        match &self.kind {
            FrameKind::Type { name, .. } => name.as_deref(),
            FrameKind::Method | FrameKind::Block => None,
        }
    }
}

/// A candidate whose closing brace has not been seen yet.
struct Draft {
    signature: Signature,
    body_start: usize,
    end: Option<usize>,
    depth: usize,
    parent: Option<usize>,
}

struct BoundaryWalk<'u, 'a> {
    unit: &'u SourceUnit<'a>,
    tokens: &'u [Token],
    /// The unit itself; never closed.
    root: Frame,
    frames: Vec<Frame>,
    drafts: Vec<Draft>,
}

impl<'u, 'a> BoundaryWalk<'u, 'a> {
    fn new(unit: &'u SourceUnit<'a>, tokens: &'u [Token], type_name: Option<String>) -> Self {
        let root = Frame::new(
            FrameKind::Type {
                name: type_name,
                is_enum: false,
            },
            0,
            0,
            0,
        );
        Self {
            unit,
            tokens,
            root,
            frames: Vec::new(),
            drafts: Vec::new(),
        }
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }

    fn top(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().unwrap_or(&mut self.root)
    }

    fn run(mut self) -> Result<Vec<MethodCandidate>, MalformedSourceError> {
        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenBrace => self.open(index, token),
                TokenKind::CloseBrace => self.close(index, token)?,
                TokenKind::OpenParen => self.top_mut().segments.push(index + 1),
                TokenKind::CloseParen => {
                    let segments = &mut self.top_mut().segments;
                    if segments.len() > 1 {
                        segments.pop();
                    }
                }
                TokenKind::Punct(b';') => {
                    let frame = self.top_mut();
                    if frame.segments.len() == 1 {
                        frame.enum_constants = false;
                    }
                    frame.restart_header(index + 1);
                }
                TokenKind::Punct(b',') => {
                    let frame = self.top_mut();
                    if frame.segments.len() > 1 || frame.enum_constants {
                        frame.restart_header(index + 1);
                    }
                }
                _ => {}
            }
        }

        if let Some(frame) = self.frames.last() {
            return Err(self.unit.malformed(
                self.unit.len(),
                MalformedReason::UnclosedBrace {
                    opened_at: frame.opened_at,
                },
            ));
        }

        self.finish()
    }

    fn open(&mut self, index: usize, brace: &Token) {
        let tokens = self.tokens;
        let header = &tokens[self.top().header_start()..index];
        let (kind, signature) = self.resolve(header);
        let baseline = self.depth();
        trace!(offset = brace.start, baseline, kind = ?kind, "open frame");

        let mut frame = Frame::new(kind, baseline, brace.start, index + 1);
        if let Some(signature) = signature {
            let parent = self.frames.iter().rev().find_map(|frame| frame.candidate);
            let depth = self
                .frames
                .iter()
                .filter(|frame| frame.candidate.is_some())
                .count();
            frame.candidate = Some(self.drafts.len());
            self.drafts.push(Draft {
                signature,
                body_start: brace.start,
                end: None,
                depth,
                parent,
            });
        }
        self.frames.push(frame);
    }

    fn close(&mut self, index: usize, brace: &Token) -> Result<(), MalformedSourceError> {
        let Some(frame) = self.frames.pop() else {
            return Err(self
                .unit
                .malformed(brace.start, MalformedReason::UnbalancedClose));
        };
        debug_assert_eq!(frame.baseline, self.depth());
        trace!(offset = brace.start, baseline = frame.baseline, "close frame");

        if let Some(candidate) = frame.candidate {
            self.drafts[candidate].end = Some(brace.start);
        }
        self.top_mut().restart_header(index + 1);
        Ok(())
    }

    /// Decide what the brace after `header` opens.
    fn resolve(&self, header: &[Token]) -> (FrameKind, Option<Signature>) {
        let source = self.unit.text();
        let current = self.top();

        match signature::classify(header, source) {
            Header::Callable(signature) if signature.return_type.is_some() => {
                (FrameKind::Method, Some(signature))
            }
            Header::Callable(signature) if current.type_name() == Some(signature.name.as_str()) => {
                debug!(name = %signature.name, "skipping constructor");
                (FrameKind::Block, None)
            }
            _ if current.enum_constants && signature::is_enum_constant(header, source) => (
                FrameKind::Type {
                    name: None,
                    is_enum: false,
                },
                None,
            ),
            Header::Callable(signature) => {
                debug!(
                    name = %signature.name,
                    enclosing = ?current.type_name(),
                    "header has no return type; not a method"
                );
                (FrameKind::Block, None)
            }
            Header::Type { kind, name } => {
                let is_enum = kind == signature::TypeKind::Enum;
                (
                    FrameKind::Type {
                        name: Some(name),
                        is_enum,
                    },
                    None,
                )
            }
            Header::Anonymous => (
                FrameKind::Type {
                    name: None,
                    is_enum: false,
                },
                None,
            ),
            Header::Block => (FrameKind::Block, None),
        }
    }

    fn finish(self) -> Result<Vec<MethodCandidate>, MalformedSourceError> {
        let unit = self.unit;
        self.drafts
            .into_iter()
            .map(|draft| {
                let end = draft.end.ok_or_else(|| {
                    unit.malformed(
                        unit.len(),
                        MalformedReason::UnclosedBrace {
                            opened_at: draft.body_start,
                        },
                    )
                })?;
                let signature = draft.signature;
                Ok(MethodCandidate {
                    start_line: unit.line_of(signature.start),
                    end_line: unit.line_of(end),
                    name: signature.name,
                    signature: signature.text,
                    modifiers: signature.modifiers,
                    annotations: signature.annotations,
                    type_parameters: signature.type_parameters,
                    return_type: signature.return_type.unwrap_or_default(),
                    parameters: signature.parameters,
                    throws: signature.throws,
                    start: signature.start,
                    body_start: draft.body_start,
                    end,
                    depth: draft.depth,
                    parent: draft.parent,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
