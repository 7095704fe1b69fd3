//! Core data types produced by a scan.

mod method;
mod span;

pub use method::{MethodCandidate, MethodRecord, ScanOutput};
pub use span::{LexicalSpan, SpanKind};
