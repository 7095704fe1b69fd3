//! # carve-parser
//!
//! Method boundary extraction for Java-like source text.
//!
//! A single pass per source unit:
//! - the lexer partitions the text into code, literal and comment spans
//! - the scanner walks code braces with an explicit frame stack, classifying
//!   the header before each `{` as a method, constructor, type body or block
//! - every method body becomes a [`MethodCandidate`] with its exact byte
//!   range, 1-based lines and nesting relation
//!
//! Unbalanced braces and unterminated literals fail the whole unit with a
//! [`MalformedSourceError`]; there is no partial result.

pub mod error;
pub mod lexer;
pub mod types;

mod extract;
mod scanner;
mod signature;
mod source;
mod test_files;
mod tokens;
mod validator;

pub use error::{MalformedReason, MalformedSourceError, ParserError};
pub use extract::{extract_methods, extract_methods_from_file, extract_methods_in};
pub use scanner::Scanner;
pub use source::SourceUnit;
pub use test_files::{is_test_dir, is_test_file};
pub use types::{LexicalSpan, MethodCandidate, MethodRecord, ScanOutput, SpanKind};
pub use validator::is_single_method;
