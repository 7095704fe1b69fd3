//! Index error types for carve-index.

use std::path::PathBuf;

/// Errors from walking and batch extraction.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// An include or exclude glob could not be compiled.
    #[error("invalid glob '{glob}': {source}")]
    InvalidGlob {
        glob: String,
        #[source]
        source: ignore::Error,
    },

    /// A scan root does not exist or cannot be read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extraction failed for a single file given directly.
    #[error("{}: {source}", path.display())]
    Parser {
        path: PathBuf,
        #[source]
        source: carve_parser::ParserError,
    },
}
