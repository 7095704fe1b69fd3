//! # carve-index
//!
//! Batch method extraction over source trees.
//!
//! - [`walk`]: gitignore-aware discovery of source files (`.carveignore`,
//!   include/exclude globs, optional test skipping)
//! - [`batch`]: parallel extraction with per-file results, failures and totals

pub mod batch;
pub mod error;
pub mod walk;

pub use batch::{
    BatchReport, BatchStats, FileFailure, FileMethods, extract_batch, extract_file, scan_paths,
};
pub use error::IndexError;
pub use walk::{WalkMode, build_walker, collect_sources};
