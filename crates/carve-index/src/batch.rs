//! Parallel method extraction over many files.
//!
//! Files are independent, so each one is scanned on a rayon worker. A file
//! that fails (unreadable, malformed) becomes a [`FileFailure`] and never
//! aborts the batch. Results keep the order of the input paths.

use std::path::{Path, PathBuf};

use carve_config::ScanConfig;
use carve_parser::MethodRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::IndexError;
use crate::walk::{WalkMode, collect_sources};

/// Methods extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMethods {
    pub path: PathBuf,
    pub methods: Vec<MethodRecord>,
}

/// A file the batch could not extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub methods_found: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub files: Vec<FileMethods>,
    pub failures: Vec<FileFailure>,
    pub stats: BatchStats,
}

/// Extract the methods of a single file.
///
/// # Errors
/// Returns [`IndexError::Parser`] carrying the path when reading or scanning fails.
pub fn extract_file(path: &Path) -> Result<FileMethods, IndexError> {
    let methods =
        carve_parser::extract_methods_from_file(path).map_err(|source| IndexError::Parser {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(FileMethods {
        path: path.to_path_buf(),
        methods,
    })
}

/// Dedicated pool when one can be built, else rayon's global pool.
enum Workers {
    Pool(rayon::ThreadPool),
    Global,
}

impl Workers {
    fn new(threads: usize) -> Self {
        // `0` lets rayon pick one thread per core.
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("carve-scan-{idx}"))
            .build()
        {
            Ok(pool) => Self::Pool(pool),
            Err(error) => {
                warn!(%error, threads, "failed to build scan pool; using the global pool");
                Self::Global
            }
        }
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            Self::Pool(pool) => pool.install(op),
            Self::Global => op(),
        }
    }
}

/// Extract every file in `paths` on `threads` workers (`0` = one per core).
///
/// `on_file` runs once per finished file, from worker threads; the CLI uses
/// it to advance a progress bar.
pub fn extract_batch<F>(paths: &[PathBuf], threads: usize, on_file: F) -> BatchReport
where
    F: Fn(&Path) + Sync + Send,
{
    let results: Vec<Result<FileMethods, IndexError>> = Workers::new(threads).install(|| {
        paths
            .par_iter()
            .map(|path| {
                let result = extract_file(path);
                on_file(path);
                result
            })
            .collect()
    });

    let mut report = BatchReport::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(file) => {
                report.stats.methods_found += file.methods.len();
                report.files.push(file);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping file");
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error: error.to_string(),
                });
            }
        }
    }
    report.stats.files_scanned = paths.len();
    report.stats.files_failed = report.failures.len();

    info!(
        files = report.stats.files_scanned,
        failed = report.stats.files_failed,
        methods = report.stats.methods_found,
        "batch extraction finished"
    );
    report
}

/// Walk `roots` and extract every source file found.
///
/// # Errors
/// Returns an error only when the walk itself cannot start (missing root,
/// bad glob); per-file problems land in [`BatchReport::failures`].
pub fn scan_paths(
    roots: &[PathBuf],
    mode: WalkMode,
    config: &ScanConfig,
) -> Result<BatchReport, IndexError> {
    let sources = collect_sources(roots, mode, config)?;
    Ok(extract_batch(&sources, config.threads, |_| {}))
}
