//! Source file discovery for batch scans.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking with support
//! for a custom ignore file (`.carveignore`) and override globs.
//!
//! ## Walking modes
//!
//! - `LocalProject`: respects `.gitignore`, skips `.carve/`, supports `.carveignore`.
//!   Used for scanning a developer's working tree.
//! - `Raw`: disables the standard filters and walks every file, including
//!   ignored directories. Used for scanning unpacked datasets and cloned
//!   repositories where complete coverage matters.
//!
//! Both modes honor the include/exclude globs and test skipping of
//! [`ScanConfig`].

use std::path::{Path, PathBuf};

use carve_config::ScanConfig;
use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use tracing::{debug, warn};

use crate::error::IndexError;

/// Directory that holds project configuration; never scanned.
const CONFIG_DIR: &str = ".carve";

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Respects .gitignore, skips .carve/, supports .carveignore.
    #[default]
    LocalProject,
    /// No ignore files. For datasets where every file counts.
    Raw,
}

fn invalid_glob(glob: &str, source: ignore::Error) -> IndexError {
    IndexError::InvalidGlob {
        glob: glob.to_string(),
        source,
    }
}

fn build_overrides(root: &Path, config: &ScanConfig) -> Result<Option<Override>, IndexError> {
    if config.include_glob.is_none() && config.exclude_glob.is_none() {
        return Ok(None);
    }

    let mut overrides = OverrideBuilder::new(root);
    if let Some(glob) = config.include_glob.as_deref() {
        overrides
            .add(glob)
            .map_err(|source| invalid_glob(glob, source))?;
    }
    if let Some(glob) = config.exclude_glob.as_deref() {
        // Caller passes the raw pattern; negate it to exclude.
        overrides
            .add(&format!("!{glob}"))
            .map_err(|source| invalid_glob(glob, source))?;
    }
    let built = overrides.build().map_err(|source| {
        invalid_glob(
            config
                .include_glob
                .as_deref()
                .or(config.exclude_glob.as_deref())
                .unwrap_or_default(),
            source,
        )
    })?;
    Ok(Some(built))
}

/// Build a file walker over `root` with the given mode and filters.
///
/// # Errors
/// Returns [`IndexError::InvalidGlob`] if the include or exclude glob in
/// `config` does not compile.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use carve_config::ScanConfig;
/// use carve_index::walk::{build_walker, WalkMode};
///
/// let config = ScanConfig { skip_tests: true, ..ScanConfig::default() };
/// let walker = build_walker(Path::new("/path/to/project"), WalkMode::LocalProject, &config)
///     .expect("valid globs");
/// ```
pub fn build_walker(
    root: &Path,
    mode: WalkMode,
    config: &ScanConfig,
) -> Result<ignore::Walk, IndexError> {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::LocalProject => {
            builder.add_custom_ignore_filename(".carveignore");
        }
        WalkMode::Raw => {
            builder.standard_filters(false);
        }
    }
    builder.hidden(!config.hidden);
    if let Some(overrides) = build_overrides(root, config)? {
        builder.overrides(overrides);
    }

    let skip_tests = config.skip_tests;
    builder.filter_entry(move |entry| {
        let file_name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && mode == WalkMode::LocalProject && file_name == CONFIG_DIR {
            return false;
        }
        if !skip_tests || entry.depth() == 0 {
            return true;
        }
        if is_dir {
            !carve_parser::is_test_dir(&file_name)
        } else {
            !carve_parser::is_test_file(&file_name)
        }
    });

    Ok(builder.build())
}

/// Collect the source files under `roots`, sorted and deduplicated.
///
/// A root that is a file is taken as-is; directories are walked and filtered
/// to the configured extensions. Unreadable entries inside a walk are logged
/// and skipped.
///
/// # Errors
/// Returns [`IndexError::Io`] for a root that does not exist and
/// [`IndexError::InvalidGlob`] for a bad glob.
pub fn collect_sources(
    roots: &[PathBuf],
    mode: WalkMode,
    config: &ScanConfig,
) -> Result<Vec<PathBuf>, IndexError> {
    let mut sources = Vec::new();

    for root in roots {
        let metadata = std::fs::metadata(root).map_err(|source| IndexError::Io {
            path: root.clone(),
            source,
        })?;
        if metadata.is_file() {
            sources.push(root.clone());
            continue;
        }

        for entry in build_walker(root, mode, config)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, root = %root.display(), "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| config.accepts_extension(ext))
            {
                sources.push(path);
            }
        }
    }

    sources.sort();
    sources.dedup();
    debug!(count = sources.len(), roots = roots.len(), "collected source files");
    Ok(sources)
}
