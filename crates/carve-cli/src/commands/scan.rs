use carve_config::{CarveConfig, ScanConfig};
use carve_index::{BatchStats, FileFailure, WalkMode};
use serde::Serialize;

use crate::cli::root_commands::ScanArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::records::MethodRow;
use crate::output::{Cell, TableRow, output_json, output_rows};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CountEntry {
    path: String,
    methods: usize,
}

impl TableRow for CountEntry {
    fn cells(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("path", Cell::Text(self.path.clone())),
            ("methods", Cell::number(self.methods)),
        ]
    }
}

#[derive(Debug, Serialize)]
struct CountResponse {
    counts: Vec<CountEntry>,
    failures: Vec<FileFailure>,
    stats: BatchStats,
}

#[derive(Debug, Serialize)]
struct ScanResponse {
    methods: Vec<MethodRow>,
    failures: Vec<FileFailure>,
    stats: BatchStats,
}

/// Command-line scan flags layered over the `scan` config section.
fn scan_config(args: &ScanArgs, config: &CarveConfig) -> ScanConfig {
    let mut scan = config.scan.clone();
    scan.skip_tests |= args.skip_tests;
    if args.include.is_some() {
        scan.include_glob.clone_from(&args.include);
    }
    if args.exclude.is_some() {
        scan.exclude_glob.clone_from(&args.exclude);
    }
    if let Some(threads) = args.threads {
        scan.threads = threads;
    }
    scan
}

/// Handle `carve scan`.
pub fn handle(args: &ScanArgs, config: &CarveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scan = scan_config(args, config);
    let mode = if args.no_ignore {
        WalkMode::Raw
    } else {
        WalkMode::LocalProject
    };

    let spinner = Progress::spinner("collecting source files");
    let sources = carve_index::collect_sources(&args.paths, mode, &scan)?;
    spinner.finish_clear();

    let progress = Progress::bar(
        u64::try_from(sources.len()).unwrap_or(u64::MAX),
        "extracting",
    );
    let report = carve_index::extract_batch(&sources, scan.threads, |_| progress.inc(1));
    progress.finish_ok(&format!(
        "{} methods in {} files",
        report.stats.methods_found, report.stats.files_scanned
    ));

    if args.count {
        let mut counts = report
            .files
            .iter()
            .map(|file| CountEntry {
                path: file.path.display().to_string(),
                methods: file.methods.len(),
            })
            .collect::<Vec<_>>();
        apply_limit(&mut counts, flags.limit);
        if flags.format == OutputFormat::Table {
            output_rows(&counts, flags.format)?;
            print_summary(&report.stats, flags);
            return Ok(());
        }
        return output_json(
            &CountResponse {
                counts,
                failures: report.failures,
                stats: report.stats,
            },
            flags.format,
        );
    }

    let include_text = config.output.include_text && !args.no_text;
    let mut methods = report
        .files
        .into_iter()
        .flat_map(|file| {
            let path = file.path.display().to_string();
            file.methods
                .into_iter()
                .map(move |record| MethodRow::new(record, Some(path.clone()), include_text))
        })
        .collect::<Vec<_>>();
    apply_limit(&mut methods, flags.limit);

    if flags.format == OutputFormat::Table {
        output_rows(&methods, flags.format)?;
        print_summary(&report.stats, flags);
        return Ok(());
    }

    output_json(
        &ScanResponse {
            methods,
            failures: report.failures,
            stats: report.stats,
        },
        flags.format,
    )
}

/// Tables carry no totals; they go to stderr.
fn print_summary(stats: &BatchStats, flags: &GlobalFlags) {
    if !flags.quiet {
        eprintln!(
            "{} files, {} failed, {} methods",
            stats.files_scanned, stats.files_failed, stats.methods_found
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use carve_config::CarveConfig;

    use super::{CountEntry, scan_config};
    use crate::cli::root_commands::ScanArgs;
    use crate::output::{Cell, TableRow};

    fn args() -> ScanArgs {
        ScanArgs {
            paths: vec![PathBuf::from("src")],
            skip_tests: false,
            include: None,
            exclude: None,
            no_ignore: false,
            threads: None,
            count: false,
            no_text: false,
        }
    }

    #[test]
    fn config_values_survive_when_flags_are_absent() {
        let mut config = CarveConfig::default();
        config.scan.skip_tests = true;
        config.scan.include_glob = Some(String::from("*.java"));
        config.scan.threads = 3;

        let scan = scan_config(&args(), &config);
        assert!(scan.skip_tests);
        assert_eq!(scan.include_glob.as_deref(), Some("*.java"));
        assert_eq!(scan.threads, 3);
    }

    #[test]
    fn flags_override_config() {
        let config = CarveConfig::default();
        let args = ScanArgs {
            skip_tests: true,
            exclude: Some(String::from("gen/")),
            threads: Some(1),
            ..args()
        };

        let scan = scan_config(&args, &config);
        assert!(scan.skip_tests);
        assert_eq!(scan.exclude_glob.as_deref(), Some("gen/"));
        assert_eq!(scan.threads, 1);
    }

    #[test]
    fn count_rows_list_path_before_methods() {
        let entry = CountEntry {
            path: String::from("src/A.java"),
            methods: 2,
        };
        assert_eq!(
            entry.cells(),
            vec![
                ("path", Cell::Text(String::from("src/A.java"))),
                ("methods", Cell::number(2)),
            ]
        );
    }
}
