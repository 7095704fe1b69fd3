use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract method records from one source file.
    Extract(ExtractArgs),
    /// Show the lexical span partition of one source file.
    Spans(SpansArgs),
    /// Extract methods from every source file under the given paths.
    Scan(ScanArgs),
    /// Check whether a snippet is exactly one method or constructor.
    Check(CheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Source file, or `-` for stdin.
    pub input: String,
    /// Enclosing type name for constructor detection (defaults to the file stem).
    #[arg(short = 't', long)]
    pub type_name: Option<String>,
    /// Omit method source text from records.
    #[arg(long)]
    pub no_text: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SpansArgs {
    /// Source file, or `-` for stdin.
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Files or directories to scan.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Skip test sources and test directories.
    #[arg(long)]
    pub skip_tests: bool,
    /// Only scan paths matching this glob.
    #[arg(long)]
    pub include: Option<String>,
    /// Never scan paths matching this glob.
    #[arg(long)]
    pub exclude: Option<String>,
    /// Ignore .gitignore and .carveignore files.
    #[arg(long)]
    pub no_ignore: bool,
    /// Worker threads (0 = one per core).
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
    /// Print per-file method counts instead of records.
    #[arg(short = 'c', long)]
    pub count: bool,
    /// Omit method source text from records.
    #[arg(long)]
    pub no_text: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Snippet file, or `-` for stdin.
    pub input: String,
}
