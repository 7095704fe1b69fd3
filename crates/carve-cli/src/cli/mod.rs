use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `carve` binary.
#[derive(Debug, Parser)]
#[command(
    name = "carve",
    version,
    about = "carve - method boundary extraction for Java-like sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `output.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max records to print
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color table output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Show progress bars on stderr
    #[arg(long, global = true, value_enum, default_value_t = ProgressMode::Auto)]
    pub progress: ProgressMode,
}

impl Cli {
    /// Merge command-line flags over the loaded configuration.
    ///
    /// # Errors
    /// Fails if the configured output format is not a known format.
    pub fn global_flags(&self, config: &carve_config::CarveConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.format).ok_or_else(|| {
                anyhow::anyhow!("unknown output format '{}'", config.output.format)
            })?,
        };
        Ok(GlobalFlags {
            format,
            limit: self.limit.or(config.output.limit),
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        })
    }
}
