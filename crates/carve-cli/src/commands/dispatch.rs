use carve_config::CarveConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &CarveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => commands::extract::handle(args, config, flags),
        Commands::Spans(args) => commands::spans::handle(args, flags),
        Commands::Scan(args) => commands::scan::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, flags),
    }
}
