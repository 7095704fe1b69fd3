use anyhow::Context;
use carve_config::CarveConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::shared::input::read_input;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::records::MethodRow;
use crate::output::output_rows;

/// Handle `carve extract`.
pub fn handle(args: &ExtractArgs, config: &CarveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let type_name = args.type_name.as_deref().or(input.stem.as_deref());

    let records = carve_parser::extract_methods_in(&input.text, type_name)
        .with_context(|| format!("failed to extract methods from {}", input.label))?;
    tracing::debug!(file = %input.label, methods = records.len(), "extracted");

    let include_text = config.output.include_text && !args.no_text;
    let mut rows = records
        .into_iter()
        .map(|record| MethodRow::new(record, None, include_text))
        .collect::<Vec<_>>();
    apply_limit(&mut rows, flags.limit);

    output_rows(&rows, flags.format)
}
