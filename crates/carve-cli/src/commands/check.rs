use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::shared::input::read_input;
use crate::output::{Cell, TableRow, output_record};

#[derive(Debug, Serialize)]
struct CheckResponse {
    input: String,
    single_method: bool,
}

impl TableRow for CheckResponse {
    fn cells(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("input", Cell::Text(self.input.clone())),
            ("single_method", Cell::Flag(self.single_method)),
        ]
    }
}

/// Handle `carve check`.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let single_method = carve_parser::is_single_method(&input.text);
    output_record(
        &CheckResponse {
            input: input.label,
            single_method,
        },
        flags.format,
    )
}
