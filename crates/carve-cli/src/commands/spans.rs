use anyhow::Context;
use carve_parser::{SourceUnit, SpanKind};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SpansArgs;
use crate::commands::shared::input::read_input;
use crate::commands::shared::limit::apply_limit;
use crate::output::{Cell, TableRow, output_rows};

#[derive(Debug, Serialize)]
struct SpanRow {
    kind: SpanKind,
    start: usize,
    end: usize,
    line: u32,
}

impl TableRow for SpanRow {
    fn cells(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("kind", Cell::Text(self.kind.to_string())),
            ("start", Cell::number(self.start)),
            ("end", Cell::number(self.end)),
            ("line", Cell::number(self.line)),
        ]
    }
}

/// Handle `carve spans`.
pub fn handle(args: &SpansArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let unit = SourceUnit::new(&input.text);
    let spans = carve_parser::lexer::classify(&unit)
        .with_context(|| format!("failed to classify {}", input.label))?;

    let mut rows = spans
        .iter()
        .map(|span| SpanRow {
            kind: span.kind,
            start: span.start,
            end: span.end,
            line: unit.line_of(span.start),
        })
        .collect::<Vec<_>>();
    apply_limit(&mut rows, flags.limit);

    output_rows(&rows, flags.format)
}
