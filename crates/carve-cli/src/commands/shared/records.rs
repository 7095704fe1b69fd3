use carve_parser::MethodRecord;
use serde::Serialize;

use crate::output::{Cell, TableRow};

/// One method as printed by `extract` and `scan`.
#[derive(Debug, Serialize)]
pub struct MethodRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub name: String,
    pub signature: String,
    pub start_line: u32,
    pub end_line: u32,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MethodRow {
    pub fn new(record: MethodRecord, file: Option<String>, include_text: bool) -> Self {
        Self {
            file,
            name: record.name,
            signature: record.signature,
            start_line: record.start_line,
            end_line: record.end_line,
            depth: record.depth,
            text: include_text.then_some(record.text),
        }
    }
}

impl TableRow for MethodRow {
    fn cells(&self) -> Vec<(&'static str, Cell)> {
        let mut cells = Vec::with_capacity(7);
        if let Some(file) = &self.file {
            cells.push(("file", Cell::Text(file.clone())));
        }
        cells.extend([
            ("name", Cell::Text(self.name.clone())),
            ("signature", Cell::Text(self.signature.clone())),
            ("start_line", Cell::number(self.start_line)),
            ("end_line", Cell::number(self.end_line)),
            ("depth", Cell::number(self.depth)),
        ]);
        if let Some(text) = &self.text {
            cells.push(("text", Cell::Text(single_line(text))));
        }
        cells
    }
}

/// Method text spans lines; a table cell keeps it on one.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
