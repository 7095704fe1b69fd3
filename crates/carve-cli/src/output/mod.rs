use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::{Cell, TableRow};

/// Print a list of rows: pretty JSON array, compact JSON, or a table.
pub fn output_rows<R>(rows: &[R], format: OutputFormat) -> anyhow::Result<()>
where
    R: Serialize + TableRow,
{
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

/// Print a single response. As a table it is one row.
pub fn output_record<R>(record: &R, format: OutputFormat) -> anyhow::Result<()>
where
    R: Serialize + TableRow,
{
    println!("{}", render_rows_or(record, std::slice::from_ref(record), format)?);
    Ok(())
}

/// Print a report that has no table view. `Table` prints pretty JSON.
pub fn output_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_json(value, format)?);
    Ok(())
}

fn render_rows<R>(rows: &[R], format: OutputFormat) -> anyhow::Result<String>
where
    R: Serialize + TableRow,
{
    render_rows_or(rows, rows, format)
}

fn render_rows_or<T, R>(value: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    R: TableRow,
{
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json | OutputFormat::Raw => render_json(value, format),
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(value)?,
    })
}

fn render_table<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let prefs = ui::prefs();
    table::Table::from_rows(rows).render(table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{Cell, TableRow, render_json, render_rows, render_rows_or};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        start_line: u32,
        text: &'static str,
    }

    impl TableRow for Row {
        fn cells(&self) -> Vec<(&'static str, Cell)> {
            vec![
                ("name", Cell::Text(self.name.to_string())),
                ("start_line", Cell::number(self.start_line)),
                ("text", Cell::Text(self.text.replace('\n', " "))),
            ]
        }
    }

    fn row() -> Row {
        Row {
            name: "run",
            start_line: 42,
            text: "void run() {\n}",
        }
    }

    #[test]
    fn json_rows_are_a_pretty_array() {
        let out = render_rows(&[row()], OutputFormat::Json).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["name"], "run");
        assert_eq!(parsed[0]["start_line"], 42);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_is_single_line_json() {
        let out = render_json(&row(), OutputFormat::Raw).expect("raw render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["text"], "void run() {\n}");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_columns_keep_field_order() {
        let out = render_rows(&[row(), row()], OutputFormat::Table).expect("table render");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name  start_line  text");
        assert_eq!(lines[2], "run           42  void run() { }");
    }

    #[test]
    fn record_is_an_object_in_json_and_one_row_in_a_table() {
        let record = row();
        let json = render_rows_or(&record, std::slice::from_ref(&record), OutputFormat::Json)
            .expect("json render");
        assert!(json.trim_start().starts_with('{'));

        let table = render_rows_or(&record, std::slice::from_ref(&record), OutputFormat::Table)
            .expect("table render");
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let out = render_rows(&rows, OutputFormat::Table).expect("table render");
        assert_eq!(out, "(no rows)");
    }
}
