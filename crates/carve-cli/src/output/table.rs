//! Aligned plain-text tables for row-shaped command output.
//!
//! Rows describe themselves through [`TableRow`]; columns appear in the order
//! the first row lists them, so a table reads like the struct it came from.

const SEPARATOR: &str = "  ";
const MIN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to shrink columns into.
    pub max_width: Option<usize>,
    pub color: bool,
}

/// One table cell. Numbers are right-aligned; flags are coloured when color is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(String),
    Flag(bool),
    Missing,
}

impl Cell {
    #[must_use]
    pub fn number(value: impl std::fmt::Display) -> Self {
        Self::Number(value.to_string())
    }

    fn plain(&self) -> String {
        match self {
            Self::Text(text) | Self::Number(text) => text.clone(),
            Self::Flag(flag) => flag.to_string(),
            Self::Missing => String::from("-"),
        }
    }

    const fn right_aligned(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    fn paint(&self, text: &str, color: bool) -> String {
        match self {
            Self::Flag(flag) if color => {
                let code = if *flag { "32" } else { "31" };
                format!("\u{1b}[{code}m{text}\u{1b}[0m")
            }
            _ => text.to_string(),
        }
    }
}

/// A value printable as one table row of `(column, cell)` pairs.
pub trait TableRow {
    fn cells(&self) -> Vec<(&'static str, Cell)>;
}

#[derive(Debug)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Columns are the union of every row's columns in first-seen order; a row
    /// lacking one shows `-`.
    #[must_use]
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        let mut headers: Vec<&'static str> = Vec::new();
        let keyed = rows
            .iter()
            .map(|row| {
                let cells = row.cells();
                for (header, _) in &cells {
                    if !headers.contains(header) {
                        headers.push(*header);
                    }
                }
                cells
            })
            .collect::<Vec<_>>();

        let rows = keyed
            .into_iter()
            .map(|mut cells| {
                headers
                    .iter()
                    .map(|header| {
                        cells
                            .iter()
                            .position(|(key, _)| key == header)
                            .map_or(Cell::Missing, |index| cells.swap_remove(index).1)
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.plain().chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
            })
            .collect::<Vec<_>>();
        if let Some(max_width) = options.max_width {
            shrink(&mut widths, &self.headers, max_width);
        }

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| {
                let text = clip(header, *width);
                let fill = width.saturating_sub(text.chars().count());
                format!("{text}{}", " ".repeat(fill))
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let rule = "-".repeat(header_line.chars().count());

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(header_line.trim_end().to_string());
        lines.push(rule);
        for row in &self.rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let text = clip(&cell.plain(), *width);
                    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
                    let painted = cell.paint(&text, options.color);
                    if cell.right_aligned() {
                        format!("{fill}{painted}")
                    } else {
                        format!("{painted}{fill}")
                    }
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

/// Take the overflow out of the widest column that is still above its floor,
/// repeating until the table fits or nothing can shrink.
fn shrink(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = SEPARATOR.len() * widths.len().saturating_sub(1);
    let floor = |index: usize| headers[index].chars().count().max(MIN_WIDTH);

    loop {
        let total = widths.iter().sum::<usize>() + separators;
        let overflow = total.saturating_sub(max_width);
        if overflow == 0 {
            return;
        }
        let Some(index) = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index)
        else {
            return;
        };
        widths[index] -= overflow.min(widths[index] - floor(index));
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}
