//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so port names with Norwegian
//! letters and colored cells line up. A cell may span several lines.

use super::formatting::{pad_right, visible_width};

pub struct Column {
    pub header: String,
    /// Minimum width; grows with the content.
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        let width = visible_width(&header);
        Self { header, width }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .flat_map(|cell| cell.lines())
                    .map(visible_width)
                    .max()
                    .unwrap_or(0)
                    .max(col.width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(&c.header, *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<&str>> = (0..self.columns.len())
                .map(|i| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    let lines: Vec<&str> = cell.lines().collect();
                    if lines.is_empty() { vec![""] } else { lines }
                })
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line_no in 0..height {
                let line: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(lines, w)| pad_right(lines.get(line_no).copied().unwrap_or(""), *w))
                    .collect();
                out.push_str(line.join(" ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}
