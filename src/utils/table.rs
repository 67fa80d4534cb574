//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(UnicodeWidthStr::width(header)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header, separator and rows. Cells wider than their column are
    /// wrapped onto continuation lines.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_line(&mut out, &header);

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            self.render_line(&mut out, row);
        }

        out
    }

    fn render_line(&self, out: &mut String, row: &[String]) {
        let wrapped: Vec<Vec<String>> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                textwrap::wrap(cell, col.width.max(1))
                    .into_iter()
                    .map(|c| c.into_owned())
                    .collect()
            })
            .collect();

        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);

        for line in 0..height {
            for (i, col) in self.columns.iter().enumerate() {
                let text = wrapped[i].get(line).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(text, col.width));
                out.push(' ');
            }
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
    }
}

/// Left-align `s` in `width` terminal cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
