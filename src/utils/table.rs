//! Table rendering utilities for CLI outputs.
//! Widths are computed on the visible text: ANSI escapes are stripped and
//! wide glyphs counted via unicode-width, so colored cells stay aligned.

use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
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

    fn pad_cell(text: &str, width: usize) -> String {
        let fill = width.saturating_sub(display_width(text));
        format!("{}{} ", text, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad_cell(&col.header, col.width));
        }
        out.push('\n');

        // Separator
        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&Self::pad_cell(&row[i], col.width));
            }
            out.push('\n');
        }

        out
    }
}
