//! Two-column text tables for printing an expanded schedule.
//!
//! ```text
//! +--------------+---------------+
//! | minute       | 0 15 30 45    |
//! +--------------+---------------+
//! | command      | /usr/bin/find |
//! +--------------+---------------+
//! ```
//!
//! Values wider than the table allows are wrapped on spaces; single words that
//! still do not fit are split.

use std::fmt;

/// Default total width of a rendered table, borders included.
pub const DEFAULT_MAX_WIDTH: usize = 80;

// Characters taken by the borders and padding of a row: "| " + " | " + " |".
const DECORATION_WIDTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<(String, String)>,
    max_width: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Limits the total width of the table. Only the value column shrinks.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    fn column_widths(&self) -> (usize, usize) {
        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let value_width = self
            .rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or(0);
        let available = self
            .max_width
            .saturating_sub(label_width + DECORATION_WIDTH)
            .max(1);
        (label_width, value_width.min(available))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }

        let (label_width, value_width) = self.column_widths();
        let separator = format!(
            "+{}+{}+",
            "-".repeat(label_width + 2),
            "-".repeat(value_width + 2)
        );

        writeln!(f, "{separator}")?;
        for (label, value) in &self.rows {
            for (i, line) in wrap(value, value_width).iter().enumerate() {
                let label = if i == 0 { label.as_str() } else { "" };
                writeln!(f, "| {label:<label_width$} | {line:<value_width$} |")?;
            }
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

// Breaks `text` into lines of at most `width` characters. Always returns at least one line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let line_len = line.chars().count();
        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
