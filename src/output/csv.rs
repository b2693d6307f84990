//! CSV output formatter

use super::common::escape_csv;
use super::Formatter;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, headers: &[String], rows: &[Vec<String>], no_header: bool) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        if !no_header {
            lines.push(join_escaped(headers));
        }
        for row in rows {
            lines.push(join_escaped(row));
        }
        lines.join("\n")
    }
}

fn join_escaped(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| escape_csv(c))
        .collect::<Vec<_>>()
        .join(",")
}
