//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::Formatter;

/// Formatter for plain text tables
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, headers: &[String], rows: &[Vec<String>], no_header: bool) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !no_header {
            table.set_header(headers.to_vec());
        }

        for row in rows {
            table.add_row(row.clone());
        }

        table.to_string()
    }
}
