//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod table;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::vtm::{NameRow, TableRow};

pub use self::common::{escape_csv, format_raw, to_json, to_yaml};
pub use self::csv::CsvFormatter;
pub use self::table::TableFormatter;

/// Trait for row-oriented text formatters
pub trait Formatter {
    /// Render rows of cells under the given headers
    fn format(&self, headers: &[String], rows: &[Vec<String>], no_header: bool) -> String;
}

/// Render projected rows in the requested format
pub fn format_rows<T>(rows: &[T], format: &OutputFormat, no_header: bool) -> Result<String>
where
    T: TableRow + Serialize,
{
    let cells = || rows.iter().map(TableRow::cells).collect::<Vec<_>>();
    match format {
        OutputFormat::Table => Ok(TableFormatter.format(&T::headers(), &cells(), no_header)),
        OutputFormat::Csv => Ok(CsvFormatter.format(&T::headers(), &cells(), no_header)),
        OutputFormat::Json => to_json(rows),
        OutputFormat::Yaml => to_yaml(rows),
    }
}

/// Render a single-column name listing
pub fn format_names(
    header: &str,
    names: &[String],
    format: &OutputFormat,
    no_header: bool,
) -> Result<String> {
    let headers = vec![header.to_string()];
    let cells: Vec<Vec<String>> = names.iter().map(|n| vec![n.clone()]).collect();
    let rows: Vec<NameRow> = names
        .iter()
        .map(|n| NameRow { name: n.clone() })
        .collect();

    match format {
        OutputFormat::Table => Ok(TableFormatter.format(&headers, &cells, no_header)),
        OutputFormat::Csv => Ok(CsvFormatter.format(&headers, &cells, no_header)),
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Yaml => to_yaml(&rows),
    }
}
