//! Common utilities for output formatters

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize any value as indented JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize any value as YAML
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .map_err(|e| crate::error::VtmError::Parse(format!("YAML serialization failed: {}", e)))
}

/// Render the raw configuration of a single instance
///
/// YAML when requested, indented JSON otherwise.
pub fn format_raw(raw: &serde_json::Value, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => to_yaml(raw),
        _ => to_json(raw),
    }
}
