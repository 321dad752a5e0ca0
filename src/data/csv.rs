//! Delimited-text input: header line plus comma-separated records.

use std::path::Path;

use crate::{
    data::row::{Dataset, RawValue, Row},
    foundation::error::{DatapaintError, DatapaintResult},
};

/// Parses CSV text into a [`Dataset`], keeping `text` verbatim for the palette.
pub fn parse_csv_str(text: &str) -> DatapaintResult<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatapaintError::input(format!("read csv header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(DatapaintError::input("csv input has no header"));
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| DatapaintError::input(format!("read csv record {}: {e}", line + 1)))?;
        let mut row = Row::new();
        for (name, cell) in headers.iter().zip(record.iter()) {
            row.push(name.as_str(), RawValue::infer(cell));
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows, text))
}

pub fn read_csv_path(path: &Path) -> DatapaintResult<Dataset> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DatapaintError::input(format!("read csv '{}': {e}", path.display()))
    })?;
    parse_csv_str(&text)
}

#[cfg(test)]
#[path = "../../tests/unit/data/csv.rs"]
mod tests;
