//! CSV loading into in-memory row maps.

use std::collections::BTreeMap;
use std::path::Path;

use crate::decode::read_to_string;
use crate::error::{IngestError, Result};

/// A fully loaded CSV table: trimmed headers plus one map per row.
///
/// Cell values are kept verbatim; normalization happens at the point of
/// comparison, not on read.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl RawTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the table carries the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// All values of one column in source order, empty string for rows
    /// where the cell is absent.
    pub fn column(&self, name: &str) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(name).map(String::as_str).unwrap_or_default())
            .collect()
    }
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Read a CSV file into a [`RawTable`], decoding through the encoding
/// fallback chain first.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let decoded = read_to_string(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(decoded.text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.to_string());
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        encoding = decoded.encoding,
        rows = rows.len(),
        columns = headers.len(),
        "loaded csv table"
    );

    Ok(RawTable { headers, rows })
}
