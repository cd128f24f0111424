//! Error types for registration data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the attempted encodings produced a valid decode.
    #[error("could not decode {path} as any of: {tried}")]
    Decode { path: PathBuf, tried: String },

    /// Failed to parse decoded text as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Subscriber file has no recognizable email column.
    #[error("no email column found in {path}")]
    NoEmailColumn { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
