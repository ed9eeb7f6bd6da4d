//! Error types for flight record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a flight record file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to drain an input stream.
    #[error("failed to read {source_name}: {source}")]
    StreamRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV data.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("CSV file is empty: {source_name}")]
    EmptyCsv { source_name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/flights.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/flights.csv");
    }
}
