//! Error types for the graph reformatting pipeline.
//!
//! - [`SourceError`] - reading and decoding the input file
//! - [`GraphError`] - top-level errors returned by [`crate::parse_graph`]
//!
//! Conversion is automatic via `From`, so `?` works across both layers.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while loading the input file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to open or read the file.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Graph Errors (top-level)
// =============================================================================

/// Top-level errors of the reformatting run.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Input could not be loaded.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Output could not be created or written.
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A later group has more data lines than the bootstrap group established.
    #[error("Line {line}: row index {index} out of range ({rows} rows established)")]
    RowOutOfRange { line: usize, index: usize, rows: usize },
}

impl GraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_converts_to_graph_error() {
        let source_err = SourceError::Io {
            path: PathBuf::from("output.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let graph_err: GraphError = source_err.into();
        let msg = graph_err.to_string();
        assert!(msg.contains("output.csv"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_row_out_of_range_format() {
        let err = GraphError::RowOutOfRange { line: 9, index: 4, rows: 4 };
        let msg = err.to_string();
        assert!(msg.contains("Line 9"));
        assert!(msg.contains("row index 4"));
        assert!(msg.contains("4 rows"));
    }
}
