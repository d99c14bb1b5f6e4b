//! Error types for readsift

use thiserror::Error;

/// Result type alias for readsift operations
pub type Result<T> = std::result::Result<T, ReadsiftError>;

/// Error types that can occur in readsift
#[derive(Debug, Error)]
pub enum ReadsiftError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid FASTQ format
    #[error("Invalid FASTQ format at line {line}: {msg}")]
    InvalidFastqFormat {
        /// Line number where the error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Invalid pipeline configuration
    ///
    /// Configuration is validated up front; this error surfaces before
    /// any read is processed.
    #[error("invalid configuration for `{field}`: {msg}")]
    InvalidConfig {
        /// Name of the offending configuration field
        field: &'static str,
        /// Error message
        msg: String,
    },

    /// Statistics summary requested for a run that processed zero reads
    ///
    /// Percentages are undefined when `total == 0`. Callers should skip
    /// summary emission for an empty input stream.
    #[error("cannot summarize statistics: no reads were processed")]
    EmptyRun,
}
