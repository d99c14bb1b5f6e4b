//! Output destinations for streaming writes
//!
//! `DataSink` is the write counterpart to `DataSource`: it names where
//! records go without committing the writer to a concrete stream type.
//! The pipeline opens two of these, one for accepted reads and one
//! (optionally) for rejected reads.

use std::path::{Path, PathBuf};

/// Output destination for streaming writes
///
/// Compression for local files is auto-detected from the extension when
/// the sink is opened by [`CompressedWriter`](crate::io::CompressedWriter):
/// `.gz` means gzip, anything else is written uncompressed.
#[derive(Debug, Clone)]
pub enum DataSink {
    /// Write to a local file path
    Local(PathBuf),

    /// Write to standard output (always uncompressed)
    Stdout,
}

impl DataSink {
    /// Create a sink from a file path
    ///
    /// # Example
    ///
    /// ```
    /// use readsift::io::DataSink;
    ///
    /// let sink = DataSink::from_path("passed.fastq.gz");
    /// assert!(sink.is_compressed());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::Local(path.as_ref().to_path_buf())
    }

    /// Create a sink for standard output
    pub fn stdout() -> Self {
        Self::Stdout
    }

    /// File extension, if this is a local file sink
    pub(crate) fn extension(&self) -> Option<&str> {
        match self {
            Self::Local(path) => path.extension().and_then(|s| s.to_str()),
            Self::Stdout => None,
        }
    }

    /// Check if this sink will be written compressed
    pub fn is_compressed(&self) -> bool {
        matches!(self.extension(), Some("gz" | "gzip"))
    }
}
