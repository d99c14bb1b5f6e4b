//! I/O module: streaming FASTQ parsing, writing, and compression
//!
//! All readers and writers hold one record's worth of data at a time, so
//! memory stays constant regardless of input size.

pub mod compression;
mod fastq;
pub mod sink;

pub use compression::{CompressedReader, CompressedWriter, DataSource, MMAP_THRESHOLD};
pub use fastq::{FastqStream, FastqWriter};
pub use sink::DataSink;
