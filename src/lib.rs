//! readsift: streaming FASTQ read trimming and filtering
//!
//! # Overview
//!
//! readsift decodes per-base Phred+33 quality, applies a configurable
//! chain of trimming operations, evaluates each read against length and
//! GC-content acceptance criteria, and accumulates run-wide statistics,
//! all over a constant-memory record stream.
//!
//! ## Per-read pipeline
//!
//! decode quality → trim (in configured order) → approve → count → route
//! to the accepted or rejected sink.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readsift::io::DataSink;
//! use readsift::{ApproveOn, FastqStream, FastqWriter, FilterConfig, Pipeline, TrimStep};
//!
//! # fn main() -> readsift::Result<()> {
//! let config = FilterConfig {
//!     min_length: 50,
//!     gc_bounds: (30.0, 70.0),
//!     trim_steps: vec![TrimStep::Trailing { min_quality: 20 }],
//!     approve_on: ApproveOn::Trimmed,
//!     keep_filtered: false,
//!     emit_stats: true,
//! };
//!
//! let pipeline = Pipeline::new(config)?;
//! let source = FastqStream::from_path("reads.fastq.gz")?;
//! let accepted = FastqWriter::new(DataSink::from_path("reads__passed.fastq"))?;
//!
//! let stats = pipeline.run(source, accepted, None)?;
//! if stats.total > 0 {
//!     print!("{}", stats.summary()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`io`]: streaming FASTQ parsing and writing with gzip support
//! - [`operations`]: quality decoding, GC content, the five trimmers
//! - [`filter`]: per-read approval against length/GC criteria
//! - [`stats`]: run-wide counters and the textual summary
//! - [`pipeline`]: configuration and the per-read driver
//!
//! ## Scope
//!
//! Phred+33 is the only supported quality encoding, and FASTQ the only
//! format. Argument parsing and batch orchestration live outside this
//! library; it consumes a validated [`FilterConfig`] instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod filter;
pub mod io;
pub mod operations;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{ReadsiftError, Result};
pub use filter::{FilterCriteria, ReadReport};
pub use io::{FastqStream, FastqWriter};
pub use pipeline::{ApproveOn, FilterConfig, Pipeline, TrimStep};
pub use stats::RunStatistics;
pub use types::FastqRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
