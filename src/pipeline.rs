//! Per-read processing pipeline
//!
//! Orchestrates the sequence each read goes through: apply the configured
//! trimming steps in order, approve against the filter criteria, update
//! the run statistics, then route the read to the accepted sink or (when
//! `keep_filtered` is set) the rejected sink.
//!
//! Processing is single-threaded and synchronous: each read is fully
//! trimmed, approved, and counted before the next is pulled from the
//! source, and all of a read's side effects happen only after its whole
//! transformation chain. Aborting mid-stream therefore leaves the output
//! files valid with partial statistics.
//!
//! # Example
//!
//! ```no_run
//! use readsift::io::DataSink;
//! use readsift::{ApproveOn, FastqStream, FastqWriter, FilterConfig, Pipeline, TrimStep};
//!
//! # fn main() -> readsift::Result<()> {
//! let config = FilterConfig {
//!     min_length: 30,
//!     gc_bounds: (20.0, 80.0),
//!     trim_steps: vec![
//!         TrimStep::Headcrop { length: 5 },
//!         TrimStep::SlidingWindow { min_avg_quality: 20, window_size: 4 },
//!     ],
//!     approve_on: ApproveOn::Trimmed,
//!     keep_filtered: true,
//!     emit_stats: true,
//! };
//!
//! let pipeline = Pipeline::new(config)?;
//! let source = FastqStream::from_path("reads.fastq.gz")?;
//! let accepted = FastqWriter::new(DataSink::from_path("reads__passed.fastq"))?;
//! let rejected = FastqWriter::new(DataSink::from_path("reads__failed.fastq"))?;
//!
//! let stats = pipeline.run(source, accepted, Some(rejected))?;
//! if pipeline.config().emit_stats && stats.total > 0 {
//!     print!("{}", stats.summary()?);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{ReadsiftError, Result};
use crate::filter::FilterCriteria;
use crate::io::FastqWriter;
use crate::operations::trimming::{
    crop, headcrop, trim_leading, trim_sliding_window, trim_trailing,
};
use crate::stats::RunStatistics;
use crate::types::FastqRecord;

/// One configured trimming directive
///
/// Steps run in the order the caller lists them, and order changes
/// results; the pipeline never reorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimStep {
    /// Keep the first `length` bases
    Crop {
        /// Number of bases to keep
        length: usize,
    },
    /// Drop the first `length` bases
    Headcrop {
        /// Number of bases to drop
        length: usize,
    },
    /// Cut at the first base (left to right) below `min_quality`
    Trailing {
        /// Minimum per-base quality score
        min_quality: u8,
    },
    /// Keep the suffix after the last base below `min_quality`
    Leading {
        /// Minimum per-base quality score
        min_quality: u8,
    },
    /// Cut at the first window whose mean quality drops below threshold
    SlidingWindow {
        /// Minimum mean quality for a window
        min_avg_quality: u8,
        /// Number of bases per window
        window_size: usize,
    },
}

impl TrimStep {
    /// Apply this step to a record, producing the trimmed record
    pub fn apply(&self, record: &FastqRecord) -> FastqRecord {
        match *self {
            TrimStep::Crop { length } => crop(record, length),
            TrimStep::Headcrop { length } => headcrop(record, length),
            TrimStep::Trailing { min_quality } => trim_trailing(record, min_quality),
            TrimStep::Leading { min_quality } => trim_leading(record, min_quality),
            TrimStep::SlidingWindow {
                min_avg_quality,
                window_size,
            } => trim_sliding_window(record, min_avg_quality, window_size),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            TrimStep::Crop { .. } | TrimStep::Headcrop { .. } => Ok(()),
            TrimStep::Trailing { min_quality } | TrimStep::Leading { min_quality } => {
                if min_quality == 0 {
                    return Err(ReadsiftError::InvalidConfig {
                        field: "min_quality",
                        msg: "quality threshold must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
            TrimStep::SlidingWindow {
                min_avg_quality,
                window_size,
            } => {
                if min_avg_quality == 0 {
                    return Err(ReadsiftError::InvalidConfig {
                        field: "min_avg_quality",
                        msg: "quality threshold must be at least 1".to_string(),
                    });
                }
                if window_size == 0 {
                    return Err(ReadsiftError::InvalidConfig {
                        field: "window_size",
                        msg: "window size must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

/// Which read state the approver evaluates
///
/// The choice must be explicit: filtering on the trimmed read reflects
/// the output actually written (recommended), filtering on the raw read
/// matches tools that select reads before any trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproveOn {
    /// Approve the read as it arrived, before trimming
    Raw,
    /// Approve the read after all trimming steps (recommended)
    Trimmed,
}

/// Validated configuration for one filtering run
///
/// Supplied by the caller (typically a CLI layer, which is outside this
/// library); [`Pipeline::new`] rejects invalid values before any read is
/// processed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Minimum acceptable read length (inclusive)
    pub min_length: usize,
    /// Inclusive GC percentage bounds, `(min, max)`, each in `[0, 100]`
    pub gc_bounds: (f64, f64),
    /// Trimming steps, applied in order
    pub trim_steps: Vec<TrimStep>,
    /// Whether approval sees the raw or the trimmed read
    pub approve_on: ApproveOn,
    /// Write rejected reads to the rejected sink instead of discarding
    pub keep_filtered: bool,
    /// Whether the caller intends to render the statistics summary
    pub emit_stats: bool,
}

impl FilterConfig {
    /// Check every field, naming the first offending one
    ///
    /// Both GC bounds are validated independently against `[0, 100]` in
    /// addition to requiring `min <= max`.
    pub fn validate(&self) -> Result<()> {
        let (gc_min, gc_max) = self.gc_bounds;
        if !(0.0..=100.0).contains(&gc_min) {
            return Err(ReadsiftError::InvalidConfig {
                field: "gc_bounds",
                msg: format!("lower bound {gc_min} is outside [0, 100]"),
            });
        }
        if !(0.0..=100.0).contains(&gc_max) {
            return Err(ReadsiftError::InvalidConfig {
                field: "gc_bounds",
                msg: format!("upper bound {gc_max} is outside [0, 100]"),
            });
        }
        if gc_min > gc_max {
            return Err(ReadsiftError::InvalidConfig {
                field: "gc_bounds",
                msg: format!("lower bound {gc_min} exceeds upper bound {gc_max}"),
            });
        }

        for step in &self.trim_steps {
            step.validate()?;
        }

        Ok(())
    }
}

/// Per-read driver: trim, approve, count, route
pub struct Pipeline {
    config: FilterConfig,
    criteria: FilterCriteria,
}

impl Pipeline {
    /// Build a pipeline from a configuration, validating it first
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        let criteria = FilterCriteria::new(config.min_length, config.gc_bounds.0, config.gc_bounds.1);
        Ok(Self { config, criteria })
    }

    /// The validated configuration this pipeline runs with
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Trim one record through every configured step, in order
    pub fn trim(&self, record: &FastqRecord) -> FastqRecord {
        let mut current = record.clone();
        for step in &self.config.trim_steps {
            current = step.apply(&current);
        }
        current
    }

    /// Process a whole record stream
    ///
    /// For each read: trim, approve (on the configured read state), update
    /// statistics, then write the trimmed read to `accepted` when valid,
    /// or to `rejected` when invalid and `keep_filtered` is set (invalid
    /// reads are silently discarded otherwise). Both writers are finished
    /// at end-of-stream.
    ///
    /// Returns the accumulated statistics; rendering the summary is left
    /// to the caller so an empty run can skip it.
    pub fn run<I>(
        &self,
        source: I,
        accepted: FastqWriter,
        rejected: Option<FastqWriter>,
    ) -> Result<RunStatistics>
    where
        I: IntoIterator<Item = Result<FastqRecord>>,
    {
        let mut accepted = accepted;
        let mut rejected = if self.config.keep_filtered {
            rejected
        } else {
            None
        };
        let mut stats = RunStatistics::new();

        for result in source {
            let record = result?;
            let trimmed = self.trim(&record);

            let report = match self.config.approve_on {
                ApproveOn::Raw => self.criteria.approve(&record),
                ApproveOn::Trimmed => self.criteria.approve(&trimmed),
            };
            stats.update(&report);

            if report.read_valid {
                accepted.write_record(&trimmed)?;
            } else if let Some(writer) = rejected.as_mut() {
                writer.write_record(&trimmed)?;
            }
        }

        accepted.finish()?;
        if let Some(writer) = rejected {
            writer.finish()?;
        }

        Ok(stats)
    }
}
