//! Read approval against length and GC-content criteria
//!
//! The approver classifies a read as pass or fail with per-criterion
//! detail. It has no error path: every read gets a report, and an empty
//! sequence is handled by defining its GC content as zero.
//!
//! Approval is evaluated on whatever read state the caller passes in. The
//! pipeline makes the pre-/post-trim choice explicit through its
//! configuration; approving the post-trim read is recommended so filtering
//! reflects the output actually written.

use crate::operations::gc_content_percent;
use crate::types::FastqRecord;

/// Per-read approval result
///
/// `read_valid` holds exactly when neither criterion failed. Both failure
/// flags may be set for the same read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadReport {
    /// Whether the read passed both criteria
    pub read_valid: bool,
    /// Whether the read was shorter than the minimum length
    pub length_failed: bool,
    /// Whether the GC content fell outside the configured bounds
    pub gc_failed: bool,
}

/// Length and GC-content acceptance criteria
///
/// # Examples
///
/// ```
/// use readsift::{FastqRecord, FilterCriteria};
///
/// let criteria = FilterCriteria::new(0, 0.0, 100.0);
/// let record = FastqRecord::new("r".to_string(), b"GCAT".to_vec(), b"IIII".to_vec());
///
/// let report = criteria.approve(&record);
/// assert!(report.read_valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    /// Minimum acceptable sequence length (inclusive)
    pub min_length: usize,
    /// Lower GC percentage bound (inclusive)
    pub gc_min: f64,
    /// Upper GC percentage bound (inclusive)
    pub gc_max: f64,
}

impl FilterCriteria {
    /// Create criteria from a minimum length and inclusive GC bounds
    pub fn new(min_length: usize, gc_min: f64, gc_max: f64) -> Self {
        Self {
            min_length,
            gc_min,
            gc_max,
        }
    }

    /// Evaluate a read against the criteria
    ///
    /// Length fails when the sequence is shorter than `min_length`. GC
    /// fails when the percentage lies strictly outside the closed interval
    /// `[gc_min, gc_max]`; values on the bounds pass. An empty sequence
    /// has GC content 0.
    pub fn approve(&self, record: &FastqRecord) -> ReadReport {
        let length_failed = record.len() < self.min_length;

        let gc = gc_content_percent(&record.sequence);
        let gc_failed = gc < self.gc_min || gc > self.gc_max;

        ReadReport {
            read_valid: !length_failed && !gc_failed,
            length_failed,
            gc_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: &[u8]) -> FastqRecord {
        FastqRecord::new("read1".to_string(), seq.to_vec(), vec![b'I'; seq.len()])
    }

    #[test]
    fn test_approve_no_thresholds() {
        let report = FilterCriteria::new(0, 0.0, 100.0).approve(&record(b"GCAT"));
        assert!(report.read_valid);
        assert!(!report.length_failed);
        assert!(!report.gc_failed);
    }

    #[test]
    fn test_length_failure_regardless_of_gc() {
        // len 8 against min_length 20
        let report = FilterCriteria::new(20, 0.0, 100.0).approve(&record(b"ATATGCGC"));
        assert!(report.length_failed);
        assert!(!report.gc_failed);
        assert!(!report.read_valid);
    }

    #[test]
    fn test_gc_failure() {
        // 50% GC against [70, 100]
        let report = FilterCriteria::new(0, 70.0, 100.0).approve(&record(b"ATATGCGC"));
        assert!(report.gc_failed);
        assert!(!report.length_failed);
        assert!(!report.read_valid);
    }

    #[test]
    fn test_both_criteria_fail() {
        let report = FilterCriteria::new(50, 70.0, 100.0).approve(&record(b"ATATGCGC"));
        assert!(report.length_failed);
        assert!(report.gc_failed);
        assert!(!report.read_valid);
    }

    #[test]
    fn test_inclusive_gc_bounds_pass() {
        // Exactly 50% GC passes both a lower and an upper bound of 50
        let criteria = FilterCriteria::new(0, 50.0, 50.0);
        assert!(criteria.approve(&record(b"GCAT")).read_valid);
    }

    #[test]
    fn test_empty_sequence_gc_is_zero() {
        // Empty read: GC defined as 0, no division error
        let report = FilterCriteria::new(0, 0.0, 100.0).approve(&record(b""));
        assert!(!report.gc_failed);

        // With a positive lower bound, the defined-zero GC fails
        let report = FilterCriteria::new(0, 10.0, 100.0).approve(&record(b""));
        assert!(report.gc_failed);
    }
}
