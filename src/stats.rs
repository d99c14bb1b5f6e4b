//! Run-wide filtering statistics
//!
//! A single-owner accumulator updated exactly once per read, in arrival
//! order, and rendered to a textual report at the end of a run. All
//! counters are plain sums, so independently accumulated shards can be
//! merged by addition for parallel runs.

use std::fmt::Write as _;

use crate::error::{ReadsiftError, Result};
use crate::filter::ReadReport;

/// Running counters for one filtering run
///
/// Invariant after any number of updates: `valid + failed == total`.
/// A read failing both criteria increments `failed_by_length` and
/// `failed_by_gc` but `failed` only once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Reads processed
    pub total: u64,
    /// Reads that passed both criteria
    pub valid: u64,
    /// Reads that failed at least one criterion
    pub failed: u64,
    /// Reads shorter than the minimum length
    pub failed_by_length: u64,
    /// Reads with GC content outside the bounds
    pub failed_by_gc: u64,
}

impl RunStatistics {
    /// Create an all-zero accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one read's approval report
    ///
    /// `total` always increments; each failure flag increments its own
    /// counter; exactly one of `valid`/`failed` increments per read
    /// regardless of how many criteria failed.
    pub fn update(&mut self, report: &ReadReport) {
        self.total += 1;
        if report.length_failed {
            self.failed_by_length += 1;
        }
        if report.gc_failed {
            self.failed_by_gc += 1;
        }
        if report.read_valid {
            self.valid += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Fold another accumulator into this one by pairwise addition
    ///
    /// Merging shard accumulators equals accumulating the concatenated
    /// report sequence directly, so sharded runs can combine at the end.
    pub fn merge(&mut self, other: &RunStatistics) {
        self.total += other.total;
        self.valid += other.valid;
        self.failed += other.failed;
        self.failed_by_length += other.failed_by_length;
        self.failed_by_gc += other.failed_by_gc;
    }

    /// Render the textual filter report
    ///
    /// Percentages are `count / total * 100` printed with three decimal
    /// places. Returns [`ReadsiftError::EmptyRun`] when no reads were
    /// processed; callers should skip the report for an empty stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use readsift::{ReadReport, RunStatistics};
    ///
    /// let mut stats = RunStatistics::new();
    /// stats.update(&ReadReport { read_valid: true, length_failed: false, gc_failed: false });
    ///
    /// let text = stats.summary().unwrap();
    /// assert!(text.starts_with("FILTER STATISTICS:"));
    /// ```
    pub fn summary(&self) -> Result<String> {
        if self.total == 0 {
            return Err(ReadsiftError::EmptyRun);
        }

        let percent = |count: u64| count as f64 / self.total as f64 * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "FILTER STATISTICS:");
        let _ = writeln!(out, "Total number of reads {}", self.total);
        let _ = writeln!(
            out,
            "Total valid reads {} ({:.3}%)",
            self.valid,
            percent(self.valid)
        );
        let _ = writeln!(
            out,
            "Total failed reads {} ({:.3}%)",
            self.failed,
            percent(self.failed)
        );
        let _ = writeln!(
            out,
            "Failed by length reads {} ({:.3}%)",
            self.failed_by_length,
            percent(self.failed_by_length)
        );
        let _ = writeln!(
            out,
            "Failed by GC-content reads {} ({:.3}%)",
            self.failed_by_gc,
            percent(self.failed_by_gc)
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: ReadReport = ReadReport {
        read_valid: true,
        length_failed: false,
        gc_failed: false,
    };
    const BAD_LENGTH: ReadReport = ReadReport {
        read_valid: false,
        length_failed: true,
        gc_failed: false,
    };
    const BAD_BOTH: ReadReport = ReadReport {
        read_valid: false,
        length_failed: true,
        gc_failed: true,
    };

    #[test]
    fn test_counting_rule() {
        let mut stats = RunStatistics::new();
        for report in [VALID, BAD_LENGTH, BAD_BOTH] {
            stats.update(&report);
        }

        assert_eq!(stats.total, 3);
        assert_eq!(stats.valid, 1);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.failed_by_length, 2);
        assert_eq!(stats.failed_by_gc, 1);
    }

    #[test]
    fn test_valid_plus_failed_equals_total() {
        let mut stats = RunStatistics::new();
        for _ in 0..5 {
            stats.update(&VALID);
        }
        for _ in 0..3 {
            stats.update(&BAD_BOTH);
        }
        assert_eq!(stats.valid + stats.failed, stats.total);
        assert_eq!(stats.total, 8);
    }

    #[test]
    fn test_summary_text_shape() {
        let mut stats = RunStatistics::new();
        stats.update(&VALID);
        stats.update(&BAD_LENGTH);
        stats.update(&BAD_BOTH);

        let text = stats.summary().unwrap();
        let expected = "FILTER STATISTICS:\n\
                        Total number of reads 3\n\
                        Total valid reads 1 (33.333%)\n\
                        Total failed reads 2 (66.667%)\n\
                        Failed by length reads 2 (66.667%)\n\
                        Failed by GC-content reads 1 (33.333%)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_empty_run_is_error() {
        let stats = RunStatistics::new();
        assert!(matches!(stats.summary(), Err(ReadsiftError::EmptyRun)));
    }

    // Property-based tests
    use proptest::prelude::*;

    fn arb_report() -> impl Strategy<Value = ReadReport> {
        (any::<bool>(), any::<bool>()).prop_map(|(length_failed, gc_failed)| ReadReport {
            read_valid: !length_failed && !gc_failed,
            length_failed,
            gc_failed,
        })
    }

    proptest! {
        /// After N updates: valid + failed == N == total
        #[test]
        fn prop_totals_consistent(reports in proptest::collection::vec(arb_report(), 0..100)) {
            let mut stats = RunStatistics::new();
            for report in &reports {
                stats.update(report);
            }
            prop_assert_eq!(stats.total, reports.len() as u64);
            prop_assert_eq!(stats.valid + stats.failed, stats.total);
        }

        /// Merging two shards equals accumulating the concatenation
        #[test]
        fn prop_merge_equals_concatenation(
            left in proptest::collection::vec(arb_report(), 0..50),
            right in proptest::collection::vec(arb_report(), 0..50),
        ) {
            let mut shard_a = RunStatistics::new();
            for report in &left {
                shard_a.update(report);
            }
            let mut shard_b = RunStatistics::new();
            for report in &right {
                shard_b.update(report);
            }
            shard_a.merge(&shard_b);

            let mut direct = RunStatistics::new();
            for report in left.iter().chain(&right) {
                direct.update(report);
            }

            prop_assert_eq!(shard_a, direct);
        }
    }
}
