//! GC content calculation
//!
//! GC content is computed as a percentage over the full sequence length.
//! Ambiguous bases (N) count toward the denominator but never toward the
//! GC count, so a read of all Ns has 0% GC.

/// Calculate GC content of a sequence as a percentage (0.0 to 100.0)
///
/// Returns `0.0` for an empty sequence instead of dividing by zero, so the
/// approver can evaluate fully-trimmed reads without a special case.
///
/// # Examples
///
/// ```
/// use readsift::operations::gc_content_percent;
///
/// assert!((gc_content_percent(b"GCAT") - 50.0).abs() < f64::EPSILON);
/// assert_eq!(gc_content_percent(b""), 0.0);
/// ```
pub fn gc_content_percent(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let mut gc_count = 0u64;
    for &base in seq {
        match base {
            b'G' | b'C' => gc_count += 1,
            _ => {}
        }
    }

    gc_count as f64 / seq.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content_half() {
        assert!((gc_content_percent(b"GCAT") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_gc_content_all_gc() {
        assert!((gc_content_percent(b"GCGCGCGC") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_gc_content_no_gc() {
        assert_eq!(gc_content_percent(b"ATATATATA"), 0.0);
    }

    #[test]
    fn test_gc_content_empty_is_zero() {
        assert_eq!(gc_content_percent(b""), 0.0);
    }

    #[test]
    fn test_gc_content_n_counts_toward_length() {
        // 2 GC over 4 bases: N dilutes the percentage
        assert!((gc_content_percent(b"GCNN") - 50.0).abs() < 1e-9);
        assert_eq!(gc_content_percent(b"NNNN"), 0.0);
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// GC percentage is always within [0, 100]
        #[test]
        fn prop_gc_in_range(seq in "[ACGTN]{0,300}") {
            let gc = gc_content_percent(seq.as_bytes());
            prop_assert!((0.0..=100.0).contains(&gc));
        }

        /// Appending an AT base never raises the percentage
        #[test]
        fn prop_at_never_raises_gc(seq in "[ACGTN]{1,300}") {
            let before = gc_content_percent(seq.as_bytes());
            let mut longer = seq.into_bytes();
            longer.push(b'A');
            prop_assert!(gc_content_percent(&longer) <= before);
        }
    }
}
