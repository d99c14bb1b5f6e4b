//! Phred+33 quality decoding
//!
//! Quality lines in modern FASTQ (Illumina 1.8+) encode one integer score
//! per base as `ASCII code point - 33`. This is the only encoding readsift
//! supports; alternate offsets (Phred+64, Solexa) are out of scope.

/// ASCII offset of the Phred+33 encoding ('!' = Q0)
pub const PHRED_OFFSET: u8 = 33;

/// Decode a Phred+33 quality string into integer scores
///
/// Maps each quality character to `code_point - 33`. Pure and total: the
/// caller is expected to supply printable ASCII from a parsed FASTQ record,
/// and bytes below the offset saturate to zero rather than being treated
/// as a runtime error.
///
/// # Examples
///
/// ```
/// use readsift::operations::decode_scores;
///
/// assert_eq!(decode_scores(b"!5I"), vec![0, 20, 40]);
/// ```
pub fn decode_scores(quality: &[u8]) -> Vec<u8> {
    quality.iter().map(|&q| q.saturating_sub(PHRED_OFFSET)).collect()
}

/// Arithmetic mean of a slice of quality scores
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use readsift::operations::mean_score;
///
/// let scores = [30, 40];
/// assert!((mean_score(&scores) - 35.0).abs() < f64::EPSILON);
/// ```
pub fn mean_score(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    sum as f64 / scores.len() as f64
}
