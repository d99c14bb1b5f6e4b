//! Trimming operations for FASTQ records
//!
//! Five composable, order-sensitive transformations: fixed-position crop
//! and headcrop, single-base quality trims from either end, and a sliding
//! window trim over mean quality.
//!
//! # Design
//!
//! 1. **Sequence-quality lockstep**: every trimmer truncates `sequence`
//!    and `quality` identically, preserving the record invariant.
//! 2. **Immutable records**: each trimmer returns a new record; `id` and
//!    `description` pass through unchanged.
//! 3. **One scan shape**: the three quality trimmers all reduce to "find
//!    the first violating index, cut there", differing only in what a
//!    violation is and which direction the scan runs.
//!
//! Trimmers are applied in whatever order the caller chooses, and order
//! changes results: cropping before a quality trim inspects different
//! windows than cropping after. The pipeline applies its configured steps
//! verbatim and never reorders them.
//!
//! # Examples
//!
//! ```
//! use readsift::FastqRecord;
//! use readsift::operations::{crop, trim_trailing};
//!
//! let record = FastqRecord::new(
//!     "read1".to_string(),
//!     b"ATGCATGC".to_vec(),
//!     b"IIII!!!!".to_vec(), // Q40 then Q0
//! );
//!
//! // Keep the first 6 bases
//! let cropped = crop(&record, 6);
//! assert_eq!(cropped.sequence, b"ATGCAT");
//!
//! // Cut at the first base below Q20
//! let trimmed = trim_trailing(&record, 20);
//! assert_eq!(trimmed.sequence, b"ATGC");
//! ```

use crate::operations::quality::{decode_scores, mean_score};
use crate::types::FastqRecord;

/// Build a new record keeping `[start, end)` of both sequence and quality
fn truncated(record: &FastqRecord, start: usize, end: usize) -> FastqRecord {
    FastqRecord::with_description(
        record.id.clone(),
        record.sequence[start..end].to_vec(),
        record.description.clone(),
        record.quality[start..end].to_vec(),
    )
}

/// Keep the first `length` bases
///
/// A no-op (full copy) when `length >= record.len()`.
///
/// # Examples
///
/// ```
/// use readsift::FastqRecord;
/// use readsift::operations::crop;
///
/// let record = FastqRecord::new(
///     "read1".to_string(),
///     b"ATGCATGC".to_vec(),
///     b"ABCDEFGH".to_vec(),
/// );
///
/// let cropped = crop(&record, 4);
/// assert_eq!(cropped.sequence, b"ATGC");
/// assert_eq!(cropped.quality, b"ABCD");
///
/// // Crop beyond the read length keeps everything
/// let unchanged = crop(&record, 100);
/// assert_eq!(unchanged.sequence, record.sequence);
/// ```
pub fn crop(record: &FastqRecord, length: usize) -> FastqRecord {
    let end = length.min(record.len());
    truncated(record, 0, end)
}

/// Drop the first `length` bases
///
/// Returns an empty record when `length >= record.len()`.
///
/// # Examples
///
/// ```
/// use readsift::FastqRecord;
/// use readsift::operations::headcrop;
///
/// let record = FastqRecord::new(
///     "read1".to_string(),
///     b"ATGCATGC".to_vec(),
///     b"ABCDEFGH".to_vec(),
/// );
///
/// let trimmed = headcrop(&record, 2);
/// assert_eq!(trimmed.sequence, b"GCATGC");
/// assert_eq!(trimmed.quality, b"CDEFGH");
///
/// assert!(headcrop(&record, 100).is_empty());
/// ```
pub fn headcrop(record: &FastqRecord, length: usize) -> FastqRecord {
    let start = length.min(record.len());
    truncated(record, start, record.len())
}

/// Trim the trailing part of the read at the first low-quality base
///
/// Scans scores left to right and cuts at the first index strictly below
/// `min_quality`, keeping `[0, index)`. The first violation wins even if a
/// longer high-quality run follows it. A read whose every score meets the
/// threshold is returned unchanged.
///
/// # Examples
///
/// ```
/// use readsift::FastqRecord;
/// use readsift::operations::trim_trailing;
///
/// let record = FastqRecord::new(
///     "read1".to_string(),
///     b"ATGCATGC".to_vec(),
///     b"III!III!".to_vec(),
/// );
///
/// // First base below Q20 is index 3; later good bases don't rescue it
/// let trimmed = trim_trailing(&record, 20);
/// assert_eq!(trimmed.sequence, b"ATG");
/// ```
pub fn trim_trailing(record: &FastqRecord, min_quality: u8) -> FastqRecord {
    let scores = decode_scores(&record.quality);
    let cut = scores
        .iter()
        .position(|&s| s < min_quality)
        .unwrap_or(record.len());
    truncated(record, 0, cut)
}

/// Trim the leading part of the read after the last low-quality base
///
/// Scans scores from the end and finds the last index whose score is
/// strictly below `min_quality`, keeping everything after it; the suffix
/// that survives satisfies the threshold throughout. A read whose every
/// score meets the threshold is returned unchanged.
///
/// # Examples
///
/// ```
/// use readsift::FastqRecord;
/// use readsift::operations::trim_leading;
///
/// let record = FastqRecord::new(
///     "read1".to_string(),
///     b"ATGCATGC".to_vec(),
///     b"!III!III".to_vec(),
/// );
///
/// // Last base below Q20 is index 4; keep the suffix after it
/// let trimmed = trim_leading(&record, 20);
/// assert_eq!(trimmed.sequence, b"TGC");
/// ```
pub fn trim_leading(record: &FastqRecord, min_quality: u8) -> FastqRecord {
    let scores = decode_scores(&record.quality);
    let start = match scores.iter().rposition(|&s| s < min_quality) {
        Some(last_bad) => last_bad + 1,
        None => 0,
    };
    truncated(record, start, record.len())
}

/// Trim at the first window whose mean quality drops below a threshold
///
/// Slides a window of `window_size` bases from the start of the read and
/// computes the arithmetic mean of the scores in each. The read is cut at
/// the start of the first window whose mean is strictly below
/// `min_avg_quality`; if the very first window violates, the result is
/// empty. A read with no violating window, or one shorter than the
/// window, is returned unchanged.
///
/// `window_size` of zero is treated as "no window to violate" and returns
/// the record unchanged; the pipeline configuration rejects it before a
/// run starts.
///
/// # Examples
///
/// ```
/// use readsift::FastqRecord;
/// use readsift::operations::trim_sliding_window;
///
/// let record = FastqRecord::new(
///     "read1".to_string(),
///     b"ATGCATGC".to_vec(),
///     b"IIII!!!!".to_vec(), // Q40 x4, Q0 x4
/// );
///
/// // Windows of 4, mean threshold Q20: first violating window starts at 3
/// let trimmed = trim_sliding_window(&record, 20, 4);
/// assert_eq!(trimmed.sequence, b"ATG");
/// ```
pub fn trim_sliding_window(
    record: &FastqRecord,
    min_avg_quality: u8,
    window_size: usize,
) -> FastqRecord {
    if window_size == 0 || window_size > record.len() {
        return record.clone();
    }

    let scores = decode_scores(&record.quality);
    let threshold = f64::from(min_avg_quality);
    let cut = scores
        .windows(window_size)
        .position(|window| mean_score(window) < threshold)
        .unwrap_or(record.len());
    truncated(record, 0, cut)
}
