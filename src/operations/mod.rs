//! Read-level operations: quality decoding, GC content, trimming
//!
//! # Organization
//!
//! - `quality`: Phred+33 decoding and score averaging
//! - `gc_content`: GC percentage over a sequence
//! - `trimming`: the five composable trimming operations

pub mod gc_content;
pub mod quality;
pub mod trimming;

pub use gc_content::gc_content_percent;
pub use quality::{decode_scores, mean_score, PHRED_OFFSET};
pub use trimming::{crop, headcrop, trim_leading, trim_sliding_window, trim_trailing};
