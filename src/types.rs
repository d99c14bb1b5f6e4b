//! Common types used throughout readsift

/// A FASTQ record
///
/// Records are immutable values: trimming operations take a reference and
/// return a new, shorter record rather than mutating in place.
///
/// # Invariant
///
/// `sequence.len() == quality.len()` at all times. The FASTQ reader rejects
/// records that violate this, and every trimmer truncates both fields in
/// lockstep, so downstream code can rely on the lengths matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// Sequence identifier (without '@' prefix)
    pub id: String,
    /// DNA/RNA sequence
    pub sequence: Vec<u8>,
    /// Text after '+' on the separator line (usually empty)
    pub description: String,
    /// Quality scores (Phred+33)
    pub quality: Vec<u8>,
}

impl FastqRecord {
    /// Create a new FASTQ record with an empty separator description
    pub fn new(id: String, sequence: Vec<u8>, quality: Vec<u8>) -> Self {
        Self {
            id,
            sequence,
            description: String::new(),
            quality,
        }
    }

    /// Create a new FASTQ record with an explicit separator description
    pub fn with_description(
        id: String,
        sequence: Vec<u8>,
        description: String,
        quality: Vec<u8>,
    ) -> Self {
        Self {
            id,
            sequence,
            description,
            quality,
        }
    }

    /// Length of the sequence in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the record has an empty sequence
    ///
    /// Returns `true` if the sequence length is zero. This can occur when
    /// quality-based trimming removes all bases (all below threshold).
    ///
    /// # Examples
    ///
    /// ```
    /// use readsift::FastqRecord;
    ///
    /// let empty = FastqRecord::new("read1".to_string(), Vec::new(), Vec::new());
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = FastqRecord::new("read2".to_string(), b"ACGT".to_vec(), b"IIII".to_vec());
    /// assert!(!non_empty.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
