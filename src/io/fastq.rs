//! FASTQ streaming reader and writer
//!
//! Records are consumed and emitted as groups of four lines: identifier
//! (`@`-prefixed), sequence, separator (`+`-prefixed, optionally with a
//! description), quality. Framing and the sequence/quality length match
//! are validated here at the boundary, so the trimming and filtering core
//! only ever sees complete, length-matched records.
//!
//! Memory stays constant regardless of input size: one record is held at
//! a time, and line buffers are reused across records.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{ReadsiftError, Result};
use crate::io::compression::{CompressedReader, CompressedWriter, DataSource};
use crate::io::sink::DataSink;
use crate::types::FastqRecord;

/// FASTQ streaming parser
///
/// Iterates `Result<FastqRecord>` one record at a time. A stream that
/// ends mid-record yields an [`ReadsiftError::InvalidFastqFormat`] error.
///
/// # Example
///
/// ```no_run
/// use readsift::FastqStream;
///
/// # fn main() -> readsift::Result<()> {
/// let stream = FastqStream::from_path("reads.fastq.gz")?;
///
/// for record in stream {
///     let record = record?;
///     // Process one record at a time (constant memory)
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastqStream<R: BufRead> {
    reader: R,
    line1: String,
    line2: String,
    line3: String,
    line4: String,
    line_number: usize,
}

impl<R: BufRead> FastqStream<R> {
    /// Create a FASTQ stream from a buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line1: String::with_capacity(256),
            line2: String::with_capacity(256),
            line3: String::with_capacity(256),
            line4: String::with_capacity(256),
            line_number: 0,
        }
    }

    /// Read one FASTQ record from the reader
    fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        self.line1.clear();
        self.line2.clear();
        self.line3.clear();
        self.line4.clear();

        let n1 = self.reader.read_line(&mut self.line1)?;
        if n1 == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let n2 = self.reader.read_line(&mut self.line2)?;
        if n2 == 0 {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number,
                msg: "Unexpected end of file after header".to_string(),
            });
        }
        self.line_number += 1;

        let n3 = self.reader.read_line(&mut self.line3)?;
        if n3 == 0 {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number,
                msg: "Unexpected end of file after sequence".to_string(),
            });
        }
        self.line_number += 1;

        let n4 = self.reader.read_line(&mut self.line4)?;
        if n4 == 0 {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number,
                msg: "Unexpected end of file after separator".to_string(),
            });
        }
        self.line_number += 1;

        if !self.line1.starts_with('@') {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number - 3,
                msg: format!(
                    "Expected '@' at start of header, got: {}",
                    &self.line1[..1.min(self.line1.len())]
                ),
            });
        }

        if !self.line3.starts_with('+') {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number - 1,
                msg: format!(
                    "Expected '+' at start of separator, got: {}",
                    &self.line3[..1.min(self.line3.len())]
                ),
            });
        }

        let id = self.line1[1..].trim_end().to_string();
        let sequence = self.line2.trim_end().as_bytes().to_vec();
        let description = self.line3[1..].trim_end().to_string();
        let quality = self.line4.trim_end().as_bytes().to_vec();

        if sequence.len() != quality.len() {
            return Err(ReadsiftError::InvalidFastqFormat {
                line: self.line_number,
                msg: format!(
                    "Sequence length ({}) != quality length ({})",
                    sequence.len(),
                    quality.len()
                ),
            });
        }

        Ok(Some(FastqRecord {
            id,
            sequence,
            description,
            quality,
        }))
    }
}

impl FastqStream<CompressedReader> {
    /// Create a FASTQ stream from a data source (with gzip support)
    pub fn new(source: DataSource) -> Result<Self> {
        let reader = CompressedReader::new(source)?;
        Ok(Self::from_reader(reader))
    }

    /// Create a FASTQ stream from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(DataSource::from_path(path))
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

/// FASTQ record writer over a [`CompressedWriter`]
///
/// Emits records in the standard 4-line shape, restoring the `@` and `+`
/// prefixes that the reader strips.
///
/// # Example
///
/// ```no_run
/// use readsift::{FastqRecord, FastqWriter};
/// use readsift::io::DataSink;
///
/// # fn main() -> readsift::Result<()> {
/// let mut writer = FastqWriter::new(DataSink::from_path("passed.fastq.gz"))?;
/// let record = FastqRecord::new("r1".to_string(), b"ACGT".to_vec(), b"IIII".to_vec());
/// writer.write_record(&record)?;
/// writer.finish()?; // Finalizes the gzip stream
/// # Ok(())
/// # }
/// ```
pub struct FastqWriter {
    inner: CompressedWriter,
}

impl FastqWriter {
    /// Create a writer for a data sink
    pub fn new(sink: DataSink) -> Result<Self> {
        Ok(Self {
            inner: CompressedWriter::new(sink)?,
        })
    }

    /// Create a writer for a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(DataSink::from_path(path))
    }

    /// Write one record as four lines
    pub fn write_record(&mut self, record: &FastqRecord) -> Result<()> {
        self.inner.write_all(b"@")?;
        self.inner.write_all(record.id.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&record.sequence)?;
        self.inner.write_all(b"\n+")?;
        self.inner.write_all(record.description.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&record.quality)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    /// Finish writing, flushing buffers and any compression trailer
    pub fn finish(self) -> Result<()> {
        self.inner.finish()?;
        Ok(())
    }
}
