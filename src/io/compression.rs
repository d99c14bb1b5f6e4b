//! Data sources and transparent gzip compression
//!
//! Reading: [`DataSource`] opens a local file with threshold-based mmap,
//! and [`CompressedReader`] sniffs the gzip magic bytes so callers never
//! need to know whether the input was compressed.
//!
//! Writing: [`CompressedWriter`] picks plain or gzip output from the
//! sink's file extension and requires an explicit `finish()` so encoder
//! trailers are written and errors surface.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use memmap2::Mmap;

use crate::error::Result;
use crate::io::sink::DataSink;

/// File size above which input files are memory-mapped
///
/// Small files go through ordinary buffered reads, which avoids mmap setup
/// overhead; large files benefit from the kernel's page cache readahead.
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024; // 50 MB

/// Input origin for a filtering run
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local file path
    Local(PathBuf),
}

impl DataSource {
    /// Create a local file data source
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Open the data source and return a buffered reader
    ///
    /// Files at or above [`MMAP_THRESHOLD`] are memory-mapped; smaller
    /// files use standard buffered I/O.
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            DataSource::Local(path) => open_local_file(path),
        }
    }
}

fn open_local_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let metadata = std::fs::metadata(path)?;

    if metadata.len() >= MMAP_THRESHOLD {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Box::new(io::Cursor::new(mmap)))
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Buffered reader with transparent gzip decompression
///
/// Peeks at the first two bytes of the stream: the gzip magic `(31, 139)`
/// routes through a multi-member gzip decoder, anything else passes
/// through untouched. Multi-member decoding matters because concatenated
/// gzip FASTQ files are common in sequencing pipelines.
///
/// # Example
///
/// ```no_run
/// use readsift::io::{CompressedReader, DataSource};
///
/// # fn main() -> readsift::Result<()> {
/// let source = DataSource::from_path("reads.fastq.gz");
/// let reader = CompressedReader::new(source)?;
/// // Reader implements BufRead; hand it to FastqStream
/// # Ok(())
/// # }
/// ```
pub struct CompressedReader {
    inner: Box<dyn BufRead + Send>,
}

impl CompressedReader {
    /// Create a new reader from a data source, sniffing for gzip
    pub fn new(source: DataSource) -> Result<Self> {
        let mut reader = source.open()?;

        let first_bytes = {
            let peeked = reader.fill_buf()?;
            if peeked.len() >= 2 {
                [peeked[0], peeked[1]]
            } else if peeked.len() == 1 {
                [peeked[0], 0]
            } else {
                [0, 0]
            }
        };

        let is_gzipped = first_bytes[0] == 31 && first_bytes[1] == 139;

        if is_gzipped {
            Ok(Self {
                inner: Box::new(BufReader::new(MultiGzDecoder::new(reader))),
            })
        } else {
            Ok(Self { inner: reader })
        }
    }
}

impl Read for CompressedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for CompressedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
    }
}

/// Buffered writer with optional gzip compression
///
/// The variants hold `Option` so `finish()` can take the inner writer by
/// value while `Drop` stays harmless afterwards.
pub enum CompressedWriter {
    /// Uncompressed writer with buffering
    Plain(Option<BufWriter<Box<dyn Write>>>),

    /// Gzip compressed writer (default compression level)
    Gzip(Option<GzEncoder<BufWriter<Box<dyn Write>>>>),
}

impl CompressedWriter {
    /// Create a writer from a data sink
    ///
    /// A `.gz` extension selects gzip; everything else, including stdout,
    /// is written uncompressed.
    pub fn new(sink: DataSink) -> io::Result<Self> {
        let compressed = sink.is_compressed();
        match sink {
            DataSink::Local(path) => {
                let file = File::create(&path)?;
                if compressed {
                    Self::new_gzip(Box::new(file))
                } else {
                    Self::new_plain(Box::new(file))
                }
            }
            DataSink::Stdout => Self::new_plain(Box::new(io::stdout())),
        }
    }

    /// Create a plain (uncompressed) writer
    pub fn new_plain(writer: Box<dyn Write>) -> io::Result<Self> {
        Ok(Self::Plain(Some(BufWriter::new(writer))))
    }

    /// Create a gzip compressed writer
    pub fn new_gzip(writer: Box<dyn Write>) -> io::Result<Self> {
        let encoder = GzEncoder::new(BufWriter::new(writer), Compression::default());
        Ok(Self::Gzip(Some(encoder)))
    }

    /// Flush buffered data without finalizing the stream
    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(Some(w)) => w.flush(),
            Self::Gzip(Some(w)) => w.flush(),
            _ => Ok(()), // Already finished
        }
    }

    /// Finish writing and consume the writer
    ///
    /// Flushes all buffered data and, for gzip, writes the stream trailer.
    /// Always call this rather than relying on `Drop`, which cannot report
    /// errors.
    pub fn finish(mut self) -> io::Result<()> {
        match &mut self {
            Self::Plain(w) => {
                if let Some(mut writer) = w.take() {
                    writer.flush()?;
                }
                Ok(())
            }
            Self::Gzip(w) => {
                if let Some(encoder) = w.take() {
                    let mut inner = encoder.finish()?;
                    inner.flush()?;
                }
                Ok(())
            }
        }
    }
}

impl Write for CompressedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(Some(w)) => w.write(buf),
            Self::Gzip(Some(w)) => w.write(buf),
            _ => Err(io::Error::new(
                io::ErrorKind::Other,
                "write after finish()",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        CompressedWriter::flush(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_plain_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.fastq");

        let mut writer = CompressedWriter::new(DataSink::from_path(&path)).unwrap();
        writer.write_all(b"@r1\nACGT\n+\nIIII\n").unwrap();
        writer.finish().unwrap();

        let mut reader = CompressedReader::new(DataSource::from_path(&path)).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "@r1\nACGT\n+\nIIII\n");
    }

    #[test]
    fn test_gzip_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comp.fastq.gz");

        let mut writer = CompressedWriter::new(DataSink::from_path(&path)).unwrap();
        writer.write_all(b"@r1\nACGT\n+\nIIII\n").unwrap();
        writer.finish().unwrap();

        // Output really is gzip
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[31, 139]);

        // And the reader sniffs it transparently
        let mut reader = CompressedReader::new(DataSource::from_path(&path)).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "@r1\nACGT\n+\nIIII\n");
    }

    #[test]
    fn test_empty_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.fastq");
        std::fs::write(&path, b"").unwrap();

        let mut reader = CompressedReader::new(DataSource::from_path(&path)).unwrap();
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CompressedReader::new(DataSource::from_path("/nonexistent/reads.fastq"));
        assert!(result.is_err());
    }
}
