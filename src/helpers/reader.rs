use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;

/// A unified reader over either a local file or an in-memory buffer
pub enum SourceReader {
    /// Local file reader
    Local(BufReader<File>),
    /// In-memory buffer
    Memory(Cursor<Vec<u8>>),
}

impl SourceReader {
    /// Opens a local file for buffered reading
    ///
    /// # Arguments
    /// * `path` - Path to the file
    ///
    /// # Returns
    /// * `std::io::Result<SourceReader>` - Reader for the file content
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<SourceReader> {
        let file = File::open(path.as_ref())?;
        Ok(SourceReader::Local(BufReader::new(file)))
    }

    /// Wraps bytes already held in memory
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> SourceReader {
        SourceReader::Memory(Cursor::new(bytes.into()))
    }
}

impl Read for SourceReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            SourceReader::Local(reader) => reader.read(buf),
            SourceReader::Memory(reader) => reader.read(buf),
        }
    }
}

impl BufRead for SourceReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            SourceReader::Local(reader) => reader.fill_buf(),
            SourceReader::Memory(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amount: usize) {
        match self {
            SourceReader::Local(reader) => reader.consume(amount),
            SourceReader::Memory(reader) => reader.consume(amount),
        }
    }
}
