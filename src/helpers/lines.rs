//! Line sources feeding the parser.
//! A source yields one line at a time with its terminator already removed.

use std::collections::VecDeque;
use std::io::BufRead;

/// Byte order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{FEFF}';

/// Pull interface over raw lines: the next line, or `None` at the end.
pub trait LineSource {
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, accepting LF, CRLF and lone CR endings.
pub struct LineReader<R: BufRead> {
    reader: R,
    buffer: String,
    // Lines split off a chunk at lone CRs, not yet handed out
    pending: VecDeque<String>,
    started: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            buffer: String::with_capacity(256),
            pending: VecDeque::new(),
            started: false,
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        if let Some(line) = self.pending.pop_front() {
            return Ok(Some(line));
        }
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        // A chunk ends at LF or end of input; CRs inside it end lines too
        let mut chunk = self.buffer.as_str();
        chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        if !self.started {
            self.started = true;
            chunk = chunk.strip_prefix(BOM).unwrap_or(chunk);
        }
        let mut lines = chunk.split('\r');
        let first = lines.next().unwrap_or_default().to_owned();
        self.pending.extend(lines.map(str::to_owned));
        Ok(Some(first))
    }
}

/// An in-memory sequence of lines.
pub struct MemoryLines<I> {
    lines: I,
}

impl<I: Iterator> MemoryLines<I> {
    pub fn new<T>(lines: T) -> MemoryLines<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        MemoryLines {
            lines: lines.into_iter(),
        }
    }
}

impl<I, S> LineSource for MemoryLines<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.lines.next().map(Into::into))
    }
}
