//! # Parsing Entry Points
//!
//! Eager loaders build a complete `Table` with statistics ready; `RowStream`
//! yields rows one at a time without statistics. Any parse failure aborts an
//! eager load and the partially built table is dropped.
use crate::error::CsvError;
use crate::error::ResultMessage;
use crate::error::TabularError;
use crate::helpers::lines::LineReader;
use crate::helpers::lines::LineSource;
use crate::helpers::lines::MemoryLines;
use crate::helpers::reader::SourceReader;
use crate::model::Delimiter;
use crate::model::Table;
use std::path::Path;
use std::path::PathBuf;

pub mod extractor;
pub mod stream;

pub use extractor::extract_row;
pub use stream::RowStream;

/// Options controlling an eager load.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ReadOptions {
    /// Separator for cells in rows (default: comma)
    pub delimiter: Delimiter,
    /// Maximum number of rows to read
    pub limit: Option<usize>,
    /// Pad short rows with empty cells after loading
    pub square_off: bool,
}

impl ReadOptions {
    pub fn new(delimiter: Delimiter) -> Self {
        ReadOptions {
            delimiter,
            ..Default::default()
        }
    }

    /// Options with the delimiter picked from the extension of `path`.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self::new(Delimiter::from_path(path))
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_square_off(mut self, square_off: bool) -> Self {
        self.square_off = square_off;
        self
    }
}

/// Builds a table from lines already held in memory.
pub fn parse_lines<I, S>(lines: I, delimiter: Delimiter) -> Result<Table, CsvError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    read_table(MemoryLines::new(lines), ReadOptions::new(delimiter))
}

/// Builds a table from text holding one row per line (LF, CRLF or CR).
pub fn parse_str(content: &str, delimiter: Delimiter) -> Result<Table, CsvError> {
    read_table(LineReader::new(content.as_bytes()), ReadOptions::new(delimiter))
}

/// Reads every line of `source` (up to the limit) into a table.
pub fn read_table<S: LineSource>(source: S, options: ReadOptions) -> Result<Table, CsvError> {
    let mut table = Table::new();
    let mut stream = RowStream::new(source, options.delimiter);
    while options.limit.map(|limit| table.row_count() < limit).unwrap_or(true) {
        match stream.next_row() {
            Ok(Some(row)) => table.append_row(row),
            Ok(None) => break,
            Err(error) => {
                tracing::warn!("Load aborted: {}", error);
                return Err(error);
            }
        }
    }
    if options.square_off {
        table.square_off();
    } else {
        table.recompute_statistics();
    }
    tracing::debug!(
        "Loaded {} row(s), {}..{} cell(s) per row, jagged: {}",
        table.row_count(),
        table.min_cell_count(),
        table.max_cell_count(),
        table.is_jagged()
    );
    Ok(table)
}

/// Opens `path` as a line source. Open failures are reported at row 0.
fn open_lines<P: AsRef<Path>>(path: P) -> Result<LineReader<SourceReader>, CsvError> {
    let path = path.as_ref();
    tracing::debug!("Opening '{}'", path.display());
    let reader = SourceReader::open(path).map_err(|error| CsvError::from_source(0, error))?;
    Ok(LineReader::new(reader))
}

/// Loads a whole file into a table.
pub fn load_table<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> Result<Table, CsvError> {
    load_table_with(path, ReadOptions::new(delimiter))
}

pub fn load_table_with<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Table, CsvError> {
    read_table(open_lines(path)?, options)
}

/// Opens a file as a forward-only stream of rows.
pub fn open_stream<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> Result<RowStream<LineReader<SourceReader>>, CsvError> {
    Ok(RowStream::new(open_lines(path)?, delimiter))
}

/// Loads every file matching a glob pattern, in path order.
/// The first failure aborts the whole load, prefixed with the failing path.
pub fn load_tables(pattern: &str, options: ReadOptions) -> Result<Vec<(PathBuf, Table)>, TabularError> {
    let mut tables = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let table = load_table_with(&path, options)
            .map_err(TabularError::from)
            .with_prefix(&path.display().to_string())?;
        tables.push((path, table));
    }
    Ok(tables)
}
