//! # Delimited Text Tables
//!
//! A tokenizer for comma- and tab-separated text that turns raw lines into a
//! table of rows and cells, with strict handling of quoting and precise error
//! locations.
//!
//! ## Features
//!
//! - **Quote-aware cells**: quoted cells keep their whitespace and may hold
//!   separators; `\"` inside a quoted cell is kept verbatim
//! - **Whitespace trimming**: unquoted cells are trimmed
//! - **Strict errors**: stray quotes and content after a closing quote fail
//!   with a 1-based row and character position
//! - **Table statistics**: min/max cells per row, jagged detection and squaring off
//! - **Eager or streaming**: load a whole `Table` or pull rows from a `RowStream`
//!
//! ## Example
//!
//! ```
//! use tabular_text::{parse_lines, Delimiter};
//!
//! let table = parse_lines(["1,2", "\"a, b\", c"], Delimiter::Comma).unwrap();
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.get(1, 0).unwrap().text(), "a, b");
//! ```

mod error;
mod helpers;
mod model;
mod parser;

pub use crate::error::{CsvError, DelimiterError, ErrorKind, TabularError};
pub use crate::helpers::lines::{LineReader, LineSource, MemoryLines};
pub use crate::helpers::reader::SourceReader;
pub use crate::model::{Cell, Delimiter, Row, Table};
pub use crate::parser::{
    extract_row, load_table, load_table_with, load_tables, open_stream, parse_lines, parse_str,
    read_table, ReadOptions, RowStream,
};
