//! # Tabular Data Model
//!
//! Cells, rows and tables produced by the parser. Rows own their cells and the
//! table owns its rows; only `Table::square_off` changes a row after parsing.

pub mod cell;
pub mod delimiter;
pub mod row;
pub mod table;

pub use cell::Cell;
pub use delimiter::Delimiter;
pub use row::Row;
pub use table::Table;
