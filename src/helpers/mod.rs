pub(crate) mod cursor;
pub mod lines;
pub mod reader;
pub(crate) mod string;
