use crate::helpers::string::escape_tabs;
use crate::helpers::string::quote;
use crate::model::cell::Cell;
use crate::model::delimiter::Delimiter;
use std::fmt::Display;

/// One parsed line: its 1-based position in the input and its cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    row_number: usize,
    delimiter: Delimiter,
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(row_number: usize, delimiter: Delimiter, cells: Vec<Cell>) -> Self {
        Row {
            row_number,
            delimiter,
            cells,
        }
    }

    /// 1-based line number in the original input.
    #[inline]
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// The delimiter the row was parsed with.
    #[inline]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell texts in order, without quotes.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(Cell::text).collect()
    }

    /// Appends empty cells until the row holds `width` cells.
    pub(crate) fn pad_to(&mut self, width: usize) {
        if self.cells.len() < width {
            self.cells.resize(width, Cell::empty());
        }
    }

    /// Renders the row as comma-separated text.
    ///
    /// Comma-parsed rows keep each cell's original quoting. Tab-parsed rows
    /// quote every cell, since their content may hold commas or quotes.
    /// No escaping is applied to cell content.
    ///
    /// The delimiter stored at parse time selects the rendering, so there is
    /// no mode argument to pass.
    pub fn as_delimited_text(&self) -> String {
        let content: Vec<String> = match self.delimiter {
            Delimiter::Comma => self.cells.iter().map(|cell| cell.formatted().to_owned()).collect(),
            Delimiter::Tab => self.cells.iter().map(|cell| quote(cell.text())).collect(),
        };
        content.join(",")
    }

    /// Renders the row as tab-separated text with original quoting.
    /// Tabs inside cells are written as `\t` so they cannot pass for separators.
    pub fn as_tab_text(&self) -> String {
        let content: Vec<_> = self.cells.iter().map(|cell| escape_tabs(cell.formatted())).collect();
        content.join("\t")
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: {} cell(s)", self.row_number, self.cell_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(delimiter: Delimiter, cells: &[(bool, &str)]) -> Row {
        let cells = cells.iter().map(|(is_quoted, text)| Cell::new(*is_quoted, *text)).collect();
        Row::new(1, delimiter, cells)
    }

    #[test]
    fn empty_row_renders_empty() {
        let row = row(Delimiter::Comma, &[]);

        assert_eq!(row.as_delimited_text(), "");
        assert_eq!(row.as_tab_text(), "");
        assert_eq!(row.to_string(), "Row 1: 0 cell(s)");
    }

    #[test]
    fn comma_row_keeps_quoting() {
        let row = row(Delimiter::Comma, &[(false, "1"), (true, " 2"), (false, "3")]);

        assert_eq!(row.as_delimited_text(), "1,\" 2\",3");
        assert_eq!(row.texts(), vec!["1", " 2", "3"]);
    }

    #[test]
    fn tab_row_quotes_everything() {
        let row = row(Delimiter::Tab, &[(false, "1"), (true, " 2"), (false, "4,4.5")]);

        assert_eq!(row.as_delimited_text(), "\"1\",\" 2\",\"4,4.5\"");
        assert_eq!(row.as_tab_text(), "1\t\" 2\"\t4,4.5");
    }

    #[test]
    fn tab_text_escapes_embedded_tabs() {
        let row = row(Delimiter::Comma, &[(false, "1"), (true, " \t2"), (false, "3")]);

        assert_eq!(row.as_tab_text(), "1\t\" \\t2\"\t3");
    }

    #[test]
    fn pad_to_only_grows() {
        let mut row = row(Delimiter::Comma, &[(false, "a"), (false, "b")]);
        row.pad_to(1);
        assert_eq!(row.cell_count(), 2);

        row.pad_to(4);
        assert_eq!(row.cell_count(), 4);
        assert_eq!(row.cell(3), Some(&Cell::empty()));
        assert_eq!(row.cell(4), None);
    }
}
