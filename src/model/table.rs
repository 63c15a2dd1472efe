use crate::model::cell::Cell;
use crate::model::row::Row;

/// Parsed rows plus width statistics.
///
/// `row_count` always matches the rows held. Width statistics are derived from
/// the rows and refreshed by `recompute_statistics`; an empty table reports zero
/// widths and is never jagged.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<Row>,
    min_cell_count: usize,
    max_cell_count: usize,
    is_jagged: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Looks up a cell by 0-based row and column index.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.cell(col)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell count of the narrowest row.
    #[inline]
    pub fn min_cell_count(&self) -> usize {
        self.min_cell_count
    }

    /// Cell count of the widest row.
    #[inline]
    pub fn max_cell_count(&self) -> usize {
        self.max_cell_count
    }

    /// Whether rows differ in cell count.
    #[inline]
    pub fn is_jagged(&self) -> bool {
        self.is_jagged
    }

    /// Appends a row; width statistics are stale until recomputed.
    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Recalculates min/max cells per row and jaggedness.
    pub fn recompute_statistics(&mut self) {
        let counts = self.rows.iter().map(Row::cell_count);
        self.min_cell_count = counts.clone().min().unwrap_or(0);
        self.max_cell_count = counts.max().unwrap_or(0);
        self.is_jagged = self.min_cell_count != self.max_cell_count;
    }

    /// Pads every short row with empty cells up to the widest row,
    /// then refreshes the statistics. Calling it again changes nothing.
    pub fn square_off(&mut self) {
        self.recompute_statistics();
        let width = self.max_cell_count;
        let mut padded = 0usize;
        for row in self.rows.iter_mut().filter(|row| row.cell_count() < width) {
            row.pad_to(width);
            padded += 1;
        }
        if padded > 0 {
            tracing::debug!("Squared off {} row(s) to {} cell(s)", padded, width);
        }
        self.recompute_statistics();
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
