use crate::error::CsvError;
use crate::helpers::lines::LineSource;
use crate::model::Delimiter;
use crate::model::Row;
use crate::parser::extractor::extract_row;

/// A forward-only stream of parsed rows.
///
/// Each pull consumes one line and bumps the row counter, so a line that fails
/// to parse is not seen again. A failure of the line source ends the stream.
pub struct RowStream<S: LineSource> {
    source: Option<S>,
    delimiter: Delimiter,
    rows_read: usize,
}

impl<S: LineSource> RowStream<S> {
    pub fn new(source: S, delimiter: Delimiter) -> Self {
        RowStream {
            source: Some(source),
            delimiter,
            rows_read: 0,
        }
    }

    /// Number of lines pulled so far, including any that failed to parse.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// True once the source is exhausted or has failed.
    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Returns the next parsed row, or `None` at the end of the stream.
    pub fn next_row(&mut self) -> Result<Option<Row>, CsvError> {
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };
        let line = match source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                // Dropping the source releases the underlying handle
                self.source = None;
                return Ok(None);
            }
            Err(error) => {
                self.source = None;
                tracing::warn!("Line source failed after {} row(s): {}", self.rows_read, error);
                return Err(CsvError::from_source(self.rows_read, error));
            }
        };

        self.rows_read += 1;
        let row = extract_row(self.rows_read, self.delimiter, &line)?;
        tracing::trace!("Streamed row {} with {} cell(s)", row.row_number(), row.cell_count());
        Ok(Some(row))
    }
}

impl<S: LineSource> Iterator for RowStream<S> {
    type Item = Result<Row, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::helpers::lines::MemoryLines;

    struct FailingSource {
        lines: Vec<&'static str>,
    }

    impl LineSource for FailingSource {
        fn next_line(&mut self) -> std::io::Result<Option<String>> {
            if self.lines.is_empty() {
                Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "disk gone"))
            } else {
                Ok(Some(self.lines.remove(0).to_owned()))
            }
        }
    }

    #[test]
    fn stream_numbers_rows_from_one() {
        let mut stream = RowStream::new(MemoryLines::new(["a,b", "", "c"]), Delimiter::Comma);

        let first = stream.next_row().unwrap().unwrap();
        assert_eq!(first.row_number(), 1);
        assert_eq!(first.texts(), vec!["a", "b"]);

        let second = stream.next_row().unwrap().unwrap();
        assert_eq!(second.row_number(), 2);
        assert_eq!(second.cell_count(), 0);

        assert_eq!(stream.next_row().unwrap().unwrap().row_number(), 3);
        assert!(stream.next_row().unwrap().is_none());
        assert!(stream.is_finished());
        assert!(stream.next_row().unwrap().is_none());
        assert_eq!(stream.rows_read(), 3);
    }

    #[test]
    fn parse_failure_consumes_only_that_line() {
        let mut stream = RowStream::new(MemoryLines::new(["ok", "\"a\" b", "fine"]), Delimiter::Comma);

        assert!(stream.next_row().unwrap().is_some());
        let error = stream.next_row().unwrap_err();
        assert_eq!(error.row(), 2);
        assert!(matches!(error.kind(), ErrorKind::MissingDelimiter));

        let row = stream.next_row().unwrap().unwrap();
        assert_eq!(row.row_number(), 3);
        assert_eq!(row.texts(), vec!["fine"]);
    }

    #[test]
    fn source_failure_ends_stream() {
        let mut stream = RowStream::new(FailingSource { lines: vec!["1", "2"] }, Delimiter::Comma);

        assert!(stream.next_row().unwrap().is_some());
        assert!(stream.next_row().unwrap().is_some());
        let error = stream.next_row().unwrap_err();
        assert!(error.is_source_failure());
        assert_eq!(error.row(), 2);
        assert_eq!(error.character(), 0);

        assert!(stream.is_finished());
        assert!(stream.next_row().unwrap().is_none());
    }

    #[test]
    fn stream_iterates_results() {
        let stream = RowStream::new(MemoryLines::new(["1\t2", "3"]), Delimiter::Tab);
        let counts: Vec<usize> = stream.map(|row| row.unwrap().cell_count()).collect();

        assert_eq!(counts, vec![2, 1]);
    }
}
