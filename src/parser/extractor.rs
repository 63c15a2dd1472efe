//! Splits one line of text into cells.
//!
//! Each pass of the outer loop captures one cell: leading spaces are skipped,
//! an opening quote switches the cell into quoted mode, and characters are
//! gathered until the closing quote, an unquoted separator, or the end of the
//! line. A quote preceded by a backslash does not close a quoted cell; both
//! characters stay in the text.

use crate::error::CsvError;
use crate::error::ErrorKind;
use crate::helpers::cursor::Cursor;
use crate::helpers::string::QUOTE;
use crate::model::Cell;
use crate::model::Delimiter;
use crate::model::Row;

const SPACE: char = ' ';
const BACKSLASH: char = '\\';

/// Parses `text` as row `row_number` using the separator of `delimiter`.
pub fn extract_row(row_number: usize, delimiter: Delimiter, text: &str) -> Result<Row, CsvError> {
    let cells = extract_cells(row_number, delimiter.separator(), text)?;
    Ok(Row::new(row_number, delimiter, cells))
}

fn extract_cells(row_number: usize, separator: char, text: &str) -> Result<Vec<Cell>, CsvError> {
    let mut cells = Vec::new();
    let mut cursor = Cursor::new(text);

    while cursor.has_more() {
        cursor.skip_while(|character| character == SPACE);

        let is_quoted = cursor.peek() == Some(QUOTE);
        if is_quoted {
            cursor.skip();
        }

        let mut content = String::new();
        let mut last = None;
        while let Some(character) = cursor.scan() {
            match character {
                QUOTE if !is_quoted => {
                    // Position already points past the quote, i.e. its 1-based column
                    return Err(CsvError::new(row_number, cursor.position(), ErrorKind::UnexpectedQuote));
                }
                QUOTE if last != Some(BACKSLASH) => break,
                _ if character == separator && !is_quoted => {
                    // Leave the separator for the delimiter check below
                    cursor.back();
                    break;
                }
                _ => (),
            }
            content.push(character);
            last = Some(character);
        }

        if is_quoted {
            cells.push(Cell::new(true, content));
        } else {
            cells.push(Cell::new(false, content.trim()));
        }

        cursor.skip_while(|character| character == SPACE);
        if cursor.has_more() && cursor.peek() != Some(separator) {
            return Err(CsvError::new(row_number, cursor.position() + 1, ErrorKind::MissingDelimiter));
        }
        cursor.skip();
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Row {
        extract_row(1, Delimiter::Comma, text).unwrap()
    }

    fn cells(row: &Row) -> Vec<(bool, &str)> {
        row.cells().iter().map(|cell| (cell.is_quoted(), cell.text())).collect()
    }

    #[test]
    fn simple_pair() {
        let row = parse("1,2");

        assert_eq!(cells(&row), vec![(false, "1"), (false, "2")]);
        assert_eq!(row.row_number(), 1);
    }

    #[test]
    fn empty_line_has_no_cells() {
        assert_eq!(parse("").cell_count(), 0);
    }

    #[test]
    fn blank_line_has_one_empty_cell() {
        assert_eq!(cells(&parse("   ")), vec![(false, "")]);
    }

    #[test]
    fn unquoted_cells_are_trimmed() {
        let row = parse(" 1 ,  2, 3  ");

        assert_eq!(row.texts(), vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_cells_between_separators() {
        let row = parse("1,2,,4,,,7");

        assert_eq!(row.texts(), vec!["1", "2", "", "4", "", "", "7"]);
    }

    #[test]
    fn trailing_separator_adds_no_cell() {
        assert_eq!(parse("1,2,").texts(), vec!["1", "2"]);
    }

    #[test]
    fn quoted_cells_keep_whitespace() {
        let row = parse("\" 1\" , \" 2\", \"3\"  ");

        assert_eq!(cells(&row), vec![(true, " 1"), (true, " 2"), (true, "3")]);
    }

    #[test]
    fn quoted_cells_hold_separators() {
        let row = parse("1,\"The USA, and capital.\",x");

        assert_eq!(row.texts(), vec!["1", "The USA, and capital.", "x"]);
    }

    #[test]
    fn escaped_quotes_stay_verbatim() {
        let row = parse("1,\"The \\\"UK\\\" - capital\",2");

        assert_eq!(row.texts(), vec!["1", "The \\\"UK\\\" - capital", "2"]);
        assert_eq!(row.cell(1).unwrap().formatted(), "\"The \\\"UK\\\" - capital\"");
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let row = parse("\"A\", \" B ");

        assert_eq!(cells(&row), vec![(true, "A"), (true, " B ")]);
    }

    #[test]
    fn tab_only_trims_unquoted() {
        let row = extract_row(1, Delimiter::Tab, " 1 \t \" 2\"\t 3  ").unwrap();

        assert_eq!(cells(&row), vec![(false, "1"), (true, " 2"), (false, "3")]);
    }

    #[test]
    fn tab_mode_treats_commas_as_text() {
        let row = extract_row(1, Delimiter::Tab, "1\t2\t 3 \t 4,4.5 as one\t5").unwrap();

        assert_eq!(row.texts(), vec!["1", "2", "3", "4,4.5 as one", "5"]);
        assert_eq!(row.delimiter(), Delimiter::Tab);
    }

    #[test]
    fn comma_mode_keeps_tabs_in_text() {
        let row = parse("a\tb,c");

        assert_eq!(row.texts(), vec!["a\tb", "c"]);
    }

    #[test]
    fn content_after_closing_quote_fails() {
        let error = extract_row(2, Delimiter::Comma, "\"a\",\"b\" !,\"c\"").unwrap_err();

        assert_eq!(error.row(), 2);
        assert_eq!(error.character(), 9);
        assert!(matches!(error.kind(), ErrorKind::MissingDelimiter));
        assert!(error.message().contains("Expected a cell delimiter"));
    }

    #[test]
    fn quote_inside_bare_cell_fails() {
        let error = extract_row(3, Delimiter::Comma, "ab,c\"d").unwrap_err();

        assert_eq!(error.row(), 3);
        assert_eq!(error.character(), 5);
        assert!(matches!(error.kind(), ErrorKind::UnexpectedQuote));
    }

    #[test]
    fn escaped_quote_in_bare_cell_still_fails() {
        let error = extract_row(1, Delimiter::Comma, "a\\\"b").unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::UnexpectedQuote));
        assert_eq!(error.character(), 3);
    }

    #[test]
    fn positions_count_characters() {
        let error = extract_row(1, Delimiter::Comma, "\"é\" x").unwrap_err();

        assert_eq!(error.character(), 5);
    }

    #[test]
    fn round_trip_keeps_texts_and_quoting() {
        let original = parse(" plain , \" padded \",\"a,b\", \"\" ,x");
        let rendered = original.as_delimited_text();
        let reparsed = parse(&rendered);

        assert_eq!(rendered, "plain,\" padded \",\"a,b\",\"\",x");
        assert_eq!(cells(&original), cells(&reparsed));
    }
}
