use thiserror::Error;

/// The reason a line could not be turned into a row.
#[derive(Error, Debug)]
pub enum ErrorKind {
    /// A `"` appeared inside a cell that was not opened with a quote.
    #[error("Unexpected quote character")]
    UnexpectedQuote,

    /// Content followed a cell before the next separator or end of line.
    #[error("Expected a cell delimiter")]
    MissingDelimiter,

    /// The line source failed while producing the next line.
    ///
    /// Built only through `CsvError::from_source`, which attaches the row reached.
    #[error("Read line failed: {0}")]
    Source(#[source] std::io::Error),
}

/// A parse failure with its 1-based row and character position.
///
/// Source failures carry the number of rows reached so far and a character
/// position of `0`, since no character of the failing line was ever seen.
#[derive(Error, Debug)]
#[error("CSV {row}:{character}  {kind}")]
pub struct CsvError {
    row: usize,
    character: usize,
    #[source]
    kind: ErrorKind,
}

impl CsvError {
    pub(crate) fn new(row: usize, character: usize, kind: ErrorKind) -> Self {
        CsvError { row, character, kind }
    }

    /// Wraps a line source failure after `rows_reached` rows were produced.
    pub(crate) fn from_source(rows_reached: usize, error: std::io::Error) -> Self {
        CsvError::new(rows_reached, 0, ErrorKind::Source(error))
    }

    /// 1-based row number of the failing line.
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based character position within the row, `0` for source failures.
    pub fn character(&self) -> usize {
        self.character
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Description of the failure without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// True when the failure came from the line source rather than the text.
    pub fn is_source_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::Source(_))
    }
}

/// Errors raised when a delimiter name cannot be understood.
#[derive(Error, Debug)]
pub enum DelimiterError {
    #[error("Invalid delimiter '{0}'")]
    NameError(String),
}

/// Main error type for operations that can fail for more than one reason.
#[derive(Error, Debug)]
pub enum TabularError {
    #[error("{0}")]
    CsvError(#[from] CsvError),

    #[error("{0}")]
    DelimiterError(#[from] DelimiterError),

    // Third-party library errors
    #[error("{0}")]
    PatternError(#[from] glob::PatternError),

    #[error("{0}")]
    GlobError(#[from] glob::GlobError),

    #[error("{0}: {1}")]
    WithContextError(String, Box<TabularError>),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, TabularError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| TabularError::WithContextError(message.to_owned(), Box::new(e)))
    }
}
