use crate::helpers::string::quote;
use std::fmt::Display;

/// A single field of a row.
///
/// `text` never includes the surrounding quotes; `formatted` adds them back
/// when the field was quoted in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    is_quoted: bool,
    text: String,
    formatted: String,
}

impl Cell {
    pub fn new(is_quoted: bool, text: impl Into<String>) -> Self {
        let text = text.into();
        let formatted = if is_quoted { quote(&text) } else { text.clone() };
        Cell {
            is_quoted,
            text,
            formatted,
        }
    }

    /// An unquoted cell with no text, used to pad short rows.
    pub fn empty() -> Self {
        Cell::new(false, "")
    }

    /// Whether the field was wrapped in quotes in the input.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.is_quoted
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text wrapped in quotes if it was quoted in the input.
    #[inline]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_quoted {
            write!(f, "[QUOTED] {}", self.formatted)
        } else {
            write!(f, "{}", self.formatted)
        }
    }
}
