use crate::error::DelimiterError;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Separator used between cells, fixed for a whole parse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma-separated values
    #[default]
    Comma,
    /// Tab-separated values
    Tab,
}

impl Delimiter {
    /// Returns the separator character.
    pub const fn separator(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
        }
    }

    /// Parses a delimiter from its name or its literal separator.
    /// Supports "comma", "csv", "," and "tab", "tsv", "\t" (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, DelimiterError> {
        if name == "\t" {
            return Ok(Delimiter::Tab);
        }
        match name.trim().to_ascii_uppercase().as_str() {
            "COMMA" | "CSV" | "," => Ok(Delimiter::Comma),
            "TAB" | "TSV" | "\\T" => Ok(Delimiter::Tab),
            _ => Err(DelimiterError::NameError(name.to_owned())),
        }
    }

    /// Picks the delimiter from a file extension, defaulting to comma.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "tsv" | "tab" => Delimiter::Tab,
            _ => Delimiter::Comma,
        }
    }

    /// Picks the delimiter from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|extension| extension.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }
}

impl FromStr for Delimiter {
    type Err = DelimiterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name)
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
