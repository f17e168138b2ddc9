//! Crate-level error types.

use std::fmt;

/// Errors produced by the tableau crate.
///
/// The animation core itself cannot fail; only the options layer touches
/// the filesystem.
#[derive(Debug)]
pub enum TableauError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TableauError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for TableauError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
