//! Defines the error and result types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// The result type that uses [`LoadError`] as the error type.
pub type Result<T> = std::result::Result<T, LoadError>;

/// The error type for loading a dataset of predicted prices.
///
/// Every variant is fatal: a dataset that fails to load is never
/// partially available.
#[derive(Debug)]
pub enum LoadError {
    /// A [`std::io::Error`] encountered while opening or inspecting the source file.
    Io(io::Error),

    /// A [`csv::Error`] encountered while reading the header or the records.
    Csv(csv::Error),

    /// A required column is absent from the header.
    MissingColumn { name: &'static str },

    /// A required numeric cell is empty or cannot be parsed as a number.
    ///
    /// `row` is the 1-based record number, not counting the header.
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let load_error = "dataset load error:";

        match self {
            LoadError::Io(error) => write!(f, "{load_error} I/O error: {error}"),
            LoadError::Csv(error) => write!(f, "{load_error} CSV error: {error}"),
            LoadError::MissingColumn { name } => {
                write!(f, "{load_error} the required \"{name}\" column is missing")
            }
            LoadError::InvalidValue { row, column, value } => write!(
                f,
                "{load_error} record {row} has an invalid \"{column}\" value: \"{value}\""
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(error) => Some(error),
            LoadError::Csv(error) => Some(error),
            LoadError::MissingColumn { .. } => None,
            LoadError::InvalidValue { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(error)
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(error)
    }
}
