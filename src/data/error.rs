use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use crate::error::InvalidInput;

/// The data loading module's result type.
pub type Result<T> = std::result::Result<T, LoadErr>;

/// Failures while turning a CSV source into a `SampleSet`.
#[derive(Debug)]
pub enum LoadErr {
    Io(io::Error),
    Csv(csv::Error),
    /// The header row lacks a required column.
    MissingColumn(String),
    /// A field could not be parsed as an integer.
    Malformed {
        line: u64,
        column: String,
        value: String,
    },
    /// The rows parsed but do not form a valid sample set (e.g. there are none).
    Invalid(InvalidInput),
}

impl Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErr::Io(e) => write!(f, "io error: {e}"),
            LoadErr::Csv(e) => write!(f, "csv error: {e}"),
            LoadErr::MissingColumn(column) => {
                write!(f, "the header has no '{column}' column")
            }
            LoadErr::Malformed {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}: '{value}' in column '{column}' is not an integer"
            ),
            LoadErr::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadErr::Io(e) => Some(e),
            LoadErr::Csv(e) => Some(e),
            LoadErr::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for LoadErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<InvalidInput> for LoadErr {
    fn from(value: InvalidInput) -> Self {
        Self::Invalid(value)
    }
}
