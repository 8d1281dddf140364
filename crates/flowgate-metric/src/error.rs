use std::fmt;
use std::num::ParseIntError;

/// Result type for flowgate-metric operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the metric codec layer
#[derive(Debug)]
pub enum Error {
    /// Input line was empty or whitespace-only
    EmptyInput,

    /// Input line had fewer fields than the mandatory minimum
    MalformedFormat {
        /// Fields actually present in the line
        fields: usize,
    },

    /// A field that was present could not be parsed as its declared numeric type
    NumericParse {
        /// Log-line name of the offending field
        field: &'static str,
        source: ParseIntError,
    },

    /// Underlying write failed while formatting an output line
    Fmt(fmt::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "invalid metric line: empty string"),
            Error::MalformedFormat { fields } => {
                write!(f, "invalid metric line: invalid format ({} fields)", fields)
            }
            Error::NumericParse { field, source } => {
                write!(f, "invalid metric line: bad {} field: {}", field, source)
            }
            Error::Fmt(err) => write!(f, "format error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NumericParse { source, .. } => Some(source),
            Error::Fmt(err) => Some(err),
            Error::EmptyInput | Error::MalformedFormat { .. } => None,
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::Fmt(err)
    }
}
