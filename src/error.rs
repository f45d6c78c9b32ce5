use core::fmt::Display;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a grid or writing an export.
#[derive(Debug, Clone)]
pub enum Error {
    /// A row of the grid has a different number of cells than expected.
    WidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The grid has a different number of rows than expected.
    HeightMismatch { expected: usize, got: usize },

    /// Failed to parse color string.
    ColorParsing(String),

    /// I/O error occurred.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::WidthMismatch { row, expected, got } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, got, expected
            ),
            Error::HeightMismatch { expected, got } => {
                write!(f, "grid has {} rows, expected {}", got, expected)
            }
            Error::ColorParsing(s) => write!(f, "failed to parse color: {}", s),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
