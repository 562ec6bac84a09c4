use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a dataset or assembling its arrays.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read dataset {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is the 1-based line in the source file, `column` is 0-based.
    #[error("line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("line {line}: expected {expected} fields but found {found}")]
    RowWidth {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error near line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("{rows} feature rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a row count (use a number, 0 or 'all')")]
    InvalidMaxRows { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DataError>;
