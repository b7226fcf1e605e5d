use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reason a single cell could not be converted into its record field.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Expected a date such as 2010-12-01 08:26 or 12/1/2010 8:26 ({0})")]
    InvalidDate(String),
    #[error("Expected a decimal number: {0}")]
    InvalidDecimal(#[from] rust_decimal::Error)
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Could not open file [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("Header is missing required column [{column}]")]
    MissingColumn {
        column: &'static str
    },
    #[error("Line [{line}] has no value for column [{column}]")]
    MissingField {
        line: u64,
        column: &'static str
    },
    #[error("Line [{line}] has an invalid value [{value}] for column [{column}]: {source}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
        source: FieldError
    }
}

impl ParseError {
    pub fn open(path: &Path, source: io::Error) -> Self {
        Self::Open { path: path.to_path_buf(), source }
    }

    pub fn missing_field(line: u64, column: &'static str) -> Self {
        Self::MissingField { line, column }
    }

    pub fn invalid_field(line: u64, column: &'static str, value: &str, source: FieldError) -> Self {
        Self::InvalidField {
            line,
            column,
            value: value.to_string(),
            source
        }
    }
}
