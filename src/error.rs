//! Error handling for the CSV converter

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversorError {
    #[error("Invalid input directory {}: {reason}", .path.display())]
    InvalidInputDirectory { path: PathBuf, reason: String },

    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}:{line}: invalid birth date '{value}', expected DD/MM/YYYY")]
    DateParse {
        file: String,
        line: usize,
        value: String,
    },

    #[error("{file}:{line}: expected 4 fields, found {found}")]
    MissingField {
        file: String,
        line: usize,
        found: usize,
    },

    #[error("{file}:{line}: national ID '{value}' must have 11 characters, found {length}")]
    InvalidNationalId {
        file: String,
        line: usize,
        value: String,
        length: usize,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversorError>;

/// Field-level failure raised while converting a single line, before the
/// file name and line number are known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected 4 fields, found {0}")]
    MissingField(usize),

    #[error("invalid birth date '{0}'")]
    DateParse(String),

    #[error("national ID '{value}' has {length} characters")]
    NationalIdLength { value: String, length: usize },
}

impl FieldError {
    /// Attach the file and line the failure happened on.
    pub fn at(self, file: &str, line: usize) -> ConversorError {
        let file = file.to_string();
        match self {
            FieldError::MissingField(found) => ConversorError::MissingField { file, line, found },
            FieldError::DateParse(value) => ConversorError::DateParse { file, line, value },
            FieldError::NationalIdLength { value, length } => ConversorError::InvalidNationalId {
                file,
                line,
                value,
                length,
            },
        }
    }
}
