use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the trip-record pipeline.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city, month or day answer outside its closed set of choices.
    #[error("Invalid {field} '{value}'. Valid choices: {choices}")]
    InvalidUserInput {
        field: &'static str,
        value: String,
        choices: String,
    },

    /// A field in a trip file could not be parsed.
    #[error("Malformed {field} '{value}' in {} at row {row}", .path.display())]
    DataFormat {
        path: PathBuf,
        row: usize,
        field: &'static str,
        value: String,
    },

    /// A column the loader cannot do without is absent from the header.
    #[error("Column '{column}' missing from {}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A trip file could not be opened.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file.
    #[error("Failed to parse CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The city table could not be loaded or holds an unknown city.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
