//! Error taxonomy for index and profile loading.
//!
//! `IndexLoadError` is fatal at startup: no partial dashboard is served
//! when the station index is unavailable. `ProfileParseError` is local to
//! one render: the map and sibling charts stay functional.

use thiserror::Error;

/// The station index file is missing, unreadable or malformed.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("cannot read station index {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("station index: {0}")]
    Csv(#[from] csv::Error),

    #[error("station index header is \"{found}\", expected \"{expected}\"")]
    Header { found: String, expected: &'static str },

    #[error("station index row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("station index row {row}: bad {field} value \"{value}\"")]
    Field {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// A profile file is missing, truncated or fails required numeric coercion.
#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("cannot read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("profile: {0}")]
    Csv(#[from] csv::Error),

    #[error("profile is truncated: {lines} lines, need at least {required}")]
    Truncated { lines: usize, required: usize },

    #[error("profile data line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("profile data line {line}: pressure \"{value}\" is not numeric")]
    BadPressure { line: usize, value: String },
}
