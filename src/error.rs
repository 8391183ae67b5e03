//! Error types for keyword lookup, geometry loading and column extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading inputs or extracting columns.
///
/// Per-coordinate outcomes (unmapped identifiers, points outside every
/// polygon) are not errors; see [`crate::models::Resolution`].
#[derive(Error, Debug)]
pub enum GcmdError {
    /// Failed to read or write a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lookup table line did not have both a key and a keyword.
    #[error("{path}:{line}: expected `<key> <keyword>`, got {content:?}")]
    LookupParse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// A lookup key appeared twice while duplicates are rejected.
    #[error("{path}:{line}: duplicate lookup key {key:?}")]
    DuplicateKey {
        path: PathBuf,
        line: usize,
        key: String,
    },

    /// The shapefile could not be opened or decoded.
    #[error("failed to read shapefile {path}: {source}")]
    GeometryOpen {
        path: PathBuf,
        #[source]
        source: shapefile::Error,
    },

    /// A shapefile record is missing the attribute used as its key.
    #[error("{path}: record {record} has no usable {field:?} attribute")]
    MissingField {
        path: PathBuf,
        record: usize,
        field: String,
    },

    /// A row of the coordinate file could not be parsed.
    #[error("{path}:{line}: {reason}")]
    SiteParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The coordinate file header lacks a required column.
    #[error("{path}: header has no {column:?} column")]
    MissingColumn { path: PathBuf, column: String },

    /// The requested tab field range runs past the end of the line.
    #[error("column index {end} is out of range for a line with {fields} fields")]
    ColumnOutOfRange { end: usize, fields: usize },

    /// Column numbers are 1-based and the span must not be reversed.
    #[error("invalid column span {start}..={end}")]
    InvalidColumnSpan { start: usize, end: usize },
}

impl GcmdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GcmdError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GcmdError>;
