//! FILENAME: codec/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("dimension '{0}' is missing or malformed")]
    MalformedDimension(String),

    #[error("no size list at the top level or under 'dimension'")]
    MissingSize,

    #[error("row count {rows} does not match value count {values}")]
    ShapeMismatch { rows: usize, values: usize },

    #[error("duplicate category column '{0}': non-value columns must form a unique key")]
    DuplicateColumn(String),

    #[error("value key '{0}' not present")]
    NoValueColumn(String),

    #[error("category '{category}' not found in dimension '{dimension}'")]
    UnknownCategory { dimension: String, category: String },

    #[error("index {index} out of range for value array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("sparse value key '{0}' is not a valid array index")]
    InvalidValueKey(String),
}
