//! FILENAME: jstat-format/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error(transparent)]
    Codec(#[from] codec::CodecError),

    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Naming(#[from] model::InvalidNamingMode),

    #[error(transparent)]
    Version(#[from] model::UnsupportedVersion),

    #[error("unsupported output format '{requested}' for a {class}")]
    UnsupportedOutputFormat {
        class: &'static str,
        requested: String,
    },

    #[error("a {0} cannot be read from a table")]
    UnsupportedSource(&'static str),

    #[error("link item {0} has no 'href'")]
    MissingHref(usize),

    #[error("link item {index} has unsupported class '{class}'")]
    UnknownClass { index: usize, class: String },

    #[error("a dimension table needs an 'id' column and exactly one label column")]
    InvalidDimensionTable,
}
