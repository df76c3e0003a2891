//! FILENAME: fetch/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error {status} {reason} for {url}")]
    Http {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),
}
