// crates/countries-core/src/error.rs

use thiserror::Error;

/// The one failure the browser knows about: the country source could not be
/// reached or answered with something unusable.
///
/// The variants only say *why*; callers treat all of them the same way (log
/// once, leave the list empty).
#[derive(Debug, Error)]
pub enum SourceError {
    #[cfg(feature = "fetch")]
    #[error("request to country source failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("country source answered with HTTP status {0}")]
    Status(u16),

    #[error("country payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
