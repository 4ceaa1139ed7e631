//! Error types for box_content_sdk.

use thiserror::Error;

/// Main error type for request construction and execution.
#[derive(Error, Debug)]
pub enum BoxError {
    /// A required identifier, name, token or URI was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configured base URI could not be parsed.
    #[error("invalid base uri: {0}")]
    InvalidUri(#[from] url::ParseError),

    /// The API answered with a non-success status.
    #[error("box api returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network request error.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading an upload stream or writing a download stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Local SQLite store error.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl BoxError {
    /// Status code of an HTTP failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BoxError::Http { status, .. } => Some(*status),
            BoxError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the access token was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for box_content_sdk operations.
pub type Result<T> = std::result::Result<T, BoxError>;

/// Fails with `InvalidArgument` when `value` is blank.
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoxError::InvalidArgument(format!("{what} cannot be empty")));
    }
    Ok(())
}
