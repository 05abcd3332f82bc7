//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading a catalog snapshot.
#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Remote source answered with a non-success status
    #[error("Unexpected response: HTTP {status}")]
    UnexpectedResponse { status: u16 },

    /// Local file could not be read
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Document is not a JSON array of course records
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Source string is neither a path nor an http(s) URL
    #[error("Unsupported catalog source: {source_str}")]
    UnsupportedSource { source_str: String },
}

impl CatalogError {
    /// Returns true if retrying the load might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CatalogError::Network { .. } | CatalogError::UnexpectedResponse { .. }
        )
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse {
            message: err.to_string(),
        }
    }
}
