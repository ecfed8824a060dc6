//! Error handling types for test-name-dropdown
//!
//! Listing failures are not errors at this level: they are rendered into the
//! dropdowns (see [`crate::listing::ListingFailure`]). This enum covers the
//! things that stop the populator from running at all.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DropdownError {
    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the settings schema
    #[error("Invalid configuration in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Listing endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// Page description could not be parsed
    #[error("Invalid page: {message}")]
    Page { message: String },

    /// Document backend has no element with this id
    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dropdown operations
pub type DropdownResult<T> = Result<T, DropdownError>;

impl DropdownError {
    pub fn invalid_endpoint(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        DropdownError::InvalidEndpoint {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn page(message: impl Into<String>) -> Self {
        DropdownError::Page {
            message: message.into(),
        }
    }

    pub fn element_not_found(id: impl Into<String>) -> Self {
        DropdownError::ElementNotFound { id: id.into() }
    }
}
