//! Error types for toolkit operations

use thiserror::Error;

/// Main error type for Biolink model toolkit operations
#[derive(Error, Debug)]
pub enum BmtError {
    /// Schema parsing errors
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in schema if available
        location: Option<String>,
    },

    /// Construction-time schema errors: `is_a` cycles, dangling references
    #[error("Malformed schema: {message}")]
    MalformedSchema {
        /// Error message
        message: String,
        /// Schema element that is malformed
        element: Option<String>,
    },

    /// Hierarchy query against a name that does not resolve to any element
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Remote schema fetch errors
    #[error("Failed to fetch schema: {0}")]
    FetchError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, BmtError>;

impl BmtError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new malformed-schema error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSchema {
            message: message.into(),
            element: None,
        }
    }

    /// Create a new malformed-schema error naming the offending element
    #[must_use]
    pub fn malformed_element(message: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MalformedSchema {
            message: message.into(),
            element: Some(element.into()),
        }
    }

    /// Create a new invalid-query error
    #[must_use]
    pub fn invalid_query(name: impl Into<String>) -> Self {
        Self::InvalidQuery(format!("no element found for '{}'", name.into()))
    }

    /// Create a new fetch error
    #[must_use]
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }
}

impl From<serde_json::Error> for BmtError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for BmtError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
