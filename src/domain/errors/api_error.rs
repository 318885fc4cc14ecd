//! Studio API error types.

use thiserror::Error;

/// Failure of a single round trip to the studio backend.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out")]
    Timeout,

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request rejected: {message}")]
    Rejected { message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates HTTP status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates rejected error, used for requests refused before or by the backend.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the backend was never reached.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(ApiError::network("refused").is_network_error());
        assert!(ApiError::Timeout.is_network_error());
        assert!(!ApiError::status(500, "boom").is_network_error());
        assert!(!ApiError::rejected("empty name").is_network_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::status(502, "Bad Gateway").to_string(),
            "backend returned 502: Bad Gateway"
        );
        assert_eq!(
            ApiError::not_found("campaign c9").to_string(),
            "campaign c9 not found"
        );
    }
}
