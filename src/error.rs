//! Error types for the recipe suggestion core

use std::fmt;

use thiserror::Error;

/// Result type for core operations
pub type ChefResult<T> = Result<T, ChefError>;

/// Transport-level failure reasons for model API requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Authentication failed (invalid API key)
    AuthenticationFailed,
    /// Rate limit exceeded
    RateLimitExceeded,
    /// Invalid request or unparsable response payload
    InvalidRequest(String),
    /// Network/connection error
    NetworkError(String),
    /// Server error from the provider
    ServerError(String),
    /// Service temporarily unavailable
    ServiceUnavailable,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::AuthenticationFailed => write!(f, "authentication failed"),
            ApiFailure::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ApiFailure::InvalidRequest(message) => write!(f, "invalid request: {message}"),
            ApiFailure::NetworkError(message) => write!(f, "network error: {message}"),
            ApiFailure::ServerError(status) => write!(f, "server error: {status}"),
            ApiFailure::ServiceUnavailable => write!(f, "service unavailable"),
        }
    }
}

/// Core error types
#[derive(Error, Debug)]
pub enum ChefError {
    #[error("image analysis failed: {reason}")]
    AnalysisFailed { reason: ApiFailure },

    #[error("recipe generation failed: {reason}")]
    GenerationFailed { reason: ApiFailure },

    #[error("{operation} rejected: another model call is in flight")]
    Busy { operation: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
