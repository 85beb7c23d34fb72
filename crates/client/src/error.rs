//! Error types for the splunking client.

use splunking_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building or submitting requests.
///
/// None of these are retried internally; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request could not be constructed (bad method or target URL).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure (DNS, connection refused, TLS handshake, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Check if this error happened before any request was sent.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidRequest(_))
    }
}
