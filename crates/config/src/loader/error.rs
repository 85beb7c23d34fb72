//! Error types for connection resolution.
//!
//! Responsibilities:
//! - Define error variants for every resolution failure (URL and environment).
//!
//! Invariants:
//! - URL variants are reported in validation order: malformed, username,
//!   password, host.
//! - Environment variants name the missing variable.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while resolving a connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The connection URL could not be parsed.
    #[error("Malformed connection URL: {0}")]
    MalformedUrl(String),

    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,

    #[error("Host is required")]
    MissingHost,

    /// A required configuration value was not provided.
    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
