//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants and HTTP statuses to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use splunking_client::{ClientError, StatusCode};

/// Structured exit codes for splunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the server answered with a 2xx status.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// HTTP 401 - credentials rejected.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// HTTP 404.
    NotFound = 4,

    /// Invalid request (bad method or path) or HTTP 400.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 403 - insufficient privileges.
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// The connection could not be resolved from the URL or environment.
    ConfigurationError = 9,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Map an HTTP response status to an exit code.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            return ExitCode::Success;
        }
        match status.as_u16() {
            400 => ExitCode::ValidationError,
            401 => ExitCode::AuthenticationFailed,
            403 => ExitCode::PermissionDenied,
            404 => ExitCode::NotFound,
            429 => ExitCode::RateLimited,
            502..=504 => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Config(_) => ExitCode::ConfigurationError,
            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::Transport(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
