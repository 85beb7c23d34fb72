//! Environment variable parsing for connection configuration.
//!
//! Responsibilities:
//! - Read the `SPLUNK_*` connection variables.
//! - Apply environment variable values to a ConnectionLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Validation or defaulting (see `ConnectionLoader::build`).
//! - .env file loading (handled by ConnectionLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::ConnectionLoader;
use crate::constants::{
    ENV_HOST, ENV_OUTPUT_MODE, ENV_PASSWORD, ENV_PORT, ENV_PROTOCOL, ENV_USERNAME,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Unset variables leave the corresponding loader field untouched.
pub fn apply_env(loader: &mut ConnectionLoader) {
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(host) = env_var_or_none(ENV_HOST) {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none(ENV_PORT) {
        loader.set_port(Some(port));
    }
    if let Some(protocol) = env_var_or_none(ENV_PROTOCOL) {
        loader.set_protocol(Some(protocol));
    }
    if let Some(output_mode) = env_var_or_none(ENV_OUTPUT_MODE) {
        loader.set_output_mode(Some(output_mode));
    }

    tracing::debug!("Applied connection settings from environment");
}
