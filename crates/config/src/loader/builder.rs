//! Connection loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConnectionLoader` for merging configuration sources.
//! - Validate required fields and fill defaults when building the final `Connection`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Connection URL parsing (delegated to connection_url.rs).
//!
//! Invariants / Assumptions:
//! - `build()` is a pure function of the loader's fields; it never reads the environment.
//! - Required fields are checked in order: username, password, host.
//! - Empty values are treated the same as missing values.
//! - Protocol is coerced to http/https; port and output mode fall back to defaults.

use secrecy::{ExposeSecret, SecretString};

use super::env::apply_env;
use super::error::{ConfigError, Result};
use crate::constants::{
    DEFAULT_OUTPUT_MODE, DEFAULT_SPLUNK_PORT, ENV_DOTENV_DISABLED, ENV_HOST, ENV_PASSWORD,
    ENV_USERNAME,
};
use crate::types::{Connection, Protocol};

/// Loader that builds a [`Connection`] from environment variables and explicit values.
#[derive(Default)]
pub struct ConnectionLoader {
    username: Option<String>,
    password: Option<SecretString>,
    host: Option<String>,
    port: Option<String>,
    protocol: Option<String>,
    output_mode: Option<String>,
}

impl ConnectionLoader {
    /// Create a new, empty connection loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if e.not_found() => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Read configuration from environment variables.
    ///
    /// Values already present on the loader are replaced by non-empty
    /// environment values.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the host name or IP address.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the management port.
    pub fn with_port(mut self, port: String) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the protocol. Values other than `http` become `https` on build.
    pub fn with_protocol(mut self, protocol: String) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Set the `output_mode` hint.
    pub fn with_output_mode(mut self, output_mode: String) -> Self {
        self.output_mode = Some(output_mode);
        self
    }

    /// Build the final connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] naming the environment
    /// variable of the first missing required field.
    pub fn build(self) -> Result<Connection> {
        let username = non_empty(self.username).ok_or_else(|| missing(ENV_USERNAME))?;
        let password = self
            .password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or_else(|| missing(ENV_PASSWORD))?;
        let host = non_empty(self.host).ok_or_else(|| missing(ENV_HOST))?;

        let protocol = match self.protocol.as_deref() {
            None => Protocol::default(),
            Some(value) => {
                let protocol = Protocol::coerce(value);
                if protocol.as_str() != value {
                    tracing::warn!(
                        supplied = value,
                        "Unsupported protocol, falling back to {}",
                        protocol
                    );
                }
                protocol
            }
        };

        Ok(Connection {
            username,
            password,
            host,
            port: non_empty(self.port).unwrap_or_else(default_port),
            protocol,
            output_mode: non_empty(self.output_mode).unwrap_or_else(default_output_mode),
        })
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<String>) {
        self.port = port;
    }

    pub(crate) fn set_protocol(&mut self, protocol: Option<String>) {
        self.protocol = protocol;
    }

    pub(crate) fn set_output_mode(&mut self, output_mode: Option<String>) {
        self.output_mode = output_mode;
    }
}

/// Default management port as an owned value.
pub(crate) fn default_port() -> String {
    DEFAULT_SPLUNK_PORT.to_string()
}

/// Default `output_mode` as an owned value.
pub(crate) fn default_output_mode() -> String {
    DEFAULT_OUTPUT_MODE.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn missing(var: &str) -> ConfigError {
    ConfigError::MissingConfiguration(var.to_string())
}

impl Connection {
    /// Resolve a connection from `SPLUNK_*` environment variables.
    ///
    /// Shorthand for `ConnectionLoader::new().from_env().build()`.
    pub fn from_env() -> Result<Connection> {
        ConnectionLoader::new().from_env().build()
    }
}
