//! Connection descriptor types.
//!
//! Responsibilities:
//! - Define the resolved [`Connection`] used to build every request in a session.
//! - Define [`Protocol`] and its coercion rule.
//! - Provide serde support that routes deserialization through the same
//!   validation as the URL and environment resolvers.
//!
//! Does NOT handle:
//! - Parsing connection URLs or reading environment variables (see `loader`).
//! - Building or sending HTTP requests (see the client crate).
//!
//! Invariants:
//! - A `Connection` can only be obtained from `ConnectionLoader::build()`, so
//!   username, password and host are non-empty and port/output mode are set.
//! - `Protocol` only ever holds `http` or `https`.
//! - The password is a `SecretString` and never appears in `Debug` output.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROTOCOL;
use crate::loader::{ConfigError, ConnectionLoader};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Serialize, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }
}

/// Transport protocol for the management endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    /// Coerce an arbitrary scheme or setting into a protocol.
    ///
    /// Only the exact value `http` selects plain HTTP; everything else,
    /// including the empty string, becomes `https`.
    pub fn coerce(value: &str) -> Self {
        match value {
            "http" => Self::Http,
            _ => Self::Https,
        }
    }

    /// The lowercase scheme string (`"http"` or `"https"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => DEFAULT_PROTOCOL,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved connection parameters for a Splunk management endpoint.
///
/// Construct one with [`Connection::from_url`], [`Connection::from_env`] or
/// [`ConnectionLoader`]. The value is read-only and can be shared freely
/// between tasks issuing independent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawConnection")]
pub struct Connection {
    pub(crate) username: String,
    #[serde(serialize_with = "secret_string::serialize")]
    pub(crate) password: SecretString,
    pub(crate) host: String,
    pub(crate) port: String,
    #[serde(rename = "proto")]
    pub(crate) protocol: Protocol,
    #[serde(rename = "output_type")]
    pub(crate) output_mode: String,
}

impl Connection {
    /// Username used for basic authentication.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password used for basic authentication.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Response format hint sent as the `output_mode` query parameter.
    pub fn output_mode(&self) -> &str {
        &self.output_mode
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
            && self.host == other.host
            && self.port == other.port
            && self.protocol == other.protocol
            && self.output_mode == other.output_mode
    }
}

impl Eq for Connection {}

/// Unvalidated wire form of a [`Connection`].
///
/// Field names on the wire are `username`, `password`, `host`, `port`,
/// `proto` and `output_type`; `protocol` and `output_mode` are accepted too.
#[derive(Deserialize)]
struct RawConnection {
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<String>,
    #[serde(rename = "proto", alias = "protocol")]
    protocol: Option<String>,
    #[serde(rename = "output_type", alias = "output_mode")]
    output_mode: Option<String>,
}

impl TryFrom<RawConnection> for Connection {
    type Error = ConfigError;

    fn try_from(raw: RawConnection) -> Result<Self, Self::Error> {
        let mut loader = ConnectionLoader::new();
        loader.set_username(raw.username);
        loader.set_password(raw.password.map(|p| SecretString::new(p.into())));
        loader.set_host(raw.host);
        loader.set_port(raw.port);
        loader.set_protocol(raw.protocol);
        loader.set_output_mode(raw.output_mode);
        loader.build()
    }
}
