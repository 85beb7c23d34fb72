//! Connection configuration for splunking.
//!
//! This crate resolves the connection descriptor used to talk to a Splunk
//! management endpoint, either from a single connection URL or from
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConnectionLoader, Result, env_var_or_none};
pub use types::{Connection, Protocol};
