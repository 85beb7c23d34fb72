//! Connection loader for connection URLs, environment variables and `.env` files.
//!
//! Responsibilities:
//! - Resolve a [`Connection`](crate::Connection) from a connection URL.
//! - Provide a builder-pattern `ConnectionLoader` that merges environment
//!   variables and explicit values, then validates them in one place.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod connection_url;
mod env;
mod error;

pub use builder::ConnectionLoader;
pub use env::env_var_or_none;
pub use error::{ConfigError, Result};

#[cfg(test)]
mod tests;
