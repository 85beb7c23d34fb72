//! Configuration type definitions for splunking.
//!
//! Responsibilities:
//! - Define the resolved connection descriptor and protocol types.
//!
//! Does NOT handle:
//! - Loading configuration from URLs or environment variables (see `loader` module).
//! - Actual network connections (see client crate).

pub(crate) mod connection;

pub use connection::{Connection, Protocol};
