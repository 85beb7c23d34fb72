//! Splunk REST API request helper.
//!
//! This crate builds and submits authenticated requests against a Splunk
//! management endpoint described by a [`Connection`]. Responses are returned
//! raw; interpreting Splunk's JSON or XML payloads is left to the caller.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::SplunkClient;
pub use error::{ClientError, Result};
pub use reqwest::{Body, Method, Request, Response, StatusCode};
pub use splunking_config::{ConfigError, Connection, Protocol};
