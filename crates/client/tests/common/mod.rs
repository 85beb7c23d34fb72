//! Common test utilities for integration tests.
//!
//! This module provides shared helpers for exercising the client against a
//! wiremock server.
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use splunking_client::{Body, ClientError, Connection, SplunkClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";

/// Connection pointing at the mock server over plain HTTP.
pub fn connection_for(server: &MockServer) -> Connection {
    Connection::from_url(&format!(
        "http://{}:{}@127.0.0.1:{}",
        USERNAME,
        PASSWORD,
        server.address().port()
    ))
    .expect("mock server connection URL should resolve")
}

/// Client pointing at the mock server.
pub fn client_for(server: &MockServer) -> SplunkClient {
    SplunkClient::new(connection_for(server)).expect("client should build")
}

/// Number of `output_mode` parameters on a received request.
#[allow(dead_code)]
pub fn output_mode_count(request: &wiremock::Request) -> usize {
    request
        .url
        .query_pairs()
        .filter(|(key, _)| key == "output_mode")
        .count()
}
