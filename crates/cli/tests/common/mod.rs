//! Shared test utilities for splunking integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Build connection URLs that point at a local mock server.
//!
//! Invariants / Assumptions:
//! - No `SPLUNK_*` variable from the host leaks into a test run.

use assert_cmd::Command;
use wiremock::MockServer;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "changeme";

/// Returns a hermetic `splunking` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every connection variable is cleared so tests opt in explicitly.
pub fn splunking_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunking");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("SPLUNK_URL")
        .env_remove("SPLUNK_USERNAME")
        .env_remove("SPLUNK_PASSWORD")
        .env_remove("SPLUNK_HOST")
        .env_remove("SPLUNK_PORT")
        .env_remove("SPLUNK_PROTO")
        .env_remove("SPLUNK_OUTPUT_TYPE");

    cmd
}

/// Connection URL with test credentials for `server`.
pub fn connection_url(server: &MockServer) -> String {
    format!(
        "http://{}:{}@127.0.0.1:{}",
        USERNAME,
        PASSWORD,
        server.address().port()
    )
}
