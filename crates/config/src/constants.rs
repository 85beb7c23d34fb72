//! Centralized constants for the splunking workspace.
//!
//! Default values and environment variable names shared by the resolver
//! and the CLI.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: &str = "8089";

/// Default protocol when none (or an unknown one) is supplied.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default `output_mode` forwarded to the REST API.
pub const DEFAULT_OUTPUT_MODE: &str = "json";

/// Query parameter carrying the requested response format.
pub const OUTPUT_MODE_PARAM: &str = "output_mode";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_USERNAME: &str = "SPLUNK_USERNAME";
pub const ENV_PASSWORD: &str = "SPLUNK_PASSWORD";
pub const ENV_HOST: &str = "SPLUNK_HOST";
pub const ENV_PORT: &str = "SPLUNK_PORT";
pub const ENV_PROTOCOL: &str = "SPLUNK_PROTO";
pub const ENV_OUTPUT_MODE: &str = "SPLUNK_OUTPUT_TYPE";

/// Connection URL consumed by the CLI (`--url`).
pub const ENV_URL: &str = "SPLUNK_URL";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
