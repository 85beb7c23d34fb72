//! splunking - send one authenticated request to a Splunk management endpoint.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the connection from `--url`/`SPLUNK_URL` or the `SPLUNK_*` variables.
//! - Submit the request and stream the raw response body to stdout.
//!
//! Does NOT handle:
//! - Request construction or connection parsing (see `crates/client` and `crates/config`).
//! - Response decoding; the body is written exactly as received.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Only the response body goes to stdout; status lines, logs and errors go to stderr.

mod args;
mod error;

use std::io::Write;

use anyhow::Context;
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use splunking_client::{Body, ClientError, Connection, SplunkClient};
use splunking_config::ConnectionLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConnectionLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigurationError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let connection = match cli.url.as_deref() {
        Some(raw) => Connection::from_url(raw),
        None => Connection::from_env(),
    }
    .map_err(ClientError::from)
    .context("Failed to resolve connection")?;

    tracing::debug!(
        host = %connection.host(),
        port = %connection.port(),
        protocol = %connection.protocol(),
        "Resolved connection"
    );

    let client = SplunkClient::new(connection)?;

    let args = cli.command.request_args();
    let body = args.data.clone().map(Body::from);
    let response = match &cli.command {
        Commands::Get(_) => client.get(&args.path, body).await,
        Commands::Post(_) => client.post(&args.path, body).await,
        Commands::Delete(_) => client.delete(&args.path, body).await,
    }
    .with_context(|| format!("Request to {} failed", client.endpoint(&args.path)))?;

    let status = response.status();
    eprintln!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );

    let bytes = response
        .bytes()
        .await
        .map_err(ClientError::from)
        .context("Failed to read response body")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;

    Ok(ExitCode::from_status(status))
}
