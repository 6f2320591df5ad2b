use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, stdout carries nothing but manifests.
pub fn init_tracing(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level {}", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to init tracing: {}", err))
}

/// Write fully rendered manifests to stdout in one go.
pub fn emit(manifests: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(manifests.as_bytes())
        .and_then(|_| stdout.flush())
        .with_context(|| "Failed to write manifest to stdout".to_string())
}
