use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `swatchr=trace`.
pub const LOG_FILTER_ENV: &str = "SWATCHR_LOG";

/// Sends `tracing` output to `path`. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
