//! Tracing set-up for the front end.

use crate::config::TuiConfig;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Opens the log file for appending, creating it if needed.
///
/// Earlier runs stay in the file, so a quick `replay` does not wipe the log
/// of the last interactive game.
pub fn open_log_file(path: impl AsRef<Path>) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Sends tracing output to the configured log file so it never draws over the UI.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &TuiConfig) -> io::Result<()> {
    let log_file = open_log_file(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
