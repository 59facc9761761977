//! File logging. The TUI owns stdout, so records go to a log file under
//! the data directory instead.

use color_eyre::{Result, eyre::eyre};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Installs the global subscriber and returns the file it writes to.
/// `RUST_LOG` takes precedence over `[logging] level`.
pub fn init(config: &Config) -> Result<PathBuf> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter(&config.logging.level))
        .with(fmt_layer)
        .try_init()
        .map_err(|error| eyre!("failed to install log subscriber: {error}"))?;

    Ok(path)
}

fn build_env_filter(configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(build_env_filter("everyones_ai=loud").to_string(), "info");
        assert_eq!(build_env_filter("debug").to_string(), "debug");
    }
}
