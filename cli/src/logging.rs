use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(level: &str) -> String {
    format!("kata={level},kata_core={level}")
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;
    Ok(file)
}

/// Install the global subscriber. Call once, from `main`.
///
/// `RUST_LOG` overrides `level`. With `log_file` set, output is appended
/// there instead of stderr so the interactive menu keeps a clean screen;
/// its parent directory is created if needed.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()?;
            tracing::debug!(log_path = %path.display(), "logging to file");
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_both_crates() {
        assert_eq!(default_filter("debug"), "kata=debug,kata_core=debug");
    }

    #[test]
    fn test_open_log_file_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("fresh").join("kata.log");

        open_log_file(&log_path).unwrap();
        assert!(log_path.is_file());
    }
}
