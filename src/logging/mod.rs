//! Application logging functionality
//!
//! Log output goes to stderr, and with `--log-file` also to a dated file
//! under the config directory.

use std::fs;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Get the path to the slabikar config directory
pub fn config_dir() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    config_dir.join("slabikar")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("slabikar-{}.log", timestamp))
}

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. The returned guard flushes
/// the log file when dropped and must be held until the program exits.
pub fn init(verbosity: u8, log_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
    };

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter());

    let (file_layer, guard) = if log_file {
        fs::create_dir_all(logs_dir())?;
        let log_file_path = current_log_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr)
        .with(file_layer)
        .try_init()?;

    if guard.is_some() {
        tracing::info!("Logging to {}", current_log_file().display());
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }

    #[test]
    fn log_file_lives_under_config_dir() {
        let path = current_log_file();
        assert!(path.starts_with(config_dir()));
        let file_name = path.file_name().unwrap().to_string_lossy();
        assert!(file_name.starts_with("slabikar-"));
        assert!(file_name.ends_with(".log"));
    }
}
