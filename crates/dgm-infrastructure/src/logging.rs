//! Structured logging with tracing
//!
//! One global subscriber: an env filter (`DGM_LOG` overrides the configured
//! level), a stderr layer in plain or JSON format and, optionally, a daily
//! rolling file. Stdout stays free for command output.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use dgm_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber
///
/// Fails on an invalid level or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = vec![stderr_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(path, config.json_format));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    info!(%level, file = ?config.file_output, "Logging initialized");
    Ok(())
}

fn stderr_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(path: &Path, json: bool) -> BoxedLayer {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path.file_stem().unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
    let layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(directory, stem))
        .with_ansi(false);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Level named by `level`, case-insensitively
pub fn parse_log_level(level: &str) -> Result<Level> {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            return Err(Error::configuration(format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            )));
        }
    };
    Ok(parsed)
}

/// Report which configuration file was read
pub fn log_config_loaded(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Configuration file loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults");
    }
}
