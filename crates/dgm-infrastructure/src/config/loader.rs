//! Layered configuration
//!
//! ```text
//! AppConfig::default()  ◄─ dgm.toml (explicit or discovered) ◄─ DGM_* env vars
//! ```
//!
//! Later layers win. Nested keys use `__` in variable names, so
//! `DGM_LOGGING__LEVEL=debug` sets `logging.level`.

use crate::config::{AppConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use dgm_application::ports::registry::list_languages;
use dgm_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::path::{Path, PathBuf};

/// Reads [`AppConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader using `DGM_` variables and the default file locations
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read `path` instead of searching the default locations
    ///
    /// A missing file is not an error; the remaining layers still apply.
    pub fn with_config_path<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            explicit_path: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }

    /// Use `<prefix>_` variables instead of `DGM_`
    pub fn with_env_prefix<S: Into<String>>(self, prefix: S) -> Self {
        Self {
            env_prefix: prefix.into(),
            ..self
        }
    }

    /// The explicitly configured file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.explicit_path.as_deref()
    }

    /// The TOML file that [`ConfigLoader::load`] would read
    pub fn source_file(&self) -> Option<PathBuf> {
        match &self.explicit_path {
            Some(path) if path.is_file() => Some(path.clone()),
            Some(path) => {
                log_config_loaded(path, false);
                None
            }
            None => default_config_paths().into_iter().find(|p| p.is_file()),
        }
    }

    /// All layers, unextracted
    pub fn figment(&self) -> Figment {
        let defaults = Figment::from(Serialized::defaults(AppConfig::default()));
        let with_file = match self.source_file() {
            Some(path) => {
                log_config_loaded(&path, true);
                defaults.merge(Toml::file(path))
            }
            None => defaults,
        };
        let prefix = format!("{}_", self.env_prefix);
        with_file.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
    }

    /// Extract and validate the configuration
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let text = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), text).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate files in search order: working directory, then the user's
/// config directory, then `~/.dgm/`
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_CONFIG_FILENAME));
        paths.push(cwd.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(
            home.join(format!(".{DEFAULT_CONFIG_DIR}"))
                .join(DEFAULT_CONFIG_FILENAME),
        );
    }
    paths
}

/// Reject unknown log levels and languages that are not linked in
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    let linked: Vec<&str> = list_languages().into_iter().map(|(id, _)| id).collect();
    match config
        .languages
        .enabled
        .iter()
        .find(|id| !linked.contains(&id.as_str()))
    {
        Some(unknown) => Err(Error::configuration(format!(
            "Unknown language '{unknown}'. Available languages: {linked:?}"
        ))),
        None => Ok(()),
    }
}

/// Programmatic [`AppConfig`] construction
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Start from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the logging section
    pub fn with_logging(self, logging: LoggingConfig) -> Self {
        let mut config = self.config;
        config.logging = logging;
        Self { config }
    }

    /// Restrict assembly to the given languages
    pub fn with_languages<I, S>(self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = self.config;
        config.languages.enabled = languages.into_iter().map(Into::into).collect();
        Self { config }
    }

    /// Finish
    pub fn build(self) -> AppConfig {
        self.config
    }
}
