//! Configuration
//!
//! Defaults, then a TOML file, then `DGM_` environment variables
//! (`DGM_LOGGING__LEVEL=debug`), merged with figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LanguagesConfig, LoggingConfig};
