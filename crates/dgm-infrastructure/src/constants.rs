//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `dgm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dgm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dgm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DGM";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "DGM_LOG";

/// File stem of the rolling log file when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "dgm";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Diagnostic name of the shared container
pub const SHARED_CONTAINER_NAME: &str = "shared";
