//! Error extension utilities
//!
//! Attach a message to a foreign error and file it under the matching
//! domain variant.
//!
//! ```ignore
//! use dgm_infrastructure::ErrorContext;
//!
//! let text = std::fs::read_to_string(&path)
//!     .io_context(format!("Failed to read diagram: {}", path.display()))?;
//! ```

use dgm_domain::error::{Error, Result};
use std::fmt::Display;

/// Context-adding conversions from foreign errors into [`Error`]
pub trait ErrorContext<T> {
    /// [`Error::Infrastructure`] with `context` prepended
    fn context(self, context: impl Display) -> Result<T>;

    /// [`Error::Io`] with `context` prepended
    fn io_context(self, context: impl Display) -> Result<T>;

    /// [`Error::Configuration`] with `context` prepended
    fn config_context(self, context: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn io_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
