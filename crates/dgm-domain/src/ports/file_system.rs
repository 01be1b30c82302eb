//! File system port

use crate::error::Result;

/// Host-provided access to document contents
pub trait FileSystemProvider: Send + Sync {
    /// Name of the implementation, for diagnostics
    fn provider_name(&self) -> &str;

    /// Read the text behind `uri`
    fn read_file(&self, uri: &str) -> Result<String>;

    /// True when `uri` can be read
    fn exists(&self, uri: &str) -> bool;
}
