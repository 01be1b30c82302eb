//! File system providers

use dashmap::DashMap;
use dgm_domain::error::{Error, Result};
use dgm_domain::ports::FileSystemProvider;

/// Provider for hosts without file access
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFileSystem;

impl FileSystemProvider for EmptyFileSystem {
    fn provider_name(&self) -> &str {
        "empty"
    }

    fn read_file(&self, uri: &str) -> Result<String> {
        Err(Error::not_found(format!("file '{uri}' (no file system available)")))
    }

    fn exists(&self, _uri: &str) -> bool {
        false
    }
}

/// In-memory file system keyed by URI
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    files: DashMap<String, String>,
}

impl InMemoryFileSystem {
    /// Create an empty file system
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style file insertion
    pub fn with_file(self, uri: impl Into<String>, text: impl Into<String>) -> Self {
        self.write_file(uri, text);
        self
    }

    /// Create or replace a file
    pub fn write_file(&self, uri: impl Into<String>, text: impl Into<String>) {
        self.files.insert(uri.into(), text.into());
    }

    /// Delete a file, returning its text
    pub fn remove_file(&self, uri: &str) -> Option<String> {
        self.files.remove(uri).map(|(_, text)| text)
    }
}

impl FileSystemProvider for InMemoryFileSystem {
    fn provider_name(&self) -> &str {
        "memory"
    }

    fn read_file(&self, uri: &str) -> Result<String> {
        self.files
            .get(uri)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("file '{uri}'")))
    }

    fn exists(&self, uri: &str) -> bool {
        self.files.contains_key(uri)
    }
}
