//! Workspace documents port

use dgm_domain::error::Result;
use dgm_domain::value_objects::Document;
use std::sync::Arc;

/// Workspace-level index of parsed documents
///
/// The language of a document is chosen from its URI through the service
/// registry.
pub trait Documents: Send + Sync {
    /// Parse `text` as the document at `uri`, replacing any previous version
    fn parse(&self, uri: &str, text: &str) -> Result<Arc<Document>>;

    /// Read `uri` through the file system provider and parse it
    fn load(&self, uri: &str) -> Result<Arc<Document>>;

    /// Previously parsed document
    fn get(&self, uri: &str) -> Option<Arc<Document>>;

    /// Drop a document from the index
    fn remove(&self, uri: &str) -> Option<Arc<Document>>;

    /// URIs of all indexed documents, sorted
    fn uris(&self) -> Vec<String>;
}
