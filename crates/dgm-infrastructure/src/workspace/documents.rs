//! Workspace document store

use dashmap::DashMap;
use dgm_application::di::Deferred;
use dgm_application::ports::{Documents, ServiceRegistry};
use dgm_domain::error::Result;
use dgm_domain::ports::FileSystemProvider;
use dgm_domain::value_objects::Document;
use std::sync::Arc;
use tracing::debug;

/// Parsed documents indexed by URI
///
/// Lives in the shared container next to the registry it depends on; both
/// collaborators are held as deferred handles and resolved per call.
pub struct WorkspaceDocuments {
    registry: Deferred<Arc<dyn ServiceRegistry>>,
    file_system: Deferred<Arc<dyn FileSystemProvider>>,
    documents: DashMap<String, Arc<Document>>,
}

impl WorkspaceDocuments {
    /// Create an empty store
    pub fn new(
        registry: Deferred<Arc<dyn ServiceRegistry>>,
        file_system: Deferred<Arc<dyn FileSystemProvider>>,
    ) -> Self {
        Self {
            registry,
            file_system,
            documents: DashMap::new(),
        }
    }
}

impl Documents for WorkspaceDocuments {
    fn parse(&self, uri: &str, text: &str) -> Result<Arc<Document>> {
        let services = self.registry.get()?.get_services_for_uri(uri)?;
        let parse_result = services.parser()?.parse(text);
        debug!(
            uri,
            lexer_errors = parse_result.lexer_errors.len(),
            parser_errors = parse_result.parser_errors.len(),
            "Parsed document"
        );

        let document = Arc::new(Document {
            uri: uri.to_string(),
            language_id: services.language_id()?,
            text: text.to_string(),
            parse_result,
        });
        self.documents.insert(uri.to_string(), Arc::clone(&document));
        Ok(document)
    }

    fn load(&self, uri: &str) -> Result<Arc<Document>> {
        let text = self.file_system.get()?.read_file(uri)?;
        self.parse(uri, &text)
    }

    fn get(&self, uri: &str) -> Option<Arc<Document>> {
        self.documents.get(uri).map(|entry| Arc::clone(entry.value()))
    }

    fn remove(&self, uri: &str) -> Option<Arc<Document>> {
        self.documents.remove(uri).map(|(_, document)| document)
    }

    fn uris(&self) -> Vec<String> {
        let mut uris: Vec<String> = self.documents.iter().map(|e| e.key().clone()).collect();
        uris.sort_unstable();
        uris
    }
}
