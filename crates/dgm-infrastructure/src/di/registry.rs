//! Default service registry

use dgm_application::ports::ServiceRegistry;
use dgm_application::services::LanguageServices;
use dgm_domain::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

#[derive(Default)]
struct RegistryState {
    by_id: BTreeMap<String, LanguageServices>,
    by_extension: HashMap<String, String>,
}

/// Registry keyed by language identity and file extension
///
/// Written once per language during assembly and only read afterwards. When
/// two languages claim the same extension the later registration wins.
#[derive(Default)]
pub struct DefaultServiceRegistry {
    state: RwLock<RegistryState>,
}

impl DefaultServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn extension_of(uri: &str) -> Option<String> {
        Path::new(uri)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
    }
}

impl ServiceRegistry for DefaultServiceRegistry {
    fn register(&self, services: LanguageServices) -> Result<()> {
        let meta = services.language_meta_data()?;
        let language_id = meta.language_id.clone();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.by_id.contains_key(&language_id) {
            return Err(Error::LanguageAlreadyRegistered { language_id });
        }
        for extension in &meta.file_extensions {
            if let Some(previous) = state
                .by_extension
                .insert(extension.clone(), language_id.clone())
            {
                warn!(
                    extension = %extension,
                    previous = %previous,
                    language = %language_id,
                    "File extension already claimed; later registration wins"
                );
            }
        }
        state.by_id.insert(language_id.clone(), services);
        info!(language = %language_id, extensions = ?meta.file_extensions, "Registered language services");
        Ok(())
    }

    fn get_services(&self, language_id: &str) -> Result<LanguageServices> {
        self.read()
            .by_id
            .get(language_id)
            .cloned()
            .ok_or_else(|| Error::unregistered_language(language_id))
    }

    fn get_services_for_uri(&self, uri: &str) -> Result<LanguageServices> {
        let state = self.read();
        Self::extension_of(uri)
            .and_then(|ext| state.by_extension.get(&ext))
            .and_then(|id| state.by_id.get(id))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("language services for '{uri}'")))
    }

    fn has_services(&self, language_id: &str) -> bool {
        self.read().by_id.contains_key(language_id)
    }

    fn language_ids(&self) -> Vec<String> {
        self.read().by_id.keys().cloned().collect()
    }

    fn all(&self) -> Vec<LanguageServices> {
        self.read().by_id.values().cloned().collect()
    }
}

impl std::fmt::Debug for DefaultServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultServiceRegistry")
            .field("languages", &self.language_ids())
            .finish()
    }
}
