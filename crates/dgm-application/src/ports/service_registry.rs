//! Service registry port

use crate::services::LanguageServices;
use dgm_domain::error::Result;

/// Lookup table from language identity to that language's services
///
/// Owned by the shared container. Languages are registered once, after their
/// container is built; afterwards the registry is only read.
pub trait ServiceRegistry: Send + Sync {
    /// Register a fully built language
    ///
    /// Fails when the language identity is already registered.
    fn register(&self, services: LanguageServices) -> Result<()>;

    /// Services of `language_id`; fails explicitly when unregistered
    fn get_services(&self, language_id: &str) -> Result<LanguageServices>;

    /// Services of the language handling the extension of `uri`
    fn get_services_for_uri(&self, uri: &str) -> Result<LanguageServices>;

    /// True when `language_id` is registered
    fn has_services(&self, language_id: &str) -> bool;

    /// Registered language identities, sorted
    fn language_ids(&self) -> Vec<String>;

    /// All registered languages, sorted by identity
    fn all(&self) -> Vec<LanguageServices>;
}
