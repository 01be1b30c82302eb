//! Language Registry
//!
//! Language front-ends register their generated and hand-written modules
//! here. The bootstrap turns an entry into a [`LanguageDefinition`] and
//! merges it on top of the framework's default core module.

use crate::di::Module;
use crate::services::LanguageDefinition;
use dgm_domain::error::{Error, Result};

/// Registry entry for a language front-end
pub struct LanguageEntry {
    /// Language identity (must match the generated metadata)
    pub id: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Grammar-derived services (Grammar, LanguageMetaData, AST builder)
    pub generated_module: fn() -> Module,
    /// Hand-written overrides (token builder, value converter)
    pub module: fn() -> Module,
}

impl LanguageEntry {
    /// Definition with the generated module first and overrides last
    pub fn definition(&self) -> LanguageDefinition {
        LanguageDefinition::new(self.id)
            .with_module((self.generated_module)())
            .with_module((self.module)())
    }
}

// Auto-collection via linkme distributed slices - languages submit entries at compile time
#[linkme::distributed_slice]
pub static LANGUAGES: [LanguageEntry] = [..];

/// Resolve a language definition by identity
///
/// # Errors
///
/// Returns [`Error::UnregisteredLanguage`] when no linked crate registered
/// `language_id`.
pub fn resolve_language(language_id: &str) -> Result<LanguageDefinition> {
    LANGUAGES
        .iter()
        .find(|entry| entry.id == language_id)
        .map(LanguageEntry::definition)
        .ok_or_else(|| Error::unregistered_language(language_id))
}

/// Definitions of every linked language, sorted by identity
pub fn registered_languages() -> Vec<LanguageDefinition> {
    let mut entries: Vec<&LanguageEntry> = LANGUAGES.iter().collect();
    entries.sort_by_key(|entry| entry.id);
    entries.into_iter().map(LanguageEntry::definition).collect()
}

/// List all linked languages as (id, description) tuples, sorted by id
pub fn list_languages() -> Vec<(&'static str, &'static str)> {
    let mut languages: Vec<_> = LANGUAGES.iter().map(|e| (e.id, e.description)).collect();
    languages.sort_unstable();
    languages
}
