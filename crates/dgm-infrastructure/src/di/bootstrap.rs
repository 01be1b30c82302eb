//! Container Bootstrap
//!
//! The composition root: builds the shared container, one container per
//! language, and registers every language in the shared registry.
//!
//! ```text
//! ServicesContext ─► default shared ⊕ generated shared ─► SharedServices
//!                                                             │ (weak)
//!          default core ⊕ generated language ⊕ overrides ─► LanguageServices
//!                                                             │
//!                                   ServiceRegistry.register ◄┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let services = create_services(ServicesContext::default())?;
//! let packet = services.shared.service_registry()?.get_services("packet")?;
//! let result = packet.parser()?.parse("packet\n0-15: \"Source Port\"\n");
//! ```

use super::default_modules::{ServicesContext, default_core_module, default_shared_module};
use crate::config::AppConfig;
use crate::constants::SHARED_CONTAINER_NAME;
use dgm_application::di::{Module, inject};
use dgm_application::ports::registry::{
    registered_languages, resolve_language, shared_modules,
};
use dgm_application::services::{LanguageDefinition, LanguageServices, SharedServices};
use dgm_domain::error::{Error, Result};
use dgm_providers::constants::PACKET_LANGUAGE_ID;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Every container of one assembly
#[derive(Debug, Clone)]
pub struct Services {
    /// Shared services
    ///
    /// The only strong handle to the shared container; language containers
    /// refer to it weakly. Keep it alive as long as any language services are
    /// used, or `LanguageServices::shared` fails with `ContainerDropped`.
    pub shared: SharedServices,
    /// Language services by identity
    pub languages: BTreeMap<String, LanguageServices>,
}

impl Services {
    /// Services of `language_id`
    pub fn language(&self, language_id: &str) -> Result<LanguageServices> {
        self.languages
            .get(language_id)
            .cloned()
            .ok_or_else(|| Error::unregistered_language(language_id))
    }
}

/// Shared services plus the packet language
#[derive(Debug, Clone)]
pub struct PacketServices {
    /// Shared services
    ///
    /// Must outlive `packet`: the packet container holds it weakly.
    pub shared: SharedServices,
    /// Packet language services
    pub packet: LanguageServices,
}

/// Step-by-step assembly of [`Services`]
#[derive(Debug, Default)]
pub struct ServicesBuilder {
    context: ServicesContext,
    shared_modules: Vec<Module>,
    languages: Vec<LanguageDefinition>,
}

impl ServicesBuilder {
    /// Builder with no shared modules and no languages
    pub fn new(context: ServicesContext) -> Self {
        Self {
            context,
            shared_modules: Vec::new(),
            languages: Vec::new(),
        }
    }

    /// Merge `module` on top of the default shared module
    pub fn shared_module(mut self, module: Module) -> Self {
        self.shared_modules.push(module);
        self
    }

    /// Merge every linked generated shared module
    pub fn registered_shared_modules(mut self) -> Self {
        self.shared_modules.extend(shared_modules());
        self
    }

    /// Add a language
    pub fn language(mut self, definition: LanguageDefinition) -> Self {
        self.languages.push(definition);
        self
    }

    /// Add a catalogued language by identity
    pub fn registered_language(self, language_id: &str) -> Result<Self> {
        Ok(self.language(resolve_language(language_id)?))
    }

    /// Add every catalogued language
    pub fn registered_languages(mut self) -> Self {
        self.languages.extend(registered_languages());
        self
    }

    /// Build the shared container, then every language container
    pub fn build(self) -> Result<Services> {
        let mut modules = vec![default_shared_module(&self.context)];
        modules.extend(self.shared_modules);
        let shared = SharedServices::new(inject(SHARED_CONTAINER_NAME, modules)?);
        let registry = shared.service_registry()?;

        let mut languages = BTreeMap::new();
        for definition in self.languages {
            let services = create_language_services(&shared, definition)?;
            let language_id = services.language_id()?;
            registry.register(services.clone())?;
            languages.insert(language_id, services);
        }

        info!(
            languages = ?languages.keys().collect::<Vec<_>>(),
            "Assembled language services"
        );
        Ok(Services { shared, languages })
    }
}

/// Build one language container against `shared`
///
/// Fails when the merged metadata names a different language than the
/// definition.
pub fn create_language_services(
    shared: &SharedServices,
    definition: LanguageDefinition,
) -> Result<LanguageServices> {
    let LanguageDefinition { id, modules } = definition;
    let mut all = vec![default_core_module(shared)];
    all.extend(modules);

    let services = LanguageServices::new(inject(&id, all)?);
    let actual = services.language_id()?;
    if actual != id {
        return Err(Error::malformed(
            dgm_application::services::paths::LANGUAGE_META_DATA,
            format!("definition '{id}' declares language '{actual}'"),
        ));
    }
    debug!(language = %id, "Built language container");
    Ok(services)
}

/// Assemble every catalogued language
pub fn create_services(context: ServicesContext) -> Result<Services> {
    ServicesBuilder::new(context)
        .registered_shared_modules()
        .registered_languages()
        .build()
}

/// Assemble the languages `config` enables (all when the list is empty)
pub fn create_services_from_config(
    config: &AppConfig,
    context: ServicesContext,
) -> Result<Services> {
    if config.languages.enabled.is_empty() {
        return create_services(context);
    }
    config
        .languages
        .enabled
        .iter()
        .try_fold(
            ServicesBuilder::new(context).registered_shared_modules(),
            |builder, id| builder.registered_language(id),
        )?
        .build()
}

/// Assemble the shared services and the packet language
pub fn create_packet_services(context: ServicesContext) -> Result<PacketServices> {
    let services = ServicesBuilder::new(context)
        .registered_shared_modules()
        .registered_language(PACKET_LANGUAGE_ID)?
        .build()?;
    let packet = services.language(PACKET_LANGUAGE_ID)?;
    Ok(PacketServices {
        shared: services.shared,
        packet,
    })
}
