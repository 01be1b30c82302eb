//! # Diagram Language Services
//!
//! Langium-style service composition for Mermaid diagram languages. Every
//! language is a lazily built container of named services (token builder,
//! value converter, lexer, parser) assembled from layered modules, next to
//! one shared container holding the language registry and workspace.
//!
//! ## Example
//!
//! ```ignore
//! use dgm::{ServicesContext, create_packet_services};
//!
//! let services = create_packet_services(ServicesContext::default())?;
//! let result = services.packet.parser()?.parse("packet\n0-15: \"Source Port\"\n");
//! assert!(!result.has_errors());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, ports and value objects
//! - `application` - Module merger, injector and default services
//! - `providers` - Mermaid and packet front-ends
//! - `infrastructure` - Container assembly, registry, config and logging
//! - `cli` - Command line front-end of the `dgm` binary

/// Command line interface
pub mod cli;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dgm_domain::*;
}

/// Application layer - composition mechanism and default services
pub mod application {
    pub use dgm_application::*;
}

/// Language front-ends
pub mod providers {
    pub use dgm_providers::*;
}

/// Infrastructure layer - assembly, config and logging
pub mod infrastructure {
    pub use dgm_infrastructure::*;
}

pub use domain::{Error, Result};

pub use application::{LanguageDefinition, LanguageServices, Module, SharedServices, inject};

pub use infrastructure::{
    PacketServices, Services, ServicesBuilder, ServicesContext, create_packet_services,
    create_services, create_services_from_config,
};
