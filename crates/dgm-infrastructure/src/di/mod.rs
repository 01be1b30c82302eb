//! Service assembly
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Composition root and entry operations |
//! | [`default_modules`] | Framework default shared and core modules |
//! | [`registry`] | Default language registry |

pub mod bootstrap;
pub mod default_modules;
pub mod registry;

pub use bootstrap::{
    PacketServices, Services, ServicesBuilder, create_language_services, create_packet_services,
    create_services, create_services_from_config,
};
pub use default_modules::{
    EmptyAstReflection, ServicesContext, default_core_module, default_shared_module,
};
pub use registry::DefaultServiceRegistry;
