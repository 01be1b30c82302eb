//! # Infrastructure Layer
//!
//! Container assembly and the cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Default modules, service registry, bootstrap |
//! | [`workspace`] | File system providers and the document store |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |

// Language front-ends register themselves through linkme
extern crate dgm_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod workspace;

pub use di::{
    PacketServices, Services, ServicesBuilder, ServicesContext, create_packet_services,
    create_services, create_services_from_config,
};
pub use error_ext::ErrorContext;
