//! Application ports
//!
//! Shared-level service interfaces and the compile-time language catalogue.

pub mod documents;
pub mod registry;
pub mod service_registry;

pub use documents::Documents;
pub use service_registry::ServiceRegistry;
