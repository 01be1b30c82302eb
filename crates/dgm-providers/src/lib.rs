//! # Diagram Languages - Front-end Implementations
//!
//! Language front-ends built on the application layer's default services.
//! Each language contributes a generated module (grammar tables, metadata,
//! grammar-bound AST builder) and a hand-written module overriding the
//! default token builder and value converter. Both register themselves in the
//! linkme language catalogue.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`common`] | Services shared by all Mermaid languages |
//! | [`generated`] | Grammar-derived modules |
//! | [`packet`] | Packet diagram overrides and registration |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! dgm-providers = { version = "0.1", default-features = false, features = ["lang-packet"] }
//! ```

pub use dgm_domain::error::{Error, Result};

/// Terminal names, patterns and language identities
pub mod constants;

/// Mermaid token builder, value converter and common terminals
pub mod common;

/// Grammar-derived shared and language modules
pub mod generated;

/// Packet diagram language
#[cfg(feature = "lang-packet")]
pub mod packet;

#[cfg(feature = "lang-packet")]
pub use packet::{PacketTokenBuilder, packet_module};
