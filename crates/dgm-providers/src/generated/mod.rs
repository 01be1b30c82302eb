//! Generated Modules
//!
//! Grammar-derived services: the AST reflection shared by all Mermaid
//! languages and, per language, the grammar tables, language metadata and the
//! grammar-bound AST builder.

/// Packet grammar, metadata and AST builder
#[cfg(feature = "lang-packet")]
pub mod packet;
/// AST reflection for all Mermaid node types
pub mod shared;

#[cfg(feature = "lang-packet")]
pub use packet::{PacketAstBuilder, packet_generated_module, packet_grammar, packet_meta_data};
pub use shared::{MermaidAstReflection, mermaid_generated_shared_module};
