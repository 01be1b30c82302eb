//! Mermaid Common Services
//!
//! Pieces every Mermaid diagram language shares: the common terminal rules,
//! a token builder enforcing keyword boundaries, and a value converter for
//! titles and accessibility text.

/// Common terminal rules
pub mod terminals;
/// Keyword-boundary token builder
pub mod token_builder;
/// Title and accessibility value converter
pub mod value_converter;

pub use terminals::common_terminals;
pub use token_builder::MermaidTokenBuilder;
pub use value_converter::CommonValueConverter;
