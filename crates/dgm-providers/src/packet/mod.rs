//! Packet Diagram Language
//!
//! Hand-written overrides on top of the generated packet module, and the
//! language's entry in the linkme catalogue.

/// Packet token builder
pub mod token_builder;

pub use token_builder::PacketTokenBuilder;

use crate::common::CommonValueConverter;
use crate::constants::PACKET_LANGUAGE_ID;
use crate::generated::packet_generated_module;
use dgm_application::di::Module;
use dgm_application::ports::registry::{LANGUAGES, LanguageEntry};
use dgm_application::services::paths;
use dgm_domain::ports::{TokenBuilder, ValueConverter};
use std::sync::Arc;

/// Overrides of the default token builder and value converter
pub fn packet_module() -> Module {
    Module::new()
        .service(paths::TOKEN_BUILDER, |_| {
            Ok(Arc::new(PacketTokenBuilder::new()) as Arc<dyn TokenBuilder>)
        })
        .service(paths::VALUE_CONVERTER, |_| {
            Ok(Arc::new(CommonValueConverter::new()?) as Arc<dyn ValueConverter>)
        })
}

#[linkme::distributed_slice(LANGUAGES)]
static PACKET_LANGUAGE: LanguageEntry = LanguageEntry {
    id: PACKET_LANGUAGE_ID,
    description: "Mermaid packet diagrams",
    generated_module: packet_generated_module,
    module: packet_module,
};
