//! # Application Layer
//!
//! The service composition mechanism and the framework's default language
//! services.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Module merger, lazy injector, deferred handles |
//! | [`domain_services`] | Default token builder, value converter, lexer, AST builder and parser |
//! | [`ports`] | Registry and workspace ports, linkme language catalogue |
//! | [`services`] | Typed views over shared and language containers |

pub mod di;
pub mod domain_services;
pub mod ports;
pub mod services;

pub use di::{Container, Deferred, Module, inject, merge_modules};
pub use services::{LanguageDefinition, LanguageServices, SharedServices};
