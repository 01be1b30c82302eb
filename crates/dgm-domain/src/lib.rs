//! # Domain Layer
//!
//! Core types of the diagram language services: the error taxonomy, the
//! ports implemented by language services and the value objects that flow
//! between them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`ports`] | Traits for token builders, value converters, lexers, parsers and workspace services |
//! | [`value_objects`] | Grammar tables, tokens, AST nodes and language metadata |
//! | [`constants`] | Well-known terminal rule names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
