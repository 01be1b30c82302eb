//! Ports
//!
//! Traits implemented by language and workspace services. Containers hand
//! them out as `Arc<dyn Trait>` so any implementation can be substituted by
//! overriding its service definition.

pub mod file_system;
pub mod lexer;
pub mod parser;
pub mod reflection;
pub mod token_builder;
pub mod value_converter;

pub use file_system::FileSystemProvider;
pub use lexer::Lexer;
pub use parser::{AstBuildContext, AstBuildResult, AstBuilder, Parser};
pub use reflection::AstReflection;
pub use token_builder::TokenBuilder;
pub use value_converter::ValueConverter;
