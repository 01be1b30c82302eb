//! Framework default modules
//!
//! The shared and core modules every assembly starts from. Generated and
//! hand-written modules are merged on top and replace entries by path.

use super::registry::DefaultServiceRegistry;
use crate::workspace::{EmptyFileSystem, WorkspaceDocuments};
use dgm_application::di::{Container, Module};
use dgm_application::domain_services::{
    DefaultLexer, DefaultParser, DefaultTokenBuilder, DefaultValueConverter, GenericAstBuilder,
};
use dgm_application::ports::{Documents, ServiceRegistry};
use dgm_application::services::{SharedServices, paths};
use dgm_domain::error::Result;
use dgm_domain::ports::{
    AstBuilder, AstReflection, FileSystemProvider, Lexer, Parser, TokenBuilder, ValueConverter,
};
use dgm_domain::value_objects::{Grammar, LanguageMetaData};
use std::fmt;
use std::sync::Arc;

/// Host-provided collaborators of the shared services
#[derive(Clone)]
pub struct ServicesContext {
    /// File system used by the document store
    pub file_system: Arc<dyn FileSystemProvider>,
}

impl ServicesContext {
    /// Context with the given file system
    pub fn with_file_system(file_system: Arc<dyn FileSystemProvider>) -> Self {
        Self { file_system }
    }
}

impl Default for ServicesContext {
    fn default() -> Self {
        Self::with_file_system(Arc::new(EmptyFileSystem))
    }
}

impl fmt::Debug for ServicesContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicesContext")
            .field("file_system", &self.file_system.provider_name())
            .finish()
    }
}

/// Reflection knowing no node types; replaced by generated shared modules
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyAstReflection;

impl AstReflection for EmptyAstReflection {
    fn all_types(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_subtype(&self, sub_type: &str, super_type: &str) -> bool {
        sub_type == super_type
    }
}

/// Default shared services
pub fn default_shared_module(context: &ServicesContext) -> Module {
    Module::new()
        .service(paths::SERVICE_REGISTRY, |_| {
            Ok(Arc::new(DefaultServiceRegistry::new()) as Arc<dyn ServiceRegistry>)
        })
        .service(paths::AST_REFLECTION, |_| {
            Ok(Arc::new(EmptyAstReflection) as Arc<dyn AstReflection>)
        })
        .value(paths::FILE_SYSTEM_PROVIDER, Arc::clone(&context.file_system))
        .service(paths::DOCUMENTS, |c| {
            let documents = WorkspaceDocuments::new(
                c.deferred(paths::SERVICE_REGISTRY)?,
                c.deferred(paths::FILE_SYSTEM_PROVIDER)?,
            );
            Ok(Arc::new(documents) as Arc<dyn Documents>)
        })
}

/// Default language services built against `shared`
///
/// `Grammar` and `LanguageMetaData` are left to the generated module.
pub fn default_core_module(shared: &SharedServices) -> Module {
    Module::new()
        .value(paths::SHARED, shared.container().downgrade())
        .service(paths::TOKEN_BUILDER, |c| {
            let builder = if case_insensitive(c)? {
                DefaultTokenBuilder::case_insensitive()
            } else {
                DefaultTokenBuilder::new()
            };
            Ok(Arc::new(builder) as Arc<dyn TokenBuilder>)
        })
        .service(paths::VALUE_CONVERTER, |_| {
            Ok(Arc::new(DefaultValueConverter::new()) as Arc<dyn ValueConverter>)
        })
        .service(paths::LEXER, |c| {
            let builder: Arc<dyn TokenBuilder> = c.get(paths::TOKEN_BUILDER)?;
            let grammar: Arc<Grammar> = c.get(paths::GRAMMAR)?;
            let lexer = DefaultLexer::from_builder(builder.as_ref(), &grammar)?;
            Ok(Arc::new(lexer) as Arc<dyn Lexer>)
        })
        .service(paths::AST_BUILDER, |_| {
            Ok(Arc::new(GenericAstBuilder) as Arc<dyn AstBuilder>)
        })
        .service(paths::PARSER, |c| {
            let parser = DefaultParser::new(
                c.get(paths::GRAMMAR)?,
                c.get(paths::LEXER)?,
                c.get(paths::AST_BUILDER)?,
                c.get(paths::VALUE_CONVERTER)?,
            );
            Ok(Arc::new(parser) as Arc<dyn Parser>)
        })
}

fn case_insensitive(container: &Container) -> Result<bool> {
    if !container.contains(paths::LANGUAGE_META_DATA) {
        return Ok(false);
    }
    let meta: Arc<LanguageMetaData> = container.get(paths::LANGUAGE_META_DATA)?;
    Ok(meta.case_insensitive)
}
