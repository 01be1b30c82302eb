//! Typed service views
//!
//! Containers are addressed by path and downcast at the access site. The
//! wrappers here fix the well-known paths and types of the shared and
//! language service sets so callers never spell them out.

use crate::di::{Container, Module, WeakContainer};
use crate::ports::{Documents, ServiceRegistry};
use dgm_domain::error::{Error, Result};
use dgm_domain::ports::{
    AstBuilder, AstReflection, FileSystemProvider, Lexer, Parser, TokenBuilder, ValueConverter,
};
use dgm_domain::value_objects::{Grammar, LanguageMetaData};
use std::sync::Arc;

/// Well-known service paths
pub mod paths {
    /// Shared: language id → language container
    pub const SERVICE_REGISTRY: &str = "ServiceRegistry";
    /// Shared: AST type information of every language
    pub const AST_REFLECTION: &str = "AstReflection";
    /// Shared: host file system access
    pub const FILE_SYSTEM_PROVIDER: &str = "workspace.FileSystemProvider";
    /// Shared: parsed workspace documents
    pub const DOCUMENTS: &str = "workspace.Documents";

    /// Language: weak reference to the shared container
    pub const SHARED: &str = "shared";
    /// Language: compiled grammar tables
    pub const GRAMMAR: &str = "Grammar";
    /// Language: identity and file extensions
    pub const LANGUAGE_META_DATA: &str = "LanguageMetaData";
    /// Language: token builder extension point
    pub const TOKEN_BUILDER: &str = "parser.TokenBuilder";
    /// Language: value converter extension point
    pub const VALUE_CONVERTER: &str = "parser.ValueConverter";
    /// Language: lexer built from the token builder output
    pub const LEXER: &str = "parser.Lexer";
    /// Language: grammar-bound rule handler
    pub const AST_BUILDER: &str = "parser.AstBuilder";
    /// Language: text to AST pipeline
    pub const PARSER: &str = "parser.Parser";
}

/// Service definitions of one language, in merge order
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Expected language identity
    pub id: String,
    /// Modules merged on top of the framework defaults (generated first,
    /// hand-written overrides last)
    pub modules: Vec<Module>,
}

impl LanguageDefinition {
    /// Create a definition without modules
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            modules: Vec::new(),
        }
    }

    /// Append a module; later modules win
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }
}

/// Process-wide (per build) services
#[derive(Clone, Debug)]
pub struct SharedServices {
    container: Container,
}

impl SharedServices {
    /// Wrap a shared container
    pub fn new(container: Container) -> Self {
        Self { container }
    }

    /// Underlying container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Language registry
    pub fn service_registry(&self) -> Result<Arc<dyn ServiceRegistry>> {
        self.container.get(paths::SERVICE_REGISTRY)
    }

    /// AST reflection
    pub fn ast_reflection(&self) -> Result<Arc<dyn AstReflection>> {
        self.container.get(paths::AST_REFLECTION)
    }

    /// File system provider
    pub fn file_system(&self) -> Result<Arc<dyn FileSystemProvider>> {
        self.container.get(paths::FILE_SYSTEM_PROVIDER)
    }

    /// Workspace documents
    pub fn documents(&self) -> Result<Arc<dyn Documents>> {
        self.container.get(paths::DOCUMENTS)
    }

    /// True when both views wrap the same container
    pub fn ptr_eq(&self, other: &SharedServices) -> bool {
        self.container.ptr_eq(&other.container)
    }
}

/// Services of one language
#[derive(Clone, Debug)]
pub struct LanguageServices {
    container: Container,
}

impl LanguageServices {
    /// Wrap a language container
    pub fn new(container: Container) -> Self {
        Self { container }
    }

    /// Underlying container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Shared services this language was built against
    pub fn shared(&self) -> Result<SharedServices> {
        let weak: WeakContainer = self.container.get(paths::SHARED)?;
        weak.upgrade()
            .map(SharedServices::new)
            .ok_or_else(|| Error::ContainerDropped {
                path: paths::SHARED.to_string(),
            })
    }

    /// Grammar tables
    pub fn grammar(&self) -> Result<Arc<Grammar>> {
        self.container.get(paths::GRAMMAR)
    }

    /// Language metadata
    pub fn language_meta_data(&self) -> Result<Arc<LanguageMetaData>> {
        self.container.get(paths::LANGUAGE_META_DATA)
    }

    /// Language identity from the metadata
    pub fn language_id(&self) -> Result<String> {
        Ok(self.language_meta_data()?.language_id.clone())
    }

    /// Token builder
    pub fn token_builder(&self) -> Result<Arc<dyn TokenBuilder>> {
        self.container.get(paths::TOKEN_BUILDER)
    }

    /// Value converter
    pub fn value_converter(&self) -> Result<Arc<dyn ValueConverter>> {
        self.container.get(paths::VALUE_CONVERTER)
    }

    /// Lexer
    pub fn lexer(&self) -> Result<Arc<dyn Lexer>> {
        self.container.get(paths::LEXER)
    }

    /// AST builder
    pub fn ast_builder(&self) -> Result<Arc<dyn AstBuilder>> {
        self.container.get(paths::AST_BUILDER)
    }

    /// Parser
    pub fn parser(&self) -> Result<Arc<dyn Parser>> {
        self.container.get(paths::PARSER)
    }

    /// True when both views wrap the same container
    pub fn ptr_eq(&self, other: &LanguageServices) -> bool {
        self.container.ptr_eq(&other.container)
    }
}
