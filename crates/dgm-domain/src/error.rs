//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the diagram language services
#[derive(Error, Debug)]
pub enum Error {
    /// A service definition cannot be merged (shape conflict or invalid name)
    #[error("Malformed service definition at '{path}': {message}")]
    MalformedDefinition {
        /// Dotted path of the offending entry
        path: String,
        /// Description of the problem
        message: String,
    },

    /// A factory synchronously re-entered its own in-progress evaluation
    #[error("Circular dependency forced during construction of '{path}': {}", chain.join(" -> "))]
    CircularDependency {
        /// Service whose evaluation was re-entered
        path: String,
        /// Resolution chain from the first request of `path` back to itself
        chain: Vec<String>,
    },

    /// Registry lookup for a language that was never registered
    #[error("No services registered for language '{language_id}'")]
    UnregisteredLanguage {
        /// The requested language identity
        language_id: String,
    },

    /// A language identity was registered twice in the same registry
    #[error("Language '{language_id}' is already registered")]
    LanguageAlreadyRegistered {
        /// The duplicated language identity
        language_id: String,
    },

    /// The container has no service at the requested path
    #[error("Service not found: {path}")]
    ServiceNotFound {
        /// The requested dotted path
        path: String,
    },

    /// The service exists but holds a different type than requested
    #[error("Service '{path}' holds {actual}, not {expected}")]
    ServiceType {
        /// The requested dotted path
        path: String,
        /// Type requested by the caller
        expected: &'static str,
        /// Type produced by the registered factory
        actual: &'static str,
    },

    /// A factory failed while building its service
    #[error("Failed to construct service '{path}': {source}")]
    ServiceConstruction {
        /// Dotted path of the failing service
        path: String,
        /// The factory error
        #[source]
        source: Box<Error>,
    },

    /// A deferred handle outlived the container it points into
    #[error("Container was dropped before '{path}' could be resolved")]
    ContainerDropped {
        /// The path the handle was bound to
        path: String,
    },

    /// Token text could not be converted to a typed value
    #[error("Cannot convert '{input}' with rule {rule}: {message}")]
    ValueConversion {
        /// Terminal rule name
        rule: String,
        /// Raw token text
        input: String,
        /// Description of the failure
        message: String,
    },

    /// Grammar tables are unusable (e.g. invalid terminal pattern)
    #[error("Grammar error: {message}")]
    Grammar {
        /// Description of the grammar error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Infrastructure-level error with context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Composition error creation methods
impl Error {
    /// Create a malformed definition error
    pub fn malformed<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::MalformedDefinition {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular<P: Into<String>>(path: P, chain: Vec<String>) -> Self {
        Self::CircularDependency {
            path: path.into(),
            chain,
        }
    }

    /// Create an unregistered language error
    pub fn unregistered_language<S: Into<String>>(language_id: S) -> Self {
        Self::UnregisteredLanguage {
            language_id: language_id.into(),
        }
    }

    /// Create a service not found error
    pub fn service_not_found<S: Into<String>>(path: S) -> Self {
        Self::ServiceNotFound { path: path.into() }
    }

    /// Wrap a factory failure, leaving composition errors untouched
    ///
    /// Circular dependency and nested construction errors are propagated as-is
    /// so the innermost failing service stays visible to the caller.
    pub fn construction<S: Into<String>>(path: S, source: Error) -> Self {
        match source {
            Self::CircularDependency { .. } | Self::ServiceConstruction { .. } => source,
            other => Self::ServiceConstruction {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// True when this error (or the error it wraps) is a circular dependency
    pub fn is_circular_dependency(&self) -> bool {
        match self {
            Self::CircularDependency { .. } => true,
            Self::ServiceConstruction { source, .. } => source.is_circular_dependency(),
            _ => false,
        }
    }
}

// Language pipeline error creation methods
impl Error {
    /// Create a value conversion error
    pub fn value_conversion<R: Into<String>, I: Into<String>, S: Into<String>>(
        rule: R,
        input: I,
        message: S,
    ) -> Self {
        Self::ValueConversion {
            rule: rule.into(),
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a grammar error
    pub fn grammar<S: Into<String>>(message: S) -> Self {
        Self::Grammar {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
