//! Language Catalogue
//!
//! Compile-time registration of language front-ends and generated shared
//! modules. Uses the `linkme` crate so a language crate only needs to be
//! linked for its modules to be found.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Language Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Language defines:  #[linkme::distributed_slice(LANGUAGES)]  │
//! │                        static ENTRY: LanguageEntry = ...        │
//! │                              ↓                                  │
//! │  2. Catalogue declares: #[linkme::distributed_slice]            │
//! │                        pub static LANGUAGES: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Bootstrap queries: resolve_language("packet")               │
//! │                              ↓                                  │
//! │  4. Injector merges:   default ⊕ generated ⊕ hand-written       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Language (in dgm-providers)
//!
//! ```ignore
//! use dgm_application::ports::registry::{LanguageEntry, LANGUAGES};
//!
//! #[linkme::distributed_slice(LANGUAGES)]
//! static PACKET_LANGUAGE: LanguageEntry = LanguageEntry {
//!     id: "packet",
//!     description: "Mermaid packet diagrams",
//!     generated_module: packet_generated_module,
//!     module: packet_module,
//! };
//! ```
//!
//! ### Resolving a Language (in dgm-infrastructure)
//!
//! ```ignore
//! use dgm_application::ports::registry::resolve_language;
//!
//! let definition = resolve_language("packet")?;
//! ```

pub mod language;
pub mod shared;

pub use language::{
    LANGUAGES, LanguageEntry, list_languages, registered_languages, resolve_language,
};
pub use shared::{SHARED_MODULES, SharedModuleEntry, list_shared_modules, shared_modules};
