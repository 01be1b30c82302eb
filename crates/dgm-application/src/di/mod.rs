//! Dependency Injection Core
//!
//! ```text
//! Module (definition)      merge_modules()        Container (live)
//! ───────────────────      ───────────────        ────────────────
//! default module    ─┐
//! generated module  ─┼──►  right-biased   ──►  slot per leaf path
//! override module   ─┘     recursive merge      (lazy, memoized)
//! ```
//!
//! A factory receives the container it lives in and may request any sibling.
//! Nothing is evaluated before it is requested, so definition order never
//! matters. Mutual references go through [`Deferred`] handles that resolve on
//! use instead of inside the factory body.

pub mod container;
pub mod deferred;
pub mod module;

pub use container::{Container, WeakContainer, inject};
pub use deferred::Deferred;
pub use module::{Factory, Module, ModuleEntry, PATH_SEPARATOR, ServiceInstance, merge_modules};
