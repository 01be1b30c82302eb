//! Shared Module Registry
//!
//! Generated shared modules (AST reflection covering every linked language)
//! register here and are merged on top of the default shared module.

use crate::di::Module;

/// Registry entry for a generated shared module
pub struct SharedModuleEntry {
    /// Unique module name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Module factory
    pub module: fn() -> Module,
}

#[linkme::distributed_slice]
pub static SHARED_MODULES: [SharedModuleEntry] = [..];

/// Every linked shared module, sorted by name so merge order is stable
pub fn shared_modules() -> Vec<Module> {
    let mut entries: Vec<&SharedModuleEntry> = SHARED_MODULES.iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries.into_iter().map(|entry| (entry.module)()).collect()
}

/// List linked shared modules as (name, description) tuples
pub fn list_shared_modules() -> Vec<(&'static str, &'static str)> {
    let mut modules: Vec<_> = SHARED_MODULES.iter().map(|e| (e.name, e.description)).collect();
    modules.sort_unstable();
    modules
}
