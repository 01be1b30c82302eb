use dgm_application::di::Module;
use dgm_application::ports::registry::{SHARED_MODULES, SharedModuleEntry};
use dgm_application::services::paths;
use dgm_domain::ports::AstReflection;
use std::sync::Arc;

/// Node types and their direct super types
const TYPE_HIERARCHY: &[(&str, &[&str])] = &[("Packet", &[]), ("PacketBlock", &[])];

/// Type information for the Mermaid AST node types
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidAstReflection;

impl MermaidAstReflection {
    fn super_types(type_name: &str) -> &'static [&'static str] {
        TYPE_HIERARCHY
            .iter()
            .find(|(name, _)| *name == type_name)
            .map(|(_, supers)| *supers)
            .unwrap_or_default()
    }
}

impl AstReflection for MermaidAstReflection {
    fn all_types(&self) -> Vec<String> {
        TYPE_HIERARCHY.iter().map(|(name, _)| (*name).to_string()).collect()
    }

    fn is_subtype(&self, sub_type: &str, super_type: &str) -> bool {
        sub_type == super_type
            || Self::super_types(sub_type)
                .iter()
                .any(|parent| self.is_subtype(parent, super_type))
    }
}

/// Shared module contributing [`MermaidAstReflection`]
pub fn mermaid_generated_shared_module() -> Module {
    Module::new().service(paths::AST_REFLECTION, |_| {
        Ok(Arc::new(MermaidAstReflection) as Arc<dyn AstReflection>)
    })
}

#[linkme::distributed_slice(SHARED_MODULES)]
static MERMAID_GENERATED_SHARED: SharedModuleEntry = SharedModuleEntry {
    name: "mermaid",
    description: "AST reflection for Mermaid diagram languages",
    module: mermaid_generated_shared_module,
};
