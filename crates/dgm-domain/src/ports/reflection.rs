//! AST reflection port

use crate::value_objects::AstNode;

/// Type information about the AST node types of all languages
pub trait AstReflection: Send + Sync {
    /// Every known node type
    fn all_types(&self) -> Vec<String>;

    /// True when `sub_type` equals or specializes `super_type`
    fn is_subtype(&self, sub_type: &str, super_type: &str) -> bool;

    /// True when `node` is an instance of `type_name`
    fn is_instance(&self, node: &AstNode, type_name: &str) -> bool {
        self.is_subtype(&node.node_type, type_name)
    }
}
