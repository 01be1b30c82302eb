//! Generic AST nodes

use super::ConvertedValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node of the abstract syntax tree
///
/// Leaf features are stored as converted values, containment features as
/// ordered child lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AstNode {
    /// Grammar type of the node (e.g. `PacketBlock`)
    #[serde(rename = "$type")]
    pub node_type: String,
    /// Leaf features
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ConvertedValue>,
    /// Containment features
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Vec<AstNode>>,
}

impl AstNode {
    /// Create a node without features
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<ConvertedValue>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Set a leaf feature, replacing any previous value
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<ConvertedValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Read a leaf feature
    pub fn property(&self, name: &str) -> Option<&ConvertedValue> {
        self.properties.get(name)
    }

    /// Append a child to a containment feature
    pub fn push_child(&mut self, feature: impl Into<String>, child: AstNode) {
        self.children.entry(feature.into()).or_default().push(child);
    }

    /// Children of a containment feature (empty when absent)
    pub fn children(&self, feature: &str) -> &[AstNode] {
        self.children.get(feature).map(Vec::as_slice).unwrap_or(&[])
    }
}
