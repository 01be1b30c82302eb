use crate::common::MermaidTokenBuilder;
use crate::constants::PACKET_HEADER_KEYWORDS;
use dgm_domain::error::Result;
use dgm_domain::ports::TokenBuilder;
use dgm_domain::value_objects::{Grammar, TokenType};

/// Mermaid token builder with boundaries on the packet header keywords
#[derive(Debug, Clone)]
pub struct PacketTokenBuilder {
    inner: MermaidTokenBuilder,
}

impl PacketTokenBuilder {
    /// Create the builder
    pub fn new() -> Self {
        Self {
            inner: MermaidTokenBuilder::new(PACKET_HEADER_KEYWORDS),
        }
    }
}

impl Default for PacketTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenBuilder for PacketTokenBuilder {
    fn provider_name(&self) -> &str {
        "packet"
    }

    fn build_tokens(&self, grammar: &Grammar) -> Result<Vec<TokenType>> {
        self.inner.build_tokens(grammar)
    }
}
