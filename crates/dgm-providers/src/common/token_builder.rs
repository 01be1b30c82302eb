use crate::constants::COMMENT_START;
use dgm_application::domain_services::DefaultTokenBuilder;
use dgm_domain::error::Result;
use dgm_domain::ports::TokenBuilder;
use dgm_domain::value_objects::{Grammar, KeywordBoundary, TokenType};

/// Token builder for Mermaid languages
///
/// Hidden terminals come first so front matter and directives are never
/// split into keyword tokens. The configured keywords only match when
/// followed by a blank, a line end, the end of input or a `%%` comment.
#[derive(Debug, Clone, Default)]
pub struct MermaidTokenBuilder {
    bounded_keywords: Vec<String>,
    inner: DefaultTokenBuilder,
}

impl MermaidTokenBuilder {
    /// Builder enforcing boundaries on `keywords`
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bounded_keywords: keywords.into_iter().map(Into::into).collect(),
            inner: DefaultTokenBuilder::new(),
        }
    }

    /// Keywords that carry a boundary
    pub fn bounded_keywords(&self) -> &[String] {
        &self.bounded_keywords
    }
}

impl TokenBuilder for MermaidTokenBuilder {
    fn provider_name(&self) -> &str {
        "mermaid"
    }

    fn build_tokens(&self, grammar: &Grammar) -> Result<Vec<TokenType>> {
        let terminals = self.inner.build_terminal_tokens(&grammar.terminals)?;
        let mut keywords = self.inner.build_keyword_tokens(&grammar.keywords, &terminals)?;

        for keyword in &mut keywords {
            if self.bounded_keywords.contains(&keyword.name) {
                keyword.boundary = Some(KeywordBoundary::new([COMMENT_START]));
            }
        }

        let (hidden, visible): (Vec<_>, Vec<_>) = terminals.into_iter().partition(|t| t.hidden);
        let mut tokens = hidden;
        tokens.extend(keywords);
        tokens.extend(visible);
        Ok(tokens)
    }
}
