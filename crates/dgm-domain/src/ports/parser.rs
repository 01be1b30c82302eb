//! Parser ports

use crate::error::Result;
use crate::ports::ValueConverter;
use crate::value_objects::{AstNode, ConvertedValue, Grammar, ParseResult, ParserError, Token};

/// Services available to an AST builder while it consumes tokens
pub struct AstBuildContext<'a> {
    /// Grammar of the language
    pub grammar: &'a Grammar,
    /// Converter for terminal values
    pub value_converter: &'a dyn ValueConverter,
    /// Full input text
    pub text: &'a str,
}

impl AstBuildContext<'_> {
    /// Convert a token through the value converter
    ///
    /// Keyword tokens (no terminal rule of that name) keep their image.
    pub fn convert(&self, token: &Token) -> Result<ConvertedValue> {
        match self.grammar.terminal(&token.token_type) {
            Some(rule) => self.value_converter.convert(&token.image, rule),
            None => Ok(ConvertedValue::String(token.image.clone())),
        }
    }
}

/// Output of an AST builder
#[derive(Debug, Clone, Default)]
pub struct AstBuildResult {
    /// Root node
    pub value: AstNode,
    /// Syntax errors encountered while building
    pub errors: Vec<ParserError>,
}

/// Grammar-bound rule handler turning visible tokens into an AST
pub trait AstBuilder: Send + Sync {
    /// Build the AST from `tokens` (hidden tokens already removed)
    fn build(&self, tokens: &[Token], context: &AstBuildContext<'_>) -> AstBuildResult;
}

/// Full text-to-AST pipeline of one language
pub trait Parser: Send + Sync {
    /// Parse `text`; problems are reported in the result
    fn parse(&self, text: &str) -> ParseResult;
}
