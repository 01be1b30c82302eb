//! Lexer port

use crate::value_objects::{LexerResult, TokenType};

/// Splits text into tokens
pub trait Lexer: Send + Sync {
    /// Token types in precedence order
    fn token_types(&self) -> &[TokenType];

    /// Tokenize `text`; unmatched input is reported, never fatal
    fn tokenize(&self, text: &str) -> LexerResult;
}
