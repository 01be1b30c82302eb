//! Token builder extension point

use crate::error::Result;
use crate::value_objects::{Grammar, TokenType};

/// Turns the grammar's keywords and terminals into ordered token types
///
/// The order of the returned list is the lexer's precedence order. An
/// implementation decides how overlapping rules are ranked (keyword versus
/// identifier) and may attach custom constraints such as keyword boundaries.
pub trait TokenBuilder: Send + Sync {
    /// Name of the implementation, for diagnostics
    fn provider_name(&self) -> &str;

    /// Build the token types for `grammar`
    fn build_tokens(&self, grammar: &Grammar) -> Result<Vec<TokenType>>;
}
