//! Parse results and workspace documents

use super::{AstNode, LexerError};
use serde::{Deserialize, Serialize};

/// A syntax error reported by an AST builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserError {
    /// Human readable description
    pub message: String,
    /// Byte offset of the offending token (input length at end of input)
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

/// Output of a parser run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Root of the (possibly partial) AST
    pub value: AstNode,
    /// Lexing problems
    pub lexer_errors: Vec<LexerError>,
    /// Syntax problems
    pub parser_errors: Vec<ParserError>,
}

impl ParseResult {
    /// True when lexing or parsing reported anything
    pub fn has_errors(&self) -> bool {
        !self.lexer_errors.is_empty() || !self.parser_errors.is_empty()
    }
}

/// A parsed text document held by the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document URI or path
    pub uri: String,
    /// Language that parsed the document
    pub language_id: String,
    /// Source text
    pub text: String,
    /// Parse output
    pub parse_result: ParseResult,
}
