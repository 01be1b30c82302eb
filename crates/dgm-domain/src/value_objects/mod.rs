//! Value objects
//!
//! Immutable data exchanged between language services.

mod ast;
mod document;
mod grammar;
mod language;
mod token;
mod value;

pub use ast::AstNode;
pub use document::{Document, ParseResult, ParserError};
pub use grammar::{Grammar, TerminalRule, ValueType};
pub use language::LanguageMetaData;
pub use token::{KeywordBoundary, LexerError, LexerResult, Token, TokenCategory, TokenType};
pub use value::ConvertedValue;
