//! Domain Services
//!
//! Default implementations of the language pipeline. The default core module
//! binds each of them to its service path; a language replaces any of them by
//! overriding that path.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DefaultTokenBuilder`] | Orders grammar keywords and terminals for lexing |
//! | [`DefaultValueConverter`] | Built-in conversion of `INT`, `STRING`, `ID` |
//! | [`DefaultLexer`] | First-match lexer with longer alternatives |
//! | [`GenericAstBuilder`] | Flat fallback AST builder |
//! | [`DefaultParser`] | Lex, drop hidden tokens, build the AST |

/// Generic AST builder and the token cursor for grammar-bound builders
pub mod ast_builder;
/// Default lexer
pub mod lexer;
/// Default parser pipeline
pub mod parser;
/// Default token builder
pub mod token_builder;
/// Default value converter
pub mod value_converter;

pub use ast_builder::{GenericAstBuilder, TokenCursor};
pub use lexer::DefaultLexer;
pub use parser::DefaultParser;
pub use token_builder::DefaultTokenBuilder;
pub use value_converter::DefaultValueConverter;
