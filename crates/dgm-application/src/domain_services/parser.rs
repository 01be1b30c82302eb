use dgm_domain::ports::{AstBuildContext, AstBuilder, Lexer, Parser, ValueConverter};
use dgm_domain::value_objects::{Grammar, ParseResult};
use std::sync::Arc;
use tracing::trace;

/// Lex, drop hidden tokens, build the AST
#[derive(Clone)]
pub struct DefaultParser {
    grammar: Arc<Grammar>,
    lexer: Arc<dyn Lexer>,
    ast_builder: Arc<dyn AstBuilder>,
    value_converter: Arc<dyn ValueConverter>,
}

impl DefaultParser {
    /// Assemble a parser from its collaborators
    pub fn new(
        grammar: Arc<Grammar>,
        lexer: Arc<dyn Lexer>,
        ast_builder: Arc<dyn AstBuilder>,
        value_converter: Arc<dyn ValueConverter>,
    ) -> Self {
        Self {
            grammar,
            lexer,
            ast_builder,
            value_converter,
        }
    }
}

impl Parser for DefaultParser {
    fn parse(&self, text: &str) -> ParseResult {
        let lexed = self.lexer.tokenize(text);
        trace!(
            grammar = %self.grammar.name,
            tokens = lexed.tokens.len(),
            hidden = lexed.hidden.len(),
            errors = lexed.errors.len(),
            "Lexed input"
        );

        let context = AstBuildContext {
            grammar: &self.grammar,
            value_converter: self.value_converter.as_ref(),
            text,
        };
        let built = self.ast_builder.build(&lexed.tokens, &context);

        ParseResult {
            value: built.value,
            lexer_errors: lexed.errors,
            parser_errors: built.errors,
        }
    }
}

impl std::fmt::Debug for DefaultParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultParser")
            .field("grammar", &self.grammar.name)
            .field("value_converter", &self.value_converter.provider_name())
            .finish_non_exhaustive()
    }
}
