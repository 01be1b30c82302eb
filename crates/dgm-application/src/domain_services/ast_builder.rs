use dgm_domain::ports::{AstBuildContext, AstBuildResult, AstBuilder};
use dgm_domain::value_objects::{AstNode, ParserError, Token};

/// Forward-only view over visible tokens for hand-written AST builders
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
    text: &'a str,
}

impl<'a> TokenCursor<'a> {
    /// Cursor at the first token; `text` is the input the tokens came from
    pub fn new(tokens: &'a [Token], text: &'a str) -> Self {
        Self {
            tokens,
            position: 0,
            text,
        }
    }

    /// Current token
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Token `n` positions ahead of the current one
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + n)
    }

    /// True when the current token has type `token_type`
    pub fn at(&self, token_type: &str) -> bool {
        self.peek().is_some_and(|t| t.token_type == token_type)
    }

    /// True when every token was consumed
    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consume the current token
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consume the current token if it has type `token_type`
    pub fn eat(&mut self, token_type: &str) -> Option<&'a Token> {
        if self.at(token_type) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume a token of type `token_type` or report what was found instead
    pub fn expect(&mut self, token_type: &str) -> Result<&'a Token, ParserError> {
        match self.eat(token_type) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&format!("token of type '{token_type}'"))),
        }
    }

    /// Error for the current token given what the grammar `expected`
    pub fn unexpected(&self, expected: &str) -> ParserError {
        let found = match self.peek() {
            Some(token) => format!("`{}`", token.image.escape_debug()),
            None => "end of input".to_string(),
        };
        self.error(format!("Expecting {expected} but found {found}."))
    }

    /// Error located at the current token (or at the end of input)
    pub fn error(&self, message: impl Into<String>) -> ParserError {
        let message = message.into();
        match self.peek() {
            Some(token) => ParserError {
                message,
                offset: token.offset,
                line: token.line,
                column: token.column,
            },
            None => {
                let (line, column) = end_position(self.text);
                ParserError {
                    message,
                    offset: self.text.len(),
                    line,
                    column,
                }
            }
        }
    }

    /// Skip tokens until the current one has one of `token_types`
    ///
    /// Returns the number of skipped tokens.
    pub fn skip_until(&mut self, token_types: &[&str]) -> usize {
        let mut skipped = 0;
        while let Some(token) = self.peek() {
            if token_types.contains(&token.token_type.as_str()) {
                break;
            }
            self.position += 1;
            skipped += 1;
        }
        skipped
    }
}

fn end_position(text: &str) -> (usize, usize) {
    let line = text.matches('\n').count() + 1;
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    (line, last_line.chars().count() + 1)
}

/// Fallback AST builder for languages without a grammar-bound builder
///
/// Produces a root of the grammar's entry rule type holding one `tokens`
/// child per visible token, each carrying its converted `value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAstBuilder;

impl AstBuilder for GenericAstBuilder {
    fn build(&self, tokens: &[Token], context: &AstBuildContext<'_>) -> AstBuildResult {
        let mut root = AstNode::new(context.grammar.entry_rule.clone());
        let mut errors = Vec::new();

        for token in tokens {
            let value = context.convert(token).unwrap_or_else(|e| {
                errors.push(ParserError {
                    message: e.to_string(),
                    offset: token.offset,
                    line: token.line,
                    column: token.column,
                });
                token.image.clone().into()
            });
            root.push_child(
                "tokens",
                AstNode::new(token.token_type.clone()).with_property("value", value),
            );
        }

        AstBuildResult {
            value: root,
            errors,
        }
    }
}
