use dgm_domain::error::Result;
use dgm_domain::ports::{Lexer, TokenBuilder};
use dgm_domain::value_objects::{Grammar, LexerError, LexerResult, Token, TokenType};
use std::collections::HashMap;
use tracing::warn;

/// Line and column of the lexer's read position
#[derive(Debug, Clone, Copy)]
struct Position {
    line: usize,
    column: usize,
}

impl Position {
    fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// First-match lexer over an ordered token type list
///
/// At each offset the first token type that matches wins, unless one of its
/// longer alternatives matches more text. Input no token type matches is
/// skipped up to the next offset where lexing can resume and reported as a
/// [`LexerError`].
#[derive(Debug, Clone)]
pub struct DefaultLexer {
    token_types: Vec<TokenType>,
    longer_alts: Vec<Vec<usize>>,
}

impl DefaultLexer {
    /// Lexer for token types in precedence order
    pub fn new(token_types: Vec<TokenType>) -> Self {
        let by_name: HashMap<&str, usize> = token_types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), i))
            .collect();
        let longer_alts = token_types
            .iter()
            .map(|token_type| {
                token_type
                    .longer_alt
                    .iter()
                    .filter_map(|name| {
                        let index = by_name.get(name.as_str()).copied();
                        if index.is_none() {
                            warn!(token = %token_type.name, longer_alt = %name, "Unknown longer alternative ignored");
                        }
                        index
                    })
                    .collect()
            })
            .collect();
        Self {
            token_types,
            longer_alts,
        }
    }

    /// Lexer for the token types `builder` produces from `grammar`
    pub fn from_builder(builder: &dyn TokenBuilder, grammar: &Grammar) -> Result<Self> {
        Ok(Self::new(builder.build_tokens(grammar)?))
    }

    /// Winning token type index and match length at the start of `rest`
    fn match_at(&self, rest: &str) -> Option<(usize, usize)> {
        self.token_types
            .iter()
            .enumerate()
            .find_map(|(index, token_type)| {
                token_type.match_len(rest).map(|len| (index, len))
            })
            .map(|(index, len)| {
                self.longer_alts[index]
                    .iter()
                    .find_map(|&alt| {
                        self.token_types[alt]
                            .match_len(rest)
                            .filter(|&alt_len| alt_len > len)
                            .map(|alt_len| (alt, alt_len))
                    })
                    .unwrap_or((index, len))
            })
    }
}

impl Lexer for DefaultLexer {
    fn token_types(&self) -> &[TokenType] {
        &self.token_types
    }

    fn tokenize(&self, text: &str) -> LexerResult {
        let mut result = LexerResult::default();
        let mut offset = 0;
        let mut position = Position::start();

        while offset < text.len() {
            let rest = &text[offset..];
            if let Some((index, len)) = self.match_at(rest) {
                let token_type = &self.token_types[index];
                let image = &rest[..len];
                let token = Token {
                    token_type: token_type.name.clone(),
                    image: image.to_string(),
                    offset,
                    line: position.line,
                    column: position.column,
                };
                if token_type.hidden {
                    result.hidden.push(token);
                } else {
                    result.tokens.push(token);
                }
                position.advance(image);
                offset += len;
                continue;
            }

            let start = offset;
            let start_position = position;
            let mut skipped = 0;
            for c in rest.chars() {
                offset += c.len_utf8();
                skipped += 1;
                if offset >= text.len() || self.match_at(&text[offset..]).is_some() {
                    break;
                }
            }
            let skipped_text = &text[start..offset];
            let first = skipped_text.chars().next().unwrap_or_default();
            result.errors.push(LexerError {
                message: format!(
                    "unexpected character: ->{first}<- at offset: {start}, skipped {skipped} characters."
                ),
                offset: start,
                length: offset - start,
                line: start_position.line,
                column: start_position.column,
            });
            position.advance(skipped_text);
        }

        result
    }
}
