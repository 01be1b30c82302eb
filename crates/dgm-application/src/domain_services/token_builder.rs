use dgm_domain::error::Result;
use dgm_domain::ports::TokenBuilder;
use dgm_domain::value_objects::{Grammar, TerminalRule, TokenType};

/// Samples a hidden terminal must match entirely to count as whitespace
const WHITESPACE_SAMPLES: [&str; 4] = [" ", "\t", "\n", "\r\n"];

/// Default token ordering
///
/// Whitespace-like hidden terminals come first, then keywords longest first,
/// then every other terminal in declaration order. A keyword whose text is
/// also fully matched by a terminal (an identifier rule, say) gets that
/// terminal as longer alternative, so `packets` does not lex as `packet` + `s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenBuilder {
    case_insensitive: bool,
}

impl DefaultTokenBuilder {
    /// Builder for case-sensitive keywords
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder matching keywords regardless of case
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
        }
    }

    /// Token types of all terminal rules in declaration order
    pub fn build_terminal_tokens(&self, terminals: &[TerminalRule]) -> Result<Vec<TokenType>> {
        terminals
            .iter()
            .map(|rule| TokenType::terminal(&rule.name, &rule.pattern, rule.hidden))
            .collect()
    }

    /// Keyword token types, longest first
    ///
    /// `terminal_tokens` supply the longer alternatives.
    pub fn build_keyword_tokens(
        &self,
        keywords: &[String],
        terminal_tokens: &[TokenType],
    ) -> Result<Vec<TokenType>> {
        let mut sorted: Vec<&String> = keywords.iter().collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));
        sorted.dedup();

        sorted
            .into_iter()
            .map(|keyword| {
                let mut token = TokenType::keyword(keyword, self.case_insensitive)?;
                token.longer_alt = terminal_tokens
                    .iter()
                    .filter(|t| !t.hidden && t.matches_fully(keyword))
                    .map(|t| t.name.clone())
                    .collect();
                Ok(token)
            })
            .collect()
    }

    /// True when a token type only ever consumes whitespace
    pub fn is_whitespace(token: &TokenType) -> bool {
        token.hidden && WHITESPACE_SAMPLES.iter().any(|s| token.matches_fully(s))
    }
}

impl TokenBuilder for DefaultTokenBuilder {
    fn provider_name(&self) -> &str {
        "default"
    }

    fn build_tokens(&self, grammar: &Grammar) -> Result<Vec<TokenType>> {
        let terminals = self.build_terminal_tokens(&grammar.terminals)?;
        let keywords = self.build_keyword_tokens(&grammar.keywords, &terminals)?;

        let (whitespace, others): (Vec<_>, Vec<_>) =
            terminals.into_iter().partition(Self::is_whitespace);

        let mut tokens = whitespace;
        tokens.extend(keywords);
        tokens.extend(others);
        Ok(tokens)
    }
}
