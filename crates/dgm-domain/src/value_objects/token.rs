//! Tokens and token types
//!
//! A [`TokenType`] is what a token builder produces from the grammar: an
//! anchored pattern plus the precedence information the lexer needs. A
//! [`Token`] is one matched piece of input.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Where a token type comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// Literal keyword of the grammar
    Keyword,
    /// Terminal rule of the grammar
    Terminal,
}

/// Restricts what may follow a keyword
///
/// The next character must be whitespace, the end of input, or the rest of
/// the input must start with one of `allowed_prefixes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordBoundary {
    /// Prefixes accepted right after the keyword (e.g. `%%`)
    pub allowed_prefixes: Vec<String>,
}

impl KeywordBoundary {
    /// Boundary accepting whitespace, end of input and the given prefixes
    pub fn new<I, S>(allowed_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_prefixes: allowed_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the text that follows a match
    pub fn permits(&self, rest: &str) -> bool {
        match rest.chars().next() {
            None => true,
            Some(c) if c.is_whitespace() => true,
            Some(_) => self.allowed_prefixes.iter().any(|p| rest.starts_with(p.as_str())),
        }
    }
}

/// A lexable token type
#[derive(Debug, Clone)]
pub struct TokenType {
    /// Token type name (keyword literal or terminal rule name)
    pub name: String,
    /// Pattern anchored at the start of the remaining input
    pub pattern: Regex,
    /// Keyword or terminal
    pub category: TokenCategory,
    /// Hidden tokens are kept out of the token stream
    pub hidden: bool,
    /// Token types that win when they match more text than this one
    pub longer_alt: Vec<String>,
    /// Optional constraint on the text following a match
    pub boundary: Option<KeywordBoundary>,
}

impl TokenType {
    /// Token type for a terminal rule; `source` is an unanchored regex
    pub fn terminal(name: impl Into<String>, source: &str, hidden: bool) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(&format!("^(?:{source})"))
            .map_err(|e| Error::grammar(format!("Invalid pattern for terminal {name}: {e}")))?;
        Ok(Self {
            name,
            pattern,
            category: TokenCategory::Terminal,
            hidden,
            longer_alt: Vec::new(),
            boundary: None,
        })
    }

    /// Token type matching a keyword literally
    pub fn keyword(literal: &str, case_insensitive: bool) -> Result<Self> {
        let flags = if case_insensitive { "(?i)" } else { "" };
        let pattern = Regex::new(&format!("^{flags}(?:{})", regex::escape(literal)))
            .map_err(|e| Error::grammar(format!("Invalid keyword {literal:?}: {e}")))?;
        Ok(Self {
            name: literal.to_string(),
            pattern,
            category: TokenCategory::Keyword,
            hidden: false,
            longer_alt: Vec::new(),
            boundary: None,
        })
    }

    /// Length of the match at the start of `rest`, if any
    ///
    /// Empty matches never count as a token.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let found = self.pattern.find(rest)?;
        let len = found.end();
        if len == 0 {
            return None;
        }
        match &self.boundary {
            Some(boundary) if !boundary.permits(&rest[len..]) => None,
            _ => Some(len),
        }
    }

    /// True when the pattern matches the whole of `text`
    pub fn matches_fully(&self, text: &str) -> bool {
        self.pattern.find(text).is_some_and(|m| m.end() == text.len())
    }
}

/// A matched token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Name of the token type that matched
    pub token_type: String,
    /// Matched text
    pub image: String,
    /// Byte offset in the input
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column (in characters)
    pub column: usize,
}

impl Token {
    /// Byte offset one past the end of the token
    pub fn end_offset(&self) -> usize {
        self.offset + self.image.len()
    }
}

/// A run of input no token type matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerError {
    /// Human readable description
    pub message: String,
    /// Byte offset of the offending text
    pub offset: usize,
    /// Byte length of the skipped text
    pub length: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

/// Output of a lexer run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerResult {
    /// Visible tokens in input order
    pub tokens: Vec<Token>,
    /// Hidden tokens (whitespace, comments) in input order
    pub hidden: Vec<Token>,
    /// Unmatched input
    pub errors: Vec<LexerError>,
}
