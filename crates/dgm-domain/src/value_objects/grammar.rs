//! Grammar tables
//!
//! The subset of a compiled grammar that language services consume: the
//! keywords and terminal rules a token builder turns into token types, and the
//! value type of each terminal.

use serde::{Deserialize, Serialize};

/// Typed value produced when a terminal is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Plain text
    #[default]
    String,
    /// Whole number
    Integer,
    /// Floating point number
    Number,
    /// `true` / `false`
    Boolean,
}

/// A terminal rule declared by the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalRule {
    /// Rule name (e.g. `INT`, `TITLE`)
    pub name: String,
    /// Regular expression source, without anchors
    pub pattern: String,
    /// Hidden terminals are lexed but never reach the AST builder
    #[serde(default)]
    pub hidden: bool,
    /// Type of the converted value
    #[serde(default)]
    pub value_type: ValueType,
}

impl TerminalRule {
    /// Create a visible terminal producing strings
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            hidden: false,
            value_type: ValueType::String,
        }
    }

    /// Create a hidden terminal
    pub fn hidden(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::new(name, pattern)
        }
    }

    /// Set the converted value type
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

/// Compiled grammar tables of one language
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grammar {
    /// Grammar name (e.g. `Packet`)
    pub name: String,
    /// Name of the entry parser rule
    pub entry_rule: String,
    /// Keyword literals in declaration order
    pub keywords: Vec<String>,
    /// Terminal rules in declaration order
    pub terminals: Vec<TerminalRule>,
}

impl Grammar {
    /// Create an empty grammar
    pub fn new(name: impl Into<String>, entry_rule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_rule: entry_rule.into(),
            keywords: Vec::new(),
            terminals: Vec::new(),
        }
    }

    /// Add keyword literals
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add a terminal rule
    pub fn with_terminal(mut self, rule: TerminalRule) -> Self {
        self.terminals.push(rule);
        self
    }

    /// Add several terminal rules
    pub fn with_terminals(mut self, rules: impl IntoIterator<Item = TerminalRule>) -> Self {
        self.terminals.extend(rules);
        self
    }

    /// Look up a terminal rule by name
    pub fn terminal(&self, name: &str) -> Option<&TerminalRule> {
        self.terminals.iter().find(|rule| rule.name == name)
    }

    /// True when `literal` is a declared keyword
    pub fn is_keyword(&self, literal: &str) -> bool {
        self.keywords.iter().any(|k| k == literal)
    }
}
