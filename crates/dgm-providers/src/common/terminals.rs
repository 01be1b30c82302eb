use crate::constants::{
    ACC_DESCR, ACC_DESCR_PATTERN, ACC_TITLE, ACC_TITLE_PATTERN, DIRECTIVE, DIRECTIVE_PATTERN,
    INT_PATTERN, NEWLINE, NEWLINE_PATTERN, SINGLE_LINE_COMMENT, SINGLE_LINE_COMMENT_PATTERN,
    STRING_PATTERN, TITLE, TITLE_PATTERN, WHITESPACE, WHITESPACE_PATTERN, YAML, YAML_PATTERN,
};
use dgm_domain::constants::{INT_RULE, STRING_RULE};
use dgm_domain::value_objects::{TerminalRule, ValueType};

/// Terminal rules of the Mermaid common grammar, in declaration order
pub fn common_terminals() -> Vec<TerminalRule> {
    vec![
        TerminalRule::new(NEWLINE, NEWLINE_PATTERN),
        TerminalRule::hidden(WHITESPACE, WHITESPACE_PATTERN),
        TerminalRule::hidden(YAML, YAML_PATTERN),
        TerminalRule::hidden(DIRECTIVE, DIRECTIVE_PATTERN),
        TerminalRule::hidden(SINGLE_LINE_COMMENT, SINGLE_LINE_COMMENT_PATTERN),
        TerminalRule::new(ACC_DESCR, ACC_DESCR_PATTERN),
        TerminalRule::new(ACC_TITLE, ACC_TITLE_PATTERN),
        TerminalRule::new(TITLE, TITLE_PATTERN),
        TerminalRule::new(INT_RULE, INT_PATTERN).with_value_type(ValueType::Integer),
        TerminalRule::new(STRING_RULE, STRING_PATTERN),
    ]
}
