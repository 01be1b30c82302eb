//! Language Constants
//!
//! Terminal rule names and patterns of the Mermaid common grammar, plus the
//! identity of each language front-end. Patterns are unanchored; the token
//! builder anchors them.

// ============================================================================
// TERMINAL RULE NAMES
// ============================================================================

/// Line break terminal
pub const NEWLINE: &str = "NEWLINE";

/// Blank terminal (hidden)
pub const WHITESPACE: &str = "WHITESPACE";

/// YAML front matter terminal (hidden)
pub const YAML: &str = "YAML";

/// `%%{ ... }%%` directive terminal (hidden)
pub const DIRECTIVE: &str = "DIRECTIVE";

/// `%%` comment terminal (hidden)
pub const SINGLE_LINE_COMMENT: &str = "SINGLE_LINE_COMMENT";

/// Diagram title terminal
pub const TITLE: &str = "TITLE";

/// Accessible title terminal
pub const ACC_TITLE: &str = "ACC_TITLE";

/// Accessible description terminal
pub const ACC_DESCR: &str = "ACC_DESCR";

// ============================================================================
// TERMINAL PATTERNS
// ============================================================================

/// Rest of a line up to (not including) a `%%` comment
macro_rules! line_rest {
    () => {
        r"(?:[^\n\r%]|%[^\n\r%])*"
    };
}

/// Line break
pub const NEWLINE_PATTERN: &str = r"\r?\n";

/// Blanks
pub const WHITESPACE_PATTERN: &str = r"[\t ]+";

/// Front matter between `---` fences
pub const YAML_PATTERN: &str = r"---[\t ]*\r?\n(?:[\S\s]*?\r?\n)?---[\t ]*(?:\r?\n|$)";

/// Init directive
pub const DIRECTIVE_PATTERN: &str = r"[\t ]*%%\{[\S\s]*?\}%%(?:\r?\n)?";

/// Line comment
pub const SINGLE_LINE_COMMENT_PATTERN: &str = r"[\t ]*%%[^\n\r]*";

/// `title` followed by its text
pub const TITLE_PATTERN: &str = concat!(r"[\t ]*title(?:[\t ]", line_rest!(), ")?");

/// `accTitle: text`
pub const ACC_TITLE_PATTERN: &str = concat!(r"[\t ]*accTitle[\t ]*:", line_rest!());

/// `accDescr: text` or `accDescr { multi-line text }`
pub const ACC_DESCR_PATTERN: &str = concat!(
    r"[\t ]*accDescr(?:[\t ]*:",
    line_rest!(),
    r"|\s*\{[^}]*\})"
);

/// Non-negative integer
pub const INT_PATTERN: &str = "0|[1-9][0-9]*";

/// Single or double quoted string with backslash escapes
pub const STRING_PATTERN: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;

/// Comment start accepted right after a boundary-checked keyword
pub const COMMENT_START: &str = "%%";

// ============================================================================
// PACKET LANGUAGE
// ============================================================================

/// Packet language identity
pub const PACKET_LANGUAGE_ID: &str = "packet";

/// File extensions handled by the packet language
pub const PACKET_FILE_EXTENSIONS: [&str; 2] = [".mmd", ".mermaid"];

/// Packet diagram header keywords
pub const PACKET_HEADER_KEYWORDS: [&str; 2] = ["packet", "packet-beta"];
