//! Domain constants
//!
//! Names of terminal rules that receive built-in value conversion.

/// Integer literal terminal
pub const INT_RULE: &str = "INT";

/// Quoted string terminal
pub const STRING_RULE: &str = "STRING";

/// Identifier terminal (a leading `^` escapes keywords)
pub const ID_RULE: &str = "ID";

/// Synthetic token type name used for the end of input
pub const EOF_TOKEN: &str = "EOF";
