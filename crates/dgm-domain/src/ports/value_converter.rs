//! Value converter extension point

use crate::error::Result;
use crate::value_objects::{ConvertedValue, TerminalRule};

/// Converts the raw text of a matched terminal into a typed value
pub trait ValueConverter: Send + Sync {
    /// Name of the implementation, for diagnostics
    fn provider_name(&self) -> &str;

    /// Convert `input`, the text matched by `rule`
    fn convert(&self, input: &str, rule: &TerminalRule) -> Result<ConvertedValue>;
}
