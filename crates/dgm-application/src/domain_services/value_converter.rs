use dgm_domain::constants::{ID_RULE, INT_RULE, STRING_RULE};
use dgm_domain::error::{Error, Result};
use dgm_domain::ports::ValueConverter;
use dgm_domain::value_objects::{ConvertedValue, TerminalRule, ValueType};

/// Built-in terminal conversion
///
/// `INT` becomes an integer, `STRING` loses its quotes and escapes, `ID`
/// loses a leading `^`. Any other rule is converted by its declared value
/// type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueConverter;

impl DefaultValueConverter {
    /// Create the converter
    pub fn new() -> Self {
        Self
    }

    /// Strip the surrounding quotes and resolve backslash escapes
    pub fn convert_string(input: &str) -> String {
        let mut quoted = input.chars();
        quoted.next();
        quoted.next_back();
        let inner = quoted.as_str();
        let mut result = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                result.push(c);
                continue;
            }
            match chars.next() {
                Some(escaped) => result.push(Self::escape_char(escaped)),
                None => result.push('\\'),
            }
        }
        result
    }

    /// Identifier text without the keyword escape
    pub fn convert_id(input: &str) -> String {
        input.strip_prefix('^').unwrap_or(input).to_string()
    }

    fn escape_char(c: char) -> char {
        match c {
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            '0' => '\0',
            other => other,
        }
    }

    fn convert_by_type(input: &str, rule: &TerminalRule) -> Result<ConvertedValue> {
        let invalid = |e: &dyn std::fmt::Display| {
            Error::value_conversion(&rule.name, input, e.to_string())
        };
        match rule.value_type {
            ValueType::Integer => input
                .parse::<i64>()
                .map(ConvertedValue::Integer)
                .map_err(|e| invalid(&e)),
            ValueType::Number => input
                .parse::<f64>()
                .map(ConvertedValue::Number)
                .map_err(|e| invalid(&e)),
            ValueType::Boolean => Ok(ConvertedValue::Boolean(input.eq_ignore_ascii_case("true"))),
            ValueType::String => Ok(ConvertedValue::String(input.to_string())),
        }
    }
}

impl ValueConverter for DefaultValueConverter {
    fn provider_name(&self) -> &str {
        "default"
    }

    fn convert(&self, input: &str, rule: &TerminalRule) -> Result<ConvertedValue> {
        match rule.name.as_str() {
            INT_RULE => input
                .parse::<i64>()
                .map(ConvertedValue::Integer)
                .map_err(|e| Error::value_conversion(INT_RULE, input, e.to_string())),
            STRING_RULE => Ok(ConvertedValue::String(Self::convert_string(input))),
            ID_RULE => Ok(ConvertedValue::String(Self::convert_id(input))),
            _ => Self::convert_by_type(input, rule),
        }
    }
}
