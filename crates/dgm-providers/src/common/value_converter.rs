use crate::constants::{ACC_DESCR, ACC_TITLE, TITLE};
use dgm_application::domain_services::DefaultValueConverter;
use dgm_domain::error::{Error, Result};
use dgm_domain::ports::ValueConverter;
use dgm_domain::value_objects::{ConvertedValue, TerminalRule};
use regex::Regex;

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::grammar(format!("Invalid converter pattern: {e}")))
}

/// Value converter for the Mermaid common terminals
///
/// `TITLE`, `ACC_TITLE` and `ACC_DESCR` keep only their text. Single-line
/// text is trimmed with blank runs collapsed; a braced `accDescr { ... }`
/// block also loses per-line indentation and blank lines. Every other
/// terminal falls back to [`DefaultValueConverter`].
#[derive(Debug, Clone)]
pub struct CommonValueConverter {
    title: Regex,
    acc_title: Regex,
    acc_descr: Regex,
    blank_runs: Regex,
    line_start: Regex,
    line_end: Regex,
    line_break_runs: Regex,
    fallback: DefaultValueConverter,
}

impl CommonValueConverter {
    /// Compile the extraction patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: compile(r"title([\t ][^\n\r]*|)")?,
            acc_title: compile(r"accTitle[\t ]*:([^\n\r]*)")?,
            acc_descr: compile(r"accDescr(?:[\t ]*:([^\n\r]*)|\s*\{([^}]*)\})")?,
            blank_runs: compile(r"[\t ]{2,}")?,
            line_start: compile(r"(?m)^\s*")?,
            line_end: compile(r"(?m)\s+$")?,
            line_break_runs: compile(r"[\n\r]{2,}")?,
            fallback: DefaultValueConverter::new(),
        })
    }

    /// Text of a title or accessibility terminal, if `rule` is one
    pub fn convert_common(&self, rule: &str, input: &str) -> Option<String> {
        let regex = match rule {
            TITLE => &self.title,
            ACC_TITLE => &self.acc_title,
            ACC_DESCR => &self.acc_descr,
            _ => return None,
        };
        let captures = regex.captures(input)?;
        if let Some(single) = captures.get(1) {
            return Some(self.blank_runs.replace_all(single.as_str().trim(), " ").into_owned());
        }
        let block = captures.get(2)?.as_str();
        let text = self.line_start.replace_all(block, "");
        let text = self.line_end.replace_all(&text, "");
        let text = self.blank_runs.replace_all(&text, " ");
        Some(self.line_break_runs.replace_all(&text, "\n").into_owned())
    }
}

impl ValueConverter for CommonValueConverter {
    fn provider_name(&self) -> &str {
        "mermaid-common"
    }

    fn convert(&self, input: &str, rule: &TerminalRule) -> Result<ConvertedValue> {
        match self.convert_common(&rule.name, input) {
            Some(text) => Ok(ConvertedValue::String(text)),
            None => self.fallback.convert(input, rule),
        }
    }
}
