//! Language metadata

use serde::{Deserialize, Serialize};

/// Identity of a language front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMetaData {
    /// Language identity used as registry key
    pub language_id: String,
    /// File extensions (with leading dot) handled by the language
    pub file_extensions: Vec<String>,
    /// Whether keywords match case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
}

impl LanguageMetaData {
    /// Create metadata for a case-sensitive language
    pub fn new<I, S>(language_id: impl Into<String>, file_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language_id: language_id.into(),
            file_extensions: file_extensions.into_iter().map(Into::into).collect(),
            case_insensitive: false,
        }
    }

    /// True when the language handles `extension` (with or without the dot)
    pub fn handles_extension(&self, extension: &str) -> bool {
        let normalized = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        self.file_extensions.iter().any(|e| *e == normalized)
    }
}
