//! Logger configuration

use super::error::Result;
use serde::{Deserialize, Serialize};

/// Options recognised when constructing a [`Logger`](super::Logger)
///
/// Every field is optional when deserializing; missing fields take the
/// defaults below.
///
/// # Example
///
/// ```
/// use rust_markdown_logger::LoggerConfig;
///
/// let config = LoggerConfig::from_json(r#"{"prefix": "db", "align_output": true}"#).unwrap();
/// assert_eq!(config.prefix, "db");
/// assert!(config.markdown);
/// assert!(config.align_output);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Display name printed ahead of each message; empty for none
    pub prefix: String,

    /// Parse `*bold*`, `_italic_` and `` `code` `` markup
    pub markdown: bool,

    /// Pad the prefix to the width of the widest aligned prefix
    #[serde(alias = "alignOutput")]
    pub align_output: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            markdown: true,
            align_output: false,
        }
    }
}

impl LoggerConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    #[must_use]
    pub fn with_align_output(mut self, align_output: bool) -> Self {
        self.align_output = align_output;
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.prefix, "");
        assert!(config.markdown);
        assert!(!config.align_output);
    }

    #[test]
    fn test_partial_json() {
        let config = LoggerConfig::from_json(r#"{"markdown": false}"#).unwrap();
        assert_eq!(config, LoggerConfig::default().with_markdown(false));
    }

    #[test]
    fn test_camel_case_alias() {
        let config = LoggerConfig::from_json(r#"{"prefix": "x", "alignOutput": true}"#).unwrap();
        assert_eq!(config, LoggerConfig::new("x").with_align_output(true));
    }

    #[test]
    fn test_invalid_json() {
        assert!(LoggerConfig::from_json("{prefix:").is_err());
    }
}
