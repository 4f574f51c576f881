//! Log entry structure

use super::log_level::LogLevel;
use super::render::RenderedMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a caller hands to a logging method
///
/// Text goes through sanitizing and markup rendering. Any other value is
/// forwarded to the appenders untouched, as a single argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    Value(Value),
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        LogMessage::Text(text.clone())
    }
}

impl From<Value> for LogMessage {
    /// JSON strings are treated as text; everything else passes through.
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => LogMessage::Text(text),
            other => LogMessage::Value(other),
        }
    }
}

/// Arguments of one console call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleArgs {
    /// A `%c` format string followed by its style arguments
    Formatted(RenderedMessage),
    /// A non-text value passed through verbatim
    Raw(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub args: ConsoleArgs,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(level: LogLevel, args: ConsoleArgs) -> Self {
        Self {
            level,
            args,
            timestamp: Utc::now(),
        }
    }

    pub fn formatted(level: LogLevel, message: RenderedMessage) -> Self {
        Self::new(level, ConsoleArgs::Formatted(message))
    }

    pub fn raw(level: LogLevel, value: Value) -> Self {
        Self::new(level, ConsoleArgs::Raw(value))
    }

    /// The format string, if this entry carries one
    pub fn format(&self) -> Option<&str> {
        match &self.args {
            ConsoleArgs::Formatted(message) => Some(&message.format),
            ConsoleArgs::Raw(_) => None,
        }
    }

    pub fn styles(&self) -> &[String] {
        match &self.args {
            ConsoleArgs::Formatted(message) => &message.styles,
            ConsoleArgs::Raw(_) => &[],
        }
    }

    /// The argument list a console-style sink is called with
    ///
    /// `[format, ...styles]` for text, `[value]` for pass-through values.
    pub fn args(&self) -> Vec<Value> {
        match &self.args {
            ConsoleArgs::Formatted(message) => {
                message.to_args().into_iter().map(Value::String).collect()
            }
            ConsoleArgs::Raw(value) => vec![value.clone()],
        }
    }
}
