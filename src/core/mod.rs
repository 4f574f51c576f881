//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod enable_filter;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod markup;
pub mod prefix_color;
pub mod prefix_registry;
pub mod render;
pub mod sanitizer;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use enable_filter::{EnableFilter, Pattern, FILTER_ENV_VAR};
pub use error::{LoggerError, Result};
pub use log_entry::{ConsoleArgs, LogEntry, LogMessage};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use markup::{tokenize, Span, SpanKind};
pub use prefix_color::{PrefixColor, PREFIX_PALETTE};
pub use prefix_registry::{LoggerId, PrefixRegistry};
pub use render::{render, RenderedMessage};
pub use sanitizer::{sanitize, PLACEHOLDER};
