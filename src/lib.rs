//! # Rust Markdown Logger
//!
//! A console logger that turns lightweight inline markup into styled output.
//!
//! Messages are written with `*bold*`, `_italic_` and `` `code` `` markup and
//! rendered into a `%c` format string plus one CSS-like style argument per
//! placeholder, the calling convention of a styling-aware console.
//!
//! ## Features
//!
//! - **Markup rendering**: single-pass, non-nesting tokenizer; malformed markup stays literal
//! - **Prefixes**: coloured per-logger prefixes, optionally padded to a shared width
//! - **Enable filter**: glob patterns (`*`) decide which prefixes may emit
//! - **Pluggable output**: console and in-memory appenders, or your own
//!
//! ## Example
//!
//! ```
//! use rust_markdown_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .appender(memory.clone())
//!     .build();
//!
//! logger.info("lorem *ipsum*").unwrap();
//!
//! let entry = memory.last().unwrap();
//! assert_eq!(entry.format(), Some("lorem %cipsum%c"));
//! assert_eq!(entry.styles(), ["font-weight:bold;", "color:inherit;"]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::appenders::MemoryAppender;
    pub use crate::core::{
        render, sanitize, tokenize, Appender, ConsoleArgs, EnableFilter, LogEntry, LogLevel,
        LogMessage, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerId, PrefixColor,
        PrefixRegistry, RenderedMessage, Result, Span,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
pub use appenders::MemoryAppender;
pub use core::{
    render, sanitize, tokenize, Appender, ConsoleArgs, EnableFilter, LogEntry, LogLevel,
    LogMessage, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerId, Pattern, PrefixColor,
    PrefixRegistry, RenderedMessage, Result, Span, SpanKind, FILTER_ENV_VAR, PLACEHOLDER,
};
