//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Markup in the
//! formatted text is rendered like any other message. Each macro evaluates
//! to the `Result` of the underlying logger call.
//!
//! # Examples
//!
//! ```
//! use rust_markdown_logger::prelude::*;
//! use rust_markdown_logger::info;
//!
//! let logger = Logger::builder().appender(MemoryAppender::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port `{}`", port).unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_markdown_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use rust_markdown_logger::emit;
/// emit!(logger, LogLevel::Info, "Simple message").unwrap();
/// emit!(logger, LogLevel::Error, "Error code: *{}*", 500).unwrap();
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_markdown_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use rust_markdown_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a log-level message.
///
/// # Examples
///
/// ```
/// # use rust_markdown_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use rust_markdown_logger::log;
/// log!(logger, "Loaded _{}_ plugins", 3).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Log, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_markdown_logger::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use rust_markdown_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
