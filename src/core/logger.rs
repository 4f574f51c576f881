//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    enable_filter::EnableFilter,
    error::Result,
    log_entry::{LogEntry, LogMessage},
    log_level::LogLevel,
    markup::tokenize,
    prefix_color::PrefixColor,
    prefix_registry::{LoggerId, PrefixRegistry},
    render::{render, RenderedMessage},
    sanitizer::sanitize,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Reset style following a prefix
const PREFIX_RESET_STYLE: &str = "";

pub struct Logger {
    id: LoggerId,
    markdown: bool,
    align_output: bool,
    registry: Arc<PrefixRegistry>,
    filter: Arc<EnableFilter>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    /// Create a logger on the global registry and filter, writing to the console
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Allow loggers whose prefix matches `pattern` to emit.
    ///
    /// Acts on the global filter; `*` matches every prefix, the empty one
    /// included.
    pub fn enable(pattern: &str) {
        EnableFilter::global().enable(pattern);
    }

    /// Withdraw a pattern previously passed to [`Logger::enable`]
    pub fn disable(pattern: &str) {
        EnableFilter::global().disable(pattern);
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        let mut appenders = self.appenders.write();
        appenders.push(appender);
    }

    pub fn id(&self) -> LoggerId {
        self.id
    }

    /// Prefix as currently displayed, alignment padding included.
    ///
    /// For aligned loggers this can grow when other aligned loggers are
    /// created later.
    pub fn prefix(&self) -> String {
        self.registry.effective_prefix(self.id).unwrap_or_default()
    }

    /// Prefix as configured, without padding
    pub fn original_prefix(&self) -> String {
        self.registry.original_prefix(self.id).unwrap_or_default()
    }

    pub fn prefix_color(&self) -> PrefixColor {
        self.registry
            .prefix_color(self.id)
            .unwrap_or_else(|| PrefixColor::nth(0))
    }

    pub fn markdown_enabled(&self) -> bool {
        self.markdown
    }

    pub fn align_output(&self) -> bool {
        self.align_output
    }

    /// Whether the enable filter currently lets this logger emit.
    ///
    /// Patterns are matched against the displayed prefix, padding included.
    pub fn is_enabled(&self) -> bool {
        self.filter.is_enabled(&self.prefix())
    }

    /// Log `message` at `level`.
    ///
    /// Does nothing when the enable filter rejects this logger. Errors from
    /// appenders are returned as-is; later appenders are not called.
    pub fn emit(&self, level: LogLevel, message: impl Into<LogMessage>) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let entry = match message.into() {
            LogMessage::Text(text) => LogEntry::formatted(level, self.format_text(&text)),
            LogMessage::Value(value) => LogEntry::raw(level, value),
        };
        self.dispatch(&entry)
    }

    /// Build the console arguments for a text message
    pub fn format_text(&self, text: &str) -> RenderedMessage {
        let sanitized = sanitize(text);
        let body = if self.markdown {
            render(&tokenize(&sanitized))
        } else {
            RenderedMessage::plain(sanitized)
        };

        let prefix = self.prefix();
        if prefix.is_empty() {
            return body;
        }

        let mut message = RenderedMessage::default();
        message.push_styled(
            &prefix,
            &self.prefix_color().prefix_style(),
            PREFIX_RESET_STYLE,
        );
        message.push_plain(" ");
        message.append(body);
        message
    }

    fn dispatch(&self, entry: &LogEntry) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.append(entry)?;
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.emit(LogLevel::Debug, message)
    }

    #[inline]
    pub fn log(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.emit(LogLevel::Log, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.emit(LogLevel::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.emit(LogLevel::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.emit(LogLevel::Error, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("id", &self.id)
            .field("prefix", &self.prefix())
            .field("markdown", &self.markdown)
            .field("align_output", &self.align_output)
            .field("appenders", &self.appenders.read().len())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_markdown_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::builder()
///     .prefix("db")
///     .align_output(true)
///     .registry(Arc::new(PrefixRegistry::new()))
///     .filter(Arc::new(EnableFilter::new()))
///     .appender(memory.clone())
///     .build();
///
/// logger.info("pool *ready*").unwrap();
/// assert_eq!(memory.len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appenders: Vec<Box<dyn Appender>>,
    registry: Option<Arc<PrefixRegistry>>,
    filter: Option<Arc<EnableFilter>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appenders: Vec::new(),
            registry: None,
            filter: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn markdown(mut self, enabled: bool) -> Self {
        self.config.markdown = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn align_output(mut self, enabled: bool) -> Self {
        self.config.align_output = enabled;
        self
    }

    /// Add an appender
    ///
    /// Without any, the logger writes to a [`ConsoleAppender`](crate::appenders::ConsoleAppender).
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Register the prefix with `registry` instead of the global one
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: Arc<PrefixRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Consult `filter` instead of the global one
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: Arc<EnableFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build the Logger, registering its prefix
    ///
    /// The prefix is stripped of placeholders before registration, so
    /// alignment is computed on the text actually displayed.
    pub fn build(self) -> Logger {
        let registry = self.registry.unwrap_or_else(PrefixRegistry::global);
        let filter = self.filter.unwrap_or_else(EnableFilter::global);

        let id = LoggerId::next();
        let prefix = sanitize(&self.config.prefix);
        registry.register(id, &prefix, self.config.align_output);

        #[allow(unused_mut)]
        let mut appenders = self.appenders;
        #[cfg(feature = "console")]
        if appenders.is_empty() {
            appenders.push(Box::new(crate::appenders::ConsoleAppender::new()));
        }

        Logger {
            id,
            markdown: self.config.markdown,
            align_output: self.config.align_output,
            registry,
            filter,
            appenders: RwLock::new(appenders),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_markdown_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .prefix("worker")
    ///     .markdown(false)
    ///     .build();
    /// assert_eq!(logger.original_prefix(), "worker");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
