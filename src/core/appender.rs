//! Appender trait for log output destinations
//!
//! An appender plays the role of the console: one call per log entry, with
//! the entry's level selecting the console method.

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
