//! In-memory appender
//!
//! Records every entry it receives. Clones share the same buffer, so a test
//! can hand one clone to a logger and inspect the calls through another.

use crate::core::{Appender, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, RenderedMessage};

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryAppender::new();
        let mut handle = memory.clone();

        handle
            .append(&LogEntry::formatted(LogLevel::Info, RenderedMessage::plain("one")))
            .unwrap();
        handle
            .append(&LogEntry::formatted(LogLevel::Warn, RenderedMessage::plain("two")))
            .unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.last().unwrap().format(), Some("two"));

        memory.clear();
        assert!(handle.is_empty());
    }
}
