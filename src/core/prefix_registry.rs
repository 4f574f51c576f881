//! Registry of logger display prefixes
//!
//! Every logger registers its prefix once, at construction. Loggers that opt
//! into alignment share a common width: whenever another aligned logger
//! registers, the width is recomputed as the character count of the longest
//! original prefix in the aligned set and every aligned prefix is right-padded with spaces to it.
//! Loggers constructed earlier therefore see their displayed prefix grow
//! after later registrations.
//!
//! Entries are never removed. Loggers are expected to live for the whole
//! process, and the global registry lives as long.
//!
//! # Example
//!
//! ```
//! use rust_markdown_logger::{LoggerId, PrefixRegistry};
//!
//! let registry = PrefixRegistry::new();
//! let (a, b) = (LoggerId::next(), LoggerId::next());
//!
//! assert_eq!(registry.register(a, "db", true), "db");
//! assert_eq!(registry.register(b, "http", true), "http");
//! assert_eq!(registry.effective_prefix(a).as_deref(), Some("db  "));
//! ```

use super::prefix_color::PrefixColor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_LOGGER_ID: AtomicU64 = AtomicU64::new(1);

static GLOBAL_REGISTRY: Lazy<Arc<PrefixRegistry>> = Lazy::new(|| Arc::new(PrefixRegistry::new()));

/// Process-wide unique identity of a logger instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoggerId(u64);

impl LoggerId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        LoggerId(NEXT_LOGGER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LoggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "logger#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct PrefixEntry {
    original: String,
    effective: String,
    aligned: bool,
    color: PrefixColor,
}

#[derive(Debug, Default)]
struct RegistryState {
    entries: HashMap<LoggerId, PrefixEntry>,
    alignment_width: usize,
    registrations: usize,
}

impl RegistryState {
    /// Re-pad every aligned prefix to the widest aligned original.
    fn realign(&mut self) {
        let width = self
            .entries
            .values()
            .filter(|entry| entry.aligned)
            .map(|entry| entry.original.chars().count())
            .max()
            .unwrap_or(0);

        for entry in self.entries.values_mut().filter(|entry| entry.aligned) {
            entry.effective = pad_to_width(&entry.original, width);
        }
        self.alignment_width = width;
    }
}

/// Right-pad `prefix` with spaces until it is `width` characters long
fn pad_to_width(prefix: &str, width: usize) -> String {
    let current = prefix.chars().count();
    let mut padded = String::with_capacity(prefix.len() + width.saturating_sub(current));
    padded.push_str(prefix);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

/// Tracks the original and displayed prefix of every registered logger
#[derive(Debug, Default)]
pub struct PrefixRegistry {
    state: RwLock<RegistryState>,
}

impl PrefixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by loggers that were not given one explicitly
    pub fn global() -> Arc<PrefixRegistry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Record `prefix` for `id` and return the prefix it should display.
    ///
    /// Registering an aligned logger rewrites the displayed prefix of every
    /// aligned logger, including ones registered earlier. Registering the same
    /// id again replaces its entry but keeps its colour.
    pub fn register(&self, id: LoggerId, prefix: &str, align_output: bool) -> String {
        let mut state = self.state.write();

        let color = match state.entries.get(&id) {
            Some(existing) => existing.color,
            None => {
                let color = PrefixColor::nth(state.registrations);
                state.registrations += 1;
                color
            }
        };
        let was_aligned = state.entries.get(&id).is_some_and(|entry| entry.aligned);

        state.entries.insert(
            id,
            PrefixEntry {
                original: prefix.to_string(),
                effective: prefix.to_string(),
                aligned: align_output,
                color,
            },
        );

        if align_output || was_aligned {
            state.realign();
        }

        state.entries[&id].effective.clone()
    }

    /// Prefix currently displayed for `id`, padding included
    pub fn effective_prefix(&self, id: LoggerId) -> Option<String> {
        self.state.read().entries.get(&id).map(|entry| entry.effective.clone())
    }

    /// Prefix exactly as `id` registered it
    pub fn original_prefix(&self, id: LoggerId) -> Option<String> {
        self.state.read().entries.get(&id).map(|entry| entry.original.clone())
    }

    pub fn prefix_color(&self, id: LoggerId) -> Option<PrefixColor> {
        self.state.read().entries.get(&id).map(|entry| entry.color)
    }

    pub fn is_aligned(&self, id: LoggerId) -> bool {
        self.state.read().entries.get(&id).is_some_and(|entry| entry.aligned)
    }

    /// Character count every aligned prefix is padded to
    pub fn alignment_width(&self) -> usize {
        self.state.read().alignment_width
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
