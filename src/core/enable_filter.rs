//! Prefix-based enable filter
//!
//! Until a pattern is enabled the filter is unset and every logger emits.
//! Once set, a logger emits only if its prefix matches at least one active
//! pattern. Patterns are globs whose only special character is `*`, which
//! matches any run of characters (including none).
//!
//! The process-wide filter reads its initial patterns from the
//! [`FILTER_ENV_VAR`] environment variable, e.g. `MARKDOWN_LOG="db*,http,-db-pool"`.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Environment variable holding the initial directives of the global filter
pub const FILTER_ENV_VAR: &str = "MARKDOWN_LOG";

static GLOBAL_FILTER: Lazy<Arc<EnableFilter>> = Lazy::new(|| Arc::new(EnableFilter::from_env()));

/// A glob pattern supporting the `*` wildcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, text: &str) -> bool {
        let mut parts = self.source.split('*');
        // `split` always yields at least one item
        let head = parts.next().unwrap_or_default();
        let Some(mut rest) = text.strip_prefix(head) else {
            return false;
        };

        let tail: Vec<&str> = parts.collect();
        let Some((last, middle)) = tail.split_last() else {
            // No wildcard: exact match
            return rest.is_empty();
        };

        for part in middle {
            match rest.find(part) {
                Some(at) => rest = &rest[at + part.len()..],
                None => return false,
            }
        }
        rest.ends_with(last)
    }
}

/// Gate deciding which prefixes may emit
#[derive(Debug, Default)]
pub struct EnableFilter {
    patterns: RwLock<Option<Vec<Pattern>>>,
}

impl EnableFilter {
    /// An unset filter that lets every prefix through
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter consulted by loggers that were not given one explicitly
    pub fn global() -> Arc<EnableFilter> {
        Arc::clone(&GLOBAL_FILTER)
    }

    /// Build a filter from the [`FILTER_ENV_VAR`] environment variable
    pub fn from_env() -> Self {
        let filter = Self::new();
        if let Ok(directives) = std::env::var(FILTER_ENV_VAR) {
            filter.apply_directives(&directives);
        }
        filter
    }

    /// Apply comma or whitespace separated directives in order.
    ///
    /// A directive is a pattern to enable, or `-pattern` to disable it.
    pub fn apply_directives(&self, directives: &str) {
        let items = directives
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|item| !item.is_empty());

        for item in items {
            match item.strip_prefix('-') {
                Some(pattern) => self.disable(pattern),
                None => self.enable(item),
            }
        }
    }

    /// Allow prefixes matching `pattern` to emit
    pub fn enable(&self, pattern: &str) {
        let mut patterns = self.patterns.write();
        let active = patterns.get_or_insert_with(Vec::new);
        if !active.iter().any(|p| p.as_str() == pattern) {
            active.push(Pattern::new(pattern));
        }
    }

    /// Remove a previously enabled pattern
    pub fn disable(&self, pattern: &str) {
        if let Some(active) = self.patterns.write().as_mut() {
            active.retain(|p| p.as_str() != pattern);
        }
    }

    /// Return to the unset state
    pub fn reset(&self) {
        *self.patterns.write() = None;
    }

    pub fn is_set(&self) -> bool {
        self.patterns.read().is_some()
    }

    pub fn patterns(&self) -> Vec<String> {
        self.patterns
            .read()
            .iter()
            .flatten()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    pub fn is_enabled(&self, prefix: &str) -> bool {
        match self.patterns.read().as_ref() {
            None => true,
            Some(active) => active.iter().any(|p| p.matches(prefix)),
        }
    }
}
