//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
pub mod memory;

#[cfg(feature = "console")]
pub use console::{render_terminal, ConsoleAppender, CssStyle};
pub use memory::MemoryAppender;

// Re-export traits for backward compatibility
pub use crate::core::Appender;
