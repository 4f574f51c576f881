//! Basic logger usage example
//!
//! Demonstrates markup rendering, prefixes, alignment and the enable filter
//! on the console appender.
//!
//! Run with: cargo run --example basic_usage

use rust_markdown_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Markdown Logger - Basic Usage Example ===\n");

    // A logger with no prefix writing to the console
    let plain = Logger::default();

    println!("1. Logging at different levels:");
    plain.debug("This is a *debug* message")?;
    plain.log("This is a _log_ message")?;
    plain.info("This is an `info` message")?;
    plain.warn("This is a *warning* message")?;
    plain.error("This is an _error_ message")?;

    println!("\n2. Markup disabled:");
    let raw = Logger::new(LoggerConfig::default().with_markdown(false));
    raw.info("Stars stay *as is* here")?;

    println!("\n3. Aligned prefixes:");
    let db = Logger::new(LoggerConfig::new("db").with_align_output(true));
    let scheduler = Logger::new(LoggerConfig::new("scheduler").with_align_output(true));
    db.info("pool *ready*")?;
    scheduler.info("next run in `5s`")?;

    println!("\n4. Enable filter:");
    Logger::enable("db*");
    db.info("visible")?;
    scheduler.info("hidden")?;
    Logger::disable("db*");
    Logger::enable("*");

    println!("\n5. Non-text values:");
    plain.log(serde_json::json!({"foo": 1, "bar": 2}))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
