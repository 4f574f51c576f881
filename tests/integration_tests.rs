//! Integration tests for logger system
//!
//! These tests verify, for every console method:
//! - Markup rendering into `%c` format strings and style arguments
//! - Raw output when markup is disabled
//! - Placeholder sanitization
//! - Prefix printing and alignment
//! - The enable filter
//! - Pass-through of non-text values

use rust_markdown_logger::appenders::MemoryAppender;
use rust_markdown_logger::core::enable_filter::EnableFilter;
use rust_markdown_logger::core::log_level::LogLevel;
use rust_markdown_logger::core::logger::Logger;
use rust_markdown_logger::core::prefix_registry::PrefixRegistry;
use rust_markdown_logger::LoggerConfig;
use serde_json::{json, Value};
use std::sync::Arc;

const BOLD: &str = "font-weight:bold;";
const ITALIC: &str = "font-style:italic;";
const CODE: &str = "background:#FDF6E3; color:#586E75; padding:1px 5px; border-radius:4px;";
const RESET: &str = "color:inherit;";

struct Console {
    registry: Arc<PrefixRegistry>,
    filter: Arc<EnableFilter>,
    memory: MemoryAppender,
}

impl Console {
    fn new() -> Self {
        let filter = Arc::new(EnableFilter::new());
        filter.enable("*");
        Self {
            registry: Arc::new(PrefixRegistry::new()),
            filter,
            memory: MemoryAppender::new(),
        }
    }

    fn logger(&self, config: LoggerConfig) -> Logger {
        Logger::builder()
            .config(config)
            .registry(Arc::clone(&self.registry))
            .filter(Arc::clone(&self.filter))
            .appender(self.memory.clone())
            .build()
    }

    /// Arguments of the most recent call, asserting it went to `level`
    fn last_call(&self, level: LogLevel) -> Vec<Value> {
        let entry = self.memory.last().expect("no console call recorded");
        assert_eq!(entry.level, level);
        entry.args()
    }
}

fn args(items: &[&str]) -> Vec<Value> {
    items.iter().map(|item| json!(item)).collect()
}

#[test]
fn test_parses_markdown_if_enabled() {
    for level in LogLevel::ALL {
        let console = Console::new();
        let logger = console.logger(LoggerConfig::default().with_markdown(true));

        logger.emit(level, "lorem *ipsum*").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem %cipsum%c", BOLD, RESET]));

        logger.emit(level, "lorem _ipsum_").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem %cipsum%c", ITALIC, RESET]));

        logger.emit(level, "lorem `ipsum`").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem %cipsum%c", CODE, RESET]));

        logger.emit(level, "lorem `ipsum` *dolor* sit _amet_").unwrap();
        assert_eq!(
            console.last_call(level),
            args(&[
                "lorem %cipsum%c %cdolor%c sit %camet%c",
                CODE,
                RESET,
                BOLD,
                RESET,
                ITALIC,
                RESET
            ])
        );
    }
}

#[test]
fn test_does_not_parse_markdown_if_disabled() {
    for level in LogLevel::ALL {
        let console = Console::new();
        let logger = console.logger(LoggerConfig::default().with_markdown(false));

        logger.emit(level, "lorem *ipsum*").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem *ipsum*"]));

        logger.emit(level, "lorem _ipsum_ dolor").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem _ipsum_ dolor"]));

        logger.emit(level, "lorem `ipsum` dolor").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem `ipsum` dolor"]));
    }
}

#[test]
fn test_sanitizes_strings() {
    for level in LogLevel::ALL {
        let console = Console::new();
        let logger = console.logger(LoggerConfig::default().with_markdown(false));

        logger.emit(level, "lorem %cipsum%c sit %cdolor%c amet").unwrap();
        assert_eq!(console.last_call(level), args(&["lorem ipsum sit dolor amet"]));
    }
}

#[test]
fn test_sanitizes_before_markdown() {
    let console = Console::new();
    let logger = console.logger(LoggerConfig::default());

    logger.info("%c*bold*%c and %%cc").unwrap();
    assert_eq!(
        console.last_call(LogLevel::Info),
        args(&["%cbold%c and ", BOLD, RESET])
    );
}

#[test]
fn test_prints_prefix_if_present() {
    for level in LogLevel::ALL {
        let console = Console::new();
        let logger = console.logger(LoggerConfig::new("foo"));
        let prefix_style = format!("color:{}; font-weight:bold;", logger.prefix_color());

        logger.emit(level, "lorem ipsum").unwrap();
        assert_eq!(
            console.last_call(level),
            args(&["%cfoo%c lorem ipsum", prefix_style.as_str(), ""])
        );
    }
}

#[test]
fn test_prefix_is_sanitized() {
    let console = Console::new();
    let logger = console.logger(LoggerConfig::new("b%car"));

    logger.log("x").unwrap();
    let entry = console.memory.last().unwrap();
    assert_eq!(entry.format(), Some("%cbar%c x"));
    assert_eq!(entry.styles().len(), 2);
}

#[test]
fn test_aligns_logger_output() {
    let console = Console::new();
    let abc = console.logger(LoggerConfig::new("abc"));
    let demo = console.logger(LoggerConfig::new("demo").with_align_output(true));
    let long_demo = console.logger(LoggerConfig::new("longDemo").with_align_output(true));
    let longer_demo = console.logger(LoggerConfig::new("longerDemo").with_align_output(true));

    assert_eq!(abc.prefix().len(), 3, "unaligned prefixes are not padded");
    assert_eq!(demo.prefix().len(), 10, "short names are padded to the longest");
    assert_eq!(long_demo.prefix().len(), 10, "long names are padded to the longest");
    assert_eq!(longer_demo.prefix().len(), 10, "the longest name sets the width");
    assert_eq!(demo.original_prefix(), "demo");
}

#[test]
fn test_alignment_from_json_config() {
    let console = Console::new();
    let config = LoggerConfig::from_json(r#"{"prefix": "api", "alignOutput": true}"#).unwrap();
    let api = console.logger(config);
    console.logger(LoggerConfig::new("scheduler").with_align_output(true));

    api.warn("slow").unwrap();
    assert_eq!(console.memory.last().unwrap().format(), Some("%capi      %c slow"));
}

#[test]
fn test_prints_non_string_arguments_as_is() {
    for level in LogLevel::ALL {
        let console = Console::new();
        let logger = console.logger(LoggerConfig::new("foo"));
        let obj = json!({"foo": 1, "bar": 2});

        logger.emit(level, obj.clone()).unwrap();
        assert_eq!(console.last_call(level), vec![obj]);
    }
}

#[test]
fn test_enable_filter_gates_prefixes() {
    let console = Console::new();
    let db = console.logger(LoggerConfig::new("db:pool"));
    let http = console.logger(LoggerConfig::new("http"));
    let anonymous = console.logger(LoggerConfig::default());

    console.filter.disable("*");
    console.filter.enable("db:*");

    db.info("kept").unwrap();
    http.info("dropped").unwrap();
    anonymous.info("dropped").unwrap();
    assert_eq!(console.memory.len(), 1);

    console.filter.enable("*");
    anonymous.info("kept").unwrap();
    assert_eq!(console.memory.len(), 2);
}

#[test]
fn test_global_registry_and_filter() {
    // Uses a unique prefix so other tests sharing the globals are unaffected.
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .prefix("integration-global-filter")
        .appender(memory.clone())
        .build();

    Logger::enable("integration-global-*");
    logger.info("visible").unwrap();
    assert_eq!(memory.len(), 1);
    assert!(EnableFilter::global()
        .patterns()
        .contains(&"integration-global-*".to_string()));

    Logger::disable("integration-global-*");
    assert!(!PrefixRegistry::global().is_empty());
}

#[test]
fn test_console_without_colors_prints_markup() {
    use rust_markdown_logger::appenders::ConsoleAppender;

    let console = Console::new();
    let logger = console.logger(LoggerConfig::new("foo"));
    let appender = ConsoleAppender::with_colors(false);

    logger.info("lorem *ipsum* dolor `sit`").unwrap();
    let entry = console.memory.last().unwrap();
    assert_eq!(
        appender.format_line(&entry).unwrap(),
        "[foo] lorem *ipsum* dolor `sit`"
    );
}

#[test]
fn test_filter_sees_alignment_padding() {
    let console = Console::new();
    let api = console.logger(LoggerConfig::new("api").with_align_output(true));
    console.logger(LoggerConfig::new("scheduler").with_align_output(true));

    console.filter.disable("*");
    console.filter.enable("api");
    api.info("dropped").unwrap();
    assert!(console.memory.is_empty());

    console.filter.enable("api *");
    api.info("kept").unwrap();
    assert_eq!(console.memory.len(), 1);
}
