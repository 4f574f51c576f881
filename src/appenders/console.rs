//! Console appender implementation
//!
//! Plays back `%c` format strings on a terminal. Each placeholder switches to
//! the next style argument, which is read as a CSS declaration list and
//! translated to ANSI attributes. Declarations without a terminal
//! equivalent (padding, border-radius, ...) are ignored.
//!
//! With colours off, markup is printed as written and the prefix is shown
//! in brackets, e.g. `[db] pool *ready*`.

use crate::core::{
    Appender, ConsoleArgs, LogEntry, LoggerError, PrefixColor, RenderedMessage, Result,
    PLACEHOLDER,
};
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Terminal attributes recognised in a style argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyle {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<PrefixColor>,
    pub background: Option<PrefixColor>,
}

impl CssStyle {
    /// Parse `prop:value;` pairs. `color:inherit;` and `""` parse to no style.
    pub fn parse(css: &str) -> Self {
        let mut style = CssStyle::default();
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            match (property.trim(), value.trim()) {
                ("font-weight", "bold") => style.bold = true,
                ("font-style", "italic") => style.italic = true,
                ("color", value) => style.color = PrefixColor::from_hex(value),
                ("background" | "background-color", value) => {
                    style.background = PrefixColor::from_hex(value)
                }
                _ => {}
            }
        }
        style
    }

    pub fn is_plain(&self) -> bool {
        *self == CssStyle::default()
    }

    pub fn apply(&self, text: &str) -> ColoredString {
        let mut styled = text.normal();
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        if let Some(color) = self.color {
            styled = styled.truecolor(color.r, color.g, color.b);
        }
        if let Some(background) = self.background {
            styled = styled.on_truecolor(background.r, background.g, background.b);
        }
        styled
    }
}

/// Resolve a rendered message into terminal text.
///
/// Without colours the message is printed as markup text, see
/// [`RenderedMessage::to_markup`].
pub fn render_terminal(message: &RenderedMessage, use_colors: bool) -> String {
    if !use_colors {
        return message.to_markup();
    }

    let mut output = String::with_capacity(message.format.len());
    let mut styles = message.styles.iter();
    let mut current = CssStyle::default();

    for (index, segment) in message.format.split(PLACEHOLDER).enumerate() {
        if index > 0 {
            current = styles.next().map(|css| CssStyle::parse(css)).unwrap_or_default();
        }
        if segment.is_empty() {
            continue;
        }
        if !current.is_plain() {
            output.push_str(&current.apply(segment).to_string());
        } else {
            output.push_str(segment);
        }
    }
    output
}

pub struct ConsoleAppender {
    use_colors: bool,
    show_level: bool,
    timestamp_format: Option<String>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            show_level: false,
            timestamp_format: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Print the level name ahead of each line
    #[must_use]
    pub fn with_level(mut self, show_level: bool) -> Self {
        self.show_level = show_level;
        self
    }

    /// Print the entry timestamp using a strftime-compatible format string
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_markdown_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp("%H:%M:%S%.3f");
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = Some(format_str.to_string());
        self
    }

    /// The line this appender prints for `entry`, without the newline
    pub fn format_line(&self, entry: &LogEntry) -> Result<String> {
        let mut line = String::new();

        if let Some(ref format_str) = self.timestamp_format {
            line.push_str(&format!("[{}] ", entry.timestamp.format(format_str)));
        }

        if self.show_level {
            let label = format!("{:5}", entry.level.to_str());
            if self.use_colors {
                line.push_str(&label.color(entry.level.color_code()).to_string());
            } else {
                line.push_str(&label);
            }
            line.push(' ');
        }

        match &entry.args {
            ConsoleArgs::Formatted(message) => {
                line.push_str(&render_terminal(message, self.use_colors))
            }
            ConsoleArgs::Raw(value) => line.push_str(&serde_json::to_string(value)?),
        }

        Ok(line)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.format_line(entry)?;

        // warn and error go to stderr, like a browser console
        let written = if entry.level.is_stderr() {
            writeln!(std::io::stderr().lock(), "{}", line)
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)
        };
        written.map_err(|e| {
            LoggerError::io_operation(
                format!("writing {} output", entry.level.method_name()),
                "console unavailable",
                e,
            )
        })
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
