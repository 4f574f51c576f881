//! Rendering of spans into a `%c` format string plus style arguments

use super::markup::{Span, SpanKind};
use super::sanitizer::PLACEHOLDER;
use serde::{Deserialize, Serialize};

pub const BOLD_STYLE: &str = "font-weight:bold;";
pub const ITALIC_STYLE: &str = "font-style:italic;";
pub const CODE_STYLE: &str =
    "background:#FDF6E3; color:#586E75; padding:1px 5px; border-radius:4px;";
pub const RESET_STYLE: &str = "color:inherit;";

/// Style declaration that switches a span kind on
pub fn style_for(kind: SpanKind) -> Option<&'static str> {
    match kind {
        SpanKind::Plain => None,
        SpanKind::Bold => Some(BOLD_STYLE),
        SpanKind::Italic => Some(ITALIC_STYLE),
        SpanKind::Code => Some(CODE_STYLE),
    }
}

/// Markup delimiter whose span renders with `style`
pub fn delimiter_for(style: &str) -> Option<char> {
    match style {
        BOLD_STYLE => Some('*'),
        ITALIC_STYLE => Some('_'),
        CODE_STYLE => Some('`'),
        _ => None,
    }
}

/// A format string and the style arguments its placeholders consume
///
/// `styles` holds exactly one entry per `%c` the renderer wrote into
/// `format`, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub format: String,
    pub styles: Vec<String>,
}

impl RenderedMessage {
    /// A message with no styled regions
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            format: text.into(),
            styles: Vec::new(),
        }
    }

    /// Wrap `text` in a placeholder pair styled with `on`, then `reset`
    pub fn push_styled(&mut self, text: &str, on: &str, reset: &str) {
        self.format.push_str(PLACEHOLDER);
        self.format.push_str(text);
        self.format.push_str(PLACEHOLDER);
        self.styles.push(on.to_string());
        self.styles.push(reset.to_string());
    }

    pub fn push_plain(&mut self, text: &str) {
        self.format.push_str(text);
    }

    /// Append another rendered message after this one
    pub fn append(&mut self, other: RenderedMessage) {
        self.format.push_str(&other.format);
        self.styles.extend(other.styles);
    }

    /// Text for a console without styling.
    ///
    /// Regions styled as markup get their delimiters back; any other styled
    /// region, such as a prefix, is wrapped in brackets. A placeholder with
    /// no style left to consume is dropped.
    pub fn to_markup(&self) -> String {
        let mut output = String::with_capacity(self.format.len());
        for (index, segment) in self.format.split(PLACEHOLDER).enumerate() {
            // odd placeholders open a region, even ones reset it
            let opening = if index % 2 == 1 {
                self.styles.get(index - 1)
            } else {
                None
            };
            match opening.map(|style| delimiter_for(style)) {
                Some(Some(delimiter)) => {
                    output.push(delimiter);
                    output.push_str(segment);
                    output.push(delimiter);
                }
                Some(None) => {
                    output.push('[');
                    output.push_str(segment);
                    output.push(']');
                }
                None => output.push_str(segment),
            }
        }
        output
    }

    /// Console arguments: the format string followed by every style
    pub fn to_args(&self) -> Vec<String> {
        std::iter::once(self.format.clone())
            .chain(self.styles.iter().cloned())
            .collect()
    }
}

pub fn render(spans: &[Span]) -> RenderedMessage {
    let mut rendered = RenderedMessage::default();
    for span in spans {
        match style_for(span.kind()) {
            Some(on) => rendered.push_styled(span.text(), on, RESET_STYLE),
            None => rendered.push_plain(span.text()),
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markup::tokenize;

    #[test]
    fn test_bold() {
        let rendered = render(&tokenize("lorem *ipsum*"));
        assert_eq!(rendered.format, "lorem %cipsum%c");
        assert_eq!(rendered.styles, vec![BOLD_STYLE, RESET_STYLE]);
    }

    #[test]
    fn test_code() {
        let rendered = render(&tokenize("lorem `ipsum`"));
        assert_eq!(rendered.format, "lorem %cipsum%c");
        assert_eq!(
            rendered.styles,
            vec![
                "background:#FDF6E3; color:#586E75; padding:1px 5px; border-radius:4px;",
                "color:inherit;",
            ]
        );
    }

    #[test]
    fn test_styles_follow_source_order() {
        let rendered = render(&tokenize("lorem `ipsum` *dolor* sit _amet_"));
        assert_eq!(rendered.format, "lorem %cipsum%c %cdolor%c sit %camet%c");
        assert_eq!(
            rendered.styles,
            vec![
                CODE_STYLE,
                RESET_STYLE,
                BOLD_STYLE,
                RESET_STYLE,
                ITALIC_STYLE,
                RESET_STYLE
            ]
        );
    }

    #[test]
    fn test_plain_has_no_styles() {
        let rendered = render(&tokenize("nothing to see"));
        assert_eq!(rendered, RenderedMessage::plain("nothing to see"));
    }

    #[test]
    fn test_markup_text_restores_delimiters() {
        let mut prefixed = RenderedMessage::default();
        prefixed.push_styled("foo", "color:#268BD2; font-weight:bold;", "");
        prefixed.push_plain(" ");
        prefixed.append(render(&tokenize("lorem `ipsum` *dolor* sit _amet_")));

        assert_eq!(prefixed.to_markup(), "[foo] lorem `ipsum` *dolor* sit _amet_");
        assert_eq!(RenderedMessage::plain("a * b").to_markup(), "a * b");
        assert_eq!(delimiter_for(RESET_STYLE), None);
    }

    #[test]
    fn test_markup_text_missing_styles() {
        let rendered = RenderedMessage {
            format: "a%cb%cc".to_string(),
            styles: Vec::new(),
        };
        assert_eq!(rendered.to_markup(), "abc");
    }

    #[test]
    fn test_append_and_args() {
        let mut prefixed = RenderedMessage::default();
        prefixed.push_styled("app", "color:#268BD2; font-weight:bold;", "");
        prefixed.push_plain(" ");
        prefixed.append(render(&tokenize("*hi*")));

        assert_eq!(prefixed.format, "%capp%c %chi%c");
        assert_eq!(
            prefixed.to_args(),
            vec![
                "%capp%c %chi%c",
                "color:#268BD2; font-weight:bold;",
                "",
                BOLD_STYLE,
                RESET_STYLE
            ]
        );
    }
}
