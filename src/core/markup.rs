//! Inline markup tokenizer
//!
//! Recognises three non-nesting markup kinds in a single left-to-right scan:
//!
//! | Kind   | Source      |
//! |--------|-------------|
//! | code   | `` `x` ``   |
//! | bold   | `*x*`       |
//! | italic | `_x_`       |
//!
//! A delimiter opens a span only when the same delimiter closes it later in
//! the text with at least one character in between. Anything else is plain
//! text, so malformed markup degrades to its literal characters.

use serde::{Deserialize, Serialize};

/// Markup kinds in the order they are tried at a given position.
const DELIMITERS: [(char, SpanKind); 3] = [
    ('`', SpanKind::Code),
    ('*', SpanKind::Bold),
    ('_', SpanKind::Italic),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
}

impl SpanKind {
    /// Delimiter wrapping this kind in source text, if any
    pub fn delimiter(&self) -> Option<char> {
        match self {
            SpanKind::Plain => None,
            SpanKind::Bold => Some('*'),
            SpanKind::Italic => Some('_'),
            SpanKind::Code => Some('`'),
        }
    }
}

/// A contiguous fragment of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Span {
    fn styled(kind: SpanKind, text: &str) -> Self {
        match kind {
            SpanKind::Plain => Span::Plain(text.to_string()),
            SpanKind::Bold => Span::Bold(text.to_string()),
            SpanKind::Italic => Span::Italic(text.to_string()),
            SpanKind::Code => Span::Code(text.to_string()),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
        }
    }

    /// Inner text without delimiters
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Plain(_))
    }

    /// The source text this span was scanned from, delimiters included
    pub fn source(&self) -> String {
        match self.kind().delimiter() {
            Some(delimiter) => format!("{delimiter}{}{delimiter}", self.text()),
            None => self.text().to_string(),
        }
    }
}

/// Split `text` into plain and styled spans in source order.
///
/// Adjacent plain text is coalesced, so two `Plain` spans are never
/// neighbours. An empty input yields no spans.
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        let open_len = ch.len_utf8();

        if let Some((close, kind)) = find_close(text, pos, ch) {
            if !plain.is_empty() {
                spans.push(Span::Plain(std::mem::take(&mut plain)));
            }
            spans.push(Span::styled(kind, &text[pos + open_len..close]));
            pos = close + open_len;
        } else {
            plain.push(ch);
            pos += open_len;
        }
    }

    if !plain.is_empty() {
        spans.push(Span::Plain(plain));
    }

    spans
}

/// Locate the closing delimiter for an opening `ch` at byte offset `pos`.
fn find_close(text: &str, pos: usize, ch: char) -> Option<(usize, SpanKind)> {
    let (delimiter, kind) = DELIMITERS.iter().find(|(d, _)| *d == ch)?;
    let body_start = pos + delimiter.len_utf8();
    let close = body_start + text[body_start..].find(*delimiter)?;

    // Empty spans such as `**` stay literal.
    if close == body_start {
        return None;
    }
    Some((close, *kind))
}
