//! Emphasis parser for the cloze markdown dialect.
//!
//! # Format
//! ```markdown
//! **bold**  *italic*  ~~strike~~
//! ```
//!
//! Markers pair up non-greedily on a single line and may nest
//! (`**a *b* c**`). There is no escape syntax: a `*` or `~~` that finds no
//! partner on its line stays literal text, and so does a pair with nothing
//! between its delimiters (`**` on its own, `****`).

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The three supported emphasis styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Bold,
    Italic,
    Strike,
}

impl Emphasis {
    /// Delimiter written on both sides of the styled text.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strike => "~~",
        }
    }
}

/// Marker matchers in priority order.
///
/// The leftmost match wins; when two matches start at the same byte the one
/// listed first wins. Bold must precede italic because `*…*` also matches the
/// opening of every `**…**`.
pub const MARKER_PRECEDENCE: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Strike];

/// Parsed span tree. Built fresh per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Strike(Vec<Span>),
}

impl Span {
    pub fn styled(emphasis: Emphasis, children: Vec<Span>) -> Self {
        match emphasis {
            Emphasis::Bold => Self::Bold(children),
            Emphasis::Italic => Self::Italic(children),
            Emphasis::Strike => Self::Strike(children),
        }
    }

    /// Style of this span, `None` for plain text.
    pub fn emphasis(&self) -> Option<Emphasis> {
        match self {
            Self::Plain(_) => None,
            Self::Bold(_) => Some(Emphasis::Bold),
            Self::Italic(_) => Some(Emphasis::Italic),
            Self::Strike(_) => Some(Emphasis::Strike),
        }
    }

    /// Child spans of a styled span; empty for plain text.
    pub fn children(&self) -> &[Span] {
        match self {
            Self::Plain(_) => &[],
            Self::Bold(children) | Self::Italic(children) | Self::Strike(children) => children,
        }
    }
}

/// Parse markdown-dialect text into a span tree.
///
/// Total over any input: the empty string yields an empty tree and malformed
/// markers degrade to plain text. Adjacent plain text is merged into a single
/// `Span::Plain`.
pub fn parse(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(marker) = find_leftmost(rest) else {
            push_plain(&mut spans, rest);
            break;
        };

        push_plain(&mut spans, &rest[..marker.start]);

        let inner = &rest[marker.inner.clone()];
        if inner.is_empty() {
            push_plain(&mut spans, &rest[marker.start..marker.end]);
        } else {
            spans.push(Span::styled(marker.emphasis, parse(inner)));
        }

        rest = &rest[marker.end..];
    }

    spans
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    emphasis: Emphasis,
    start: usize,
    inner: Range<usize>,
    end: usize,
}

fn find_leftmost(text: &str) -> Option<Marker> {
    let mut best: Option<Marker> = None;
    for emphasis in MARKER_PRECEDENCE {
        if let Some(candidate) = find_pair(text, emphasis) {
            if best.as_ref().map_or(true, |b| candidate.start < b.start) {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Leftmost opening delimiter that has a closing partner on the same line,
/// paired with the nearest such partner.
fn find_pair(text: &str, emphasis: Emphasis) -> Option<Marker> {
    let delimiter = emphasis.delimiter();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(delimiter) {
        let start = search_from + offset;
        let inner_start = start + delimiter.len();
        let line = &text[inner_start..];
        let line = &line[..line.find(is_line_terminator).unwrap_or(line.len())];

        if let Some(close) = line.find(delimiter) {
            let inner_end = inner_start + close;
            return Some(Marker {
                emphasis,
                start,
                inner: inner_start..inner_end,
                end: inner_end + delimiter.len(),
            });
        }

        // Delimiters are ASCII, so one byte past the opener is a char boundary.
        search_from = start + 1;
    }

    None
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Span::Plain(last)) = spans.last_mut() {
        last.push_str(text);
    } else {
        spans.push(Span::Plain(text.to_string()));
    }
}
