//! Plain-text presentation of rendered items.
//!
//! Emphasis markers are written back around styled children, masked words
//! become a fixed-width blank and revealed words are bracketed.

use chrono::{DateTime, Utc};
use cloze_core::{DueLabel, Item, LadderScheduler, RenderNode, WordKind, WordNode};

pub const MASK: &str = "[____]";

/// Flatten a render tree into terminal text.
pub fn to_terminal(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        match node {
            RenderNode::Text { text } => out.push_str(text),
            RenderNode::Word(word) => write_word(word, out),
            RenderNode::Styled { emphasis, children } => {
                out.push_str(emphasis.delimiter());
                write_nodes(children, out);
                out.push_str(emphasis.delimiter());
            }
        }
    }
}

fn write_word(word: &WordNode, out: &mut String) {
    match word.kind {
        WordKind::Hidden => out.push_str(MASK),
        WordKind::Revealed => {
            out.push('[');
            out.push_str(&word.text);
            out.push(']');
        }
        WordKind::Plain => out.push_str(&word.text),
    }
}

/// One-based stage position, e.g. `Stage 3 / 8`.
pub fn stage_label(item: &Item, scheduler: &LadderScheduler) -> String {
    format!(
        "Stage {} / {}",
        item.review.stage + 1,
        scheduler.ladder().stage_count()
    )
}

/// Single summary line for item listings.
pub fn list_line(item: &Item, scheduler: &LadderScheduler, now: DateTime<Utc>) -> String {
    format!(
        "{}  {:<24}  {}  {}",
        item.id,
        item.title,
        stage_label(item, scheduler),
        DueLabel::until(item.review.next_due_at, now)
    )
}
