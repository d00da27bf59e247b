//! Item factories.

use chrono::{DateTime, Duration, Utc};
use cloze_core::{ClozeSet, Item, ReviewState};

pub const COURAGE: &str = "**Courage** is not the absence of *fear*";

/// Build an item at `stage`, due `due_in` from `now` (negative for overdue).
pub fn item(title: &str, body: &str, clozes: &[&str], stage: usize, now: DateTime<Utc>, due_in: Duration) -> Item {
    Item::new(
        title,
        body,
        clozes.iter().copied().collect::<ClozeSet>(),
        ReviewState {
            stage,
            next_due_at: now + due_in,
            review_count: 0,
            error_count: 0,
        },
    )
}

/// Overdue item built from the courage quote.
pub fn courage(now: DateTime<Utc>) -> Item {
    item("Courage", COURAGE, &["Courage", "fear"], 0, now, Duration::minutes(-5))
}

/// A small deck: one overdue at stage 0, one overdue at stage 7, one not due
/// and mastered.
pub fn deck(now: DateTime<Utc>) -> Vec<Item> {
    vec![
        courage(now),
        item(
            "Brevity",
            "Brevity is the *soul* of wit",
            &["Brevity", "soul"],
            7,
            now,
            Duration::minutes(-1),
        ),
        item(
            "Design",
            "Good design is as little design as possible",
            &["design", "little"],
            5,
            now,
            Duration::hours(12),
        ),
    ]
}
