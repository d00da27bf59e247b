//! Deck-level views over a collection of items: statistics, filters,
//! sorting and due labels.

use crate::scheduler::{is_due, is_mastered};
use crate::types::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts shown on the deck overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total: usize,
    pub due: usize,
    pub mastered: usize,
}

impl DeckStats {
    pub fn collect<'a>(items: impl IntoIterator<Item = &'a Item>, now: DateTime<Utc>) -> Self {
        items.into_iter().fold(Self::default(), |mut stats, item| {
            stats.total += 1;
            stats.due += usize::from(is_due(item, now));
            stats.mastered += usize::from(is_mastered(item));
            stats
        })
    }
}

/// Review status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    NeedsReview,
    Completed,
    Mastered,
}

impl StatusFilter {
    pub fn matches(self, item: &Item, now: DateTime<Utc>) -> bool {
        match self {
            Self::NeedsReview => is_due(item, now),
            Self::Completed => !is_due(item, now),
            Self::Mastered => is_mastered(item),
        }
    }
}

/// Coarse stage bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageBand {
    /// Stages 0-2.
    Beginner,
    /// Stages 3-4.
    Learning,
    /// Stage 5 and up.
    Mastered,
}

impl StageBand {
    pub fn of(stage: usize) -> Self {
        match stage {
            0..=2 => Self::Beginner,
            3..=4 => Self::Learning,
            _ => Self::Mastered,
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        Self::of(item.review.stage) == self
    }
}

/// Item list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Soonest due first.
    #[default]
    NextDue,
    /// Highest stage first.
    Stage,
    Title,
}

/// Combined list query. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub status: Option<StatusFilter>,
    pub band: Option<StageBand>,
    /// Case-insensitive substring of title or body.
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

impl ItemQuery {
    pub fn matches(&self, item: &Item, now: DateTime<Utc>) -> bool {
        self.status.map_or(true, |s| s.matches(item, now))
            && self.band.map_or(true, |b| b.matches(item))
            && self.search.as_deref().map_or(true, |q| matches_search(item, q))
    }

    /// Matching items, sorted if a key is set and in input order otherwise.
    pub fn apply<'a>(&self, items: &'a [Item], now: DateTime<Utc>) -> Vec<&'a Item> {
        let mut found: Vec<&Item> = items.iter().filter(|i| self.matches(i, now)).collect();
        if let Some(key) = self.sort {
            sort_items(&mut found, key);
        }
        found
    }
}

fn matches_search(item: &Item, query: &str) -> bool {
    let query = query.to_lowercase();
    item.title.to_lowercase().contains(&query) || item.body.to_lowercase().contains(&query)
}

/// Stable sort by `key`.
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    match key {
        SortKey::NextDue => items.sort_by_key(|i| i.review.next_due_at),
        SortKey::Stage => items.sort_by(|a, b| b.review.stage.cmp(&a.review.stage)),
        SortKey::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

/// Time until an item is due, floored to the largest whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum DueLabel {
    Overdue,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl DueLabel {
    pub fn until(next_due_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = next_due_at - now;
        if remaining < chrono::Duration::zero() {
            return Self::Overdue;
        }
        let minutes = remaining.num_minutes();
        let hours = remaining.num_hours();
        if minutes < 60 {
            Self::Minutes(minutes)
        } else if hours < 24 {
            Self::Hours(hours)
        } else {
            Self::Days(hours / 24)
        }
    }

    pub fn is_urgent(self) -> bool {
        self == Self::Overdue
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => write!(f, "due now"),
            Self::Minutes(m) => write!(f, "{m}m"),
            Self::Hours(h) => write!(f, "{h}h"),
            Self::Days(d) => write!(f, "{d}d"),
        }
    }
}
