//! Core types for cloze review.

use crate::cloze::ClozeSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque item identifier.
pub type ItemId = Uuid;

/// Outcome of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

impl From<bool> for Outcome {
    fn from(correct: bool) -> Self {
        Self::from_correct(correct)
    }
}

/// Scheduling state of an item. Only the scheduler writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Index into the interval ladder.
    pub stage: usize,
    pub next_due_at: DateTime<Utc>,
    pub review_count: u32,
    pub error_count: u32,
}

/// A fact to learn: markdown body plus the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub cloze_words: ClozeSet,
    #[serde(flatten)]
    pub review: ReviewState,
}

impl Item {
    /// Create an item with a fresh id. The title is trimmed.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        cloze_words: ClozeSet,
        review: ReviewState,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into().trim().to_string(),
            body: body.into(),
            cloze_words,
            review,
        }
    }

    /// Replace the authoring fields. Scheduling state is left untouched.
    pub fn edit(&mut self, title: impl Into<String>, body: impl Into<String>, cloze_words: ClozeSet) {
        self.title = title.into().trim().to_string();
        self.body = body.into();
        self.cloze_words = cloze_words;
    }
}
