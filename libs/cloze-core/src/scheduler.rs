//! Fixed-ladder spaced repetition.
//!
//! Each item sits on a stage of the interval ladder. A correct review climbs
//! one stage, an incorrect one drops one, both saturating at the ends. The
//! next review is due the stage's interval after the review time.

use crate::error::{Result, SchedulerError};
use crate::types::{Item, ItemId, Outcome, ReviewState};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Canonical ladder, in minutes: 1m, 5m, 30m, 12h, 1d, 3d, 7d, 17.5d.
pub const DEFAULT_INTERVALS_MINUTES: [u32; 8] = [1, 5, 30, 720, 1440, 4320, 10080, 25200];

/// Items at or above this stage count as mastered, whatever the ladder length.
pub const MASTERY_STAGE: usize = 5;

/// Ordered review intervals in minutes. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct IntervalLadder {
    minutes: Vec<u32>,
}

impl Default for IntervalLadder {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_INTERVALS_MINUTES.to_vec(),
        }
    }
}

impl IntervalLadder {
    /// Build a ladder from positive, non-decreasing intervals.
    pub fn new(minutes: Vec<u32>) -> Result<Self> {
        if minutes.is_empty() {
            return Err(SchedulerError::EmptyLadder);
        }
        if let Some(index) = minutes.iter().position(|m| *m == 0) {
            return Err(SchedulerError::NonPositiveInterval { index });
        }
        if let Some(index) = (1..minutes.len()).find(|&i| minutes[i] < minutes[i - 1]) {
            return Err(SchedulerError::UnorderedLadder { index });
        }
        Ok(Self { minutes })
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        self.minutes.len()
    }

    /// Highest stage.
    pub fn last_stage(&self) -> usize {
        self.minutes.len() - 1
    }

    pub fn minutes(&self) -> &[u32] {
        &self.minutes
    }

    /// Wait before the next review at `stage`.
    pub fn interval(&self, stage: usize) -> Option<Duration> {
        self.minutes
            .get(stage)
            .map(|m| Duration::minutes(i64::from(*m)))
    }

    fn check_stage(&self, stage: usize) -> Result<()> {
        if stage < self.minutes.len() {
            Ok(())
        } else {
            Err(SchedulerError::StageOutOfRange {
                stage,
                len: self.minutes.len(),
            })
        }
    }
}

impl TryFrom<Vec<u32>> for IntervalLadder {
    type Error = SchedulerError;

    fn try_from(minutes: Vec<u32>) -> Result<Self> {
        Self::new(minutes)
    }
}

impl From<IntervalLadder> for Vec<u32> {
    fn from(ladder: IntervalLadder) -> Self {
        ladder.minutes
    }
}

/// Scheduler over one interval ladder.
#[derive(Debug, Clone, Default)]
pub struct LadderScheduler {
    ladder: IntervalLadder,
}

impl LadderScheduler {
    pub fn new(ladder: IntervalLadder) -> Self {
        Self { ladder }
    }

    pub fn ladder(&self) -> &IntervalLadder {
        &self.ladder
    }

    /// State of a newly learned item: stage 0, due after the first interval.
    pub fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            stage: 0,
            next_due_at: now + self.stage_interval(0),
            review_count: 0,
            error_count: 0,
        }
    }

    /// Calculate the next state after a review.
    ///
    /// # Errors
    /// `StageOutOfRange` if `state.stage` does not index the ladder.
    pub fn schedule(
        &self,
        state: &ReviewState,
        outcome: Outcome,
        now: DateTime<Utc>,
    ) -> Result<ReviewState> {
        self.ladder.check_stage(state.stage)?;

        let (stage, error_count) = match outcome {
            Outcome::Correct => (
                (state.stage + 1).min(self.ladder.last_stage()),
                state.error_count,
            ),
            Outcome::Incorrect => (
                state.stage.saturating_sub(1),
                state.error_count.saturating_add(1),
            ),
        };
        let next_due = now + self.stage_interval(stage);

        tracing::debug!(
            from = state.stage,
            to = stage,
            ?outcome,
            %next_due,
            "scheduled review"
        );

        Ok(ReviewState {
            stage,
            next_due_at: next_due,
            review_count: state.review_count.saturating_add(1),
            error_count,
        })
    }

    /// Return `item` with its review state advanced by `outcome`.
    ///
    /// # Errors
    /// `StageOutOfRange` if the item's stage does not index the ladder.
    pub fn mark_reviewed(&self, item: &Item, outcome: Outcome, now: DateTime<Utc>) -> Result<Item> {
        let review = self.schedule(&item.review, outcome, now)?;
        Ok(Item {
            review,
            ..item.clone()
        })
    }

    /// Fraction of the ladder climbed, from 0.0 at stage 0 to 1.0 at the top.
    pub fn progress(&self, state: &ReviewState) -> f64 {
        let last = self.ladder.last_stage();
        if last == 0 {
            return 1.0;
        }
        (state.stage as f64 / last as f64).clamp(0.0, 1.0)
    }

    fn stage_interval(&self, stage: usize) -> Duration {
        // Callers validate `stage` first; the ladder is never empty.
        self.ladder.interval(stage).unwrap_or_else(Duration::zero)
    }
}

/// Whether the item's next review time has passed.
pub fn is_due(item: &Item, now: DateTime<Utc>) -> bool {
    item.review.next_due_at <= now
}

/// Whether the item has reached [`MASTERY_STAGE`].
pub fn is_mastered(item: &Item) -> bool {
    item.review.stage >= MASTERY_STAGE
}

/// First due item in caller order, skipping `exclude`.
pub fn select_next_due<'a, I>(items: I, exclude: Option<ItemId>, now: DateTime<Utc>) -> Option<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .find(|item| Some(item.id) != exclude && is_due(item, now))
}
