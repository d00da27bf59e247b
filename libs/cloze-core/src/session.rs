//! Review session: which item is on screen and which of its clozes the
//! learner has uncovered.
//!
//! The reveal state belongs to the current item only. It is cleared every
//! time the current item changes, including after each answer.

use crate::cloze::{RevealState, ToggleOutcome};
use crate::error::Result;
use crate::render::{ClozeRenderer, RenderMode, RenderNode};
use crate::scheduler::{select_next_due, LadderScheduler};
use crate::types::{Item, ItemId, Outcome};
use chrono::{DateTime, Utc};

/// Result of answering the current item.
#[derive(Debug, Clone)]
pub struct Answered {
    /// The reviewed item with its new review state.
    pub item: Item,
    /// Item now on screen, if any was due.
    pub next: Option<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    current: Option<ItemId>,
    revealed: RevealState,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ItemId> {
        self.current
    }

    pub fn revealed(&self) -> &RevealState {
        &self.revealed
    }

    /// Switch the current item, discarding reveals if it changed.
    pub fn set_current(&mut self, id: Option<ItemId>) {
        if id != self.current {
            self.revealed.clear();
            tracing::debug!(from = ?self.current, to = ?id, "current item changed");
        }
        self.current = id;
    }

    /// Put the first due item on screen.
    pub fn start(&mut self, items: &[Item], now: DateTime<Utc>) -> Option<ItemId> {
        let next = select_next_due(items, None, now).map(|item| item.id);
        self.set_current(next);
        next
    }

    pub fn current_item<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        let id = self.current?;
        items.iter().find(|item| item.id == id)
    }

    /// Reveal or re-mask a word of the current item.
    pub fn toggle_reveal(&mut self, items: &[Item], word: &str) -> ToggleOutcome {
        match self.current_item(items) {
            Some(item) => self.revealed.toggle(word, &item.cloze_words),
            None => ToggleOutcome::Ignored,
        }
    }

    /// Reveal every cloze of the current item.
    pub fn reveal_all(&mut self, items: &[Item]) {
        if let Some(item) = self.current_item(items) {
            self.revealed.reveal_all(&item.cloze_words);
        }
    }

    /// Render `item` for review against this session's reveal state.
    pub fn render(&self, item: &Item) -> Vec<RenderNode> {
        ClozeRenderer::new(&item.cloze_words, &self.revealed, RenderMode::Review).render(&item.body)
    }

    /// Record the learner's answer for the current item and move on.
    ///
    /// Returns `Ok(None)` when nothing is on screen. The next item is the
    /// first due one in `items` order other than the one just answered.
    ///
    /// # Errors
    /// Propagates scheduler errors for items with an invalid stage.
    pub fn answer(
        &mut self,
        items: &mut [Item],
        outcome: Outcome,
        scheduler: &LadderScheduler,
        now: DateTime<Utc>,
    ) -> Result<Option<Answered>> {
        let Some(id) = self.current else {
            return Ok(None);
        };
        let Some(slot) = items.iter_mut().find(|item| item.id == id) else {
            self.set_current(None);
            return Ok(None);
        };

        let updated = scheduler.mark_reviewed(slot, outcome, now)?;
        *slot = updated.clone();

        let next = select_next_due(items.iter(), Some(id), now).map(|item| item.id);
        self.revealed.clear();
        self.set_current(next);

        Ok(Some(Answered {
            item: updated,
            next,
        }))
    }
}
