//! Non-interactive subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use cloze_core::{
    generate_auto_cloze, ClozeRenderer, ClozeSet, DeckStats, Item, ItemId, ItemQuery,
    LadderScheduler, RenderMode, RevealState, ToggleOutcome,
};
use rand::Rng;

use crate::display::{list_line, stage_label, to_terminal};
use crate::store::{check_fields, ItemStore};

/// Fields for a new item.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub title: String,
    pub body: String,
    pub clozes: Vec<String>,
    pub auto: bool,
}

/// Create an item, persist it and print its id.
pub fn add<R: Rng + ?Sized, W: Write>(
    store: &mut ItemStore,
    scheduler: &LadderScheduler,
    new: NewItem,
    rng: &mut R,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<ItemId> {
    let mut clozes: ClozeSet = new.clozes.iter().map(String::as_str).collect();
    if new.auto {
        for word in generate_auto_cloze(&new.body, rng).iter() {
            clozes.insert(word);
        }
    }

    let item = Item::new(new.title, new.body, clozes, scheduler.initial_state(now));
    let id = item.id;
    store.insert(item).context("failed to add item")?;
    store.save()?;

    tracing::info!(%id, "added item");
    writeln!(out, "{id}")?;
    Ok(id)
}

/// Print one line per item matching `query`.
pub fn list<W: Write>(
    store: &ItemStore,
    scheduler: &LadderScheduler,
    query: &ItemQuery,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<usize> {
    let items = query.apply(store.items(), now);
    for item in &items {
        writeln!(out, "{}", list_line(item, scheduler, now))?;
    }
    Ok(items.len())
}

/// Print an item read-only, with its clozes masked.
pub fn show<W: Write>(
    store: &ItemStore,
    scheduler: &LadderScheduler,
    id: ItemId,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    let item = store.get(id)?;
    let revealed = RevealState::new();
    let nodes = ClozeRenderer::new(&item.cloze_words, &revealed, RenderMode::ReadOnly).render(&item.body);

    writeln!(out, "{}", item.title)?;
    writeln!(out, "{}", to_terminal(&nodes))?;
    writeln!(out, "{}", list_line(item, scheduler, now))?;
    Ok(())
}

/// Changes to an item's authoring fields.
#[derive(Debug, Clone, Default)]
pub struct ItemEdit {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Words clicked in author mode, applied in order.
    pub toggles: Vec<String>,
}

/// Apply an edit, persist it and print the author preview.
pub fn edit<W: Write>(
    store: &mut ItemStore,
    scheduler: &LadderScheduler,
    id: ItemId,
    changes: ItemEdit,
    out: &mut W,
) -> Result<()> {
    let item = store.get_mut(id)?;
    let title = changes.title.unwrap_or_else(|| item.title.clone());
    let body = changes.body.unwrap_or_else(|| item.body.clone());
    check_fields(&title, &body)?;

    let mut clozes = item.cloze_words.clone();

    for word in &changes.toggles {
        match clozes.toggle(word) {
            ToggleOutcome::Added => writeln!(out, "+ {word}")?,
            ToggleOutcome::Removed => writeln!(out, "- {word}")?,
            ToggleOutcome::Ignored => writeln!(out, "  {word} (too short to hide)")?,
        }
    }

    item.edit(title, body, clozes);

    // Author preview shows every cloze bracketed instead of blanked.
    let mut revealed = RevealState::new();
    revealed.reveal_all(&item.cloze_words);
    let nodes = ClozeRenderer::new(&item.cloze_words, &revealed, RenderMode::Author).render(&item.body);
    writeln!(out, "{}", to_terminal(&nodes))?;
    writeln!(out, "{}", stage_label(item, scheduler))?;

    store.save()?;
    tracing::info!(%id, "edited item");
    Ok(())
}

/// Delete an item.
pub fn delete<W: Write>(store: &mut ItemStore, id: ItemId, out: &mut W) -> Result<()> {
    let item = store.remove(id)?;
    store.save()?;
    tracing::info!(%id, "deleted item");
    writeln!(out, "deleted {}", item.title)?;
    Ok(())
}

/// Print deck statistics.
pub fn stats<W: Write>(store: &ItemStore, now: DateTime<Utc>, out: &mut W) -> Result<DeckStats> {
    let stats = DeckStats::collect(store.items(), now);
    writeln!(out, "total     {}", stats.total)?;
    writeln!(out, "due       {}", stats.due)?;
    writeln!(out, "mastered  {}", stats.mastered)?;
    Ok(stats)
}
