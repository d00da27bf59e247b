//! Core cloze review library shared by the review front-ends.
//!
//! Provides:
//! - Word tokenizer shared by rendering and cloze selection
//! - Emphasis parser for the `**bold**` / `*italic*` / `~~strike~~` dialect
//! - Cloze-aware renderer producing a view-agnostic node tree
//! - Automatic cloze selection with an injectable random source
//! - Fixed interval ladder scheduler and review session flow
//! - Deck statistics, filters and due labels

pub mod cloze;
pub mod deck;
pub mod emphasis;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod selector;
pub mod session;
pub mod tokenizer;
pub mod types;

pub use cloze::{is_clozeable, ClozeSet, RevealState, ToggleOutcome};
pub use deck::{DeckStats, DueLabel, ItemQuery, SortKey, StageBand, StatusFilter};
pub use emphasis::{parse, Emphasis, Span, MARKER_PRECEDENCE};
pub use error::{Result, SchedulerError};
pub use render::{render, ClozeRenderer, RenderMode, RenderNode, WordAction, WordKind, WordNode};
pub use scheduler::{
    is_due, is_mastered, select_next_due, IntervalLadder, LadderScheduler,
    DEFAULT_INTERVALS_MINUTES, MASTERY_STAGE,
};
pub use selector::{generate_auto_cloze, AUTO_CLOZE_RATIO};
pub use session::{Answered, ReviewSession};
pub use tokenizer::{tokenize, Token};
pub use types::{Item, ItemId, Outcome, ReviewState};
