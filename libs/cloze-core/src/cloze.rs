//! Cloze word sets: the authored set of hidden words and the per-session set
//! of revealed ones.

use crate::tokenizer::{is_word_byte, is_word_char};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Words must be longer than this to be clozed.
pub const MIN_CLOZE_LEN: usize = 3;

/// Whether `word` may be hidden: longer than [`MIN_CLOZE_LEN`] and made only
/// of ASCII letters, digits and apostrophes.
pub fn is_clozeable(word: &str) -> bool {
    word.len() > MIN_CLOZE_LEN && word.bytes().all(is_word_byte)
}

/// Reduce clicked text to its word characters.
fn clean_word(clicked: &str) -> String {
    clicked.chars().filter(|c| is_word_char(*c)).collect()
}

/// Effect of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    Ignored,
}

/// Words chosen as hidden for an item.
///
/// Only ever holds words satisfying [`is_clozeable`]; anything else is
/// dropped on insert and on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ClozeSet(BTreeSet<String>);

impl ClozeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Insert a word. Returns false when the word is not clozeable or was
    /// already present.
    pub fn insert(&mut self, word: &str) -> bool {
        is_clozeable(word) && self.0.insert(word.to_string())
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.0.remove(word)
    }

    /// Flip membership of a clicked word while authoring.
    ///
    /// Non-word characters are stripped first; short or empty results are
    /// ignored.
    pub fn toggle(&mut self, clicked: &str) -> ToggleOutcome {
        let word = clean_word(clicked);
        if !is_clozeable(&word) {
            return ToggleOutcome::Ignored;
        }
        if self.0.remove(&word) {
            ToggleOutcome::Removed
        } else {
            self.0.insert(word);
            ToggleOutcome::Added
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ClozeSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<ClozeSet> for Vec<String> {
    fn from(set: ClozeSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl FromIterator<String> for ClozeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|w| is_clozeable(w)).collect())
    }
}

impl<'a> FromIterator<&'a str> for ClozeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Hidden words currently unmasked in a review session.
///
/// Scoped to one session and one current item; see
/// [`ReviewSession`](crate::session::ReviewSession) for the reset rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealState(BTreeSet<String>);

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Flip a clicked word between masked and revealed.
    ///
    /// Words that are not in `clozes` are ignored.
    pub fn toggle(&mut self, clicked: &str, clozes: &ClozeSet) -> ToggleOutcome {
        let word = clean_word(clicked);
        if !clozes.contains(&word) {
            return ToggleOutcome::Ignored;
        }
        if self.0.remove(&word) {
            ToggleOutcome::Removed
        } else {
            self.0.insert(word);
            ToggleOutcome::Added
        }
    }

    /// Reveal every hidden word at once.
    pub fn reveal_all(&mut self, clozes: &ClozeSet) {
        self.0.extend(clozes.iter().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
