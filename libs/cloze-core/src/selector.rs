//! Automatic cloze selection.
//!
//! Picks a random share of the distinct clozeable words in a text. The
//! random source is supplied by the caller; seed it for reproducible picks.

use crate::cloze::{is_clozeable, ClozeSet};
use crate::emphasis::{self, Span};
use crate::tokenizer::words;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Share of distinct clozeable words hidden by [`generate_auto_cloze`].
pub const AUTO_CLOZE_RATIO: f64 = 0.3;

/// Distinct clozeable words of `text` in order of first occurrence.
///
/// Emphasis markers are consumed by the parser, then each plain leaf is
/// tokenized exactly as the renderer tokenizes it, so every candidate is a
/// word the renderer can mask.
pub fn clozeable_words(text: &str) -> Vec<String> {
    let mut leaves = Vec::new();
    let spans = emphasis::parse(text);
    collect_plain(&spans, &mut leaves);

    let mut seen = HashSet::new();
    leaves
        .into_iter()
        .flat_map(|leaf| words(leaf))
        .filter(|word| is_clozeable(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

fn collect_plain<'a>(spans: &'a [Span], out: &mut Vec<&'a str>) {
    for span in spans {
        match span {
            Span::Plain(text) => out.push(text),
            styled => collect_plain(styled.children(), out),
        }
    }
}

/// Number of words hidden out of `distinct` candidates.
pub fn auto_cloze_count(distinct: usize) -> usize {
    (distinct as f64 * AUTO_CLOZE_RATIO).ceil() as usize
}

/// Hide a uniformly random `ceil(0.3 × n)` of the `n` distinct clozeable
/// words in `text`.
pub fn generate_auto_cloze<R: Rng + ?Sized>(text: &str, rng: &mut R) -> ClozeSet {
    let mut candidates = clozeable_words(text);
    let count = auto_cloze_count(candidates.len());
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates.into_iter().collect()
}
