//! Cloze-aware rendering of the span tree.
//!
//! Produces a view-agnostic node tree: styled spans keep their shape, plain
//! text is split into separator text and classified word nodes. Presentation
//! (opacity, cursors, colours) is left to whichever view consumes the tree.

use crate::cloze::{is_clozeable, ClozeSet, RevealState};
use crate::emphasis::{self, Emphasis, Span};
use crate::tokenizer::{tokenize, Token};
use serde::{Deserialize, Serialize};

/// Interaction contract of a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Editing an item: clozeable words toggle membership in the cloze set.
    Author,
    /// Reviewing a due item: hidden words toggle between masked and revealed.
    Review,
    /// Display only: nothing is interactive.
    #[default]
    ReadOnly,
}

/// Visibility class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    Plain,
    Hidden,
    Revealed,
}

/// What activating a word does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordAction {
    /// Add to or remove from the item's cloze set.
    ToggleCloze,
    /// Add to or remove from the session's reveal state.
    ToggleReveal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNode {
    /// Literal word, present even when masked.
    pub text: String,
    pub kind: WordKind,
    pub masked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WordAction>,
}

impl WordNode {
    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    /// Separator text: punctuation, whitespace, non-ASCII runs, stray markers.
    Text { text: String },
    Word(WordNode),
    Styled {
        emphasis: Emphasis,
        children: Vec<RenderNode>,
    },
}

/// Renders text against one cloze set, one reveal state and one mode.
#[derive(Debug, Clone, Copy)]
pub struct ClozeRenderer<'a> {
    clozes: &'a ClozeSet,
    revealed: &'a RevealState,
    mode: RenderMode,
}

impl<'a> ClozeRenderer<'a> {
    pub fn new(clozes: &'a ClozeSet, revealed: &'a RevealState, mode: RenderMode) -> Self {
        Self {
            clozes,
            revealed,
            mode,
        }
    }

    /// Parse and render markdown-dialect text.
    pub fn render(&self, text: &str) -> Vec<RenderNode> {
        self.render_spans(&emphasis::parse(text))
    }

    /// Render an already parsed span tree.
    pub fn render_spans(&self, spans: &[Span]) -> Vec<RenderNode> {
        let mut nodes = Vec::new();
        for span in spans {
            let (emphasis, children) = match span {
                Span::Plain(text) => {
                    self.render_plain(text, &mut nodes);
                    continue;
                }
                Span::Bold(children) => (Emphasis::Bold, children),
                Span::Italic(children) => (Emphasis::Italic, children),
                Span::Strike(children) => (Emphasis::Strike, children),
            };
            nodes.push(RenderNode::Styled {
                emphasis,
                children: self.render_spans(children),
            });
        }
        nodes
    }

    /// Classify a single word token.
    pub fn classify(&self, word: &str) -> WordNode {
        let hidden = self.clozes.contains(word);
        let revealed = hidden && self.revealed.contains(word);
        let kind = match (hidden, revealed) {
            (false, _) => WordKind::Plain,
            (true, false) => WordKind::Hidden,
            (true, true) => WordKind::Revealed,
        };

        let action = match self.mode {
            RenderMode::Author if is_clozeable(word) => Some(WordAction::ToggleCloze),
            RenderMode::Review if hidden => Some(WordAction::ToggleReveal),
            _ => None,
        };

        WordNode {
            text: word.to_string(),
            kind,
            masked: kind == WordKind::Hidden,
            action,
        }
    }

    fn render_plain(&self, text: &str, nodes: &mut Vec<RenderNode>) {
        for token in tokenize(text) {
            nodes.push(match token {
                Token::Separator(sep) => RenderNode::Text {
                    text: sep.to_string(),
                },
                Token::Word(word) => RenderNode::Word(self.classify(word)),
            });
        }
    }
}

/// Render `text` in one call.
pub fn render(
    text: &str,
    clozes: &ClozeSet,
    revealed: &RevealState,
    mode: RenderMode,
) -> Vec<RenderNode> {
    ClozeRenderer::new(clozes, revealed, mode).render(text)
}

/// Depth-first list of every word node in a rendered tree.
pub fn word_nodes(nodes: &[RenderNode]) -> Vec<&WordNode> {
    let mut words = Vec::new();
    collect_words(nodes, &mut words);
    words
}

fn collect_words<'n>(nodes: &'n [RenderNode], out: &mut Vec<&'n WordNode>) {
    for node in nodes {
        match node {
            RenderNode::Text { .. } => {}
            RenderNode::Word(word) => out.push(word),
            RenderNode::Styled { children, .. } => collect_words(children, out),
        }
    }
}

/// Number of masked words in a rendered tree.
pub fn masked_count(nodes: &[RenderNode]) -> usize {
    word_nodes(nodes).iter().filter(|w| w.masked).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::words;
    use pretty_assertions::assert_eq;

    const COURAGE: &str = "**Courage** is not the absence of *fear*";

    fn clozes(words: &[&str]) -> ClozeSet {
        words.iter().copied().collect()
    }

    fn text(t: &str) -> RenderNode {
        RenderNode::Text {
            text: t.to_string(),
        }
    }

    fn word(t: &str, kind: WordKind, action: Option<WordAction>) -> RenderNode {
        RenderNode::Word(WordNode {
            text: t.to_string(),
            kind,
            masked: kind == WordKind::Hidden,
            action,
        })
    }

    #[test]
    fn empty_text_renders_nothing() {
        let nodes = render("", &ClozeSet::new(), &RevealState::new(), RenderMode::Review);
        assert!(nodes.is_empty());
    }

    #[test]
    fn courage_scenario_masks_clozes_inside_styles() {
        let set = clozes(&["Courage", "fear"]);
        let nodes = render(COURAGE, &set, &RevealState::new(), RenderMode::Review);

        let reveal = Some(WordAction::ToggleReveal);
        assert_eq!(
            nodes,
            vec![
                RenderNode::Styled {
                    emphasis: Emphasis::Bold,
                    children: vec![word("Courage", WordKind::Hidden, reveal)],
                },
                text(" "),
                word("is", WordKind::Plain, None),
                text(" "),
                word("not", WordKind::Plain, None),
                text(" "),
                word("the", WordKind::Plain, None),
                text(" "),
                word("absence", WordKind::Plain, None),
                text(" "),
                word("of", WordKind::Plain, None),
                text(" "),
                RenderNode::Styled {
                    emphasis: Emphasis::Italic,
                    children: vec![word("fear", WordKind::Hidden, reveal)],
                },
            ]
        );
    }

    #[test]
    fn revealed_word_is_not_masked() {
        let set = clozes(&["Courage", "fear"]);
        let mut revealed = RevealState::new();
        revealed.toggle("fear", &set);

        let nodes = render(COURAGE, &set, &revealed, RenderMode::Review);
        let fear = word_nodes(&nodes)
            .into_iter()
            .find(|w| w.text == "fear")
            .unwrap();
        assert_eq!(fear.kind, WordKind::Revealed);
        assert!(!fear.masked);
        assert_eq!(fear.action, Some(WordAction::ToggleReveal));
        assert_eq!(masked_count(&nodes), 1);
    }

    #[test]
    fn plain_text_round_trips_words() {
        let input = "The quick brown fox, jumps over the lazy dog.";
        let nodes = render(input, &ClozeSet::new(), &RevealState::new(), RenderMode::ReadOnly);

        let rendered: Vec<_> = word_nodes(&nodes).iter().map(|w| w.text.as_str()).collect();
        let original: Vec<_> = words(input).collect();
        assert_eq!(rendered, original);
        assert_eq!(masked_count(&nodes), 0);
    }

    #[test]
    fn rendering_is_idempotent() {
        let set = clozes(&["Courage", "fear"]);
        let revealed = RevealState::new();
        let first = render(COURAGE, &set, &revealed, RenderMode::Review);
        let second = render(COURAGE, &set, &revealed, RenderMode::Review);
        assert_eq!(first, second);
    }

    #[test]
    fn author_mode_toggles_clozeable_words_only() {
        let set = clozes(&["fear"]);
        let revealed = RevealState::default();
        let renderer = ClozeRenderer::new(&set, &revealed, RenderMode::Author);

        assert_eq!(renderer.classify("absence").action, Some(WordAction::ToggleCloze));
        assert_eq!(renderer.classify("fear").action, Some(WordAction::ToggleCloze));
        assert_eq!(renderer.classify("not").action, None);
    }

    #[test]
    fn author_mode_still_masks_hidden_words() {
        let set = clozes(&["fear"]);
        let revealed = RevealState::default();
        let renderer = ClozeRenderer::new(&set, &revealed, RenderMode::Author);
        assert!(renderer.classify("fear").masked);
    }

    #[test]
    fn review_mode_leaves_plain_words_inert() {
        let set = clozes(&["fear"]);
        let revealed = RevealState::default();
        let renderer = ClozeRenderer::new(&set, &revealed, RenderMode::Review);
        assert!(!renderer.classify("absence").is_interactive());
        assert!(renderer.classify("fear").is_interactive());
    }

    #[test]
    fn read_only_mode_is_never_interactive() {
        let set = clozes(&["Courage", "fear"]);
        let nodes = render(COURAGE, &set, &RevealState::new(), RenderMode::ReadOnly);
        assert!(word_nodes(&nodes).iter().all(|w| !w.is_interactive()));
        assert_eq!(masked_count(&nodes), 2);
    }

    #[test]
    fn cloze_matching_is_case_sensitive() {
        let set = clozes(&["Courage"]);
        let nodes = render("courage Courage", &set, &RevealState::new(), RenderMode::Review);
        let kinds: Vec<_> = word_nodes(&nodes).iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WordKind::Plain, WordKind::Hidden]);
    }

    #[test]
    fn malformed_markers_render_as_text() {
        let nodes = render("a ** b", &ClozeSet::new(), &RevealState::new(), RenderMode::ReadOnly);
        assert_eq!(
            nodes,
            vec![
                word("a", WordKind::Plain, None),
                text(" ** "),
                word("b", WordKind::Plain, None),
            ]
        );
    }

    #[test]
    fn serializes_with_type_tags() {
        let set = clozes(&["fear"]);
        let nodes = render("*fear*", &set, &RevealState::new(), RenderMode::ReadOnly);
        let json = serde_json::to_value(&nodes).unwrap();
        assert_eq!(json[0]["type"], "styled");
        assert_eq!(json[0]["emphasis"], "italic");
        assert_eq!(json[0]["children"][0]["type"], "word");
        assert_eq!(json[0]["children"][0]["masked"], true);
    }
}
