//! Word tokenizer shared by the cloze renderer and the auto-cloze selector.
//!
//! A word is a maximal run of ASCII letters, digits or apostrophes that both
//! starts and ends on a word boundary. Boundaries are judged against the
//! classic `[A-Za-z0-9_]` word class, so an apostrophe never opens or closes a
//! word on its own and an underscore glues neighbours into a non-word.
//! Everything between words is a separator. Non-ASCII text is always
//! separator text.

/// One segment of tokenized text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Separator(&'a str),
    Word(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Separator(text) | Self::Word(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

/// Lazily split `text` into alternating separator and word tokens.
///
/// Empty separators are skipped, so two words are never adjacent and the
/// concatenation of all tokens reproduces `text` exactly. The iterator is
/// `Clone`, which makes it restartable from any point.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        pos: 0,
        pending: None,
    }
}

/// Iterate only the words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> + Clone + '_ {
    tokenize(text).filter_map(|token| match token {
        Token::Word(word) => Some(word),
        Token::Separator(_) => None,
    })
}

/// Whether a single byte may appear inside a word.
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'\''
}

/// Whether a char may appear inside a word.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    pending: Option<(usize, usize)>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((start, end)) = self.pending.take() {
            self.pos = end;
            return Some(Token::Word(&self.text[start..end]));
        }

        if self.pos >= self.text.len() {
            return None;
        }

        match find_word(self.text.as_bytes(), self.pos) {
            Some((start, end)) if start == self.pos => {
                self.pos = end;
                Some(Token::Word(&self.text[start..end]))
            }
            Some((start, end)) => {
                let separator = &self.text[self.pos..start];
                self.pending = Some((start, end));
                self.pos = start;
                Some(Token::Separator(separator))
            }
            None => {
                let separator = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Token::Separator(separator))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

fn is_boundary_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn at_boundary(bytes: &[u8], idx: usize) -> bool {
    let before = idx > 0 && is_boundary_byte(bytes[idx - 1]);
    let after = idx < bytes.len() && is_boundary_byte(bytes[idx]);
    before != after
}

/// Find the first word starting at or after `from`, as a byte range.
///
/// Word bytes are all ASCII, so both ends always fall on char boundaries.
fn find_word(bytes: &[u8], from: usize) -> Option<(usize, usize)> {
    for start in from..bytes.len() {
        if !is_word_byte(bytes[start]) || !at_boundary(bytes, start) {
            continue;
        }

        let run_end = start
            + bytes[start..]
                .iter()
                .take_while(|byte| is_word_byte(**byte))
                .count();

        // Longest run first, shrinking until the end sits on a boundary.
        if let Some(end) = (start + 1..=run_end)
            .rev()
            .find(|&end| at_boundary(bytes, end))
        {
            return Some((start, end));
        }
    }
    None
}
