//! cloze-review - spaced repetition for facts with hidden words.

fn main() -> anyhow::Result<()> {
    cloze_review::run()
}
