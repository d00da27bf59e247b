//! Interactive review loop.
//!
//! Commands, one per line:
//! - `r <word>` reveal or re-mask a hidden word
//! - `a` reveal every hidden word
//! - `y` / `n` answer correct / incorrect and move to the next due item
//! - `q` quit

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{DateTime, Utc};
use cloze_core::{DueLabel, LadderScheduler, Outcome, ReviewSession, ToggleOutcome};

use crate::display::{stage_label, to_terminal};
use crate::store::ItemStore;

const HELP: &str = "commands: r <word> reveal, a reveal all, y correct, n incorrect, q quit";

/// Tally of one review run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub correct: usize,
    pub incorrect: usize,
}

impl ReviewSummary {
    pub fn reviewed(&self) -> usize {
        self.correct + self.incorrect
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Reveal(String),
    RevealAll,
    Answer(Outcome),
    Quit,
    Help,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some(("r", word)) => Self::Reveal(word.trim().to_string()),
            _ => match line {
                "a" => Self::RevealAll,
                "y" => Self::Answer(Outcome::Correct),
                "n" => Self::Answer(Outcome::Incorrect),
                "q" => Self::Quit,
                _ => Self::Help,
            },
        }
    }
}

/// Review due items until the queue empties, input ends or the learner quits.
///
/// `clock` is read for every scheduling decision. The store is saved after
/// every answer.
pub fn run<R, W, C>(
    store: &mut ItemStore,
    scheduler: &LadderScheduler,
    input: R,
    out: &mut W,
    clock: C,
) -> Result<ReviewSummary>
where
    R: BufRead,
    W: Write,
    C: Fn() -> DateTime<Utc>,
{
    let mut summary = ReviewSummary::default();
    let mut session = ReviewSession::new();

    if session.start(store.items(), clock()).is_none() {
        writeln!(out, "Nothing due.")?;
        return Ok(summary);
    }

    print_current(&session, store, scheduler, out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Reveal(word) => {
                if session.toggle_reveal(store.items(), &word) == ToggleOutcome::Ignored {
                    writeln!(out, "{word} is not hidden here")?;
                }
                print_current(&session, store, scheduler, out)?;
            }
            Command::RevealAll => {
                session.reveal_all(store.items());
                print_current(&session, store, scheduler, out)?;
            }
            Command::Answer(outcome) => {
                let now = clock();
                let Some(answered) = session.answer(store.items_mut(), outcome, scheduler, now)?
                else {
                    break;
                };
                store.save()?;

                if outcome.is_correct() {
                    summary.correct += 1;
                } else {
                    summary.incorrect += 1;
                }
                tracing::info!(
                    id = %answered.item.id,
                    stage = answered.item.review.stage,
                    ?outcome,
                    "answered"
                );
                writeln!(
                    out,
                    "{} next review in {}",
                    if outcome.is_correct() { "Correct," } else { "Missed," },
                    DueLabel::until(answered.item.review.next_due_at, now)
                )?;

                if answered.next.is_none() {
                    writeln!(out, "All caught up.")?;
                    break;
                }
                print_current(&session, store, scheduler, out)?;
            }
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
        }
    }

    Ok(summary)
}

fn print_current<W: Write>(
    session: &ReviewSession,
    store: &ItemStore,
    scheduler: &LadderScheduler,
    out: &mut W,
) -> Result<()> {
    let Some(item) = session.current_item(store.items()) else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out, "{}  ({})", item.title, stage_label(item, scheduler))?;
    writeln!(out, "{}", to_terminal(&session.render(item)))?;
    Ok(())
}
