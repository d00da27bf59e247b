//! Error types for cloze-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised at the scheduler boundary.
///
/// Text handling (tokenizing, parsing, rendering, auto-cloze) is total and
/// never produces an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("stage {stage} is outside the interval ladder (length {len})")]
    StageOutOfRange { stage: usize, len: usize },

    #[error("interval ladder must have at least one step")]
    EmptyLadder,

    #[error("interval at index {index} must be positive")]
    NonPositiveInterval { index: usize },

    #[error("interval at index {index} is shorter than the one before it")]
    UnorderedLadder { index: usize },
}
