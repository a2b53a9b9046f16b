//! Errors raised by the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Errors from the guesser and the elimination loop
#[derive(Debug, Error)]
pub enum SolverError {
    /// A guess was requested but no candidate is consistent with the feedback
    /// so far. Deterministic, so retrying cannot help.
    #[error("no possible answer is consistent with the feedback given")]
    EmptyCandidateSet,

    /// A word supplied from outside (opening guess, debug target) is malformed
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// The feedback source failed to produce a reply
    #[error("failed to read feedback: {0}")]
    Io(#[from] std::io::Error),
}
