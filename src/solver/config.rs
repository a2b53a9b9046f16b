//! Solver configuration

use crate::core::Word;

/// Opening guess used when none is configured explicitly
pub const DEFAULT_OPENING: &str = "trace";

/// Settings for one solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guess played while the candidate set is still the full answer
    /// universe. Its score never changes between sessions, so it is not
    /// recomputed. `None` scores the first turn like any other.
    pub opening_guess: Option<Word>,
    /// Stop an automated session after this many turns. Rejected guesses
    /// count as turns.
    pub max_turns: Option<usize>,
    /// Start from every allowed guess as a possible answer instead of only
    /// the answer list. Slower, but finds targets outside the answer list.
    pub all_words: bool,
}

impl SolverConfig {
    /// Configuration without a precomputed opening guess
    #[must_use]
    pub const fn without_opening() -> Self {
        Self {
            opening_guess: None,
            max_turns: None,
            all_words: false,
        }
    }

    /// Replace the opening guess
    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening_guess = opening;
        self
    }

    /// Bound the number of turns
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Draw the initial candidates from the guess pool
    #[must_use]
    pub const fn with_all_words(mut self, all_words: bool) -> Self {
        self.all_words = all_words;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening_guess: Word::new(DEFAULT_OPENING).ok(),
            max_turns: None,
            all_words: false,
        }
    }
}
