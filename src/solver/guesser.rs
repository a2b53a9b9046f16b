//! Candidate engine
//!
//! Owns the set of words that can still be the answer, narrows it with each
//! piece of feedback and proposes the next guess.

use super::error::SolverError;
use super::partition::select_best_guess;
use super::pool::GuessPool;
use super::progress::ScanObserver;
use crate::core::{Feedback, Word, compare};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Tracks the possible answers for one solving session
#[derive(Debug, Clone)]
pub struct Guesser {
    candidates: Vec<Word>,
    initial_len: usize,
    opening: Option<Word>,
}

impl Guesser {
    /// Start a session with every word of `initial` as a possible answer
    ///
    /// Repeated words are collapsed; the first occurrence keeps its place.
    #[must_use]
    pub fn new(initial: Vec<Word>) -> Self {
        let mut seen = FxHashSet::default();
        let candidates: Vec<Word> = initial
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self {
            initial_len: candidates.len(),
            candidates,
            opening: None,
        }
    }

    /// Play `opening` instead of scoring while the candidates are untouched
    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }

    /// Number of words that can still be the answer
    ///
    /// More than one: keep guessing. One: solved. Zero: the feedback
    /// contradicts every word in the universe.
    #[inline]
    #[must_use]
    pub fn chances(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The answer, once exactly one candidate is left
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Whether no feedback has narrowed the candidates yet
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.candidates.len() == self.initial_len
    }

    /// Best next guess from `pool`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidateSet` if no candidate is left.
    pub fn best_guess(&self, pool: &GuessPool) -> Result<Word, SolverError> {
        self.best_guess_observed(pool, &())
    }

    /// Best next guess from `pool`, reporting scan progress to `observer`
    ///
    /// 1. While the candidates are untouched, the configured opening guess
    ///    is returned without scoring, provided the game has not rejected it.
    /// 2. A single candidate is returned as is.
    /// 3. Otherwise every pool word is scored by the number of feedback
    ///    classes it splits the candidates into; the last word with the top
    ///    score wins. An empty pool falls back to the first candidate.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidateSet` if no candidate is left.
    pub fn best_guess_observed<O>(
        &self,
        pool: &GuessPool,
        observer: &O,
    ) -> Result<Word, SolverError>
    where
        O: ScanObserver + ?Sized,
    {
        let Some(first) = self.candidates.first() else {
            return Err(SolverError::EmptyCandidateSet);
        };

        if self.is_untouched()
            && let Some(opening) = &self.opening
        {
            if pool.contains(opening) {
                return Ok(opening.clone());
            }
            warn!("opening {opening} not in the guess pool, scoring instead");
        }

        if let Some(answer) = self.answer() {
            return Ok(answer.clone());
        }

        match select_best_guess(pool.words(), &self.candidates, observer) {
            Some(best) => {
                debug!(
                    "best guess {} splits {} candidates into {} classes ({} guesses scored)",
                    best.word,
                    self.candidates.len(),
                    best.score,
                    pool.len()
                );
                Ok(best.word.clone())
            }
            None => Ok(first.clone()),
        }
    }

    /// Drop `word` from the candidates
    ///
    /// Returns whether it was a candidate.
    pub fn discard(&mut self, word: &Word) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|candidate| candidate != word);
        self.candidates.len() < before
    }

    /// Keep only candidates that would have produced `feedback` for `guess`
    ///
    /// Each candidate is checked as if it were the hidden target. Applying
    /// the same guess and feedback twice removes nothing the second time.
    pub fn filter(&mut self, guess: &Word, feedback: Feedback) {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| compare(candidate, guess) == feedback);
        debug!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );
    }
}
