//! Elimination loop
//!
//! A session alternates between proposing a guess and narrowing the
//! candidates with the feedback the game gave for it, until one candidate is
//! left (solved) or none is (exhausted).

use super::config::SolverConfig;
use super::error::SolverError;
use super::guesser::Guesser;
use super::pool::GuessPool;
use super::progress::ScanObserver;
use crate::core::{Feedback, Word, compare, sanitize};
use log::{info, warn};
use std::io;

/// What the game said about a proposed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Raw feedback text, sanitized before use
    Feedback(String),
    /// The game does not accept the word
    Rejected,
}

impl Reply {
    /// Interpret a line typed by a human: an empty line means the game
    /// refused the word
    #[must_use]
    pub fn from_input(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Rejected
        } else {
            Self::Feedback(line.to_string())
        }
    }
}

/// Anything that can tell the session how a guess scored
pub trait FeedbackSource {
    /// Produce the reply for `guess`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reply cannot be obtained.
    fn reply(&mut self, guess: &Word) -> io::Result<Reply>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&Word) -> io::Result<Reply>,
{
    fn reply(&mut self, guess: &Word) -> io::Result<Reply> {
        self(guess)
    }
}

/// Debug feedback source that knows the answer
#[derive(Debug, Clone)]
pub struct Oracle {
    target: Word,
}

impl Oracle {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackSource for Oracle {
    fn reply(&mut self, guess: &Word) -> io::Result<Reply> {
        Ok(Reply::Feedback(compare(&self.target, guess).to_string()))
    }
}

/// Where the session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate left
    Active,
    /// Exactly one candidate left: the answer
    Solved(Word),
    /// No candidate is consistent with the feedback
    Exhausted,
}

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Feedback was applied to the candidates
    Filtered {
        guess: Word,
        feedback: Feedback,
        before: usize,
        after: usize,
    },
    /// The game refused the guess; it was dropped from the pool and the
    /// candidates are unchanged
    Rejected { guess: Word },
}

impl Turn {
    #[must_use]
    pub fn guess(&self) -> &Word {
        match self {
            Self::Filtered { guess, .. } | Self::Rejected { guess } => guess,
        }
    }
}

/// A full solving attempt
///
/// The session owns both the guesser and the guess pool. The guesser never
/// touches the pool; rejected words are removed here.
#[derive(Debug, Clone)]
pub struct Session {
    guesser: Guesser,
    pool: GuessPool,
    max_turns: Option<usize>,
    turns: Vec<Turn>,
}

impl Session {
    /// Start a session over the `answers` universe, guessing from `pool`
    ///
    /// With `all_words` set, every pool word is a possible answer and
    /// `answers` is ignored.
    #[must_use]
    pub fn new(config: &SolverConfig, answers: Vec<Word>, pool: GuessPool) -> Self {
        let universe = if config.all_words {
            pool.words().to_vec()
        } else {
            answers
        };

        Self {
            guesser: Guesser::new(universe).with_opening(config.opening_guess.clone()),
            pool,
            max_turns: config.max_turns,
            turns: Vec::new(),
        }
    }

    #[must_use]
    pub const fn guesser(&self) -> &Guesser {
        &self.guesser
    }

    #[must_use]
    pub const fn pool(&self) -> &GuessPool {
        &self.pool
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.guesser.chances() {
            0 => SessionState::Exhausted,
            1 => self
                .guesser
                .answer()
                .map_or(SessionState::Exhausted, |answer| {
                    SessionState::Solved(answer.clone())
                }),
            _ => SessionState::Active,
        }
    }

    /// Whether the configured turn limit has been used up
    #[must_use]
    pub fn out_of_turns(&self) -> bool {
        self.max_turns
            .is_some_and(|limit| self.turns.len() >= limit)
    }

    /// The guess to play next
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidateSet` if the session is exhausted.
    pub fn next_guess<O>(&self, observer: &O) -> Result<Word, SolverError>
    where
        O: ScanObserver + ?Sized,
    {
        self.guesser.best_guess_observed(&self.pool, observer)
    }

    /// Record the game's reply to `guess`
    ///
    /// A rejection removes the word from the pool and leaves the candidates
    /// alone; anything else is sanitized and used to filter. A rejected word
    /// that was not in the pool came from the candidates themselves, so it
    /// is dropped from them instead, otherwise it would be offered again.
    pub fn apply(&mut self, guess: Word, reply: &Reply) -> &Turn {
        let turn = match reply {
            Reply::Rejected => {
                if self.pool.remove(&guess) {
                    info!("removed rejected word {guess} from the guess pool");
                } else {
                    warn!("rejected word {guess} was never in the pool, dropping it");
                    self.guesser.discard(&guess);
                }
                Turn::Rejected { guess }
            }
            Reply::Feedback(raw) => {
                let feedback = sanitize(raw);
                let before = self.guesser.chances();
                self.guesser.filter(&guess, feedback);
                Turn::Filtered {
                    guess,
                    feedback,
                    before,
                    after: self.guesser.chances(),
                }
            }
        };

        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Play one turn: guess, ask `source`, apply the reply
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCandidateSet` if no candidate is left, or
    /// `SolverError::Io` if the source fails.
    pub fn step<S, O>(&mut self, source: &mut S, observer: &O) -> Result<&Turn, SolverError>
    where
        S: FeedbackSource + ?Sized,
        O: ScanObserver + ?Sized,
    {
        let guess = self.next_guess(observer)?;
        let reply = source.reply(&guess)?;
        Ok(self.apply(guess, &reply))
    }

    /// Keep stepping while more than one candidate is left
    ///
    /// Stops early, still `Active`, once the turn limit is reached.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Session::step`].
    pub fn run<S, O>(&mut self, source: &mut S, observer: &O) -> Result<SessionState, SolverError>
    where
        S: FeedbackSource + ?Sized,
        O: ScanObserver + ?Sized,
    {
        while self.guesser.chances() > 1 && !self.out_of_turns() {
            self.step(source, observer)?;
        }

        let state = self.state();
        match &state {
            SessionState::Solved(answer) => {
                info!("solved: {answer} after {} turns", self.turns.len());
            }
            SessionState::Exhausted => {
                info!("exhausted after {} turns", self.turns.len());
            }
            SessionState::Active => {
                info!(
                    "stopped after {} turns with {} candidates left",
                    self.turns.len(),
                    self.guesser.chances()
                );
            }
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(answers: &[&str], pool: &[&str]) -> Session {
        Session::new(
            &SolverConfig::without_opening(),
            words(answers),
            GuessPool::new(words(pool)),
        )
    }

    #[test]
    fn reply_from_input() {
        assert_eq!(Reply::from_input("  \n"), Reply::Rejected);
        assert_eq!(
            Reply::from_input("gw___\n"),
            Reply::Feedback("gw___".to_string())
        );
    }

    #[test]
    fn oracle_replies_with_comparison() {
        let mut oracle = Oracle::new(word("sugar"));
        assert_eq!(
            oracle.reply(&word("samba")).unwrap(),
            Reply::Feedback("GW___".to_string())
        );
    }

    #[test]
    fn initial_state_is_active() {
        let session = session(&["abide", "abode", "above"], &["abide"]);
        assert_eq!(session.state(), SessionState::Active);
        assert!(session.turns().is_empty());
    }

    #[test]
    fn rejection_shrinks_pool_not_candidates() {
        let mut session = session(&["abide", "abode", "above"], &["abide", "abode", "above"]);
        let guess = session.next_guess(&()).unwrap();

        let turn = session.apply(guess.clone(), &Reply::Rejected).clone();
        assert_eq!(turn, Turn::Rejected { guess: guess.clone() });
        assert!(!session.pool().contains(&guess));
        assert_eq!(session.pool().len(), 2);
        assert_eq!(session.guesser().chances(), 3);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn feedback_is_sanitized_before_filtering() {
        let mut session = session(&["abide", "abode", "above"], &["abide"]);
        let turn = session
            .apply(word("abide"), &Reply::Feedback("gg?gg".to_string()))
            .clone();

        assert_eq!(
            turn,
            Turn::Filtered {
                guess: word("abide"),
                feedback: sanitize("GG_GG"),
                before: 3,
                after: 1,
            }
        );
        assert_eq!(session.state(), SessionState::Solved(word("abode")));
    }

    #[test]
    fn run_with_oracle_solves() {
        let answers = ["abide", "abode", "above"];
        let mut session = session(&answers, &answers);
        let mut oracle = Oracle::new(word("abode"));

        let state = session.run(&mut oracle, &()).unwrap();
        assert_eq!(state, SessionState::Solved(word("abode")));
        assert!(session.turns().len() <= 2);
    }

    #[test]
    fn run_ends_exhausted_on_contradiction() {
        let mut session = session(&["abide", "abode", "above"], &["abide", "abode", "above"]);
        let mut liar = |_: &Word| -> io::Result<Reply> { Ok(Reply::Feedback("WWWWW".to_string())) };

        let state = session.run(&mut liar, &()).unwrap();
        assert_eq!(state, SessionState::Exhausted);
        assert!(matches!(
            session.next_guess(&()),
            Err(SolverError::EmptyCandidateSet)
        ));
        assert!(matches!(
            session.step(&mut liar, &()),
            Err(SolverError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn run_stops_at_turn_limit() {
        let config = SolverConfig::without_opening().with_max_turns(2);
        let answers = words(&["abide", "abode", "above"]);
        let mut session = Session::new(&config, answers.clone(), GuessPool::new(answers));
        let mut refuser = |_: &Word| -> io::Result<Reply> { Ok(Reply::Rejected) };

        let state = session.run(&mut refuser, &()).unwrap();
        assert_eq!(state, SessionState::Active);
        assert_eq!(session.turns().len(), 2);
        assert!(session.out_of_turns());
    }

    #[test]
    fn all_words_draws_candidates_from_pool() {
        let config = SolverConfig::without_opening().with_all_words(true);
        let session = Session::new(
            &config,
            words(&["abide"]),
            GuessPool::new(words(&["abide", "abode", "above"])),
        );
        assert_eq!(session.guesser().chances(), 3);
    }

    #[test]
    fn rejected_fallback_candidate_is_not_offered_again() {
        // empty pool: the guess falls back to the first candidate
        let mut session = session(&["abide", "abode", "above"], &[]);
        let guess = session.next_guess(&()).unwrap();
        assert_eq!(guess, word("abide"));

        session.apply(guess, &Reply::Rejected);
        assert_eq!(session.guesser().chances(), 2);
        assert_eq!(session.next_guess(&()).unwrap(), word("abode"));

        let mut refuser = |_: &Word| -> io::Result<Reply> { Ok(Reply::Rejected) };
        assert_eq!(
            session.run(&mut refuser, &()).unwrap(),
            SessionState::Solved(word("above"))
        );
    }

    #[test]
    fn source_errors_propagate() {
        let mut session = session(&["abide", "abode"], &["abide"]);
        let mut broken = |_: &Word| -> io::Result<Reply> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        };

        assert!(matches!(
            session.run(&mut broken, &()),
            Err(SolverError::Io(_))
        ));
    }
}
