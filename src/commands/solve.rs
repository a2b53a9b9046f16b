//! Debug auto-play
//!
//! Plays a whole session against a known target, with the oracle supplying
//! feedback instead of a human.

use crate::core::Word;
use crate::solver::partition::count_partitions;
use crate::solver::{
    FeedbackSource, GuessPool, Oracle, Session, SessionState, SolverConfig, SolverError, Turn,
};

/// A single turn of the solution path
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub turn: Turn,
    /// Classes the guess split the candidates into
    pub classes: usize,
}

/// Result of solving one target
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub outcome: SessionState,
    pub in_answer_set: bool,
    pub in_guess_set: bool,
}

impl SolveResult {
    /// Whether the session ended on the actual target
    #[must_use]
    pub fn found_target(&self) -> bool {
        matches!(&self.outcome, SessionState::Solved(answer) if *answer == self.target)
    }

    /// Guesses a player would need, counting the final answer if it was not
    /// already played
    #[must_use]
    pub fn guesses_used(&self) -> Option<usize> {
        let SessionState::Solved(answer) = &self.outcome else {
            return None;
        };
        let answer_played = self
            .steps
            .last()
            .is_some_and(|step| step.turn.guess() == answer);
        Some(self.steps.len() + usize::from(!answer_played))
    }
}

/// Solve `target`, using `answers` as the candidate universe and `guesses`
/// as the guess pool
///
/// # Errors
///
/// Returns an error if the solver cannot provide a guess.
pub fn solve_word(
    target: &Word,
    config: &SolverConfig,
    answers: &[Word],
    guesses: &[Word],
) -> Result<SolveResult, SolverError> {
    let mut session = Session::new(config, answers.to_vec(), GuessPool::new(guesses.to_vec()));
    let mut oracle = Oracle::new(target.clone());
    let mut steps = Vec::new();

    while session.guesser().chances() > 1 && !session.out_of_turns() {
        let guess = session.next_guess(&())?;
        let classes = count_partitions(&guess, session.guesser().candidates());
        let reply = oracle.reply(&guess)?;
        let turn = session.apply(guess, &reply).clone();
        steps.push(GuessStep { turn, classes });
    }

    Ok(SolveResult {
        target: target.clone(),
        steps,
        outcome: session.state(),
        in_answer_set: answers.contains(target),
        in_guess_set: guesses.contains(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{merge_unique, words_from_slice};

    const ANSWERS: &[&str] = &[
        "abide", "abode", "above", "sugar", "whack", "trace", "crate", "react", "caret", "grace",
    ];

    fn config() -> SolverConfig {
        SolverConfig::default().with_max_turns(12)
    }

    #[test]
    fn solves_every_answer() {
        let answers = words_from_slice(ANSWERS);
        for target in &answers {
            let result = solve_word(target, &config(), &answers, &answers).unwrap();
            assert!(result.found_target(), "failed on {target}");
            assert!(result.in_answer_set && result.in_guess_set);
        }
    }

    #[test]
    fn opening_guess_comes_first() {
        let answers = words_from_slice(ANSWERS);
        let target = Word::new("sugar").unwrap();
        let result = solve_word(&target, &config(), &answers, &answers).unwrap();

        assert_eq!(result.steps[0].turn.guess().text(), "trace");
    }

    #[test]
    fn records_shrinking_candidates() {
        let answers = words_from_slice(ANSWERS);
        let target = Word::new("whack").unwrap();
        let result = solve_word(&target, &config(), &answers, &answers).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            if let Turn::Filtered { before, after, .. } = step.turn {
                assert!(after <= before);
                assert!(step.classes >= 1);
            }
        }
    }

    #[test]
    fn guesses_used_counts_final_answer() {
        let answers = words_from_slice(&["abide", "abode", "above"]);
        let target = Word::new("abode").unwrap();
        let config = SolverConfig::without_opening();
        let result = solve_word(&target, &config, &answers, &answers).unwrap();

        // "above" is guessed first (last of the top scorers) and leaves abode
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.outcome, SessionState::Solved(target));
        assert_eq!(result.guesses_used(), Some(2));
    }

    #[test]
    fn guesses_used_when_answer_was_the_guess() {
        let answers = words_from_slice(&["abide", "abode", "above"]);
        let target = Word::new("above").unwrap();
        let config = SolverConfig::without_opening();
        let result = solve_word(&target, &config, &answers, &answers).unwrap();

        assert_eq!(result.guesses_used(), Some(1));
    }

    #[test]
    fn all_words_finds_target_outside_answer_list() {
        let answers = words_from_slice(&["abide", "abode", "above"]);
        let guesses = merge_unique(&answers, &words_from_slice(&["sugar", "shuln"]));
        let target = Word::new("shuln").unwrap();

        let narrow = SolverConfig::without_opening().with_max_turns(12);
        let result = solve_word(&target, &narrow, &answers, &guesses).unwrap();
        assert_eq!(result.outcome, SessionState::Exhausted);

        let wide = narrow.with_all_words(true);
        let result = solve_word(&target, &wide, &answers, &guesses).unwrap();
        assert!(result.found_target());
        assert!(!result.in_answer_set);
        assert!(result.in_guess_set);
    }

    #[test]
    fn target_outside_universe_is_reported() {
        let answers = words_from_slice(&["abide", "abode", "above"]);
        let target = Word::new("sugar").unwrap();
        let config = SolverConfig::without_opening();
        let result = solve_word(&target, &config, &answers, &answers).unwrap();

        assert!(!result.in_answer_set);
        assert!(!result.in_guess_set);
        assert!(!result.found_target());
        assert_eq!(result.outcome, SessionState::Exhausted);
        assert_eq!(result.guesses_used(), None);
    }
}
