//! Word analysis command
//!
//! Shows how well a single guess splits the full answer set.

use crate::core::Word;
use crate::solver::partition::{PartitionMetrics, calculate_metrics};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: PartitionMetrics,
    pub total_candidates: usize,
    pub is_possible_answer: bool,
    pub in_guess_pool: bool,
}

/// Analyze how `word` partitions `answers`
///
/// The word does not have to be in either list; the comparison works for
/// any word.
#[must_use]
pub fn analyze_word(word: &Word, answers: &[Word], guesses: &[Word]) -> AnalysisResult {
    AnalysisResult {
        word: word.clone(),
        metrics: calculate_metrics(word, answers),
        total_candidates: answers.len(),
        is_possible_answer: answers.contains(word),
        in_guess_pool: guesses.contains(word),
    }
}
