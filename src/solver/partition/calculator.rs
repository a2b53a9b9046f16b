//! Partition counting for a single guess

use crate::core::{Feedback, Word, compare};
use rustc_hash::FxHashMap;

/// How a guess splits the candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionMetrics {
    /// Number of distinct feedback patterns (the heuristic score)
    pub classes: usize,
    /// Size of the biggest class, the worst case after this guess
    pub largest_class: usize,
    /// Expected number of candidates left, assuming every candidate is
    /// equally likely to be the answer
    pub expected_remaining: f64,
}

/// Number of distinct feedback patterns `guess` produces over `candidates`
///
/// Each candidate is treated as the hidden target.
///
/// # Examples
/// ```
/// use wordle_splitter::core::Word;
/// use wordle_splitter::solver::partition::count_partitions;
///
/// let candidates: Vec<Word> = ["abide", "abode", "above"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = Word::new("abode").unwrap();
/// assert_eq!(count_partitions(&guess, &candidates), 3);
/// ```
#[must_use]
pub fn count_partitions(guess: &Word, candidates: &[Word]) -> usize {
    let mut seen = [false; Feedback::COUNT];
    let mut classes = 0;

    for target in candidates {
        let slot = &mut seen[usize::from(compare(target, guess).value())];
        if !*slot {
            *slot = true;
            classes += 1;
        }
    }

    classes
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for target in candidates {
        *counts.entry(compare(target, guess)).or_insert(0) += 1;
    }

    counts
}

/// Full partition statistics for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> PartitionMetrics {
    if candidates.is_empty() {
        return PartitionMetrics {
            classes: 0,
            largest_class: 0,
            expected_remaining: 0.0,
        };
    }

    let groups = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p(class) × |class|
    let expected_remaining = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    PartitionMetrics {
        classes: groups.len(),
        largest_class: groups.values().copied().max().unwrap_or(0),
        expected_remaining,
    }
}
