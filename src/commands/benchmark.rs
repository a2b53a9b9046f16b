//! Benchmark command
//!
//! Plays debug sessions against many targets and summarizes how many guesses
//! the heuristic needs.

use super::solve::solve_word;
use crate::core::Word;
use crate::output::formatters::words_bar;
use crate::solver::{SolverConfig, SolverError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub unresolved: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` targets from `answers`
///
/// Without a seed the first `count` answers are taken in order; with one, a
/// reproducible random sample.
#[must_use]
pub fn select_targets(answers: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            answers.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => answers.iter().take(count).cloned().collect(),
    }
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Returns an error if a session cannot provide a guess.
pub fn run_benchmark(
    config: &SolverConfig,
    answers: &[Word],
    guesses: &[Word],
    targets: &[Word],
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let bar = words_bar(targets.len());

    let mut solved = 0;
    let mut unresolved = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for target in targets {
        let result = solve_word(target, config, answers, guesses)?;

        match result.guesses_used() {
            Some(used) if result.found_target() => {
                solved += 1;
                total_guesses += used;
                min_guesses = min_guesses.min(used);
                max_guesses = max_guesses.max(used);
                *distribution.entry(used).or_insert(0) += 1;
            }
            _ => unresolved.push(target.clone()),
        }

        if solved > 0 {
            bar.set_message(format!("Avg: {:.3}", total_guesses as f64 / solved as f64));
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        unresolved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    const ANSWERS: &[&str] = &[
        "abide", "abode", "above", "sugar", "whack", "trace", "crate", "react", "caret", "grace",
        "brace", "place",
    ];

    fn config() -> SolverConfig {
        SolverConfig::default().with_max_turns(16)
    }

    #[test]
    fn benchmark_runs() {
        let answers = words_from_slice(ANSWERS);
        let result = run_benchmark(&config(), &answers, &answers, &answers).unwrap();

        assert_eq!(result.total_words, answers.len());
        assert_eq!(result.solved, answers.len());
        assert!(result.unresolved.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let answers = words_from_slice(ANSWERS);
        let result = run_benchmark(&config(), &answers, &answers, &answers).unwrap();

        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert_eq!(
            result
                .distribution
                .iter()
                .map(|(guesses, count)| guesses * count)
                .sum::<usize>(),
            result.total_guesses
        );
    }

    #[test]
    fn benchmark_reports_targets_outside_universe() {
        let answers = words_from_slice(&["abide", "abode", "above"]);
        let targets = words_from_slice(&["abode", "sugar"]);
        let result = run_benchmark(&config(), &answers, &answers, &targets).unwrap();

        assert_eq!(result.solved, 1);
        assert_eq!(result.unresolved, words_from_slice(&["sugar"]));
    }

    #[test]
    fn benchmark_empty_target_list() {
        let answers = words_from_slice(ANSWERS);
        let result = run_benchmark(&config(), &answers, &answers, &[]).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn select_targets_takes_prefix_without_seed() {
        let answers = words_from_slice(ANSWERS);
        assert_eq!(select_targets(&answers, 3, None), answers[..3].to_vec());
        assert_eq!(select_targets(&answers, 100, None).len(), answers.len());
    }

    #[test]
    fn select_targets_seeded_is_reproducible() {
        let answers = words_from_slice(ANSWERS);
        let first = select_targets(&answers, 5, Some(7));
        let second = select_targets(&answers, 5, Some(7));

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert!(first.iter().all(|w| answers.contains(w)));
    }
}
