//! Partition heuristic
//!
//! A guess is scored by how many distinct feedback patterns it produces over
//! the remaining candidates, i.e. how many classes it splits them into. This
//! is a cheap stand-in for entropy: no logarithms, no weighting by class
//! size.

mod calculator;
mod selector;

pub use calculator::{PartitionMetrics, calculate_metrics, count_partitions};
pub use selector::{ScoredGuess, select_best_guess};
