//! Wordle Splitter
//!
//! A Wordle solver that, each turn, plays the guess splitting the remaining
//! possible answers into the largest number of distinct feedback patterns.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_splitter::core::{Word, compare};
//! use wordle_splitter::solver::{GuessPool, Guesser};
//!
//! let words: Vec<Word> = ["abide", "abode", "above"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let pool = GuessPool::new(words.clone());
//! let mut guesser = Guesser::new(words);
//!
//! let guess = guesser.best_guess(&pool).unwrap();
//! let target = Word::new("abode").unwrap();
//! guesser.filter(&guess, compare(&target, &guess));
//!
//! assert_eq!(guesser.chances(), 1);
//! ```

// Core domain types
pub mod core;

// Candidate engine and elimination loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
