//! Word lists for the solver
//!
//! The answer universe and the allowed guesses are read from plain text
//! files, one word per line.

pub mod loader;

pub use loader::{load_from_file, merge_unique, words_from_slice};
