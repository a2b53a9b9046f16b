//! Core domain types for the game
//!
//! Words and feedback patterns, plus the comparator that produces feedback.
//! Everything here is pure and has no knowledge of word lists or sessions.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, compare, sanitize};
pub use word::{WORD_LENGTH, Word, WordError};
