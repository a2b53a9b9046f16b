//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Guess letters on the background color of their mark
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let cell = format!(" {letter} ");
            match mark {
                Mark::Correct => cell.black().on_green().to_string(),
                Mark::Misplaced => cell.black().on_yellow().to_string(),
                Mark::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Style from `template`, falling back to the plain bar if it does not parse
fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}

/// Transient bar shown while a guess is being scored
#[must_use]
pub fn thinking_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(style("Thinking... {percent}% [{bar:30.cyan/blue}]"));
    bar
}

/// Bar for a run over many target words
#[must_use]
pub fn words_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(style(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ));
    bar
}
