//! Word list loading utilities

use crate::core::Word;
use log::warn;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and blank lines skipped. Lines that are not valid words
/// are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_splitter::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content, &path.display().to_string()))
}

fn parse_lines(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("{source}:{}: skipping {trimmed:?}: {e}", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_splitter::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["abide", "nope", "Abode"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "abode");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// `first` followed by the words of `rest` not already present
///
/// Order is kept, and so is only the first copy of a repeated word. This is
/// how the guess pool is built: every answer, then the extra guess words.
#[must_use]
pub fn merge_unique(first: &[Word], rest: &[Word]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    first
        .iter()
        .chain(rest)
        .filter(|word| seen.insert(*word))
        .cloned()
        .collect()
}
