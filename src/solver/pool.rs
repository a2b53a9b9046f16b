//! The pool of words the solver may propose

use crate::core::Word;

/// Ordered list of allowed guesses
///
/// Order is significant: it decides which word wins a tie in the partition
/// heuristic. The only mutation is removing a word the game refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessPool {
    words: Vec<Word>,
}

impl GuessPool {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Drop the first occurrence of `word`
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, word: &Word) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Word>> for GuessPool {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> GuessPool {
        words.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>().into()
    }

    #[test]
    fn remove_drops_word_and_keeps_order() {
        let mut pool = pool(&["trace", "sugar", "whack"]);
        assert!(pool.remove(&Word::new("sugar").unwrap()));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.words()[0].text(), "trace");
        assert_eq!(pool.words()[1].text(), "whack");
    }

    #[test]
    fn remove_missing_word_is_noop() {
        let mut pool = pool(&["trace"]);
        assert!(!pool.remove(&Word::new("zzzzz").unwrap()));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn contains_checks_membership() {
        let pool = pool(&["trace", "sugar"]);
        assert!(pool.contains(&Word::new("SUGAR").unwrap()));
        assert!(!pool.contains(&Word::new("whack").unwrap()));
        assert!(!GuessPool::default().contains(&Word::new("trace").unwrap()));
    }
}
