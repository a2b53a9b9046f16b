//! Best-guess selection over the whole guess pool

use super::calculator::count_partitions;
use crate::core::Word;
use crate::solver::progress::ScanObserver;
use rayon::prelude::*;

/// A pool word together with its partition score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub score: usize,
}

/// Select the pool word that splits `candidates` into the most classes
///
/// Among words sharing the top score the one that comes *last* in the pool
/// wins. Guesses are scored in parallel, but the reduction keys on
/// `(score, pool index)`, so the winner is the same one a left-to-right scan
/// keeping any score `>=` the best so far would pick.
///
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_splitter::core::Word;
/// use wordle_splitter::solver::partition::select_best_guess;
///
/// let pool: Vec<Word> = ["zzzzz", "abode", "abide"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<Word> = ["abide", "abode", "above"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// // abode and abide both split all three; abide comes later
/// let best = select_best_guess(&pool, &candidates, &()).unwrap();
/// assert_eq!(best.word.text(), "abide");
/// assert_eq!(best.score, 3);
/// ```
pub fn select_best_guess<'a, O>(
    pool: &'a [Word],
    candidates: &[Word],
    observer: &O,
) -> Option<ScoredGuess<'a>>
where
    O: ScanObserver + ?Sized,
{
    observer.start(pool.len());

    let best = pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let score = count_partitions(guess, candidates);
            observer.advance(1);
            (score, index)
        })
        .max();

    observer.finish();

    best.map(|(score, index)| ScoredGuess {
        word: &pool[index],
        score,
    })
}
