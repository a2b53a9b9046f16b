//! Feedback calculation and representation
//!
//! Feedback is the per-letter verdict the game gives for a guess. It is
//! stored base-3 in a single byte, one digit per position (position 0 is
//! the least significant digit):
//! - 0 = Absent (`_`)
//! - 1 = Misplaced (`W`)
//! - 2 = Correct (`G`)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Sentinel that replaces consumed target letters. Never a lowercase letter.
const CONSUMED: u8 = 0;

/// Verdict for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the target (or every occurrence already accounted for)
    Absent,
    /// Letter in the target, but at another position
    Misplaced,
    /// Letter at the correct position
    Correct,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }

    /// Symbol used when typing or printing feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'W',
            Self::Absent => '_',
        }
    }

    /// Interpret one raw input symbol. Anything unrecognized is `Absent`.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'G' | '🟩' => Self::Correct,
            'W' | '🟨' => Self::Misplaced,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a whole guess
///
/// Value range: 0-242 (3^5 = 243 possible patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// Total number of distinct patterns
    pub const COUNT: usize = 243;

    /// All positions correct
    pub const SOLVED: Self = Self(242);

    /// No letter of the guess in the target
    pub const ALL_ABSENT: Self = Self(0);

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let value = marks
            .iter()
            .rev()
            .fold(0u8, |acc, mark| acc * 3 + mark.digit());
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Decode into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Feedback the game gives when `guess` is played and `target` is hidden
    ///
    /// Greens are taken first and consume their target letter. Then each
    /// remaining guess letter, left to right, consumes the first unconsumed
    /// occurrence of itself in the target and becomes misplaced. A guess with
    /// more copies of a letter than the target therefore gets the surplus
    /// marked absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_splitter::core::{Feedback, Word};
    ///
    /// let target = Word::new("sugar").unwrap();
    /// let guess = Word::new("samba").unwrap();
    /// assert_eq!(Feedback::compare(&target, &guess).to_string(), "GW___");
    /// ```
    #[must_use]
    pub fn compare(target: &Word, guess: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining = *target.chars();
        let mut marks = [Mark::Absent; WORD_LENGTH];

        // Allow: the same index addresses guess, remaining and marks
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == remaining[i] {
                marks[i] = Mark::Correct;
                remaining[i] = CONSUMED;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter().position(|&ch| ch == guess[i]) {
                marks[i] = Mark::Misplaced;
                remaining[slot] = CONSUMED;
            }
        }

        Self::from_marks(marks)
    }
}

/// Feedback for `guess` against the hidden `target`
///
/// Shorthand for [`Feedback::compare`].
#[inline]
#[must_use]
pub fn compare(target: &Word, guess: &Word) -> Feedback {
    Feedback::compare(target, guess)
}

/// Turn whatever the user typed into a well-formed pattern
///
/// The input is uppercased; `G` (or 🟩) is correct, `W` (or 🟨) is
/// misplaced and every other symbol is absent. Input shorter than a word is
/// padded with absent marks, longer input is cut off.
///
/// # Examples
/// ```
/// use wordle_splitter::core::sanitize;
///
/// assert_eq!(sanitize("gw-x_").to_string(), "GW___");
/// assert_eq!(sanitize("g").to_string(), "G____");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> Feedback {
    let mut marks = [Mark::Absent; WORD_LENGTH];
    for (mark, symbol) in marks.iter_mut().zip(raw.chars().flat_map(char::to_uppercase)) {
        *mark = Mark::from_symbol(symbol);
    }
    Feedback::from_marks(marks)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks()
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}
