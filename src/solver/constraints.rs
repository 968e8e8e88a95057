//! Letter constraints accumulated from feedback
//!
//! A [`ConstraintSet`] is the compact form of a game history that the trie
//! search can test one edge at a time. A word satisfies the set exactly when
//! it would have produced every recorded pattern.

use crate::core::{ALPHABET_LEN, Attempt, Feedback, WORD_LEN, Word};

/// Per-position and per-letter restrictions derived from attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Letter fixed by a green tile
    required: [Option<u8>; WORD_LEN],
    /// Bitmask of letters ruled out at each position
    forbidden: [u32; WORD_LEN],
    min_count: [u8; ALPHABET_LEN],
    max_count: [u8; ALPHABET_LEN],
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSet {
    /// Constraints that admit every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: [None; WORD_LEN],
            forbidden: [0; WORD_LEN],
            min_count: [0; ALPHABET_LEN],
            max_count: [WORD_LEN as u8; ALPHABET_LEN],
        }
    }

    /// Fold every attempt of a history into one set
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Attempt, Pattern, Word};
    /// use wordle_trie::solver::ConstraintSet;
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let history = [Attempt::new(guess, Pattern::calculate(&guess, &secret))];
    ///
    /// let constraints = ConstraintSet::from_history(&history);
    /// assert!(constraints.matches(&secret));
    /// assert!(!constraints.matches(&guess));
    /// ```
    #[must_use]
    pub fn from_history(history: &[Attempt]) -> Self {
        let mut set = Self::new();
        for attempt in history {
            set.add(attempt);
        }
        set
    }

    /// Tighten the set with one more attempt
    pub fn add(&mut self, attempt: &Attempt) {
        let mut marked = [0u8; ALPHABET_LEN];
        let mut absent = [false; ALPHABET_LEN];

        for pos in 0..WORD_LEN {
            let letter = attempt.guess.letter_at(pos);
            match attempt.pattern.feedback_at(pos) {
                Feedback::Correct => {
                    self.required[pos] = Some(letter as u8);
                    marked[letter] += 1;
                }
                Feedback::Present => {
                    self.forbidden[pos] |= 1 << letter;
                    marked[letter] += 1;
                }
                Feedback::Absent => {
                    self.forbidden[pos] |= 1 << letter;
                    absent[letter] = true;
                }
            }
        }

        for letter in 0..ALPHABET_LEN {
            self.min_count[letter] = self.min_count[letter].max(marked[letter]);
            if absent[letter] {
                self.max_count[letter] = self.max_count[letter].min(marked[letter]);
            }
        }
    }

    /// Whether `letter` (0 = `a`) may sit at `pos`
    #[inline]
    #[must_use]
    pub fn allows(&self, pos: usize, letter: usize) -> bool {
        let fixed_ok = self.required[pos].is_none_or(|r| usize::from(r) == letter);
        fixed_ok && self.forbidden[pos] & (1 << letter) == 0
    }

    /// Whether a prefix of length `filled` with letter tally `counts` can
    /// still be completed into a satisfying word
    #[inline]
    #[must_use]
    pub fn can_complete(&self, filled: usize, counts: &[u8; ALPHABET_LEN]) -> bool {
        let mut outstanding = 0usize;
        for letter in 0..ALPHABET_LEN {
            if counts[letter] > self.max_count[letter] {
                return false;
            }
            outstanding += usize::from(self.min_count[letter].saturating_sub(counts[letter]));
        }
        outstanding <= WORD_LEN - filled
    }

    /// Whether a whole word satisfies every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        (0..WORD_LEN).all(|pos| self.allows(pos, word.letter_at(pos)))
            && self.can_complete(WORD_LEN, &word.letter_counts())
    }

    /// Letter fixed at `pos`, if any
    #[must_use]
    pub fn required(&self, pos: usize) -> Option<char> {
        self.required[pos].map(|l| char::from(b'a' + l))
    }

    /// Fewest copies of `letter` a satisfying word contains
    #[must_use]
    pub const fn min_count(&self, letter: usize) -> u8 {
        self.min_count[letter]
    }

    /// Most copies of `letter` a satisfying word contains
    #[must_use]
    pub const fn max_count(&self, letter: usize) -> u8 {
        self.max_count[letter]
    }
}
