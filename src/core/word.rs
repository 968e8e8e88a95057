//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! orders lexicographically.

use super::WordleError;
use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of distinct letters (`a`-`z`)
pub const ALPHABET_LEN: usize = 26;

/// A 5-letter Wordle word
///
/// Ordering is lexicographic, which is also the order the trie walks children in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidLength` if the input is not exactly 5 characters
    /// and `WordleError::InvalidCharacters` if it contains anything but letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordleError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordleError::InvalidLength { len });
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordleError::InvalidCharacters);
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self { chars })
    }

    /// Create a Word from five lowercase ASCII bytes
    ///
    /// # Errors
    /// Returns `WordleError::InvalidCharacters` if any byte is outside `a`-`z`.
    pub fn from_ascii(chars: [u8; WORD_LEN]) -> Result<Self, WordleError> {
        if chars.iter().all(u8::is_ascii_lowercase) {
            Ok(Self { chars })
        } else {
            Err(WordleError::InvalidCharacters)
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Always ASCII lowercase, so decoding cannot fail
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Alphabet index (0-25) of the letter at `position`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> usize {
        (self.chars[position] - b'a') as usize
    }

    /// Occurrences of each letter, indexed by alphabet position
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for position in 0..WORD_LEN {
            counts[self.letter_at(position)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
