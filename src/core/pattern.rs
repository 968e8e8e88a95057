//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{ALPHABET_LEN, WORD_LEN, Word, WordleError};

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Feedback {
    /// Letter does not occur (or all its occurrences are already accounted for)
    Absent = 0,
    /// Letter occurs elsewhere in the secret
    Present = 1,
    /// Letter is in the right position
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters: a letter is never marked Present or Correct more
    /// often than it occurs in the answer.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut answer_available: [u8; ALPHABET_LEN] = answer.letter_counts();

        // First pass: greens
        for (i, digit) in result.iter_mut().enumerate() {
            if guess.char_at(i) == answer.char_at(i) {
                *digit = 2;
                answer_available[guess.letter_at(i)] -= 1;
            }
        }

        // Second pass: yellows from whatever the greens left over
        for (i, digit) in result.iter_mut().enumerate() {
            if *digit == 0 {
                let count = &mut answer_available[guess.letter_at(i)];
                if *count > 0 {
                    *digit = 1;
                    *count -= 1;
                }
            }
        }

        Self::encode(&result)
    }

    /// String-level feedback computation
    ///
    /// # Errors
    /// Returns `WordleError::InvalidLength` (or `InvalidCharacters`) when either
    /// input is not a five-letter word.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Pattern;
    ///
    /// assert!(Pattern::compute("apple", "apple").unwrap().is_perfect());
    /// assert!(Pattern::compute("apples", "apple").is_err());
    /// ```
    pub fn compute(guess: &str, answer: &str) -> Result<Self, WordleError> {
        Ok(Self::calculate(&Word::new(guess)?, &Word::new(answer)?))
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        Self::encode(&feedback.map(|f| f as u8))
    }

    /// Feedback at a single position
    #[must_use]
    pub const fn feedback_at(self, position: usize) -> Feedback {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        Feedback::from_digit(val % 3)
    }

    /// Per-position feedback, position 0 first
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        self.digits().map(Feedback::from_digit)
    }

    /// Wire form: one integer per position, 0=Absent, 1=Present, 2=Correct
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LEN] {
        let mut digits = [0u8; WORD_LEN];
        let mut val = self.0;
        for digit in &mut digits {
            *digit = val % 3;
            val /= 3;
        }
        digits
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 2).count() as u8
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 1).count() as u8
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩/'2' for green
    /// - 'Y'/'y'/🟨/'1' for yellow
    /// - '-'/'_'/⬜/⬛/'0' for gray (light or dark share text)
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut digits = [0u8; WORD_LEN];
        for (digit, ch) in digits.iter_mut().zip(chars) {
            *digit = match ch {
                'G' | 'g' | '🟩' | '2' => 2,
                'Y' | 'y' | '🟨' | '1' => 1,
                '-' | '_' | '⬜' | '⬛' | '0' => 0,
                _ => return None,
            };
        }

        Some(Self::encode(&digits))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }

    fn encode(digits: &[u8; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in digits {
            pattern += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
