//! Feedback lookups with graceful degradation
//!
//! Strategies and the candidate filter ask a [`PatternSource`] for patterns.
//! With a valid matrix that is an O(1) table read; without one the pattern is
//! computed on the spot.

use super::PatternMatrix;
use crate::core::{PATTERN_COUNT, Pattern};
use crate::lexicon::Lexicon;
use crate::output::log;

/// Pattern provider for one lexicon
#[derive(Debug, Clone, Copy)]
pub struct PatternSource<'a> {
    lexicon: &'a Lexicon,
    matrix: Option<&'a PatternMatrix>,
}

impl<'a> PatternSource<'a> {
    /// Use `matrix` when it was built for `lexicon`
    ///
    /// A missing or stale matrix is reported as a performance warning and
    /// feedback is computed directly instead.
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, matrix: Option<&'a PatternMatrix>) -> Self {
        let matrix = match matrix {
            Some(m) if m.is_valid_for(lexicon) => Some(m),
            Some(m) => {
                log::warn(format!(
                    "pattern matrix checksum {:016x} does not match lexicon {:016x}; computing feedback on the fly",
                    m.checksum(),
                    lexicon.checksum()
                ));
                None
            }
            None => {
                log::warn("pattern matrix unavailable; computing feedback on the fly");
                None
            }
        };
        Self { lexicon, matrix }
    }

    /// Wrap a matrix the caller has already validated against `lexicon`
    pub(crate) fn verified(lexicon: &'a Lexicon, matrix: Option<&'a PatternMatrix>) -> Self {
        debug_assert!(matrix.is_none_or(|m| m.is_valid_for(lexicon)));
        Self { lexicon, matrix }
    }

    /// Source that always computes feedback, without warning
    #[must_use]
    pub const fn computed(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            matrix: None,
        }
    }

    /// True when lookups are served from the matrix
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        self.matrix.is_some()
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Pattern for guess index `guess` against secret index `secret`
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess: usize, secret: usize) -> Pattern {
        match self.matrix {
            Some(matrix) => matrix.lookup(guess, secret),
            None => Pattern::calculate(&self.lexicon.guess(guess), &self.lexicon.secret(secret)),
        }
    }

    /// Histogram of patterns produced by `guess` over the given secret indices
    #[must_use]
    pub fn pattern_counts(&self, guess: usize, secrets: &[u32]) -> [u32; PATTERN_COUNT] {
        let mut counts = [0u32; PATTERN_COUNT];
        match self.matrix {
            Some(matrix) => {
                let row = matrix.row(guess);
                for &secret in secrets {
                    counts[usize::from(row[secret as usize])] += 1;
                }
            }
            None => {
                let word = self.lexicon.guess(guess);
                for &secret in secrets {
                    let pattern = Pattern::calculate(&word, &self.lexicon.secret(secret as usize));
                    counts[usize::from(pattern.value())] += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    #[test]
    fn cached_and_computed_sources_agree() {
        let lexicon = Lexicon::new(
            words_from_slice(&["crane", "speed", "robot"]),
            words_from_slice(&["abide", "floor", "erase", "crane"]),
        )
        .unwrap();
        let matrix = PatternMatrix::build(&lexicon);

        let cached = PatternSource::new(&lexicon, Some(&matrix));
        let computed = PatternSource::computed(&lexicon);
        assert!(cached.is_cached());
        assert!(!computed.is_cached());

        let all: Vec<u32> = (0..4).collect();
        for g in 0..lexicon.guesses().len() {
            for s in 0..4 {
                assert_eq!(cached.pattern(g, s), computed.pattern(g, s));
            }
            assert_eq!(cached.pattern_counts(g, &all), computed.pattern_counts(g, &all));
        }
    }

    #[test]
    fn stale_matrix_is_dropped() {
        let built_for = Lexicon::new(words_from_slice(&["crane"]), words_from_slice(&["slate"])).unwrap();
        let lexicon = Lexicon::new(words_from_slice(&["crane"]), words_from_slice(&["apple"])).unwrap();
        let matrix = PatternMatrix::build(&built_for);

        let source = PatternSource::new(&lexicon, Some(&matrix));
        assert!(!source.is_cached());
        assert_eq!(
            source.pattern(1, 0),
            Pattern::PERFECT,
            "apple is appended as guess 1 and still scores correctly"
        );
    }
}
