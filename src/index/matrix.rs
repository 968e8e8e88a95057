//! All-pairs feedback cache
//!
//! `matrix[guess][secret]` holds `Pattern::calculate(guesses[guess], secrets[secret])`
//! for every pair in a lexicon. Rows are contiguous, so scoring one guess against
//! many candidates walks a single slice.

use crate::core::{PATTERN_COUNT, Pattern};
use crate::lexicon::Lexicon;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Precomputed pattern table, row-major by guess
///
/// Valid only for the lexicon whose checksum it records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatrix {
    checksum: u64,
    guesses: usize,
    secrets: usize,
    data: Vec<u8>,
}

impl PatternMatrix {
    /// Compute every (guess, secret) pattern of `lexicon`
    ///
    /// O(guesses × secrets); rows are computed in parallel.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Pattern, Word};
    /// use wordle_trie::index::PatternMatrix;
    /// use wordle_trie::lexicon::Lexicon;
    ///
    /// let words: Vec<Word> = ["crane", "slate"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let lexicon = Lexicon::new(words.clone(), words).unwrap();
    /// let matrix = PatternMatrix::build(&lexicon);
    ///
    /// assert_eq!(matrix.lookup(0, 0), Pattern::PERFECT);
    /// assert_eq!(matrix.lookup(0, 1).value(), 180);
    /// ```
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        Self::build_with_progress(lexicon, &ProgressBar::hidden())
    }

    /// Like [`Self::build`], ticking `progress` once per finished guess row
    #[must_use]
    pub fn build_with_progress(lexicon: &Lexicon, progress: &ProgressBar) -> Self {
        let guesses = lexicon.guesses();
        let secrets = lexicon.secrets();
        let mut data = vec![0u8; guesses.len() * secrets.len()];

        data.par_chunks_mut(secrets.len())
            .zip(guesses.par_iter())
            .for_each(|(row, guess)| {
                for (cell, secret) in row.iter_mut().zip(secrets) {
                    *cell = Pattern::calculate(guess, secret).value();
                }
                progress.inc(1);
            });

        Self {
            checksum: lexicon.checksum(),
            guesses: guesses.len(),
            secrets: secrets.len(),
            data,
        }
    }

    /// Reassemble a matrix from stored parts, rejecting inconsistent data
    pub(super) fn from_parts(
        checksum: u64,
        guesses: usize,
        secrets: usize,
        data: Vec<u8>,
    ) -> Option<Self> {
        let well_formed = data.len() == guesses * secrets
            && data.iter().all(|&value| usize::from(value) < PATTERN_COUNT);
        well_formed.then_some(Self {
            checksum,
            guesses,
            secrets,
            data,
        })
    }

    /// Pattern for guess index `guess` against secret index `secret`, O(1)
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[inline]
    #[must_use]
    pub fn lookup(&self, guess: usize, secret: usize) -> Pattern {
        Pattern::new(self.row(guess)[secret])
    }

    /// Raw pattern values of one guess against every secret
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        &self.data[guess * self.secrets..(guess + 1) * self.secrets]
    }

    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn secrets(&self) -> usize {
        self.secrets
    }

    /// Checksum of the lexicon this matrix was built from
    #[must_use]
    pub const fn checksum(&self) -> u64 {
        self.checksum
    }

    pub(super) fn data(&self) -> &[u8] {
        &self.data
    }

    /// True if this matrix was built from exactly `lexicon`
    #[must_use]
    pub fn is_valid_for(&self, lexicon: &Lexicon) -> bool {
        self.checksum == lexicon.checksum()
            && self.guesses == lexicon.guesses().len()
            && self.secrets == lexicon.secrets().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    fn small_lexicon() -> Lexicon {
        Lexicon::new(
            words_from_slice(&["crane", "speed", "robot", "eerie", "slate", "apple"]),
            words_from_slice(&["abide", "floor", "three", "apple"]),
        )
        .unwrap()
    }

    #[test]
    fn lookup_matches_direct_calculation() {
        let lexicon = small_lexicon();
        let matrix = PatternMatrix::build(&lexicon);

        // abide, floor and three are appended to the six guesses
        assert_eq!(matrix.guesses(), 9);
        assert_eq!(matrix.guesses(), lexicon.guesses().len());
        assert_eq!(matrix.secrets(), 4);
        for (g, guess) in lexicon.guesses().iter().enumerate() {
            for (s, secret) in lexicon.secrets().iter().enumerate() {
                assert_eq!(matrix.lookup(g, s), Pattern::calculate(guess, secret));
            }
        }
    }

    #[test]
    fn sampled_lookups_match_on_embedded_lexicon() {
        let lexicon = Lexicon::embedded().unwrap();
        let matrix = PatternMatrix::build(&lexicon);

        for g in (0..lexicon.guesses().len()).step_by(97) {
            for s in (0..lexicon.secrets().len()).step_by(89) {
                assert_eq!(
                    matrix.lookup(g, s),
                    Pattern::calculate(&lexicon.guess(g), &lexicon.secret(s))
                );
            }
        }
    }

    #[test]
    fn matrix_is_bound_to_its_lexicon() {
        let lexicon = small_lexicon();
        let matrix = PatternMatrix::build(&lexicon);
        assert!(matrix.is_valid_for(&lexicon));
        assert_eq!(matrix.checksum(), lexicon.checksum());

        let other = Lexicon::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["apple"]),
        )
        .unwrap();
        assert!(!matrix.is_valid_for(&other));
    }

    #[test]
    fn from_parts_rejects_bad_data() {
        assert!(PatternMatrix::from_parts(1, 2, 2, vec![0, 1, 2]).is_none());
        assert!(PatternMatrix::from_parts(1, 1, 2, vec![0, 243]).is_none());
        assert!(PatternMatrix::from_parts(1, 1, 2, vec![0, 242]).is_some());
    }
}
