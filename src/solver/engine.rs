//! Shared, read-only solving context

use super::CandidateSet;
use super::hill_climbing::{PositionFrequencies, guess_frequencies};
use crate::core::{Attempt, Pattern};
use crate::index::{PatternMatrix, PatternSource, Trie, load_or_build};
use crate::lexicon::Lexicon;
use crate::output::log;
use indicatif::ProgressBar;
use std::path::Path;

/// Lexicon, trie and pattern matrix bundled for strategies and sessions
///
/// Built once and then only borrowed, so any number of sessions may share one
/// engine (including across threads).
#[derive(Debug)]
pub struct Engine {
    lexicon: Lexicon,
    trie: Trie,
    matrix: Option<PatternMatrix>,
    guess_frequencies: PositionFrequencies,
}

impl Engine {
    /// Build an engine with a freshly computed pattern matrix
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        let matrix = PatternMatrix::build(&lexicon);
        Self::assemble(lexicon, Some(matrix))
    }

    /// Use a precomputed matrix, dropping it with a warning if it belongs to
    /// a different lexicon
    #[must_use]
    pub fn with_matrix(lexicon: Lexicon, matrix: PatternMatrix) -> Self {
        if matrix.is_valid_for(&lexicon) {
            return Self::assemble(lexicon, Some(matrix));
        }
        log::warn(format!(
            "pattern matrix checksum {:016x} does not match lexicon {:016x}; computing feedback on the fly",
            matrix.checksum(),
            lexicon.checksum()
        ));
        Self::assemble(lexicon, None)
    }

    /// Load the matrix cached at `path`, building and saving it when absent
    #[must_use]
    pub fn with_cache(lexicon: Lexicon, path: &Path, progress: &ProgressBar) -> Self {
        let matrix = load_or_build(path, &lexicon, progress);
        Self::assemble(lexicon, Some(matrix))
    }

    /// Run without a matrix; every pattern is computed on demand
    #[must_use]
    pub fn without_matrix(lexicon: Lexicon) -> Self {
        log::warn("pattern matrix unavailable; computing feedback on the fly");
        Self::assemble(lexicon, None)
    }

    fn assemble(lexicon: Lexicon, matrix: Option<PatternMatrix>) -> Self {
        let trie = Trie::from_words(lexicon.guesses());
        let guess_frequencies = guess_frequencies(&lexicon);
        Self {
            lexicon,
            trie,
            matrix,
            guess_frequencies,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Prefix index over the guess list; word ids equal guess indices
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[must_use]
    pub const fn matrix(&self) -> Option<&PatternMatrix> {
        self.matrix.as_ref()
    }

    /// Per-position letter counts over the whole guess list
    #[must_use]
    pub const fn guess_frequencies(&self) -> &PositionFrequencies {
        &self.guess_frequencies
    }

    /// Pattern lookups backed by the matrix when one is loaded
    #[must_use]
    pub fn patterns(&self) -> PatternSource<'_> {
        PatternSource::verified(&self.lexicon, self.matrix.as_ref())
    }

    /// Candidates consistent with a whole history
    ///
    /// Attempts whose guess is not in the lexicon are matched by computing
    /// feedback directly.
    #[must_use]
    pub fn candidates(&self, history: &[Attempt]) -> CandidateSet {
        let patterns = self.patterns();
        history
            .iter()
            .fold(CandidateSet::all(&self.lexicon), |set, attempt| {
                match self.lexicon.guess_index(&attempt.guess) {
                    Some(guess) => set.filter(&patterns, guess, attempt.pattern),
                    None => CandidateSet::from_indices(set.iter().filter(|&s| {
                        Pattern::calculate(&attempt.guess, &self.lexicon.secret(s))
                            == attempt.pattern
                    })),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::lexicon::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["abide", "apple", "erase", "floor"]),
        )
        .unwrap()
    }

    #[test]
    fn trie_ids_match_guess_indices() {
        let engine = Engine::new(lexicon());
        for (i, word) in engine.lexicon().guesses().iter().enumerate() {
            assert_eq!(engine.trie().word(i), *word);
        }
        assert_eq!(engine.trie().len(), engine.lexicon().guesses().len());
    }

    #[test]
    fn matrix_backed_and_plain_engines_agree() {
        let cached = Engine::new(lexicon());
        let plain = Engine::without_matrix(lexicon());
        assert!(cached.patterns().is_cached());
        assert!(!plain.patterns().is_cached());

        let crane = Word::new("crane").unwrap();
        let history = [Attempt::new(crane, Pattern::compute("crane", "apple").unwrap())];
        assert_eq!(cached.candidates(&history), plain.candidates(&history));
        assert_eq!(cached.candidates(&history).len(), 2, "abide and apple");
    }

    #[test]
    fn stale_matrix_is_discarded() {
        let other = Lexicon::new(words_from_slice(&["crane"]), words_from_slice(&["robot"])).unwrap();
        let engine = Engine::with_matrix(lexicon(), PatternMatrix::build(&other));
        assert!(engine.matrix().is_none());
    }

    #[test]
    fn off_lexicon_guesses_still_filter() {
        let engine = Engine::new(lexicon());
        let guess = Word::new("zzzzz").unwrap();
        let history = [Attempt::new(guess, Pattern::new(0))];
        assert_eq!(engine.candidates(&history).len(), 4);
    }
}
