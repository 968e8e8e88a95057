//! The shrinking set of secrets still consistent with play

use crate::core::{Pattern, Word};
use crate::index::PatternSource;
use crate::lexicon::Lexicon;

/// Secret indices consistent with every observed pattern, in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    secrets: Vec<u32>,
}

impl CandidateSet {
    /// Every secret of the lexicon
    #[must_use]
    pub fn all(lexicon: &Lexicon) -> Self {
        Self {
            secrets: (0..lexicon.secrets().len() as u32).collect(),
        }
    }

    /// Build from arbitrary secret indices
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut secrets: Vec<u32> = indices.into_iter().map(|i| i as u32).collect();
        secrets.sort_unstable();
        secrets.dedup();
        Self { secrets }
    }

    /// Keep the secrets that would have produced `observed` for `guess`
    ///
    /// Filtering twice with the same observation changes nothing, and the
    /// real secret is never removed.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Pattern, Word};
    /// use wordle_trie::index::PatternSource;
    /// use wordle_trie::lexicon::{Lexicon, loader::words_from_slice};
    /// use wordle_trie::solver::CandidateSet;
    ///
    /// let lexicon = Lexicon::new(
    ///     words_from_slice(&["crane"]),
    ///     words_from_slice(&["apple", "crane", "eerie", "slate"]),
    /// ).unwrap();
    /// let patterns = PatternSource::computed(&lexicon);
    /// let crane = lexicon.guess_index(&Word::new("crane").unwrap()).unwrap();
    ///
    /// let observed = Pattern::compute("crane", "apple").unwrap();
    /// let left = CandidateSet::all(&lexicon).filter(&patterns, crane, observed);
    /// assert_eq!(left.words(&lexicon), vec![Word::new("apple").unwrap()]);
    /// ```
    #[must_use]
    pub fn filter(&self, patterns: &PatternSource<'_>, guess: usize, observed: Pattern) -> Self {
        let secrets = self
            .secrets
            .iter()
            .copied()
            .filter(|&secret| patterns.pattern(guess, secret as usize) == observed)
            .collect();
        Self { secrets }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// The remaining secret when exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<usize> {
        match self.secrets.as_slice() {
            [only] => Some(*only as usize),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, secret: usize) -> bool {
        self.secrets.binary_search(&(secret as u32)).is_ok()
    }

    /// Secret indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.secrets.iter().map(|&s| s as usize)
    }

    /// Raw indices, as accepted by [`PatternSource::pattern_counts`]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.secrets
    }

    /// Resolve the indices to words
    #[must_use]
    pub fn words(&self, lexicon: &Lexicon) -> Vec<Word> {
        self.iter().map(|s| lexicon.secret(s)).collect()
    }
}
