//! Pure entropy-based word selection
//!
//! Scores a pool of guesses in parallel and orders them: higher entropy first,
//! then guesses that could win immediately, then alphabetical.

use super::calculator::calculate_entropy;
use crate::index::PatternSource;
use crate::solver::CandidateSet;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Entropies closer than this are treated as a tie
const ENTROPY_TOLERANCE: f64 = 1e-9;

/// A guess index with its entropy over the current candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub index: usize,
    pub entropy: f64,
    /// The guess is itself a remaining candidate
    pub is_candidate: bool,
}

impl ScoredGuess {
    /// Quantised entropy so equal-within-tolerance scores compare equal
    fn tie_key(&self) -> i64 {
        (self.entropy / ENTROPY_TOLERANCE).round() as i64
    }
}

/// Score every guess in `pool` against `candidates`
///
/// Output order matches `pool` regardless of thread scheduling.
#[must_use]
pub fn score_guesses(patterns: &PatternSource<'_>, pool: &[usize], candidates: &CandidateSet) -> Vec<ScoredGuess> {
    let lexicon = patterns.lexicon();
    pool.par_iter()
        .map(|&index| ScoredGuess {
            index,
            entropy: calculate_entropy(patterns, index, candidates),
            is_candidate: lexicon
                .secret_of_guess(index)
                .is_some_and(|secret| candidates.contains(secret)),
        })
        .collect()
}

/// Total order used for selection and ranking; `Less` means preferred
fn preference(patterns: &PatternSource<'_>, a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    let lexicon = patterns.lexicon();
    b.tie_key()
        .cmp(&a.tie_key())
        .then(b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| lexicon.guess(a.index).cmp(&lexicon.guess(b.index)))
}

/// Select best guess by maximizing entropy
///
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_trie::index::PatternSource;
/// use wordle_trie::lexicon::{Lexicon, loader::words_from_slice};
/// use wordle_trie::solver::CandidateSet;
/// use wordle_trie::solver::entropy::{score_guesses, select_best_guess};
///
/// let lexicon = Lexicon::new(
///     words_from_slice(&["aaaaa", "aeros"]),
///     words_from_slice(&["slate", "irate"]),
/// ).unwrap();
/// let patterns = PatternSource::computed(&lexicon);
///
/// let scored = score_guesses(&patterns, &[0, 1], &CandidateSet::all(&lexicon));
/// let best = select_best_guess(&patterns, &scored).unwrap();
/// assert_eq!(lexicon.guess(best.index).text(), "aeros");
/// ```
#[must_use]
pub fn select_best_guess(patterns: &PatternSource<'_>, scored: &[ScoredGuess]) -> Option<ScoredGuess> {
    scored
        .iter()
        .min_by(|a, b| preference(patterns, a, b))
        .copied()
}

/// The `top_k` most preferred guesses, best first
#[must_use]
pub fn rank_guesses(patterns: &PatternSource<'_>, mut scored: Vec<ScoredGuess>, top_k: usize) -> Vec<ScoredGuess> {
    scored.sort_unstable_by(|a, b| preference(patterns, a, b));
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::lexicon::{Lexicon, loader::words_from_slice};

    fn lexicon(guesses: &[&str], secrets: &[&str]) -> Lexicon {
        Lexicon::new(words_from_slice(guesses), words_from_slice(secrets)).unwrap()
    }

    #[test]
    fn selects_highest_entropy() {
        let lexicon = lexicon(&["aaaaa", "aeros"], &["slate", "irate", "crate", "grate"]);
        let patterns = PatternSource::computed(&lexicon);
        let pool: Vec<usize> = (0..lexicon.guesses().len()).collect();

        let scored = score_guesses(&patterns, &pool, &CandidateSet::all(&lexicon));
        let best = select_best_guess(&patterns, &scored).unwrap();

        assert_ne!(lexicon.guess(best.index).text(), "aaaaa");
        assert!(best.entropy > 0.5);
    }

    #[test]
    fn ties_prefer_candidates_then_alphabetical() {
        // every guess splits {abcde, fghij} perfectly
        let lexicon = lexicon(&["aghij", "abcdz"], &["fghij", "abcde"]);
        let patterns = PatternSource::computed(&lexicon);
        let pool: Vec<usize> = (0..lexicon.guesses().len()).collect();
        let scored = score_guesses(&patterns, &pool, &CandidateSet::all(&lexicon));
        assert!(scored.iter().all(|s| (s.entropy - 1.0).abs() < 1e-12));

        let ranked = rank_guesses(&patterns, scored, 4);
        let words: Vec<_> = ranked.iter().map(|s| lexicon.guess(s.index).text().to_string()).collect();
        assert_eq!(words, ["abcde", "fghij", "abcdz", "aghij"]);
    }

    #[test]
    fn scores_follow_pool_order() {
        let lexicon = lexicon(&["crane", "slate", "zzzzz"], &["apple", "floor", "speed"]);
        let patterns = PatternSource::computed(&lexicon);
        let pool = [2, 0, 1];
        let scored = score_guesses(&patterns, &pool, &CandidateSet::all(&lexicon));
        assert_eq!(scored.iter().map(|s| s.index).collect::<Vec<_>>(), pool);
        let zzzzz = lexicon.guess_index(&Word::new("zzzzz").unwrap()).unwrap();
        assert_eq!(scored[0].index, zzzzz);
        assert!(scored[0].entropy.abs() < 1e-12);
    }

    #[test]
    fn empty_pool_has_no_best() {
        let lexicon = lexicon(&["crane"], &["slate"]);
        let patterns = PatternSource::computed(&lexicon);
        assert!(select_best_guess(&patterns, &[]).is_none());
    }
}
