//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::index::PatternSource;
use crate::solver::CandidateSet;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_trie::index::PatternSource;
/// use wordle_trie::lexicon::{Lexicon, loader::words_from_slice};
/// use wordle_trie::solver::CandidateSet;
/// use wordle_trie::solver::entropy::calculate_entropy;
///
/// let lexicon = Lexicon::new(
///     words_from_slice(&["crane"]),
///     words_from_slice(&["slate", "irate"]),
/// ).unwrap();
/// let patterns = PatternSource::computed(&lexicon);
/// let candidates = CandidateSet::all(&lexicon);
///
/// let entropy = calculate_entropy(&patterns, 0, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(patterns: &PatternSource<'_>, guess: usize, candidates: &CandidateSet) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&patterns.pattern_counts(guess, candidates.indices()))
}

/// Calculate Shannon entropy from a pattern histogram
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_trie::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 25, 25];
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(pattern_counts: &[u32]) -> f64 {
    let total = pattern_counts.iter().map(|&c| u64::from(c)).sum::<u64>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(patterns: &PatternSource<'_>, guess: usize, candidates: &CandidateSet) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = patterns.pattern_counts(guess, candidates.indices());
    let total = candidates.len() as f64;

    // Σ p * |group| = Σ |group|² / n
    let expected_remaining = counts
        .iter()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        / total;

    let max_partition = counts.iter().copied().max().unwrap_or(0) as usize;

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}
