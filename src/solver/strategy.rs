//! Guess selection strategies
//!
//! Defines the Strategy trait, the values it returns and the enum wrapper used
//! for runtime selection by name.

use super::{
    CandidateSet, DfsSolver, Engine, FullEntropySolver, HillClimbingSolver,
    ProgressiveEntropySolver, StaticHillClimbingSolver,
};
use crate::core::{Attempt, Word, WordleError};

/// A chosen guess plus whatever the strategy measured while choosing it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess {
    /// Index into the lexicon's guess list
    pub index: usize,
    pub word: Word,
    /// Trie nodes expanded, for search-based strategies
    pub nodes_visited: Option<usize>,
    /// Strategy-specific score (bits of entropy, frequency score)
    pub score: Option<f64>,
}

impl Guess {
    /// The guess for a candidate set that has collapsed to one secret
    #[must_use]
    pub fn forced(engine: &Engine, secret: usize) -> Self {
        let lexicon = engine.lexicon();
        let index = lexicon.guess_of_secret(secret);
        Self {
            index,
            word: lexicon.guess(index),
            nodes_visited: None,
            score: None,
        }
    }
}

/// A ranked alternative offered to a human player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub score: f64,
}

/// A policy that picks the next guess from the current candidates
pub trait Strategy {
    /// Canonical registry name
    fn name(&self) -> &'static str;

    /// Pick a guess when at least two candidates remain
    ///
    /// # Errors
    /// Returns `WordleError::ExhaustedCandidates` when nothing in the lexicon
    /// satisfies the history.
    fn choose(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError>;

    /// Up to `top_k` ranked guesses, best first
    ///
    /// # Errors
    /// Returns `WordleError::ExhaustedCandidates` when nothing in the lexicon
    /// satisfies the history.
    fn rank(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError>;

    /// Next guess for the current state
    ///
    /// An empty candidate set is an error for every strategy. A single
    /// remaining candidate is guessed directly.
    ///
    /// # Errors
    /// Returns `WordleError::ExhaustedCandidates` when no secret fits.
    fn next_guess(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        if candidates.is_empty() {
            return Err(WordleError::ExhaustedCandidates);
        }
        if let Some(secret) = candidates.single() {
            return Ok(Guess::forced(engine, secret));
        }
        self.choose(engine, candidates, history)
    }

    /// Ranked suggestions for the current state
    ///
    /// # Errors
    /// Returns `WordleError::ExhaustedCandidates` when no secret fits.
    fn suggestions(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        if candidates.is_empty() {
            return Err(WordleError::ExhaustedCandidates);
        }
        if top_k == 0 {
            return Ok(Vec::new());
        }
        self.rank(engine, candidates, history, top_k)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum SolverStrategy {
    /// First constraint-satisfying word in trie order
    Dfs(DfsSolver),
    /// Positional letter frequency over the candidates
    HillClimbing(HillClimbingSolver),
    /// Trie climb by guess-list letter frequency
    StaticHillClimbing(StaticHillClimbingSolver),
    /// Entropy over the whole guess list
    FullEntropy(FullEntropySolver),
    /// Entropy over a seeded sample of the guess list
    ProgressiveEntropy(ProgressiveEntropySolver),
}

impl SolverStrategy {
    /// Canonical names accepted by [`SolverStrategy::from_name`]
    pub const NAMES: [&'static str; 5] = [
        DfsSolver::NAME,
        HillClimbingSolver::NAME,
        StaticHillClimbingSolver::NAME,
        FullEntropySolver::NAME,
        ProgressiveEntropySolver::NAME,
    ];

    /// Create strategy from name string
    ///
    /// Matching ignores case and treats `_` like `-`. Besides the canonical
    /// names, `hill`, `greedy`, `static-hill`, `entropy` and `progressive`
    /// are accepted.
    /// `seed` only affects the progressive entropy sampler.
    ///
    /// # Errors
    /// Returns `WordleError::UnknownStrategy` for any other name.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::solver::{SolverStrategy, Strategy};
    ///
    /// let strategy = SolverStrategy::from_name("Full_Entropy", 0).unwrap();
    /// assert_eq!(strategy.name(), "full-entropy");
    /// assert!(SolverStrategy::from_name("minimax", 0).is_err());
    /// ```
    pub fn from_name(name: &str, seed: u64) -> Result<Self, WordleError> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "dfs" | "depth-first" => Ok(Self::Dfs(DfsSolver)),
            "hill-climbing" | "hillclimbing" | "hill" | "greedy" => {
                Ok(Self::HillClimbing(HillClimbingSolver))
            }
            "static-hill-climbing" | "static-hill" | "static" => {
                Ok(Self::StaticHillClimbing(StaticHillClimbingSolver))
            }
            "full-entropy" | "entropy" => Ok(Self::FullEntropy(FullEntropySolver)),
            "progressive-entropy" | "progressive" => Ok(Self::ProgressiveEntropy(
                ProgressiveEntropySolver::with_seed(seed),
            )),
            _ => Err(WordleError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }
}

impl SolverStrategy {
    /// Seed driving the sampler, for strategies that sample
    #[must_use]
    pub const fn sampler_seed(&self) -> Option<u64> {
        match self {
            Self::ProgressiveEntropy(s) => Some(s.seed()),
            Self::Dfs(_) | Self::HillClimbing(_) | Self::StaticHillClimbing(_) | Self::FullEntropy(_) => None,
        }
    }
}

impl Strategy for SolverStrategy {
    fn name(&self) -> &'static str {
        match self {
            Self::Dfs(s) => s.name(),
            Self::HillClimbing(s) => s.name(),
            Self::StaticHillClimbing(s) => s.name(),
            Self::FullEntropy(s) => s.name(),
            Self::ProgressiveEntropy(s) => s.name(),
        }
    }

    fn choose(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        match self {
            Self::Dfs(s) => s.choose(engine, candidates, history),
            Self::HillClimbing(s) => s.choose(engine, candidates, history),
            Self::StaticHillClimbing(s) => s.choose(engine, candidates, history),
            Self::FullEntropy(s) => s.choose(engine, candidates, history),
            Self::ProgressiveEntropy(s) => s.choose(engine, candidates, history),
        }
    }

    fn rank(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        match self {
            Self::Dfs(s) => s.rank(engine, candidates, history, top_k),
            Self::HillClimbing(s) => s.rank(engine, candidates, history, top_k),
            Self::StaticHillClimbing(s) => s.rank(engine, candidates, history, top_k),
            Self::FullEntropy(s) => s.rank(engine, candidates, history, top_k),
            Self::ProgressiveEntropy(s) => s.rank(engine, candidates, history, top_k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, loader::words_from_slice};

    fn engine() -> Engine {
        Engine::new(
            Lexicon::new(
                words_from_slice(&["crane", "slate"]),
                words_from_slice(&["abide", "apple", "erase"]),
            )
            .unwrap(),
        )
    }

    #[test]
    fn registry_resolves_every_canonical_name() {
        for name in SolverStrategy::NAMES {
            assert_eq!(SolverStrategy::from_name(name, 7).unwrap().name(), name);
        }
        assert_eq!(SolverStrategy::from_name("greedy", 0).unwrap().name(), "hill-climbing");
        assert_eq!(
            SolverStrategy::from_name("Static_Hill", 0).unwrap().name(),
            "static-hill-climbing"
        );
        assert_eq!(SolverStrategy::from_name("ENTROPY", 0).unwrap().name(), "full-entropy");
    }

    #[test]
    fn only_the_sampler_reports_a_seed() {
        assert_eq!(
            SolverStrategy::from_name("progressive", 42).unwrap().sampler_seed(),
            Some(42)
        );
        assert_eq!(SolverStrategy::from_name("dfs", 42).unwrap().sampler_seed(), None);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            SolverStrategy::from_name("minimax", 0).unwrap_err(),
            WordleError::UnknownStrategy {
                name: "minimax".to_string()
            }
        );
    }

    #[test]
    fn empty_candidates_fail_for_every_strategy() {
        let engine = engine();
        let empty = CandidateSet::from_indices([]);
        for name in SolverStrategy::NAMES {
            let strategy = SolverStrategy::from_name(name, 0).unwrap();
            assert_eq!(
                strategy.next_guess(&engine, &empty, &[]),
                Err(WordleError::ExhaustedCandidates),
                "{name}"
            );
            assert!(strategy.suggestions(&engine, &empty, &[], 3).is_err());
        }
    }

    #[test]
    fn single_candidate_is_guessed_directly() {
        let engine = engine();
        let apple = engine.lexicon().secret_index(&Word::new("apple").unwrap()).unwrap();
        let only = CandidateSet::from_indices([apple]);
        for name in SolverStrategy::NAMES {
            let strategy = SolverStrategy::from_name(name, 0).unwrap();
            let guess = strategy.next_guess(&engine, &only, &[]).unwrap();
            assert_eq!(guess.word.text(), "apple", "{name}");
        }
    }
}
