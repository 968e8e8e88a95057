//! Entropy maximisation over a seeded sample of the guess list
//!
//! The sample starts at `base_samples` guesses and doubles every turn, so late
//! turns (few candidates, cheap scoring) end up evaluating the whole list. The
//! generator for a turn is seeded from the solver seed and the turn number,
//! which makes every choice a pure function of its inputs.

use super::{rank_guesses, score_guesses, select_best_guess, to_guess, to_suggestions};
use crate::core::{Attempt, WordleError};
use crate::solver::{CandidateSet, Engine, Guess, Strategy, Suggestion};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Sample size on the first turn
pub const DEFAULT_BASE_SAMPLES: usize = 400;

/// Odd constant spreading consecutive turn numbers across the seed space
const TURN_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressiveEntropySolver {
    base_samples: usize,
    seed: u64,
}

impl Default for ProgressiveEntropySolver {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl ProgressiveEntropySolver {
    pub const NAME: &'static str = "progressive-entropy";

    /// Create a solver sampling `base_samples` guesses on the first turn
    ///
    /// A base of zero is treated as one.
    #[must_use]
    pub const fn new(base_samples: usize, seed: u64) -> Self {
        Self { base_samples, seed }
    }

    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self::new(DEFAULT_BASE_SAMPLES, seed)
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Guesses evaluated on `turn` (0-based) out of a pool of `pool`
    #[must_use]
    pub fn sample_size(&self, turn: usize, pool: usize) -> usize {
        let growth = 1usize.checked_shl(turn as u32).unwrap_or(usize::MAX);
        self.base_samples.max(1).saturating_mul(growth).min(pool)
    }

    /// Sorted guess indices drawn without replacement for `turn`
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::solver::ProgressiveEntropySolver;
    ///
    /// let solver = ProgressiveEntropySolver::new(10, 42);
    /// let sample = solver.sample(0, 100);
    /// assert_eq!(sample.len(), 10);
    /// assert_eq!(sample, solver.sample(0, 100));
    /// assert_eq!(solver.sample(4, 100), (0..100).collect::<Vec<_>>());
    /// ```
    #[must_use]
    pub fn sample(&self, turn: usize, pool: usize) -> Vec<usize> {
        let amount = self.sample_size(turn, pool);
        if amount == pool {
            return (0..pool).collect();
        }
        let mut rng = Pcg32::seed_from_u64(self.seed ^ (turn as u64 + 1).wrapping_mul(TURN_MIX));
        let mut picked = rand::seq::index::sample(&mut rng, pool, amount).into_vec();
        picked.sort_unstable();
        picked
    }

    fn pool(&self, engine: &Engine, history: &[Attempt]) -> Vec<usize> {
        self.sample(history.len(), engine.lexicon().guesses().len())
    }
}

impl Strategy for ProgressiveEntropySolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        let patterns = engine.patterns();
        let scored = score_guesses(&patterns, &self.pool(engine, history), candidates);
        to_guess(engine, select_best_guess(&patterns, &scored))
    }

    fn rank(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        let patterns = engine.patterns();
        let scored = score_guesses(&patterns, &self.pool(engine, history), candidates);
        Ok(to_suggestions(engine, rank_guesses(&patterns, scored, top_k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::FullEntropySolver;

    fn engine() -> Engine {
        let words = crate::lexicon::loader::words_from_slice(&[
            "about", "actor", "adult", "apple", "arise", "crane", "slate", "grate", "irate", "trace",
            "abide", "erase", "floor", "robot", "speed", "stare",
        ]);
        Engine::new(Lexicon::new(words.clone(), words).unwrap())
    }

    #[test]
    fn sample_grows_each_turn() {
        let solver = ProgressiveEntropySolver::new(3, 0);
        assert_eq!(solver.sample_size(0, 100), 3);
        assert_eq!(solver.sample_size(1, 100), 6);
        assert_eq!(solver.sample_size(2, 100), 12);
        assert_eq!(solver.sample_size(10, 100), 100);
        assert_eq!(solver.sample_size(200, 100), 100);
        assert_eq!(ProgressiveEntropySolver::new(0, 0).sample_size(0, 100), 1);
    }

    #[test]
    fn sample_is_distinct_and_in_range() {
        let sample = ProgressiveEntropySolver::new(50, 9).sample(0, 80);
        assert_eq!(sample.len(), 50);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|&i| i < 80));
    }

    #[test]
    fn same_seed_same_guess() {
        let engine = engine();
        let all = CandidateSet::all(engine.lexicon());
        let a = ProgressiveEntropySolver::new(4, 1234);
        let b = ProgressiveEntropySolver::new(4, 1234);
        assert_eq!(
            a.next_guess(&engine, &all, &[]).unwrap(),
            b.next_guess(&engine, &all, &[]).unwrap()
        );
        assert_eq!(
            a.suggestions(&engine, &all, &[], 4).unwrap(),
            b.suggestions(&engine, &all, &[], 4).unwrap()
        );
    }

    #[test]
    fn full_sample_matches_full_entropy() {
        let engine = engine();
        let all = CandidateSet::all(engine.lexicon());
        let progressive = ProgressiveEntropySolver::new(usize::MAX, 5);
        assert_eq!(
            progressive.next_guess(&engine, &all, &[]).unwrap(),
            FullEntropySolver.next_guess(&engine, &all, &[]).unwrap()
        );
    }
}
