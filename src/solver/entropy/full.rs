//! Entropy maximisation over the whole guess list

use super::{rank_guesses, score_guesses, select_best_guess, to_guess, to_suggestions};
use crate::core::{Attempt, WordleError};
use crate::solver::{CandidateSet, Engine, Guess, Strategy, Suggestion};

/// Scores every allowed guess, including ones that cannot be the secret
#[derive(Debug, Clone, Copy, Default)]
pub struct FullEntropySolver;

impl FullEntropySolver {
    pub const NAME: &'static str = "full-entropy";
}

fn whole_pool(engine: &Engine) -> Vec<usize> {
    (0..engine.lexicon().guesses().len()).collect()
}

impl Strategy for FullEntropySolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        _history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        let patterns = engine.patterns();
        let scored = score_guesses(&patterns, &whole_pool(engine), candidates);
        to_guess(engine, select_best_guess(&patterns, &scored))
    }

    fn rank(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        _history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        let patterns = engine.patterns();
        let scored = score_guesses(&patterns, &whole_pool(engine), candidates);
        Ok(to_suggestions(engine, rank_guesses(&patterns, scored, top_k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, loader::words_from_slice};
    use crate::solver::entropy::calculate_entropy;

    fn engine() -> Engine {
        Engine::new(
            Lexicon::new(
                words_from_slice(&["crane", "slate", "zzzzz", "aeros"]),
                words_from_slice(&["abide", "apple", "erase", "floor", "robot", "speed", "crate", "irate"]),
            )
            .unwrap(),
        )
    }

    #[test]
    fn picks_the_maximum_entropy_guess() {
        let engine = engine();
        let all = CandidateSet::all(engine.lexicon());
        let guess = FullEntropySolver.next_guess(&engine, &all, &[]).unwrap();

        let patterns = engine.patterns();
        let best = (0..engine.lexicon().guesses().len())
            .map(|g| calculate_entropy(&patterns, g, &all))
            .fold(0.0, f64::max);
        let score = guess.score.unwrap();
        assert!((score - best).abs() < 1e-9);
        assert!(score <= (all.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn choice_is_deterministic() {
        let engine = engine();
        let all = CandidateSet::all(engine.lexicon());
        let first = FullEntropySolver.next_guess(&engine, &all, &[]).unwrap();
        for _ in 0..5 {
            assert_eq!(FullEntropySolver.next_guess(&engine, &all, &[]).unwrap(), first);
        }
    }

    #[test]
    fn suggestions_start_with_next_guess() {
        let engine = engine();
        let all = CandidateSet::all(engine.lexicon());
        let guess = FullEntropySolver.next_guess(&engine, &all, &[]).unwrap();
        let ranked = FullEntropySolver.suggestions(&engine, &all, &[], 5).unwrap();
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].word, guess.word);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score - 1e-9));
    }
}
