//! Entropy-based Wordle solvers
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions and
//! the two strategies built on it: exhaustive scoring of every guess, and
//! scoring of a seeded random sample.

mod calculator;
mod full;
mod progressive;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use full::FullEntropySolver;
pub use progressive::{DEFAULT_BASE_SAMPLES, ProgressiveEntropySolver};
pub use selector::{ScoredGuess, rank_guesses, score_guesses, select_best_guess};

use super::{Engine, Guess, Suggestion};
use crate::core::WordleError;

fn to_guess(engine: &Engine, best: Option<ScoredGuess>) -> Result<Guess, WordleError> {
    let best = best.ok_or(WordleError::ExhaustedCandidates)?;
    Ok(Guess {
        index: best.index,
        word: engine.lexicon().guess(best.index),
        nodes_visited: None,
        score: Some(best.entropy),
    })
}

fn to_suggestions(engine: &Engine, ranked: Vec<ScoredGuess>) -> Vec<Suggestion> {
    ranked
        .into_iter()
        .map(|s| Suggestion {
            word: engine.lexicon().guess(s.index),
            score: s.entropy,
        })
        .collect()
}
