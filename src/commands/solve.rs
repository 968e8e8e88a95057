//! Word solving command
//!
//! Lets a strategy play against a known secret and records every turn.

use crate::core::{Word, WordleError};
use crate::game::{GameStatus, SessionConfig, StepReport};
use crate::solver::Engine;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub strategy: &'static str,
    /// Seed of the sampling strategy, if it samples
    pub sampler_seed: Option<u64>,
    pub steps: Vec<SolveStep>,
    pub status: GameStatus,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub report: StepReport,
    pub candidates_before: usize,
    /// Partition metrics of the guess over the candidates it faced
    pub metrics: Option<GuessMetrics>,
}

/// Solve the secret named in `config`
///
/// # Errors
///
/// Returns an error if:
/// - the strategy name is unknown or the secret is not in the secret list
/// - the strategy runs out of consistent words
pub fn solve_word(engine: &Engine, config: &SessionConfig) -> Result<SolveResult, WordleError> {
    let mut session = engine.start_session(config)?;
    let patterns = engine.patterns();
    let mut steps = Vec::new();

    while session.status().is_in_progress() {
        let before = session.candidates().clone();
        let report = session.step()?;
        let metrics = engine
            .lexicon()
            .guess_index(&report.guess)
            .filter(|_| before.len() > 1)
            .map(|guess| calculate_metrics(&patterns, guess, &before));

        steps.push(SolveStep {
            report,
            candidates_before: before.len(),
            metrics,
        });
    }

    Ok(SolveResult {
        target: session.secret(),
        strategy: session.strategy_name(),
        sampler_seed: session.strategy().sampler_seed(),
        steps,
        status: session.status(),
    })
}
