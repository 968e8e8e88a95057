//! Benchmark command
//!
//! Plays a strategy against a list of secrets and summarises the attempts.

use crate::core::{Word, WordleError};
use crate::game::{AttemptLimit, SessionConfig};
use crate::solver::{Engine, SolverStrategy, Strategy};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Attempts used → number of games
    pub distribution: FxHashMap<usize, usize>,
    /// Secrets not found within the attempt limit
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run one strategy against every word in `secrets`
///
/// Lost games count with the attempts they used. Pass
/// `AttemptLimit::Unlimited` to measure attempts-to-win.
///
/// # Errors
///
/// Returns an error if a secret is not in the engine's secret list or a
/// strategy runs out of consistent words.
pub fn run_benchmark(
    engine: &Engine,
    strategy: &SolverStrategy,
    secrets: &[Word],
    limit: AttemptLimit,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, WordleError> {
    let start = Instant::now();

    let games = secrets
        .par_iter()
        .map(|&secret| {
            let config = SessionConfig::with_secret(secret).max_attempts(limit);
            let mut session = engine.start_session_with(&config, strategy.clone())?;
            session.play_out()?;
            progress.inc(1);
            Ok((secret, session.attempts_used(), session.status().is_won()))
        })
        .collect::<Result<Vec<_>, WordleError>>()?;

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for (secret, guesses, won) in games {
        if !won {
            failures.push(secret);
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = secrets.len();

    Ok(BenchmarkResult {
        strategy: strategy.name(),
        total_words,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::MIN_POSITIVE),
    })
}

/// Benchmark every registered strategy on the same secrets
///
/// # Errors
///
/// Propagates the first error from [`run_benchmark`].
pub fn compare_strategies(
    engine: &Engine,
    seed: u64,
    secrets: &[Word],
    limit: AttemptLimit,
    progress: &ProgressBar,
) -> Result<Vec<BenchmarkResult>, WordleError> {
    SolverStrategy::NAMES
        .iter()
        .map(|name| {
            let strategy = SolverStrategy::from_name(name, seed)?;
            run_benchmark(engine, &strategy, secrets, limit, progress)
        })
        .collect()
}
