//! Pattern matrix against on-the-fly feedback
//!
//! Times the same random (guess, secret) pairs through the cached matrix and
//! through `Pattern::calculate`, then plays one benchmark on a matrix-backed
//! engine and one on an engine without a matrix.

use super::benchmark::{BenchmarkResult, run_benchmark};
use crate::core::{Word, WordleError};
use crate::game::AttemptLimit;
use crate::index::PatternSource;
use crate::lexicon::Lexicon;
use crate::solver::{Engine, SolverStrategy};
use indicatif::ProgressBar;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Pairs looked up per source by [`compare_pattern_sources`]
pub const DEFAULT_LOOKUP_PAIRS: usize = 1_000_000;

/// Time spent answering the same lookups from each source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTiming {
    pub pairs: usize,
    pub cached: Duration,
    pub computed: Duration,
}

impl LookupTiming {
    /// How many times faster the matrix answered
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.computed.as_secs_f64() / self.cached.as_secs_f64().max(f64::MIN_POSITIVE)
    }
}

/// Lookup and game timings for both pattern sources
#[derive(Debug, Clone)]
pub struct SourceComparison {
    /// `None` when the engine carried no matrix to time
    pub lookups: Option<LookupTiming>,
    pub cached: BenchmarkResult,
    pub computed: BenchmarkResult,
}

/// `count` seeded (guess index, secret index) pairs
#[must_use]
pub fn random_pairs(lexicon: &Lexicon, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let guesses = lexicon.guesses().len();
    let secrets = lexicon.secrets().len();
    (0..count)
        .map(|_| (rng.random_range(0..guesses), rng.random_range(0..secrets)))
        .collect()
}

fn time_lookups(patterns: &PatternSource<'_>, pairs: &[(usize, usize)]) -> Duration {
    let start = Instant::now();
    let mut sum = 0u64;
    for &(guess, secret) in pairs {
        sum = sum.wrapping_add(u64::from(patterns.pattern(guess, secret).value()));
    }
    black_box(sum);
    start.elapsed()
}

/// Time `pairs` lookups from the engine's matrix and from direct calculation
///
/// Returns `None` if the engine has no matrix.
#[must_use]
pub fn time_pattern_lookups(engine: &Engine, pairs: usize, seed: u64) -> Option<LookupTiming> {
    engine.matrix()?;
    let sample = random_pairs(engine.lexicon(), pairs, seed);
    Some(LookupTiming {
        pairs,
        cached: time_lookups(&engine.patterns(), &sample),
        computed: time_lookups(&PatternSource::computed(engine.lexicon()), &sample),
    })
}

/// Benchmark `strategy` with and without the pattern matrix
///
/// The second run uses a copy of the lexicon and no matrix, so every pattern
/// is calculated when asked for. Both runs see identical feedback.
///
/// # Errors
///
/// Propagates any error from [`run_benchmark`].
pub fn compare_pattern_sources(
    engine: &Engine,
    strategy: &SolverStrategy,
    secrets: &[Word],
    limit: AttemptLimit,
    lookup_pairs: usize,
    seed: u64,
    progress: &ProgressBar,
) -> Result<SourceComparison, WordleError> {
    let lookups = time_pattern_lookups(engine, lookup_pairs, seed);
    let cached = run_benchmark(engine, strategy, secrets, limit, progress)?;
    let plain = Engine::without_matrix(engine.lexicon().clone());
    let computed = run_benchmark(&plain, strategy, secrets, limit, progress)?;
    Ok(SourceComparison {
        lookups,
        cached,
        computed,
    })
}
