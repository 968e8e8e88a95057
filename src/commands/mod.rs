//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod build_matrix;
pub mod play;
pub mod solve;
pub mod timing;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, compare_strategies, run_benchmark};
pub use build_matrix::{MatrixSummary, build_matrix};
pub use play::run_play;
pub use solve::{SolveResult, SolveStep, solve_word};
pub use timing::{
    DEFAULT_LOOKUP_PAIRS, LookupTiming, SourceComparison, compare_pattern_sources,
    time_pattern_lookups,
};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar in the style shared by long-running commands
#[must_use]
pub fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    ProgressBar::new(len).with_style(style).with_message(message)
}
