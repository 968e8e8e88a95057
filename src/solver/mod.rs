//! Wordle solving algorithms
//!
//! The [`Engine`] holds the shared read-only indexes. Each turn a strategy
//! looks at the [`CandidateSet`] and history and returns a [`Guess`]:
//!
//! - [`DfsSolver`]: first constraint-satisfying word in trie order
//! - [`HillClimbingSolver`]: greedy positional letter frequency
//! - [`StaticHillClimbingSolver`]: trie climb by guess-list letter frequency
//! - [`FullEntropySolver`]: maximum entropy over every guess
//! - [`ProgressiveEntropySolver`]: maximum entropy over a seeded sample

mod candidates;
mod constraints;
pub mod dfs;
mod engine;
pub mod entropy;
pub mod hill_climbing;
mod strategy;

pub use candidates::CandidateSet;
pub use constraints::ConstraintSet;
pub use dfs::{ConstrainedWalk, DfsSolver, LetterOrder};
pub use engine::Engine;
pub use entropy::{FullEntropySolver, GuessMetrics, ProgressiveEntropySolver};
pub use hill_climbing::{HillClimbingSolver, StaticHillClimbingSolver};
pub use strategy::{Guess, SolverStrategy, Strategy, Suggestion};
