//! Wordle Trie
//!
//! A Wordle guessing engine: a trie over the word list for constrained
//! depth-first search, a precomputed feedback matrix for fast candidate
//! filtering, and interchangeable guessing strategies (DFS, dynamic and
//! static hill climbing, full entropy and sampled entropy).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_trie::core::Word;
//! use wordle_trie::game::SessionConfig;
//! use wordle_trie::lexicon::Lexicon;
//! use wordle_trie::solver::Engine;
//!
//! let engine = Engine::new(Lexicon::embedded().unwrap());
//! let config = SessionConfig::with_secret(Word::new("crane").unwrap()).strategy("full-entropy");
//!
//! let mut session = engine.start_session(&config).unwrap();
//! for report in session.play_out().unwrap() {
//!     println!("{} {}", report.guess, report.pattern.to_emoji());
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod lexicon;

// Trie, pattern matrix and its persistence
pub mod index;

// Solving algorithms
pub mod solver;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
