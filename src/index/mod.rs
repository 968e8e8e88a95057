//! Precomputed, read-only indexes over the lexicon
//!
//! - [`Trie`]: prefix tree over the guess list, walked by the DFS strategy
//! - [`PatternMatrix`]: every (guess, secret) feedback pattern, built once
//! - [`PatternSource`]: matrix lookups with on-the-fly fallback
//!
//! Both structures are immutable after construction and safe to share across
//! sessions by reference.

mod matrix;
mod source;
mod store;
mod trie;

pub use matrix::PatternMatrix;
pub use source::PatternSource;
pub use store::{MatrixStoreError, load_or_build};
pub use trie::{NodeId, Trie, WordsWithPrefix};
