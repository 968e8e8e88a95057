//! Core domain types for Wordle
//!
//! Words, feedback patterns and the error type shared by every other module.
//! Everything here is pure and cheap to copy.

mod attempt;
mod error;
mod pattern;
mod word;

pub use attempt::Attempt;
pub use error::WordleError;
pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{ALPHABET_LEN, WORD_LEN, Word};
