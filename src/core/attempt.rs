//! One played turn

use super::{Pattern, Word};

/// A guess together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub guess: Word,
    pub pattern: Pattern,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }
}
