//! Session configuration

use crate::core::{Word, WordleError};
use crate::solver::FullEntropySolver;
use std::fmt;
use std::str::FromStr;

/// Attempts allowed in a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Which secret a session hides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretChoice {
    Word(Word),
    /// Drawn from the secret list with the session seed
    Random,
}

impl FromStr for SecretChoice {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else {
            Word::new(s).map(Self::Word)
        }
    }
}

/// Bound on the number of guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLimit {
    Limited(usize),
    /// The session ends only by winning or by abort
    Unlimited,
}

impl Default for AttemptLimit {
    fn default() -> Self {
        Self::Limited(DEFAULT_MAX_ATTEMPTS)
    }
}

impl AttemptLimit {
    /// True once `used` attempts exhaust the limit
    #[must_use]
    pub const fn is_exhausted(self, used: usize) -> bool {
        match self {
            Self::Limited(max) => used >= max,
            Self::Unlimited => false,
        }
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(max) => write!(f, "{max}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Rejected `--max-attempts` value
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid attempt limit {input:?}: expected a positive integer or \"unlimited\"")]
pub struct InvalidAttemptLimit {
    input: String,
}

impl FromStr for AttemptLimit {
    type Err = InvalidAttemptLimit;

    /// Parse `"unlimited"` or a positive integer
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::game::AttemptLimit;
    ///
    /// assert_eq!("6".parse(), Ok(AttemptLimit::Limited(6)));
    /// assert_eq!("Unlimited".parse(), Ok(AttemptLimit::Unlimited));
    /// assert!("0".parse::<AttemptLimit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(Self::Unlimited);
        }
        match s.parse::<usize>() {
            Ok(max) if max > 0 => Ok(Self::Limited(max)),
            _ => Err(InvalidAttemptLimit { input: s.to_string() }),
        }
    }
}

/// Everything needed to start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: SecretChoice,
    /// Strategy registry name, see [`crate::solver::SolverStrategy::from_name`]
    pub strategy: String,
    pub max_attempts: AttemptLimit,
    /// Seeds random secret selection and progressive sampling
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: SecretChoice::Random,
            strategy: FullEntropySolver::NAME.to_string(),
            max_attempts: AttemptLimit::default(),
            seed: 0,
        }
    }
}

impl SessionConfig {
    /// Default configuration with a fixed secret
    #[must_use]
    pub fn with_secret(secret: Word) -> Self {
        Self {
            secret: SecretChoice::Word(secret),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn strategy(mut self, name: impl Into<String>) -> Self {
        self.strategy = name.into();
        self
    }

    #[must_use]
    pub const fn max_attempts(mut self, limit: AttemptLimit) -> Self {
        self.max_attempts = limit;
        self
    }

    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
