//! One game from first guess to win or loss

use super::{AttemptLimit, SecretChoice, SessionConfig};
use crate::core::{Attempt, Pattern, Word, WordleError};
use crate::solver::{CandidateSet, Engine, SolverStrategy, Strategy, Suggestion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Lifecycle of a session; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("won")]
    Won,
    #[display("lost")]
    Lost,
}

/// What one AI turn did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub guess: Word,
    pub pattern: Pattern,
    pub status: GameStatus,
    pub candidates_remaining: usize,
    pub nodes_visited: Option<usize>,
    /// Strategy score of the guess, if it reports one
    pub score: Option<f64>,
}

/// Result of a player guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub pattern: Pattern,
    pub status: GameStatus,
}

/// Snapshot of a session for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub history: Vec<Attempt>,
    pub status: GameStatus,
    pub candidates_remaining: usize,
}

/// A single game against one hidden secret
///
/// Borrows the engine; the history and candidate set are owned here and only
/// change on a successful turn.
#[derive(Debug, Clone)]
pub struct GameSession<'e> {
    engine: &'e Engine,
    strategy: SolverStrategy,
    secret: usize,
    max_attempts: AttemptLimit,
    history: Vec<Attempt>,
    candidates: CandidateSet,
    status: GameStatus,
}

impl Engine {
    /// Start a session
    ///
    /// # Errors
    /// - `WordleError::UnknownStrategy` if the strategy name is not registered
    /// - `WordleError::InvalidWord` if a fixed secret is not in the secret list
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    /// use wordle_trie::game::{AttemptLimit, SessionConfig};
    /// use wordle_trie::lexicon::{Lexicon, loader::words_from_slice};
    /// use wordle_trie::solver::Engine;
    ///
    /// let words = words_from_slice(&["about", "actor", "adult", "apple", "arise", "crane"]);
    /// let engine = Engine::new(Lexicon::new(words.clone(), words).unwrap());
    ///
    /// let config = SessionConfig::with_secret(Word::new("apple").unwrap())
    ///     .strategy("dfs")
    ///     .max_attempts(AttemptLimit::Limited(6));
    /// let mut session = engine.start_session(&config).unwrap();
    ///
    /// while session.status().is_in_progress() {
    ///     session.step().unwrap();
    /// }
    /// assert!(session.status().is_won());
    /// ```
    pub fn start_session(&self, config: &SessionConfig) -> Result<GameSession<'_>, WordleError> {
        let strategy = SolverStrategy::from_name(&config.strategy, config.seed)?;
        self.start_session_with(config, strategy)
    }

    /// Start a session with an already-built strategy
    ///
    /// `config.strategy` is ignored.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` if a fixed secret is not in the
    /// secret list.
    pub fn start_session_with(
        &self,
        config: &SessionConfig,
        strategy: SolverStrategy,
    ) -> Result<GameSession<'_>, WordleError> {
        let lexicon = self.lexicon();
        let secret = match config.secret {
            SecretChoice::Word(word) => lexicon
                .secret_index(&word)
                .ok_or_else(|| WordleError::InvalidWord {
                    word: word.to_string(),
                })?,
            SecretChoice::Random => {
                let mut rng = Pcg32::seed_from_u64(config.seed);
                rng.random_range(0..lexicon.secrets().len())
            }
        };

        Ok(GameSession {
            engine: self,
            strategy,
            secret,
            max_attempts: config.max_attempts,
            history: Vec::new(),
            candidates: CandidateSet::all(lexicon),
            status: GameStatus::InProgress,
        })
    }
}

impl<'e> GameSession<'e> {
    /// Let the strategy play one turn
    ///
    /// # Errors
    /// - `WordleError::GameOver` if the session already ended
    /// - `WordleError::ExhaustedCandidates` if the strategy finds nothing to play
    pub fn step(&mut self) -> Result<StepReport, WordleError> {
        self.ensure_in_progress()?;
        let guess = self
            .strategy
            .next_guess(self.engine, &self.candidates, &self.history)?;
        let pattern = self.apply(guess.index);
        Ok(StepReport {
            guess: guess.word,
            pattern,
            status: self.status,
            candidates_remaining: self.candidates.len(),
            nodes_visited: guess.nodes_visited,
            score: guess.score,
        })
    }

    /// Play a guess typed by a person
    ///
    /// Rejected guesses consume no attempt and leave the session untouched.
    ///
    /// # Errors
    /// - `WordleError::GameOver` if the session already ended
    /// - `WordleError::InvalidLength` / `InvalidCharacters` for malformed input
    /// - `WordleError::InvalidWord` if the word is not an allowed guess
    pub fn submit_player_guess(&mut self, input: &str) -> Result<TurnOutcome, WordleError> {
        self.ensure_in_progress()?;
        let word = Word::new(input)?;
        let index = self
            .engine
            .lexicon()
            .guess_index(&word)
            .ok_or_else(|| WordleError::InvalidWord {
                word: word.to_string(),
            })?;
        let pattern = self.apply(index);
        Ok(TurnOutcome {
            pattern,
            status: self.status,
        })
    }

    /// Ranked guesses from the session's strategy
    ///
    /// # Errors
    /// - `WordleError::GameOver` if the session already ended
    /// - `WordleError::ExhaustedCandidates` if nothing fits the history
    pub fn suggestions(&self, top_k: usize) -> Result<Vec<Suggestion>, WordleError> {
        self.ensure_in_progress()?;
        self.strategy
            .suggestions(self.engine, &self.candidates, &self.history, top_k)
    }

    /// Snapshot of history, status and candidate count
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            history: self.history.clone(),
            status: self.status,
            candidates_remaining: self.candidates.len(),
        }
    }

    /// End an in-progress session as lost
    pub fn abort(&mut self) -> GameStatus {
        if self.status.is_in_progress() {
            self.status = GameStatus::Lost;
        }
        self.status
    }

    /// Step until the game ends
    ///
    /// # Errors
    /// Propagates the first error from [`GameSession::step`].
    pub fn play_out(&mut self) -> Result<Vec<StepReport>, WordleError> {
        let mut reports = Vec::new();
        while self.status.is_in_progress() {
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> AttemptLimit {
        self.max_attempts
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[must_use]
    pub const fn strategy(&self) -> &SolverStrategy {
        &self.strategy
    }

    #[must_use]
    pub const fn engine(&self) -> &'e Engine {
        self.engine
    }

    /// The hidden word; callers decide when to reveal it
    #[must_use]
    pub fn secret(&self) -> Word {
        self.engine.lexicon().secret(self.secret)
    }

    const fn ensure_in_progress(&self) -> Result<(), WordleError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won | GameStatus::Lost => Err(WordleError::GameOver),
        }
    }

    fn apply(&mut self, guess: usize) -> Pattern {
        let patterns = self.engine.patterns();
        let pattern = patterns.pattern(guess, self.secret);

        self.history
            .push(Attempt::new(self.engine.lexicon().guess(guess), pattern));
        self.candidates = self.candidates.filter(&patterns, guess, pattern);

        self.status = if pattern.is_perfect() {
            GameStatus::Won
        } else if self.max_attempts.is_exhausted(self.history.len()) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, loader::words_from_slice};

    const WORDS: [&str; 6] = ["about", "actor", "adult", "apple", "arise", "crane"];

    fn engine() -> Engine {
        let words = words_from_slice(&WORDS);
        Engine::new(Lexicon::new(words.clone(), words).unwrap())
    }

    fn config(secret: &str, strategy: &str) -> SessionConfig {
        SessionConfig::with_secret(Word::new(secret).unwrap()).strategy(strategy)
    }

    #[test]
    fn dfs_finds_apple_deterministically() {
        let engine = engine();
        for _ in 0..2 {
            let mut session = engine.start_session(&config("apple", "dfs")).unwrap();
            let reports = session.play_out().unwrap();
            let guesses: Vec<_> = reports.iter().map(|r| r.guess.text().to_string()).collect();
            assert_eq!(guesses, ["about", "apple"]);
            assert!(session.status().is_won());
            assert!(reports.iter().all(|r| r.nodes_visited.is_some()));
            assert_eq!(reports[1].candidates_remaining, 1);
        }
    }

    #[test]
    fn every_strategy_wins_every_secret() {
        let engine = engine();
        for name in SolverStrategy::NAMES {
            for secret in WORDS {
                let mut session = engine.start_session(&config(secret, name)).unwrap();
                session.play_out().unwrap();
                assert!(session.status().is_won(), "{name} on {secret}");
                assert!(session.attempts_used() <= 6, "{name} on {secret}");
                assert_eq!(session.history().last().unwrap().guess.text(), secret);
            }
        }
    }

    #[test]
    fn invalid_guesses_change_nothing() {
        let engine = engine();
        let mut session = engine.start_session(&config("apple", "dfs")).unwrap();
        let before = session.state();

        assert_eq!(
            session.submit_player_guess("zzzzz"),
            Err(WordleError::InvalidWord {
                word: "zzzzz".to_string()
            })
        );
        assert_eq!(
            session.submit_player_guess("app"),
            Err(WordleError::InvalidLength { len: 3 })
        );
        assert_eq!(session.submit_player_guess("app1e"), Err(WordleError::InvalidCharacters));
        assert_eq!(session.state(), before);
    }

    #[test]
    fn player_guess_updates_state() {
        let engine = engine();
        let mut session = engine.start_session(&config("apple", "dfs")).unwrap();

        let outcome = session.submit_player_guess("CRANE").unwrap();
        assert_eq!(outcome.pattern, Pattern::compute("crane", "apple").unwrap());
        assert_eq!(outcome.status, GameStatus::InProgress);

        let state = session.state();
        assert_eq!(state.history.len(), 1);
        assert!(state.candidates_remaining < WORDS.len());
        assert!(session.candidates().contains(3));

        let outcome = session.submit_player_guess("apple").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(session.submit_player_guess("apple"), Err(WordleError::GameOver));
        assert!(matches!(session.step(), Err(WordleError::GameOver)));
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let engine = engine();
        let config = config("apple", "dfs").max_attempts(AttemptLimit::Limited(2));
        let mut session = engine.start_session(&config).unwrap();

        assert_eq!(session.submit_player_guess("crane").unwrap().status, GameStatus::InProgress);
        assert_eq!(session.submit_player_guess("about").unwrap().status, GameStatus::Lost);
        assert!(session.suggestions(3).is_err());
    }

    #[test]
    fn unlimited_sessions_only_end_by_win_or_abort() {
        let engine = engine();
        let config = config("apple", "dfs").max_attempts(AttemptLimit::Unlimited);
        let mut session = engine.start_session(&config).unwrap();

        for _ in 0..50 {
            assert_eq!(session.submit_player_guess("crane").unwrap().status, GameStatus::InProgress);
        }
        assert_eq!(session.abort(), GameStatus::Lost);
        assert_eq!(session.abort(), GameStatus::Lost);
        assert_eq!(session.submit_player_guess("apple"), Err(WordleError::GameOver));
    }

    #[test]
    fn abort_keeps_a_win() {
        let engine = engine();
        let mut session = engine.start_session(&config("crane", "full-entropy")).unwrap();
        session.play_out().unwrap();
        assert_eq!(session.abort(), GameStatus::Won);
    }

    #[test]
    fn random_secret_follows_seed() {
        let engine = engine();
        let pick = |seed| {
            let config = SessionConfig::default().seed(seed);
            engine.start_session(&config).unwrap().secret()
        };
        assert_eq!(pick(17), pick(17));
        assert!(WORDS.contains(&pick(3).text()));
    }

    #[test]
    fn start_rejects_bad_config() {
        let engine = engine();
        assert!(matches!(
            engine.start_session(&config("apple", "minimax")),
            Err(WordleError::UnknownStrategy { .. })
        ));
        assert!(matches!(
            engine.start_session(&config("slate", "dfs")),
            Err(WordleError::InvalidWord { .. })
        ));
    }

    #[test]
    fn custom_strategy_instances_are_used() {
        use crate::solver::ProgressiveEntropySolver;

        let engine = engine();
        let strategy = SolverStrategy::ProgressiveEntropy(ProgressiveEntropySolver::new(2, 11));
        let mut session = engine
            .start_session_with(
                &config("arise", "ignored").max_attempts(AttemptLimit::Unlimited),
                strategy,
            )
            .unwrap();
        assert_eq!(session.strategy_name(), "progressive-entropy");
        session.play_out().unwrap();
        assert!(session.status().is_won());
    }

    #[test]
    fn suggestions_come_from_the_strategy() {
        let engine = engine();
        let session = engine.start_session(&config("apple", "hill-climbing")).unwrap();
        let ranked = session.suggestions(3).unwrap();
        assert!(!ranked.is_empty() && ranked.len() <= 3);
        assert_eq!(session.attempts_used(), 0, "suggestions do not play");
    }
}
