//! Game sessions
//!
//! A [`GameSession`] hides one secret and advances turn by turn, either by
//! asking its strategy ([`GameSession::step`]) or by accepting a player's
//! word ([`GameSession::submit_player_guess`]). Sessions are created with
//! [`Engine::start_session`](crate::solver::Engine::start_session).

mod config;
mod session;

pub use config::{AttemptLimit, DEFAULT_MAX_ATTEMPTS, InvalidAttemptLimit, SecretChoice, SessionConfig};
pub use session::{GameSession, GameStatus, SessionState, StepReport, TurnOutcome};
