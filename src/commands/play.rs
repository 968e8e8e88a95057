//! Human play against a hidden secret
//!
//! Reads guesses line by line; `hint` asks the session's strategy for ideas
//! and `quit` gives up and reveals the word.

use crate::core::WordleError;
use crate::game::{AttemptLimit, GameSession, GameStatus};
use crate::output::display::write_suggestions;
use crate::output::formatters::colored_tiles;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const HINT_COUNT: usize = 5;

/// Run one game, returning how it ended
///
/// End of input counts as giving up.
///
/// # Errors
///
/// Returns an error on I/O failure or if the strategy cannot produce hints.
pub fn run_play<R: BufRead, W: Write>(session: &mut GameSession<'_>, mut input: R, mut out: W) -> Result<GameStatus> {
    writeln!(out, "\n{}", "Wordle".bright_green().bold())?;
    writeln!(
        out,
        "Guess the five-letter word. Attempts: {}. Type 'hint' for suggestions, 'quit' to give up.\n",
        session.max_attempts()
    )?;

    while session.status().is_in_progress() {
        let turn = session.attempts_used() + 1;
        match session.max_attempts() {
            AttemptLimit::Limited(max) => write!(out, "Guess {turn}/{max}: ")?,
            AttemptLimit::Unlimited => write!(out, "Guess {turn}: ")?,
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            session.abort();
            break;
        }
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                session.abort();
            }
            "hint" | "h" => {
                let suggestions = session.suggestions(HINT_COUNT)?;
                writeln!(
                    out,
                    "{} candidates remain; {} suggests:",
                    session.candidates().len(),
                    session.strategy_name()
                )?;
                write_suggestions(&mut out, &suggestions)?;
            }
            guess => match session.submit_player_guess(guess) {
                Ok(outcome) => {
                    let played = session.history()[session.attempts_used() - 1].guess;
                    writeln!(out, "  {}", colored_tiles(&played, outcome.pattern))?;
                }
                Err(
                    e @ (WordleError::InvalidWord { .. }
                    | WordleError::InvalidLength { .. }
                    | WordleError::InvalidCharacters),
                ) => {
                    writeln!(out, "{} {e}", "✗".red())?;
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    match session.status() {
        GameStatus::Won => writeln!(
            out,
            "\n{} Solved in {} {}",
            "✓".green().bold(),
            session.attempts_used(),
            if session.attempts_used() == 1 { "guess" } else { "guesses" }
        )?,
        GameStatus::Lost | GameStatus::InProgress => writeln!(
            out,
            "\n{} The word was {}",
            "✗".red().bold(),
            session.secret().text().to_uppercase().bright_yellow().bold()
        )?,
    }
    Ok(session.status())
}
