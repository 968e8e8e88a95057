//! Solving assistant for a game played elsewhere
//!
//! Suggests a guess, then reads back the feedback the real game showed. The
//! feedback is typed as `G`/`Y`/`-` (or the coloured squares); a different word
//! than the suggestion can be reported as `<word> <feedback>`.

use crate::core::{Attempt, Pattern, Word};
use crate::output::formatters::colored_tiles;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Engine, SolverStrategy, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidate lists up to this size are printed in full
const LIST_LIMIT: usize = 10;

enum Reply {
    Played(Attempt),
    Undo,
    NewGame,
    Quit,
}

/// Run the assistant until the user quits or input ends
///
/// Returns the number of games solved.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_assist<R: BufRead, W: Write>(
    engine: &Engine,
    strategy: &SolverStrategy,
    mut input: R,
    mut out: W,
) -> Result<usize> {
    writeln!(out, "\n{}", "Wordle assistant".bright_green().bold())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if you got it right!")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    let mut history: Vec<Attempt> = Vec::new();
    let mut solved = 0;

    loop {
        let candidates = engine.candidates(&history);
        let suggestion = match strategy.next_guess(engine, &candidates, &history) {
            Ok(guess) => Some(guess),
            Err(e) => {
                writeln!(out, "\n{} {e}", "✗".red())?;
                writeln!(out, "Your feedback may be incorrect. Type 'undo' to go back, or 'new' to start over.")?;
                None
            }
        };

        if let Some(guess) = &suggestion {
            writeln!(out, "{}", "─".repeat(60))?;
            writeln!(
                out,
                "Turn {}: {} candidates remaining",
                history.len() + 1,
                candidates.len()
            )?;
            writeln!(out, "{}", "─".repeat(60))?;
            writeln!(
                out,
                "Suggested guess: {}",
                guess.word.text().to_uppercase().bright_yellow().bold()
            )?;
            if candidates.len() > 1 {
                let metrics = calculate_metrics(&engine.patterns(), guess.index, &candidates);
                writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
                writeln!(out, "   Expected remain:  {:.1} candidates", metrics.expected_remaining)?;
                writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
            }
            if candidates.len() <= LIST_LIMIT {
                let words: Vec<String> = candidates
                    .words(engine.lexicon())
                    .iter()
                    .map(|w| w.text().to_uppercase())
                    .collect();
                writeln!(out, "   Remaining: {}", words.join(", "))?;
            }
        }

        let feedback = loop {
            write!(out, "Feedback: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break Reply::Quit;
            }
            match parse_feedback(line.trim(), suggestion.map(|g| g.word)) {
                Some(feedback) => break feedback,
                None => writeln!(out, "{} Invalid pattern! Use G/Y/-, 'win', or '<word> <pattern>'", "✗".red())?,
            }
        };

        match feedback {
            Reply::Quit => return Ok(solved),
            Reply::NewGame => history.clear(),
            Reply::Undo => {
                if history.pop().is_none() {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            Reply::Played(attempt) => {
                history.push(attempt);
                writeln!(out, "  {}", colored_tiles(&attempt.guess, attempt.pattern))?;
                if attempt.pattern.is_perfect() {
                    solved += 1;
                    writeln!(
                        out,
                        "\n{} Solved in {} guesses\n",
                        "✓".green().bold(),
                        history.len()
                    )?;
                    history.clear();
                }
            }
        }
    }
}

/// Interpret one line of user input
fn parse_feedback(line: &str, suggested: Option<Word>) -> Option<Reply> {
    let lower = line.to_lowercase();
    match lower.as_str() {
        "quit" | "q" | "exit" => return Some(Reply::Quit),
        "new" | "n" => return Some(Reply::NewGame),
        "undo" | "u" => return Some(Reply::Undo),
        _ => {}
    }

    let (word, pattern_text) = match lower.split_once(char::is_whitespace) {
        Some((word, rest)) => (Word::new(word).ok()?, rest.trim()),
        None => (suggested?, lower.as_str()),
    };
    let pattern = match pattern_text {
        "win" | "correct" | "solved" => Pattern::PERFECT,
        text => Pattern::from_str(text)?,
    };
    Some(Reply::Played(Attempt::new(word, pattern)))
}
