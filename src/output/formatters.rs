//! Formatting utilities for terminal output

use crate::core::{Feedback, PATTERN_COUNT, Pattern, Word};
use colored::Colorize;

/// Render a guess as coloured tiles, one letter per feedback square
#[must_use]
pub fn colored_tiles(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.feedback())
        .map(|(letter, feedback)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match feedback {
                Feedback::Correct => tile.black().on_green().bold().to_string(),
                Feedback::Present => tile.black().on_yellow().bold().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a single guess can reveal
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (PATTERN_COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
