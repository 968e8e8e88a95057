//! Diagnostic lines on stderr
//!
//! Status and performance notices go to stderr so stdout stays clean for results.

use colored::Colorize;
use std::fmt::Display;

/// Informational notice
pub fn info(message: impl Display) {
    eprintln!("{} {message}", "info:".bright_blue().bold());
}

/// Degraded-but-working condition, e.g. running without the pattern matrix
pub fn warn(message: impl Display) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
