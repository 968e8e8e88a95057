//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar};
use crate::commands::{BenchmarkResult, MatrixSummary, SolveResult, SourceComparison};
use crate::game::GameStatus;
use crate::solver::Suggestion;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    if verbose && let Some(seed) = result.sampler_seed {
        println!("Sampler seed: {seed}");
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let report = &step.report;
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_tiles(&report.guess, report.pattern),
            report.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Feedback:   {} green, {} yellow",
                report.pattern.count_greens(),
                report.pattern.count_yellows()
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, report.candidates_remaining
            );
            if let Some(nodes) = report.nodes_visited {
                println!("  Trie nodes: {nodes}");
            }

            if let Some(metrics) = step.metrics {
                println!(
                    "  Entropy:    [{}] {:.3} bits",
                    entropy_bar(metrics.entropy, 20).green(),
                    metrics.entropy
                );
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!("  Worst case: {} candidates", metrics.max_partition);

                // Information actually gained (reduction in uncertainty)
                if report.candidates_remaining > 0 {
                    let ratio = step.candidates_before as f64 / report.candidates_remaining as f64;
                    println!("  Info gained: {:.3} bits ({ratio:.1}x reduction)", ratio.log2());
                }
            }
        }
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        GameStatus::Lost | GameStatus::InProgress => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if !result.failures.is_empty() {
        let missed: Vec<&str> = result.failures.iter().map(|w| w.text()).collect();
        println!(
            "   Not solved:       {} ({})",
            result.failures.len().to_string().red(),
            missed.join(", ")
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

/// Print one summary line per strategy, best average first
pub fn print_benchmark_comparison(results: &[BenchmarkResult]) {
    let mut ranked: Vec<&BenchmarkResult> = results.iter().collect();
    ranked.sort_by(|a, b| a.average_guesses.total_cmp(&b.average_guesses));

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   {:<22} {:>8} {:>6} {:>6} {:>9}",
        "strategy", "average", "worst", "lost", "time"
    );
    for result in ranked {
        println!(
            "   {:<22} {:>8.3} {:>6} {:>6} {:>8.2}s",
            result.strategy,
            result.average_guesses,
            result.max_guesses,
            result.failures.len(),
            result.duration.as_secs_f64()
        );
    }
}

/// Print matrix-backed against computed timings
pub fn print_source_comparison(comparison: &SourceComparison) {
    let cached = &comparison.cached;
    let computed = &comparison.computed;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PATTERN MATRIX vs ON-THE-FLY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if let Some(lookups) = comparison.lookups {
        println!("\n🔎 {} ({} random pairs)", "Lookups:".bright_cyan().bold(), lookups.pairs);
        println!("   Matrix:           {:.3}s", lookups.cached.as_secs_f64());
        println!("   Computed:         {:.3}s", lookups.computed.as_secs_f64());
        println!(
            "   Speedup:          {}",
            format!("{:.1}x", lookups.speedup()).bright_yellow().bold()
        );
    }

    let ratio = computed.duration.as_secs_f64() / cached.duration.as_secs_f64().max(f64::MIN_POSITIVE);
    println!(
        "\n🎮 {} ({}, {} words)",
        "Games:".bright_cyan().bold(),
        cached.strategy,
        cached.total_words
    );
    println!("   Matrix:           {:.2}s", cached.duration.as_secs_f64());
    println!("   Computed:         {:.2}s", computed.duration.as_secs_f64());
    println!("   Speedup:          {}", format!("{ratio:.1}x").bright_yellow().bold());
    println!(
        "   Average guesses:  {:.3} / {:.3}",
        cached.average_guesses, computed.average_guesses
    );
}

/// Print where the matrix went and what it covers
pub fn print_matrix_summary(summary: &MatrixSummary) {
    println!(
        "{} {} × {} patterns written to {}",
        "✓".green().bold(),
        summary.guesses,
        summary.secrets,
        summary.path.display().to_string().bright_white()
    );
    println!("   Lexicon checksum: {:016x}", summary.checksum);
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());
}

/// Write ranked suggestions, one per line
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_suggestions<W: Write>(out: &mut W, suggestions: &[Suggestion]) -> io::Result<()> {
    for (rank, suggestion) in suggestions.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {}  {:.3}",
            rank + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            suggestion.score
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn suggestions_are_numbered() {
        let suggestions = [
            Suggestion {
                word: Word::new("crane").unwrap(),
                score: 5.5,
            },
            Suggestion {
                word: Word::new("slate").unwrap(),
                score: 5.25,
            },
        ];
        let mut out = Vec::new();
        write_suggestions(&mut out, &suggestions).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1.") && lines[0].contains("CRANE") && lines[0].contains("5.500"));
        assert!(lines[1].contains("2.") && lines[1].contains("SLATE"));
    }
}
