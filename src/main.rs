//! Wordle Trie - CLI
//!
//! Plays, solves and benchmarks Wordle with trie search, letter-frequency and
//! entropy strategies.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_trie::{
    commands::{
        DEFAULT_LOOKUP_PAIRS, build_matrix, compare_pattern_sources, compare_strategies,
        progress_bar, run_assist, run_benchmark, run_play, solve_word,
    },
    core::Word,
    game::{AttemptLimit, SecretChoice, SessionConfig},
    lexicon::{ANSWERS, Lexicon, loader::load_from_file, loader::words_from_slice},
    output::{
        log, print_benchmark_comparison, print_benchmark_result, print_matrix_summary,
        print_solve_result, print_source_comparison,
    },
    solver::{Engine, SolverStrategy},
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Wordle engine with trie search, hill climbing and entropy strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: dfs, hill-climbing, static-hill-climbing, full-entropy (default),
    /// progressive-entropy
    #[arg(short, long, global = true, default_value = "full-entropy")]
    strategy: String,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to a guess list
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Load the pattern matrix from this file, building and saving it if needed
    #[arg(short = 'm', long, global = true)]
    matrix_cache: Option<PathBuf>,

    /// Seed for random secrets and sampled entropy (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word yourself (default)
    Play {
        /// Secret word, or 'random'
        #[arg(default_value = "random")]
        secret: String,

        /// Attempts allowed: a number or 'unlimited'
        #[arg(short = 'a', long, default_value = "6")]
        max_attempts: AttemptLimit,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Let the strategy solve a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Attempts allowed: a number or 'unlimited'
        #[arg(short = 'a', long, default_value = "6")]
        max_attempts: AttemptLimit,

        /// Show candidate counts, entropy and trie statistics per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark strategy performance over the first N secrets
    Benchmark {
        /// Number of secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Attempts allowed per game: a number or 'unlimited'
        #[arg(short = 'a', long, default_value = "unlimited")]
        max_attempts: AttemptLimit,

        /// Run every strategy instead of only --strategy
        #[arg(short, long)]
        compare: bool,

        /// Also run without the pattern matrix and compare lookup and game speed
        #[arg(long, conflicts_with = "compare")]
        no_matrix: bool,
    },

    /// Precompute the pattern matrix and save it
    BuildMatrix {
        /// Output file
        path: PathBuf,
    },
}

/// Load the lexicon selected by the -w flag
///
/// - "all": full guess list with the answer list as secrets
/// - "answers": answer list for both
/// - "<path>": guess list from file, answer list as secrets
fn load_lexicon(wordlist_mode: &str) -> Result<Lexicon> {
    let lexicon = match wordlist_mode {
        "all" => Lexicon::embedded()?,
        "answers" => Lexicon::answers_only()?,
        path => {
            let guesses =
                load_from_file(path).with_context(|| format!("failed to read word list {path}"))?;
            Lexicon::new(guesses, words_from_slice(ANSWERS))?
        }
    };
    Ok(lexicon)
}

fn load_engine(lexicon: Lexicon, matrix_cache: Option<&Path>) -> Engine {
    match matrix_cache {
        Some(path) => {
            let bar = progress_bar(lexicon.guesses().len() as u64, "pattern matrix");
            let engine = Engine::with_cache(lexicon, path, &bar);
            bar.finish_and_clear();
            engine
        }
        None => Engine::new(lexicon),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info(format!("using seed {seed}"));
        seed
    });

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        secret: "random".to_string(),
        max_attempts: AttemptLimit::default(),
    });

    if let Commands::BuildMatrix { path } = &command {
        return run_build_matrix_command(&lexicon, path);
    }

    let engine = load_engine(lexicon, cli.matrix_cache.as_deref());

    match command {
        Commands::Play {
            secret,
            max_attempts,
        } => run_play_command(&engine, &cli.strategy, &secret, max_attempts, seed),
        Commands::Assist => {
            let strategy = SolverStrategy::from_name(&cli.strategy, seed)?;
            run_assist(&engine, &strategy, io::stdin().lock(), io::stdout())?;
            Ok(())
        }
        Commands::Solve {
            word,
            max_attempts,
            verbose,
        } => run_solve_command(&engine, &cli.strategy, &word, max_attempts, verbose, seed),
        Commands::Benchmark {
            count,
            max_attempts,
            compare,
            no_matrix,
        } => {
            let mode = if compare {
                BenchmarkMode::AllStrategies
            } else if no_matrix {
                BenchmarkMode::PatternSources
            } else {
                BenchmarkMode::Single
            };
            run_benchmark_command(&engine, &cli.strategy, count, max_attempts, mode, seed)
        }
        Commands::BuildMatrix { path } => run_build_matrix_command(engine.lexicon(), &path),
    }
}

fn run_play_command(
    engine: &Engine,
    strategy: &str,
    secret: &str,
    max_attempts: AttemptLimit,
    seed: u64,
) -> Result<()> {
    let config = SessionConfig {
        secret: secret.parse::<SecretChoice>()?,
        strategy: strategy.to_string(),
        max_attempts,
        seed,
    };
    let mut session = engine.start_session(&config)?;
    run_play(&mut session, io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn run_solve_command(
    engine: &Engine,
    strategy: &str,
    word: &str,
    max_attempts: AttemptLimit,
    verbose: bool,
    seed: u64,
) -> Result<()> {
    let config = SessionConfig::with_secret(Word::new(word)?)
        .strategy(strategy)
        .max_attempts(max_attempts)
        .seed(seed);
    let result = solve_word(engine, &config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

/// What `benchmark` measures
#[derive(Clone, Copy)]
enum BenchmarkMode {
    Single,
    AllStrategies,
    /// Matrix-backed against computed feedback
    PatternSources,
}

fn run_benchmark_command(
    engine: &Engine,
    strategy: &str,
    count: usize,
    max_attempts: AttemptLimit,
    mode: BenchmarkMode,
    seed: u64,
) -> Result<()> {
    // Take first N words from the secret list
    let secrets: Vec<Word> = engine.lexicon().secrets().iter().take(count).copied().collect();

    match mode {
        BenchmarkMode::PatternSources => {
            let strategy = SolverStrategy::from_name(strategy, seed)?;
            println!(
                "Timing {} lookups and {} games with and without the pattern matrix...",
                DEFAULT_LOOKUP_PAIRS,
                secrets.len()
            );
            let bar = progress_bar(2 * secrets.len() as u64, "games");
            let comparison = compare_pattern_sources(
                engine,
                &strategy,
                &secrets,
                max_attempts,
                DEFAULT_LOOKUP_PAIRS,
                seed,
                &bar,
            )?;
            bar.finish_and_clear();
            print_source_comparison(&comparison);
        }
        BenchmarkMode::AllStrategies => {
            println!(
                "Running all {} strategies on {} secrets...",
                SolverStrategy::NAMES.len(),
                secrets.len()
            );
            let bar = progress_bar((secrets.len() * SolverStrategy::NAMES.len()) as u64, "games");
            let results = compare_strategies(engine, seed, &secrets, max_attempts, &bar)?;
            bar.finish_and_clear();
            for result in &results {
                print_benchmark_result(result);
            }
            print_benchmark_comparison(&results);
        }
        BenchmarkMode::Single => {
            let strategy = SolverStrategy::from_name(strategy, seed)?;
            println!("Running benchmark on {} secrets...", secrets.len());
            let bar = progress_bar(secrets.len() as u64, "games");
            let result = run_benchmark(engine, &strategy, &secrets, max_attempts, &bar)?;
            bar.finish_and_clear();
            print_benchmark_result(&result);
        }
    }
    Ok(())
}

fn run_build_matrix_command(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let bar = progress_bar(lexicon.guesses().len() as u64, "pattern matrix");
    let summary = build_matrix(lexicon, path, &bar)
        .with_context(|| format!("failed to write pattern matrix to {}", path.display()))?;
    bar.finish_and_clear();
    print_matrix_summary(&summary);
    Ok(())
}
