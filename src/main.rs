//! Letter Boxed Solver - CLI
//!
//! Letter Boxed solver with TUI and CLI modes using a prefix trie and bounded
//! depth-first search.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use letterboxed_solver::{
    commands::{SolveConfig, run_batch, run_benchmark, run_simple, solve_puzzle},
    index::WordIndex,
    output::{print_batch_result, print_benchmark_result, print_solve_report},
    results::{DEFAULT_PAGE_SIZE, SolutionFilter},
    solver::{DEFAULT_MAX_SOLUTIONS, DEFAULT_TIME_LIMIT, SearchBudget, Solver, SolverConfig},
    wordlists::{load_lines, loader::DictionarySource},
};
use log::debug;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letterboxed",
    about = "Letter Boxed solver: finds the shortest word chains that use every letter on the box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default), a path to a word-per-line file, or '-' for stdin
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Longest word chain to search for
    #[arg(long, global = true, default_value = "5")]
    max_words: usize,

    /// Stop each search after this many seconds and keep partial results
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TIME_LIMIT.as_secs_f64(),
        conflicts_with = "unbounded"
    )]
    time_limit: f64,

    /// Stop each search after recording this many solutions
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_SOLUTIONS,
        conflicts_with = "unbounded"
    )]
    max_solutions: usize,

    /// Search exhaustively with no time or solution limit
    #[arg(long, global = true)]
    unbounded: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line prompts, no TUI)
    Simple,

    /// Solve one puzzle
    Solve {
        /// Four sides ('abc def ghi jkl') or one string ('abc-def-ghi-jkl')
        #[arg(required = true, num_args = 1..=4)]
        sides: Vec<String>,

        /// Solutions per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Only show solutions using all of these words (space separated)
        #[arg(short, long)]
        include: Option<String>,

        /// Hide solutions using any of these words (space separated)
        #[arg(short = 'x', long)]
        exclude: Option<String>,

        /// Also list every possible word
        #[arg(long)]
        words: bool,
    },

    /// Solve every puzzle in a file (one per line) in parallel
    Batch {
        /// Puzzle file, or '-' for stdin
        file: String,
    },

    /// Benchmark solver performance on random puzzles
    Benchmark {
        /// Number of random puzzles to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for puzzle generation (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Map global flags onto solver limits
fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let budget = if cli.unbounded {
        SearchBudget::unlimited()
    } else {
        let secs = cli.time_limit;
        let limit = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("Invalid time limit: {secs}"))?;
        SearchBudget::unlimited()
            .with_time_limit(limit)
            .with_max_solutions(cli.max_solutions)
    };
    debug!("Search budget: {budget:?}");
    Ok(SolverConfig {
        max_chain_length: cli.max_words,
        budget,
        ..SolverConfig::default()
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Batch input from stdin and a stdin dictionary cannot share the stream
    if let Some(Commands::Batch { file }) = &cli.command
        && file == "-"
        && cli.wordlist == "-"
    {
        anyhow::bail!("Puzzles and dictionary cannot both come from stdin");
    }

    let source = DictionarySource::from_arg(&cli.wordlist);
    let index = source
        .load_index()
        .with_context(|| format!("Failed to load dictionary from {source}"))?;
    debug!("Dictionary ready: {} words, {} nodes", index.len(), index.node_count());

    let config = solver_config(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&index, config),
        Commands::Simple => {
            let solver = Solver::new(&index, config);
            run_simple(&solver).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            sides,
            limit,
            page,
            include,
            exclude,
            words,
        } => {
            let filter = SolutionFilter::new()
                .include(include.as_deref().unwrap_or_default())
                .exclude(exclude.as_deref().unwrap_or_default());
            let solve_config = SolveConfig {
                sides,
                filter,
                page: page.saturating_sub(1),
                page_size: limit,
                show_words: words,
            };
            run_solve_command(solve_config, &index, config)
        }
        Commands::Batch { file } => run_batch_command(&file, &index, config),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &index, config);
            Ok(())
        }
    }
}

fn run_solve_command(
    solve_config: SolveConfig,
    index: &WordIndex,
    config: SolverConfig,
) -> Result<()> {
    let solver = Solver::new(index, config);
    let report = solve_puzzle(solve_config, &solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_report(&report);
    Ok(())
}

fn run_batch_command(file: &str, index: &WordIndex, config: SolverConfig) -> Result<()> {
    let lines = load_lines(file).with_context(|| format!("Failed to read puzzles from {file}"))?;

    println!("🎯 Solving puzzles from {file}...");
    let solver = Solver::new(index, config);
    let result = run_batch(&solver, &lines, true);
    print_batch_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    index: &WordIndex,
    config: SolverConfig,
) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark on {count} random puzzles (seed {seed})...");

    let solver = Solver::new(index, config);
    let result = run_benchmark(&solver, count, seed);
    print_benchmark_result(&result);
}

fn run_play_command(index: &WordIndex, config: SolverConfig) -> Result<()> {
    use letterboxed_solver::interactive::{App, run_tui};

    let app = App::new(Solver::new(index, config));
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> SolverConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        solver_config(&cli).unwrap()
    }

    #[test]
    fn searches_are_bounded_by_default() {
        let config = config_for(&["letterboxed", "solve", "abc-def-ghi-jkl"]);
        assert_eq!(config.budget.time_limit, Some(DEFAULT_TIME_LIMIT));
        assert_eq!(config.budget.max_solutions, Some(DEFAULT_MAX_SOLUTIONS));
    }

    #[test]
    fn limits_can_be_changed_or_lifted() {
        let config = config_for(&[
            "letterboxed",
            "--time-limit",
            "0.5",
            "--max-solutions",
            "20",
            "simple",
        ]);
        assert_eq!(config.budget.time_limit, Some(Duration::from_millis(500)));
        assert_eq!(config.budget.max_solutions, Some(20));

        let config = config_for(&["letterboxed", "--unbounded", "simple"]);
        assert_eq!(config.budget.time_limit, None);
        assert_eq!(config.budget.max_solutions, None);
    }

    #[test]
    fn lifting_limits_conflicts_with_setting_them() {
        let parsed = Cli::try_parse_from(["letterboxed", "--unbounded", "--max-solutions", "5"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn negative_time_limit_is_rejected() {
        let cli = Cli::try_parse_from(["letterboxed", "--time-limit=-1", "simple"]).unwrap();
        assert!(solver_config(&cli).is_err());
    }
}
