//! Wordle CSP Solver - CLI
//!
//! Interactive assistant, single-target solver and batch simulator built on
//! a backtracking constraint solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_csp::{
    commands::{SimulateOptions, check_feedback, run_play, run_simulation, solve_word},
    core::Word,
    game::SessionConfig,
    lexicon::Lexicon,
    output::{print_batch_result, print_candidates, print_constraints, print_game_record, show_histogram},
    simulator::SimulationConfig,
    solver::SearchLimit,
};

#[derive(Parser)]
#[command(
    name = "wordle_csp",
    about = "Wordle solver that enumerates every word consistent with the feedback so far",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus of valid answers, one word per line (default: embedded)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Utility table of `word: score` lines (default: embedded)
    #[arg(long, global = true)]
    scores: Option<PathBuf>,

    /// First guess before any feedback exists
    #[arg(short, long, global = true, default_value = "adieu")]
    opening: String,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console mode (default)
    Play,

    /// Play one automated game against a known answer
    Solve {
        /// The target word to solve
        word: String,

        /// Show the feedback notation of each round
        #[arg(short, long)]
        detailed: bool,
    },

    /// Play automated games against sampled answers
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible target sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Attempts before a game counts as failed
        #[arg(long, default_value = "6")]
        max_attempts: usize,

        /// Play games one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Show the distribution as a full-screen bar chart afterwards
        #[arg(long)]
        chart: bool,

        /// No progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the constraints and candidates one feedback line produces
    Check {
        /// Feedback such as "(s, 1, GREEN), (t, 2, GRAY), ..."
        feedback: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = Lexicon::load(cli.corpus.as_deref(), cli.scores.as_deref())
        .context("Failed to load lexicon")?;
    let opening = Word::new(&cli.opening)
        .with_context(|| format!("Invalid opening word {:?}", cli.opening))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(
            &lexicon,
            SessionConfig::interactive(),
            &opening,
            io::stdin().lock(),
            io::stdout(),
        ),
        Commands::Solve { word, detailed } => {
            let config = SimulationConfig {
                opening,
                ..SimulationConfig::default()
            };
            let record = solve_word(&lexicon, &word, &config)?;
            print_game_record(&record, detailed);
            Ok(())
        }
        Commands::Simulate {
            count,
            seed,
            max_attempts,
            sequential,
            chart,
            quiet,
        } => {
            let config = SimulationConfig {
                opening,
                max_attempts,
                parallel: !sequential,
                ..SimulationConfig::default()
            };
            let options = SimulateOptions {
                count,
                seed,
                progress: !quiet,
            };
            let result = run_simulation(&lexicon, &options, &config)?;
            print_batch_result(&result);
            if chart {
                show_histogram(&result.histogram)?;
            }
            Ok(())
        }
        Commands::Check { feedback } => {
            let result = check_feedback(&lexicon, &feedback, SearchLimit::UNBOUNDED)?;
            print_constraints(&result.feedback, &result.constraints);
            if let Some(contradiction) = result.contradiction {
                println!("\nContradictory feedback: {contradiction}");
            } else if result.candidates.is_empty() {
                println!("\nNo valid words found!");
            } else {
                print_candidates(&result.candidates, 20)?;
            }
            Ok(())
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
