//! Wordle guess engine - CLI
//!
//! Local front end for the entropy-maximizing solver: solve a target word
//! with simulated feedback, or analyze the entropy of a single word.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use wordle_engine::{
    commands::{analyze_word, solve_target},
    config::SolverConfig,
    lexicon::Lexicon,
    output::{print_analysis_report, print_solve_report},
    solver::{FilterPolicy, GuessSelector},
};

#[derive(Parser)]
#[command(
    name = "wordle-engine",
    about = "Entropy-maximizing Wordle guess engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Per-turn compute budget in seconds (soft deadline)
    #[arg(short = 't', long, global = true, default_value_t = 5.0)]
    time_budget: f64,

    /// Worker pool size (default: available parallelism)
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Candidate filtering policy
    #[arg(long, global = true, value_enum, default_value_t = FilterArg::Strict)]
    filter: FilterArg,

    /// Custom allowed-guess list (one word per line; requires --answers)
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    /// Custom answer list (one word per line; requires --allowed)
    #[arg(long, global = true, requires = "allowed")]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word against the local feedback simulator
    Solve {
        /// The target word
        word: String,

        /// Show entropy and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a word against the answer set
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Filtering policy flag
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Exact two-pass feedback semantics (local simulation)
    Strict,
    /// Tolerate inconsistent duplicate-letter marks from a noisy source
    Permissive,
}

impl From<FilterArg> for FilterPolicy {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Strict => Self::Strict,
            FilterArg::Permissive => Self::Permissive,
        }
    }
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    match (&cli.allowed, &cli.answers) {
        (Some(allowed), Some(answers)) => Ok(Lexicon::from_files(allowed, answers)?),
        _ => Ok(Lexicon::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let lexicon = load_lexicon(&cli)?;

    let config = SolverConfig {
        time_budget: Duration::from_secs_f64(cli.time_budget),
        max_workers: cli.workers,
        ..SolverConfig::default()
    };

    match &cli.command {
        Commands::Solve { word, verbose } => {
            let selector = GuessSelector::new(&config)?;
            let report = solve_target(word, &lexicon, &selector, cli.filter.into())?;
            print_solve_report(&report, *verbose);
        }
        Commands::Analyze { word } => {
            let report = analyze_word(word, &lexicon)?;
            print_analysis_report(&report);
        }
    }

    Ok(())
}
