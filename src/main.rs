//! Wordle Splitter - CLI
//!
//! Interactive solver, debug auto-play, single-word analysis and benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_splitter::{
    commands::{analyze_word, run_benchmark, run_play, select_targets, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_OPENING, SolverConfig},
    wordlists::{load_from_file, merge_unique},
};

/// Turn bound for automated sessions when `--max-turns` is not given
const AUTOPLAY_TURN_LIMIT: usize = 32;

#[derive(Parser)]
#[command(
    name = "wordle_splitter",
    about = "Wordle solver that splits the remaining answers into the most feedback classes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list, one word per line
    #[arg(short, long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Extra allowed guesses, one word per line (the answers are always allowed)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Precomputed first guess
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Score the first guess instead of using the precomputed one (slow)
    #[arg(long, global = true)]
    no_opening: bool,

    /// Stop a session after this many turns
    #[arg(long, global = true)]
    max_turns: Option<usize>,

    /// Treat every allowed guess as a possible answer (slow)
    #[arg(long, global = true)]
    all_words: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): type in the result of each guess
    Play,

    /// Auto-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and class counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a word splits the answer set
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Auto-play many targets and summarize the guess counts
    Benchmark {
        /// Number of target words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Sample the targets randomly with this seed instead of taking the first ones
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the answer list and build the guess pool: answers first, then the
/// extra guesses
fn load_wordlists(
    answers_path: &Path,
    guesses_path: Option<&Path>,
) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = load_from_file(answers_path)
        .with_context(|| format!("failed to read answer list {}", answers_path.display()))?;

    let extra = match guesses_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read guess list {}", path.display()))?,
        None => Vec::new(),
    };

    let guesses = merge_unique(&answers, &extra);
    log::info!(
        "loaded {} answers and {} allowed guesses",
        answers.len(),
        guesses.len()
    );
    Ok((answers, guesses))
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let opening = if cli.no_opening {
        None
    } else {
        let word = Word::new(&cli.opening)
            .with_context(|| format!("invalid opening guess {:?}", cli.opening))?;
        Some(word)
    };

    let mut config = SolverConfig::default()
        .with_opening(opening)
        .with_all_words(cli.all_words);
    config.max_turns = cli.max_turns;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (answers, guesses) = load_wordlists(&cli.answers, cli.guesses.as_deref())?;
    let config = solver_config(&cli)?;
    let autoplay = config
        .clone()
        .with_max_turns(cli.max_turns.unwrap_or(AUTOPLAY_TURN_LIMIT));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&config, &answers, &guesses)?,
        Commands::Solve { word, verbose } => {
            let target = Word::new(&word).with_context(|| format!("invalid target {word:?}"))?;
            let result = solve_word(&target, &autoplay, &answers, &guesses)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let word = Word::new(&word).with_context(|| format!("invalid word {word:?}"))?;
            print_analysis_result(&analyze_word(&word, &answers, &guesses));
        }
        Commands::Benchmark { count, seed } => {
            let targets = select_targets(&answers, count, seed);
            match seed {
                Some(seed) => println!(
                    "Running benchmark on {} random words (seed {seed})...",
                    targets.len()
                ),
                None => println!("Running benchmark on {} words...", targets.len()),
            }
            let result = run_benchmark(&autoplay, &answers, &guesses, &targets)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
