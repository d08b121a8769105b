// Fluxer Solve CLI Tool
// Command-line interface for the 4-word cycle solver

use clap::Parser;
use fluxer::config::{DEFAULT_MAX_SOLUTIONS, DEFAULT_WORDS_DIR, WORDS_DIR_ENV};
use fluxer::{parse_rules, Fluxer, Solution, SolveObserver, SolveOptions, WordListConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Fluxer Solve - find START -> W1 -> W2 -> W3 -> START overlap cycles
#[derive(Parser, Debug)]
#[command(name = "fluxer-solve")]
#[command(about = "Find 4-word overlap cycles from a starting word", long_about = None)]
#[command(version)]
struct Args {
    /// Starting word of the cycle
    #[arg(value_name = "START")]
    start: String,

    /// Three comma-separated rules, one per stage (e.g., "noun,5-letters,any")
    #[arg(short, long)]
    rules: String,

    /// Stop after this many solutions
    #[arg(short, long, default_value_t = DEFAULT_MAX_SOLUTIONS)]
    solutions: usize,

    /// Search every combination
    #[arg(short, long)]
    all: bool,

    /// Print only the best N solutions
    #[arg(short, long)]
    print: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Directory holding popular.txt and the POS lists
    #[arg(long, env = WORDS_DIR_ENV, default_value = DEFAULT_WORDS_DIR)]
    words_dir: PathBuf,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> SolveOptions {
        let mut options = SolveOptions::new().with_max_solutions(self.solutions);
        if self.all {
            options = options.find_all();
        }
        if let Some(ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(ms));
        }
        options
    }
}

/// Prints each new best chain as it is found
struct Progress {
    quiet: bool,
}

impl SolveObserver for Progress {
    fn on_new_best(&mut self, solution: &Solution) {
        if !self.quiet {
            println!("🎉 NEW BEST! {} (overlap: {})", solution, solution.total_overlap);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let rules = parse_rules(&args.rules)?;
    let (fluxer, _warnings) = Fluxer::load(&WordListConfig::from_dir(&args.words_dir))?;

    if !args.json {
        println!("Solving from {}", args.start.to_uppercase());
        for (stage, rule) in rules.iter().enumerate() {
            println!("  Word {}: {}", stage + 1, rule);
        }
        println!();
    }

    let mut progress = Progress { quiet: args.json };
    let started = Instant::now();
    let outcome = fluxer.solve_with_observer(&args.start, &rules, &args.options(), &mut progress)?;
    let elapsed = started.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_empty() {
        println!("❌ No solutions found ({}).", outcome.status);
    } else {
        println!(
            "\n✅ Found {} solutions in {:.2?} ({})\n",
            outcome.len(),
            elapsed,
            outcome.status
        );
        for (idx, solution) in outcome.top(args.print).iter().enumerate() {
            println!(
                "{} {:>2}. {}  [overlap: {}]",
                medal(idx + 1),
                idx + 1,
                solution,
                solution.total_overlap
            );
        }
    }

    Ok(if outcome.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
