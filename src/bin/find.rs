// Fluxer Find CLI Tool
// Command-line interface for single-word overlap search

use clap::Parser;
use fluxer::config::{DEFAULT_LIMIT, DEFAULT_WORDS_DIR, WORDS_DIR_ENV};
use fluxer::{FindQuery, Fluxer, PosCategory, Rule, WordListConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fluxer Find - words that start with the end of PREFIX (and end with the start of SUFFIX)
#[derive(Parser, Debug)]
#[command(name = "fluxer-find")]
#[command(about = "Find words overlapping a word before and an optional word after")]
#[command(version)]
struct Args {
    /// Preceding word (e.g., "ST")
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// Following word (e.g., "PLAY")
    #[arg(value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Exact word length
    #[arg(short, long)]
    length: Option<usize>,

    /// Exact number of vowels
    #[arg(short = 'o', long)]
    vowels: Option<usize>,

    /// Exact number of consonants
    #[arg(short, long)]
    consonants: Option<usize>,

    /// Part of speech: noun, verb, adjective, adverb
    #[arg(short, long)]
    pos: Option<PosCategory>,

    /// Require two equal adjacent letters
    #[arg(short, long)]
    double_letters: bool,

    /// Forbid any repeated letter
    #[arg(long)]
    no_repeats: bool,

    /// Require alternating vowels and consonants
    #[arg(long)]
    alternating: bool,

    /// Require letters in alphabetical order
    #[arg(long)]
    alphabetical: bool,

    /// Rule in token form (e.g., "noun+6-letters"); flags above add to it
    #[arg(short, long)]
    rule: Option<Rule>,

    /// Maximum number of results to display
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Show every match
    #[arg(short, long)]
    all: bool,

    /// Print the result as JSON
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
    fn build_rule(&self) -> Rule {
        let mut rule = self.rule.clone().unwrap_or_default();
        rule.length = self.length.or(rule.length);
        rule.vowels = self.vowels.or(rule.vowels);
        rule.consonants = self.consonants.or(rule.consonants);
        rule.pos = self.pos.or(rule.pos);
        rule.double_letters |= self.double_letters;
        rule.no_repeats |= self.no_repeats;
        rule.alternating |= self.alternating;
        rule.alphabetical |= self.alphabetical;
        rule
    }

    fn build_query(&self) -> FindQuery {
        let mut query = FindQuery::new(&self.prefix)
            .with_suffix(self.suffix.clone().unwrap_or_default())
            .with_rule(self.build_rule())
            .with_limit(self.limit);
        if self.all {
            query = query.show_all();
        }
        query
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (fluxer, _warnings) = Fluxer::load(&WordListConfig::from_dir(&args.words_dir))?;
    let query = args.build_query();
    let outcome = fluxer.find(&query)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Rule: {}", query.rule);

    if outcome.is_empty() {
        println!("❌ No matches found with the given criteria.");
        return Ok(());
    }

    println!("✅ Found {} matches:\n", outcome.total);

    for (idx, found) in outcome.matches.iter().enumerate() {
        println!(
            "{:>3}. {:<20} overlap: {} {}",
            idx + 1,
            found.word.to_uppercase(),
            found.overlap,
            overlap_bar(found.overlap)
        );
    }

    if outcome.truncated() > 0 {
        println!(
            "\nShowing {} of {} results. Use --all to see every match.",
            outcome.matches.len(),
            outcome.total
        );
    }

    Ok(())
}

/// One block per overlapping letter
fn overlap_bar(overlap: usize) -> String {
    "█".repeat(overlap)
}
