//! # Fluxer: Affix-Overlap Word Finder and Cycle Solver
//!
//! A word-game aid. Given a vocabulary it finds words whose start overlaps the
//! end of one word (and optionally whose end overlaps the start of another),
//! and it searches for 4-word chains that loop back to a starting word.
//!
//! ## Two Query Modes
//!
//! 1. **Find** - single words overlapping a prefix and optional suffix
//!    - `fluxer.find(&FindQuery::new("st").with_suffix("play"))`
//! 2. **Solve** - chains `[start, w1, w2, w3]` where each word starts with the
//!    tail of the previous one and `w3` ends with the head of `start`
//!    - `fluxer.solve("start", &rules, &SolveOptions::new())`
//!
//! ## Rule Syntax
//!
//! - `noun`, `verb`, `adjective`/`adj`, `adverb`/`adv`
//! - `N-letters`, `N-vowels`, `N-consonants`
//! - `double-letters`, `no-repeats`, `alternating`, `alphabetical`
//! - Combine tokens with `+` (e.g. `noun+6-letters`)
//!
//! ## Example Usage
//!
//! ```
//! use fluxer::{parse_rules, FindQuery, Fluxer, PosIndex, SolveOptions, Vocabulary};
//!
//! let vocabulary = Vocabulary::new(["cat", "cats", "tape", "apex"]);
//! let fluxer = Fluxer::new(vocabulary, PosIndex::new());
//!
//! // Find
//! let found = fluxer.find(&FindQuery::new("cat"))?;
//! assert_eq!(found.matches[0].word, "cats");
//!
//! // Solve
//! let rules = parse_rules("any,any,3-letters")?;
//! let outcome = fluxer.solve("cat", &rules, &SolveOptions::new())?;
//! println!("{} solutions ({})", outcome.len(), outcome.status);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Predicate Library** (`pattern`) - letter properties and overlap scores
//! - **Rules** (`rules`) - rule evaluation and token parsing
//! - **Word Matcher** (`matcher`) - single-word finder
//! - **Cycle Solver** (`solver`) - 3-stage chain search with early stop
//! - **Fluxer API** (`search`) - owns the word lists, validates queries

pub mod config;
pub mod data;
pub mod matcher;
pub mod pattern;
pub mod rules;
pub mod search;
pub mod solver;
pub mod types;
pub mod vocab;

// Re-export main types and functions for convenience
pub use config::WordListConfig;
pub use data::{DataLoader, LoadedLists};
pub use matcher::{FindOutcome, FindQuery, WordMatcher};
pub use rules::{parse_rule, parse_rules};
pub use search::{Fluxer, SolveHandle};
pub use solver::{
    CancelToken, CycleSolver, NoopObserver, SolveObserver, SolveOptions, SolveOutcome,
    SolveStatus,
};
pub use types::{FluxerError, LoadError, Match, PosCategory, QueryError, Rule, Solution};
pub use vocab::{PosIndex, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
