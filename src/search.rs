// Fluxer Search Engine
// Main API that owns the word lists and runs finder and solver queries

use crate::config::WordListConfig;
use crate::data::{DataLoader, LoadedLists};
use crate::matcher::{FindOutcome, FindQuery, WordMatcher};
use crate::solver::{
    check_query, CancelToken, CycleSolver, SolveObserver, SolveOptions, SolveOutcome,
};
use crate::types::{FluxerError, LoadError, PosCategory, QueryError, Rule};
use crate::vocab::{PosIndex, Vocabulary};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Main Fluxer engine
///
/// Owns the immutable vocabulary and part-of-speech index; every query
/// borrows them read-only, so a `Fluxer` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Fluxer {
    vocabulary: Vocabulary,
    pos_index: PosIndex,
}

impl Fluxer {
    pub fn new(vocabulary: Vocabulary, pos_index: PosIndex) -> Self {
        Self {
            vocabulary,
            pos_index,
        }
    }

    /// Load word lists from disk
    ///
    /// # Returns
    /// The engine plus the POS lists that failed to load
    pub fn load(config: &WordListConfig) -> Result<(Self, Vec<LoadError>), FluxerError> {
        let LoadedLists {
            vocabulary,
            pos_index,
            warnings,
        } = DataLoader::load(config)?;
        Ok((Self::new(vocabulary, pos_index), warnings))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn pos_index(&self) -> &PosIndex {
        &self.pos_index
    }

    /// Find single words overlapping the query affixes
    ///
    /// # Errors
    /// `EmptyPrefix` when the prefix is blank.
    pub fn find(&self, query: &FindQuery) -> Result<FindOutcome, FluxerError> {
        if query.prefix.trim().is_empty() {
            return Err(QueryError::EmptyPrefix.into());
        }
        let mut query = query.clone();
        query.prefix = query.prefix.trim().to_string();
        query.suffix = query.suffix.trim().to_string();

        Ok(WordMatcher::new(&self.vocabulary, &self.pos_index).search(&query))
    }

    /// Search for 4-word cycles from `start_word`
    ///
    /// # Errors
    /// `EmptyStartWord`, or `RuleCount` unless exactly three rules are given.
    pub fn solve(
        &self,
        start_word: &str,
        rules: &[Rule],
        options: &SolveOptions,
    ) -> Result<SolveOutcome, FluxerError> {
        Ok(CycleSolver::new(&self.vocabulary, &self.pos_index).solve(start_word, rules, options)?)
    }

    /// [`Fluxer::solve`] reporting progress to `observer`
    pub fn solve_with_observer(
        &self,
        start_word: &str,
        rules: &[Rule],
        options: &SolveOptions,
        observer: &mut dyn SolveObserver,
    ) -> Result<SolveOutcome, FluxerError> {
        Ok(CycleSolver::new(&self.vocabulary, &self.pos_index).solve_with_observer(
            start_word, rules, options, observer,
        )?)
    }

    /// Run a cycle search on its own thread
    ///
    /// The returned handle cancels through the token in `options`, or a fresh
    /// one when none was given.
    ///
    /// # Errors
    /// `EmptyStartWord` or `RuleCount`, before any thread is started.
    pub fn solve_in_background(
        self: Arc<Self>,
        start_word: &str,
        rules: Vec<Rule>,
        options: SolveOptions,
    ) -> Result<SolveHandle, FluxerError> {
        check_query(start_word, &rules)?;

        let cancel = options.cancel.clone().unwrap_or_default();
        let options = options.with_cancel(cancel.clone());
        let start_word = start_word.to_string();

        let join = std::thread::spawn(move || self.solve(&start_word, &rules, &options));

        Ok(SolveHandle { cancel, join })
    }

    /// Get (vocabulary size, words per POS category)
    pub fn stats(&self) -> (usize, FxHashMap<PosCategory, usize>) {
        (self.vocabulary.len(), self.pos_index.counts())
    }
}

/// Handle to a background cycle search
#[derive(Debug)]
pub struct SolveHandle {
    cancel: CancelToken,
    join: JoinHandle<Result<SolveOutcome, FluxerError>>,
}

impl SolveHandle {
    /// Ask the search to stop; it returns what it has found so far
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the search to end
    pub fn join(self) -> Result<SolveOutcome, FluxerError> {
        self.join
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveStatus;

    fn create_engine() -> Fluxer {
        let vocabulary = Vocabulary::new([
            "article", "tartan", "clear", "antler", "earns", "lerst", "cat", "cats", "tape",
        ]);
        let pos_index = PosIndex::new().with_list(PosCategory::Noun, ["cat", "cats", "article"]);
        Fluxer::new(vocabulary, pos_index)
    }

    #[test]
    fn test_find() -> Result<(), Box<dyn std::error::Error>> {
        let engine = create_engine();
        let outcome = engine.find(&FindQuery::new(" cat "))?;

        assert!(!outcome.is_empty());
        assert_eq!(outcome.matches[0].word, "cats");
        Ok(())
    }

    #[test]
    fn test_find_rejects_empty_prefix() {
        let engine = create_engine();
        let result = engine.find(&FindQuery::new("   "));
        assert!(matches!(
            result,
            Err(FluxerError::Query(QueryError::EmptyPrefix))
        ));
    }

    #[test]
    fn test_solve() -> Result<(), Box<dyn std::error::Error>> {
        let engine = create_engine();
        let rules = vec![Rule::any(); 3];
        let outcome = engine.solve("start", &rules, &SolveOptions::new().with_max_solutions(2))?;

        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.status, SolveStatus::LimitReached);
        Ok(())
    }

    #[test]
    fn test_solve_rejects_wrong_rule_count() {
        let engine = create_engine();
        let result = engine.solve("start", &[Rule::any()], &SolveOptions::new());
        assert!(matches!(
            result,
            Err(FluxerError::Query(QueryError::RuleCount { actual: 1 }))
        ));
    }

    #[test]
    fn test_background_matches_foreground() -> Result<(), Box<dyn std::error::Error>> {
        let engine = Arc::new(create_engine());
        let rules = vec![Rule::any(); 3];
        let options = SolveOptions::new().find_all();

        let foreground = engine.solve("start", &rules, &options)?;
        let background = Arc::clone(&engine)
            .solve_in_background("start", rules, options)?
            .join()?;

        assert_eq!(foreground, background);
        Ok(())
    }

    #[test]
    fn test_background_cancelled_before_start() -> Result<(), Box<dyn std::error::Error>> {
        let engine = Arc::new(create_engine());
        let token = CancelToken::new();
        token.cancel();

        let handle = engine.solve_in_background(
            "start",
            vec![Rule::any(); 3],
            SolveOptions::new().find_all().with_cancel(token),
        )?;
        let outcome = handle.join()?;

        assert_eq!(outcome.status, SolveStatus::Cancelled);
        Ok(())
    }

    #[test]
    fn test_background_rejects_bad_query_up_front() {
        let engine = Arc::new(create_engine());
        let options = SolveOptions::new();

        let blank =
            Arc::clone(&engine).solve_in_background("  ", vec![Rule::any(); 3], options.clone());
        assert!(matches!(blank, Err(FluxerError::Query(QueryError::EmptyStartWord))));

        let two_rules = engine.solve_in_background("start", vec![Rule::any(); 2], options);
        assert!(matches!(
            two_rules,
            Err(FluxerError::Query(QueryError::RuleCount { actual: 2 }))
        ));
    }

    #[test]
    fn test_stats() {
        let engine = create_engine();
        let (total, counts) = engine.stats();

        assert_eq!(total, 9);
        assert_eq!(counts[&PosCategory::Noun], 3);
        assert_eq!(counts[&PosCategory::Verb], 0);
    }
}
