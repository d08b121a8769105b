// Fluxer Cycle Solver
// Searches for 4-word chains [start, w1, w2, w3] whose affixes overlap in a loop

use crate::matcher::rank_order;
use crate::pattern::{prefix_overlap, suffix_overlap};
use crate::types::{QueryError, Rule, Solution};
use crate::vocab::{Entry, PosIndex, Vocabulary};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Number of rules (and stages) a cycle query takes
pub const STAGES: usize = 3;

/// Shared flag for abandoning a running search
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Search limits
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Stop once this many solutions are collected (`None` = find all)
    pub max_solutions: Option<usize>,

    /// Wall-clock budget for the whole search
    pub timeout: Option<Duration>,

    /// Checked between iterations; a cancelled search keeps what it found
    pub cancel: Option<CancelToken>,
}

impl SolveOptions {
    pub fn new() -> Self {
        Self {
            max_solutions: Some(crate::config::DEFAULT_MAX_SOLUTIONS),
            timeout: None,
            cancel: None,
        }
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }

    /// Collect every solution
    pub fn find_all(mut self) -> Self {
        self.max_solutions = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Every combination was explored
    Completed,
    /// No word in the first pool overlaps the starting word
    NoStageOneMatch,
    /// `max_solutions` was reached
    LimitReached,
    /// The cancel token fired
    Cancelled,
    /// The timeout elapsed
    TimedOut,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Completed => write!(f, "completed"),
            SolveStatus::NoStageOneMatch => write!(f, "no stage-1 match"),
            SolveStatus::LimitReached => write!(f, "limit reached"),
            SolveStatus::Cancelled => write!(f, "cancelled"),
            SolveStatus::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Solutions in discovery order plus search metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    pub solutions: Vec<Solution>,
    pub status: SolveStatus,

    /// Size of each stage's pre-filtered pool
    pub pool_sizes: [usize; STAGES],

    /// Best total overlap seen (0 when nothing was found)
    pub max_overlap: usize,
}

impl SolveOutcome {
    fn empty(status: SolveStatus, pool_sizes: [usize; STAGES]) -> Self {
        Self {
            solutions: Vec::new(),
            status,
            pool_sizes,
            max_overlap: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Solutions sorted by total overlap, highest first; ties keep discovery order
    pub fn ranked(&self) -> Vec<Solution> {
        let mut ranked = self.solutions.clone();
        ranked.sort_by(|a, b| b.total_overlap.cmp(&a.total_overlap));
        ranked
    }

    /// The best `max_print` solutions for display (all when `None`)
    pub fn top(&self, max_print: Option<usize>) -> Vec<Solution> {
        let mut ranked = self.ranked();
        if let Some(max) = max_print {
            ranked.truncate(max);
        }
        ranked
    }
}

/// Receives solutions as the search finds them
pub trait SolveObserver {
    /// Called for every collected solution; `found` includes this one
    fn on_solution(&mut self, _solution: &Solution, _found: usize) {}

    /// Called when a solution beats the best total so far
    fn on_new_best(&mut self, _solution: &Solution) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// A pool word linked to the previous chain word
#[derive(Debug, Clone, Copy)]
struct Link<'v> {
    entry: &'v Entry,
    overlap: usize,
}

/// Words of `pool` whose head overlaps the tail of `previous`, ranked
fn linked<'v>(pool: &[&'v Entry], previous: &str) -> Vec<Link<'v>> {
    let mut links: Vec<Link<'v>> = pool
        .iter()
        .filter_map(|&entry| {
            let overlap = prefix_overlap(&entry.lower, previous);
            (overlap > 0).then_some(Link { entry, overlap })
        })
        .collect();
    links.sort_by(|a, b| rank_order(a.overlap, a.entry, b.overlap, b.entry));
    links
}

/// Reject a blank start word or anything but one rule per stage
pub(crate) fn check_query(start_word: &str, rules: &[Rule]) -> Result<(), QueryError> {
    if start_word.trim().is_empty() {
        return Err(QueryError::EmptyStartWord);
    }
    if rules.len() != STAGES {
        return Err(QueryError::RuleCount {
            actual: rules.len(),
        });
    }
    Ok(())
}

/// Cycle solver over a borrowed vocabulary
///
/// Each call builds its own pools and accumulator, so one solver can serve
/// concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct CycleSolver<'a> {
    vocabulary: &'a Vocabulary,
    pos_index: &'a PosIndex,
}

impl<'a> CycleSolver<'a> {
    pub fn new(vocabulary: &'a Vocabulary, pos_index: &'a PosIndex) -> Self {
        Self {
            vocabulary,
            pos_index,
        }
    }

    /// Find cycles starting at `start_word`, one rule per stage
    ///
    /// # Errors
    /// `EmptyStartWord` or `RuleCount` before any work is done.
    pub fn solve(
        &self,
        start_word: &str,
        rules: &[Rule],
        options: &SolveOptions,
    ) -> Result<SolveOutcome, QueryError> {
        self.solve_with_observer(start_word, rules, options, &mut NoopObserver)
    }

    /// [`CycleSolver::solve`] with progress callbacks
    pub fn solve_with_observer(
        &self,
        start_word: &str,
        rules: &[Rule],
        options: &SolveOptions,
        observer: &mut dyn SolveObserver,
    ) -> Result<SolveOutcome, QueryError> {
        check_query(start_word, rules)?;
        let start = start_word.trim().to_lowercase();

        let began = Instant::now();
        let pools: Vec<Vec<&Entry>> = rules
            .iter()
            .map(|rule| rule.pool(self.vocabulary, self.pos_index))
            .collect();
        let pool_sizes = [pools[0].len(), pools[1].len(), pools[2].len()];

        for (stage, (rule, pool)) in rules.iter().zip(&pools).enumerate() {
            debug!(stage = stage + 1, rule = %rule, words = pool.len(), "stage pool built");
        }

        if options.max_solutions == Some(0) {
            return Ok(SolveOutcome::empty(SolveStatus::LimitReached, pool_sizes));
        }

        let stage1 = linked(&pools[0], &start);
        if stage1.is_empty() {
            info!(start = %start, rule = %rules[0], "no stage-1 match");
            return Ok(SolveOutcome::empty(SolveStatus::NoStageOneMatch, pool_sizes));
        }

        let deadline = options.timeout.map(|timeout| began + timeout);
        let interrupted = || -> Option<SolveStatus> {
            if options.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Some(SolveStatus::Cancelled);
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Some(SolveStatus::TimedOut);
            }
            None
        };

        let mut solutions: Vec<Solution> = Vec::new();
        let mut max_overlap = 0;
        let mut status = SolveStatus::Completed;

        'search: for w1 in &stage1 {
            if let Some(stop) = interrupted() {
                status = stop;
                break;
            }

            let stage2 = linked(&pools[1], &w1.entry.lower);

            for w2 in &stage2 {
                if let Some(stop) = interrupted() {
                    status = stop;
                    break 'search;
                }

                let mut stage3: Vec<Link<'_>> = pools[2]
                    .iter()
                    .filter_map(|&entry| {
                        let link = prefix_overlap(&entry.lower, &w2.entry.lower);
                        let close = suffix_overlap(&entry.lower, &start);
                        (link > 0 && close > 0).then(|| Link {
                            entry,
                            overlap: w1.overlap + w2.overlap + link + close,
                        })
                    })
                    .collect();
                stage3.sort_by(|a, b| rank_order(a.overlap, a.entry, b.overlap, b.entry));

                for w3 in stage3 {
                    let solution = Solution {
                        chain: [
                            start_word.to_string(),
                            w1.entry.word.clone(),
                            w2.entry.word.clone(),
                            w3.entry.word.clone(),
                        ],
                        total_overlap: w3.overlap,
                    };

                    if solution.total_overlap > max_overlap {
                        max_overlap = solution.total_overlap;
                        debug!(solution = %solution, overlap = max_overlap, "new best");
                        observer.on_new_best(&solution);
                    }
                    observer.on_solution(&solution, solutions.len() + 1);
                    solutions.push(solution);

                    if options.max_solutions.is_some_and(|max| solutions.len() >= max) {
                        info!(found = solutions.len(), "reached solution limit");
                        status = SolveStatus::LimitReached;
                        break 'search;
                    }
                }
            }
        }

        info!(
            found = solutions.len(),
            max_overlap,
            %status,
            elapsed_ms = began.elapsed().as_millis() as u64,
            "cycle search finished"
        );

        Ok(SolveOutcome {
            solutions,
            status,
            pool_sizes,
            max_overlap,
        })
    }
}
