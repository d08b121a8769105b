// Fluxer Word Matcher
// Finds vocabulary words that overlap a prefix and optional suffix

use crate::config::DEFAULT_LIMIT;
use crate::pattern::{prefix_overlap, suffix_overlap};
use crate::types::{Match, Rule};
use crate::vocab::{Entry, PosIndex, Vocabulary};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Parameters for a single-word search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    /// Preceding word whose tail the result should start with
    pub prefix: String,

    /// Following word whose head the result should end with (empty = none)
    pub suffix: String,

    /// Constraints every result must satisfy
    pub rule: Rule,

    /// Page size when `show_all` is false
    pub limit: usize,

    /// Return every match instead of one page
    pub show_all: bool,
}

impl FindQuery {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: String::new(),
            rule: Rule::default(),
            limit: DEFAULT_LIMIT,
            show_all: false,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn show_all(mut self) -> Self {
        self.show_all = true;
        self
    }
}

/// Ranked matches plus the count before pagination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindOutcome {
    /// Matches on the returned page, best first
    pub matches: Vec<Match>,

    /// Number of matches before pagination
    pub total: usize,
}

impl FindOutcome {
    /// Matches cut off by pagination
    pub fn truncated(&self) -> usize {
        self.total - self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Single-word finder over a borrowed vocabulary
#[derive(Debug, Clone, Copy)]
pub struct WordMatcher<'a> {
    vocabulary: &'a Vocabulary,
    pos_index: &'a PosIndex,
}

impl<'a> WordMatcher<'a> {
    pub fn new(vocabulary: &'a Vocabulary, pos_index: &'a PosIndex) -> Self {
        Self {
            vocabulary,
            pos_index,
        }
    }

    /// Run a query and paginate the ranked result
    ///
    /// An empty prefix is tolerated here and yields no matches, since every
    /// word then scores 0. Callers wanting a validation error use
    /// [`crate::search::Fluxer::find`].
    pub fn search(&self, query: &FindQuery) -> FindOutcome {
        let mut matches = self.ranked_matches(&query.prefix, &query.suffix, &query.rule);
        let total = matches.len();

        if !query.show_all {
            matches.truncate(query.limit);
        }

        debug!(
            prefix = %query.prefix,
            suffix = %query.suffix,
            rule = %query.rule,
            total,
            shown = matches.len(),
            "find complete"
        );

        FindOutcome { matches, total }
    }

    /// Every match for the affixes and rule, best first
    ///
    /// # Steps
    /// 1. Candidate generation on the affixes
    /// 2. Rule filtering
    /// 3. Overlap scoring, dropping zero scores
    /// 4. Ranking by overlap, length, then alphabetically
    pub fn ranked_matches(&self, prefix: &str, suffix: &str, rule: &Rule) -> Vec<Match> {
        let prefix = prefix.to_lowercase();
        let suffix = suffix.to_lowercase();
        let tails = prefix_tails(&prefix);

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut scored: Vec<(&Entry, usize)> = Vec::new();

        for entry in self.vocabulary {
            if !is_candidate(&entry.lower, &tails, &suffix) {
                continue;
            }
            if !seen.insert(entry.lower.as_str()) {
                continue;
            }
            if !rule.matches(entry, self.pos_index) {
                continue;
            }

            let overlap =
                prefix_overlap(&entry.lower, &prefix) + suffix_overlap(&entry.lower, &suffix);
            if overlap > 0 {
                scored.push((entry, overlap));
            }
        }

        scored.sort_by(|a, b| rank_order(a.1, a.0, b.1, b.0));

        scored
            .into_iter()
            .map(|(entry, overlap)| Match::new(entry.word.clone(), overlap))
            .collect()
    }
}

/// Ordering shared by the finder and every solver stage
///
/// Higher score first, then longer word, then alphabetical on the lowercase
/// form, with the display form as the final tiebreak.
pub(crate) fn rank_order(score_a: usize, a: &Entry, score_b: usize, b: &Entry) -> Ordering {
    score_b
        .cmp(&score_a)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.lower.cmp(&b.lower))
        .then_with(|| a.word.cmp(&b.word))
}

/// All suffixes of `prefix`, longest first, ending with the empty string
fn prefix_tails(prefix: &str) -> Vec<&str> {
    let mut tails: Vec<&str> = prefix.char_indices().map(|(idx, _)| &prefix[idx..]).collect();
    tails.push("");
    tails
}

/// Candidate test on the affixes alone
///
/// The first tail the word starts with decides: without a suffix the word
/// qualifies, with one it qualifies only if it ends with some non-empty head
/// of the suffix. Later tails are never tried.
fn is_candidate(word: &str, tails: &[&str], suffix: &str) -> bool {
    for tail in tails {
        if word.starts_with(tail) {
            if suffix.is_empty() {
                return true;
            }
            return suffix
                .char_indices()
                .skip(1)
                .map(|(idx, _)| &suffix[..idx])
                .chain(std::iter::once(suffix))
                .any(|head| word.ends_with(head));
        }
    }
    false
}
