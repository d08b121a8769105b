// Fluxer Vocabulary
// The word list and part-of-speech membership sets queries run against

use crate::types::PosCategory;
use rustc_hash::{FxHashMap, FxHashSet};

/// Split word-list text into tokens
///
/// One token per line; surrounding whitespace is trimmed, blank lines are
/// dropped, order is kept and duplicates are not removed.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A vocabulary word in display form plus its lowercase form used for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Word as loaded, casing preserved
    pub word: String,

    /// Lowercase form, used for every comparison
    pub lower: String,
}

impl Entry {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let lower = word.to_lowercase();
        Self { word, lower }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.lower.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// Ordered, immutable list of words
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<Entry>,
}

impl Vocabulary {
    /// Build a vocabulary, keeping order and duplicates
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: words.into_iter().map(Entry::new).collect(),
        }
    }

    /// Build a vocabulary from word-list text
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_word_list(text))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Part-of-speech membership sets, keyed by category
///
/// Words are stored lowercase. A category with no list loaded answers
/// `false` for every word.
#[derive(Debug, Clone, Default)]
pub struct PosIndex {
    sets: FxHashMap<PosCategory, FxHashSet<String>>,
}

impl PosIndex {
    /// Create an index with every category empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words to a category
    pub fn insert_list<I, S>(&mut self, category: PosCategory, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.sets.entry(category).or_default();
        for word in words {
            set.insert(word.as_ref().trim().to_lowercase());
        }
    }

    /// Builder form of [`PosIndex::insert_list`]
    pub fn with_list<I, S>(mut self, category: PosCategory, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_list(category, words);
        self
    }

    /// Case-insensitive membership test
    pub fn is_word_in_category(&self, word: &str, category: PosCategory) -> bool {
        match self.sets.get(&category) {
            Some(set) => set.contains(&word.to_lowercase()),
            None => false,
        }
    }

    /// Membership test for an already lowercased word
    #[inline]
    pub(crate) fn contains_lower(&self, lower: &str, category: PosCategory) -> bool {
        self.sets
            .get(&category)
            .is_some_and(|set| set.contains(lower))
    }

    /// Number of words tagged with a category
    pub fn category_len(&self, category: PosCategory) -> usize {
        self.sets.get(&category).map_or(0, |set| set.len())
    }

    /// Get counts of words per category
    pub fn counts(&self) -> FxHashMap<PosCategory, usize> {
        PosCategory::ALL
            .iter()
            .map(|&category| (category, self.category_len(category)))
            .collect()
    }
}
