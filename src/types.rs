// Fluxer Type Definitions
// Core types for rules, query results and errors

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Part-of-speech categories backed by pre-tagged word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosCategory {
    /// All categories, in word-list loading order
    pub const ALL: [PosCategory; 4] = [
        PosCategory::Noun,
        PosCategory::Verb,
        PosCategory::Adjective,
        PosCategory::Adverb,
    ];

    /// Parse a category name, accepting the short forms `adj` and `adv`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "noun" => Some(PosCategory::Noun),
            "verb" => Some(PosCategory::Verb),
            "adjective" | "adj" => Some(PosCategory::Adjective),
            "adverb" | "adv" => Some(PosCategory::Adverb),
            _ => None,
        }
    }
}

impl std::fmt::Display for PosCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosCategory::Noun => write!(f, "noun"),
            PosCategory::Verb => write!(f, "verb"),
            PosCategory::Adjective => write!(f, "adjective"),
            PosCategory::Adverb => write!(f, "adverb"),
        }
    }
}

impl std::str::FromStr for PosCategory {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| QueryError::UnknownCategory {
            name: s.to_string(),
        })
    }
}

/// A set of optional word constraints, AND-ed together
///
/// A `None`/`false` field leaves that axis unconstrained, so
/// `Rule::default()` accepts every word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Exact word length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Exact number of vowels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vowels: Option<usize>,

    /// Exact number of consonants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consonants: Option<usize>,

    /// Required part-of-speech membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosCategory>,

    /// Word must contain two equal adjacent letters
    #[serde(default)]
    pub double_letters: bool,

    /// Word must not use any letter twice
    #[serde(default)]
    pub no_repeats: bool,

    /// Word must alternate vowels and consonants
    #[serde(default)]
    pub alternating: bool,

    /// Letters must already be in alphabetical order
    #[serde(default)]
    pub alphabetical: bool,
}

impl Rule {
    /// Rule accepting every word
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_vowels(mut self, vowels: usize) -> Self {
        self.vowels = Some(vowels);
        self
    }

    pub fn with_consonants(mut self, consonants: usize) -> Self {
        self.consonants = Some(consonants);
        self
    }

    pub fn with_pos(mut self, pos: PosCategory) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_double_letters(mut self) -> Self {
        self.double_letters = true;
        self
    }

    pub fn with_no_repeats(mut self) -> Self {
        self.no_repeats = true;
        self
    }

    pub fn with_alternating(mut self) -> Self {
        self.alternating = true;
        self
    }

    pub fn with_alphabetical(mut self) -> Self {
        self.alphabetical = true;
        self
    }

    /// True when no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(length) = self.length {
            parts.push(format!("{}-letters", length));
        }
        if let Some(vowels) = self.vowels {
            parts.push(format!("{}-vowels", vowels));
        }
        if let Some(consonants) = self.consonants {
            parts.push(format!("{}-consonants", consonants));
        }
        if let Some(pos) = self.pos {
            parts.push(pos.to_string());
        }
        if self.double_letters {
            parts.push("double-letters".to_string());
        }
        if self.no_repeats {
            parts.push("no-repeats".to_string());
        }
        if self.alternating {
            parts.push("alternating".to_string());
        }
        if self.alphabetical {
            parts.push("alphabetical".to_string());
        }

        if parts.is_empty() {
            write!(f, "any")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// A vocabulary word with its overlap score against the query affixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Display form, as it appears in the vocabulary
    pub word: String,

    /// Prefix overlap plus suffix overlap (always > 0)
    pub overlap: usize,
}

impl Match {
    pub fn new(word: impl Into<String>, overlap: usize) -> Self {
        Self {
            word: word.into(),
            overlap,
        }
    }
}

/// A closed 4-word chain `[start, w1, w2, w3]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub chain: [String; 4],

    /// Sum of the three link overlaps and the closing overlap
    pub total_overlap: usize,
}

impl Solution {
    pub fn start(&self) -> &str {
        &self.chain[0]
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {} → {} → {}",
            self.chain[0].to_uppercase(),
            self.chain[1].to_uppercase(),
            self.chain[2].to_uppercase(),
            self.chain[3].to_uppercase()
        )
    }
}

/// Word-list loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list {path} contains no words")]
    EmptyWordList { path: PathBuf },
}

/// Query validation errors, raised before any search work is done
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid query: prefix is empty")]
    EmptyPrefix,

    #[error("Invalid query: starting word is empty")]
    EmptyStartWord,

    #[error("Expected exactly 3 rules, got {actual}")]
    RuleCount { actual: usize },

    #[error("Unrecognised rule '{token}'")]
    InvalidRule { token: String },

    #[error("Unknown part of speech '{name}': use noun, verb, adjective or adverb")]
    UnknownCategory { name: String },

    #[error("Regex compilation failed: {0}")]
    RegexError(String),
}

/// Top-level error type for the library API
#[derive(Debug, Error)]
pub enum FluxerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),
}
