// Fluxer Configuration
// Word-list locations and query defaults

use crate::types::PosCategory;
use std::path::{Path, PathBuf};

/// Default page size for the word finder
pub const DEFAULT_LIMIT: usize = 20;

/// Default cap on solutions collected by the solver
pub const DEFAULT_MAX_SOLUTIONS: usize = 5;

/// Default directory holding the word lists
pub const DEFAULT_WORDS_DIR: &str = "data";

/// Environment variable overriding the word-list directory in the CLIs
pub const WORDS_DIR_ENV: &str = "FLUXER_WORDS_DIR";

/// Main word-list file name
pub const MAIN_LIST: &str = "popular.txt";

/// Conventional file name for a category's word list
pub fn pos_list_name(category: PosCategory) -> &'static str {
    match category {
        PosCategory::Noun => "nouns.txt",
        PosCategory::Verb => "verbs.txt",
        PosCategory::Adjective => "adjectives.txt",
        PosCategory::Adverb => "adverbs.txt",
    }
}

/// Paths of the main word list and the four part-of-speech lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListConfig {
    pub words: PathBuf,
    pub nouns: PathBuf,
    pub verbs: PathBuf,
    pub adjectives: PathBuf,
    pub adverbs: PathBuf,
}

impl WordListConfig {
    /// Use the conventional file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join(MAIN_LIST),
            nouns: dir.join(pos_list_name(PosCategory::Noun)),
            verbs: dir.join(pos_list_name(PosCategory::Verb)),
            adjectives: dir.join(pos_list_name(PosCategory::Adjective)),
            adverbs: dir.join(pos_list_name(PosCategory::Adverb)),
        }
    }

    /// Replace the main word list, keeping the POS lists
    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = path.into();
        self
    }

    /// Path of a category's list
    pub fn pos_path(&self, category: PosCategory) -> &Path {
        match category {
            PosCategory::Noun => &self.nouns,
            PosCategory::Verb => &self.verbs,
            PosCategory::Adjective => &self.adjectives,
            PosCategory::Adverb => &self.adverbs,
        }
    }
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self::from_dir(DEFAULT_WORDS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_uses_conventional_names() {
        let config = WordListConfig::from_dir("/tmp/lists");
        assert_eq!(config.words, PathBuf::from("/tmp/lists/popular.txt"));
        assert_eq!(
            config.pos_path(PosCategory::Adjective),
            Path::new("/tmp/lists/adjectives.txt")
        );
    }

    #[test]
    fn test_with_words_overrides_main_list() {
        let config = WordListConfig::from_dir("lists").with_words("other.txt");
        assert_eq!(config.words, PathBuf::from("other.txt"));
        assert_eq!(config.nouns, PathBuf::from("lists/nouns.txt"));
    }

    #[test]
    fn test_default_dir() {
        let config = WordListConfig::default();
        assert_eq!(config.verbs, Path::new(DEFAULT_WORDS_DIR).join("verbs.txt"));
    }
}
