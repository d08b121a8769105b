// Fluxer Data Loader
// Reads the main word list and the part-of-speech lists from disk

use crate::config::WordListConfig;
use crate::types::{LoadError, PosCategory};
use crate::vocab::{parse_word_list, PosIndex, Vocabulary};
use std::path::Path;
use tracing::{info, warn};

/// Result of loading every list
///
/// POS lists that failed to load are left empty and their errors kept in
/// `warnings`.
#[derive(Debug)]
pub struct LoadedLists {
    pub vocabulary: Vocabulary,
    pub pos_index: PosIndex,
    pub warnings: Vec<LoadError>,
}

/// Word-list loader utility
pub struct DataLoader;

impl DataLoader {
    /// Read one word-list file
    pub fn read_list(path: &Path) -> Result<Vec<String>, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_word_list(&text))
    }

    /// Load the vocabulary and all POS lists
    ///
    /// # Errors
    /// Fails if the main list cannot be read or holds no words. Missing POS
    /// lists only produce warnings.
    pub fn load(config: &WordListConfig) -> Result<LoadedLists, LoadError> {
        let words = Self::read_list(&config.words)?;
        if words.is_empty() {
            return Err(LoadError::EmptyWordList {
                path: config.words.clone(),
            });
        }
        let vocabulary = Vocabulary::new(words);
        info!(path = %config.words.display(), words = vocabulary.len(), "loaded word list");

        let mut pos_index = PosIndex::new();
        let mut warnings = Vec::new();

        for category in PosCategory::ALL {
            let path = config.pos_path(category);
            match Self::read_list(path) {
                Ok(list) => {
                    info!(%category, words = list.len(), "loaded part-of-speech list");
                    pos_index.insert_list(category, list);
                }
                Err(err) => {
                    warn!(
                        %category,
                        error = %err,
                        "part-of-speech list unavailable, category left empty"
                    );
                    warnings.push(err);
                }
            }
        }

        Ok(LoadedLists {
            vocabulary,
            pos_index,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_lists(dir: &Path, skip: &[&str]) {
        let files = [
            ("popular.txt", "Cat\ncats\n\n  tape \napex\n"),
            ("nouns.txt", "cat\ncats\n"),
            ("verbs.txt", "tape\n"),
            ("adjectives.txt", ""),
            ("adverbs.txt", "apex\n"),
        ];
        for (name, body) in files {
            if !skip.contains(&name) {
                fs::write(dir.join(name), body).unwrap();
            }
        }
    }

    #[test]
    fn test_load_all_lists() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), &[]);

        let loaded = DataLoader::load(&WordListConfig::from_dir(dir.path())).unwrap();

        assert_eq!(loaded.vocabulary.len(), 4);
        assert_eq!(loaded.vocabulary.entries()[0].word, "Cat");
        assert_eq!(loaded.vocabulary.entries()[2].word, "tape");
        assert!(loaded.warnings.is_empty());
        assert!(loaded.pos_index.is_word_in_category("cat", PosCategory::Noun));
        assert_eq!(loaded.pos_index.category_len(PosCategory::Adjective), 0);
    }

    #[test]
    fn test_missing_pos_list_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), &["verbs.txt", "adverbs.txt"]);

        let loaded = DataLoader::load(&WordListConfig::from_dir(dir.path())).unwrap();

        assert_eq!(loaded.warnings.len(), 2);
        assert!(matches!(loaded.warnings[0], LoadError::Io { .. }));
        assert!(!loaded.pos_index.is_word_in_category("tape", PosCategory::Verb));
        assert!(loaded.pos_index.is_word_in_category("cats", PosCategory::Noun));
    }

    #[test]
    fn test_missing_main_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), &["popular.txt"]);

        let result = DataLoader::load(&WordListConfig::from_dir(dir.path()));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_empty_main_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), &[]);
        fs::write(dir.path().join("popular.txt"), "\n \n").unwrap();

        let result = DataLoader::load(&WordListConfig::from_dir(dir.path()));
        assert!(matches!(result, Err(LoadError::EmptyWordList { .. })));
    }

    #[test]
    fn test_read_list_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "a\nb\na\n").unwrap();

        assert_eq!(DataLoader::read_list(&path).unwrap(), vec!["a", "b", "a"]);
    }
}
