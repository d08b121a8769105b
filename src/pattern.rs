// Fluxer Predicate Library
// Per-word letter properties and affix overlap scoring
//
// Every function expects an already lowercased word.

/// Vowels (y counts as a consonant)
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The 21 consonants
const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

#[inline]
fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

#[inline]
fn is_consonant(ch: char) -> bool {
    CONSONANTS.contains(&ch)
}

/// Count vowels in a word
///
/// # Examples
/// ```
/// # use fluxer::pattern::count_vowels;
/// assert_eq!(count_vowels("banana"), 3);
/// ```
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|c| is_vowel(*c)).count()
}

/// Count consonants in a word
///
/// Characters outside a-z are counted by neither this nor [`count_vowels`].
pub fn count_consonants(word: &str) -> usize {
    word.chars().filter(|c| is_consonant(*c)).count()
}

/// Two equal adjacent characters anywhere in the word
pub fn has_double_letters(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).any(|pair| pair[0] == pair[1])
}

/// Any character occurring more than once, adjacent or not
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = rustc_hash::FxHashSet::default();
    word.chars().any(|ch| !seen.insert(ch))
}

/// Vowels and consonants strictly alternate
///
/// The first character fixes which class even positions must hold. Characters
/// that are neither vowel nor consonant are skipped but still occupy a position.
///
/// # Examples
/// ```
/// # use fluxer::pattern::is_alternating_pattern;
/// assert!(is_alternating_pattern("abacus"));
/// assert!(!is_alternating_pattern("balloon"));
/// ```
pub fn is_alternating_pattern(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return true;
    }

    let vowel_start = is_vowel(chars[0]);

    for (i, &ch) in chars.iter().enumerate() {
        let vowel = is_vowel(ch);
        let consonant = is_consonant(ch);
        if !vowel && !consonant {
            continue;
        }

        let should_be_vowel = (i % 2 == 0) == vowel_start;
        if should_be_vowel != vowel {
            return false;
        }
    }

    true
}

/// Characters are already in non-decreasing order
pub fn is_alphabetical_order(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Longest suffix of `prefix` that `word` starts with, in characters
///
/// Suffixes are tried from the full `prefix` down to its last character, so the
/// first hit is the longest. An empty `prefix` scores 0.
///
/// # Examples
/// ```
/// # use fluxer::pattern::prefix_overlap;
/// assert_eq!(prefix_overlap("article", "start"), 3); // "art"
/// assert_eq!(prefix_overlap("cat", ""), 0);
/// ```
pub fn prefix_overlap(word: &str, prefix: &str) -> usize {
    for (idx, _) in prefix.char_indices() {
        let tail = &prefix[idx..];
        if word.starts_with(tail) {
            return tail.chars().count();
        }
    }
    0
}

/// Longest prefix of `suffix` that `word` ends with, in characters
///
/// # Examples
/// ```
/// # use fluxer::pattern::suffix_overlap;
/// assert_eq!(suffix_overlap("bust", "start"), 2); // "st"
/// ```
pub fn suffix_overlap(word: &str, suffix: &str) -> usize {
    if suffix.is_empty() {
        return 0;
    }

    let mut ends: Vec<usize> = suffix.char_indices().map(|(idx, _)| idx).skip(1).collect();
    ends.push(suffix.len());

    for (count, &end) in ends.iter().enumerate().rev() {
        if word.ends_with(&suffix[..end]) {
            return count + 1;
        }
    }
    0
}
