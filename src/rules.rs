// Fluxer Rules
// Evaluates rules against vocabulary words and parses rule tokens

use crate::pattern::{
    count_consonants, count_vowels, has_double_letters, has_repeated_letters,
    is_alphabetical_order, is_alternating_pattern,
};
use crate::types::{PosCategory, QueryError, Rule};
use crate::vocab::{Entry, PosIndex, Vocabulary};
use regex::Regex;

/// Count tokens such as `6-letters`, `3-vowels`, `1-consonant`
const COUNT_RULE: &str = r"^(\d+)-(letters?|vowels?|consonants?)$";

impl Rule {
    /// Check a vocabulary entry against every active constraint
    ///
    /// Cheap length/count checks run before the set lookup and letter scans.
    pub fn matches(&self, entry: &Entry, pos_index: &PosIndex) -> bool {
        let word = entry.lower.as_str();

        if let Some(length) = self.length {
            if entry.len() != length {
                return false;
            }
        }
        if let Some(vowels) = self.vowels {
            if count_vowels(word) != vowels {
                return false;
            }
        }
        if let Some(consonants) = self.consonants {
            if count_consonants(word) != consonants {
                return false;
            }
        }
        if let Some(pos) = self.pos {
            if !pos_index.contains_lower(word, pos) {
                return false;
            }
        }
        if self.double_letters && !has_double_letters(word) {
            return false;
        }
        if self.no_repeats && has_repeated_letters(word) {
            return false;
        }
        if self.alternating && !is_alternating_pattern(word) {
            return false;
        }
        if self.alphabetical && !is_alphabetical_order(word) {
            return false;
        }

        true
    }

    /// Check a bare word, in any casing
    pub fn matches_word(&self, word: &str, pos_index: &PosIndex) -> bool {
        self.matches(&Entry::new(word), pos_index)
    }

    /// The vocabulary entries this rule accepts, in vocabulary order
    pub fn pool<'v>(&self, vocabulary: &'v Vocabulary, pos_index: &PosIndex) -> Vec<&'v Entry> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            vocabulary
                .entries()
                .par_iter()
                .filter(|entry| self.matches(entry, pos_index))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            vocabulary
                .iter()
                .filter(|entry| self.matches(entry, pos_index))
                .collect()
        }
    }
}

/// Parse one rule made of `+`-joined tokens
///
/// # Token Syntax
/// - `noun`, `verb`, `adjective`/`adj`, `adverb`/`adv`
/// - `double-letters`/`double`, `no-repeats`/`no-repeated`
/// - `alternating`/`alt`, `alphabetical`/`alpha`
/// - `N-letters`, `N-vowels`, `N-consonants` (singular forms accepted)
/// - `any` (no constraint)
///
/// # Examples
/// ```
/// # use fluxer::rules::parse_rule;
/// # use fluxer::types::{PosCategory, Rule};
/// let rule = parse_rule("noun+6-letters").unwrap();
/// assert_eq!(rule, Rule::any().with_pos(PosCategory::Noun).with_length(6));
/// ```
pub fn parse_rule(text: &str) -> Result<Rule, QueryError> {
    let count_re = Regex::new(COUNT_RULE).map_err(|e| QueryError::RegexError(e.to_string()))?;

    let mut rule = Rule::default();
    for token in text.split('+') {
        apply_token(&mut rule, token, &count_re)?;
    }
    Ok(rule)
}

/// Parse a comma-separated list of rules, one per solver stage
///
/// The count is not checked here; the solver rejects anything but three.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, QueryError> {
    text.split(',').map(parse_rule).collect()
}

impl std::str::FromStr for Rule {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

fn apply_token(rule: &mut Rule, raw: &str, count_re: &Regex) -> Result<(), QueryError> {
    let token = raw.trim().to_lowercase();

    match token.as_str() {
        "any" => return Ok(()),
        "double-letters" | "double" => {
            rule.double_letters = true;
            return Ok(());
        }
        "no-repeats" | "no-repeated" => {
            rule.no_repeats = true;
            return Ok(());
        }
        "alternating" | "alt" => {
            rule.alternating = true;
            return Ok(());
        }
        "alphabetical" | "alpha" => {
            rule.alphabetical = true;
            return Ok(());
        }
        _ => {}
    }

    if let Some(pos) = PosCategory::from_name(&token) {
        rule.pos = Some(pos);
        return Ok(());
    }

    let invalid = || QueryError::InvalidRule {
        token: raw.trim().to_string(),
    };

    let caps = count_re.captures(&token).ok_or_else(invalid)?;
    let count: usize = caps[1].parse().map_err(|_| invalid())?;

    match &caps[2] {
        "letter" | "letters" => rule.length = Some(count),
        "vowel" | "vowels" => rule.vowels = Some(count),
        _ => rule.consonants = Some(count),
    }

    Ok(())
}
