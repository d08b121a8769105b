// End-to-end tests: word-list loading, rule parsing and the query API

use fluxer::pattern::{
    has_double_letters, has_repeated_letters, is_alphabetical_order, is_alternating_pattern,
};
use fluxer::{
    parse_rule, parse_rules, CancelToken, FindQuery, Fluxer, FluxerError, LoadError, PosCategory,
    QueryError, Rule, SolveOptions, SolveStatus, WordListConfig,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn write_lists(dir: &Path) {
    let words = "article\ntartan\nclear\nantler\nearns\nlerst\nzebra\n";
    fs::write(dir.join("popular.txt"), words).unwrap();
    fs::write(dir.join("nouns.txt"), "article\nzebra\n").unwrap();
    fs::write(dir.join("verbs.txt"), "earns\n").unwrap();
    fs::write(dir.join("adjectives.txt"), "clear\n").unwrap();
    fs::write(dir.join("adverbs.txt"), "").unwrap();
}

// ============ Letter Predicates ============

#[test]
fn test_predicate_workflow() {
    assert!(is_alternating_pattern("abacus"));
    assert!(!is_alternating_pattern("balloon"));
    assert!(has_double_letters("balloon"));
    assert!(has_repeated_letters("balloon"));
    assert!(is_alphabetical_order("abcdef"));
    assert!(!is_alphabetical_order("dcba"));
}

// ============ Rule Parsing ============

#[test]
fn test_rule_tokens_combine() {
    let rule = parse_rule("noun+6-letters+no-repeats").unwrap();

    assert_eq!(rule.pos, Some(PosCategory::Noun));
    assert_eq!(rule.length, Some(6));
    assert!(rule.no_repeats);
    assert_eq!(rule.to_string(), "6-letters, noun, no-repeats");
}

#[test]
fn test_rule_list_errors() {
    assert!(matches!(
        parse_rules("noun,sparkly,any"),
        Err(QueryError::InvalidRule { .. })
    ));
    assert_eq!(parse_rules("any,any").unwrap().len(), 2);
}

// ============ Loading ============

#[test]
fn test_load_from_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());

    let (fluxer, warnings) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;
    let (total, counts) = fluxer.stats();

    assert!(warnings.is_empty());
    assert_eq!(total, 7);
    assert_eq!(counts[&PosCategory::Noun], 2);
    assert_eq!(counts[&PosCategory::Adverb], 0);
    Ok(())
}

#[test]
fn test_missing_pos_lists_degrade() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());
    fs::remove_file(dir.path().join("nouns.txt"))?;

    let (fluxer, warnings) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;
    assert_eq!(warnings.len(), 1);

    // Noun stage has nothing to offer, which is not an error
    let rules = parse_rules("noun,any,any")?;
    let outcome = fluxer.solve("start", &rules, &SolveOptions::new())?;
    assert_eq!(outcome.status, SolveStatus::NoStageOneMatch);
    Ok(())
}

#[test]
fn test_missing_word_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Fluxer::load(&WordListConfig::from_dir(dir.path()));

    assert!(matches!(result, Err(FluxerError::Load(LoadError::Io { .. }))));
}

// ============ Full Workflows ============

#[test]
fn test_find_then_solve() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());
    let (fluxer, _) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;

    let found = fluxer.find(&FindQuery::new("start"))?;
    assert_eq!(found.matches[0].word, "tartan");
    assert_eq!(found.matches[0].overlap, 4);

    let rules = parse_rules("noun,5-letters,any")?;
    let outcome = fluxer.solve("start", &rules, &SolveOptions::new().find_all())?;
    let middles: Vec<&str> = outcome.solutions.iter().map(|s| s.chain[2].as_str()).collect();

    assert_eq!(outcome.pool_sizes, [2, 4, 7]);
    assert!(outcome.solutions.iter().all(|s| s.chain[1] == "article"));
    assert!(middles.iter().all(|w| ["clear", "lerst", "earns"].contains(w)));
    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());
    let (fluxer, _) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;

    let found = serde_json::to_value(fluxer.find(&FindQuery::new("start").with_limit(1))?)?;
    assert_eq!(found["total"], 2);
    assert_eq!(found["matches"][0]["word"], "tartan");

    let rules = vec![Rule::any(); 3];
    let outcome = fluxer.solve("start", &rules, &SolveOptions::new())?;
    let solved = serde_json::to_value(outcome)?;
    assert_eq!(solved["status"], "limit_reached");
    assert_eq!(solved["solutions"][0]["total_overlap"], 11);
    Ok(())
}

#[test]
fn test_background_search_cancels() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());
    let (fluxer, _) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;
    let token = CancelToken::new();
    token.cancel();

    let handle = Arc::new(fluxer).solve_in_background(
        "start",
        vec![Rule::any(); 3],
        SolveOptions::new().find_all().with_cancel(token),
    )?;
    let outcome = handle.join()?;

    assert_eq!(outcome.status, SolveStatus::Cancelled);
    assert!(outcome.is_empty());
    Ok(())
}

#[test]
fn test_background_rejects_wrong_rule_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_lists(dir.path());
    let (fluxer, _) = Fluxer::load(&WordListConfig::from_dir(dir.path()))?;

    let result =
        Arc::new(fluxer).solve_in_background("start", vec![Rule::any(); 2], SolveOptions::new());

    assert!(matches!(
        result,
        Err(FluxerError::Query(QueryError::RuleCount { actual: 2 }))
    ));
    Ok(())
}
