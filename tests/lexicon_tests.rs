use std::path::Path;

use wordle_search::lexicon::{load_words, parse_words};
use wordle_search::{Error, Lexicon, SolverConfig, Word};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| word(w)).collect()
}

#[test]
fn test_parse_words_skips_blank_and_malformed_lines() {
    let parsed = parse_words("crane\n\n  slate  \nxyz\nab1de\nGRATE\n");
    assert_eq!(parsed, words(&["CRANE", "SLATE", "GRATE"]));
}

#[test]
fn test_load_missing_file() {
    let result = load_words(Path::new("does/not/exist.txt"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_empty_answer_set_is_rejected() {
    let config = SolverConfig::default();
    let result = Lexicon::new(words(&["CRANE"]), Vec::new(), &config);
    assert!(matches!(result, Err(Error::EmptyAnswerSet)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SolverConfig {
        max_search_nodes: 0,
        ..SolverConfig::default()
    };
    let result = Lexicon::new(words(&["CRANE"]), words(&["CRANE"]), &config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_vocabulary_includes_answers() {
    let config = SolverConfig::default();
    let lexicon = Lexicon::new(
        words(&["SLATE", "CRANE"]),
        words(&["GRATE", "CRANE", "GRATE"]),
        &config,
    )
    .unwrap();

    assert_eq!(lexicon.answers(), &words(&["CRANE", "GRATE"])[..]);
    assert_eq!(lexicon.vocabulary(), &words(&["CRANE", "GRATE", "SLATE"])[..]);
    assert!(lexicon.is_valid_guess(&word("GRATE")));
    assert!(!lexicon.is_valid_guess(&word("CRATE")));
}

#[test]
fn test_letter_statistics_come_from_answers() {
    let config = SolverConfig::default();
    let lexicon = Lexicon::new(words(&["SLATE"]), words(&["CRANE", "GRATE"]), &config).unwrap();

    assert_eq!(lexicon.letter_table().get(0, b'C'), 0.5);
    assert_eq!(lexicon.letter_table().get(0, b'S'), 0.0);
    assert_eq!(lexicon.letter_freqs().get(b'R'), 0.2);
}

#[test]
fn test_openers_start_with_first_guess() {
    let config = SolverConfig {
        first_guess: Some(word("SLATE")),
        opener_count: 3,
        ..SolverConfig::default()
    };
    let list = words(&["SLATE", "CRANE", "CHIRP", "GRATE"]);
    let lexicon = Lexicon::new(list.clone(), list, &config).unwrap();

    // Nothing after CHIRP avoids every covered letter.
    assert_eq!(lexicon.openers(), &words(&["SLATE", "CHIRP"])[..]);
}

#[test]
fn test_no_openers() {
    let config = SolverConfig {
        opener_count: 0,
        ..SolverConfig::default()
    };
    let list = words(&["SLATE", "CRANE"]);
    let lexicon = Lexicon::new(list.clone(), list, &config).unwrap();
    assert!(lexicon.openers().is_empty());
}

#[test]
fn test_random_answers_are_distinct() {
    let config = SolverConfig::default();
    let list = words(&["SLATE", "CRANE", "CHIRP", "GRATE", "PLATE"]);
    let lexicon = Lexicon::new(list.clone(), list, &config).unwrap();

    let mut sample = lexicon.random_answers(3);
    assert_eq!(sample.len(), 3);
    sample.sort();
    sample.dedup();
    assert_eq!(sample.len(), 3);
    assert!(sample.iter().all(|w| lexicon.answers().contains(w)));

    assert_eq!(lexicon.random_answers(50).len(), 5);
}
