//! Word-list loading and the read-only data shared by every game.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::opener::OpeningFinder;
use crate::stats::{flat_frequency, positional_table, LetterFrequencies, LetterTable};
use crate::word::Word;

/// Parse a line-delimited word list. Blank lines are skipped, malformed
/// entries are reported on stderr and skipped.
pub fn parse_words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    for line in text.lines() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.parse::<Word>() {
            Ok(word) => words.push(word),
            Err(_) => eprintln!("Warning: {} is not a valid word, and was skipped.", entry),
        }
    }
    words
}

/// Read a word list from a file (one word per line).
pub fn load_words(path: &Path) -> Result<Vec<Word>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&text))
}

/// Word lists and statistics computed once per process.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Every legal guess, answers included. Sorted.
    vocabulary: Vec<Word>,
    vocab_set: HashSet<Word>,
    /// Words that can be the secret. Sorted.
    answers: Vec<Word>,
    letter_table: LetterTable,
    letter_freqs: LetterFrequencies,
    openers: Vec<Word>,
}

impl Lexicon {
    pub fn new(guesses: Vec<Word>, mut answers: Vec<Word>, config: &SolverConfig) -> Result<Self> {
        config.validate()?;

        answers.sort_unstable();
        answers.dedup();

        let mut vocabulary = guesses;
        vocabulary.extend(answers.iter().copied());
        vocabulary.sort_unstable();
        vocabulary.dedup();

        let letter_table = positional_table(&answers, config.precision)?;
        let letter_freqs = flat_frequency(&answers, config.precision)?;
        let openers = OpeningFinder::new(&vocabulary, &letter_freqs)
            .find(config.first_guess, config.opener_count);

        if config.verbose {
            eprintln!(
                "Lexicon: {} guess words, {} answers, openers {:?}",
                vocabulary.len(),
                answers.len(),
                openers
            );
        }

        Ok(Self {
            vocab_set: vocabulary.iter().copied().collect(),
            vocabulary,
            answers,
            letter_table,
            letter_freqs,
            openers,
        })
    }

    pub fn load(guess_path: &Path, answer_path: &Path, config: &SolverConfig) -> Result<Self> {
        let guesses = load_words(guess_path)?;
        let answers = load_words(answer_path)?;
        Self::new(guesses, answers, config)
    }

    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.vocab_set.contains(word)
    }

    pub fn letter_table(&self) -> &LetterTable {
        &self.letter_table
    }

    pub fn letter_freqs(&self) -> &LetterFrequencies {
        &self.letter_freqs
    }

    pub fn openers(&self) -> &[Word] {
        &self.openers
    }

    /// Up to `n` distinct answers in random order.
    pub fn random_answers(&self, n: usize) -> Vec<Word> {
        let mut rng = rand::thread_rng();
        self.answers.choose_multiple(&mut rng, n).copied().collect()
    }
}
