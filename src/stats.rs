//! Letter statistics computed once from the word lists.

use crate::config::round_to;
use crate::error::{Error, Result};
use crate::word::{letter_index, Word};
use crate::{ALPHABET_LEN, WORD_LENGTH};

/// Probability of each letter at each position.
///
/// Rows are positions, columns letters. A row does not have to sum to 1
/// after agents start overwriting entries with 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterTable {
    probs: [[f64; ALPHABET_LEN]; WORD_LENGTH],
}

impl LetterTable {
    pub fn get(&self, position: usize, letter: u8) -> f64 {
        self.probs[position][letter_index(letter)]
    }

    pub fn set(&mut self, position: usize, letter: u8, prob: f64) {
        self.probs[position][letter_index(letter)] = prob;
    }

    pub fn row(&self, position: usize) -> &[f64; ALPHABET_LEN] {
        &self.probs[position]
    }
}

/// Normalised frequency of each letter over all positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies(pub [f64; ALPHABET_LEN]);

impl LetterFrequencies {
    pub fn get(&self, letter: u8) -> f64 {
        self.0[letter_index(letter)]
    }
}

/// Positional letter probabilities of the answer set, rounded to `precision`.
pub fn positional_table(answers: &[Word], precision: u32) -> Result<LetterTable> {
    if answers.is_empty() {
        return Err(Error::EmptyAnswerSet);
    }

    let mut counts = [[0usize; ALPHABET_LEN]; WORD_LENGTH];
    for word in answers {
        for (position, &letter) in word.letters().iter().enumerate() {
            counts[position][letter_index(letter)] += 1;
        }
    }

    let total = answers.len() as f64;
    let mut probs = [[0.0; ALPHABET_LEN]; WORD_LENGTH];
    for (row, counts) in probs.iter_mut().zip(counts.iter()) {
        for (prob, &count) in row.iter_mut().zip(counts.iter()) {
            *prob = round_to(count as f64 / total, precision);
        }
    }

    Ok(LetterTable { probs })
}

/// Frequency of every letter across all words, positions ignored.
pub fn flat_frequency(words: &[Word], precision: u32) -> Result<LetterFrequencies> {
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }

    let mut counts = [0usize; ALPHABET_LEN];
    for word in words {
        for &letter in word.letters() {
            counts[letter_index(letter)] += 1;
        }
    }

    let total = (words.len() * WORD_LENGTH) as f64;
    let mut freqs = [0.0; ALPHABET_LEN];
    for (freq, &count) in freqs.iter_mut().zip(counts.iter()) {
        *freq = round_to(count as f64 / total, precision);
    }

    Ok(LetterFrequencies(freqs))
}
