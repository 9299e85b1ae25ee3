//! Opening-sequence finder.
//!
//! Picks a fixed, secret-independent sequence of first guesses that together
//! cover as much of the frequent alphabet as possible. This runs once before
//! any game and the result is reused by every game.

use rayon::prelude::*;

use crate::stats::LetterFrequencies;
use crate::word::{LetterSet, Word};

pub struct OpeningFinder<'a> {
    vocab: &'a [Word],
    freqs: &'a LetterFrequencies,
    /// Letters already covered by a chosen opener.
    processed: LetterSet,
}

impl<'a> OpeningFinder<'a> {
    pub fn new(vocab: &'a [Word], freqs: &'a LetterFrequencies) -> Self {
        Self {
            vocab,
            freqs,
            processed: LetterSet::EMPTY,
        }
    }

    /// Returns up to `max_len` opening words. A `first_word` is always kept
    /// as the first opener, even when `max_len` is 0, and its letters count
    /// as processed.
    pub fn find(mut self, first_word: Option<Word>, max_len: usize) -> Vec<Word> {
        let mut openers = Vec::new();

        if let Some(word) = first_word {
            self.mark_processed(&word);
            openers.push(word);
        }

        while openers.len() < max_len {
            match self.best_word() {
                Some(word) => {
                    self.mark_processed(&word);
                    openers.push(word);
                }
                None => break,
            }
        }

        openers
    }

    /// Sum of the frequencies of the word's distinct letters, or 0 when it
    /// reuses a processed letter.
    pub fn score(&self, word: &Word) -> f64 {
        let letters = word.distinct_letters();
        if letters.iter().any(|l| self.processed.contains(l)) {
            return 0.0;
        }
        letters.iter().map(|l| self.freqs.get(l)).sum()
    }

    fn best_word(&self) -> Option<Word> {
        let scores: Vec<f64> = self.vocab.par_iter().map(|w| self.score(w)).collect();

        let mut best: Option<(Word, f64)> = None;
        for (word, score) in self.vocab.iter().zip(scores) {
            if score <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*word, score));
            }
        }
        best.map(|(word, _)| word)
    }

    fn mark_processed(&mut self, word: &Word) {
        for &letter in word.letters() {
            self.processed.insert(letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALPHABET_LEN;

    fn vowel_heavy() -> LetterFrequencies {
        let mut freqs = [0.01; ALPHABET_LEN];
        for (letter, freq) in [(b'A', 0.2), (b'I', 0.15), (b'O', 0.15), (b'U', 0.15)] {
            freqs[(letter - b'A') as usize] = freq;
        }
        LetterFrequencies(freqs)
    }

    #[test]
    fn picks_word_covering_frequent_letters() {
        let vocab: Vec<Word> = ["RAISE", "AUDIO", "CRANE"]
            .iter()
            .map(|w| w.parse().unwrap())
            .collect();
        let freqs = vowel_heavy();
        let openers = OpeningFinder::new(&vocab, &freqs).find(None, 3);
        // Every other word shares the A with AUDIO.
        assert_eq!(openers, vec!["AUDIO".parse::<Word>().unwrap()]);
    }

    #[test]
    fn seed_word_is_kept_and_its_letters_excluded() {
        let vocab: Vec<Word> = ["AUDIO", "CRWTH", "LYMPH", "BIGOT"]
            .iter()
            .map(|w| w.parse().unwrap())
            .collect();
        let freqs = vowel_heavy();
        let seed: Word = "CRANE".parse().unwrap();
        let openers = OpeningFinder::new(&vocab, &freqs).find(Some(seed), 4);
        assert_eq!(openers[0], seed);
        assert_eq!(openers.len(), 3);
        for opener in &openers[1..] {
            for &letter in opener.letters() {
                assert!(!seed.contains(letter));
            }
        }
        // No two openers share a letter.
        let mut seen = LetterSet::EMPTY;
        for opener in &openers {
            for letter in opener.distinct_letters().iter() {
                assert!(!seen.contains(letter));
            }
            for &letter in opener.letters() {
                seen.insert(letter);
            }
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let vocab: Vec<Word> = vec!["AUDIO".parse::<Word>().unwrap()];
        let freqs = vowel_heavy();
        assert!(OpeningFinder::new(&vocab, &freqs).find(None, 0).is_empty());
    }

    #[test]
    fn seed_word_survives_zero_length() {
        let vocab: Vec<Word> = vec!["AUDIO".parse::<Word>().unwrap()];
        let freqs = vowel_heavy();
        let seed: Word = "CRANE".parse().unwrap();
        let openers = OpeningFinder::new(&vocab, &freqs).find(Some(seed), 0);
        assert_eq!(openers, vec![seed]);
    }
}
