//! Exhaustive scorer: rates the whole remaining vocabulary every turn.

use rayon::prelude::*;

use crate::agent::{Knowledge, ScoringAgent};
use crate::config::{round_to, SolverConfig};
use crate::feedback::Rating;
use crate::lexicon::Lexicon;
use crate::word::Word;
use crate::WORD_LENGTH;

#[derive(Debug, Clone)]
pub struct ExhaustiveScorer {
    vocab: Vec<Word>,
    knowledge: Knowledge,
    precision: u32,
}

impl ExhaustiveScorer {
    pub fn new(lexicon: &Lexicon, config: &SolverConfig) -> Self {
        Self {
            vocab: lexicon.vocabulary().to_vec(),
            knowledge: Knowledge::new(lexicon.letter_table().clone()),
            precision: config.precision,
        }
    }

    /// Sum of positional probabilities plus a bonus of `1/WORD_LENGTH` per
    /// known-but-unplaced copy of each letter. Zero if any letter is
    /// impossible at its position.
    pub fn score(&self, word: &Word) -> f64 {
        let table = self.knowledge.table();
        let bonus = 1.0 / WORD_LENGTH as f64;
        let mut score = 0.0;
        for (i, &letter) in word.letters().iter().enumerate() {
            let prob = table.get(i, letter);
            if prob == 0.0 {
                return 0.0;
            }
            score += prob + bonus * self.knowledge.known_count(letter) as f64;
        }
        round_to(score, self.precision)
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn remaining(&self) -> usize {
        self.vocab.len()
    }
}

impl ScoringAgent for ExhaustiveScorer {
    fn get_guess(&mut self) -> Option<Word> {
        let scores: Vec<f64> = self.vocab.par_iter().map(|w| self.score(w)).collect();

        let mut best: Option<(usize, f64)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if score > 0.0 && best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
        }
        let guess = best.map(|(i, _)| self.vocab[i]);

        let mut scores = scores.into_iter();
        self.vocab.retain(|word| {
            let score = scores.next().unwrap_or(0.0);
            score > 0.0 && Some(*word) != guess
        });

        guess
    }

    fn process_feedback(&mut self, guess: Word, rating: &Rating) {
        self.knowledge.apply(&guess, rating);
    }

    fn name(&self) -> &'static str {
        "brute"
    }
}
