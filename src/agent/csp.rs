//! Constraint-propagation solver.
//!
//! Keeps green/yellow/gray letter constraints and, every turn, filters the
//! answer list down to the words that satisfy all of them. There is no
//! scoring: the first surviving answer is guessed.

use crate::agent::ScoringAgent;
use crate::config::SolverConfig;
use crate::feedback::{rate, LetterRating, Rating};
use crate::lexicon::Lexicon;
use crate::word::{LetterSet, Word};
use crate::WORD_LENGTH;

/// Letter constraints gathered from previous guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessStatus {
    /// Letters in known position
    pub green: [Option<u8>; WORD_LENGTH],
    /// Letters in the answer but not at this position
    pub yellow: [LetterSet; WORD_LENGTH],
    /// Letters not in the answer
    pub gray: LetterSet,
    /// Letters used in guesses so far
    pub used: LetterSet,
}

impl GuessStatus {
    /// Record a rating as set updates. An absent mark for a letter that is
    /// credited elsewhere in the same guess only rules out that position.
    pub fn update(&mut self, guess: &Word, rating: &Rating) {
        for (i, (&letter, &mark)) in guess.letters().iter().zip(rating.ratings()).enumerate() {
            self.used.insert(letter);
            match mark {
                LetterRating::Exact => self.green[i] = Some(letter),
                LetterRating::Misplaced => self.yellow[i].insert(letter),
                LetterRating::Absent if rating.credited(guess, letter) > 0 => {
                    self.yellow[i].insert(letter)
                }
                LetterRating::Absent => self.gray.insert(letter),
            }
        }
    }

    /// Whether `word` satisfies every constraint.
    pub fn allows(&self, word: &Word) -> bool {
        let letters = word.letters();
        for (i, yellow) in self.yellow.iter().enumerate() {
            for letter in yellow.iter() {
                if !word.contains(letter) || letters[i] == letter {
                    return false;
                }
            }
        }
        if letters.iter().any(|&l| self.gray.contains(l)) {
            return false;
        }
        self.green
            .iter()
            .zip(letters.iter())
            .all(|(green, &letter)| green.map_or(true, |g| g == letter))
    }
}

/// Outcome of [`CspSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspOutcome {
    pub solved: bool,
    pub guesses: Vec<Word>,
}

#[derive(Debug, Clone)]
pub struct CspSolver {
    status: GuessStatus,
    answers: Vec<Word>,
    guesses: Vec<Word>,
    opening: Option<Word>,
    guess_list: Vec<Word>,
}

impl CspSolver {
    pub fn new(lexicon: &Lexicon, config: &SolverConfig) -> Self {
        Self::from_lists(
            lexicon.answers().to_vec(),
            lexicon.vocabulary().to_vec(),
            config.csp_opening,
        )
    }

    pub fn from_lists(answers: Vec<Word>, guesses: Vec<Word>, opening: Option<Word>) -> Self {
        Self {
            status: GuessStatus::default(),
            answers,
            guesses,
            opening,
            guess_list: Vec::new(),
        }
    }

    pub fn status(&self) -> &GuessStatus {
        &self.status
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Guessable words not tried yet.
    pub fn remaining_guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Words guessed so far, in order.
    pub fn guess_list(&self) -> &[Word] {
        &self.guess_list
    }

    pub fn filter(&self, word: &Word) -> bool {
        self.status.allows(word)
    }

    /// Words of `words` that pass [`CspSolver::filter`], order preserved.
    pub fn filter_answers(&self, words: &[Word]) -> Vec<Word> {
        words.iter().copied().filter(|w| self.filter(w)).collect()
    }

    /// Narrow the answer list and return its first survivor.
    pub fn get_next_guess(&mut self) -> Option<Word> {
        self.answers = self.filter_answers(&self.answers);
        self.answers.first().copied()
    }

    /// Track a guess and drop it from both candidate pools.
    pub fn register_guess(&mut self, guess: Word) {
        self.guess_list.push(guess);
        self.answers.retain(|w| *w != guess);
        self.guesses.retain(|w| *w != guess);
    }

    /// Rate `guess` against `secret` and record the result.
    pub fn generate_feedback(&mut self, guess: &Word, secret: &Word) {
        let rating = rate(secret, guess);
        self.status.update(guess, &rating);
    }

    /// Play a whole game against a known secret. Without a `starting_word`
    /// the configured opening is used, then the first answer.
    pub fn solve(&mut self, secret: &Word, starting_word: Option<Word>) -> CspOutcome {
        let opening = self.opening.take();
        let mut guess = match starting_word.or(opening) {
            Some(word) => Some(word),
            None => self.get_next_guess(),
        };

        while let Some(current) = guess {
            self.register_guess(current);
            if current == *secret {
                return CspOutcome {
                    solved: true,
                    guesses: self.guess_list.clone(),
                };
            }
            self.generate_feedback(&current, secret);
            guess = self.get_next_guess();
        }

        CspOutcome {
            solved: false,
            guesses: self.guess_list.clone(),
        }
    }
}

impl ScoringAgent for CspSolver {
    fn get_guess(&mut self) -> Option<Word> {
        let guess = match self.opening.take() {
            Some(word) => word,
            None => self.get_next_guess()?,
        };
        self.register_guess(guess);
        Some(guess)
    }

    fn process_feedback(&mut self, guess: Word, rating: &Rating) {
        self.status.update(&guess, rating);
    }

    fn name(&self) -> &'static str {
        "csp"
    }
}
