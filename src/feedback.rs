//! Feedback calculation for Wordle guesses.
//!
//! This module computes the per-letter rating (exact/misplaced/absent) of a
//! guess against a secret word. It is independent of any solving strategy.

use std::fmt;

use crate::word::{letter_index, Word};
use crate::{ALPHABET_LEN, WORD_LENGTH};

/// Rating of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterRating {
    /// Letter not in word (or all instances already accounted for)
    Absent,
    /// Letter in word but at another position
    Misplaced,
    /// Correct letter in correct position
    Exact,
}

impl LetterRating {
    /// Digit used by the game reports: 0 absent, 1 misplaced, 2 exact.
    pub fn to_digit(self) -> char {
        match self {
            LetterRating::Absent => '0',
            LetterRating::Misplaced => '1',
            LetterRating::Exact => '2',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            LetterRating::Exact => '🟩',
            LetterRating::Misplaced => '🟨',
            LetterRating::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray, or 0/1/2)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(LetterRating::Exact),
            'y' | '1' => Some(LetterRating::Misplaced),
            'b' | 'x' | '0' => Some(LetterRating::Absent),
            _ => None,
        }
    }

    /// Whether this mark proves an occurrence of the letter in the secret.
    pub fn is_credit(self) -> bool {
        self != LetterRating::Absent
    }
}

/// The rating of a whole guess, one entry per guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rating(pub [LetterRating; WORD_LENGTH]);

impl Rating {
    pub const ALL_EXACT: Self = Rating([LetterRating::Exact; WORD_LENGTH]);

    pub fn ratings(&self) -> &[LetterRating; WORD_LENGTH] {
        &self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_EXACT
    }

    /// Number of exact or misplaced marks given to `letter` in `guess`.
    pub fn credited(&self, guess: &Word, letter: u8) -> usize {
        guess
            .letters()
            .iter()
            .zip(self.0.iter())
            .filter(|(&l, r)| l == letter && r.is_credit())
            .count()
    }

    /// Parse a rating from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let ratings: Option<Vec<_>> = s.chars().map(LetterRating::from_char).collect();
        let arr: [LetterRating; WORD_LENGTH] = ratings?.try_into().ok()?;
        Some(Rating(arr))
    }

    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|r| r.to_emoji()).collect()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.0.iter().map(|r| r.to_digit()).collect();
        f.write_str(&digits)
    }
}

/// Rate `guess` against `secret`.
///
/// Exact matches are allocated first, then misplaced credit is handed out
/// from what remains of the secret's letters, so a letter never receives
/// more exact/misplaced marks than it has occurrences in the secret.
pub fn rate(secret: &Word, guess: &Word) -> Rating {
    let secret = secret.letters();
    let guess = guess.letters();

    let mut ratings = [LetterRating::Absent; WORD_LENGTH];
    let mut remaining = [0u8; ALPHABET_LEN];

    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            ratings[i] = LetterRating::Exact;
        } else {
            remaining[letter_index(secret[i])] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if ratings[i] != LetterRating::Exact {
            let idx = letter_index(guess[i]);
            if remaining[idx] > 0 {
                ratings[i] = LetterRating::Misplaced;
                remaining[idx] -= 1;
            }
        }
    }

    Rating(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credited_counts_exact_and_misplaced() {
        let secret: Word = "ALLOW".parse().unwrap();
        let guess: Word = "LLAMA".parse().unwrap();
        let rating = rate(&secret, &guess);
        assert_eq!(rating.credited(&guess, b'L'), 2);
        assert_eq!(rating.credited(&guess, b'A'), 1);
        assert_eq!(rating.credited(&guess, b'M'), 0);
    }
}
