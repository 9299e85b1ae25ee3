//! Word and letter-set value types.
//!
//! Words are stored as fixed-size arrays of ASCII uppercase letters so they
//! can be copied, hashed and compared without allocation.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{ALPHABET_LEN, WORD_LENGTH};

/// Index of an uppercase ASCII letter in the alphabet (`A` = 0).
#[inline]
pub fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase());
    (letter - b'A') as usize
}

/// Uppercase ASCII letter for an alphabet index.
#[inline]
pub fn index_letter(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_LEN);
    b'A' + index as u8
}

/// A word of `WORD_LENGTH` uppercase letters.
///
/// Only built through [`Word::from_ascii`] or [`FromStr`], so every byte is
/// in `A..=Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Word from uppercase ASCII bytes, for constants.
    ///
    /// # Panics
    ///
    /// Panics if a byte is not in `A..=Z`. In a `const` item this is a
    /// compile error.
    pub const fn from_ascii(letters: [u8; WORD_LENGTH]) -> Self {
        let mut i = 0;
        while i < WORD_LENGTH {
            assert!(letters[i].is_ascii_uppercase(), "word letters must be A-Z");
            i += 1;
        }
        Word(letters)
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Copy of this word with the letter at `position` replaced.
    pub fn with_letter(self, position: usize, letter: u8) -> Self {
        debug_assert!(letter.is_ascii_uppercase());
        let mut letters = self.0;
        letters[position] = letter;
        Word(letters)
    }

    /// Number of occurrences of each letter.
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    pub fn distinct_letters(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.len() != WORD_LENGTH {
            return Err(Error::InvalidWord {
                word: s.to_string(),
                reason: "wrong length",
            });
        }
        if !upper.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::InvalidWord {
                word: s.to_string(),
                reason: "contains a character outside A-Z",
            });
        }
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(upper.as_bytes());
        Ok(Word(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

/// A set of letters packed into the low 26 bits of a `u32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = LetterSet(0);
    pub const ALL: Self = LetterSet((1 << ALPHABET_LEN) - 1);

    pub fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    /// Returns whether the letter was present.
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !(1 << letter_index(letter));
        present
    }

    pub fn only(letter: u8) -> Self {
        LetterSet(1 << letter_index(letter))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(index_letter)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = LetterSet::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(word.to_string(), "CRANE");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("cran".parse::<Word>().is_err());
        assert!("cr4ne".parse::<Word>().is_err());
        assert!("cranes".parse::<Word>().is_err());
    }

    #[test]
    fn const_words_match_parsed_words() {
        const SEED: Word = Word::from_ascii(*b"SORES");
        assert_eq!(SEED, "sores".parse::<Word>().unwrap());
    }

    #[test]
    #[should_panic]
    fn from_ascii_rejects_lowercase() {
        Word::from_ascii(*b"sores");
    }

    #[test]
    fn letter_set_basics() {
        let mut set: LetterSet = "ABBEY".bytes().collect();
        assert_eq!(set.len(), 4);
        assert!(set.contains(b'Y'));
        assert!(set.remove(b'Y'));
        assert!(!set.remove(b'Y'));
        assert_eq!(set.iter().collect::<Vec<_>>(), b"ABE".to_vec());
        assert!(set.is_subset(LetterSet::ALL));
        assert_eq!(LetterSet::ALL.len(), ALPHABET_LEN);
    }
}
