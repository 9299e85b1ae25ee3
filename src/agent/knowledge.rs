//! Letter knowledge accumulated from ratings.
//!
//! Both probability-driven agents keep one of these. It owns a private copy
//! of the positional probability table and narrows it, together with the
//! per-position letter domains, as ratings arrive.

use crate::feedback::{LetterRating, Rating};
use crate::stats::LetterTable;
use crate::word::{letter_index, LetterSet, Word};
use crate::{ALPHABET_LEN, WORD_LENGTH};

#[derive(Debug, Clone)]
pub struct Knowledge {
    table: LetterTable,
    domains: [LetterSet; WORD_LENGTH],
    confirmed: [Option<u8>; WORD_LENGTH],
    /// Lower bound on occurrences of each letter whose position is unknown.
    known: [u8; ALPHABET_LEN],
}

impl Knowledge {
    pub fn new(table: LetterTable) -> Self {
        Self {
            table,
            domains: [LetterSet::ALL; WORD_LENGTH],
            confirmed: [None; WORD_LENGTH],
            known: [0; ALPHABET_LEN],
        }
    }

    pub fn table(&self) -> &LetterTable {
        &self.table
    }

    pub fn domains(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.domains
    }

    pub fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    pub fn confirmed_count(&self) -> usize {
        self.confirmed.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_confirmed(&self, position: usize) -> bool {
        self.confirmed[position].is_some()
    }

    pub fn known_count(&self, letter: u8) -> u8 {
        self.known[letter_index(letter)]
    }

    pub fn known_counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.known
    }

    /// Fold one rating into the table, domains, confirmed letters and
    /// known-unplaced counts.
    ///
    /// Exact marks are applied before the others so that a letter confirmed
    /// in this guess already has probability 1 when a repeated, absent copy
    /// of it is handled.
    pub fn apply(&mut self, guess: &Word, rating: &Rating) {
        let letters = guess.letters();
        let ratings = rating.ratings();

        for i in 0..WORD_LENGTH {
            if ratings[i] == LetterRating::Exact {
                let letter = letters[i];
                // Only a newly placed copy uses up a known-unplaced one.
                if self.confirmed[i].is_none() {
                    let known = &mut self.known[letter_index(letter)];
                    *known = known.saturating_sub(1);
                }
                self.confirmed[i] = Some(letter);
                self.table.set(i, letter, 1.0);
                self.domains[i] = LetterSet::only(letter);
            }
        }

        let mut pending = [0u8; ALPHABET_LEN];
        for i in 0..WORD_LENGTH {
            let letter = letters[i];
            match ratings[i] {
                LetterRating::Exact => {}
                LetterRating::Misplaced => {
                    pending[letter_index(letter)] += 1;
                    self.eliminate_at(i, letter);
                }
                LetterRating::Absent => {
                    self.eliminate_at(i, letter);
                    // A credited copy elsewhere in the guess means the secret
                    // holds fewer copies, not none.
                    if rating.credited(guess, letter) == 0 {
                        self.eliminate_everywhere(letter);
                    }
                }
            }
        }

        for (known, &count) in self.known.iter_mut().zip(pending.iter()) {
            if count > *known {
                *known = count;
            }
        }
    }

    fn eliminate_at(&mut self, position: usize, letter: u8) {
        if self.confirmed[position] == Some(letter) {
            return;
        }
        self.table.set(position, letter, 0.0);
        self.domains[position].remove(letter);
    }

    fn eliminate_everywhere(&mut self, letter: u8) {
        for position in 0..WORD_LENGTH {
            if self.table.get(position, letter) != 1.0 {
                self.eliminate_at(position, letter);
            }
        }
    }

    /// Whether `word` agrees with every confirmed letter and has at least
    /// the known number of each unplaced letter among its open positions.
    pub fn is_consistent(&self, word: &Word) -> bool {
        let mut scratch = [0u8; ALPHABET_LEN];
        for (i, &letter) in word.letters().iter().enumerate() {
            match self.confirmed[i] {
                Some(c) if c != letter => return false,
                Some(_) => {}
                None => scratch[letter_index(letter)] += 1,
            }
        }
        self.known
            .iter()
            .zip(scratch.iter())
            .all(|(&needed, &have)| have >= needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::rate;
    use crate::stats::positional_table;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    fn knowledge() -> Knowledge {
        let answers: Vec<Word> = ["LASER", "CRANE", "ERASE", "STEAL", "ALLOW"]
            .iter()
            .map(|w| word(w))
            .collect();
        Knowledge::new(positional_table(&answers, 4).unwrap())
    }

    #[test]
    fn exact_confirms_and_pins_domain() {
        let mut k = knowledge();
        let guess = word("CRANE");
        k.apply(&guess, &rate(&word("CRATE"), &guess));
        assert_eq!(k.confirmed()[0], Some(b'C'));
        assert_eq!(k.domains()[0], LetterSet::only(b'C'));
        assert_eq!(k.table().get(4, b'E'), 1.0);
        assert_eq!(k.confirmed_count(), 4);
        // N is absent everywhere
        for position in 0..WORD_LENGTH {
            assert_eq!(k.table().get(position, b'N'), 0.0);
            assert!(!k.domains()[position].contains(b'N'));
        }
    }

    #[test]
    fn repeated_letter_with_one_credit_is_not_blanket_zeroed() {
        let mut k = knowledge();
        let guess = word("ERASE");
        // LASER holds one E: first E misplaced, last E absent
        k.apply(&guess, &rate(&word("LASER"), &guess));
        assert_eq!(k.known_count(b'E'), 1);
        assert_eq!(k.table().get(0, b'E'), 0.0);
        assert_eq!(k.table().get(4, b'E'), 0.0);
        assert!(k.domains()[3].contains(b'E'));
        assert!(k.table().get(3, b'E') > 0.0);
    }

    #[test]
    fn known_counts_take_the_larger_bound() {
        let mut k = knowledge();
        let guess = word("LLAMA");
        k.apply(&guess, &rate(&word("ALLOW"), &guess));
        assert_eq!(k.known_count(b'A'), 1);
        assert_eq!(k.known_count(b'L'), 1);
        let guess = word("STEAL");
        k.apply(&guess, &rate(&word("ALLOW"), &guess));
        assert_eq!(k.known_count(b'A'), 1);
        assert_eq!(k.known_count(b'L'), 1);
    }

    #[test]
    fn consistency_checks_confirmed_and_known() {
        let mut k = knowledge();
        let guess = word("LLAMA");
        k.apply(&guess, &rate(&word("ALLOW"), &guess));
        assert!(k.is_consistent(&word("ALLOW")));
        // confirmed L at position 1
        assert!(!k.is_consistent(&word("ABLOW")));
        // no A among open positions
        assert!(!k.is_consistent(&word("OLLOW")));
    }

    #[test]
    fn reconfirming_a_letter_keeps_the_unplaced_bound() {
        let mut k = knowledge();
        let secret = word("LEVEL");
        let guess = word("LLAMA");
        k.apply(&guess, &rate(&secret, &guess));
        assert_eq!(k.known_count(b'L'), 1);

        // L at position 0 is exact again; the second L is still unplaced
        let guess = word("LEMON");
        k.apply(&guess, &rate(&secret, &guess));
        assert_eq!(k.known_count(b'L'), 1);
        assert!(!k.is_consistent(&word("LEMON")));
        assert!(k.is_consistent(&secret));
    }
}
