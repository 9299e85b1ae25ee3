use wordle_search::{rate, LetterRating, Rating, Word};

use LetterRating::{Absent, Exact, Misplaced};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn rating_of(secret: &str, guess: &str) -> [LetterRating; 5] {
    rate(&word(secret), &word(guess)).0
}

#[test]
fn test_all_correct() {
    let rating = rate(&word("laser"), &word("laser"));
    assert!(rating.is_win());
    assert_eq!(rating, Rating::ALL_EXACT);
}

#[test]
fn test_all_absent() {
    assert_eq!(rating_of("dream", "quick"), [Absent; 5]);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        rating_of("charm", "crane"),
        [Exact, Misplaced, Exact, Absent, Absent]
    );
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(
        rating_of("creep", "speed"),
        [Absent, Misplaced, Exact, Exact, Absent]
    );
}

#[test]
fn test_duplicate_letters_in_target() {
    assert_eq!(
        rating_of("creep", "arose"),
        [Absent, Exact, Absent, Absent, Misplaced]
    );
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(
        rating_of("creep", "geese"),
        [Absent, Misplaced, Exact, Absent, Absent]
    );
}

#[test]
fn test_repeated_e_credited_once() {
    // LASER has a single E; only one E of ERASE gets credit
    let rating = rating_of("laser", "erase");
    assert_eq!(rating, [Misplaced, Misplaced, Misplaced, Misplaced, Absent]);
}

#[test]
fn test_llama_against_allow() {
    let secret = word("allow");
    let guess = word("llama");
    let rating = rate(&secret, &guess);
    assert_eq!(rating.0, [Misplaced, Exact, Misplaced, Absent, Absent]);
    assert_eq!(rating.credited(&guess, b'L'), 2);
}

#[test]
fn test_credit_never_exceeds_secret_count() {
    let words = [
        "allow", "llama", "laser", "erase", "geese", "creep", "speed", "eerie", "mamma", "abbey",
        "kayak", "sassy", "those", "sores",
    ];
    for secret in words {
        let secret = word(secret);
        let secret_counts = secret.letter_counts();
        for guess in words {
            let guess = word(guess);
            let rating = rate(&secret, &guess);
            for &letter in guess.letters() {
                let idx = (letter - b'A') as usize;
                assert!(
                    rating.credited(&guess, letter) <= secret_counts[idx] as usize,
                    "{} vs {} over-credits {}",
                    guess,
                    secret,
                    letter as char
                );
            }
        }
    }
}

#[test]
fn test_rating_parse() {
    let rating = Rating::parse("gybbb").unwrap();
    assert_eq!(rating.0, [Exact, Misplaced, Absent, Absent, Absent]);
    assert_eq!(Rating::parse("21000"), Some(rating));
}

#[test]
fn test_rating_parse_invalid() {
    assert!(Rating::parse("gybbb1").is_none());
    assert!(Rating::parse("gybb").is_none());
    assert!(Rating::parse("gybzb").is_none());
}

#[test]
fn test_display() {
    let rating = Rating([Exact, Misplaced, Absent, Absent, Exact]);
    assert_eq!(rating.to_string(), "21002");
    assert_eq!(rating.to_emoji_string(), "🟩🟨⬛⬛🟩");
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(
        rating_of("those", "sores"),
        [Misplaced, Misplaced, Absent, Misplaced, Absent]
    );
}
