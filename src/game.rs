//! Game loop: asks an agent (or a human) for guesses, rates them and stops
//! on a win, an exhausted agent or the guess ceiling.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::agent::{AgentKind, ScoringAgent};
use crate::config::SolverConfig;
use crate::feedback::{rate, Rating};
use crate::lexicon::Lexicon;
use crate::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved,
    /// The agent had no guess left.
    Exhausted,
    /// `max_guess_limit` was reached.
    GuessLimit,
    /// The agent proposed a word outside the vocabulary.
    InvalidGuess(Word),
    /// Input ended before the game did (human play only).
    Abandoned,
}

/// Result of one game, as collected by the report.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: Word,
    pub guesses: Vec<(Word, Rating)>,
    pub guess_count: usize,
    /// Solved within `max_guess_count` guesses.
    pub success: bool,
    pub outcome: GameOutcome,
    pub avg_guess_time: Duration,
    pub game_duration: Duration,
}

pub struct GameManager<'a> {
    lexicon: &'a Lexicon,
    config: &'a SolverConfig,
}

impl<'a> GameManager<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a SolverConfig) -> Self {
        Self { lexicon, config }
    }

    /// Play one game of `agent` against `answer`.
    pub fn play(&self, agent: &mut dyn ScoringAgent, answer: Word) -> GameRecord {
        let start = Instant::now();
        let mut guess_time = Duration::ZERO;
        let mut calls = 0u32;
        let mut guesses = Vec::new();

        let outcome = loop {
            if guesses.len() >= self.config.max_guess_limit {
                break GameOutcome::GuessLimit;
            }

            let asked = Instant::now();
            let guess = agent.get_guess();
            guess_time += asked.elapsed();
            calls += 1;

            let guess = match guess {
                Some(guess) => guess,
                None => break GameOutcome::Exhausted,
            };
            if !self.lexicon.is_valid_guess(&guess) {
                break GameOutcome::InvalidGuess(guess);
            }

            let rating = rate(&answer, &guess);
            guesses.push((guess, rating));
            if self.config.verbose {
                eprintln!("[{}] {} {} {}", agent.name(), answer, guess, rating);
            }
            if rating.is_win() {
                break GameOutcome::Solved;
            }
            agent.process_feedback(guess, &rating);
        };

        self.record(answer, guesses, outcome, guess_time / calls.max(1), start.elapsed())
    }

    /// Play a game with guesses typed by a person. Invalid guesses are
    /// re-prompted and do not count.
    pub fn play_interactive(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        answer: Word,
    ) -> io::Result<GameRecord> {
        let start = Instant::now();
        let mut guesses = Vec::new();

        let outcome = loop {
            if guesses.len() >= self.config.max_guess_count {
                writeln!(output, "You ran out of guesses. The word was {}.", answer)?;
                break GameOutcome::GuessLimit;
            }
            let guess = match read_guess(input, output, self.lexicon)? {
                Some(guess) => guess,
                None => break GameOutcome::Abandoned,
            };
            let rating = rate(&answer, &guess);
            guesses.push((guess, rating));
            writeln!(output, "Score:            {}", rating.to_emoji_string())?;
            if rating.is_win() {
                writeln!(output, "{} is correct! You win!", guess)?;
                break GameOutcome::Solved;
            }
        };

        let avg = start.elapsed() / (guesses.len().max(1) as u32);
        Ok(self.record(answer, guesses, outcome, avg, start.elapsed()))
    }

    fn record(
        &self,
        answer: Word,
        guesses: Vec<(Word, Rating)>,
        outcome: GameOutcome,
        avg_guess_time: Duration,
        game_duration: Duration,
    ) -> GameRecord {
        let guess_count = guesses.len();
        GameRecord {
            answer,
            guesses,
            guess_count,
            success: outcome == GameOutcome::Solved && guess_count <= self.config.max_guess_count,
            outcome,
            avg_guess_time,
            game_duration,
        }
    }
}

/// Prompt until a valid vocabulary word is entered. `None` on end of input.
pub fn read_guess(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    lexicon: &Lexicon,
) -> io::Result<Option<Word>> {
    let mut buf = String::new();

    loop {
        write!(output, "Enter your guess: ")?;
        output.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        match buf.trim().parse::<Word>() {
            Ok(word) if lexicon.is_valid_guess(&word) => return Ok(Some(word)),
            Ok(word) => writeln!(output, "{} is not in the word list", word)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Play one game per answer in parallel, each with a freshly built agent.
pub fn run_games(
    kind: AgentKind,
    lexicon: &Lexicon,
    config: &SolverConfig,
    answers: &[Word],
) -> Vec<GameRecord> {
    let manager = GameManager::new(lexicon, config);
    answers
        .par_iter()
        .map(|&answer| {
            let mut agent = kind.build(lexicon, config);
            manager.play(agent.as_mut(), answer)
        })
        .collect()
}
