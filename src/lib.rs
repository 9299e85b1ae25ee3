//! # Wordle Search
//!
//! A Wordle solver built around interchangeable guess-selection agents:
//!
//! - an exhaustive scorer that ranks every remaining word by positional
//!   letter probabilities,
//! - a threshold-gated tree search over single-letter substitutions, in
//!   breadth-first, depth-first, greedy and A*-like orders,
//! - a constraint-propagation solver that filters the answer list.
//!
//! Letter statistics and an opening sequence are computed once per process
//! from the word lists; every game then gets a fresh agent.

pub mod agent;
pub mod config;
pub mod error;
pub mod feedback;
pub mod game;
pub mod lexicon;
pub mod opener;
pub mod report;
pub mod stats;
pub mod word;

pub use agent::{AgentKind, ScoringAgent};
pub use config::SolverConfig;
pub use error::{Error, Result};
pub use feedback::{rate, LetterRating, Rating};
pub use game::{run_games, GameManager, GameOutcome, GameRecord};
pub use lexicon::Lexicon;
pub use report::ReportCollector;
pub use word::{LetterSet, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Letters A-Z
pub const ALPHABET_LEN: usize = 26;
