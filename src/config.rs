//! Solver tuning constants.
//!
//! A `SolverConfig` is built once (usually from command-line flags) and
//! handed by reference to every component at construction.

use crate::error::{Error, Result};
use crate::word::Word;

/// Default root of the tree search.
pub const SEED_WORD: Word = Word::from_ascii(*b"SORES");

/// Default first guess of the CSP solver.
pub const CSP_OPENING: Word = Word::from_ascii(*b"SALET");

#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Starting score threshold of the tree search.
    pub base_threshold: f64,
    /// Amount the threshold drops after a failed search.
    pub threshold_decrement: f64,
    /// Threshold increase per confirmed letter.
    pub threshold_increase_factor: f64,
    /// Scales the score gap into an edit-distance estimate for A*.
    pub h_scale: f64,
    /// Decimal places kept by probabilities and scores.
    pub precision: u32,
    /// A game needing more guesses than this is a loss.
    pub max_guess_count: usize,
    /// Hard stop for the game loop.
    pub max_guess_limit: usize,
    /// Length of the precomputed opening sequence.
    pub opener_count: usize,
    /// Optional fixed first word of the opening sequence.
    pub first_guess: Option<Word>,
    /// Root word of the tree search when there is no opening sequence.
    pub seed_word: Word,
    /// First guess of the CSP solver.
    pub csp_opening: Option<Word>,
    /// Upper bound on nodes created by one tree search call.
    pub max_search_nodes: usize,
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_threshold: 0.5,
            threshold_decrement: 0.3,
            threshold_increase_factor: 0.3,
            h_scale: 1000.0,
            precision: 4,
            max_guess_count: 6,
            max_guess_limit: 100,
            opener_count: 2,
            first_guess: None,
            seed_word: SEED_WORD,
            csp_opening: Some(CSP_OPENING),
            max_search_nodes: 200_000,
            verbose: false,
        }
    }
}

impl SolverConfig {
    /// Reject settings that would keep a game or search from terminating.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold_decrement > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "threshold decrement must be positive, got {}",
                self.threshold_decrement
            )));
        }
        if !self.base_threshold.is_finite() || !self.threshold_increase_factor.is_finite() {
            return Err(Error::InvalidConfig("thresholds must be finite".into()));
        }
        if self.max_guess_count == 0 || self.max_guess_limit == 0 {
            return Err(Error::InvalidConfig("guess limits must be at least 1".into()));
        }
        if self.max_search_nodes == 0 {
            return Err(Error::InvalidConfig("search node bound must be at least 1".into()));
        }
        Ok(())
    }

    /// Round to the configured number of decimal places.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.precision)
    }
}

pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_decrement_is_rejected() {
        let config = SolverConfig {
            threshold_decrement: 0.0,
            ..SolverConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
    }
}
