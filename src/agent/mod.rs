//! Guess-selection strategies.
//!
//! Every strategy implements [`ScoringAgent`]: it proposes a guess and is
//! then told the rating of that guess. Agents keep per-game state, so a
//! fresh agent has to be built for every game.

pub mod csp;
pub mod exhaustive;
pub mod knowledge;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use crate::config::SolverConfig;
use crate::feedback::Rating;
use crate::lexicon::Lexicon;
use crate::word::Word;

pub use csp::CspSolver;
pub use exhaustive::ExhaustiveScorer;
pub use knowledge::Knowledge;
pub use tree::{Traversal, TreeSearchAgent};

pub trait ScoringAgent {
    /// Next word to guess, or `None` when the agent can prove no valid
    /// guess remains.
    fn get_guess(&mut self) -> Option<Word>;

    /// Must be called once per turn with the rating of the word just
    /// returned by [`ScoringAgent::get_guess`].
    fn process_feedback(&mut self, guess: Word, rating: &Rating);

    fn name(&self) -> &'static str;
}

/// Strategy selected when an agent is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ArgEnum)]
pub enum AgentKind {
    /// Score every remaining word each turn
    Brute,
    /// Constraint filtering over the answer list
    Csp,
    /// Tree search, breadth-first
    Bfs,
    /// Tree search, depth-first
    Dfs,
    /// Tree search, best score first
    Greedy,
    /// Tree search, A*-like
    Astar,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Brute,
        AgentKind::Csp,
        AgentKind::Bfs,
        AgentKind::Dfs,
        AgentKind::Greedy,
        AgentKind::Astar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Brute => "brute",
            AgentKind::Csp => "csp",
            AgentKind::Bfs => "bfs",
            AgentKind::Dfs => "dfs",
            AgentKind::Greedy => "greedy",
            AgentKind::Astar => "astar",
        }
    }

    /// Build a fresh agent for one game.
    pub fn build(self, lexicon: &Lexicon, config: &SolverConfig) -> Box<dyn ScoringAgent> {
        let traversal = match self {
            AgentKind::Brute => return Box::new(ExhaustiveScorer::new(lexicon, config)),
            AgentKind::Csp => return Box::new(CspSolver::new(lexicon, config)),
            AgentKind::Bfs => Traversal::BreadthFirst,
            AgentKind::Dfs => Traversal::DepthFirst,
            AgentKind::Greedy => Traversal::GreedyBestFirst,
            AgentKind::Astar => Traversal::AStar,
        };
        Box::new(TreeSearchAgent::new(lexicon, config, traversal))
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown agent {:?}, expected one of brute, csp, bfs, dfs, greedy, astar", s))
    }
}
