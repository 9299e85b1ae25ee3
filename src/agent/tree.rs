//! Constrained tree search.
//!
//! After a fixed opening sequence, each guess is found by searching the
//! graph of single-letter substitutions around the previous guess. A word is
//! accepted once its score clears a threshold that grows with the number of
//! confirmed letters. If nothing clears it, the threshold is lowered and the
//! search is repeated, down to zero.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use crate::agent::{Knowledge, ScoringAgent};
use crate::config::{round_to, SolverConfig};
use crate::feedback::Rating;
use crate::lexicon::Lexicon;
use crate::word::{LetterSet, Word};
use crate::{ALPHABET_LEN, WORD_LENGTH};

/// Order in which the search fringe hands out nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    BreadthFirst,
    DepthFirst,
    /// Highest score first.
    GreedyBestFirst,
    /// Lowest `depth + h_scale * (threshold - score)` first.
    AStar,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    word: Word,
    parent: Option<usize>,
    depth: usize,
    score: f64,
}

/// Heap entry. Higher priority pops first, equal priorities pop in
/// insertion order.
#[derive(Debug)]
struct Ranked {
    priority: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

enum Fringe {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Ranked { heap: BinaryHeap<Ranked>, seq: usize },
}

impl Fringe {
    fn new(traversal: Traversal) -> Self {
        match traversal {
            Traversal::BreadthFirst => Fringe::Fifo(VecDeque::new()),
            Traversal::DepthFirst => Fringe::Lifo(Vec::new()),
            Traversal::GreedyBestFirst | Traversal::AStar => Fringe::Ranked {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    fn push(&mut self, node: usize, priority: f64) {
        match self {
            Fringe::Fifo(queue) => queue.push_back(node),
            Fringe::Lifo(stack) => stack.push(node),
            Fringe::Ranked { heap, seq } => {
                heap.push(Ranked {
                    priority,
                    seq: *seq,
                    node,
                });
                *seq += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Fringe::Fifo(queue) => queue.pop_front(),
            Fringe::Lifo(stack) => stack.pop(),
            Fringe::Ranked { heap, .. } => heap.pop().map(|ranked| ranked.node),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeSearchAgent {
    vocab: HashSet<Word>,
    knowledge: Knowledge,
    traversal: Traversal,
    openers: Vec<Word>,
    guess_count: usize,
    /// Where the next search starts; the previous guess.
    root: Word,
    threshold: f64,
    config: SolverConfig,
}

impl TreeSearchAgent {
    pub fn new(lexicon: &Lexicon, config: &SolverConfig, traversal: Traversal) -> Self {
        Self {
            vocab: lexicon.vocabulary().iter().copied().collect(),
            knowledge: Knowledge::new(lexicon.letter_table().clone()),
            traversal,
            openers: lexicon.openers().to_vec(),
            guess_count: 0,
            root: config.seed_word,
            threshold: config.base_threshold,
            config: config.clone(),
        }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn domains(&self) -> &[LetterSet; WORD_LENGTH] {
        self.knowledge.domains()
    }

    pub fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        self.knowledge.confirmed()
    }

    pub fn known_counts(&self) -> &[u8; ALPHABET_LEN] {
        self.knowledge.known_counts()
    }

    /// Threshold used by the most recent search.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root(&self) -> Word {
        self.root
    }

    /// Threshold a fresh search starts from.
    pub fn initial_threshold(&self) -> f64 {
        self.config.base_threshold
            + self.config.threshold_increase_factor * self.knowledge.confirmed_count() as f64
    }

    /// Zero for words outside the vocabulary or contradicting what is
    /// known; otherwise the summed positional probabilities, zero if any
    /// letter is impossible at its position.
    pub fn get_score(&self, word: &Word) -> f64 {
        if !self.vocab.contains(word) || !self.knowledge.is_consistent(word) {
            return 0.0;
        }
        let table = self.knowledge.table();
        let mut score = 0.0;
        for (i, &letter) in word.letters().iter().enumerate() {
            let prob = table.get(i, letter);
            if prob == 0.0 {
                return 0.0;
            }
            score += prob;
        }
        round_to(score, self.config.precision)
    }

    /// Single-letter substitutions of `word` at unconfirmed positions, using
    /// letters still in that position's domain. Words already in `visited`
    /// are skipped; returned words are added to it.
    pub fn expand(&self, word: &Word, visited: &mut HashSet<Word>) -> Vec<Word> {
        let mut successors = Vec::new();
        for (i, &current) in word.letters().iter().enumerate() {
            if self.knowledge.is_confirmed(i) {
                continue;
            }
            for letter in self.knowledge.domains()[i].iter() {
                if letter == current {
                    continue;
                }
                let next = word.with_letter(i, letter);
                if visited.insert(next) {
                    successors.push(next);
                }
            }
        }
        successors
    }

    fn priority(&self, node: &Node) -> f64 {
        match self.traversal {
            Traversal::BreadthFirst | Traversal::DepthFirst => 0.0,
            Traversal::GreedyBestFirst => node.score,
            Traversal::AStar => {
                -(node.depth as f64 + self.config.h_scale * (self.threshold - node.score))
            }
        }
    }

    /// One search at the current threshold.
    fn tree_search(&mut self) -> Option<Word> {
        let mut arena: Vec<Node> = Vec::new();
        let mut visited = HashSet::new();
        let mut impossible = Vec::new();
        let mut fringe = Fringe::new(self.traversal);

        let root = Node {
            word: self.root,
            parent: None,
            depth: 0,
            score: self.get_score(&self.root),
        };
        visited.insert(root.word);
        fringe.push(0, self.priority(&root));
        arena.push(root);

        while let Some(idx) = fringe.pop() {
            let node = arena[idx];
            if node.score > self.threshold {
                if self.config.verbose {
                    eprintln!(
                        "{:?}: {} (score {}, threshold {:.2}, {} nodes)",
                        self.traversal,
                        path(&arena, idx),
                        node.score,
                        self.threshold,
                        arena.len()
                    );
                }
                for word in &impossible {
                    self.vocab.remove(word);
                }
                self.vocab.remove(&node.word);
                self.root = node.word;
                return Some(node.word);
            }

            if arena.len() >= self.config.max_search_nodes {
                continue;
            }
            for word in self.expand(&node.word, &mut visited) {
                let score = self.get_score(&word);
                if score == 0.0 && self.vocab.contains(&word) {
                    impossible.push(word);
                }
                let child = Node {
                    word,
                    parent: Some(idx),
                    depth: node.depth + 1,
                    score,
                };
                fringe.push(arena.len(), self.priority(&child));
                arena.push(child);
            }
        }

        None
    }
}

/// Substitution path from the search root to `idx`, e.g. `SORES -> CORES`.
fn path(arena: &[Node], idx: usize) -> String {
    let mut words = Vec::new();
    let mut current = Some(idx);
    while let Some(i) = current {
        words.push(arena[i].word.to_string());
        current = arena[i].parent;
    }
    words.reverse();
    words.join(" -> ")
}

impl ScoringAgent for TreeSearchAgent {
    fn get_guess(&mut self) -> Option<Word> {
        if let Some(&opener) = self.openers.get(self.guess_count) {
            self.guess_count += 1;
            self.vocab.remove(&opener);
            self.root = opener;
            return Some(opener);
        }
        if self.vocab.is_empty() {
            return None;
        }

        // Expansion never changes confirmed positions, and an opener root
        // holds none of the letters confirmed before it.
        for (i, confirmed) in self.knowledge.confirmed().iter().enumerate() {
            if let Some(letter) = *confirmed {
                self.root = self.root.with_letter(i, letter);
            }
        }

        self.threshold = self.initial_threshold();
        loop {
            if let Some(guess) = self.tree_search() {
                self.guess_count += 1;
                return Some(guess);
            }
            if self.threshold <= 0.0 {
                if self.config.verbose {
                    eprintln!("{:?}: no word found with score above zero", self.traversal);
                }
                return None;
            }
            self.threshold = (self.threshold - self.config.threshold_decrement).max(0.0);
        }
    }

    fn process_feedback(&mut self, guess: Word, rating: &Rating) {
        self.knowledge.apply(&guess, rating);
    }

    fn name(&self) -> &'static str {
        match self.traversal {
            Traversal::BreadthFirst => "bfs",
            Traversal::DepthFirst => "dfs",
            Traversal::GreedyBestFirst => "greedy",
            Traversal::AStar => "astar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    fn agent(traversal: Traversal) -> TreeSearchAgent {
        let words: Vec<Word> = ["CRANE", "CRATE", "CRAZE", "GRADE", "GRATE"]
            .iter()
            .map(|w| word(w))
            .collect();
        let config = SolverConfig {
            opener_count: 1,
            first_guess: Some(word("CRANE")),
            ..SolverConfig::default()
        };
        let lexicon = Lexicon::new(words.clone(), words, &config).unwrap();
        TreeSearchAgent::new(&lexicon, &config, traversal)
    }

    #[test]
    fn ranked_heap_breaks_ties_by_insertion() {
        let mut fringe = Fringe::new(Traversal::GreedyBestFirst);
        fringe.push(0, 1.0);
        fringe.push(1, 2.0);
        fringe.push(2, 2.0);
        fringe.push(3, 0.5);
        let order: Vec<usize> = std::iter::from_fn(|| fringe.pop()).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn fifo_and_lifo_fringes() {
        let mut fifo = Fringe::new(Traversal::BreadthFirst);
        let mut lifo = Fringe::new(Traversal::DepthFirst);
        for i in 0..3 {
            fifo.push(i, 0.0);
            lifo.push(i, 0.0);
        }
        assert_eq!(std::iter::from_fn(|| fifo.pop()).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(std::iter::from_fn(|| lifo.pop()).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn expand_skips_confirmed_positions_and_visited_words() {
        let mut agent = agent(Traversal::BreadthFirst);
        let guess = agent.get_guess().unwrap();
        assert_eq!(guess, word("CRANE"));
        agent.process_feedback(guess, &crate::feedback::rate(&word("CRATE"), &guess));

        let mut visited = HashSet::new();
        visited.insert(word("CRANE"));
        visited.insert(word("CRAAE"));
        let successors = agent.expand(&word("CRANE"), &mut visited);
        // Only position 3 is open; N is eliminated and CRAAE already visited.
        assert_eq!(successors.len(), 24);
        assert!(successors.iter().all(|w| w.letters()[..3] == *b"CRA" && w.letters()[4] == b'E'));
        assert!(!successors.contains(&word("CRAAE")));
        assert!(successors.contains(&word("CRATE")));
        assert_eq!(agent.expand(&word("CRANE"), &mut visited).len(), 0);
    }

    #[test]
    fn threshold_grows_with_confirmed_letters() {
        let mut agent = agent(Traversal::BreadthFirst);
        assert_eq!(agent.initial_threshold(), 0.5);
        let guess = agent.get_guess().unwrap();
        agent.process_feedback(guess, &crate::feedback::rate(&word("CRATE"), &guess));
        assert!((agent.initial_threshold() - 1.7).abs() < 1e-9);
    }

    #[test]
    fn score_rejects_words_breaking_known_letters() {
        let mut agent = agent(Traversal::BreadthFirst);
        let guess = agent.get_guess().unwrap();
        agent.process_feedback(guess, &crate::feedback::rate(&word("CRATE"), &guess));
        assert_eq!(agent.get_score(&word("GRATE")), 0.0);
        assert_eq!(agent.get_score(&word("CRANE")), 0.0);
        assert_eq!(agent.get_score(&word("CRATE")), 4.4);
        assert_eq!(agent.get_score(&word("CRAZE")), 4.2);
    }
}
