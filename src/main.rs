//! Wordle Search CLI
//!
//! Batch-tests the solving agents, solves single words, plays Wordle in the
//! terminal and assists with a real game.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use wordle_search::{
    run_games, AgentKind, GameManager, Lexicon, Rating, ReportCollector, SolverConfig, Word,
};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Word list of legal guesses
    #[clap(long, default_value = "data/wordle_lexicon.txt")]
    guesses: PathBuf,

    /// Word list of possible answers
    #[clap(long, default_value = "data/valid_solutions.txt")]
    answers: PathBuf,

    /// Fixed first word of the opening sequence
    #[clap(long)]
    first_guess: Option<Word>,

    /// Length of the opening sequence used by the tree search
    #[clap(long, default_value_t = 2)]
    openers: usize,

    #[clap(long, default_value_t = 0.5)]
    base_threshold: f64,

    #[clap(long, default_value_t = 0.3)]
    threshold_decrement: f64,

    /// Threshold increase per confirmed letter
    #[clap(long, default_value_t = 0.3)]
    threshold_increase: f64,

    /// A* heuristic scale
    #[clap(long, default_value_t = 1000.0)]
    h_scale: f64,

    /// Node bound of a single tree search
    #[clap(long, default_value_t = 200_000)]
    max_search_nodes: usize,

    /// First guess of the csp agent
    #[clap(long, default_value = "SALET")]
    csp_opening: Word,

    /// Print agent diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play many games and write a report
    Test {
        #[clap(short, long, arg_enum, default_value = "bfs")]
        agent: AgentKind,
        /// Number of random answers to test
        #[clap(short = 'n', long, default_value_t = 100)]
        count: usize,
        /// Test every answer instead of a random sample
        #[clap(long)]
        all: bool,
        #[clap(long, default_value = "test_results")]
        report_dir: PathBuf,
    },
    /// Solve a single word
    Solve {
        word: Word,
        #[clap(short, long, arg_enum, default_value = "bfs")]
        agent: AgentKind,
    },
    /// Play Wordle in the terminal
    Play {
        /// Answer to use instead of a random one
        #[clap(long)]
        answer: Option<Word>,
    },
    /// Get suggestions for a game played elsewhere
    Assist {
        #[clap(short, long, arg_enum, default_value = "brute")]
        agent: AgentKind,
    },
    /// Print the opening sequence
    Openers,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            base_threshold: self.base_threshold,
            threshold_decrement: self.threshold_decrement,
            threshold_increase_factor: self.threshold_increase,
            h_scale: self.h_scale,
            opener_count: self.openers,
            first_guess: self.first_guess,
            csp_opening: Some(self.csp_opening),
            max_search_nodes: self.max_search_nodes,
            verbose: self.verbose,
            ..SolverConfig::default()
        }
    }
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: String) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.chars().count() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_guesses(guesses: &[(Word, Rating)]) {
    for (i, (guess, rating)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, rating.to_emoji_string());
    }
}

fn run_test(
    lexicon: &Lexicon,
    config: &SolverConfig,
    agent: AgentKind,
    count: usize,
    all: bool,
    report_dir: &Path,
) -> Result<()> {
    let (answers, mode) = if all {
        (lexicon.answers().to_vec(), "all answers")
    } else {
        (lexicon.random_answers(count), "random answers")
    };

    let spinner = Spinner::new(format!("Playing {} games with {}...", answers.len(), agent));
    let start = Instant::now();
    let records = run_games(agent, lexicon, config, &answers);
    let elapsed = start.elapsed();
    spinner.stop();

    let mut collector = ReportCollector::new();
    for record in records {
        collector.record(record);
    }

    let stdout = io::stdout();
    collector.write_summary(&mut stdout.lock(), agent.as_str(), mode, elapsed)?;
    let (summary, full) = collector
        .write_reports(report_dir, agent.as_str(), mode, elapsed)
        .context("writing test reports")?;
    println!();
    println!("Reports written to {} and {}", summary.display(), full.display());
    Ok(())
}

fn run_solve(lexicon: &Lexicon, config: &SolverConfig, word: Word, agent: AgentKind) -> Result<()> {
    if !lexicon.answers().contains(&word) {
        println!("Note: {} is not in the answer list, the agents may not find it.", word);
    }
    let mut solver = agent.build(lexicon, config);
    let record = GameManager::new(lexicon, config).play(solver.as_mut(), word);

    println!("Solving for: {}", word);
    println!();
    print_guesses(&record.guesses);
    println!();
    if record.success {
        println!("Solved in {} guesses.", record.guess_count);
    } else {
        println!("Not solved: {:?} after {} guesses.", record.outcome, record.guess_count);
    }
    Ok(())
}

fn run_play(lexicon: &Lexicon, config: &SolverConfig, answer: Option<Word>) -> Result<()> {
    let answer = match answer {
        Some(word) => word,
        None => match lexicon.answers().choose(&mut rand::thread_rng()) {
            Some(&word) => word,
            None => bail!("the answer list is empty"),
        },
    };

    println!("Starting Wordle:");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let record = GameManager::new(lexicon, config).play_interactive(
        &mut stdin.lock(),
        &mut stdout.lock(),
        answer,
    )?;
    if !record.success {
        println!("Better luck next time.");
    }
    Ok(())
}

fn run_assist(lexicon: &Lexicon, config: &SolverConfig, agent: AgentKind) -> Result<()> {
    let mut solver = agent.build(lexicon, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Enter the score of each suggestion, e.g. 'gybbb' or '21000'. 'quit' exits.");
    for turn in 1..=config.max_guess_limit {
        let guess = match solver.get_guess() {
            Some(guess) => guess,
            None => {
                println!("No possible words remaining.");
                return Ok(());
            }
        };
        println!("Suggestion {}: {}", turn, guess);

        let rating = loop {
            print!("Score: ");
            stdout.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match Rating::parse(line) {
                Some(rating) => break rating,
                None => println!("Use g=green, y=yellow, b=black (5 characters)"),
            }
        };

        if rating.is_win() {
            println!("🎉 Solved in {} guesses!", turn);
            return Ok(());
        }
        solver.process_feedback(guess, &rating);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let lexicon = Lexicon::load(&cli.guesses, &cli.answers, &config)
        .context("loading word lists")?;
    println!(
        "Loaded {} guess words and {} answers.",
        lexicon.vocabulary().len(),
        lexicon.answers().len()
    );

    match &cli.command {
        Command::Test {
            agent,
            count,
            all,
            report_dir,
        } => run_test(&lexicon, &config, *agent, *count, *all, report_dir),
        Command::Solve { word, agent } => run_solve(&lexicon, &config, *word, *agent),
        Command::Play { answer } => run_play(&lexicon, &config, *answer),
        Command::Assist { agent } => run_assist(&lexicon, &config, *agent),
        Command::Openers => {
            for (i, word) in lexicon.openers().iter().enumerate() {
                let score: f64 = word
                    .distinct_letters()
                    .iter()
                    .map(|l| lexicon.letter_freqs().get(l))
                    .sum();
                println!("{:>2}. {} (letter coverage {:.4})", i + 1, word, score);
            }
            Ok(())
        }
    }
}
