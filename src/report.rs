//! Aggregation and text reports over many game records.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::game::GameRecord;

/// Headline numbers of a test run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub test_size: usize,
    pub win_percentage: f64,
    pub avg_guess_count: f64,
    pub avg_guess_time_ms: f64,
    pub avg_game_duration_ms: f64,
}

#[derive(Debug, Default)]
pub struct ReportCollector {
    records: Vec<GameRecord>,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// UTC calendar time, second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: u64,
    pub month: u64,
    pub day: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
}

impl Timestamp {
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Civil date from seconds since 1970-01-01 (proleptic Gregorian).
    pub fn from_unix(secs: u64) -> Self {
        let (days, rem) = (secs / 86_400, secs % 86_400);

        // Eras are 400-year cycles starting on March 1st.
        let z = days + 719_468;
        let era = z / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + u64::from(month <= 2);

        Self {
            year,
            month,
            day,
            hour: rem / 3_600,
            minute: rem % 3_600 / 60,
            second: rem % 60,
        }
    }

    /// `YYYY-MM-DD`
    pub fn date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `YYYY-MM-DD_HH-MM-SS`, used in report file names.
    pub fn file_stamp(&self) -> String {
        format!(
            "{}_{:02}-{:02}-{:02}",
            self.date(),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn summary(&self) -> ReportSummary {
        let n = self.records.len();
        if n == 0 {
            return ReportSummary {
                test_size: 0,
                win_percentage: 0.0,
                avg_guess_count: 0.0,
                avg_guess_time_ms: 0.0,
                avg_game_duration_ms: 0.0,
            };
        }
        let total = n as f64;
        let wins = self.records.iter().filter(|r| r.success).count();
        let guesses: usize = self.records.iter().map(|r| r.guess_count).sum();
        let guess_time: f64 = self.records.iter().map(|r| millis(r.avg_guess_time)).sum();
        let duration: f64 = self.records.iter().map(|r| millis(r.game_duration)).sum();

        ReportSummary {
            test_size: n,
            win_percentage: 100.0 * wins as f64 / total,
            avg_guess_count: guesses as f64 / total,
            avg_guess_time_ms: guess_time / total,
            avg_game_duration_ms: duration / total,
        }
    }

    /// Records sorted by guess count, fewest first. Ties keep answer order.
    fn sorted(&self) -> Vec<&GameRecord> {
        let mut sorted: Vec<&GameRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.guess_count.cmp(&b.guess_count).then(a.answer.cmp(&b.answer)));
        sorted
    }

    pub fn easiest(&self, n: usize) -> Vec<&GameRecord> {
        self.sorted().into_iter().take(n).collect()
    }

    pub fn hardest(&self, n: usize) -> Vec<&GameRecord> {
        self.sorted().into_iter().rev().take(n).collect()
    }

    /// `(guess count, number of games)` pairs, ascending, zero counts omitted.
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        let max_guesses = self.records.iter().map(|r| r.guess_count).max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];
        for record in &self.records {
            distribution[record.guess_count] += 1;
        }
        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn write_header(
        &self,
        out: &mut dyn Write,
        agent: &str,
        mode: &str,
        duration: Duration,
    ) -> io::Result<()> {
        let s = self.summary();
        writeln!(out, "Date: {}", Timestamp::now().date())?;
        writeln!(out, "Search Mode: {}", agent)?;
        writeln!(out, "Dataset mode: {}", mode)?;
        writeln!(out, "Test Size: {}", s.test_size)?;
        writeln!(out, "Test Duration (min): {:.2}", duration.as_secs_f64() / 60.0)?;
        writeln!(out, "Win Percentage (%): {:.2}", s.win_percentage)?;
        writeln!(out, "Avg Guess Count: {:.2}", s.avg_guess_count)?;
        writeln!(out, "Total Avg Guess Time (ms): {:.2}", s.avg_guess_time_ms)?;
        writeln!(out, "Avg Game Duration (ms): {:.2}", s.avg_game_duration_ms)
    }

    fn write_rows(out: &mut dyn Write, rows: &[&GameRecord]) -> io::Result<()> {
        writeln!(out, "Answer,Guess Count,Success,Avg Guess Time (ms),Game Duration (ms)")?;
        for r in rows {
            writeln!(
                out,
                "{},{},{},{:.2},{:.2}",
                r.answer,
                r.guess_count,
                r.success,
                millis(r.avg_guess_time),
                millis(r.game_duration)
            )?;
        }
        Ok(())
    }

    fn write_histogram(&self, out: &mut dyn Write) -> io::Result<()> {
        let total = self.records.len().max(1);
        writeln!(out, "Guess distribution:")?;
        for (guesses, count) in self.distribution() {
            let pct = count as f64 / total as f64 * 100.0;
            let bar = "█".repeat((count * 40 / total).max(1));
            writeln!(out, "  {:>3} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar)?;
        }
        Ok(())
    }

    /// Summary, histogram and the ten easiest and hardest games.
    pub fn write_summary(
        &self,
        out: &mut dyn Write,
        agent: &str,
        mode: &str,
        duration: Duration,
    ) -> io::Result<()> {
        self.write_header(out, agent, mode, duration)?;
        writeln!(out)?;
        self.write_histogram(out)?;
        writeln!(out)?;
        writeln!(out, "Top 10 Easiest Games (fewest guesses):")?;
        Self::write_rows(out, &self.easiest(10))?;
        writeln!(out)?;
        writeln!(out, "Top 10 Hardest Games (most guesses):")?;
        Self::write_rows(out, &self.hardest(10))
    }

    /// Summary followed by every game, easiest first.
    pub fn write_full(
        &self,
        out: &mut dyn Write,
        agent: &str,
        mode: &str,
        duration: Duration,
    ) -> io::Result<()> {
        self.write_header(out, agent, mode, duration)?;
        writeln!(out)?;
        writeln!(out, "All Games (fewest guesses first):")?;
        Self::write_rows(out, &self.sorted())
    }

    /// Write `wordle_test_<stamp>.txt` and `wordle_test_full_<stamp>.txt`
    /// into `dir`, creating it if needed. The stamp is the UTC time as
    /// `YYYY-MM-DD_HH-MM-SS`.
    pub fn write_reports(
        &self,
        dir: &Path,
        agent: &str,
        mode: &str,
        duration: Duration,
    ) -> Result<(PathBuf, PathBuf)> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| Error::Io { path, source }
        };

        fs::create_dir_all(dir).map_err(io_err(dir))?;
        let stamp = Timestamp::now().file_stamp();

        let summary_path = dir.join(format!("wordle_test_{}.txt", stamp));
        let mut file = fs::File::create(&summary_path).map_err(io_err(&summary_path))?;
        self.write_summary(&mut file, agent, mode, duration)
            .map_err(io_err(&summary_path))?;

        let full_path = dir.join(format!("wordle_test_full_{}.txt", stamp));
        let mut file = fs::File::create(&full_path).map_err(io_err(&full_path))?;
        self.write_full(&mut file, agent, mode, duration)
            .map_err(io_err(&full_path))?;

        Ok((summary_path, full_path))
    }
}
