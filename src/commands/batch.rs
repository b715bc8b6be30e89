//! Batch solving - many puzzles in parallel
//!
//! Reads one puzzle per line and solves them across threads.

use crate::core::{Puzzle, PuzzleError};
use crate::solver::{Solution, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A line that could not be parsed as a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub error: PuzzleError,
}

/// Outcome of solving a batch of puzzles
#[derive(Debug)]
pub struct BatchResult {
    /// One solution per accepted puzzle, in input order
    pub solutions: Vec<Solution>,
    pub rejected: Vec<RejectedLine>,
    pub total_time: Duration,
}

impl BatchResult {
    /// Puzzles with at least one solution
    #[must_use]
    pub fn solved(&self) -> usize {
        self.solutions.iter().filter(|s| !s.combos.is_empty()).count()
    }

    /// Puzzles whose search stopped on a budget
    #[must_use]
    pub fn incomplete(&self) -> usize {
        self.solutions.iter().filter(|s| !s.is_complete()).count()
    }
}

/// Parse puzzle lines, skipping blanks and `#` comments
#[must_use]
pub fn parse_puzzles<I, S>(lines: I) -> (Vec<Puzzle>, Vec<RejectedLine>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut puzzles = Vec::new();
    let mut rejected = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let text = line.as_ref().trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        match Puzzle::parse(text) {
            Ok(puzzle) => puzzles.push(puzzle),
            Err(error) => {
                warn!("Skipping line {}: {error}", idx + 1);
                rejected.push(RejectedLine {
                    line: idx + 1,
                    text: text.to_string(),
                    error,
                });
            }
        }
    }

    (puzzles, rejected)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(
            |_| ProgressStyle::default_bar(),
            |style| style.progress_chars("█▓▒░"),
        );
    pb.set_style(style);
    pb
}

/// Solve every puzzle line in parallel
///
/// Invalid lines are reported in the result rather than aborting the batch.
pub fn run_batch<I, S>(solver: &Solver<'_>, lines: I, show_progress: bool) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (puzzles, rejected) = parse_puzzles(lines);

    let pb = progress_bar(puzzles.len(), show_progress);
    let total_start = Instant::now();

    let solutions: Vec<Solution> = puzzles
        .par_iter()
        .map(|puzzle| {
            let solution = solver.solve(puzzle);
            pb.set_message(puzzle.to_string());
            pb.inc(1);
            solution
        })
        .collect();

    pb.finish_with_message("Complete!");

    BatchResult {
        solutions,
        rejected,
        total_time: total_start.elapsed(),
    }
}
