//! Benchmark command
//!
//! Tests solver performance across randomly generated puzzles.

use crate::core::Puzzle;
use crate::solver::Solver;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_puzzles: usize,
    /// Puzzles with at least one solution
    pub solved: usize,
    /// Puzzles whose search stopped on a budget
    pub incomplete: usize,
    pub average_words: f64,
    pub average_combos: f64,
    /// Word count of the best chain -> number of puzzles
    pub distribution: FxHashMap<usize, usize>,
    pub min_best: Option<usize>,
    pub max_best: Option<usize>,
    /// Puzzle with the most solutions and its solution count
    pub richest: Option<(Puzzle, usize)>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` random puzzles from `seed`
#[must_use]
pub fn random_puzzles(count: usize, seed: u64) -> Vec<Puzzle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Puzzle::random(&mut rng)).collect()
}

/// Run the solver over `count` random puzzles generated from `seed`
///
/// Puzzles are solved in parallel; statistics are gathered afterwards.
pub fn run_benchmark(solver: &Solver<'_>, count: usize, seed: u64) -> BenchmarkResult {
    let puzzles = random_puzzles(count, seed);
    info!("Benchmarking {count} puzzles (seed {seed})");

    let start = Instant::now();
    let solutions = solver.solve_all(&puzzles);
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_words = 0;
    let mut total_combos = 0;
    let mut richest: Option<(Puzzle, usize)> = None;

    for solution in &solutions {
        total_words += solution.words.len();
        total_combos += solution.combos.len();

        if let Some(best) = solution.best() {
            *distribution.entry(best.len()).or_insert(0) += 1;
        }
        if solution.combos.len() > richest.as_ref().map_or(0, |(_, n)| *n) {
            richest = Some((solution.puzzle.clone(), solution.combos.len()));
        }
    }

    let total_puzzles = solutions.len();
    let solved = distribution.values().sum();
    let incomplete = solutions.iter().filter(|s| !s.is_complete()).count();
    let average = |total: usize| {
        if total_puzzles == 0 {
            0.0
        } else {
            total as f64 / total_puzzles as f64
        }
    };

    BenchmarkResult {
        seed,
        total_puzzles,
        solved,
        incomplete,
        average_words: average(total_words),
        average_combos: average(total_combos),
        min_best: distribution.keys().min().copied(),
        max_best: distribution.keys().max().copied(),
        distribution,
        richest,
        duration,
        puzzles_per_second: if duration.is_zero() {
            0.0
        } else {
            total_puzzles as f64 / duration.as_secs_f64()
        },
    }
}
