//! Main Letter Boxed solver interface

use super::budget::{SearchBudget, SearchOutcome, SearchStatus};
use super::combos::{MAX_CHAIN_LENGTH, WordChain, find_combos_within};
use super::explorer::{MIN_WORD_LENGTH, discover_words_within};
use crate::core::Puzzle;
use crate::index::WordIndex;
use log::{info, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Tunable limits for a solve
///
/// The default runs under [`SearchBudget::bounded`]; pass
/// [`SearchBudget::unlimited`] to explore exhaustively.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Longest word chain considered (default: 5)
    pub max_chain_length: usize,
    /// Shortest word accepted (default: 3)
    pub min_word_length: usize,
    pub budget: SearchBudget,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_chain_length: MAX_CHAIN_LENGTH,
            min_word_length: MIN_WORD_LENGTH,
            budget: SearchBudget::bounded(),
        }
    }
}

/// Checkpoints reported while a solve runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The dictionary index is ready to query
    IndexReady { words: usize },
    WordsDiscovered { count: usize },
    CombosFound { count: usize },
}

/// Everything one solve produced
#[derive(Debug, Clone)]
pub struct Solution {
    pub puzzle: Puzzle,
    /// Possible words in discovery order
    pub words: Vec<String>,
    /// Ranked solution chains
    pub combos: Vec<WordChain>,
    pub word_status: SearchStatus,
    pub combo_status: SearchStatus,
    /// Stack pops across both searches
    pub steps: u64,
    pub elapsed: Duration,
}

impl Solution {
    /// Whether both searches ran to exhaustion
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.word_status.is_complete() && self.combo_status.is_complete()
    }

    /// The top-ranked chain, if any
    #[must_use]
    pub fn best(&self) -> Option<&WordChain> {
        self.combos.first()
    }

    /// Reason the solve stopped early, if it did
    #[must_use]
    pub fn stop_reason(&self) -> Option<SearchStatus> {
        [self.word_status, self.combo_status]
            .into_iter()
            .find(|status| !status.is_complete())
    }
}

/// Letter Boxed solver
///
/// Borrows an immutable dictionary index; each call to [`solve`](Self::solve)
/// owns its own search state, so one solver can serve many threads.
pub struct Solver<'a> {
    index: &'a WordIndex,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over `index` with the given limits
    #[must_use]
    pub const fn new(index: &'a WordIndex, config: SolverConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub fn with_defaults(index: &'a WordIndex) -> Self {
        Self::new(index, SolverConfig::default())
    }

    #[must_use]
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve one puzzle
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::Puzzle;
    /// use letterboxed_solver::index::WordIndex;
    /// use letterboxed_solver::solver::Solver;
    ///
    /// let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
    /// let solver = Solver::with_defaults(&index);
    /// let puzzle = Puzzle::parse("abc-def-ghi-jkl").unwrap();
    ///
    /// let solution = solver.solve(&puzzle);
    /// assert_eq!(solution.combos.len(), 1);
    /// assert_eq!(solution.combos[0], vec!["adgj", "jbehkcfil"]);
    /// assert!(solution.is_complete());
    /// ```
    #[must_use]
    pub fn solve(&self, puzzle: &Puzzle) -> Solution {
        self.solve_with_progress(puzzle, |_| {})
    }

    /// Solve one puzzle, reporting each checkpoint to `on_progress`
    pub fn solve_with_progress<F: FnMut(Progress)>(
        &self,
        puzzle: &Puzzle,
        mut on_progress: F,
    ) -> Solution {
        let started = Instant::now();
        let mut meter = self.config.budget.start();

        info!("Solving {puzzle} against {} words", self.index.len());
        on_progress(Progress::IndexReady {
            words: self.index.len(),
        });

        let discovery =
            discover_words_within(puzzle, self.index, self.config.min_word_length, &mut meter);
        if !discovery.status.is_complete() {
            warn!("Word discovery for {puzzle} stopped early: {}", discovery.status);
        }
        info!("Found {} possible words", discovery.items.len());
        on_progress(Progress::WordsDiscovered {
            count: discovery.items.len(),
        });

        let combos = if puzzle.has_distinct_letters() {
            find_combos_within(
                &discovery.items,
                puzzle.box_letters(),
                self.config.max_chain_length,
                &mut meter,
            )
        } else {
            warn!("Puzzle {puzzle} repeats a letter; full coverage is impossible");
            SearchOutcome {
                items: Vec::new(),
                status: SearchStatus::Exhausted,
                steps: 0,
            }
        };
        if !combos.status.is_complete() {
            warn!("Chain search for {puzzle} stopped early: {}", combos.status);
        }
        info!("Found {} word combos", combos.items.len());
        on_progress(Progress::CombosFound {
            count: combos.items.len(),
        });

        Solution {
            puzzle: puzzle.clone(),
            words: discovery.items,
            combos: combos.items,
            word_status: discovery.status,
            combo_status: combos.status,
            steps: meter.steps(),
            elapsed: started.elapsed(),
        }
    }

    /// Solve many puzzles in parallel
    ///
    /// Results keep the input order. Each puzzle gets its own budget meter.
    #[must_use]
    pub fn solve_all(&self, puzzles: &[Puzzle]) -> Vec<Solution> {
        puzzles.par_iter().map(|puzzle| self.solve(puzzle)).collect()
    }
}

/// Build a fresh index from raw dictionary lines and solve one puzzle
///
/// Convenience for one-off solves; reuse a [`Solver`] when solving several
/// puzzles against the same dictionary.
pub fn solve_with_dictionary<I, S>(puzzle: &Puzzle, lines: I, config: SolverConfig) -> Solution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let index = WordIndex::from_lines(lines);
    Solver::new(&index, config).solve(puzzle)
}
