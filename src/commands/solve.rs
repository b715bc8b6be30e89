//! Puzzle solving command
//!
//! Solves a single puzzle and selects the slice of solutions to show.

use crate::core::Puzzle;
use crate::results::{DEFAULT_PAGE_SIZE, SolutionFilter};
use crate::solver::{Solution, Solver, WordChain};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    /// Four side strings, or one string holding all four
    pub sides: Vec<String>,
    pub filter: SolutionFilter,
    /// Zero-based page of solutions to show
    pub page: usize,
    pub page_size: usize,
    /// Also list every discovered word
    pub show_words: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(sides: Vec<String>) -> Self {
        Self {
            sides,
            filter: SolutionFilter::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            show_words: false,
        }
    }
}

/// Result of solving a puzzle
#[derive(Debug)]
pub struct SolveReport {
    pub solution: Solution,
    pub filter: SolutionFilter,
    /// Ranked solutions that passed the filter
    pub filtered: Vec<WordChain>,
    pub page: usize,
    pub page_size: usize,
    pub show_words: bool,
}

/// Turn raw side arguments into a puzzle
///
/// A single argument is parsed as a whole puzzle (`abc-def-ghi-jkl`);
/// otherwise each argument is one side.
///
/// # Errors
///
/// Returns a message naming the offending side if the input is malformed.
pub fn parse_sides(sides: &[String]) -> Result<Puzzle, String> {
    let parsed = match sides {
        [single] => Puzzle::parse(single),
        many => Puzzle::from_slice(many),
    };
    parsed.map_err(|e| e.to_string())
}

/// Solve a puzzle given as side strings
///
/// # Errors
///
/// Returns an error if the sides do not form a valid puzzle. An unsolvable
/// puzzle is not an error; the report simply holds no solutions.
pub fn solve_puzzle(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveReport, String> {
    let puzzle = parse_sides(&config.sides)?;
    let solution = solver.solve(&puzzle);

    let filtered = config
        .filter
        .apply(&solution.combos)
        .into_iter()
        .cloned()
        .collect();

    Ok(SolveReport {
        solution,
        filter: config.filter,
        filtered,
        page: config.page,
        page_size: config.page_size,
        show_words: config.show_words,
    })
}
