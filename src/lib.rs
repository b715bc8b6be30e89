//! Letter Boxed Solver
//!
//! Solves the Letter Boxed word puzzle: twelve letters on four sides of a
//! square, joined into a chain of words that uses every letter. Dictionary
//! words are discovered with a trie-pruned walk of the box, then linked into
//! chains by a bounded depth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use letterboxed_solver::core::Puzzle;
//! use letterboxed_solver::index::WordIndex;
//! use letterboxed_solver::solver::Solver;
//!
//! let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
//! let puzzle = Puzzle::from_sides(["abc", "def", "ghi", "jkl"]).unwrap();
//!
//! let solution = Solver::with_defaults(&index).solve(&puzzle);
//! assert_eq!(solution.best().unwrap(), &vec!["adgj", "jbehkcfil"]);
//! ```

// Core domain types
pub mod core;

// Dictionary prefix index
pub mod index;

// Solving algorithms
pub mod solver;

// Filtering and paging of solutions
pub mod results;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
