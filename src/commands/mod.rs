//! Command implementations

pub mod batch;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use batch::{BatchResult, RejectedLine, parse_puzzles, run_batch};
pub use benchmark::{BenchmarkResult, random_puzzles, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveReport, parse_sides, solve_puzzle};
