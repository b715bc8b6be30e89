//! Letter Boxed solving algorithms
//!
//! Word discovery walks the box against the dictionary index; the chain
//! search then links discovered words until every box letter is used.

pub mod budget;
mod combos;
mod engine;
mod explorer;

pub use budget::{
    BudgetMeter, CancelToken, DEFAULT_MAX_SOLUTIONS, DEFAULT_TIME_LIMIT, SearchBudget,
    SearchOutcome, SearchStatus,
};
pub use combos::{
    MAX_CHAIN_LENGTH, WordChain, compare_chains, find_combos, find_combos_within, rank_solutions,
    total_letters,
};
pub use engine::{Progress, Solution, Solver, SolverConfig, solve_with_dictionary};
pub use explorer::{MIN_WORD_LENGTH, discover_words, discover_words_within};
