//! Working with a solved puzzle's chains
//!
//! Filtering by included or excluded words, picking standout chains and
//! splitting long result lists into pages.

mod filter;
mod paging;

pub use filter::{SolutionFilter, most_efficient, most_elaborate};
pub use paging::{DEFAULT_PAGE_SIZE, Pages};
