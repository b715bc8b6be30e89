//! Dictionary index
//!
//! A prefix trie built once from a raw word list and queried by the solver.

mod trie;

pub use trie::{NodeId, WordIndex, normalize_entry};
