//! Dictionaries for Letter Boxed solving
//!
//! Provides an embedded word list compiled into the binary plus loaders for
//! external newline-separated lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, load_lines};
