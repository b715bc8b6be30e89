//! Core domain types for Letter Boxed
//!
//! Letters, sides and puzzles. Everything here is pure and cheap to copy;
//! the search modules build on these types.

mod letter_set;
mod puzzle;

pub use letter_set::{ALPHABET_SIZE, LetterSet};
pub use puzzle::{
    BOX_LETTER_COUNT, LETTERS_PER_SIDE, Puzzle, PuzzleError, SIDE_COUNT, Side, SideError,
};
