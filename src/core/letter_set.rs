//! Compact set of lowercase letters
//!
//! Each of the 26 letters `a..=z` maps to one bit of a `u32`, so union and
//! equality checks during the chain search are single instructions.

use std::fmt;

/// Number of distinct letters a [`LetterSet`] can hold
pub const ALPHABET_SIZE: usize = 26;

/// A set of lowercase ASCII letters stored as a bit mask
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build the set of letters used by `word`
    ///
    /// Bytes outside `a..=z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("lull");
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains(b'l'));
    /// assert!(set.contains(b'u'));
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut set = Self::EMPTY;
        for &byte in word.as_bytes() {
            if byte.is_ascii_lowercase() {
                set.insert(byte);
            }
        }
        set
    }

    /// Add a letter to the set
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Check if the set contains a letter
    ///
    /// Returns `false` for anything outside `a..=z`.
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            if letter.is_ascii_lowercase() {
                set.insert(letter);
            }
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{self}]")
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
