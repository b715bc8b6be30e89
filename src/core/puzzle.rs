//! Letter Boxed puzzle representation
//!
//! A puzzle is four sides of three letters each. Consecutive letters of a
//! legal word must come from different sides.

use super::LetterSet;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Number of sides on the box
pub const SIDE_COUNT: usize = 4;

/// Number of letters on each side
pub const LETTERS_PER_SIDE: usize = 3;

/// Number of distinct letters a well-formed puzzle uses
pub const BOX_LETTER_COUNT: usize = SIDE_COUNT * LETTERS_PER_SIDE;

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Error for a side string that does not resolve to three letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideError {
    InvalidLength(usize),
    NonAlphabetic(char),
}

impl fmt::Display for SideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "each side must have exactly 3 letters, got {len}")
            }
            Self::NonAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for SideError {}

/// Error for puzzle input that cannot be shaped into four valid sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Side `index` (0-based) is malformed
    InvalidSide { index: usize, error: SideError },
    WrongSideCount(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide { index, error } => {
                write!(f, "Invalid side {}: {error}. Enter like this: 'wvs'", index + 1)
            }
            Self::WrongSideCount(count) => {
                write!(f, "A puzzle needs exactly 4 sides, got {count}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSide { error, .. } => Some(error),
            Self::WrongSideCount(_) => None,
        }
    }
}

/// One edge of the box: three lowercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Side([u8; LETTERS_PER_SIDE]);

impl Side {
    /// Parse a side from user input
    ///
    /// Whitespace is stripped and letters are lowercased before validation.
    ///
    /// # Errors
    /// Returns `SideError` if the remaining text is not exactly three
    /// alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::Side;
    ///
    /// let side = Side::parse(" W v S ").unwrap();
    /// assert_eq!(side.to_string(), "wvs");
    ///
    /// assert!(Side::parse("ab").is_err());
    /// assert!(Side::parse("a1c").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SideError> {
        let cleaned: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if let Some(&bad) = cleaned.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(SideError::NonAlphabetic(bad));
        }
        if cleaned.len() != LETTERS_PER_SIDE {
            return Err(SideError::InvalidLength(cleaned.len()));
        }

        let mut letters = [0u8; LETTERS_PER_SIDE];
        for (slot, ch) in letters.iter_mut().zip(cleaned) {
            *slot = ch as u8;
        }
        Ok(Self(letters))
    }

    /// The letters in entry order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; LETTERS_PER_SIDE] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// A Letter Boxed puzzle: four sides of three letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    sides: [Side; SIDE_COUNT],
}

impl Puzzle {
    #[must_use]
    pub const fn new(sides: [Side; SIDE_COUNT]) -> Self {
        Self { sides }
    }

    /// Build a puzzle from four side strings
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidSide` naming the first malformed side.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::from_sides(["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(puzzle.box_letters().len(), 12);
    /// assert_eq!(puzzle.to_string(), "abc-def-ghi-jkl");
    /// ```
    pub fn from_sides<S: AsRef<str>>(sides: [S; SIDE_COUNT]) -> Result<Self, PuzzleError> {
        let mut parsed = [Side([b'a'; LETTERS_PER_SIDE]); SIDE_COUNT];
        for (index, (slot, text)) in parsed.iter_mut().zip(sides.iter()).enumerate() {
            *slot = Side::parse(text.as_ref())
                .map_err(|error| PuzzleError::InvalidSide { index, error })?;
        }
        Ok(Self::new(parsed))
    }

    /// Build a puzzle from any number of side strings
    ///
    /// # Errors
    /// Returns `PuzzleError::WrongSideCount` unless exactly four are given,
    /// or `PuzzleError::InvalidSide` for a malformed side.
    pub fn from_slice<S: AsRef<str>>(sides: &[S]) -> Result<Self, PuzzleError> {
        match sides {
            [a, b, c, d] => Self::from_sides([a.as_ref(), b.as_ref(), c.as_ref(), d.as_ref()]),
            _ => Err(PuzzleError::WrongSideCount(sides.len())),
        }
    }

    /// Parse a puzzle from a single line
    ///
    /// Sides may be separated by whitespace, commas, dashes, slashes or
    /// pipes. A run of exactly twelve letters is split into four sides.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the line does not describe four valid sides.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::Puzzle;
    ///
    /// let dashed = Puzzle::parse("abc-def-ghi-jkl").unwrap();
    /// let spaced = Puzzle::parse("ABC, def ghi jkl").unwrap();
    /// let packed = Puzzle::parse("abcdefghijkl").unwrap();
    /// assert_eq!(dashed, spaced);
    /// assert_eq!(dashed, packed);
    /// ```
    pub fn parse(line: &str) -> Result<Self, PuzzleError> {
        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/' | '|'))
            .filter(|part| !part.is_empty())
            .collect();

        if let [packed] = parts.as_slice()
            && packed.len() == BOX_LETTER_COUNT
            && packed.is_ascii()
        {
            let chunks: Vec<&str> = (0..SIDE_COUNT)
                .map(|i| &packed[i * LETTERS_PER_SIDE..(i + 1) * LETTERS_PER_SIDE])
                .collect();
            return Self::from_slice(&chunks);
        }

        Self::from_slice(&parts)
    }

    /// Generate a random puzzle with twelve distinct letters
    ///
    /// At least three vowels are always included so that most generated
    /// puzzles admit some words.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let vowel_count = rng.random_range(3..=4);

        let mut vowels = VOWELS.to_vec();
        vowels.shuffle(rng);
        let mut consonants = CONSONANTS.to_vec();
        consonants.shuffle(rng);

        let mut letters: Vec<u8> = vowels
            .into_iter()
            .take(vowel_count)
            .chain(consonants.into_iter().take(BOX_LETTER_COUNT - vowel_count))
            .collect();
        letters.shuffle(rng);

        let mut sides = [Side([b'a'; LETTERS_PER_SIDE]); SIDE_COUNT];
        for (side, chunk) in sides.iter_mut().zip(letters.chunks_exact(LETTERS_PER_SIDE)) {
            side.0.copy_from_slice(chunk);
        }
        Self::new(sides)
    }

    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[Side; SIDE_COUNT] {
        &self.sides
    }

    /// All box letters in side order, one per side slot
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.sides.iter().flat_map(|side| side.0.iter().copied())
    }

    /// The set union of all side letters
    #[must_use]
    pub fn box_letters(&self) -> LetterSet {
        self.letters().collect()
    }

    /// Whether the twelve box letters are all distinct
    ///
    /// Puzzles that reuse a letter can never be fully covered.
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.box_letters().len() == BOX_LETTER_COUNT
    }

    /// Index of the first side holding `letter`
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(letter))
    }

    /// Whether `next` may directly follow `prev` in a word
    ///
    /// `next` must sit on some side that does not also hold `prev`.
    #[must_use]
    pub fn is_legal_transition(&self, prev: u8, next: u8) -> bool {
        self.sides
            .iter()
            .any(|side| side.contains(next) && !side.contains(prev))
    }

    /// Whether `word` can be spelled by walking the box
    #[must_use]
    pub fn is_legal_word(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        !bytes.is_empty()
            && bytes.iter().all(|&b| self.side_of(b).is_some())
            && bytes
                .windows(2)
                .all(|pair| self.is_legal_transition(pair[0], pair[1]))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Puzzle {
        Puzzle::from_sides(["abc", "def", "ghi", "jkl"]).unwrap()
    }

    #[test]
    fn side_parse_normalizes() {
        let side = Side::parse("W V\tS").unwrap();
        assert_eq!(side.letters(), b"wvs");
    }

    #[test]
    fn side_parse_wrong_length() {
        assert_eq!(Side::parse("ab"), Err(SideError::InvalidLength(2)));
        assert_eq!(Side::parse("abcd"), Err(SideError::InvalidLength(4)));
        assert_eq!(Side::parse(""), Err(SideError::InvalidLength(0)));
        assert_eq!(Side::parse("   "), Err(SideError::InvalidLength(0)));
    }

    #[test]
    fn side_parse_non_alphabetic() {
        assert_eq!(Side::parse("a1c"), Err(SideError::NonAlphabetic('1')));
        assert_eq!(Side::parse("a-c"), Err(SideError::NonAlphabetic('-')));
        assert!(matches!(
            Side::parse("aéc"),
            Err(SideError::NonAlphabetic('é'))
        ));
    }

    #[test]
    fn from_sides_reports_side_index() {
        let err = Puzzle::from_sides(["abc", "de", "ghi", "jkl"]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidSide {
                index: 1,
                error: SideError::InvalidLength(2)
            }
        );
        assert!(err.to_string().contains("side 2"));
    }

    #[test]
    fn from_slice_requires_four_sides() {
        assert_eq!(
            Puzzle::from_slice(&["abc", "def", "ghi"]),
            Err(PuzzleError::WrongSideCount(3))
        );
        assert!(Puzzle::from_slice(&["abc", "def", "ghi", "jkl"]).is_ok());
    }

    #[test]
    fn parse_accepts_separators() {
        let expected = sample();
        for line in [
            "abc def ghi jkl",
            "abc-def-ghi-jkl",
            "abc,def,ghi,jkl",
            "ABC / DEF / GHI / JKL",
            "abc|def|ghi|jkl",
            "abcdefghijkl",
        ] {
            assert_eq!(Puzzle::parse(line).unwrap(), expected, "line: {line}");
        }
    }

    #[test]
    fn parse_rejects_bad_lines() {
        assert!(Puzzle::parse("").is_err());
        assert!(Puzzle::parse("abcdefghijk").is_err());
        assert!(Puzzle::parse("abc def ghi jk").is_err());
        assert!(Puzzle::parse("abc def ghi jkl mno").is_err());
    }

    #[test]
    fn box_letters_union() {
        let puzzle = sample();
        assert_eq!(puzzle.box_letters(), LetterSet::from_word("abcdefghijkl"));
        assert!(puzzle.has_distinct_letters());
    }

    #[test]
    fn duplicate_letters_detected() {
        let puzzle = Puzzle::from_sides(["abc", "dea", "ghi", "jkl"]).unwrap();
        assert_eq!(puzzle.box_letters().len(), 11);
        assert!(!puzzle.has_distinct_letters());
    }

    #[test]
    fn side_of_letter() {
        let puzzle = sample();
        assert_eq!(puzzle.side_of(b'a'), Some(0));
        assert_eq!(puzzle.side_of(b'e'), Some(1));
        assert_eq!(puzzle.side_of(b'l'), Some(3));
        assert_eq!(puzzle.side_of(b'z'), None);
    }

    #[test]
    fn transitions_between_sides() {
        let puzzle = sample();
        assert!(puzzle.is_legal_transition(b'a', b'd'));
        assert!(puzzle.is_legal_transition(b'l', b'a'));
        assert!(!puzzle.is_legal_transition(b'a', b'b'));
        assert!(!puzzle.is_legal_transition(b'a', b'a'));
        assert!(!puzzle.is_legal_transition(b'a', b'z'));
    }

    #[test]
    fn legal_words() {
        let puzzle = sample();
        assert!(puzzle.is_legal_word("adgj"));
        assert!(puzzle.is_legal_word("jbehkcfil"));
        assert!(puzzle.is_legal_word("ada"));
        assert!(!puzzle.is_legal_word("abd"));
        assert!(!puzzle.is_legal_word("adz"));
        assert!(!puzzle.is_legal_word(""));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let puzzle = sample();
        assert_eq!(Puzzle::parse(&puzzle.to_string()).unwrap(), puzzle);
    }

    #[test]
    fn random_puzzles_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let puzzle = Puzzle::random(&mut rng);
            assert!(puzzle.has_distinct_letters(), "{puzzle}");
            let vowels = puzzle.letters().filter(|l| VOWELS.contains(l)).count();
            assert!((3..=4).contains(&vowels), "{puzzle}");
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let a = Puzzle::random(&mut StdRng::seed_from_u64(42));
        let b = Puzzle::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
