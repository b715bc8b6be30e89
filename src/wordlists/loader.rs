//! Dictionary loading utilities
//!
//! Reads newline-separated word lists from files or stdin, or hands out the
//! embedded list. Normalization happens later, when the index is built.

use super::embedded::WORDS;
use crate::index::WordIndex;
use log::debug;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Path that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Name that selects the embedded dictionary
pub const EMBEDDED_NAME: &str = "embedded";

/// The dictionary source could not be read
#[derive(Debug)]
pub enum DictionaryError {
    Unavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Dictionary '{}' is unavailable: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Where to take dictionary lines from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Embedded,
    Stdin,
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `-w` argument: `embedded`, `-` for stdin, or a path
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::wordlists::loader::DictionarySource;
    ///
    /// assert_eq!(DictionarySource::from_arg("embedded"), DictionarySource::Embedded);
    /// assert_eq!(DictionarySource::from_arg("-"), DictionarySource::Stdin);
    /// ```
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            EMBEDDED_NAME => Self::Embedded,
            STDIN_PATH => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the raw lines of this source
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Unavailable`] if the file or stdin cannot be read.
    pub fn lines(&self) -> Result<Vec<String>, DictionaryError> {
        match self {
            Self::Embedded => Ok(lines_from_slice(WORDS)),
            Self::Stdin => load_lines(STDIN_PATH),
            Self::File(path) => load_lines(path),
        }
    }

    /// Read this source and build an index over it
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Unavailable`] if the source cannot be read.
    pub fn load_index(&self) -> Result<WordIndex, DictionaryError> {
        let lines = self.lines()?;
        let index = WordIndex::from_lines(&lines);
        debug!(
            "Indexed {} of {} dictionary lines from {self}",
            index.len(),
            lines.len()
        );
        Ok(index)
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded list"),
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load raw lines from a file, or from stdin when `path` is `-`
///
/// Lines are returned as-is apart from the line terminator.
///
/// # Errors
///
/// Returns [`DictionaryError::Unavailable`] if the file cannot be opened or
/// is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use letterboxed_solver::wordlists::load_lines;
///
/// let lines = load_lines("words.txt").unwrap();
/// println!("Loaded {} lines", lines.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let unavailable = |source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(unavailable)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(unavailable)?
    };

    Ok(content.lines().map(str::to_string).collect())
}

/// Convert an embedded string slice into owned lines
#[must_use]
pub fn lines_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
