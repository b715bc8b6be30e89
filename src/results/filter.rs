//! Include/exclude filtering of solution chains

use crate::solver::{WordChain, total_letters};

/// Keeps chains that use every included word and no excluded word
///
/// # Examples
/// ```
/// use letterboxed_solver::results::SolutionFilter;
///
/// let chains = vec![
///     vec!["lad".to_string(), "dog".to_string()],
///     vec!["lag".to_string(), "gob".to_string()],
/// ];
/// let filter = SolutionFilter::new().include("LAD").exclude("gob");
/// let kept = filter.apply(&chains);
/// assert_eq!(kept, vec![&chains[0]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

/// Lowercase, drop anything but letters and spaces, then split on spaces
fn split_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

impl SolutionFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every word in the space-separated `text`
    #[must_use]
    pub fn include(mut self, text: &str) -> Self {
        self.include = split_words(text);
        self
    }

    /// Reject chains using any word in the space-separated `text`
    #[must_use]
    pub fn exclude(mut self, text: &str) -> Self {
        self.exclude = split_words(text);
        self
    }

    #[must_use]
    pub fn included(&self) -> &[String] {
        &self.include
    }

    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    /// Whether the filter lets everything through
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    #[must_use]
    pub fn matches(&self, chain: &[String]) -> bool {
        !chain.iter().any(|word| self.exclude.contains(word))
            && self.include.iter().all(|word| chain.contains(word))
    }

    /// Chains that pass the filter, in their original order
    #[must_use]
    pub fn apply<'c>(&self, chains: &'c [WordChain]) -> Vec<&'c WordChain> {
        chains.iter().filter(|chain| self.matches(chain)).collect()
    }
}

/// The chain with the fewest total letters (earliest on ties)
#[must_use]
pub fn most_efficient<'c, I>(chains: I) -> Option<&'c WordChain>
where
    I: IntoIterator<Item = &'c WordChain>,
{
    chains.into_iter().min_by_key(|chain| total_letters(chain))
}

/// The chain with the most total letters (earliest on ties)
#[must_use]
pub fn most_elaborate<'c, I>(chains: I) -> Option<&'c WordChain>
where
    I: IntoIterator<Item = &'c WordChain>,
{
    chains.into_iter().fold(None, |best, chain| match best {
        Some(current) if total_letters(current) >= total_letters(chain) => Some(current),
        _ => Some(chain),
    })
}
