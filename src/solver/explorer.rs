//! Word discovery by walking the box
//!
//! Depth-first search over letter sequences. A route is extended only with
//! letters from sides other than the one its last letter sits on, and a
//! route no dictionary word starts with is dropped on the spot.

use super::budget::{BudgetMeter, SearchBudget, SearchOutcome, SearchStatus};
use crate::core::Puzzle;
use crate::index::{NodeId, WordIndex};
use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// A partial word waiting on the stack
struct Route {
    text: String,
    /// Trie node of `text` minus its last letter
    parent: NodeId,
    last: u8,
}

impl Route {
    fn seed(letter: u8) -> Self {
        Self {
            text: (letter as char).to_string(),
            parent: WordIndex::ROOT,
            last: letter,
        }
    }

    fn extend(&self, node: NodeId, letter: u8) -> Self {
        let mut text = String::with_capacity(self.text.len() + 1);
        text.push_str(&self.text);
        text.push(letter as char);
        Self {
            text,
            parent: node,
            last: letter,
        }
    }
}

/// Find every dictionary word of at least three letters spellable on the box
///
/// Words come back in discovery order. The search is unbounded; see
/// [`discover_words_within`] for a budgeted variant.
///
/// # Examples
/// ```
/// use letterboxed_solver::core::Puzzle;
/// use letterboxed_solver::index::WordIndex;
/// use letterboxed_solver::solver::discover_words;
///
/// let puzzle = Puzzle::from_sides(["abc", "def", "ghi", "jkl"]).unwrap();
/// let index = WordIndex::from_lines(["adgj", "jbehkcfil", "abc", "ad"]);
///
/// let mut words = discover_words(&puzzle, &index);
/// words.sort();
/// assert_eq!(words, vec!["adgj", "jbehkcfil"]);
/// ```
#[must_use]
pub fn discover_words(puzzle: &Puzzle, index: &WordIndex) -> Vec<String> {
    let budget = SearchBudget::unlimited();
    discover_words_within(puzzle, index, MIN_WORD_LENGTH, &mut budget.start()).items
}

/// Budgeted word discovery
///
/// Explores routes most-recent-first from one seed per box letter. Stops
/// early when `meter` trips and returns the words found up to that point.
pub fn discover_words_within(
    puzzle: &Puzzle,
    index: &WordIndex,
    min_length: usize,
    meter: &mut BudgetMeter<'_>,
) -> SearchOutcome<String> {
    let start_steps = meter.steps();
    let mut words = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut stack: Vec<Route> = puzzle.letters().map(Route::seed).collect();
    let mut status = SearchStatus::Exhausted;

    while let Some(route) = stack.pop() {
        if let Some(stop) = meter.tick() {
            status = stop;
            break;
        }

        // No indexed word starts with this route, so no extension can match
        let Some(node) = index.child(route.parent, route.last) else {
            continue;
        };

        if index.is_terminal(node)
            && route.text.len() >= min_length
            && seen.insert(route.text.clone())
        {
            trace!("found word: {}", route.text);
            words.push(route.text.clone());
        }

        for side in puzzle.sides() {
            if side.contains(route.last) {
                continue;
            }
            for &letter in side.letters() {
                stack.push(route.extend(node, letter));
            }
        }
    }

    let steps = meter.steps() - start_steps;
    debug!(
        "Word discovery on {puzzle}: {} words in {steps} steps ({status})",
        words.len()
    );

    SearchOutcome {
        items: words,
        status,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_puzzle() -> Puzzle {
        Puzzle::from_sides(["abc", "def", "ghi", "jkl"]).unwrap()
    }

    #[test]
    fn worked_example_words() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);

        let mut words = discover_words(&puzzle, &index);
        words.sort();
        assert_eq!(words, vec!["adgj", "jbehkcfil"]);
    }

    #[test]
    fn rejects_same_side_transitions() {
        let puzzle = sample_puzzle();
        // "abd" puts a and b (same side) next to each other
        let index = WordIndex::from_lines(["abd", "adb"]);
        assert_eq!(discover_words(&puzzle, &index), vec!["adb"]);
    }

    #[test]
    fn rejects_letters_outside_box() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["adz", "zad"]);
        assert!(discover_words(&puzzle, &index).is_empty());
    }

    #[test]
    fn skips_short_words() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["a", "ad", "ada"]);
        assert_eq!(discover_words(&puzzle, &index), vec!["ada"]);
    }

    #[test]
    fn allows_repeated_letters() {
        let puzzle = Puzzle::from_sides(["lab", "ucd", "efg", "hij"]).unwrap();
        let index = WordIndex::from_lines(["lull"]);
        // l-u-l-l: the final "ll" repeats a side
        assert!(discover_words(&puzzle, &index).is_empty());

        let index = WordIndex::from_lines(["lulu", "ulul"]);
        let mut words = discover_words(&puzzle, &index);
        words.sort();
        assert_eq!(words, vec!["lulu", "ulul"]);
    }

    #[test]
    fn finds_prefix_words_and_extensions() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["adg", "adgj", "adgjd"]);
        let mut words = discover_words(&puzzle, &index);
        words.sort();
        assert_eq!(words, vec!["adg", "adgj", "adgjd"]);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(Vec::<&str>::new());
        assert!(discover_words(&puzzle, &index).is_empty());
    }

    #[test]
    fn no_duplicates_with_repeated_box_letters() {
        // 'a' sits on two sides, so "aga" is reachable along several routes
        let puzzle = Puzzle::from_sides(["abc", "dea", "ghi", "jkl"]).unwrap();
        let index = WordIndex::from_lines(["aga"]);
        assert_eq!(discover_words(&puzzle, &index), vec!["aga"]);
    }

    #[test]
    fn discovery_order_is_deterministic() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["adgj", "jbehkcfil", "ada", "lad", "gal", "jab"]);
        let first = discover_words(&puzzle, &index);
        let second = discover_words(&puzzle, &index);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn most_recent_seed_explored_first() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["ada", "lal"]);
        // Seeds are pushed a..l, so routes from 'l' pop first
        assert_eq!(discover_words(&puzzle, &index), vec!["lal", "ada"]);
    }

    #[test]
    fn min_length_is_configurable() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["ada", "adgj"]);
        let budget = SearchBudget::unlimited();
        let outcome = discover_words_within(&puzzle, &index, 4, &mut budget.start());
        assert_eq!(outcome.items, vec!["adgj"]);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
    }

    #[test]
    fn step_limit_returns_partial_result() {
        let puzzle = sample_puzzle();
        let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
        let budget = SearchBudget::unlimited().with_max_steps(2);
        let outcome = discover_words_within(&puzzle, &index, MIN_WORD_LENGTH, &mut budget.start());
        assert_eq!(outcome.status, SearchStatus::StepLimit);
        assert_eq!(outcome.steps, 2);
        assert!(outcome.items.is_empty());
    }
}
