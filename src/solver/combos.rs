//! Word chain search
//!
//! Links discovered words last-letter-to-first-letter until a chain uses
//! every box letter, then ranks the solutions.

use super::budget::{BudgetMeter, SearchBudget, SearchOutcome, SearchStatus};
use crate::core::{ALPHABET_SIZE, LetterSet};
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Longest chain the search will build
pub const MAX_CHAIN_LENGTH: usize = 5;

/// An ordered sequence of words linked by their end and start letters
pub type WordChain = Vec<String>;

/// A chain under construction, as indices into the word table
struct Chain {
    words: Vec<u32>,
    covered: LetterSet,
}

/// Precomputed facts about the candidate words
struct WordTable<'w> {
    words: Vec<&'w str>,
    letters: Vec<LetterSet>,
    last: Vec<u8>,
    /// Word indices grouped by first letter, in input order
    by_first: [Vec<u32>; ALPHABET_SIZE],
}

impl<'w> WordTable<'w> {
    /// Index the words that can appear in a chain covering `target`
    fn new(words: &'w [String], target: LetterSet) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut table = Self {
            words: Vec::with_capacity(words.len()),
            letters: Vec::with_capacity(words.len()),
            last: Vec::with_capacity(words.len()),
            by_first: std::array::from_fn(|_| Vec::new()),
        };

        for word in words {
            let bytes = word.as_bytes();
            let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
                continue;
            };
            if !bytes.iter().all(u8::is_ascii_lowercase) {
                warn!("Skipping non-lowercase candidate word {word:?}");
                continue;
            }
            let letters = LetterSet::from_word(word);
            if !letters.is_subset(target) {
                trace!("Skipping {word:?}: uses letters outside the target");
                continue;
            }
            if !seen.insert(word.as_str()) {
                continue;
            }

            let id = table.words.len() as u32;
            table.words.push(word.as_str());
            table.letters.push(letters);
            table.last.push(last);
            table.by_first[usize::from(first - b'a')].push(id);
        }

        table
    }

    /// One single-word chain per word, in input order
    fn seeds(&self) -> impl Iterator<Item = Chain> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(id, &covered)| Chain {
                words: vec![id as u32],
                covered,
            })
    }

    fn successors(&self, id: u32) -> &[u32] {
        let last = self.last[id as usize];
        &self.by_first[usize::from(last - b'a')]
    }

    fn to_chain(&self, ids: &[u32]) -> WordChain {
        ids.iter()
            .map(|&id| self.words[id as usize].to_string())
            .collect()
    }
}

/// Total letters across every word of a chain
#[must_use]
pub fn total_letters(chain: &[String]) -> usize {
    chain.iter().map(String::len).sum()
}

/// Canonical solution order
///
/// Fewer words first; among equal word counts, fewer total letters first.
#[must_use]
pub fn compare_chains(a: &[String], b: &[String]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| total_letters(a).cmp(&total_letters(b)))
}

/// Sort solutions into canonical order
///
/// The sort is stable, so chains that compare equal keep discovery order.
pub fn rank_solutions(chains: &mut [WordChain]) {
    chains.sort_by(|a, b| compare_chains(a, b));
}

/// Find every chain of at most `max_chain_length` words covering `target`
///
/// Returns ranked solutions. An empty word list or an unreachable target
/// gives an empty result.
///
/// # Examples
/// ```
/// use letterboxed_solver::core::LetterSet;
/// use letterboxed_solver::solver::{MAX_CHAIN_LENGTH, find_combos};
///
/// let words = vec!["adgj".to_string(), "jbehkcfil".to_string()];
/// let target = LetterSet::from_word("abcdefghijkl");
///
/// let combos = find_combos(&words, target, MAX_CHAIN_LENGTH);
/// assert_eq!(combos, vec![vec!["adgj".to_string(), "jbehkcfil".to_string()]]);
/// ```
#[must_use]
pub fn find_combos(words: &[String], target: LetterSet, max_chain_length: usize) -> Vec<WordChain> {
    let budget = SearchBudget::unlimited();
    find_combos_within(words, target, max_chain_length, &mut budget.start()).items
}

/// Budgeted chain search
///
/// Deepens one word at a time: pass `n` runs the depth-first search cut off
/// at `n` words and records only the `n`-word solutions, so every solution
/// of `n` words is recorded before any longer one. A chain that reaches full
/// coverage is never extended. When `meter` trips, the solutions recorded so
/// far are ranked and returned.
pub fn find_combos_within(
    words: &[String],
    target: LetterSet,
    max_chain_length: usize,
    meter: &mut BudgetMeter<'_>,
) -> SearchOutcome<WordChain> {
    let start_steps = meter.steps();
    let table = WordTable::new(words, target);
    let mut solutions: Vec<WordChain> = Vec::new();
    let mut status = SearchStatus::Exhausted;

    'deepening: for depth in 1..=max_chain_length {
        let mut stack: Vec<Chain> = table.seeds().collect();
        let mut cut_off = false;

        while let Some(chain) = stack.pop() {
            if let Some(stop) = meter.tick() {
                status = stop;
                break 'deepening;
            }

            if chain.covered == target {
                // Shorter solutions were recorded by an earlier pass
                if chain.words.len() < depth {
                    continue;
                }
                if meter.solutions_reached(solutions.len()) {
                    status = SearchStatus::SolutionLimit;
                    break 'deepening;
                }
                let solution = table.to_chain(&chain.words);
                trace!("found combo: {}", solution.join(", "));
                solutions.push(solution);
                continue;
            }
            if chain.words.len() >= depth {
                cut_off = true;
                continue;
            }

            let Some(&tail) = chain.words.last() else {
                continue;
            };
            for &next in table.successors(tail) {
                if chain.words.contains(&next) {
                    continue;
                }
                let mut extended = Vec::with_capacity(chain.words.len() + 1);
                extended.extend_from_slice(&chain.words);
                extended.push(next);
                stack.push(Chain {
                    words: extended,
                    covered: chain.covered.union(table.letters[next as usize]),
                });
            }
        }

        // Nothing was cut off, so a deeper pass would find nothing new
        if !cut_off {
            break;
        }
    }

    rank_solutions(&mut solutions);

    let steps = meter.steps() - start_steps;
    debug!(
        "Chain search over {} words: {} solutions in {steps} steps ({status})",
        table.words.len(),
        solutions.len()
    );

    SearchOutcome {
        items: solutions,
        status,
        steps,
    }
}
