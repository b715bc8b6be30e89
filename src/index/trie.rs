//! Arena-backed prefix trie
//!
//! Nodes live in a single `Vec` and refer to their children by index, so the
//! structure has no interior pointers and is trivially `Send + Sync`.

use log::debug;

/// Index of a node inside a [`WordIndex`]
pub type NodeId = u32;

#[derive(Debug, Clone, Default)]
struct Node {
    terminal: bool,
    /// Sorted by letter so enumeration is alphabetical
    children: Vec<(u8, NodeId)>,
}

impl Node {
    fn child(&self, letter: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Normalize one raw dictionary line
///
/// Trims whitespace and lowercases. Returns `None` for blank lines and for
/// entries containing anything other than the letters `a..=z`.
///
/// # Examples
/// ```
/// use letterboxed_solver::index::normalize_entry;
///
/// assert_eq!(normalize_entry("  Apple\r"), Some("apple".to_string()));
/// assert_eq!(normalize_entry("don't"), None);
/// assert_eq!(normalize_entry(""), None);
/// ```
#[must_use]
pub fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// Immutable prefix index over a dictionary
///
/// Every node reachable from the root is the prefix of at least one indexed
/// word, so a successful [`find`](Self::find) proves the prefix is live.
#[derive(Debug, Clone)]
pub struct WordIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

impl WordIndex {
    /// The root node, standing for the empty prefix
    pub const ROOT: NodeId = 0;

    /// Build an index from raw dictionary lines
    ///
    /// Lines are normalized with [`normalize_entry`]; rejected lines and
    /// duplicates are skipped silently.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::index::WordIndex;
    ///
    /// let index = WordIndex::from_lines(["cat", "Car", "cart", "c4t", ""]);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.words_with_prefix("car"), vec!["car", "cart"]);
    /// assert!(index.words_with_prefix("dog").is_empty());
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::empty();
        let mut skipped = 0usize;

        for line in lines {
            match normalize_entry(line.as_ref()) {
                Some(word) => {
                    index.insert(&word);
                }
                None => skipped += 1,
            }
        }

        debug!(
            "Indexed {} words into {} trie nodes ({} lines skipped)",
            index.word_count,
            index.nodes.len(),
            skipped
        );
        index
    }

    fn empty() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Insert an already-normalized word; returns `false` if it was present
    fn insert(&mut self, word: &str) -> bool {
        let mut current = Self::ROOT;
        for letter in word.bytes() {
            let search = self.nodes[current as usize]
                .children
                .binary_search_by_key(&letter, |&(l, _)| l);
            current = match search {
                Ok(i) => self.nodes[current as usize].children[i].1,
                Err(i) => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[current as usize].children.insert(i, (letter, id));
                    id
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    /// Number of distinct words indexed
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow one letter from `node`
    ///
    /// Returns `None` if no indexed word continues with `letter`.
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node as usize].child(letter)
    }

    /// Whether the prefix ending at `node` is itself a complete word
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node as usize].terminal
    }

    /// Locate the node for `prefix`, walking from the root
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(Self::ROOT, |node, letter| self.child(node, letter))
    }

    /// Whether any indexed word starts with `prefix`
    ///
    /// Route exploration prunes with [`child`](Self::child) one letter at a
    /// time, which answers the same question without re-walking the prefix.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.find(prefix).is_some()
    }

    /// Whether `word` is a complete indexed word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.is_terminal(node))
    }

    /// All indexed words beginning with `prefix`, in alphabetical order
    ///
    /// Runs in time proportional to the prefix length plus the size of the
    /// matching subtree. Returns an empty vector when nothing matches.
    /// Route exploration never enumerates subtrees; it prunes through
    /// [`child`](Self::child), since every node leads to at least one word.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut stack: Vec<(NodeId, String)> = vec![(start, prefix.to_string())];

        while let Some((node, text)) = stack.pop() {
            let node_ref = &self.nodes[node as usize];
            if node_ref.terminal {
                words.push(text.clone());
            }
            // Reverse push keeps alphabetical pop order
            for &(letter, child) in node_ref.children.iter().rev() {
                let mut next = text.clone();
                next.push(letter as char);
                stack.push((child, next));
            }
        }

        words
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordIndex {
        WordIndex::from_lines([
            "apple", "app", "apply", "apt", "banana", "band", "bandana", "can",
        ])
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_entry("  HeLLo \n"), Some("hello".to_string()));
        assert_eq!(normalize_entry("\tword\r"), Some("word".to_string()));
    }

    #[test]
    fn normalize_rejects_non_alphabetic() {
        assert_eq!(normalize_entry("e-mail"), None);
        assert_eq!(normalize_entry("two words"), None);
        assert_eq!(normalize_entry("abc1"), None);
        assert_eq!(normalize_entry("café"), None);
        assert_eq!(normalize_entry("   "), None);
    }

    #[test]
    fn counts_distinct_words() {
        let index = WordIndex::from_lines(["cat", "CAT", " cat ", "dog"]);
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn empty_dictionary() {
        let index = WordIndex::from_lines(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
        assert!(index.words_with_prefix("").is_empty());
        assert!(index.words_with_prefix("a").is_empty());
        assert!(!index.has_prefix(""));
    }

    #[test]
    fn malformed_dictionary_yields_no_words() {
        let index = WordIndex::from_lines(["123", "!!!", "", "a b"]);
        assert!(index.is_empty());
    }

    #[test]
    fn contains_only_complete_words() {
        let index = sample();
        assert!(index.contains("app"));
        assert!(index.contains("apple"));
        assert!(!index.contains("ap"));
        assert!(!index.contains("appl"));
        assert!(!index.contains("zebra"));
    }

    #[test]
    fn has_prefix_for_partial_words() {
        let index = sample();
        assert!(index.has_prefix("a"));
        assert!(index.has_prefix("ban"));
        assert!(index.has_prefix("bandana"));
        assert!(!index.has_prefix("bandanas"));
        assert!(!index.has_prefix("x"));
    }

    #[test]
    fn words_with_prefix_alphabetical() {
        let index = sample();
        assert_eq!(
            index.words_with_prefix("ap"),
            vec!["app", "apple", "apply", "apt"]
        );
        assert_eq!(index.words_with_prefix("band"), vec!["band", "bandana"]);
        assert_eq!(index.words_with_prefix("can"), vec!["can"]);
    }

    #[test]
    fn words_with_prefix_no_match() {
        let index = sample();
        assert!(index.words_with_prefix("q").is_empty());
        assert!(index.words_with_prefix("applesauce").is_empty());
    }

    #[test]
    fn words_with_empty_prefix_lists_everything() {
        let index = sample();
        assert_eq!(index.words_with_prefix("").len(), index.len());
    }

    #[test]
    fn child_navigation_matches_find() {
        let index = sample();
        let a = index.child(WordIndex::ROOT, b'a').unwrap();
        let ap = index.child(a, b'p').unwrap();
        assert_eq!(Some(ap), index.find("ap"));
        assert!(!index.is_terminal(ap));
        assert!(index.child(ap, b'z').is_none());
    }

    #[test]
    fn every_node_leads_to_a_word() {
        let index = sample();
        for node in 0..index.node_count() as NodeId {
            let mut stack = vec![node];
            let mut found = false;
            while let Some(n) = stack.pop() {
                if index.is_terminal(n) {
                    found = true;
                    break;
                }
                stack.extend(index.nodes[n as usize].children.iter().map(|&(_, c)| c));
            }
            assert!(found || node == WordIndex::ROOT, "dead node {node}");
        }
    }

    #[test]
    fn collect_from_iterator() {
        let index: WordIndex = ["one", "two"].into_iter().collect();
        assert_eq!(index.len(), 2);
    }
}
