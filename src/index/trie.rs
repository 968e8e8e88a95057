//! Prefix tree over five-letter words
//!
//! Nodes live in a flat arena; children are referenced by index and the root
//! is node 0. Terminal nodes sit at depth 5 and record the id of their word.

use crate::core::{ALPHABET_LEN, WORD_LEN, Word};

/// Index of a node in the arena
pub type NodeId = u32;

const ROOT: NodeId = 0;

// The root is never anyone's child, so 0 doubles as "no edge".
const NO_CHILD: NodeId = 0;

#[derive(Debug, Clone)]
struct Node {
    children: [NodeId; ALPHABET_LEN],
    word: Option<u32>,
    depth: u8,
}

impl Node {
    const fn new(depth: u8) -> Self {
        Self {
            children: [NO_CHILD; ALPHABET_LEN],
            word: None,
            depth,
        }
    }
}

/// Arena-backed trie
///
/// Word ids are assigned in insertion order, so a trie built from the guess
/// list maps terminal nodes straight back to guess indices.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: Vec<Word>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Empty trie containing only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
            words: Vec::new(),
        }
    }

    /// Build a trie from a word list; word ids follow slice order
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    /// use wordle_trie::index::Trie;
    ///
    /// let words: Vec<Word> = ["crane", "crate", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let trie = Trie::from_words(&words);
    ///
    /// assert!(trie.contains("cra"));
    /// assert!(!trie.contains("cro"));
    /// let found: Vec<String> = trie.words_with_prefix("cra").map(|w| w.to_string()).collect();
    /// assert_eq!(found, ["crane", "crate"]);
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut trie = Self::new();
        for &word in words {
            trie.insert(word);
        }
        trie
    }

    /// Insert a word, returning its id
    ///
    /// Re-inserting an existing word returns the id it already has.
    pub fn insert(&mut self, word: Word) -> usize {
        let mut node = ROOT;
        for position in 0..WORD_LEN {
            let letter = word.letter_at(position);
            let child = self.nodes[node as usize].children[letter];
            node = if child == NO_CHILD {
                let id = self.nodes.len() as NodeId;
                self.nodes.push(Node::new(position as u8 + 1));
                self.nodes[node as usize].children[letter] = id;
                id
            } else {
                child
            };
        }

        let terminal = &mut self.nodes[node as usize];
        if let Some(id) = terminal.word {
            return id as usize;
        }
        let id = self.words.len();
        terminal.word = Some(id as u32);
        self.words.push(word);
        id
    }

    /// True if some stored word starts with `prefix`
    ///
    /// The empty prefix is always contained.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// True if `word` itself is stored
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.find(word.text())
            .is_some_and(|node| self.nodes[node as usize].word.is_some())
    }

    /// Lazily enumerate the stored words starting with `prefix`, in
    /// lexicographic order
    ///
    /// The iterator is `Clone`; cloning it (or calling this again) restarts
    /// the enumeration.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> WordsWithPrefix<'_> {
        WordsWithPrefix {
            trie: self,
            stack: self.find(prefix).into_iter().collect(),
        }
    }

    /// Number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Word with the given id
    ///
    /// # Panics
    /// Panics if `id` is out of range
    #[must_use]
    pub fn word(&self, id: usize) -> Word {
        self.words[id]
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Child of `node` along the edge for alphabet index `letter`
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: usize) -> Option<NodeId> {
        match self.nodes[node as usize].children[letter] {
            NO_CHILD => None,
            child => Some(child),
        }
    }

    /// Word id stored at `node`, if it is terminal
    #[inline]
    #[must_use]
    pub fn terminal(&self, node: NodeId) -> Option<usize> {
        self.nodes[node as usize].word.map(|id| id as usize)
    }

    /// Number of letters on the path from the root to `node`
    #[inline]
    #[must_use]
    pub fn depth(&self, node: NodeId) -> usize {
        usize::from(self.nodes[node as usize].depth)
    }

    fn find(&self, prefix: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            if !ch.is_ascii_alphabetic() {
                return None;
            }
            let letter = usize::from(ch.to_ascii_lowercase() as u8 - b'a');
            node = self.child(node, letter)?;
        }
        Some(node)
    }
}

/// Iterator returned by [`Trie::words_with_prefix`]
#[derive(Debug, Clone)]
pub struct WordsWithPrefix<'a> {
    trie: &'a Trie,
    stack: Vec<NodeId>,
}

impl Iterator for WordsWithPrefix<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        while let Some(node) = self.stack.pop() {
            // Push z..a so that a is expanded first
            for letter in (0..ALPHABET_LEN).rev() {
                if let Some(child) = self.trie.child(node, letter) {
                    self.stack.push(child);
                }
            }
            if let Some(id) = self.trie.terminal(node) {
                return Some(self.trie.word(id));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    fn sample_trie() -> Trie {
        Trie::from_words(&words_from_slice(&[
            "slate", "crane", "crate", "apple", "ample", "crane",
        ]))
    }

    #[test]
    fn insert_assigns_ids_in_order_and_dedups() {
        let trie = sample_trie();
        assert_eq!(trie.len(), 5);
        assert_eq!(trie.word(0).text(), "slate");
        assert_eq!(trie.word(4).text(), "ample");

        let mut trie = trie;
        assert_eq!(trie.insert(Word::new("crate").unwrap()), 2);
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn contains_prefixes_and_words() {
        let trie = sample_trie();
        assert!(trie.contains(""));
        assert!(trie.contains("cr"));
        assert!(trie.contains("CRAT"));
        assert!(!trie.contains("crx"));
        assert!(!trie.contains("c3"));
        assert!(trie.contains_word(&Word::new("apple").unwrap()));
        assert!(!trie.contains_word(&Word::new("apply").unwrap()));
    }

    #[test]
    fn words_with_prefix_is_lexicographic() {
        let trie = sample_trie();
        let all: Vec<String> = trie.words_with_prefix("").map(|w| w.to_string()).collect();
        assert_eq!(all, ["ample", "apple", "crane", "crate", "slate"]);

        let none: Vec<Word> = trie.words_with_prefix("zz").collect();
        assert!(none.is_empty());
    }

    #[test]
    fn words_with_prefix_is_restartable() {
        let trie = sample_trie();
        let mut iter = trie.words_with_prefix("a");
        let restart = iter.clone();

        assert_eq!(iter.next().map(|w| w.to_string()).as_deref(), Some("ample"));
        assert_eq!(restart.count(), 2);
        assert_eq!(iter.count(), 1);
    }

    #[test]
    fn node_count_shares_prefixes() {
        let trie = Trie::from_words(&words_from_slice(&["crane", "crate"]));
        // root + c r a + n e + t e
        assert_eq!(trie.node_count(), 1 + 3 + 2 + 2);
        let node = trie.child(trie.root(), 2).unwrap();
        assert_eq!(trie.depth(node), 1);
        assert_eq!(trie.terminal(node), None);
    }
}
