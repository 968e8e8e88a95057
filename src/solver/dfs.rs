//! Depth-first search over the trie
//!
//! Walks the guess trie in alphabetical order and prunes every edge that the
//! accumulated constraints rule out. The first complete word reached is the
//! guess. Nodes popped from the stack are counted so callers can see how much
//! of the trie each turn touched.

use super::{CandidateSet, ConstraintSet, Engine, Guess, Strategy, Suggestion};
use crate::core::{ALPHABET_LEN, Attempt, WORD_LEN, WordleError};
use crate::index::{NodeId, Trie};

/// Lexicographically-first constraint-satisfying word
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsSolver;

impl DfsSolver {
    pub const NAME: &'static str = "dfs";
}

/// Order in which letters are expanded, one row per depth
pub type LetterOrder = [[u8; ALPHABET_LEN]; WORD_LEN];

/// a..z at every depth
pub const ALPHABETICAL: LetterOrder = {
    let mut row = [0u8; ALPHABET_LEN];
    let mut letter = 0;
    while letter < ALPHABET_LEN {
        row[letter] = letter as u8;
        letter += 1;
    }
    [row; WORD_LEN]
};

/// Lazy pruned walk yielding the ids of satisfying words in trie order
#[derive(Debug, Clone)]
pub struct ConstrainedWalk<'a> {
    trie: &'a Trie,
    constraints: ConstraintSet,
    order: LetterOrder,
    stack: Vec<(NodeId, [u8; ALPHABET_LEN])>,
    nodes_visited: usize,
}

impl<'a> ConstrainedWalk<'a> {
    /// Walk expanding children alphabetically
    #[must_use]
    pub fn new(trie: &'a Trie, constraints: ConstraintSet) -> Self {
        Self::with_letter_order(trie, constraints, ALPHABETICAL)
    }

    /// Walk expanding children of depth `d` in the order `order[d]`
    #[must_use]
    pub fn with_letter_order(trie: &'a Trie, constraints: ConstraintSet, order: LetterOrder) -> Self {
        Self {
            trie,
            constraints,
            order,
            stack: vec![(trie.root(), [0; ALPHABET_LEN])],
            nodes_visited: 0,
        }
    }

    /// Nodes popped so far, including the node of each yielded word
    #[must_use]
    pub const fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }
}

impl Iterator for ConstrainedWalk<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some((node, counts)) = self.stack.pop() {
            self.nodes_visited += 1;
            if let Some(id) = self.trie.terminal(node) {
                return Some(id);
            }

            let depth = self.trie.depth(node);
            // Reverse push so the first letter of the order is popped first
            for &letter in self.order[depth].iter().rev() {
                let letter = usize::from(letter);
                let Some(child) = self.trie.child(node, letter) else {
                    continue;
                };
                if !self.constraints.allows(depth, letter) {
                    continue;
                }
                let mut next = counts;
                next[letter] += 1;
                if self.constraints.can_complete(depth + 1, &next) {
                    self.stack.push((child, next));
                }
            }
        }
        None
    }
}

impl Strategy for DfsSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose(
        &self,
        engine: &Engine,
        _candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        let mut walk = ConstrainedWalk::new(engine.trie(), ConstraintSet::from_history(history));
        let index = walk.next().ok_or(WordleError::ExhaustedCandidates)?;
        Ok(Guess {
            index,
            word: engine.lexicon().guess(index),
            nodes_visited: Some(walk.nodes_visited()),
            score: None,
        })
    }

    /// Satisfying words in trie order; the score is the walk cost to reach each
    fn rank(
        &self,
        engine: &Engine,
        _candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        let mut walk = ConstrainedWalk::new(engine.trie(), ConstraintSet::from_history(history));
        let mut out = Vec::with_capacity(top_k);
        while out.len() < top_k {
            let Some(index) = walk.next() else { break };
            out.push(Suggestion {
                word: engine.lexicon().guess(index),
                score: walk.nodes_visited() as f64,
            });
        }
        if out.is_empty() {
            return Err(WordleError::ExhaustedCandidates);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};
    use crate::lexicon::{Lexicon, loader::words_from_slice};

    fn engine(words: &[&str]) -> Engine {
        Engine::new(Lexicon::new(words_from_slice(words), words_from_slice(words)).unwrap())
    }

    fn attempt(guess: &str, secret: &str) -> Attempt {
        Attempt::new(Word::new(guess).unwrap(), Pattern::compute(guess, secret).unwrap())
    }

    #[test]
    fn unconstrained_walk_yields_trie_order() {
        let engine = engine(&["crane", "apple", "about", "slate"]);
        let walk = ConstrainedWalk::new(engine.trie(), ConstraintSet::new());
        let words: Vec<_> = walk.map(|id| engine.lexicon().guess(id).text().to_string()).collect();
        assert_eq!(words, ["about", "apple", "crane", "slate"]);
    }

    #[test]
    fn letter_order_changes_expansion() {
        let engine = engine(&["crane", "apple", "about", "slate"]);
        let mut reversed = ALPHABETICAL;
        for row in &mut reversed {
            row.reverse();
        }
        let walk = ConstrainedWalk::with_letter_order(engine.trie(), ConstraintSet::new(), reversed);
        let words: Vec<_> = walk.map(|id| engine.lexicon().guess(id).text().to_string()).collect();
        assert_eq!(words, ["slate", "crane", "apple", "about"]);
    }

    #[test]
    fn first_guess_visits_one_path() {
        let engine = engine(&["about", "actor", "apple"]);
        let all = CandidateSet::all(engine.lexicon());
        let guess = DfsSolver.next_guess(&engine, &all, &[]).unwrap();
        assert_eq!(guess.word.text(), "about");
        // root plus five letters
        assert_eq!(guess.nodes_visited, Some(6));
    }

    #[test]
    fn walk_yields_exactly_the_consistent_words() {
        let words = ["about", "actor", "adult", "apple", "arise", "crane", "erase", "speed"];
        let engine = engine(&words);
        let history = [attempt("crane", "apple"), attempt("speed", "apple")];

        let found: Vec<_> = ConstrainedWalk::new(engine.trie(), ConstraintSet::from_history(&history))
            .map(|id| engine.lexicon().guess(id))
            .collect();
        let expected: Vec<_> = words_from_slice(&words)
            .into_iter()
            .filter(|w| history.iter().all(|a| Pattern::calculate(&a.guess, w) == a.pattern))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn pruned_search_counts_fewer_nodes() {
        let engine = engine(&["about", "actor", "adult", "apple", "arise", "crane"]);
        let history = [attempt("about", "crane")];
        let all = CandidateSet::all(engine.lexicon());
        let guess = DfsSolver.choose(&engine, &all, &history).unwrap();
        assert_eq!(guess.word.text(), "crane");
        // root, c, cr, cra, cran, crane; every a-subtree is cut at the root
        assert_eq!(guess.nodes_visited, Some(6));
    }

    #[test]
    fn no_satisfying_word_is_an_error() {
        let engine = engine(&["about", "crane"]);
        // claims the secret starts with z
        let history = [Attempt::new(
            Word::new("zzzzz").unwrap(),
            Pattern::from_str("G----").unwrap(),
        )];
        let all = CandidateSet::all(engine.lexicon());
        assert_eq!(
            DfsSolver.choose(&engine, &all, &history),
            Err(WordleError::ExhaustedCandidates)
        );
        assert!(DfsSolver.rank(&engine, &all, &history, 5).is_err());
    }

    #[test]
    fn suggestions_follow_trie_order() {
        let engine = engine(&["about", "actor", "adult", "apple", "arise", "crane"]);
        let all = CandidateSet::all(engine.lexicon());
        let ranked = DfsSolver.suggestions(&engine, &all, &[attempt("crane", "apple")], 10).unwrap();
        let words: Vec<_> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(words, ["apple"]);
    }
}
