//! Greedy positional-frequency heuristics
//!
//! [`HillClimbingSolver`] recomputes frequencies over the remaining
//! candidates each turn. Each position takes the letter most common there; if
//! that assembled word is a real guess it is played, otherwise the candidate
//! with the highest summed positional frequency is.
//!
//! [`StaticHillClimbingSolver`] uses fixed frequencies counted once over the
//! whole guess list and climbs the trie of words consistent with the history,
//! taking the most frequent letter that still leads to such a word.

use super::dfs::{ConstrainedWalk, LetterOrder};
use super::{CandidateSet, ConstraintSet, Engine, Guess, Strategy, Suggestion};
use crate::core::{ALPHABET_LEN, Attempt, WORD_LEN, Word, WordleError};
use crate::lexicon::Lexicon;

/// Per-position letter counts over a candidate set
pub type PositionFrequencies = [[u32; ALPHABET_LEN]; WORD_LEN];

#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingSolver;

impl HillClimbingSolver {
    pub const NAME: &'static str = "hill-climbing";
}

/// Trie climb guided by guess-list letter frequencies
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHillClimbingSolver;

impl StaticHillClimbingSolver {
    pub const NAME: &'static str = "static-hill-climbing";
}

/// Count how often each letter appears at each position among `candidates`
#[must_use]
pub fn position_frequencies(lexicon: &Lexicon, candidates: &CandidateSet) -> PositionFrequencies {
    let mut freq = [[0u32; ALPHABET_LEN]; WORD_LEN];
    for secret in candidates.iter() {
        let word = lexicon.secret(secret);
        for (pos, counts) in freq.iter_mut().enumerate() {
            counts[word.letter_at(pos)] += 1;
        }
    }
    freq
}

/// Count how often each letter appears at each position in the guess list
#[must_use]
pub fn guess_frequencies(lexicon: &Lexicon) -> PositionFrequencies {
    let mut freq = [[0u32; ALPHABET_LEN]; WORD_LEN];
    for word in lexicon.guesses() {
        for (pos, counts) in freq.iter_mut().enumerate() {
            counts[word.letter_at(pos)] += 1;
        }
    }
    freq
}

/// Letters per position, most frequent first; ties go to the earlier letter
#[must_use]
pub fn letter_order(freq: &PositionFrequencies) -> LetterOrder {
    let mut order = super::dfs::ALPHABETICAL;
    for (row, counts) in order.iter_mut().zip(freq) {
        // stable sort keeps alphabetical order among equal counts
        row.sort_by_key(|&letter| std::cmp::Reverse(counts[usize::from(letter)]));
    }
    order
}

/// Sum of positional frequencies for `word`
#[must_use]
pub fn frequency_score(word: &Word, freq: &PositionFrequencies) -> u32 {
    freq.iter()
        .enumerate()
        .map(|(pos, counts)| counts[word.letter_at(pos)])
        .sum()
}

/// Most frequent letter per position; ties go to the earlier letter
fn greedy_word(freq: &PositionFrequencies) -> Option<Word> {
    let mut chars = [0u8; WORD_LEN];
    for (pos, counts) in freq.iter().enumerate() {
        let best = counts
            .iter()
            .enumerate()
            .max_by(|(la, a), (lb, b)| a.cmp(b).then(lb.cmp(la)))
            .map_or(0, |(letter, _)| letter);
        chars[pos] = b'a' + best as u8;
    }
    Word::from_ascii(chars).ok()
}

/// Candidates ordered by frequency score descending, then alphabetically
fn ranked_candidates(lexicon: &Lexicon, candidates: &CandidateSet, freq: &PositionFrequencies) -> Vec<(Word, u32)> {
    let mut scored: Vec<(Word, u32)> = candidates
        .iter()
        .map(|s| {
            let word = lexicon.secret(s);
            (word, frequency_score(&word, freq))
        })
        .collect();
    scored.sort_unstable_by(|(wa, a), (wb, b)| b.cmp(a).then(wa.cmp(wb)));
    scored
}

impl Strategy for HillClimbingSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        _history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        let lexicon = engine.lexicon();
        let freq = position_frequencies(lexicon, candidates);

        if let Some(word) = greedy_word(&freq)
            && let Some(index) = lexicon.guess_index(&word)
        {
            return Ok(Guess {
                index,
                word,
                nodes_visited: None,
                score: Some(f64::from(frequency_score(&word, &freq))),
            });
        }

        let (word, score) = ranked_candidates(lexicon, candidates, &freq)
            .into_iter()
            .next()
            .ok_or(WordleError::ExhaustedCandidates)?;
        let index = lexicon
            .guess_index(&word)
            .ok_or(WordleError::ExhaustedCandidates)?;
        Ok(Guess {
            index,
            word,
            nodes_visited: None,
            score: Some(f64::from(score)),
        })
    }

    fn rank(
        &self,
        engine: &Engine,
        candidates: &CandidateSet,
        _history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        let lexicon = engine.lexicon();
        let freq = position_frequencies(lexicon, candidates);
        let greedy = greedy_word(&freq).filter(|w| lexicon.guess_index(w).is_some());

        let mut out: Vec<Suggestion> = greedy
            .iter()
            .map(|&word| Suggestion {
                word,
                score: f64::from(frequency_score(&word, &freq)),
            })
            .collect();
        out.extend(
            ranked_candidates(lexicon, candidates, &freq)
                .into_iter()
                .filter(|(word, _)| Some(*word) != greedy)
                .map(|(word, score)| Suggestion {
                    word,
                    score: f64::from(score),
                }),
        );
        out.truncate(top_k);
        Ok(out)
    }
}

impl StaticHillClimbingSolver {
    fn walk<'e>(engine: &'e Engine, history: &[Attempt]) -> ConstrainedWalk<'e> {
        ConstrainedWalk::with_letter_order(
            engine.trie(),
            ConstraintSet::from_history(history),
            letter_order(engine.guess_frequencies()),
        )
    }
}

impl Strategy for StaticHillClimbingSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose(
        &self,
        engine: &Engine,
        _candidates: &CandidateSet,
        history: &[Attempt],
    ) -> Result<Guess, WordleError> {
        let mut walk = Self::walk(engine, history);
        let index = walk.next().ok_or(WordleError::ExhaustedCandidates)?;
        let word = engine.lexicon().guess(index);
        Ok(Guess {
            index,
            word,
            nodes_visited: Some(walk.nodes_visited()),
            score: Some(f64::from(frequency_score(&word, engine.guess_frequencies()))),
        })
    }

    /// Consistent guesses in climb order, scored by guess-list frequency
    fn rank(
        &self,
        engine: &Engine,
        _candidates: &CandidateSet,
        history: &[Attempt],
        top_k: usize,
    ) -> Result<Vec<Suggestion>, WordleError> {
        let out: Vec<Suggestion> = Self::walk(engine, history)
            .take(top_k)
            .map(|index| {
                let word = engine.lexicon().guess(index);
                Suggestion {
                    word,
                    score: f64::from(frequency_score(&word, engine.guess_frequencies())),
                }
            })
            .collect();
        if out.is_empty() {
            return Err(WordleError::ExhaustedCandidates);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::lexicon::loader::words_from_slice;

    fn letter(c: u8) -> u8 {
        c - b'a'
    }

    fn engine(guesses: &[&str], secrets: &[&str]) -> Engine {
        Engine::new(Lexicon::new(words_from_slice(guesses), words_from_slice(secrets)).unwrap())
    }

    #[test]
    fn frequencies_count_each_position() {
        let engine = engine(&[], &["crane", "crate", "slate"]);
        let freq = position_frequencies(engine.lexicon(), &CandidateSet::all(engine.lexicon()));
        assert_eq!(freq[0][2], 2, "c leads twice");
        assert_eq!(freq[4][4], 3, "e ends all three");
        assert_eq!(frequency_score(&Word::new("crate").unwrap(), &freq), 2 + 2 + 3 + 2 + 3);
    }

    #[test]
    fn greedy_word_played_when_real() {
        // greedy per position: c r a t e
        let engine = engine(&["crate"], &["crane", "grate", "crate", "trace"]);
        let all = CandidateSet::all(engine.lexicon());
        let guess = HillClimbingSolver.next_guess(&engine, &all, &[]).unwrap();
        assert_eq!(guess.word.text(), "crate");
    }

    #[test]
    fn falls_back_to_best_candidate() {
        // greedy assembles "srate", which is not a word
        let engine = engine(&[], &["slate", "crate", "stare", "srimp"]);
        let all = CandidateSet::all(engine.lexicon());
        let freq = position_frequencies(engine.lexicon(), &all);
        assert_eq!(greedy_word(&freq).unwrap().text(), "srate");

        let guess = HillClimbingSolver.next_guess(&engine, &all, &[]).unwrap();
        let best = ranked_candidates(engine.lexicon(), &all, &freq)[0].0;
        assert_eq!(guess.word, best);
        assert!(all.contains(engine.lexicon().secret_index(&guess.word).unwrap()));
    }

    #[test]
    fn repeated_play_never_repeats_a_guess() {
        let words = ["about", "actor", "adult", "apple", "arise", "crane", "slate", "grate"];
        let engine = engine(&words, &words);
        let patterns = engine.patterns();
        for secret in 0..words.len() {
            let mut candidates = CandidateSet::all(engine.lexicon());
            let mut history = Vec::new();
            loop {
                let guess = HillClimbingSolver.next_guess(&engine, &candidates, &history).unwrap();
                assert!(history.iter().all(|a: &Attempt| a.guess != guess.word));
                let pattern = patterns.pattern(guess.index, secret);
                history.push(Attempt::new(guess.word, pattern));
                if pattern == Pattern::PERFECT {
                    break;
                }
                candidates = candidates.filter(&patterns, guess.index, pattern);
            }
            assert!(history.len() <= words.len());
        }
    }

    /// Guess list weighted towards s/t openers; only three secrets
    fn static_engine() -> Engine {
        engine(
            &["slate", "crane", "crate", "sting", "stomp", "stack"],
            &["crane", "crate", "slate"],
        )
    }

    #[test]
    fn letter_order_sorts_by_frequency() {
        let engine = static_engine();
        let order = letter_order(engine.guess_frequencies());
        // s leads four guesses, c two
        assert_eq!(order[0][..2], [letter(b's'), letter(b'c')]);
        // a sits in the middle of four guesses
        assert_eq!(order[2][0], letter(b'a'));
        // unseen letters keep alphabetical order at the tail
        assert_eq!(order[0][2..4], [letter(b'a'), letter(b'b')]);
    }

    #[test]
    fn static_climb_uses_guess_list_frequencies() {
        let engine = static_engine();
        let all = CandidateSet::all(engine.lexicon());

        let climbed = StaticHillClimbingSolver.next_guess(&engine, &all, &[]).unwrap();
        assert_eq!(climbed.word.text(), "stack");
        // root, s, st, sta, stac, stack
        assert_eq!(climbed.nodes_visited, Some(6));

        // the candidate-driven variant only sees the secrets
        let dynamic = HillClimbingSolver.next_guess(&engine, &all, &[]).unwrap();
        assert_eq!(dynamic.word.text(), "crate");
    }

    #[test]
    fn static_climb_backtracks_past_ruled_out_letters() {
        let engine = static_engine();
        let all = CandidateSet::all(engine.lexicon());
        let stack = Word::new("stack").unwrap();
        let history = [Attempt::new(stack, Pattern::compute("stack", "crane").unwrap())];

        let guess = StaticHillClimbingSolver.choose(&engine, &all, &history).unwrap();
        assert_eq!(guess.word.text(), "crane");
        let ranked = StaticHillClimbingSolver.suggestions(&engine, &all, &history, 5).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, guess.word);
    }

    #[test]
    fn static_climb_never_repeats_a_guess() {
        let engine = static_engine();
        let patterns = engine.patterns();
        for secret in 0..engine.lexicon().secrets().len() {
            let mut candidates = CandidateSet::all(engine.lexicon());
            let mut history: Vec<Attempt> = Vec::new();
            loop {
                let guess = StaticHillClimbingSolver.next_guess(&engine, &candidates, &history).unwrap();
                assert!(history.iter().all(|a| a.guess != guess.word));
                let pattern = patterns.pattern(guess.index, secret);
                history.push(Attempt::new(guess.word, pattern));
                if pattern == Pattern::PERFECT {
                    break;
                }
                candidates = candidates.filter(&patterns, guess.index, pattern);
            }
            assert!(history.len() <= engine.lexicon().guesses().len());
        }
    }

    #[test]
    fn suggestions_lead_with_greedy_word() {
        let engine = engine(&["crate"], &["crane", "grate", "crate", "trace"]);
        let all = CandidateSet::all(engine.lexicon());
        let ranked = HillClimbingSolver.suggestions(&engine, &all, &[], 3).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].word.text(), "crate");
        assert!(ranked.windows(2).skip(1).all(|w| w[0].score >= w[1].score));
    }
}
