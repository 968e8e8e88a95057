//! The fixed vocabulary of the game
//!
//! A [`Lexicon`] holds the ordered guess list and secret list, the index maps
//! used to translate between them, and a checksum that keys the persisted
//! pattern matrix.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::{Word, WordleError};
use loader::words_from_slice;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::Hasher;

/// Ordered guess and secret lists
///
/// Invariants:
/// - both lists are non-empty and free of duplicates
/// - every secret is also a guess (missing secrets are appended to the guess list)
#[derive(Debug, Clone)]
pub struct Lexicon {
    guesses: Vec<Word>,
    secrets: Vec<Word>,
    guess_lookup: FxHashMap<Word, usize>,
    secret_lookup: FxHashMap<Word, usize>,
    secret_of_guess: Vec<Option<usize>>,
    checksum: u64,
}

impl Lexicon {
    /// Build a lexicon from guess and secret lists
    ///
    /// Order is preserved; later duplicates are dropped.
    ///
    /// # Errors
    /// Returns `WordleError::EmptyLexicon` if the secret list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    /// use wordle_trie::lexicon::Lexicon;
    ///
    /// let words = |list: &[&str]| list.iter().map(|w| Word::new(w).unwrap()).collect::<Vec<_>>();
    /// let lexicon = Lexicon::new(words(&["crane", "slate"]), words(&["apple"])).unwrap();
    ///
    /// // Secrets are always guessable
    /// assert_eq!(lexicon.guesses().len(), 3);
    /// assert_eq!(lexicon.guess_index(&Word::new("apple").unwrap()), Some(2));
    /// ```
    pub fn new(guesses: Vec<Word>, secrets: Vec<Word>) -> Result<Self, WordleError> {
        let (secrets, secret_lookup) = dedup(secrets);
        let (mut guesses, mut guess_lookup) = dedup(guesses);

        if secrets.is_empty() {
            return Err(WordleError::EmptyLexicon);
        }

        for secret in &secrets {
            if !guess_lookup.contains_key(secret) {
                guess_lookup.insert(*secret, guesses.len());
                guesses.push(*secret);
            }
        }

        let secret_of_guess = guesses
            .iter()
            .map(|guess| secret_lookup.get(guess).copied())
            .collect();

        let checksum = checksum(&guesses, &secrets);

        Ok(Self {
            guesses,
            secrets,
            guess_lookup,
            secret_lookup,
            secret_of_guess,
            checksum,
        })
    }

    /// Lexicon backed by the embedded lists: every allowed word as a guess,
    /// the answer list as secrets
    ///
    /// # Errors
    /// Returns `WordleError::EmptyLexicon` if the embedded lists are empty.
    pub fn embedded() -> Result<Self, WordleError> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Lexicon that only guesses from the answer list
    ///
    /// # Errors
    /// Returns `WordleError::EmptyLexicon` if the embedded answer list is empty.
    pub fn answers_only() -> Result<Self, WordleError> {
        let answers = words_from_slice(ANSWERS);
        Self::new(answers.clone(), answers)
    }

    /// All guessable words, in index order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// All possible secrets, in index order
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// Guess at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[inline]
    #[must_use]
    pub fn guess(&self, index: usize) -> Word {
        self.guesses[index]
    }

    /// Secret at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[inline]
    #[must_use]
    pub fn secret(&self, index: usize) -> Word {
        self.secrets[index]
    }

    #[must_use]
    pub fn guess_index(&self, word: &Word) -> Option<usize> {
        self.guess_lookup.get(word).copied()
    }

    #[must_use]
    pub fn secret_index(&self, word: &Word) -> Option<usize> {
        self.secret_lookup.get(word).copied()
    }

    /// Secret index of the guess at `guess`, if that guess can also be the answer
    #[inline]
    #[must_use]
    pub fn secret_of_guess(&self, guess: usize) -> Option<usize> {
        self.secret_of_guess[guess]
    }

    /// Guess index of the secret at `secret`
    ///
    /// Every secret is a guess, so this always succeeds for in-range indices.
    #[must_use]
    pub fn guess_of_secret(&self, secret: usize) -> usize {
        self.guess_lookup[&self.secrets[secret]]
    }

    /// Content hash of both ordered lists
    ///
    /// Two lexicons with the same words in the same order share a checksum.
    /// The value comes from `FxHasher` and is only stable for one
    /// `rustc-hash` major version; after an upgrade saved matrices mismatch
    /// and get rebuilt.
    #[must_use]
    pub const fn checksum(&self) -> u64 {
        self.checksum
    }
}

fn dedup(words: Vec<Word>) -> (Vec<Word>, FxHashMap<Word, usize>) {
    let mut lookup = FxHashMap::default();
    let mut unique = Vec::with_capacity(words.len());
    for word in words {
        if !lookup.contains_key(&word) {
            lookup.insert(word, unique.len());
            unique.push(word);
        }
    }
    (unique, lookup)
}

fn checksum(guesses: &[Word], secrets: &[Word]) -> u64 {
    let mut hasher = FxHasher::default();
    for list in [guesses, secrets] {
        hasher.write_u64(list.len() as u64);
        for word in list {
            hasher.write(word.chars());
        }
    }
    hasher.finish()
}
