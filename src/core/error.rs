//! Errors raised by the guessing engine

/// Errors raised by word parsing, strategies and game sessions
///
/// Every rejected operation leaves the session it was called on untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordleError {
    /// Guess or secret is not exactly five letters long
    #[display("word must be exactly 5 letters, got {len}")]
    InvalidLength { len: usize },

    /// Word contains something other than ASCII letters
    #[display("word must contain only the letters a-z")]
    InvalidCharacters,

    /// Well-formed word that is not in the guess list
    #[display("'{word}' is not in the word list")]
    InvalidWord { word: String },

    /// No secret is consistent with the feedback history
    #[display("no candidates remain consistent with the feedback history")]
    ExhaustedCandidates,

    /// Strategy identifier not present in the registry
    #[display("unknown solver strategy '{name}'")]
    UnknownStrategy { name: String },

    /// Turn requested on a session that already ended
    #[display("the game is already over")]
    GameOver,

    /// Lexicon built without any secret
    #[display("lexicon must contain at least one secret")]
    EmptyLexicon,
}
