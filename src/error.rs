//! Error types surfaced by the game engine and the word providers.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid guess {0:?}: enter a single letter A-Z")]
    InvalidGuess(String),

    #[error("letter '{0}' already guessed")]
    DuplicateGuess(char),

    #[error("the round is over, start a new one to keep playing")]
    GameOver,

    #[error("no word has been loaded for this round yet")]
    RoundNotReady,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failures of a word provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("word request failed")]
    Request(#[from] reqwest::Error),

    #[error("word service answered with status {0}")]
    Status(u16),

    #[error("word service returned a malformed word: {0:?}")]
    MalformedWord(String),

    #[error("no words available for difficulty '{0}'")]
    UnknownDifficulty(String),
}
