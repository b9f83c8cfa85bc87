//! Hangman: round state, gallows drawing, and the terminal view of both
pub mod gallows;
pub mod game;
pub mod renderer;

pub use game::{normalize_word, Delivery, GuessOutcome, HangmanEngine, RoundId, RoundTicket, MAX_WRONG_GUESSES};
pub use renderer::HangmanRenderer;
