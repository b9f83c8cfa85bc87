pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod hangman;

// Re-export for convenience
pub use crate::core::surface::{DisplayList, Surface};
pub use crate::core::words::{Difficulty, WordProvider};
pub use crate::error::{FetchError, GameError};
pub use crate::hangman::HangmanEngine;
