//! Word providers: where a round's secret word comes from.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::error::FetchError;

pub const DEFAULT_WORD_URL: &str = "https://it3049c-hangman.fly.dev";

/// Difficulty tag passed through to the word provider untouched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Difficulty(String);

impl Difficulty {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn easy() -> Self {
        Self::new("easy")
    }

    pub fn medium() -> Self {
        Self::new("medium")
    }

    pub fn hard() -> Self {
        Self::new("hard")
    }

    /// The levels offered in the menu, easiest first
    pub fn standard() -> Vec<Self> {
        vec![Self::easy(), Self::medium(), Self::hard()]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::easy()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().to_ascii_lowercase()))
    }
}

/// Supplies one word per call for a difficulty tag
#[async_trait]
pub trait WordProvider: Send + Sync {
    async fn fetch_word(&self, difficulty: &Difficulty) -> Result<String, FetchError>;
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

/// Fetches words from the hangman word service over HTTP.
///
/// The service answers `GET {base_url}?difficulty=<tag>` with `{ "word": "book" }`.
pub struct HttpWordProvider {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpWordProvider {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(base_url, builder.build()?))
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WordProvider for HttpWordProvider {
    async fn fetch_word(&self, difficulty: &Difficulty) -> Result<String, FetchError> {
        tracing::debug!(url = %self.base_url, %difficulty, "requesting word");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("difficulty", difficulty.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "word service rejected request");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: WordResponse = response.json().await?;
        Ok(body.word)
    }
}

const EASY_WORDS: &[&str] = &["RUST", "CAT", "BOOK", "TREE", "FISH", "MOON", "LAMP", "SHIP"];
const MEDIUM_WORDS: &[&str] = &["ASYNC", "TOKIO", "SOCKET", "NETWORK", "GALLOWS", "PLANET", "WINTER"];
const HARD_WORDS: &[&str] = &["WEBSOCKET", "TERMINAL", "HANGMAN", "BORROWING", "LIFETIME", "QUIZZICAL", "JUKEBOX"];

/// Offline provider picking a random word from a built-in list
#[derive(Debug, Clone, Default)]
pub struct WordListProvider;

impl WordListProvider {
    pub fn words_for(difficulty: &Difficulty) -> Option<&'static [&'static str]> {
        match difficulty.as_str() {
            "easy" => Some(EASY_WORDS),
            "medium" => Some(MEDIUM_WORDS),
            "hard" => Some(HARD_WORDS),
            _ => None,
        }
    }
}

#[async_trait]
impl WordProvider for WordListProvider {
    async fn fetch_word(&self, difficulty: &Difficulty) -> Result<String, FetchError> {
        let word = Self::words_for(difficulty)
            .and_then(|words| words.choose(&mut rand::rng()))
            .ok_or_else(|| FetchError::UnknownDifficulty(difficulty.to_string()))?;
        Ok((*word).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        let parsed: Difficulty = " Hard ".parse().unwrap();
        assert_eq!(parsed, Difficulty::hard());
        assert_eq!(parsed.to_string(), "hard");
    }

    #[tokio::test]
    async fn word_list_serves_known_levels() {
        let provider = WordListProvider;
        for difficulty in Difficulty::standard() {
            let word = provider.fetch_word(&difficulty).await.unwrap();
            assert!(WordListProvider::words_for(&difficulty).unwrap().contains(&word.as_str()));
        }
    }

    #[tokio::test]
    async fn word_list_rejects_unknown_levels() {
        let err = WordListProvider.fetch_word(&Difficulty::new("nightmare")).await.unwrap_err();
        assert!(matches!(err, FetchError::UnknownDifficulty(tag) if tag == "nightmare"));
    }

    #[test]
    fn built_in_words_are_uppercase_letters() {
        for difficulty in Difficulty::standard() {
            for word in WordListProvider::words_for(&difficulty).unwrap() {
                assert!(!word.is_empty());
                assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{word}");
            }
        }
    }
}
