//! Runtime configuration, read from the environment and refined by CLI flags.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::words::{Difficulty, DEFAULT_WORD_URL};

#[derive(Clone, Debug)]
pub struct Config {
    pub words: WordSourceConfig,
    /// Difficulty highlighted when the menu opens
    pub difficulty: Difficulty,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
}

/// Where words come from.
#[derive(Clone, Debug)]
pub struct WordSourceConfig {
    pub url: String,
    pub timeout: Option<Duration>,
    /// Use the built-in word list instead of the HTTP service
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: WordSourceConfig::default(),
            difficulty: Difficulty::default(),
            log_dir: env::temp_dir().join("hangterm"),
        }
    }
}

impl Default for WordSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WORD_URL.to_string(),
            timeout: Some(Duration::from_secs(10)),
            offline: false,
        }
    }
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HANGTERM_WORD_URL` - word service base URL
    /// - `HANGTERM_TIMEOUT_SECS` - request timeout, `0` disables it (default: 10)
    /// - `HANGTERM_OFFLINE` - `1`/`true` to use the built-in word list
    /// - `HANGTERM_DIFFICULTY` - difficulty preselected in the menu (default: easy)
    /// - `HANGTERM_LOG_DIR` - log directory (default: `<tmp>/hangterm`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("HANGTERM_WORD_URL").filter(|u| !u.trim().is_empty()) {
            config.words.url = url.trim().to_string();
        }
        if let Some(secs) = lookup("HANGTERM_TIMEOUT_SECS").and_then(|s| s.trim().parse::<u64>().ok()) {
            config.words.timeout = timeout_from_secs(secs);
        }
        if let Some(flag) = lookup("HANGTERM_OFFLINE") {
            config.words.offline = parse_flag(&flag);
        }
        if let Some(difficulty) = lookup("HANGTERM_DIFFICULTY").and_then(|d| d.parse().ok()) {
            config.difficulty = difficulty;
        }
        if let Some(dir) = lookup("HANGTERM_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
