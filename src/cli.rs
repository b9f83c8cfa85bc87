use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{timeout_from_secs, Config};
use crate::core::runner::{App, Runner};
use crate::core::words::{Difficulty, HttpWordProvider, WordListProvider, WordProvider};
use crate::hangman::normalize_word;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Hangman in the terminal, with words from a remote word service")]
#[command(version)]
pub struct Cli {
    /// Use the built-in word list instead of the word service
    #[arg(long, global = true)]
    pub offline: bool,

    /// Word service base URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Request timeout in seconds, 0 for none
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Difficulty highlighted in the menu
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Fetch a single word and print it
    Word {
        /// Difficulty tag sent to the word source
        #[arg(default_value = "easy")]
        level: Difficulty,
    },
    /// List the difficulty levels offered in the menu
    Difficulties,
}

impl Cli {
    /// Flags win over the environment
    pub fn apply(&self, config: &mut Config) {
        if self.offline {
            config.words.offline = true;
        }
        if let Some(url) = &self.url {
            config.words.url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.words.timeout = timeout_from_secs(secs);
        }
        if let Some(difficulty) = &self.difficulty {
            config.difficulty = difficulty.clone();
        }
    }
}

pub fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn WordProvider>> {
    if config.words.offline {
        tracing::info!("using built-in word list");
        return Ok(Arc::new(WordListProvider));
    }

    tracing::info!(url = %config.words.url, timeout = ?config.words.timeout, "using word service");
    let provider = HttpWordProvider::new(config.words.url.clone(), config.words.timeout)
        .context("failed to build HTTP client")?;
    Ok(Arc::new(provider))
}

/// One word, normalized the way a round would store it
pub async fn fetch_word(provider: &dyn WordProvider, level: &Difficulty) -> anyhow::Result<String> {
    let word = provider
        .fetch_word(level)
        .await
        .with_context(|| format!("failed to fetch a '{}' word", level))?;
    normalize_word(&word).with_context(|| format!("word service sent an unusable '{}' word", level))
}

pub async fn run_cli(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let runner = Runner::new(build_provider(&config)?);
            let app = App::new(&config.difficulty);

            let terminal = ratatui::init();
            let result = runner.run(app, terminal).await;
            ratatui::restore();
            result?;
        }

        Commands::Word { level } => {
            let provider = build_provider(&config)?;
            println!("{}", fetch_word(provider.as_ref(), &level).await?);
        }

        Commands::Difficulties => {
            for difficulty in Difficulty::standard() {
                let marker = if difficulty == config.difficulty { "*" } else { " " };
                println!("{} {}", marker, difficulty);
            }
        }
    }

    Ok(())
}
