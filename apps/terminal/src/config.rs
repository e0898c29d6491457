//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use vocab_core::SessionSettings;

/// Flashcard study session in the terminal.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Seed for shuffling, for a reproducible card order.
    #[arg(long, env = "FLASHCARDS_SEED")]
    pub seed: Option<u64>,

    /// Tab-separated vocabulary file to load at startup.
    #[arg(long, value_name = "FILE", env = "FLASHCARDS_VOCAB")]
    pub vocab: Option<PathBuf>,

    /// Print view models as JSON lines instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            shuffle_seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        let config = Config::try_parse_from(["vocab-cards", "--seed", "9", "--json"]).unwrap();
        assert_eq!(config.seed, Some(9));
        assert!(config.json);
        assert_eq!(config.session_settings().shuffle_seed, Some(9));
    }

    #[test]
    fn reject_bad_seed() {
        assert!(Config::try_parse_from(["vocab-cards", "--seed", "abc"]).is_err());
    }
}
