use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

use crate::engine::{Rules, DEFAULT_MAX_WRONG};
use crate::words::WordList;

/// Guess the word one letter at a time before the figure is complete
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hangman", version, about)]
pub struct Config {
    /// Newline separated word list to draw from instead of the built-in words
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Wrong guesses allowed per round
    #[arg(short, long, default_value_t = DEFAULT_MAX_WRONG as u8,
          value_parser = clap::value_parser!(u8).range(1..=26))]
    pub max_wrong: u8,

    /// Wrong guesses charged for a hint
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=26))]
    pub hint_cost: u8,

    /// Seed for picking words and hints, random if not set
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(short, long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            max_wrong: self.max_wrong.into(),
            hint_cost: self.hint_cost.into(),
        }
    }

    /// The configured word list, the built-in words if no file was given
    pub fn word_list(&self) -> Result<WordList> {
        match &self.words {
            Some(path) => WordList::load(path),
            None => Ok(WordList::builtin()),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
