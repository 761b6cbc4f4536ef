use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::dictionary::MIN_WORD_LENGTH;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub board: BoardConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub path: PathBuf,
    pub min_word_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
    /// Read the board from this file instead of stdin
    pub file: Option<PathBuf>,
    /// Generate a random board instead of reading one
    pub random: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format {:?} (expected text or json)", other),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let dictionary = DictionaryConfig {
            path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string())
                .into(),
            min_word_length: env::var("MIN_WORD_LENGTH")
                .unwrap_or_else(|_| MIN_WORD_LENGTH.to_string())
                .parse()
                .context("MIN_WORD_LENGTH must be a number")?,
        };

        let board = BoardConfig {
            size: env::var("BOARD_SIZE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("BOARD_SIZE must be a number")?,
            file: None,
            random: false,
        };

        let output = OutputConfig {
            format: env::var("OUTPUT_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .parse()
                .context("OUTPUT_FORMAT must be text or json")?,
        };

        let config = Config {
            dictionary,
            board,
            output,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of the environment
    pub fn with_args(mut self, args: Args) -> Result<Self> {
        if let Some(path) = args.dictionary {
            self.dictionary.path = path;
        }
        if let Some(min_length) = args.min_length {
            self.dictionary.min_word_length = min_length;
        }
        if let Some(size) = args.size {
            self.board.size = size;
        }
        if args.json {
            self.output.format = OutputFormat::Json;
        }
        self.board.file = args.board;
        self.board.random = args.random;

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.board.size == 0 {
            bail!("board size must be at least 1");
        }
        if self.dictionary.min_word_length == 0 {
            bail!("minimum word length must be at least 1");
        }
        Ok(())
    }
}

/// Find every dictionary word hidden in a letter grid
#[derive(Debug, Default, clap::Parser)]
#[command(name = "word-grid-solver", version)]
pub struct Args {
    /// Board file, one row per line (reads stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "random")]
    pub board: Option<PathBuf>,

    /// Word list, one word per line [env: DICTIONARY_PATH]
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Rows and columns of the board [env: BOARD_SIZE]
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Shortest word to look for [env: MIN_WORD_LENGTH]
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Solve a randomly generated board
    #[arg(long)]
    pub random: bool,
}
