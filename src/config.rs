//! Game settings.
//!
//! * Read from `snake.toml` in the cwd unless `--config` points elsewhere.
//! * Every field has a default, so the file is optional.
//! * Command line flags win over the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::GameError;
use crate::grid::Grid;
use crate::term::{MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH};

pub const DEFAULT_CONFIG_PATH: &str = "snake.toml";

#[derive(Debug, Parser)]
#[command(author, version, about = "Grid snake in the terminal", long_about = None)]
pub struct Args {
    /// Config file to read instead of ./snake.toml.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Number of grid columns.
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,
    /// Number of grid rows.
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,
    /// Snake moves per second.
    #[arg(long, value_name = "TICKS")]
    pub tick_rate: Option<u32>,
    /// Seed for head and food placement.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write log output to this file (the terminal is busy drawing the game).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid size in cells.
    pub width: usize,
    pub height: usize,
    /// Snake moves per second.
    pub tick_rate: u32,
    /// Fixed seed, random if absent.
    pub seed: Option<u64>,
    /// Sleep between frames.
    pub frame_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            tick_rate: 16,
            seed: None,
            frame_ms: 5,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads a TOML file. A missing file means defaults, a broken one is an error.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(GameError::ConfigRead { path: path.to_owned(), source }),
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self, GameError> {
        toml::from_str(text).map_err(|source| GameError::Config { path: path.to_owned(), source })
    }

    pub fn from_args(args: &Args) -> Result<Self, GameError> {
        let path = args.config.as_deref().unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let mut config = Self::load(path)?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(tick_rate) = args.tick_rate {
            self.tick_rate = tick_rate;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.log_file.is_some() {
            self.log_file = args.log_file.clone();
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_rate == 0 {
            return Err(GameError::InvalidTickRate(self.tick_rate));
        }
        if self.width > MAX_BOARD_WIDTH || self.height > MAX_BOARD_HEIGHT {
            return Err(GameError::GridTooLarge {
                width: self.width,
                height: self.height,
                max_width: MAX_BOARD_WIDTH,
                max_height: MAX_BOARD_HEIGHT,
            });
        }
        self.grid().map(|_| ())
    }

    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, GameError> {
        Config::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse("width = 8\nseed = 42\n").unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 16);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_rate, 16);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(parse("width = \"wide\""), Err(GameError::Config { .. })));
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = Config::load(Path::new("definitely/not/here/snake.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_file() {
        let args = Args::parse_from(["snake", "--width", "4", "--tick-rate", "8", "--seed", "3"]);
        let mut config = parse("width = 10\nheight = 5\n").unwrap();
        config.apply_args(&args);
        assert_eq!((config.width, config.height, config.tick_rate), (4, 5, 8));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.tick_rate = 0;
        assert!(matches!(config.validate(), Err(GameError::InvalidTickRate(0))));

        config.tick_rate = 16;
        config.width = 1;
        config.height = 1;
        assert!(matches!(config.validate(), Err(GameError::InvalidGrid { .. })));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let wide = Config { width: 40_000, height: 2, ..Config::default() };
        assert!(matches!(wide.validate(), Err(GameError::GridTooLarge { .. })));

        let tall = Config { width: 2, height: usize::MAX, ..Config::default() };
        assert!(matches!(tall.validate(), Err(GameError::GridTooLarge { .. })));

        let edge = Config { width: MAX_BOARD_WIDTH, height: 2, ..Config::default() };
        assert!(edge.validate().is_ok());
    }
}
