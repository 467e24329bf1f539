use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("could not read config file {path}: {source}")]
    ConfigRead { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file {path}: {source}")]
    Config { path: PathBuf, source: toml::de::Error },
    #[error("could not open log file {path}: {source}")]
    LogFile { path: PathBuf, source: std::io::Error },
    #[error("invalid grid {width}x{height}: it needs at least two cells")]
    InvalidGrid { width: usize, height: usize },
    #[error("grid {width}x{height} does not fit in a terminal (at most {max_width}x{max_height})")]
    GridTooLarge { width: usize, height: usize, max_width: usize, max_height: usize },
    #[error("tick rate must be at least 1, got {0}")]
    InvalidTickRate(u32),
}
