mod config;
mod error;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod state;
mod term;
mod ticker;

use std::{fs::File, process::exit};

use clap::Parser;
use log::LevelFilter;

use config::{Args, Config};
use error::GameError;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() {
    if let Err(e) = run() {
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    init_logger(&config)?;
    log::info!("starting with {:?}", config);

    let mut game = game::SnakeGame::new(config)?;
    game.initialize()?;

    let result = match game.show_intro() {
        Ok(true) => game.play(),
        Ok(false) => Ok(()),
        Err(e) => Err(e),
    };

    // Restore before reporting anything so the message lands on the normal screen
    game.restore()?;
    result
}

/// The game owns the terminal, so logs only go somewhere useful when a log
/// file is configured. `RUST_LOG` still picks the level.
fn init_logger(config: &Config) -> Result<(), GameError> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = &config.log_file {
        let file = File::create(path).map_err(|source| GameError::LogFile { path: path.clone(), source })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        if std::env::var_os("RUST_LOG").is_none() {
            builder.filter_level(LevelFilter::Info);
        }
    }

    builder.init();
    Ok(())
}
