use std::{thread::sleep, time::{Duration, Instant}};

use crate::config::Config;
use crate::error::GameError;
use crate::input::{Key, Keyboard};
use crate::render::Palette;
use crate::state::GameState;
use crate::term::TermManager;
use crate::ticker::Ticker;

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SnakeGame {
    config: Config,
    term: TermManager,
    state: GameState,
    keyboard: Keyboard,
    ticker: Ticker,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self, GameError> {
        let grid = config.grid()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(SnakeGame {
            state: GameState::new(grid, rng),
            term: TermManager::new(Palette::default()),
            keyboard: Keyboard::new(),
            ticker: Ticker::new(config.tick_rate),
            config,
        })
    }

    pub fn initialize(&mut self) -> Result<(), GameError> {
        self.term.setup()?;
        Ok(())
    }

    /// Returns `false` if the player asked to quit right away.
    pub fn show_intro(&mut self) -> Result<bool, GameError> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Space to pause, any direction to resume",
            "Esc, Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;
        let key = self.term.read_key_blocking()?;
        self.term.clear()?;

        Ok(key_for(&key) != Some(Key::Exit))
    }

    /// Runs frames until an exit is requested.
    pub fn play(&mut self) -> Result<(), GameError> {
        let frame = Duration::from_millis(self.config.frame_ms);
        let mut last = Instant::now();

        self.term.draw(&self.state.snapshot())?;

        loop {
            sleep(frame);

            self.poll_keys()?;
            let input = self.keyboard.apply(&mut self.state, &mut self.ticker);
            if input.exit_requested {
                info!("exit requested");
                break;
            }
            if input.direction_changed {
                debug!("heading now {:?}, stepped: {:?}", self.state.heading().direction(), input.step);
            }

            let now = Instant::now();
            let delta = now.duration_since(last).as_secs_f64();
            last = now;

            if self.ticker.advance(delta) {
                self.state.step();
            }

            self.term.draw(&self.state.snapshot())?;
        }

        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), GameError> {
        self.term.restore()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Terminals only report presses, so a key counts as down for the frame
    /// in which its event arrived.
    fn poll_keys(&mut self) -> Result<(), GameError> {
        self.keyboard.release_all();

        for key_ev in self.term.read_key_events_queue()? {
            if let Some(key) = key_for(&key_ev) {
                self.keyboard.set_down(key, true);
            }
        }

        Ok(())
    }
}

fn key_for(ev: &KeyEvent) -> Option<Key> {
    match ev {
        ev if is_ctrl_c(ev) => Some(Key::Exit),
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Key::Exit),
            KeyCode::Char(' ') => Some(Key::Pause),
            KeyCode::Char('w') | KeyCode::Up => Some(Key::Up),
            KeyCode::Char('a') | KeyCode::Left => Some(Key::Left),
            KeyCode::Char('s') | KeyCode::Down => Some(Key::Down),
            KeyCode::Char('d') | KeyCode::Right => Some(Key::Right),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent { code, modifiers }
    }

    #[test]
    fn maps_arrows_and_wasd() {
        assert_eq!(key_for(&key(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(key_for(&key(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Key::Left));
        assert_eq!(key_for(&key(KeyCode::Char('s'), KeyModifiers::NONE)), Some(Key::Down));
        assert_eq!(key_for(&key(KeyCode::Right, KeyModifiers::NONE)), Some(Key::Right));
    }

    #[test]
    fn maps_pause_and_exit() {
        assert_eq!(key_for(&key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(Key::Pause));
        assert_eq!(key_for(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Exit));
        assert_eq!(key_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Key::Exit));
        assert_eq!(key_for(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }
}
