use rand::Rng;

use crate::snake::Direction;
use crate::state::{GameState, StepOutcome};
use crate::ticker::Ticker;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Exit,
    Pause,
    Left,
    Right,
    Up,
    Down,
}

const KEY_COUNT: usize = 6;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Button {
    pub down: bool,
    pub last: bool,
    pub pressed: bool,
}

impl Button {
    fn update(&mut self) {
        self.pressed = self.down && !self.last;
        self.last = self.down;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    keys: [Button; KEY_COUNT],
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    pub exit_requested: bool,
    pub direction_changed: bool,
    /// The out-of-schedule step taken because the heading changed.
    pub step: Option<StepOutcome>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_down(&mut self, key: Key, down: bool) {
        self.keys[key as usize].down = down;
    }

    pub fn release_all(&mut self) {
        for button in self.keys.iter_mut() {
            button.down = false;
        }
    }

    pub fn button(&self, key: Key) -> Button {
        self.keys[key as usize]
    }

    /// Latches rising edges. Call exactly once per frame.
    pub fn update(&mut self) {
        for button in self.keys.iter_mut() {
            button.update();
        }
    }

    fn pressed(&self, key: Key) -> bool {
        self.button(key).pressed
    }

    /// Latches this frame's key states and applies them to the game. A
    /// heading change moves the snake right away and restarts the tick timer.
    pub fn apply<R: Rng>(&mut self, state: &mut GameState<R>, ticker: &mut Ticker) -> InputOutcome {
        self.update();

        let mut outcome = InputOutcome {
            exit_requested: self.button(Key::Exit).down,
            ..InputOutcome::default()
        };

        let last_heading = state.heading();
        let heading = state.heading_mut();

        if self.pressed(Key::Pause) {
            heading.pause();
        }

        // Checked in this order, each against the heading left by the ones before
        let turns = [
            (Key::Left, Direction::Left),
            (Key::Right, Direction::Right),
            (Key::Up, Direction::Up),
            (Key::Down, Direction::Down),
        ];
        for (key, direction) in turns {
            if self.pressed(key) {
                heading.turn(direction);
            }
        }

        if state.heading() != last_heading {
            outcome.direction_changed = true;
            outcome.step = Some(state.step());
            ticker.reset();
        }

        outcome
    }
}
