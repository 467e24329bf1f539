use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::grid::Grid;
use crate::snake::{Heading, Snake};
use StepOutcome::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Paused,
    Moved,
    Ate,
    /// Ran into the edge. The snake is back to its head and stopped.
    WallHit,
    /// Ran into its own body. The snake is back to its new head but keeps
    /// its direction.
    SelfHit,
    /// Grew to cover the whole board and started over from its head.
    Filled,
}

/// What a renderer needs for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub body: &'a [usize],
    pub food: usize,
    pub width: usize,
    pub height: usize,
    pub paused: bool,
}

pub struct GameState<R = StdRng> {
    grid: Grid,
    snake: Snake,
    food: usize,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let head = rng.gen_range(0..grid.cells());
        let snake = Snake::new(head, grid.cells());
        let food = place_food(&grid, &snake, &mut rng);
        info!("new game on a {}x{} grid, head at {}, food at {}", grid.width(), grid.height(), head, food);
        GameState { grid, snake, food, rng }
    }

    #[cfg(test)]
    pub fn with_snake(grid: Grid, snake: Snake, food: usize, rng: R) -> Self {
        GameState { grid, snake, food, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> usize {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.snake.heading()
    }

    pub fn heading_mut(&mut self) -> &mut Heading {
        self.snake.heading_mut()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let grid = self.grid();
        Snapshot {
            body: self.snake().body(),
            food: self.food(),
            width: grid.width(),
            height: grid.height(),
            paused: self.heading().is_paused(),
        }
    }

    /// Advances the snake by one cell in its current heading.
    pub fn step(&mut self) -> StepOutcome {
        let direction = match self.heading().current() {
            Some(dir) => dir,
            None => return Paused,
        };

        let old_head = self.snake.head();
        let new_head = match self.grid.step(old_head, direction) {
            Some(cell) => cell,
            None => {
                info!("hit the wall at {} going {:?} with length {}", old_head, direction, self.snake.len());
                self.snake.shrink_to_head();
                *self.heading_mut() = Heading::stopped();
                return WallHit;
            }
        };

        let ate = new_head == self.food;
        let mut len = self.snake.len() + ate as usize;
        let filled = len >= self.grid.cells();
        if filled {
            len = 1;
        }

        self.snake.advance(new_head, len);

        if self.snake.bites_itself() {
            info!("bit itself at {} with length {}", new_head, len);
            self.snake.shrink_to_head();
            return SelfHit;
        }

        if !ate {
            debug!("moved {:?} to {}", direction, new_head);
            return Moved;
        }

        self.food = place_food(&self.grid, &self.snake, &mut self.rng);

        if filled {
            info!("filled the board, starting over at {}", new_head);
            Filled
        } else {
            info!("ate at {}, length {}, next food at {}", new_head, len, self.food);
            Ate
        }
    }
}

/// Picks a random cell and walks forward (wrapping around) to the first one
/// the snake doesn't cover. Cells right after a run of occupied cells are
/// therefore more likely than others.
///
/// The snake must leave at least one cell free.
pub fn place_food<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> usize {
    let cells = grid.cells();
    let mut candidate = rng.gen_range(0..cells);

    while snake.occupies(candidate) {
        candidate = (candidate + 1) % cells;
    }

    candidate
}
