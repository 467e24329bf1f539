use crate::error::GameError;
use crate::snake::Direction::{self, *};

/// Fixed `width x height` board addressed by row-major flat indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        match width.checked_mul(height) {
            Some(cells) if width > 0 && height > 0 && cells >= 2 => {}
            _ => return Err(GameError::InvalidGrid { width, height }),
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn col(&self, index: usize) -> usize {
        index % self.width
    }

    /// The neighbouring cell one step towards `direction`, or `None` if that
    /// step would leave the board. Never wraps around.
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = (self.row(index), self.col(index));

        match direction {
            Left if col == 0 => None,
            Right if col == self.width - 1 => None,
            Up if row == 0 => None,
            Down if row == self.height - 1 => None,
            Left => Some(index - 1),
            Right => Some(index + 1),
            Up => Some(index - self.width),
            Down => Some(index + self.width),
        }
    }
}
