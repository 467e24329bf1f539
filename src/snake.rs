use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Where the snake is going. Pausing keeps the last real direction around so
/// that the reversal guard still applies while paused; a successful turn
/// replaces the whole value and therefore also unpauses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    direction: Option<Direction>,
    paused: bool,
}

impl Heading {
    /// Paused with no direction yet, which is how every run starts.
    pub fn stopped() -> Self {
        Heading { direction: None, paused: true }
    }

    pub fn moving(direction: Direction) -> Self {
        Heading { direction: Some(direction), paused: false }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The direction to move in on the next tick, if not paused.
    pub fn current(&self) -> Option<Direction> {
        if self.paused { None } else { self.direction }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Returns whether the turn was accepted.
    pub fn turn(&mut self, new_direction: Direction) -> bool {
        if *self == Heading::moving(new_direction) {
            return false;
        }

        match self.direction {
            Some(dir) if dir == new_direction.opposite() => false,
            _ => {
                *self = Heading::moving(new_direction);
                true
            }
        }
    }
}

/// Occupied cells, head first. Never longer than the grid has cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<usize>,
    heading: Heading,
}

impl Snake {
    pub fn new(head: usize, capacity: usize) -> Self {
        let mut body = Vec::with_capacity(capacity);
        body.push(head);
        Snake { body, heading: Heading::stopped() }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<usize>, heading: Heading) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body, heading }
    }

    pub fn body(&self) -> &[usize] {
        &self.body
    }

    pub fn head(&self) -> usize {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn heading_mut(&mut self) -> &mut Heading {
        &mut self.heading
    }

    /// Puts `new_head` in front and keeps the first `len` cells, so every
    /// segment takes the place of the one ahead of it.
    pub fn advance(&mut self, new_head: usize, len: usize) {
        self.body.insert(0, new_head);
        self.body.truncate(len);
    }

    /// Collapses to the head cell only.
    pub fn shrink_to_head(&mut self) {
        self.body.truncate(1);
    }

    pub fn bites_itself(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    pub fn occupies(&self, cell: usize) -> bool {
        self.body.contains(&cell)
    }
}
