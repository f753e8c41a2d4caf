//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the board is square)
pub const GRID_SIZE: i8 = 20;
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Game timing constants (in milliseconds)
pub const START_SPEED_MS: u32 = 200;
pub const SPEED_STEP_MS: u32 = 5;
pub const MIN_SPEED_MS: u32 = 80;

/// Poll timeout while no ticks are scheduled (paused / game over)
pub const IDLE_POLL_MS: u64 = 250;

/// Snake length at the start of every run
pub const INITIAL_SNAKE_LEN: usize = 2;

/// A cell position on the board.
///
/// Coordinates: (x, y) with x growing right and y growing down.
/// `i8` leaves room to represent a candidate head one step outside the
/// board before the wall check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the point lies on the board.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree reverse of this direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Game actions
///
/// Every input source (keyboard today, a directional pad tomorrow) feeds
/// the engine through this one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Turn(Direction),
    Pause,
    Restart,
}
