//! Flat, immutable view of the game state handed to observers.
//!
//! The snapshot carries everything the render layer needs and nothing it
//! could mutate. `GameState::snapshot_into` refills an existing snapshot
//! without allocating; the `ArrayVec` body list is capped at the cell
//! count of the board, which the snake can never exceed.

use arrayvec::ArrayVec;

use crate::types::{Phase, Point, GRID_CELLS, GRID_SIZE, START_SPEED_MS};

/// Occupancy codes for the snapshot grid.
pub const CELL_EMPTY: u8 = 0;
pub const CELL_BODY: u8 = 1;
pub const CELL_HEAD: u8 = 2;
pub const CELL_FOOD: u8 = 3;

/// One frame of game state, safe to ship across the observer channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Row-major occupancy grid, indexed `[y][x]`.
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    /// Body cells in order, head first.
    pub snake: ArrayVec<Point, GRID_CELLS>,
    pub food: Point,
    pub score: u32,
    pub best: u32,
    pub speed_interval_ms: u32,
    pub phase: Phase,
    /// Increments on every restart.
    pub episode_id: u32,
    /// RNG seed of the food spawner (for reproducing a session).
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.snake.clear();
        self.food = Point::default();
        self.score = 0;
        self.best = 0;
        self.speed_interval_ms = START_SPEED_MS;
        self.phase = Phase::Running;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize],
            snake: ArrayVec::new(),
            food: Point::default(),
            score: 0,
            best: 0,
            speed_interval_ms: START_SPEED_MS,
            phase: Phase::Running,
            episode_id: 0,
            seed: 0,
        }
    }
}
