//! Game state module - the authoritative simulation state
//!
//! Ties together the snake body, food spawner and scoring rules, and owns
//! the per-tick step function plus the pause/restart lifecycle. The engine
//! is pure: no clocks, no I/O. The runner schedules ticks and persists the
//! best score; observers read exported snapshots.

use log::{debug, info};

use crate::core::food::FoodSpawner;
use crate::core::scoring::{fold_best, initial_interval_ms, interval_after_eat, POINTS_PER_FOOD};
use crate::core::snake::Snake;
use crate::core::snapshot::{GameSnapshot, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD};
use crate::types::{Direction, GameAction, Phase, Point, GRID_SIZE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    /// Direction committed by the last tick.
    direction: Direction,
    /// Buffered intent, consumed at the start of the next tick.
    /// Never the opposite of `direction`.
    pending_direction: Option<Direction>,
    food: Point,
    score: u32,
    best: u32,
    speed_interval_ms: u32,
    phase: Phase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    spawner: FoodSpawner,
}

impl GameState {
    /// Create a fresh game with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self::with_best(seed, 0)
    }

    /// Create a fresh game carrying a previously persisted best score.
    pub fn with_best(seed: u64, best: u32) -> Self {
        let snake = Snake::spawn();
        let mut spawner = FoodSpawner::new(seed);
        let food = spawner.spawn(&snake);

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food,
            score: 0,
            best,
            speed_interval_ms: initial_interval_ms(),
            phase: Phase::Running,
            episode_id: 0,
            spawner,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn speed_interval_ms(&self) -> u32 {
        self.speed_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    /// Advance the simulation by one tick. Returns whether state changed.
    ///
    /// The runner only schedules ticks while Running; a call in any other
    /// phase is a caller error and leaves the state untouched.
    pub fn step(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        // Commit at most one buffered turn per tick.
        if let Some(turn) = self.pending_direction.take() {
            self.direction = turn;
        }

        let candidate = self.snake.next_head(self.direction);

        // Wall collision: the snake stays frozen where it was.
        if !candidate.in_bounds() {
            self.finish_run("hit the wall");
            return true;
        }

        // Self collision, checked against the pre-advance body. The tail
        // cell still counts: it vacates only after this check, so moving
        // into the cell it currently occupies collides.
        if self.snake.contains(candidate) {
            self.finish_run("ran into itself");
            return true;
        }

        let ate = candidate == self.food;
        self.snake.advance(candidate, ate);

        if ate {
            self.score += POINTS_PER_FOOD;
            self.speed_interval_ms = interval_after_eat(self.speed_interval_ms);
            self.food = self.spawner.spawn(&self.snake);
            debug!(
                "ate food: score {}, interval {}ms, next food {:?}",
                self.score, self.speed_interval_ms, self.food
            );
        }

        true
    }

    fn finish_run(&mut self, cause: &str) {
        self.phase = Phase::GameOver;
        self.best = fold_best(self.best, self.score);
        info!(
            "game over ({}): score {}, best {}, length {}",
            cause,
            self.score,
            self.best,
            self.snake.len()
        );
    }

    /// Apply a routed action. Returns whether state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.buffer_turn(dir),
            GameAction::Pause => {
                // At game over the pause key doubles as the restart key.
                if self.phase == Phase::GameOver {
                    self.restart();
                    true
                } else {
                    self.toggle_pause()
                }
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Buffer a direction intent for the next tick.
    ///
    /// A request opposite to the committed direction is rejected and
    /// leaves any previously buffered intent in place. Otherwise the
    /// buffer is overwritten: the most recent intent before the next
    /// tick wins.
    fn buffer_turn(&mut self, requested: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if requested == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(requested);
        true
    }

    /// Toggle Running/Paused. Game over is only exited via restart.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                debug!("paused at score {}", self.score);
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                debug!("resumed");
                true
            }
            Phase::GameOver => false,
        }
    }

    /// Reset to the starting configuration. The best score, the RNG
    /// stream and the (incremented) episode id survive.
    pub fn restart(&mut self) {
        self.snake = Snake::spawn();
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.food = self.spawner.spawn(&self.snake);
        self.score = 0;
        self.speed_interval_ms = initial_interval_ms();
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!("restarted, episode {}", self.episode_id);
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        out.snake.clear();

        for cell in self.snake.cells() {
            out.grid[cell.y as usize][cell.x as usize] = CELL_BODY;
            out.snake.push(cell);
        }
        let head = self.snake.head();
        out.grid[head.y as usize][head.x as usize] = CELL_HEAD;
        out.grid[self.food.y as usize][self.food.x as usize] = CELL_FOOD;

        out.food = self.food;
        out.score = self.score;
        out.best = self.best;
        out.speed_interval_ms = self.speed_interval_ms;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.seed = self.spawner.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Force the body and food for scenario tests.
    #[cfg(test)]
    pub fn set_board(&mut self, snake: Snake, direction: Direction, food: Point) {
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = None;
        self.food = food;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
