//! Core module - pure game logic with no external I/O
//!
//! This module contains all game rules, state management, and the step
//! simulation. It has zero dependencies on the terminal, timers, or
//! persistence, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same food sequence
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: a different front end only needs `GameSnapshot`
//!
//! # Module Structure
//!
//! - [`snake`]: the snake body and its advance/grow operations
//! - [`food`]: seeded uniform food placement over free cells
//! - [`scoring`]: score and speed-ramp arithmetic
//! - [`game_state`]: the authoritative state and per-tick step function
//! - [`snapshot`]: the immutable frame handed to observers

pub mod food;
pub mod game_state;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use food::FoodSpawner;
pub use game_state::GameState;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
