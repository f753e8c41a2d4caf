//! TUI Snake.
//!
//! A terminal Snake game with a pure core engine: `core` simulates, `input`
//! maps keys to actions, `observe` fans out state snapshots, `store`
//! persists the best score, and `term` draws frames. The binary in
//! `main.rs` wires them together around a single-threaded tick loop.

pub mod core;
pub mod input;
pub mod observe;
pub mod store;
pub mod term;
pub mod types;
