//! Input routing - device events in, `GameAction`s out
//!
//! The keyboard map is the only source wired up today; any other source
//! (an on-screen pad, a replay file) routes through the same
//! [`crate::types::GameAction`] intake on the engine.

pub mod map;

pub use map::{handle_key_event, should_quit};
