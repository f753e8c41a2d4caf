//! Snapshot fan-out to observers.
//!
//! The engine never pushes state anywhere; the runner publishes a
//! [`GameSnapshot`] through a hub after every mutation, and observers
//! (the render path, tests, future tooling) each hold a channel receiver.
//! Observers that fall behind can drain to the newest frame; observers
//! that disconnect are pruned on the next publish.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::core::GameSnapshot;

/// Publish/subscribe hub for game snapshots.
#[derive(Default)]
pub struct SnapshotHub {
    subscribers: Vec<Sender<GameSnapshot>>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Every snapshot published after this call is
    /// delivered to the returned receiver.
    pub fn subscribe(&mut self) -> Receiver<GameSnapshot> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver a snapshot to all live observers, dropping dead ones.
    pub fn publish(&mut self, snapshot: &GameSnapshot) {
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Drain a receiver and keep only the newest frame.
pub fn latest_frame(rx: &Receiver<GameSnapshot>) -> Option<GameSnapshot> {
    let mut latest = None;
    while let Ok(snapshot) = rx.try_recv() {
        latest = Some(snapshot);
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_subscribers_receive_published_frames() {
        let mut hub = SnapshotHub::new();
        let rx_a = hub.subscribe();
        let rx_b = hub.subscribe();

        let snapshot = GameState::new(3).snapshot();
        hub.publish(&snapshot);

        assert_eq!(rx_a.try_recv().unwrap(), snapshot);
        assert_eq!(rx_b.try_recv().unwrap(), snapshot);
    }

    #[test]
    fn test_disconnected_subscribers_are_pruned() {
        let mut hub = SnapshotHub::new();
        let rx = hub.subscribe();
        drop(rx);
        assert_eq!(hub.subscriber_count(), 1);

        hub.publish(&GameState::new(3).snapshot());
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_latest_frame_skips_stale_ones() {
        let mut hub = SnapshotHub::new();
        let rx = hub.subscribe();

        let mut state = GameState::new(3);
        hub.publish(&state.snapshot());
        state.step();
        let newest = state.snapshot();
        hub.publish(&newest);

        assert_eq!(latest_frame(&rx), Some(newest));
        assert_eq!(latest_frame(&rx), None);
    }
}
