//! Terminal Snake runner.
//!
//! Owns the cooperative tick loop: poll input with a deadline, step the
//! engine when the deadline expires, publish a snapshot after every
//! mutation, and render the newest frame. Input and ticks share one
//! thread, so direction intents never race a step.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::observe::{latest_frame, SnapshotHub};
use tui_snake::store::ScoreStore;
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{Phase, IDLE_POLL_MS};

fn main() -> Result<()> {
    env_logger::init();

    let store = ScoreStore::from_env();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    let mut state = GameState::with_best(seed, store.load_best());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut state, &store);

    // Always try to restore terminal state.
    let _ = term.exit();

    // Best-effort write on the way out; a quit mid-run still keeps the
    // highest score seen so far.
    store.save_best(state.best());
    result
}

fn run(term: &mut TerminalRenderer, state: &mut GameState, store: &ScoreStore) -> Result<()> {
    let view = GameView::default();
    let mut hub = SnapshotHub::new();
    let frames = hub.subscribe();

    hub.publish(&state.snapshot());
    let mut last_tick = Instant::now();

    loop {
        // Render the newest published frame, skipping stale ones.
        if let Some(snapshot) = latest_frame(&frames) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let mut fb = view.render(&snapshot, Viewport::new(w, h));
            term.draw_swap(&mut fb)?;
        }

        // Poll with a deadline: the remainder of the current tick interval
        // while running; an idle timeout otherwise. No ticks fire while
        // paused or after game over.
        let timeout = if state.phase() == Phase::Running {
            tick_interval(state)
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let was_running = state.phase() == Phase::Running;
                        if state.apply_action(action) {
                            // Leaving pause or game over re-arms a fresh
                            // full-length interval.
                            if !was_running && state.phase() == Phase::Running {
                                last_tick = Instant::now();
                            }
                            hub.publish(&state.snapshot());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick on deadline. The next deadline derives from the current
        // interval, so a speed-up from eating applies to the very next tick.
        if state.phase() == Phase::Running && last_tick.elapsed() >= tick_interval(state) {
            last_tick = Instant::now();
            state.step();
            hub.publish(&state.snapshot());
            if state.phase() == Phase::GameOver {
                store.save_best(state.best());
            }
        }
    }
}

fn tick_interval(state: &GameState) -> Duration {
    Duration::from_millis(u64::from(state.speed_interval_ms()))
}
