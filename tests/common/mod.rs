//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;
use worldclock::clock::ManualClock;
use worldclock::state::persistence::StateFile;
use worldclock::state::store::ClockStore;

/// State file inside a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn temp_state_file() -> (TempDir, StateFile) {
    let dir = TempDir::new().expect("create temp dir");
    let file = StateFile::new(dir.path().join("world-clock-state.json"));
    (dir, file)
}

/// Store wired to a manual clock starting at `start_ms`.
pub fn store_with_clock(start_ms: u64) -> (TempDir, ClockStore, Arc<ManualClock>) {
    let (dir, file) = temp_state_file();
    let clock = Arc::new(ManualClock::new(start_ms));
    let store = ClockStore::load(file, clock.clone());
    (dir, store, clock)
}
