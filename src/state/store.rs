//! Single authoritative state container.
//!
//! All mutation goes through [`ClockStore`] actions; observers subscribe for
//! change notification, and the durable preference subset is written through
//! to the state file on every relevant mutation. Persistence is best-effort:
//! a failed write costs durability only, the in-memory state is already
//! updated.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::clock::Clock;
use crate::state::persistence::StateFile;
use crate::state::types::{ClockState, TimeZone};
use crate::stopwatch;
use crate::zones;

type Subscriber = Box<dyn Fn(&ClockState) + Send + Sync>;

/// Authoritative holder of UI state. Cloning shares the same underlying state.
#[derive(Clone)]
pub struct ClockStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<ClockState>,
    file: StateFile,
    clock: Arc<dyn Clock>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl ClockStore {
    pub fn new(initial: ClockState, file: StateFile, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                file,
                clock,
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Build from the persisted file, falling back to defaults on any failure.
    pub fn load(file: StateFile, clock: Arc<dyn Clock>) -> Self {
        let initial = file.load_or_default();
        Self::new(initial, file, clock)
    }

    /// Clone of the current state. Cheap; `ClockState` holds a handful of
    /// strings and the lap list.
    pub fn snapshot(&self) -> ClockState {
        self.inner.state.read().clone()
    }

    /// Register an observer called after every state change.
    pub fn subscribe(&self, subscriber: impl Fn(&ClockState) + Send + Sync + 'static) {
        self.inner.subscribers.lock().push(Box::new(subscriber));
    }

    fn notify(&self) {
        let state = self.snapshot();
        for subscriber in self.inner.subscribers.lock().iter() {
            subscriber(&state);
        }
    }

    fn persist(&self) {
        let state = self.snapshot();
        if let Err(err) = self.inner.file.save(&state) {
            tracing::warn!("state not persisted: {err}");
        }
    }

    /// Replace the selected zone. Persists the preference subset.
    pub fn set_selected_zone(&self, zone: TimeZone) {
        {
            let mut state = self.inner.state.write();
            state.selected_zone = zone;
        }
        self.persist();
        self.notify();
    }

    /// Look `id` up in the catalog; an unknown id leaves the selection alone.
    pub fn select_zone_by_id(&self, id: &str) -> bool {
        match zones::find(id) {
            Some(zone) => {
                self.set_selected_zone(zone.clone());
                true
            }
            None => {
                tracing::debug!(id, "unknown time zone id, selection unchanged");
                false
            }
        }
    }

    pub fn toggle_display_mode(&self) {
        {
            let mut state = self.inner.state.write();
            state.display_mode = state.display_mode.toggled();
        }
        self.persist();
        self.notify();
    }

    /// Add `id` to the saved-zone list, or drop it if already there. The list
    /// keeps at least one entry; removing the last one is refused.
    pub fn toggle_saved_zone(&self, id: &str) -> bool {
        let changed = {
            let mut state = self.inner.state.write();
            if let Some(pos) = state.saved_zones.iter().position(|z| z.id == id) {
                if state.saved_zones.len() == 1 {
                    false
                } else {
                    state.saved_zones.remove(pos);
                    true
                }
            } else if let Some(zone) = zones::find(id) {
                state.saved_zones.push(zone.clone());
                true
            } else {
                false
            }
        };
        if changed {
            self.persist();
            self.notify();
        }
        changed
    }

    /// Arm the stopwatch, preserving previously accumulated time. No-op while
    /// already running.
    pub fn start_stopwatch(&self) {
        let now_ms = self.inner.clock.now_ms();
        let changed = {
            let mut state = self.inner.state.write();
            stopwatch::start(&mut state.stopwatch, now_ms)
        };
        if changed {
            self.notify();
        }
    }

    /// Pause the stopwatch, folding the running interval into the accumulator.
    /// No-op while stopped.
    pub fn stop_stopwatch(&self) {
        let now_ms = self.inner.clock.now_ms();
        let changed = {
            let mut state = self.inner.state.write();
            stopwatch::stop(&mut state.stopwatch, now_ms)
        };
        if changed {
            self.notify();
        }
    }

    /// Zero the stopwatch and clear the lap list. Valid in any state.
    pub fn reset_stopwatch(&self) {
        {
            let mut state = self.inner.state.write();
            stopwatch::reset(&mut state.stopwatch);
            state.laps.clear();
        }
        self.notify();
    }

    /// Record a lap at the current instant. No-op unless the stopwatch is
    /// running.
    pub fn add_lap(&self) {
        let now_ms = self.inner.clock.now_ms();
        let added = {
            let mut state = self.inner.state.write();
            match stopwatch::next_lap(&state.stopwatch, &state.laps, now_ms) {
                Some(lap) => {
                    state.laps.push(lap);
                    true
                }
                None => false,
            }
        };
        if added {
            self.notify();
        }
    }

    /// Elapsed time for display, including the running interval. Read-side
    /// only; never mutates stopwatch state.
    pub fn display_elapsed_ms(&self) -> u64 {
        let state = self.inner.state.read();
        stopwatch::display_elapsed(&state.stopwatch, self.inner.clock.now_ms())
    }
}
