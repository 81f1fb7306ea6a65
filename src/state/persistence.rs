//! Durable subset of [`ClockState`], stored as a single JSON blob.
//!
//! Stopwatch and lap state never round-trips: a reload always starts with a
//! zeroed stopwatch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::types::{ClockDisplayMode, ClockState, StopwatchState, TimeZone};

/// File name under the config directory; doubles as the storage key.
const STATE_FILE_NAME: &str = "world-clock-state.json";

/// Errors from reading or writing the state file.
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to read state file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse state file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The on-disk shape: exactly the three preference fields, camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub selected_time_zone: TimeZone,
    pub saved_time_zones: Vec<TimeZone>,
    pub display_mode: ClockDisplayMode,
}

impl From<&ClockState> for PersistedState {
    fn from(state: &ClockState) -> Self {
        Self {
            selected_time_zone: state.selected_zone.clone(),
            saved_time_zones: state.saved_zones.clone(),
            display_mode: state.display_mode,
        }
    }
}

impl PersistedState {
    /// Rebuild process state from the stored preferences. The saved list is
    /// kept non-empty so the picker always has a favorite to show.
    pub fn into_state(self) -> ClockState {
        let mut saved_zones = self.saved_time_zones;
        if saved_zones.is_empty() {
            saved_zones.push(self.selected_time_zone.clone());
        }
        ClockState {
            selected_zone: self.selected_time_zone,
            saved_zones,
            display_mode: self.display_mode,
            stopwatch: StopwatchState::default(),
            laps: Vec::new(),
        }
    }
}

/// Handle to the on-disk state file.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `~/.config/worldclock/world-clock-state.json` on
    /// Unix, the platform equivalent elsewhere. Falls back to the current
    /// directory when no config directory is available.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("worldclock").join(STATE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PersistedState, StateFileError> {
        let content = fs::read_to_string(&self.path).map_err(|e| StateFileError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StateFileError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Load with the recovery policy applied: a missing file, unreadable file,
    /// or malformed payload all fall back to defaults. Never fails.
    pub fn load_or_default(&self) -> ClockState {
        if !self.path.exists() {
            return ClockState::default();
        }
        match self.load() {
            Ok(stored) => stored.into_state(),
            Err(err) => {
                tracing::debug!("ignoring stored state: {err}");
                ClockState::default()
            }
        }
    }

    pub fn save(&self, state: &ClockState) -> Result<(), StateFileError> {
        let blob = serde_json::to_string_pretty(&PersistedState::from(state))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StateFileError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, blob).map_err(|e| StateFileError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
