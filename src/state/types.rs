use serde::{Deserialize, Serialize};

/// A catalog time zone.
///
/// Immutable; always supplied by the [`crate::zones`] catalog (or deserialized
/// from a state file written from it), never constructed ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZone {
    /// Catalog identifier, e.g. "EST".
    pub id: String,
    /// Human-readable name, e.g. "Eastern Time".
    pub name: String,
    /// UTC offset string, "+HH:MM" or "-HH:MM".
    pub offset: String,
    /// Short abbreviation shown next to the name.
    pub abbr: String,
    /// IANA key handed to the time formatter, e.g. "America/New_York".
    pub time_zone_name: String,
}

/// How the clock face is rendered. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockDisplayMode {
    Analog,
    #[default]
    Digital,
}

impl ClockDisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Analog => Self::Digital,
            Self::Digital => Self::Analog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Analog => "Analog",
            Self::Digital => "Digital",
        }
    }
}

/// Stopwatch accumulator.
///
/// `elapsed_ms` excludes the currently running interval; while running, the
/// interval since `start_time` is derived for display only. Pausing folds the
/// running interval into `elapsed_ms` and clears `start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopwatchState {
    pub is_running: bool,
    /// Effective start in epoch milliseconds; set only while running.
    pub start_time: Option<u64>,
    pub elapsed_ms: u64,
}

/// One recorded lap. Append-only; insertion order doubles as chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapTime {
    /// 1-based sequential number.
    pub lap_number: u32,
    /// Cumulative elapsed time at the lap mark, in milliseconds.
    pub split_ms: u64,
    /// Time since the previous lap mark; equals `split_ms` for the first lap.
    pub lap_ms: u64,
}

/// Aggregate application state, mutated only through [`crate::state::ClockStore`]
/// actions. Lives for the whole process; a durable subset is mirrored to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    pub selected_zone: TimeZone,
    pub saved_zones: Vec<TimeZone>,
    pub display_mode: ClockDisplayMode,
    pub stopwatch: StopwatchState,
    pub laps: Vec<LapTime>,
}

impl Default for ClockState {
    fn default() -> Self {
        let utc = crate::zones::default_zone();
        Self {
            selected_zone: utc.clone(),
            saved_zones: vec![utc],
            display_mode: ClockDisplayMode::default(),
            stopwatch: StopwatchState::default(),
            laps: Vec::new(),
        }
    }
}
