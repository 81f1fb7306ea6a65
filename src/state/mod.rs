pub mod persistence;
pub mod store;
pub mod types;

pub use persistence::{PersistedState, StateFile, StateFileError};
pub use store::ClockStore;
pub use types::{ClockDisplayMode, ClockState, LapTime, StopwatchState, TimeZone};
