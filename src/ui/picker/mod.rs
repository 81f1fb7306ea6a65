//! Zone-picker popup: reducer-driven dialog over the static catalog.

mod intent;
mod reducer;
mod state;

pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::{PickerRow, PickerState};
