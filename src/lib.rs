//! Terminal world clock: current time in a selected zone (analog or digital),
//! a stopwatch with lap tracking, and locally persisted preferences.

pub mod clock;
pub mod state;
pub mod stopwatch;
pub mod ui;
pub mod zones;
