//! Model-View-Intent primitives for unidirectional data flow.
//!
//! Intents describe what happened (a key press, a dialog opening); the
//! reducer is the only place a dialog's state changes, as a pure function
//! `(State, Intent) -> State`. Views render from the resulting state.

/// Marker trait for UI state objects. States are immutable snapshots: clone
/// to produce the next one, compare to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure state-transition function over a state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
