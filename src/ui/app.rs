use crate::state::store::ClockStore;
use crate::state::types::ClockState;
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState};

/// Which body view is active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    Clock,
    Stopwatch,
}

pub struct App {
    store: ClockStore,
    view: View,
    picker: PickerState,
    should_quit: bool,
    /// Snapshot re-read on every tick and after every action.
    state: ClockState,
    /// Elapsed time shown on the stopwatch view; refreshed by the tick.
    display_elapsed_ms: u64,
}

impl App {
    pub fn new(store: ClockStore) -> Self {
        let state = store.snapshot();
        let display_elapsed_ms = store.display_elapsed_ms();
        Self {
            store,
            view: View::Clock,
            picker: PickerState::default(),
            should_quit: false,
            state,
            display_elapsed_ms,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Clock => View::Stopwatch,
            View::Stopwatch => View::Clock,
        };
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn store(&self) -> &ClockStore {
        &self.store
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn display_elapsed_ms(&self) -> u64 {
        self.display_elapsed_ms
    }

    /// The tick is read-side only: it re-reads the store and the clock and
    /// never mutates stopwatch state.
    pub fn on_tick(&mut self) {
        self.refresh();
    }

    pub fn refresh(&mut self) {
        self.state = self.store.snapshot();
        self.display_elapsed_ms = self.store.display_elapsed_ms();
    }

    pub fn dispatch_picker(&mut self, intent: PickerIntent) {
        self.picker = PickerReducer::reduce(std::mem::take(&mut self.picker), intent);
    }

    pub fn open_picker(&mut self) {
        let selected_id = self.state.selected_zone.id.clone();
        self.dispatch_picker(PickerIntent::Open { selected_id });
    }

    /// Apply the zone under the picker cursor and close the dialog.
    pub fn confirm_picker(&mut self) {
        if let Some(zone) = self.picker.cursor_zone().cloned() {
            self.store.set_selected_zone(zone);
        }
        self.dispatch_picker(PickerIntent::Close);
        self.refresh();
    }
}
