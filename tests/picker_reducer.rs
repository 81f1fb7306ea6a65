use worldclock::ui::mvi::Reducer;
use worldclock::ui::picker::{PickerIntent, PickerReducer, PickerRow, PickerState};

fn open_on(id: &str) -> PickerState {
    PickerReducer::reduce(
        PickerState::Hidden,
        PickerIntent::Open {
            selected_id: id.to_string(),
        },
    )
}

fn cursor_of(state: &PickerState) -> usize {
    match state {
        PickerState::Visible { cursor, .. } => *cursor,
        PickerState::Hidden => panic!("picker should be visible"),
    }
}

#[test]
fn open_puts_cursor_on_selected_zone() {
    let state = open_on("JST");
    assert!(state.is_visible());
    assert_eq!(state.cursor_zone().map(|z| z.id.as_str()), Some("JST"));
}

#[test]
fn open_with_unknown_id_starts_at_first_zone() {
    let state = open_on("NOT_A_ZONE");
    assert_eq!(state.cursor_zone().map(|z| z.id.as_str()), Some("EST"));
}

#[test]
fn move_down_skips_region_headings() {
    // HST is the last zone of "North America"; the next row is the "Europe"
    // heading, which must be skipped.
    let state = open_on("HST");
    let state = PickerReducer::reduce(state, PickerIntent::MoveDown);
    assert_eq!(state.cursor_zone().map(|z| z.id.as_str()), Some("GMT"));
}

#[test]
fn move_up_from_first_zone_wraps_to_last() {
    let state = open_on("EST");
    let state = PickerReducer::reduce(state, PickerIntent::MoveUp);
    assert_eq!(state.cursor_zone().map(|z| z.id.as_str()), Some("UTC"));
}

#[test]
fn move_down_from_last_zone_wraps_to_first() {
    let state = open_on("UTC");
    let state = PickerReducer::reduce(state, PickerIntent::MoveDown);
    assert_eq!(state.cursor_zone().map(|z| z.id.as_str()), Some("EST"));
}

#[test]
fn cursor_always_lands_on_zone_rows() {
    let mut state = open_on("EST");
    for _ in 0..40 {
        state = PickerReducer::reduce(state, PickerIntent::MoveDown);
        let cursor = cursor_of(&state);
        match &state {
            PickerState::Visible { rows, .. } => {
                assert!(matches!(rows[cursor], PickerRow::Zone(_)));
            }
            PickerState::Hidden => unreachable!(),
        }
    }
}

#[test]
fn close_hides_the_picker() {
    let state = open_on("EST");
    let state = PickerReducer::reduce(state, PickerIntent::Close);
    assert!(!state.is_visible());
    assert_eq!(state.cursor_zone(), None);
}

#[test]
fn navigation_on_hidden_picker_is_inert() {
    let state = PickerReducer::reduce(PickerState::Hidden, PickerIntent::MoveDown);
    assert!(!state.is_visible());
}
