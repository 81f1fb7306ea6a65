use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, View};
use crate::ui::picker::PickerIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.picker().is_visible() {
        match key.code {
            KeyCode::Esc => app.dispatch_picker(PickerIntent::Close),
            KeyCode::Up => app.dispatch_picker(PickerIntent::MoveUp),
            KeyCode::Down => app.dispatch_picker(PickerIntent::MoveDown),
            KeyCode::Enter => app.confirm_picker(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.toggle_view(),
        KeyCode::Char('z') => app.open_picker(),
        KeyCode::Char('m') => {
            app.store().toggle_display_mode();
            app.refresh();
        }
        KeyCode::Char('f') => {
            let id = app.state().selected_zone.id.clone();
            app.store().toggle_saved_zone(&id);
            app.refresh();
        }
        KeyCode::Char(' ') if app.view() == View::Stopwatch => {
            if app.state().stopwatch.is_running {
                app.store().stop_stopwatch();
            } else {
                app.store().start_stopwatch();
            }
            app.refresh();
        }
        KeyCode::Char('l') if app.view() == View::Stopwatch => {
            app.store().add_lap();
            app.refresh();
        }
        KeyCode::Char('r') if app.view() == View::Stopwatch => {
            app.store().reset_stopwatch();
            app.refresh();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
