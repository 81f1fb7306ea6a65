use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::state::store::ClockStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(store: ClockStore, clock: Arc<dyn Clock>, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate);

    loop {
        let now = clock.now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Ratatui re-queries the size on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the handler's receiver stops the event thread.
    drop(events);
    drop(guard);
    Ok(())
}
