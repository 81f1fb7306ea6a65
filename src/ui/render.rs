use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, View};
use crate::ui::clock_view::draw_clock;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::picker::{PickerRow, PickerState};
use crate::ui::stopwatch_view::draw_stopwatch;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER};

pub fn draw(frame: &mut Frame<'_>, app: &App, now: DateTime<Utc>) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.state()), header);

    match app.view() {
        View::Clock => draw_clock(frame, body, app.state(), now),
        View::Stopwatch => draw_stopwatch(frame, body, app.state(), app.display_elapsed_ms()),
    }

    frame.render_widget(Footer::new().widget(app.view(), footer), footer);

    if app.picker().is_visible() {
        draw_picker(frame, app);
    }
}

fn draw_picker(frame: &mut Frame<'_>, app: &App) {
    let PickerState::Visible { rows, cursor } = app.picker() else {
        return;
    };

    let height = (rows.len() as u16).saturating_add(2);
    let popup = centered_rect_by_size(46, height, frame.area());
    frame.render_widget(Clear, popup);

    let saved = &app.state().saved_zones;
    let mut lines = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match row {
            PickerRow::Region(region) => lines.push(Line::styled(
                format!(" {region}"),
                Style::default().fg(DIM_TEXT).add_modifier(Modifier::BOLD),
            )),
            PickerRow::Zone(zone) => {
                let marker = if saved.iter().any(|z| z.id == zone.id) {
                    "*"
                } else {
                    " "
                };
                let style = if index == *cursor {
                    Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                lines.push(Line::from(Span::styled(
                    format!("  {marker} {:<28} {}  {}", zone.name, zone.offset, zone.abbr),
                    style,
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Time Zone ")
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
