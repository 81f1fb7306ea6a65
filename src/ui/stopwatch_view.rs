//! Stopwatch body: elapsed read-out plus the lap list with fastest/slowest
//! highlighting.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::types::ClockState;
use crate::stopwatch::{self, format_elapsed};
use crate::ui::theme::{ACCENT, DIM_TEXT, FASTEST_LAP, GLOBAL_BORDER, HEADER_TEXT, SLOWEST_LAP};

pub fn draw_stopwatch(frame: &mut Frame<'_>, area: Rect, state: &ClockState, elapsed_ms: u64) {
    let [readout, laps] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    draw_readout(frame, readout, state, elapsed_ms);
    draw_laps(frame, laps, state);
}

fn draw_readout(frame: &mut Frame<'_>, area: Rect, state: &ClockState, elapsed_ms: u64) {
    let status = if state.stopwatch.is_running {
        Span::styled("RUNNING", Style::default().fg(FASTEST_LAP))
    } else if state.stopwatch.elapsed_ms > 0 {
        Span::styled("PAUSED", Style::default().fg(DIM_TEXT))
    } else {
        Span::styled("", Style::default())
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format_elapsed(elapsed_ms),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(status),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_laps(frame: &mut Frame<'_>, area: Rect, state: &ClockState) {
    if state.laps.is_empty() || area.height < 3 {
        return;
    }

    let extremes = stopwatch::lap_extremes(&state.laps);
    let visible = area.height.saturating_sub(2) as usize;
    let skip = state.laps.len().saturating_sub(visible);

    let mut lines = Vec::new();
    for (index, lap) in state.laps.iter().enumerate().skip(skip) {
        let (marker, style) = if Some(index) == extremes.fastest {
            (" fastest", Style::default().fg(FASTEST_LAP))
        } else if Some(index) == extremes.slowest {
            (" slowest", Style::default().fg(SLOWEST_LAP))
        } else {
            ("", Style::default().fg(HEADER_TEXT))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" Lap {:<3}", lap.lap_number), style),
            Span::styled(format!("  {:>9}", format_elapsed(lap.lap_ms)), style),
            Span::styled(
                format!("  {:>9}", format_elapsed(lap.split_ms)),
                Style::default().fg(DIM_TEXT),
            ),
            Span::styled(marker, style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .title(" Laps ")
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
