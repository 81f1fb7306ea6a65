//! Clock body: digital read-out or analog dial for the selected zone.

use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::types::{ClockDisplayMode, ClockState};
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, SLOWEST_LAP};
use crate::zones;

pub fn draw_clock(frame: &mut Frame<'_>, area: Rect, state: &ClockState, now: DateTime<Utc>) {
    match state.display_mode {
        ClockDisplayMode::Digital => draw_digital(frame, area, state, now),
        ClockDisplayMode::Analog => draw_analog(frame, area, state, now),
    }
}

fn draw_digital(frame: &mut Frame<'_>, area: Rect, state: &ClockState, now: DateTime<Utc>) {
    let wall = zones::wall_clock(now, &state.selected_zone);
    let zone = &state.selected_zone;

    let time_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let pad_top = area.height.saturating_sub(5) / 2;
    for _ in 0..pad_top {
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        format!("{:02}:{:02}:{:02}", wall.hour, wall.minute, wall.second),
        time_style,
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(wall.date, Style::default().fg(HEADER_TEXT)));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("{} ({})", zone.name, zone.abbr),
        Style::default().fg(DIM_TEXT),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_analog(frame: &mut Frame<'_>, area: Rect, state: &ClockState, now: DateTime<Utc>) {
    let wall = zones::wall_clock(now, &state.selected_zone);
    let label = format!("{} ({})", state.selected_zone.name, state.selected_zone.abbr);

    // Hand angles in degrees from 12 o'clock, clockwise; same derivation as a
    // physical dial (the minute hand creeps with the seconds and so on).
    let second_deg = f64::from(wall.second) * 6.0;
    let minute_deg = f64::from(wall.minute) * 6.0 + second_deg / 60.0;
    let hour_deg = f64::from(wall.hour % 12) * 30.0 + minute_deg / 12.0;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: DIM_TEXT,
            });
            for hour_mark in 0..12 {
                let (x, y) = dial_point(f64::from(hour_mark) * 30.0, 1.0);
                let (ix, iy) = dial_point(f64::from(hour_mark) * 30.0, 0.9);
                ctx.draw(&CanvasLine {
                    x1: ix,
                    y1: iy,
                    x2: x,
                    y2: y,
                    color: HEADER_TEXT,
                });
            }
            draw_hand(ctx, hour_deg, 0.5, ACCENT);
            draw_hand(ctx, minute_deg, 0.75, HEADER_TEXT);
            draw_hand(ctx, second_deg, 0.85, SLOWEST_LAP);
            ctx.print(
                -0.4,
                -1.2,
                Line::styled(label.clone(), Style::default().fg(DIM_TEXT)),
            );
        });

    frame.render_widget(canvas, square_in(area));
}

fn draw_hand(ctx: &mut Context<'_>, degrees: f64, length: f64, color: Color) {
    let (x, y) = dial_point(degrees, length);
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: x,
        y2: y,
        color,
    });
}

/// Point on the dial at `degrees` clockwise from 12 o'clock.
fn dial_point(degrees: f64, radius: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (radius * radians.sin(), radius * radians.cos())
}

/// Largest roughly square region centered in `area`; terminal cells are about
/// twice as tall as they are wide.
fn square_in(area: Rect) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let width = area.width.min(area.height.saturating_mul(2));
    let height = area.height.min((width + 1) / 2);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
