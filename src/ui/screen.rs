//! Countdown screen layout

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::{
    arc::{ring_geometry, sweep_degrees, RingArc},
    clock::format_clock,
    color::{Band, TRACK_COLOR},
};
use crate::state::CountdownState;

const CONTROLS_HEIGHT: u16 = 3;

/// Label of the Start/Pause button for the current phase
pub fn toggle_label(countdown: &CountdownState) -> &'static str {
    if countdown.is_running() {
        "Pause"
    } else {
        "Start"
    }
}

/// Draw the ring, the clock and the button row
pub fn render(frame: &mut Frame, countdown: &CountdownState) {
    let [ring_area, controls_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(CONTROLS_HEIGHT)])
            .areas(frame.area());

    render_ring(frame, ring_area, countdown);
    render_controls(frame, controls_area, countdown);
}

fn render_ring(frame: &mut Frame, area: Rect, countdown: &CountdownState) {
    let band = Band::for_remaining(countdown.remaining_millis(), countdown.total_millis());
    let sweep = sweep_degrees(countdown.remaining_millis(), countdown.total_millis());
    let (x_bounds, y_bounds, radius) = ring_geometry(area.width, area.height);

    let canvas = Canvas::default()
        .background_color(Color::Black)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius, color: TRACK_COLOR });
            ctx.layer();
            ctx.draw(&RingArc { x: 0.0, y: 0.0, radius, sweep, color: band.color() });
        });
    frame.render_widget(canvas, area);

    let clock_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    };
    let clock = Paragraph::new(Line::from(format_clock(countdown.remaining_millis())))
        .style(Style::default().fg(band.color()).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(clock, clock_area);
}

fn render_controls(frame: &mut Frame, area: Rect, countdown: &CountdownState) {
    let [reset_area, toggle_area] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);

    frame.render_widget(button("Reset", 'r'), reset_area);
    frame.render_widget(button(toggle_label(countdown), 's'), toggle_area);
}

fn button(label: &str, key: char) -> Paragraph<'static> {
    Paragraph::new(Line::from(format!("{} ({})", label, key)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}
