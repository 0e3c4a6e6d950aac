//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::oscillator::Direction;

use super::state::AppState;

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress gauge
            Constraint::Length(3), // Status message
            Constraint::Length(3), // Direction / elapsed info
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_gauge(state, frame, chunks[1]);
    render_message(state, frame, chunks[2]);
    render_info(state, frame, chunks[3]);
    render_footer(frame, chunks[5]);
}

/// Render the header bar
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Progress Bar Demo",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the sweeping progress gauge with the percentage overlaid
fn render_gauge(state: &AppState, frame: &mut Frame, area: Rect) {
    let progress = state.progress();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress as u16)
        .label(format!("{}%", progress));

    frame.render_widget(gauge, area);
}

/// Render the current status message
fn render_message(state: &AppState, frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(Line::from(Span::styled(
        state.message(),
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Status "));

    frame.render_widget(message, area);
}

/// Render the direction and elapsed-time info line
fn render_info(state: &AppState, frame: &mut Frame, area: Rect) {
    let direction_color = match state.direction() {
        Direction::Forward => Color::Green,
        Direction::Backward => Color::Magenta,
    };

    let info = Paragraph::new(Line::from(vec![
        Span::raw("Direction: "),
        Span::styled(
            state.direction().as_str(),
            Style::default().fg(direction_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ Elapsed: "),
        Span::styled(
            format!("{}s", state.elapsed_seconds),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(info, area);
}

/// Render the footer hint
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "q/Esc: quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
