//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::focus::{Clock, Mode};
use crate::tui::app::App;

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Min(5),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_modes(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::Short => Color::Green,
        Mode::Long => Color::Blue,
    }
}

/// Render the mode indicator.
fn render_modes<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let current = app.engine.mode();

    let mut spans = Vec::new();
    for mode in Mode::ALL {
        let style = if mode == current {
            Style::default()
                .fg(Color::Black)
                .bg(mode_color(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", mode.display_name()), style));
        spans.push(Span::raw("  "));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color(current))),
        );

    frame.render_widget(header, area);
}

/// Render the countdown, session counter and label.
fn render_countdown<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let engine = &app.engine;
    let color = mode_color(engine.mode());

    let mut lines = vec![
        Line::from(Span::styled(
            engine.clock_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[ {} ]", engine.control_label()),
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::raw("Sessions today: "),
            Span::styled(
                engine.completed_sessions().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(ref input) = app.input {
        lines.push(Line::from(vec![
            Span::styled("Label: ", Style::default().fg(Color::Cyan)),
            Span::raw(input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]));
    } else if let Some(ref label) = app.label {
        lines.push(Line::from(Span::styled(
            label.as_str(),
            Style::default().fg(Color::Cyan),
        )));
    }

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(countdown, area);
}

/// Render the progress gauge.
fn render_progress<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let ratio = app.engine.progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(mode_color(app.engine.mode())))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | w/s/l:mode | e:label | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::TimerConfig;
    use crate::focus::{Collaborators, ManualClock, TimerEngine};

    fn screen(app: &App<ManualClock>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_shows_countdown_and_count() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        let mut app = App::new(TimerEngine::new(
            TimerConfig::default(),
            clock,
            Collaborators::default(),
            "pomodoro",
        ));
        app.label = Some("inbox zero".to_string());

        let text = screen(&app);
        assert!(text.contains("25:00"));
        assert!(text.contains("Sessions today: 0"));
        assert!(text.contains("Short Break"));
        assert!(text.contains("inbox zero"));
        assert!(text.contains("[ start ]"));
    }
}
