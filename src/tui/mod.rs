//! Terminal User Interface (TUI) for pomodoro.
//!
//! Full-screen countdown built with ratatui and crossterm. The terminal
//! window title mirrors the countdown while it runs.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io::{self, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use crate::error::PomodoroError;
use crate::focus::{Clock, SystemClock, TimerEngine};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(engine: TimerEngine<SystemClock>) -> Result<(), PomodoroError> {
    enable_raw_mode().map_err(|e| PomodoroError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout, || {
        disable_raw_mode().ok();
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();
        PomodoroError::Config(format!("Failed to create terminal: {e}"))
    })?;

    let mut app = App::new(engine);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetTitle(app.engine.original_title()),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    tracing::info!(
        completed_sessions = app.engine.completed_sessions(),
        "session ended"
    );
    result
}

/// Switch `out` to the alternate screen, calling `undo_raw` if that fails so
/// the shell is not left in raw mode.
fn enter_screen<W: Write>(out: &mut W, undo_raw: impl FnOnce()) -> Result<(), PomodoroError> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        undo_raw();
        PomodoroError::Config(format!("Failed to setup terminal: {e}"))
    })
}

/// Run the main application loop.
fn run_app<B: Backend + Write, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
) -> Result<(), PomodoroError> {
    let mut shown_title = String::new();

    while !app.should_quit {
        app.on_tick();

        if app.engine.title() != shown_title {
            shown_title = app.engine.title().to_string();
            execute!(terminal.backend_mut(), SetTitle(&shown_title))?;
        }

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomodoroError::Config(format!("Failed to draw: {e}")))?;

        event::handle_events(app)?;
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_screen_setup_leaves_raw_mode() {
        let mut undone = false;
        let result = enter_screen(&mut ClosedPipe, || undone = true);
        assert!(matches!(result, Err(PomodoroError::Config(_))));
        assert!(undone);
    }

    #[test]
    fn test_screen_setup_keeps_raw_mode() {
        let mut out = Vec::new();
        let mut undone = false;
        enter_screen(&mut out, || undone = true).unwrap();
        assert!(!undone);
        assert!(!out.is_empty());
    }
}
