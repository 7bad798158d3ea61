//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;
use crate::focus::{Clock, Mode};
use crate::tui::app::App;

/// How long to wait for input before letting ticks through.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const HELP: &str = "space:start/pause | r:reset | w/s/l:mode | e:label | q:quit";

/// Wait briefly for input and apply it.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock>(app: &mut App<C>) -> Result<(), PomodoroError> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}

/// Apply one key press.
///
/// While the label input has focus, printable keys are text, so the toggle,
/// reset and mode shortcuts do nothing.
pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.input_focused() {
        match key.code {
            KeyCode::Enter => app.commit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Char(c) => app.push_input(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Char('r' | 'R') => app.reset(),
        KeyCode::Char('w' | '1') => app.select_mode(Mode::Work),
        KeyCode::Char('s' | '2') => app.select_mode(Mode::Short),
        KeyCode::Char('l' | '3') => app.select_mode(Mode::Long),
        KeyCode::Char('e') => app.begin_input(),
        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => {}
    }
}
