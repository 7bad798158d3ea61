//! Application state for the TUI.

use crate::focus::{Clock, Completion, Mode, TimerEngine};

/// Application state.
pub struct App<C: Clock> {
    /// The timer.
    pub engine: TimerEngine<C>,
    /// What the user is focusing on, shown under the countdown.
    pub label: Option<String>,
    /// Label text being typed, while the input field has focus.
    pub input: Option<String>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    /// Create a new app instance.
    pub fn new(engine: TimerEngine<C>) -> Self {
        Self {
            engine,
            label: None,
            input: None,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Whether keystrokes go to the label input.
    #[must_use]
    pub const fn input_focused(&self) -> bool {
        self.input.is_some()
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.engine.toggle();
        self.status = Some(if self.engine.is_running() {
            format!("{} started", self.engine.mode().display_name())
        } else {
            "Paused".to_string()
        });
    }

    /// Rewind the current mode.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.status = Some("Reset".to_string());
    }

    /// Switch to `mode`.
    pub fn select_mode(&mut self, mode: Mode) {
        self.engine.switch_mode(mode);
        self.status = Some(format!("{} selected", mode.display_name()));
    }

    /// Let pending ticks through to the engine.
    pub fn on_tick(&mut self) {
        if let Some(done) = self.engine.pump() {
            self.on_completion(done);
        }
    }

    fn on_completion(&mut self, done: Completion) {
        self.status = Some(format!(
            "{} Next: {}, press space to start.",
            done.summary(),
            done.next.display_name()
        ));
    }

    /// Give focus to the label input, prefilled with the current label.
    pub fn begin_input(&mut self) {
        self.input = Some(self.label.clone().unwrap_or_default());
        self.status = Some("Type a label, Enter to save, Esc to cancel".to_string());
    }

    /// Append a character to the label being typed.
    pub fn push_input(&mut self, c: char) {
        if let Some(input) = self.input.as_mut() {
            input.push(c);
        }
    }

    /// Remove the last character of the label being typed.
    pub fn pop_input(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.pop();
        }
    }

    /// Save the typed label and release focus.
    pub fn commit_input(&mut self) {
        if let Some(input) = self.input.take() {
            let trimmed = input.trim();
            self.label = (!trimmed.is_empty()).then(|| trimmed.to_string());
            self.status = None;
        }
    }

    /// Discard the typed label and release focus.
    pub fn cancel_input(&mut self) {
        self.input = None;
        self.status = None;
    }
}
