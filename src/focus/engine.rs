//! The pomodoro state machine.
//!
//! [`TimerEngine`] owns the countdown and the daily session count. Everything
//! with side effects (storage, notifications, sound, time) is injected, and
//! every side effect is best effort: a failure is logged and the transition
//! completes anyway.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::clock::{Clock, TickHandle};
use super::display::{control_label, format_clock, progress, window_title};
use super::mode::Mode;
use super::notify::{Notice, Notifier, SilentNotifier};
use super::store::{sessions_today, MemoryStore, SessionRecord, SessionStore};
use super::tone::{SilentTone, Tone, TonePlayer};
use crate::config::TimerConfig;

/// Period of the countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Mutable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Selected mode.
    pub mode: Mode,
    /// Seconds left in the current countdown.
    pub remaining_seconds: u32,
    /// Whether the countdown is ticking.
    pub running: bool,
    /// Work sessions completed today.
    pub completed_sessions: u32,
    /// Day the session count belongs to, once known.
    pub last_saved_date: Option<NaiveDate>,
}

/// Report of a finished countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Mode whose countdown reached zero.
    pub finished: Mode,
    /// Mode the engine switched to. It is never started automatically.
    pub next: Mode,
    /// Session count after the completion.
    pub completed_sessions: u32,
}

impl Completion {
    /// One-line summary for a status bar.
    #[must_use]
    pub fn summary(&self) -> String {
        let notice = Notice::for_completed(self.finished);
        format!("{} {}", notice.title, notice.body)
    }
}

/// Injected side-effect capabilities.
pub struct Collaborators {
    /// Where the session count is persisted.
    pub store: Box<dyn SessionStore>,
    /// Desktop notifications.
    pub notifier: Box<dyn Notifier>,
    /// Audible cue.
    pub tone: Box<dyn TonePlayer>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            notifier: Box::new(SilentNotifier),
            tone: Box::new(SilentTone),
        }
    }
}

/// The pomodoro timer.
pub struct TimerEngine<C: Clock> {
    config: TimerConfig,
    state: TimerState,
    clock: C,
    tick_source: Option<TickHandle>,
    effects: Collaborators,
    tone: Tone,
    original_title: String,
    title: String,
}

impl<C: Clock> TimerEngine<C> {
    /// Create an engine in `work` mode, stopped, with the session count
    /// restored from the store when it was saved today.
    ///
    /// `original_title` is what the window title reverts to whenever the
    /// countdown is not running.
    pub fn new(
        config: TimerConfig,
        clock: C,
        mut effects: Collaborators,
        original_title: impl Into<String>,
    ) -> Self {
        let today = clock.today();
        let (completed_sessions, last_saved_date) = sessions_today(effects.store.as_ref(), today);

        let permission = effects.notifier.request_permission();
        debug!(?permission, "notification permission");

        let original_title = original_title.into();
        let engine = Self {
            config,
            state: TimerState {
                mode: Mode::Work,
                remaining_seconds: config.seconds(Mode::Work),
                running: false,
                completed_sessions,
                last_saved_date,
            },
            clock,
            tick_source: None,
            effects,
            tone: Tone::default(),
            title: original_title.clone(),
            original_title,
        };

        info!(
            completed_sessions,
            work_minutes = config.work_minutes,
            "timer initialized"
        );
        engine
    }

    /// Select `mode`, stopping the countdown first. Does not start.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!(%mode, "switching mode");
        if self.state.running {
            self.pause();
        }
        self.state.mode = mode;
        self.state.remaining_seconds = self.config.seconds(mode);
        self.refresh_title();
    }

    /// Start the countdown. Does nothing when already running.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }
        self.cancel_tick_source();
        let handle = self.clock.schedule_repeating(TICK_INTERVAL);
        self.tick_source = Some(handle);
        self.state.running = true;
        debug!(?handle, remaining = self.state.remaining_seconds, "timer started");
        self.refresh_title();
    }

    /// Stop the countdown and restore the original title. Safe to call when
    /// already stopped.
    pub fn pause(&mut self) {
        self.cancel_tick_source();
        if self.state.running {
            debug!(remaining = self.state.remaining_seconds, "timer paused");
        }
        self.state.running = false;
        self.title.clone_from(&self.original_title);
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and rewind the current mode. The mode and count are kept.
    pub fn reset(&mut self) {
        debug!("resetting timer");
        self.pause();
        self.state.remaining_seconds = self.config.seconds(self.state.mode);
        self.refresh_title();
    }

    /// Apply every tick the clock has fired since the last call.
    ///
    /// Stops early when a completion cancels the tick source, so leftover
    /// ticks never reach the next mode.
    pub fn pump(&mut self) -> Option<Completion> {
        let handle = self.tick_source?;
        let fired = self.clock.fired(handle);
        let mut completion = None;

        for _ in 0..fired {
            if self.tick_source != Some(handle) {
                break;
            }
            if let Some(done) = self.tick() {
                completion = Some(done);
            }
        }

        completion
    }

    /// Advance the countdown by one second.
    ///
    /// Ignored while stopped. Reaching zero triggers the completion
    /// transition exactly once.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.state.running {
            return None;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds == 0 {
            Some(self.complete())
        } else {
            self.refresh_title();
            None
        }
    }

    fn complete(&mut self) -> Completion {
        self.pause();
        let finished = self.state.mode;
        info!(%finished, "countdown complete");

        let next = if finished == Mode::Work {
            self.state.completed_sessions += 1;
            self.persist();
            self.config.break_after(self.state.completed_sessions)
        } else {
            Mode::Work
        };

        self.announce(finished);
        self.switch_mode(next);

        Completion {
            finished,
            next,
            completed_sessions: self.state.completed_sessions,
        }
    }

    fn persist(&mut self) {
        let record = SessionRecord {
            completed_sessions: self.state.completed_sessions,
            date: self.clock.today(),
        };
        match self.effects.store.write(&record) {
            Ok(()) => {
                self.state.last_saved_date = Some(record.date);
                debug!(?record, "session count saved");
            }
            Err(e) => warn!(error = %e, "failed to save session count"),
        }
    }

    fn announce(&self, finished: Mode) {
        if let Err(e) = self.effects.tone.play(&self.tone) {
            debug!(error = %e, "tone skipped");
        }
        if let Err(e) = self.effects.notifier.notify(&Notice::for_completed(finished)) {
            debug!(error = %e, "notification skipped");
        }
    }

    fn cancel_tick_source(&mut self) {
        if let Some(handle) = self.tick_source.take() {
            self.clock.cancel(handle);
        }
    }

    fn refresh_title(&mut self) {
        if self.state.running {
            self.title = window_title(
                self.state.remaining_seconds,
                self.state.mode,
                &self.original_title,
            );
        } else {
            self.title.clone_from(&self.original_title);
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Selected mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Seconds left.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Work sessions completed today.
    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.state.completed_sessions
    }

    /// The immutable durations.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Countdown as `MM:SS`.
    #[must_use]
    pub fn clock_text(&self) -> String {
        format_clock(self.state.remaining_seconds)
    }

    /// Label for the start/pause control.
    #[must_use]
    pub const fn control_label(&self) -> &'static str {
        control_label(self.state.running)
    }

    /// Elapsed fraction of the current countdown.
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress(
            self.state.remaining_seconds,
            self.config.seconds(self.state.mode),
        )
    }

    /// Window title as it should currently read.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title captured at startup.
    #[must_use]
    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    /// Access the clock, e.g. to advance a manual clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[cfg(test)]
    fn set_remaining(&mut self, seconds: u32) {
        self.state.remaining_seconds = seconds;
    }
}
