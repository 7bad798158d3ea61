//! Pomodoro timer.
//!
//! - `engine`: the countdown state machine and session counting
//! - `clock`: injected tick sources and calendar
//! - `store`: persistence of today's session count
//! - `notify` / `tone`: best-effort completion alerts
//! - `display`: `MM:SS` and window title formatting
//! - `summary`: read-only daily progress

pub mod clock;
pub mod display;
pub mod engine;
pub mod mode;
pub mod notify;
pub mod store;
pub mod summary;
pub mod tone;

pub use clock::{Clock, ManualClock, SystemClock, TickHandle};
pub use display::{format_clock, window_title};
pub use engine::{Collaborators, Completion, TimerEngine, TimerState, TICK_INTERVAL};
pub use mode::Mode;
pub use notify::{DesktopNotifier, Notice, Notifier, Permission, SilentNotifier};
pub use store::{sessions_today, MemoryStore, SessionRecord, SessionStore, SqliteStore};
pub use summary::DailySummary;
pub use tone::{PcmTonePlayer, SilentTone, Tone, TonePlayer};

use tracing::warn;

use crate::config::Config;

/// Build the production collaborators for `config`.
///
/// A database that cannot be opened degrades to an in-memory store, so the
/// timer still runs without persistence.
#[must_use]
pub fn collaborators(config: &Config) -> Collaborators {
    let store: Box<dyn SessionStore> = match SqliteStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "session storage unavailable, counts will not persist");
            Box::new(MemoryStore::new())
        }
    };

    let notifier: Box<dyn Notifier> = if config.alerts.notifications {
        Box::new(DesktopNotifier::new("pomodoro"))
    } else {
        Box::new(SilentNotifier)
    };

    let tone: Box<dyn TonePlayer> = if config.alerts.sound {
        Box::new(PcmTonePlayer::with_program(&config.alerts.player))
    } else {
        Box::new(SilentTone)
    };

    Collaborators {
        store,
        notifier,
        tone,
    }
}
