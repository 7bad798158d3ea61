//! Desktop notifications for completed countdowns.

use std::time::Duration;

use notify_rust::{Notification, Timeout};
#[cfg(all(unix, not(target_os = "macos")))]
use tracing::debug;

use super::mode::Mode;
use crate::error::PomodoroError;

/// How long a notification stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the startup permission probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Notifications can be shown.
    Granted,
    /// Notifications were refused or no notification service exists.
    Denied,
}

/// Message shown when a countdown finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Summary line.
    pub title: &'static str,
    /// Body text.
    pub body: &'static str,
}

impl Notice {
    /// Copy for the end of a countdown in `finished` mode.
    #[must_use]
    pub const fn for_completed(finished: Mode) -> Self {
        match finished {
            Mode::Work => Self {
                title: "Work session complete!",
                body: "Great job! Time for a break.",
            },
            Mode::Short | Mode::Long => Self {
                title: "Break time over!",
                body: "Break's over. Ready to lock in?",
            },
        }
    }
}

/// Shows notices to the user, best effort.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Ask once, at startup, whether notices may be shown.
    fn request_permission(&mut self) -> Permission;

    /// Show a notice.
    ///
    /// # Errors
    ///
    /// Returns an error when permission was denied or delivery failed.
    fn notify(&self, notice: &Notice) -> Result<(), PomodoroError>;
}

/// Notifier backed by the platform notification service.
#[derive(Debug)]
pub struct DesktopNotifier {
    app_name: String,
    permission: Option<Permission>,
}

impl DesktopNotifier {
    /// Create a notifier that labels notices with `app_name`.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            permission: None,
        }
    }
}

impl Notifier for DesktopNotifier {
    #[cfg(all(unix, not(target_os = "macos")))]
    fn request_permission(&mut self) -> Permission {
        let permission = match notify_rust::get_server_information() {
            Ok(info) => {
                debug!(server = %info.name, version = %info.version, "notification server found");
                Permission::Granted
            }
            Err(e) => {
                debug!(error = %e, "no notification server");
                Permission::Denied
            }
        };
        self.permission = Some(permission);
        permission
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn request_permission(&mut self) -> Permission {
        self.permission = Some(Permission::Granted);
        Permission::Granted
    }

    fn notify(&self, notice: &Notice) -> Result<(), PomodoroError> {
        if self.permission == Some(Permission::Denied) {
            return Err(PomodoroError::PermissionDenied(
                "notifications are not available".to_string(),
            ));
        }

        let timeout_ms = u32::try_from(NOTICE_TIMEOUT.as_millis()).unwrap_or(u32::MAX);
        Notification::new()
            .appname(&self.app_name)
            .summary(notice.title)
            .body(notice.body)
            .icon("alarm-clock")
            .timeout(Timeout::Milliseconds(timeout_ms))
            .show()
            .map(|_| ())
            .map_err(|e| PomodoroError::Unavailable(format!("notification failed: {e}")))
    }
}

/// Notifier used when notifications are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn notify(&self, _notice: &Notice) -> Result<(), PomodoroError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_copy() {
        let work = Notice::for_completed(Mode::Work);
        assert_eq!(work.title, "Work session complete!");
        assert_eq!(work.body, "Great job! Time for a break.");

        assert_eq!(Notice::for_completed(Mode::Short).title, "Break time over!");
        assert_eq!(
            Notice::for_completed(Mode::Long),
            Notice::for_completed(Mode::Short)
        );
    }

    #[test]
    fn test_denied_notifier_refuses() {
        let notifier = DesktopNotifier {
            app_name: "pomodoro".to_string(),
            permission: Some(Permission::Denied),
        };
        let result = notifier.notify(&Notice::for_completed(Mode::Work));
        assert!(matches!(result, Err(PomodoroError::PermissionDenied(_))));
    }

    #[test]
    fn test_silent_notifier() {
        let mut notifier = SilentNotifier;
        assert_eq!(notifier.request_permission(), Permission::Denied);
        assert!(notifier.notify(&Notice::for_completed(Mode::Long)).is_ok());
    }
}
