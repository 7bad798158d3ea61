//! Countdown and window title formatting.

use super::mode::Mode;

/// Format a number of seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so a 90 minute countdown reads `90:00`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Title shown while the countdown is running.
#[must_use]
pub fn window_title(remaining_seconds: u32, mode: Mode, original: &str) -> String {
    format!("{} - {mode} - {original}", format_clock(remaining_seconds))
}

/// Label of the start/pause control.
#[must_use]
pub const fn control_label(running: bool) -> &'static str {
    if running {
        "pause"
    } else {
        "start"
    }
}

/// Fraction of the countdown already elapsed, in `0.0..=1.0`.
#[must_use]
pub fn progress(remaining_seconds: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let remaining = f64::from(remaining_seconds.min(total_seconds));
    1.0 - remaining / f64::from(total_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5400), "90:00");
    }

    #[test]
    fn test_window_title() {
        assert_eq!(
            window_title(1499, Mode::Work, "pomodoro"),
            "24:59 - work - pomodoro"
        );
        assert_eq!(window_title(300, Mode::Short, "x"), "05:00 - short - x");
    }

    #[test]
    fn test_control_label() {
        assert_eq!(control_label(true), "pause");
        assert_eq!(control_label(false), "start");
    }

    #[test]
    fn test_progress() {
        assert!((progress(1500, 1500) - 0.0).abs() < f64::EPSILON);
        assert!((progress(750, 1500) - 0.5).abs() < 1e-9);
        assert!((progress(0, 1500) - 1.0).abs() < f64::EPSILON);
        assert!((progress(0, 0) - 1.0).abs() < f64::EPSILON);
    }
}
