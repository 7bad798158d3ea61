//! Read-only view of a day's progress, for the `status` command.

use chrono::NaiveDate;
use serde::Serialize;

use super::mode::Mode;
use crate::config::TimerConfig;

/// Progress through the break cadence on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    /// Day being summarized.
    pub date: NaiveDate,
    /// Work sessions completed on `date`.
    pub completed_sessions: u32,
    /// Minutes of completed work sessions at the configured length.
    pub focused_minutes: u32,
    /// Break that follows the next completed work session.
    pub next_break: Mode,
    /// Work sessions left until the next long break, counting the next one.
    pub sessions_until_long_break: u32,
}

impl DailySummary {
    /// Summarize `completed_sessions` on `date` under `config`.
    #[must_use]
    pub fn new(config: &TimerConfig, date: NaiveDate, completed_sessions: u32) -> Self {
        let interval = config.long_break_interval.max(1);
        Self {
            date,
            completed_sessions,
            focused_minutes: completed_sessions.saturating_mul(config.work_minutes),
            next_break: config.break_after(completed_sessions.saturating_add(1)),
            sessions_until_long_break: interval - completed_sessions % interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_fresh_day() {
        let summary = DailySummary::new(&TimerConfig::default(), date(), 0);
        assert_eq!(summary.focused_minutes, 0);
        assert_eq!(summary.next_break, Mode::Short);
        assert_eq!(summary.sessions_until_long_break, 4);
    }

    #[test]
    fn test_long_break_next() {
        let summary = DailySummary::new(&TimerConfig::default(), date(), 3);
        assert_eq!(summary.focused_minutes, 75);
        assert_eq!(summary.next_break, Mode::Long);
        assert_eq!(summary.sessions_until_long_break, 1);
    }

    #[test]
    fn test_cycle_restarts_after_long_break() {
        let summary = DailySummary::new(&TimerConfig::default(), date(), 4);
        assert_eq!(summary.next_break, Mode::Short);
        assert_eq!(summary.sessions_until_long_break, 4);
    }

    #[test]
    fn test_custom_interval() {
        let config = TimerConfig {
            long_break_interval: 2,
            work_minutes: 50,
            ..TimerConfig::default()
        };
        let summary = DailySummary::new(&config, date(), 1);
        assert_eq!(summary.next_break, Mode::Long);
        assert_eq!(summary.focused_minutes, 50);
        assert_eq!(summary.sessions_until_long_break, 1);
    }
}
