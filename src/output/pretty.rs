use colored::Colorize;

use crate::config::Config;
use crate::error::PomodoroError;
use crate::focus::{DailySummary, Mode};

/// Format a daily summary for the terminal
pub fn format_status_pretty(summary: &DailySummary) -> String {
    let mut output = format!("{} ({})\n", "Today".bold(), summary.date);
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  Sessions completed:  {}\n",
        summary.completed_sessions.to_string().yellow().bold()
    ));
    output.push_str(&format!("  Focused:             {} min\n", summary.focused_minutes));

    let next = match summary.next_break {
        Mode::Long => summary.next_break.display_name().blue(),
        _ => summary.next_break.display_name().green(),
    };
    output.push_str(&format!("  Next break:          {next}\n"));

    let sessions = if summary.sessions_until_long_break == 1 {
        "session"
    } else {
        "sessions"
    };
    output.push_str(&format!(
        "  Long break in:       {} {sessions}",
        summary.sessions_until_long_break
    ));

    output
}

/// Format the configuration as YAML, the same shape as the config file
///
/// # Errors
///
/// Returns `PomodoroError::Config` if YAML serialization fails.
pub fn format_config_pretty(config: &Config) -> Result<String, PomodoroError> {
    serde_yaml::to_string(config)
        .map(|yaml| yaml.trim_end().to_string())
        .map_err(|e| PomodoroError::Config(format!("Failed to serialize config: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::config::TimerConfig;

    #[test]
    fn test_status_pretty() {
        colored::control::set_override(false);
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let text = format_status_pretty(&DailySummary::new(&TimerConfig::default(), date, 3));

        assert!(text.starts_with("Today (2024-05-20)"));
        assert!(text.contains("Sessions completed:  3"));
        assert!(text.contains("Focused:             75 min"));
        assert!(text.contains("Next break:          Long Break"));
        assert!(text.ends_with("1 session"));
    }

    #[test]
    fn test_config_pretty_is_loadable_yaml() {
        let text = format_config_pretty(&Config::default()).unwrap();
        assert!(text.contains("work_minutes: 25"));
        let back: Config = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }
}
