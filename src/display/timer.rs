//! Labor timer display formatting

use chrono::{DateTime, Local};

use crate::models::{Reading, WarningLevel};

/// Marker shown before the warning level
pub fn level_marker(level: WarningLevel) -> &'static str {
    match level {
        WarningLevel::None => "",
        WarningLevel::Elevated => "! ",
        WarningLevel::Critical => "!! ",
    }
}

/// Format a timer reading
///
/// `started_at` is the stored reference instant, or `None` if the timer was
/// never started. `datetime_format` renders it.
pub fn format_timer(
    reading: &Reading,
    started_at: Option<DateTime<Local>>,
    datetime_format: &str,
) -> String {
    let Some(started_at) = started_at else {
        return "Timer not started. Run 'birthwatch timer start' when the waters break."
            .to_string();
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Waters broke:  {}\n",
        started_at.format(datetime_format)
    ));

    if !reading.elapsed.started {
        output.push_str("Elapsed:       00:00:00 (start time is in the future)\n");
        return output;
    }

    output.push_str(&format!("Elapsed:       {}\n", reading.elapsed));
    output.push_str(&format!(
        "Warning:       {}{} ({})\n",
        level_marker(reading.level),
        reading.level,
        reading.level.advice()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Elapsed;
    use chrono::TimeZone;

    fn started() -> Option<DateTime<Local>> {
        Local.with_ymd_and_hms(2026, 2, 22, 6, 15, 0).single()
    }

    #[test]
    fn test_not_started() {
        let reading = Reading {
            elapsed: Elapsed::not_started(),
            level: WarningLevel::None,
        };
        assert!(format_timer(&reading, None, "%Y-%m-%d %H:%M").contains("not started"));
    }

    #[test]
    fn test_elevated_reading() {
        let reading = Reading {
            elapsed: Elapsed::from_millis(18 * 3_600_000),
            level: WarningLevel::Elevated,
        };
        let output = format_timer(&reading, started(), "%Y-%m-%d %H:%M");
        assert!(output.contains("18:00:00"));
        assert!(output.contains("elevated"));
        assert!(output.contains("call the hospital"));
    }

    #[test]
    fn test_future_start() {
        let reading = Reading {
            elapsed: Elapsed::not_started(),
            level: WarningLevel::None,
        };
        let output = format_timer(&reading, started(), "%Y-%m-%d %H:%M");
        assert!(output.contains("in the future"));
    }

    #[test]
    fn test_start_uses_date_format() {
        let reading = Reading {
            elapsed: Elapsed::from_millis(3_600_000),
            level: WarningLevel::None,
        };
        let output = format_timer(&reading, started(), "%d.%m.%Y %H:%M");
        assert!(output.contains("Waters broke:  22.02.2026 06:15"));
    }
}
