//! Due date display formatting

use crate::services::DueDateStatus;

pub fn format_due_status(status: &DueDateStatus, date_format: &str) -> String {
    let countdown = match status.days_remaining {
        0 => "Due today".to_string(),
        1 => "1 day to go".to_string(),
        n if n > 1 => format!("{} days to go", n),
        -1 => "1 day overdue".to_string(),
        n => format!("{} days overdue", -n),
    };

    format!(
        "Due date:  {}\nPregnancy: {} (trimester {})\n{}",
        status.due_date.format(date_format),
        status.gestational_age,
        status.trimester,
        countdown
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GestationalAge;
    use chrono::NaiveDate;

    fn status(days_remaining: i64) -> DueDateStatus {
        DueDateStatus {
            due_date: NaiveDate::from_ymd_opt(2026, 2, 21).unwrap(),
            gestational_age: GestationalAge { weeks: 38, days: 0 },
            days_remaining,
            trimester: 3,
        }
    }

    #[test]
    fn test_countdown_wording() {
        assert!(format_due_status(&status(14), "%Y-%m-%d").contains("14 days to go"));
        assert!(format_due_status(&status(0), "%Y-%m-%d").contains("Due today"));
        assert!(format_due_status(&status(-3), "%Y-%m-%d").contains("3 days overdue"));
    }

    #[test]
    fn test_includes_date_and_age() {
        let output = format_due_status(&status(14), "%d.%m.%Y");
        assert!(output.contains("21.02.2026"));
        assert!(output.contains("38w0d"));
    }
}
