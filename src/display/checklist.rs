//! Checklist display formatting
//!
//! Tasks are numbered by list position; the numbers are what
//! `checklist toggle` and `checklist remove` expect.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Task;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Task")]
    label: String,
    #[tabled(rename = "Group")]
    group: String,
}

/// Format the checklist as a table with a progress line
pub fn format_checklist(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Checklist is empty. Run 'birthwatch checklist reset' to restore the defaults."
            .to_string();
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow {
            number: i + 1,
            done: if task.done { "[x]" } else { "[ ]" },
            label: task.label.clone(),
            group: task.group.to_string(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output.push_str(&format_progress(tasks));
    output
}

/// `"3 of 16 done"`
pub fn format_progress(tasks: &[Task]) -> String {
    let done = tasks.iter().filter(|t| t.done).count();
    format!("{} of {} done", done, tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskGroup;

    #[test]
    fn test_empty_checklist() {
        assert!(format_checklist(&[]).contains("empty"));
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let mut tasks = vec![
            Task::new("Slippers", TaskGroup::ForMother),
            Task::new("Diapers", TaskGroup::ForBaby),
        ];
        tasks[1].toggle();

        let output = format_checklist(&tasks);
        assert!(output.contains("Slippers"));
        assert!(output.contains("For Baby"));
        assert!(output.contains("[x]"));
        assert!(output.ends_with("1 of 2 done"));
    }
}
