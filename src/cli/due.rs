//! Due date CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_due_status;
use crate::error::{BirthwatchError, BirthwatchResult};
use crate::models::pregnancy::parse_date;
use crate::services::DueDateService;
use crate::storage::Storage;

/// Due date subcommands
#[derive(Subcommand)]
pub enum DueCommands {
    /// Set the due date (YYYY-MM-DD)
    Set {
        date: String,
    },
    /// Derive the due date from the first day of the last period
    Lmp {
        /// First day of the last period (YYYY-MM-DD)
        date: String,
    },
    /// Show the due date, countdown and gestational age
    Show {
        /// Evaluate on this day instead of today
        #[arg(long)]
        today: Option<String>,
    },
}

pub fn handle_due_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DueCommands,
) -> BirthwatchResult<()> {
    let service = DueDateService::new(storage);

    match cmd {
        DueCommands::Set { date } => {
            let due = service.set_due_date(require_date(&date)?)?;
            println!("Due date set to {}", due.format(&settings.date_format));
        }
        DueCommands::Lmp { date } => {
            let due = service.set_from_lmp(require_date(&date)?)?;
            println!("Due date set to {}", due.format(&settings.date_format));
        }
        DueCommands::Show { today } => {
            let today = match today {
                Some(input) => require_date(&input)?,
                None => Local::now().date_naive(),
            };

            match service.status(today)? {
                Some(status) => println!("{}", format_due_status(&status, &settings.date_format)),
                None => println!("No due date set. Run 'birthwatch due set YYYY-MM-DD'."),
            }
        }
    }

    Ok(())
}

fn require_date(input: &str) -> BirthwatchResult<NaiveDate> {
    parse_date(input).ok_or_else(|| {
        BirthwatchError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input.trim()))
    })
}
