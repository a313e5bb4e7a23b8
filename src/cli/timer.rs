//! Labor timer CLI commands

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_timer;
use crate::error::{BirthwatchError, BirthwatchResult};
use crate::models::{Elapsed, Reading, WarningLevel};
use crate::services::{Clock, ElapsedTimeMonitor, SystemClock};
use crate::storage::Storage;

/// Local date-time layouts accepted besides RFC 3339
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Timer subcommands
#[derive(Subcommand)]
pub enum TimerCommands {
    /// Record when the waters broke (defaults to now)
    Start {
        /// When it happened (RFC 3339 or local "YYYY-MM-DD HH:MM")
        #[arg(long)]
        at: Option<String>,
        /// Replace an existing start time
        #[arg(short, long)]
        force: bool,
    },
    /// Show elapsed time and the warning level
    Show {
        /// Evaluate at this instant instead of now
        #[arg(long)]
        now: Option<String>,
    },
    /// Forget the recorded start time
    Clear,
}

/// Handle a timer command
pub fn handle_timer_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TimerCommands,
) -> BirthwatchResult<()> {
    match cmd {
        TimerCommands::Start { at, force } => {
            if let Some(existing) = ElapsedTimeMonitor::from_settings(&storage.settings)? {
                if !force {
                    return Err(BirthwatchError::Validation(format!(
                        "Timer already started at {}; use --force to replace it",
                        format_local(&existing, settings)
                    )));
                }
            }

            let monitor = match at {
                Some(input) => ElapsedTimeMonitor::from_datetime(parse_instant(&input)?),
                None => ElapsedTimeMonitor::new(SystemClock.now_ms()),
            };
            storage.settings.set_water_broke_at(monitor.reference_ms())?;

            println!("Timer started at {}", format_local(&monitor, settings));
        }

        TimerCommands::Show { now } => {
            let now_ms = match now {
                Some(input) => parse_instant(&input)?.timestamp_millis(),
                None => SystemClock.now_ms(),
            };

            match ElapsedTimeMonitor::from_settings(&storage.settings)? {
                Some(monitor) => {
                    let reading = monitor.poll(now_ms);
                    let started_at = monitor.reference_time().map(|t| t.with_timezone(&Local));
                    print!("{}", format_timer(&reading, started_at, &settings.datetime_format()));
                }
                None => {
                    let reading = Reading {
                        elapsed: Elapsed::not_started(),
                        level: WarningLevel::None,
                    };
                    println!("{}", format_timer(&reading, None, &settings.datetime_format()));
                }
            }
        }

        TimerCommands::Clear => {
            if storage.settings.clear_water_broke_at()? {
                println!("Timer cleared.");
            } else {
                println!("Timer was not running.");
            }
        }
    }

    Ok(())
}

/// Parse an instant given as RFC 3339 or as local date and time
pub fn parse_instant(input: &str) -> BirthwatchResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    BirthwatchError::Validation(format!("'{}' does not exist in local time", input))
                });
        }
    }

    Err(BirthwatchError::Validation(format!(
        "Invalid time '{}'. Use RFC 3339 or 'YYYY-MM-DD HH:MM'",
        input
    )))
}

fn format_local(monitor: &ElapsedTimeMonitor, settings: &Settings) -> String {
    match monitor.reference_time() {
        Some(t) => t
            .with_timezone(&Local)
            .format(&settings.datetime_format())
            .to_string(),
        None => monitor.reference_ms().to_string(),
    }
}
