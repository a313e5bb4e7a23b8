//! User settings for Birthwatch
//!
//! Display preferences, the TUI tick rate, and the hospital presets offered
//! by the setup wizard.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::BirthwatchPaths;
use crate::error::BirthwatchError;

/// A hospital the wizard offers as a one-keystroke choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalPreset {
    /// Display name
    pub name: String,
    /// Raw phone number, handed to the dialer unchanged
    pub phone: String,
}

impl HospitalPreset {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// User settings for Birthwatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Time format preference (strftime format)
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// How often the TUI timer view refreshes, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Hospitals offered in the wizard's hospital step
    #[serde(default)]
    pub hospital_presets: Vec<HospitalPreset>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_tick_rate_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            tick_rate_ms: default_tick_rate_ms(),
            hospital_presets: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BirthwatchPaths) -> Result<Self, BirthwatchError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BirthwatchError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BirthwatchError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BirthwatchPaths) -> Result<(), BirthwatchError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BirthwatchError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BirthwatchError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Combined date and time format for instants
    pub fn datetime_format(&self) -> String {
        format!("{} {}", self.date_format, self.time_format)
    }

    /// Reject date or time formats chrono cannot render
    pub fn validate(&self) -> Result<(), BirthwatchError> {
        check_format("date_format", &self.date_format)?;
        check_format("time_format", &self.time_format)
    }

    /// Tick rate as a `Duration`, never shorter than 100ms
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(100))
    }
}

fn check_format(name: &str, format: &str) -> Result<(), BirthwatchError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(BirthwatchError::Config(format!(
            "Invalid {} '{}' in settings file",
            name, format
        )));
    }
    Ok(())
}
