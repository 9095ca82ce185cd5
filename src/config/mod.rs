// Configuration
// Parse mode and description phrases, loadable from TOML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";

/// How the parser treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Skip malformed parts, fall back to "now" for a bad UNTIL, and log a warning.
    #[default]
    Lenient,
    /// Report the first malformed part as an error.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub parse_mode: ParseMode,
    pub phrases: Phrases,
}

impl EngineConfig {
    /// Default phrases with strict parsing.
    pub fn strict() -> Self {
        Self {
            parse_mode: ParseMode::Strict,
            ..Self::default()
        }
    }

    /// Load configuration from `path`, or from the per-user config file when `path` is
    /// `None`. A missing per-user file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        log::debug!("Loaded recurrence config from {}", path.display());
        Ok(config)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "RustCalendar", "CalendarRecurrence")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Phrase templates used to describe a rule. Defaults are English; any subset may be
/// overridden from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrases {
    pub daily: String,
    pub weekly: String,
    pub every_weekday: String,
    pub monthly: String,
    pub yearly: String,
    pub every: String,
    pub days: String,
    pub weeks: String,
    pub weekdays: String,
    pub months: String,
    pub years: String,
    pub on: String,
    pub on_day: String,
    pub on_the: String,
    pub last_day: String,
    pub last: String,
    pub of: String,
    pub and: String,
    pub time: String,
    pub times: String,
    pub until: String,
    /// `first` .. `sixth`
    pub ordinals: Vec<String>,
    /// Monday first.
    pub weekday_names: Vec<String>,
    /// Monday first.
    pub weekday_short_names: Vec<String>,
    /// January first.
    pub month_names: Vec<String>,
    /// chrono format string for the UNTIL date.
    pub until_date_format: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            daily: "Daily".into(),
            weekly: "Weekly".into(),
            every_weekday: "Every weekday (Mon-Fri)".into(),
            monthly: "Monthly".into(),
            yearly: "Yearly".into(),
            every: "Every".into(),
            days: "days".into(),
            weeks: "weeks".into(),
            weekdays: "weekdays".into(),
            months: "months".into(),
            years: "years".into(),
            on: "on".into(),
            on_day: "on day".into(),
            on_the: "on the".into(),
            last_day: "last day".into(),
            last: "last".into(),
            of: "of".into(),
            and: "and".into(),
            time: "time".into(),
            times: "times".into(),
            until: "until".into(),
            ordinals: strings(&["first", "second", "third", "fourth", "fifth", "sixth"]),
            weekday_names: strings(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            weekday_short_names: strings(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            month_names: strings(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            until_date_format: "%-m/%-d/%Y".into(),
        }
    }
}

impl Phrases {
    pub fn weekday_name(&self, weekday: Weekday) -> &str {
        lookup(&self.weekday_names, weekday.num_days_from_monday() as usize)
    }

    pub fn weekday_short_name(&self, weekday: Weekday) -> &str {
        lookup(
            &self.weekday_short_names,
            weekday.num_days_from_monday() as usize,
        )
    }

    /// `month` is 1-based.
    pub fn month_name(&self, month: u32) -> &str {
        match (month as usize).checked_sub(1) {
            Some(index) => lookup(&self.month_names, index),
            None => "",
        }
    }

    /// Ordinal word for `n`, falling back to a numeric ordinal (`7th`) past the table.
    pub fn ordinal(&self, n: i32) -> String {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.ordinals.get(index))
            .cloned()
            .unwrap_or_else(|| numeric_ordinal(n))
    }
}

fn lookup(table: &[String], index: usize) -> &str {
    table.get(index).map(String::as_str).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn numeric_ordinal(n: i32) -> String {
    let suffix = match (n.rem_euclid(10), n.rem_euclid(100)) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
