use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::RecurrenceError;

/// Recurrence frequency. `Weekdays` is a non-standard extension meaning Monday to Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Weekdays,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn to_rrule_freq(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Weekdays => "WEEKDAYS",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    pub fn from_rrule_freq(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Some(Self::Daily),
            "WEEKLY" => Some(Self::Weekly),
            "WEEKDAYS" => Some(Self::Weekdays),
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn all() -> [Self; 5] {
        [
            Self::Daily,
            Self::Weekly,
            Self::Weekdays,
            Self::Monthly,
            Self::Yearly,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_rrule_freq())
    }
}

impl FromStr for Frequency {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rrule_freq(s).ok_or_else(|| RecurrenceError::UnknownFrequency(s.to_string()))
    }
}
