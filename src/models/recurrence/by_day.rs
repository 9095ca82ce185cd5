use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use crate::utils::date::{weekday_code, weekday_from_code};

/// A weekday qualified by its signed position within the period, e.g. `4TH` or `-1FR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NthWeekday {
    pub number: i32,
    pub weekday: Weekday,
}

impl NthWeekday {
    pub fn new(number: i32, weekday: Weekday) -> Self {
        Self { number, weekday }
    }

    /// `true` when the position counts back from the end of the period.
    pub fn is_last(&self) -> bool {
        self.number < 0
    }
}

impl fmt::Display for NthWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, weekday_code(self.weekday))
    }
}

/// Input accepted when setting BYDAY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByDay {
    Weekdays(Vec<Weekday>),
    Nth(NthWeekday),
    /// A raw BYDAY value as found in a rule string.
    Raw(String),
}

impl From<NthWeekday> for ByDay {
    fn from(nth: NthWeekday) -> Self {
        Self::Nth(nth)
    }
}

impl From<Vec<Weekday>> for ByDay {
    fn from(days: Vec<Weekday>) -> Self {
        Self::Weekdays(days)
    }
}

impl From<&str> for ByDay {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

/// The canonical BYDAY string together with its two derived views.
/// At most one of `weekdays` and `nth` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DerivedByDay {
    pub canonical: Option<String>,
    pub weekdays: Option<Vec<Weekday>>,
    pub nth: Option<NthWeekday>,
}

impl ByDay {
    pub(crate) fn derive(self) -> DerivedByDay {
        match self {
            // Position zero names no day; keep it as the string a parse would see.
            Self::Nth(nth) if nth.number == 0 => derive_from_str(&nth.to_string()),
            Self::Nth(nth) => DerivedByDay {
                canonical: Some(nth.to_string()),
                weekdays: None,
                nth: Some(nth),
            },
            Self::Weekdays(days) if days.is_empty() => DerivedByDay::default(),
            Self::Weekdays(days) => DerivedByDay {
                canonical: Some(join_codes(&days)),
                weekdays: Some(days),
                nth: None,
            },
            Self::Raw(raw) => derive_from_str(&raw),
        }
    }
}

fn derive_from_str(raw: &str) -> DerivedByDay {
    let value = raw.trim();
    if value.is_empty() {
        return DerivedByDay::default();
    }

    if let Some(nth) = parse_nth_weekday(value) {
        return ByDay::Nth(nth).derive();
    }

    let days: Option<Vec<Weekday>> = value
        .split(',')
        .map(|code| weekday_from_code(code.trim()))
        .collect();

    match days {
        Some(days) => ByDay::Weekdays(days).derive(),
        None => {
            log::warn!("BYDAY value `{}` matches neither a weekday list nor an nth weekday", value);
            DerivedByDay {
                canonical: Some(value.to_string()),
                weekdays: None,
                nth: None,
            }
        }
    }
}

/// Parse `[+|-]N<code>`. Position zero is rejected.
fn parse_nth_weekday(value: &str) -> Option<NthWeekday> {
    if value.len() < 3 || !value.is_char_boundary(value.len() - 2) {
        return None;
    }

    let (position, code) = value.split_at(value.len() - 2);
    let number = position.parse::<i32>().ok().filter(|n| *n != 0)?;
    let weekday = weekday_from_code(code)?;
    Some(NthWeekday::new(number, weekday))
}

fn join_codes(days: &[Weekday]) -> String {
    days.iter()
        .map(|day| weekday_code(*day))
        .collect::<Vec<_>>()
        .join(",")
}
