use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::Phrases;
use crate::models::recurrence::{Frequency, RecurrenceRule};

mod daily;
mod monthly;
mod weekdays;
mod weekly;
mod yearly;

/// Describe `rule` in words. `start` supplies weekday and month names where the rule
/// itself does not.
pub(super) fn describe(
    rule: &RecurrenceRule,
    start: Option<NaiveDate>,
    phrases: &Phrases,
) -> String {
    let mut fragments = Vec::new();

    match rule.frequency() {
        Some(Frequency::Daily) => daily::describe(rule, phrases, &mut fragments),
        Some(Frequency::Weekly) => weekly::describe(rule, start, phrases, &mut fragments),
        Some(Frequency::Weekdays) => weekdays::describe(rule, phrases, &mut fragments),
        Some(Frequency::Monthly) => monthly::describe(rule, phrases, &mut fragments),
        Some(Frequency::Yearly) => yearly::describe(rule, start, phrases, &mut fragments),
        None => {}
    }

    if let Some(count) = rule.count() {
        let unit = if count == 1 { &phrases.time } else { &phrases.times };
        fragments.push(format!(", {} {}", count, unit));
    }

    if let Some(until) = rule.until() {
        fragments.push(format!(
            ", {} {}",
            phrases.until,
            format_until_date(&until, &phrases.until_date_format)
        ));
    }

    fragments.concat()
}

/// "Weekly" for an interval of one, "Every 3 weeks" otherwise.
fn interval_phrase(interval: u32, single: &str, unit: &str, phrases: &Phrases) -> String {
    if interval == 1 {
        single.to_string()
    } else {
        format!("{} {} {}", phrases.every, interval, unit)
    }
}

/// "a", "a and b", "a, b and c".
fn join_with_and(items: &[&str], and: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} {} {}", init.join(", "), and, last),
    }
}

// A bad user-supplied format must not panic inside Display.
fn format_until_date(until: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", until.format(format)).is_err() {
        log::warn!("Invalid until_date_format `{}`, using ISO dates", format);
        out = until.format("%Y-%m-%d").to_string();
    }
    out
}
