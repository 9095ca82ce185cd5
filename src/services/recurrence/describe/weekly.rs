use chrono::{Datelike, NaiveDate};

use crate::config::Phrases;
use crate::models::recurrence::RecurrenceRule;

use super::{interval_phrase, join_with_and};

/// Full weekday names are used for up to this many days, short names beyond.
const FULL_NAME_LIMIT: usize = 2;

pub(super) fn describe(
    rule: &RecurrenceRule,
    start: Option<NaiveDate>,
    phrases: &Phrases,
    fragments: &mut Vec<String>,
) {
    fragments.push(interval_phrase(
        rule.interval(),
        &phrases.weekly,
        &phrases.weeks,
        phrases,
    ));

    if let Some(days) = rule.by_day_weekdays() {
        let names: Vec<&str> = if days.len() <= FULL_NAME_LIMIT {
            days.iter().map(|day| phrases.weekday_name(*day)).collect()
        } else {
            days.iter().map(|day| phrases.weekday_short_name(*day)).collect()
        };
        fragments.push(format!(" {} {}", phrases.on, join_with_and(&names, &phrases.and)));
    } else if let Some(start) = start {
        fragments.push(format!(
            " {} {}",
            phrases.on,
            phrases.weekday_name(start.weekday())
        ));
    }
}
