use chrono::{Datelike, NaiveDate};

use crate::config::Phrases;
use crate::models::recurrence::RecurrenceRule;

use super::interval_phrase;

pub(super) fn describe(
    rule: &RecurrenceRule,
    start: Option<NaiveDate>,
    phrases: &Phrases,
    fragments: &mut Vec<String>,
) {
    fragments.push(interval_phrase(
        rule.interval(),
        &phrases.yearly,
        &phrases.years,
        phrases,
    ));

    let Some(start) = start else {
        return;
    };

    let month = phrases.month_name(rule.by_month().unwrap_or_else(|| start.month()));

    match (rule.by_month_day(), rule.by_day_nth_weekday()) {
        (Some(-1), _) => {
            fragments.push(format!(
                " {} {} {} {}",
                phrases.on_the, phrases.last_day, phrases.of, month
            ));
        }
        (_, Some(nth)) if nth.number > 0 => {
            fragments.push(format!(
                " {} {} {} {} {}",
                phrases.on_the,
                phrases.ordinal(nth.number),
                phrases.weekday_name(nth.weekday),
                phrases.of,
                month
            ));
        }
        (_, Some(nth)) if nth.is_last() => {
            fragments.push(format!(
                " {} {} {} {} {}",
                phrases.on_the,
                phrases.last,
                phrases.weekday_name(nth.weekday),
                phrases.of,
                month
            ));
        }
        (month_day, _) => {
            let day = month_day
                .filter(|day| *day > 0)
                .unwrap_or_else(|| start.day() as i32);
            fragments.push(format!(" {} {} {}", phrases.on, month, day));
        }
    }
}
