use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::models::recurrence::RecurrenceRule;
use crate::utils::date::{days_in_month, select_month_day, select_positional_weekday};

use super::MAX_IDLE_PERIODS;

/// Collects occurrences until COUNT, UNTIL or the caller's limit is reached.
pub(super) struct Occurrences {
    items: Vec<NaiveDateTime>,
    max: usize,
    until: Option<NaiveDateTime>,
    idle_periods: usize,
}

impl Occurrences {
    pub(super) fn new(rule: &RecurrenceRule, limit: usize) -> Self {
        let max = rule
            .count()
            .map_or(limit, |count| limit.min(count as usize));
        Self {
            items: Vec::new(),
            max,
            until: rule.until().map(|until| until.naive_utc()),
            idle_periods: 0,
        }
    }

    pub(super) fn is_full(&self) -> bool {
        self.items.len() >= self.max
    }

    /// Record an occurrence. Returns `false` once generation should stop.
    pub(super) fn push(&mut self, start: NaiveDateTime) -> bool {
        if let Some(until) = self.until {
            if start > until {
                return false;
            }
        }

        self.items.push(start);
        !self.is_full()
    }

    pub(super) fn into_vec(self) -> Vec<NaiveDateTime> {
        self.items
    }
}

/// Dates matching the rule's BYMONTHDAY / BYDAY parts within one month, in order.
/// Without either part the series start's day of month is used.
pub(super) fn month_candidates(
    rule: &RecurrenceRule,
    year: i32,
    month: u32,
    default_day: u32,
) -> Vec<NaiveDate> {
    if let Some(day) = rule.by_month_day() {
        return select_month_day(year, month, day).into_iter().collect();
    }

    if let Some(nth) = rule.by_day_nth_weekday() {
        return select_positional_weekday(year, month, nth.number, nth.weekday)
            .into_iter()
            .collect();
    }

    if let Some(days) = rule.by_day_weekdays() {
        let Some(len) = days_in_month(year, month) else {
            return Vec::new();
        };
        return (1..=len)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .filter(|date| days.contains(&date.weekday()))
            .collect();
    }

    NaiveDate::from_ymd_opt(year, month, default_day)
        .into_iter()
        .collect()
}

/// Push every candidate on or after `dtstart`. Returns `false` once generation should stop,
/// including after `MAX_IDLE_PERIODS` periods in a row that yield nothing.
pub(super) fn push_candidates(
    occurrences: &mut Occurrences,
    candidates: Vec<NaiveDate>,
    dtstart: NaiveDateTime,
) -> bool {
    let before = occurrences.items.len();
    for date in candidates {
        let start = date.and_time(dtstart.time());
        if start < dtstart {
            continue;
        }
        if !occurrences.push(start) {
            return false;
        }
    }

    if occurrences.items.len() > before {
        occurrences.idle_periods = 0;
        return true;
    }

    occurrences.idle_periods += 1;
    if occurrences.idle_periods >= MAX_IDLE_PERIODS {
        log::debug!("No occurrence in {} periods; stopping", MAX_IDLE_PERIODS);
        return false;
    }
    true
}

pub(super) fn days(interval: u32) -> Duration {
    Duration::days(i64::from(interval))
}
