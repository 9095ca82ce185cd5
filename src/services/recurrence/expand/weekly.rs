use chrono::{Datelike, Duration, NaiveDateTime};

use crate::models::recurrence::RecurrenceRule;

use super::utils::{push_candidates, Occurrences};

pub(super) fn generate(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    occurrences: &mut Occurrences,
) {
    let mut weekdays = rule
        .by_day_weekdays()
        .map(<[_]>::to_vec)
        .unwrap_or_else(|| vec![dtstart.weekday()]);
    weekdays.sort_by_key(|day| day.num_days_from_monday());
    weekdays.dedup();

    let mut current_week_start =
        dtstart.date() - Duration::days(i64::from(dtstart.weekday().num_days_from_monday()));
    let step = Duration::weeks(i64::from(rule.interval()));

    loop {
        let candidates = weekdays
            .iter()
            .filter_map(|day| {
                current_week_start
                    .checked_add_signed(Duration::days(i64::from(day.num_days_from_monday())))
            })
            .collect();

        if !push_candidates(occurrences, candidates, dtstart) {
            break;
        }
        match current_week_start.checked_add_signed(step) {
            Some(next) => current_week_start = next,
            None => break,
        }
    }
}
