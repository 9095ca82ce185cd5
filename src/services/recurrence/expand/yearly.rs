use chrono::{Datelike, NaiveDateTime};

use crate::models::recurrence::RecurrenceRule;

use super::utils::{month_candidates, push_candidates, Occurrences};

pub(super) fn generate(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    occurrences: &mut Occurrences,
) {
    let month = rule.by_month().unwrap_or_else(|| dtstart.month());
    let step = i32::try_from(rule.interval()).unwrap_or(i32::MAX);
    let mut year = dtstart.year();

    loop {
        let candidates = month_candidates(rule, year, month, dtstart.day());
        if !push_candidates(occurrences, candidates, dtstart) {
            break;
        }

        match year.checked_add(step) {
            Some(next) => year = next,
            None => break,
        }
    }
}
