use chrono::{Datelike, NaiveDateTime};

use crate::models::recurrence::RecurrenceRule;
use crate::utils::date::advance_month;

use super::utils::{month_candidates, push_candidates, Occurrences};

pub(super) fn generate(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    occurrences: &mut Occurrences,
) {
    let (mut year, mut month) = (dtstart.year(), dtstart.month());

    loop {
        let candidates = if rule.by_month().is_some_and(|by_month| by_month != month) {
            Vec::new()
        } else {
            month_candidates(rule, year, month, dtstart.day())
        };
        if !push_candidates(occurrences, candidates, dtstart) {
            break;
        }

        match advance_month(year, month, i64::from(rule.interval())) {
            Some(next) => (year, month) = next,
            None => break,
        }
    }
}
