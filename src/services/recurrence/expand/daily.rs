use chrono::NaiveDateTime;

use crate::models::recurrence::RecurrenceRule;

use super::utils::{days, Occurrences};

pub(super) fn generate(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    occurrences: &mut Occurrences,
) {
    let step = days(rule.interval());
    let mut current = dtstart;

    while occurrences.push(current) {
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }
}
