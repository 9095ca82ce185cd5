use crate::config::Phrases;
use crate::models::recurrence::RecurrenceRule;

use super::interval_phrase;

pub(super) fn describe(rule: &RecurrenceRule, phrases: &Phrases, fragments: &mut Vec<String>) {
    fragments.push(interval_phrase(
        rule.interval(),
        &phrases.every_weekday,
        &phrases.weekdays,
        phrases,
    ));
}
