use crate::config::Phrases;
use crate::models::recurrence::RecurrenceRule;

use super::interval_phrase;

pub(super) fn describe(rule: &RecurrenceRule, phrases: &Phrases, fragments: &mut Vec<String>) {
    fragments.push(interval_phrase(
        rule.interval(),
        &phrases.monthly,
        &phrases.months,
        phrases,
    ));

    match (rule.by_month_day(), rule.by_day_nth_weekday()) {
        (Some(day), _) if day > 0 => {
            fragments.push(format!(" {} {}", phrases.on_day, day));
        }
        (Some(-1), _) => {
            fragments.push(format!(" {} {}", phrases.on_the, phrases.last_day));
        }
        (_, Some(nth)) if nth.number > 0 => {
            fragments.push(format!(
                " {} {} {}",
                phrases.on_the,
                phrases.ordinal(nth.number),
                phrases.weekday_name(nth.weekday)
            ));
        }
        (_, Some(nth)) if nth.is_last() => {
            fragments.push(format!(
                " {} {} {}",
                phrases.on_the,
                phrases.last,
                phrases.weekday_name(nth.weekday)
            ));
        }
        _ => {}
    }
}
