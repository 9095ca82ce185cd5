use chrono::NaiveDateTime;

use crate::models::recurrence::{Frequency, RecurrenceRule};

mod daily;
mod monthly;
mod utils;
mod weekdays;
mod weekly;
mod yearly;

use utils::Occurrences;

/// Consecutive periods (weeks, months, years) without an occurrence before a search gives up.
const MAX_IDLE_PERIODS: usize = 10_000;

/// Expand `rule` into occurrence start times beginning at `dtstart`.
///
/// The series stops at COUNT, at UNTIL (inclusive, `dtstart` read as UTC), or after
/// `limit` occurrences, whichever comes first.
pub(super) fn expand(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    limit: usize,
) -> Vec<NaiveDateTime> {
    let Some(frequency) = rule.frequency() else {
        return Vec::new();
    };

    let mut occurrences = Occurrences::new(rule, limit);
    if occurrences.is_full() {
        return Vec::new();
    }

    match frequency {
        Frequency::Daily => daily::generate(rule, dtstart, &mut occurrences),
        Frequency::Weekdays => weekdays::generate(rule, dtstart, &mut occurrences),
        Frequency::Weekly => weekly::generate(rule, dtstart, &mut occurrences),
        Frequency::Monthly => monthly::generate(rule, dtstart, &mut occurrences),
        Frequency::Yearly => yearly::generate(rule, dtstart, &mut occurrences),
    }

    occurrences.into_vec()
}
