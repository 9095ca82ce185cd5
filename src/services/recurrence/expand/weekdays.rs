use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

use crate::models::recurrence::RecurrenceRule;

use super::utils::Occurrences;

/// Every `interval`-th day from Monday to Friday, starting at the first one on or after `dtstart`.
pub(super) fn generate(
    rule: &RecurrenceRule,
    dtstart: NaiveDateTime,
    occurrences: &mut Occurrences,
) {
    let mut current = if is_weekend(dtstart) {
        match next_weekday(dtstart) {
            Some(monday) => monday,
            None => return,
        }
    } else {
        dtstart
    };

    while occurrences.push(current) {
        match add_weekdays(current, rule.interval()) {
            Some(next) => current = next,
            None => break,
        }
    }
}

fn is_weekend(date: NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn next_weekday(date: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut next = date.checked_add_signed(Duration::days(1))?;
    while is_weekend(next) {
        next = next.checked_add_signed(Duration::days(1))?;
    }
    Some(next)
}

/// Move `count` weekdays forward from a weekday. Five weekdays are one whole week.
fn add_weekdays(date: NaiveDateTime, count: u32) -> Option<NaiveDateTime> {
    let mut next = date.checked_add_signed(Duration::weeks(i64::from(count / 5)))?;
    for _ in 0..count % 5 {
        next = next_weekday(next)?;
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::super::expand;
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_weekdays_skip_weekends() {
        let rule: RecurrenceRule = "FREQ=WEEKDAYS;COUNT=4;".parse().unwrap();
        // 2025-11-07 is a Friday
        let start = NaiveDate::from_ymd_opt(2025, 11, 7)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let days: Vec<u32> = expand(&rule, start, 100).iter().map(|dt| dt.day()).collect();
        assert_eq!(days, vec![7, 10, 11, 12]);
    }

    #[test]
    fn test_weekdays_interval() {
        let rule: RecurrenceRule = "FREQ=WEEKDAYS;INTERVAL=2;COUNT=3;".parse().unwrap();
        // Saturday start moves to Monday 2025-11-10
        let start = NaiveDate::from_ymd_opt(2025, 11, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let days: Vec<u32> = expand(&rule, start, 100).iter().map(|dt| dt.day()).collect();
        assert_eq!(days, vec![10, 12, 14]);
    }

    #[test]
    fn test_weekdays_large_interval_honours_count() {
        let rule: RecurrenceRule = "FREQ=WEEKDAYS;INTERVAL=5000;COUNT=3;".parse().unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let dates: Vec<NaiveDate> = expand(&rule, start, 100).iter().map(|dt| dt.date()).collect();
        // 5000 weekdays are exactly 1000 weeks
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2044, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2063, 5, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn test_add_weekdays_crosses_weekend() {
        // Friday 2025-11-07
        let friday = NaiveDate::from_ymd_opt(2025, 11, 7)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(add_weekdays(friday, 1).map(|dt| dt.day()), Some(10));
        assert_eq!(add_weekdays(friday, 7).map(|dt| dt.day()), Some(18));
    }
}
