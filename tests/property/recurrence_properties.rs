// Property-based tests for recurrence rules
// Builds rules from random valid setter calls and checks the rule invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use calendar_recurrence::{ByDay, Frequency, NthWeekday, RecurrenceRule};
use chrono::{TimeZone, Utc, Weekday};
use proptest::prelude::*;

fn frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::all().to_vec())
}

fn weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ])
}

fn by_day() -> impl Strategy<Value = ByDay> {
    prop_oneof![
        prop::collection::vec(weekday(), 1..=7).prop_map(ByDay::Weekdays),
        ((1..=5i32).prop_union(-5..=-1i32), weekday())
            .prop_map(|(number, weekday)| ByDay::Nth(NthWeekday::new(number, weekday))),
    ]
}

fn month_day() -> impl Strategy<Value = i32> {
    (1..=31i32).prop_union(-31..=-1i32)
}

#[derive(Debug, Clone)]
enum End {
    Open,
    Count(u32),
    Until(i64),
}

fn end() -> impl Strategy<Value = End> {
    prop_oneof![
        Just(End::Open),
        (1..1000u32).prop_map(End::Count),
        // 2000-01-01 .. 2100-01-01, whole seconds
        (946_684_800i64..4_102_444_800i64).prop_map(End::Until),
    ]
}

fn rule() -> impl Strategy<Value = RecurrenceRule> {
    (
        frequency(),
        1..50u32,
        prop::option::of(by_day()),
        prop::option::of(month_day()),
        prop::option::of(1..=12u32),
        end(),
    )
        .prop_map(|(freq, interval, by_day, month_day, month, end)| {
            let mut rule = RecurrenceRule::with_frequency(freq);
            rule.set_interval(interval).unwrap();
            // Only one of BYDAY / BYMONTHDAY survives; pick by presence of month_day
            match (by_day, month_day) {
                (_, Some(day)) => rule.set_by_month_day(day).unwrap(),
                (Some(by_day), None) => rule.set_by_day(by_day),
                (None, None) => {}
            }
            if let Some(month) = month {
                rule.set_by_month(month).unwrap();
            }
            match end {
                End::Open => {}
                End::Count(count) => rule.set_count(count).unwrap(),
                End::Until(secs) => rule.set_until(Utc.timestamp_opt(secs, 0).unwrap()),
            }
            rule
        })
}

proptest! {
    /// Property: serializing then parsing reproduces the rule
    #[test]
    fn prop_round_trip(rule in rule()) {
        let parsed: RecurrenceRule = rule.to_string().parse().unwrap();
        prop_assert_eq!(parsed, rule);
    }

    /// Property: INTERVAL=1 is never written
    #[test]
    fn prop_interval_one_is_omitted(rule in rule()) {
        let rule_string = rule.to_string();
        prop_assert!(!rule_string.contains("INTERVAL=1;"));
        prop_assert_eq!(rule_string.contains("INTERVAL="), rule.interval() != 1);
    }

    /// Property: COUNT and UNTIL exclude each other after any setter call
    #[test]
    fn prop_count_until_exclusive(mut rule in rule(), count in 1..100u32, secs in 0i64..4_000_000_000i64) {
        rule.set_count(count).unwrap();
        prop_assert!(rule.until().is_none());
        rule.set_until(Utc.timestamp_opt(secs, 0).unwrap());
        prop_assert!(rule.count().is_none());
    }

    /// Property: BYDAY and BYMONTHDAY exclude each other after any setter call
    #[test]
    fn prop_by_day_month_day_exclusive(mut rule in rule(), by_day in by_day(), day in month_day()) {
        rule.set_by_day(by_day);
        prop_assert!(rule.by_month_day().is_none());
        prop_assert!(rule.by_day().is_some());
        rule.set_by_month_day(day).unwrap();
        prop_assert!(rule.by_day().is_none());
        prop_assert!(rule.by_day_weekdays().is_none());
        prop_assert!(rule.by_day_nth_weekday().is_none());
    }

    /// Property: at most one BYDAY view is derived
    #[test]
    fn prop_single_by_day_view(rule in rule()) {
        prop_assert!(rule.by_day_weekdays().is_none() || rule.by_day_nth_weekday().is_none());
    }

    /// Property: changing frequency yields a fresh rule
    #[test]
    fn prop_frequency_reset(mut rule in rule(), freq in frequency()) {
        rule.set_frequency(freq);
        prop_assert_eq!(rule, RecurrenceRule::with_frequency(freq));
    }

    /// Property: parsing never panics on arbitrary input in lenient mode
    #[test]
    fn prop_lenient_parse_never_fails(input in "[A-Z=;,0-9+-]{0,40}") {
        prop_assert!(input.parse::<RecurrenceRule>().is_ok());
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;
    use fixtures::rules;

    #[test]
    fn test_fixture_rules_are_canonical() {
        for rule_string in rules::all() {
            let rule: RecurrenceRule = rule_string.parse().unwrap();
            assert_eq!(rule.to_string(), rule_string);
        }
    }
}
