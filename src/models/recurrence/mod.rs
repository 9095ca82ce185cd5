// Recurrence module
// Structured RRULE state with invariant-preserving transitions

mod by_day;
mod error;
mod frequency;

pub use by_day::{ByDay, NthWeekday};
pub use error::RecurrenceError;
pub use frequency::Frequency;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::Serialize;

/// A single change to a [`RecurrenceRule`]. Every mutation goes through
/// [`RecurrenceRule::apply`] so the dependent fields are re-derived in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleChange {
    /// Start a fresh rule with this frequency, or clear the rule with `None`.
    Frequency(Option<Frequency>),
    Interval(u32),
    Count(u32),
    Until(DateTime<Utc>),
    /// Remove both COUNT and UNTIL.
    Unbounded,
    ByDay(ByDay),
    ByMonthDay(i32),
    ByMonth(u32),
    /// Series start used for descriptions only.
    StartDate(Option<NaiveDate>),
}

/// One recurrence pattern (an RRULE).
///
/// Invariants:
/// - at most one of `count` and `until` is set
/// - `by_month_day` is never set together with `by_day`
/// - `by_day_weekdays` and `by_day_nth_weekday` are derived from `by_day`, at most one is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecurrenceRule {
    frequency: Option<Frequency>,
    interval: u32,
    count: Option<u32>,
    until: Option<DateTime<Utc>>,
    by_day: Option<String>,
    by_day_weekdays: Option<Vec<Weekday>>,
    by_day_nth_weekday: Option<NthWeekday>,
    by_month_day: Option<i32>,
    by_month: Option<u32>,
    start_date: Option<NaiveDate>,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            frequency: None,
            interval: 1,
            count: None,
            until: None,
            by_day: None,
            by_day_weekdays: None,
            by_day_nth_weekday: None,
            by_month_day: None,
            by_month: None,
            start_date: None,
        }
    }
}

impl RecurrenceRule {
    /// An empty rule ("no recurrence").
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh rule with only the frequency set.
    pub fn with_frequency(frequency: Frequency) -> Self {
        Self {
            frequency: Some(frequency),
            ..Self::default()
        }
    }

    /// Apply a single change and re-normalize the dependent fields.
    ///
    /// Numeric values outside their RRULE range are rejected and leave the rule untouched.
    pub fn apply(&mut self, change: RuleChange) -> Result<(), RecurrenceError> {
        validate(&change)?;
        self.transition(change);
        Ok(())
    }

    fn transition(&mut self, change: RuleChange) {
        match change {
            RuleChange::Frequency(frequency) => {
                *self = Self {
                    frequency,
                    start_date: self.start_date,
                    ..Self::default()
                };
            }
            RuleChange::Interval(interval) => self.interval = interval,
            RuleChange::Count(count) => {
                self.count = Some(count);
                self.until = None;
            }
            RuleChange::Until(until) => {
                self.until = Some(until);
                self.count = None;
            }
            RuleChange::Unbounded => {
                self.count = None;
                self.until = None;
            }
            RuleChange::ByDay(by_day) => {
                let derived = by_day.derive();
                self.by_month_day = None;
                self.by_day = derived.canonical;
                self.by_day_weekdays = derived.weekdays;
                self.by_day_nth_weekday = derived.nth;
            }
            RuleChange::ByMonthDay(day) => {
                self.by_month_day = Some(day);
                self.by_day = None;
                self.by_day_weekdays = None;
                self.by_day_nth_weekday = None;
            }
            RuleChange::ByMonth(month) => self.by_month = Some(month),
            RuleChange::StartDate(start_date) => self.start_date = start_date,
        }
    }

    /// Clear the rule, keeping only the start date.
    pub fn reset(&mut self) {
        self.transition(RuleChange::Frequency(None));
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.transition(RuleChange::Frequency(Some(frequency)));
    }

    pub fn set_interval(&mut self, interval: u32) -> Result<(), RecurrenceError> {
        self.apply(RuleChange::Interval(interval))
    }

    pub fn set_count(&mut self, count: u32) -> Result<(), RecurrenceError> {
        self.apply(RuleChange::Count(count))
    }

    pub fn set_until(&mut self, until: DateTime<Utc>) {
        self.transition(RuleChange::Until(until));
    }

    pub fn set_by_day(&mut self, by_day: impl Into<ByDay>) {
        self.transition(RuleChange::ByDay(by_day.into()));
    }

    pub fn set_by_month_day(&mut self, day: i32) -> Result<(), RecurrenceError> {
        self.apply(RuleChange::ByMonthDay(day))
    }

    pub fn set_by_month(&mut self, month: u32) -> Result<(), RecurrenceError> {
        self.apply(RuleChange::ByMonth(month))
    }

    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
        self.transition(RuleChange::StartDate(start_date));
    }

    /// `false` for the empty rule.
    pub fn is_recurring(&self) -> bool {
        self.frequency.is_some()
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn until(&self) -> Option<DateTime<Utc>> {
        self.until
    }

    pub fn by_day(&self) -> Option<&str> {
        self.by_day.as_deref()
    }

    pub fn by_day_weekdays(&self) -> Option<&[Weekday]> {
        self.by_day_weekdays.as_deref()
    }

    pub fn by_day_nth_weekday(&self) -> Option<NthWeekday> {
        self.by_day_nth_weekday
    }

    pub fn by_month_day(&self) -> Option<i32> {
        self.by_month_day
    }

    pub fn by_month(&self) -> Option<u32> {
        self.by_month
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }
}

fn validate(change: &RuleChange) -> Result<(), RecurrenceError> {
    match *change {
        RuleChange::Interval(0) => Err(RecurrenceError::IntervalOutOfRange(0)),
        RuleChange::Count(0) => Err(RecurrenceError::CountOutOfRange(0)),
        RuleChange::ByMonthDay(day) if day == 0 || !(-31..=31).contains(&day) => {
            Err(RecurrenceError::MonthDayOutOfRange(i64::from(day)))
        }
        RuleChange::ByMonth(month) if !(1..=12).contains(&month) => {
            Err(RecurrenceError::MonthOutOfRange(i64::from(month)))
        }
        _ => Ok(()),
    }
}
