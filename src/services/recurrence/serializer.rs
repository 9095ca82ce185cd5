use std::fmt;

use crate::models::recurrence::RecurrenceRule;
use crate::utils::date::format_until;

/// Serialize a rule as `KEY=VALUE;` parts in fixed order:
/// FREQ, INTERVAL, BYDAY, BYMONTHDAY, BYMONTH, COUNT, UNTIL.
/// The empty rule serializes to an empty string.
pub fn to_rule_string(rule: &RecurrenceRule) -> String {
    let Some(frequency) = rule.frequency() else {
        return String::new();
    };

    let mut parts = vec![format!("FREQ={}", frequency.to_rrule_freq())];

    if rule.interval() != 1 {
        parts.push(format!("INTERVAL={}", rule.interval()));
    }

    if let Some(by_day) = rule.by_day() {
        parts.push(format!("BYDAY={}", by_day));
    }

    if let Some(day) = rule.by_month_day() {
        parts.push(format!("BYMONTHDAY={}", day));
    }

    if let Some(month) = rule.by_month() {
        parts.push(format!("BYMONTH={}", month));
    }

    if let Some(count) = rule.count() {
        parts.push(format!("COUNT={}", count));
    }

    if let Some(until) = rule.until() {
        parts.push(format!("UNTIL={}", format_until(&until)));
    }

    let mut rule_string = parts.join(";");
    rule_string.push(';');
    rule_string
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_rule_string(self))
    }
}
