use std::str::FromStr;

use chrono::Utc;

use crate::config::ParseMode;
use crate::models::recurrence::{ByDay, Frequency, RecurrenceError, RecurrenceRule, RuleChange};
use crate::utils::date::parse_until;

const RRULE_PREFIX: &str = "RRULE:";

/// Apply `input` to `rule`.
///
/// An empty input resets the rule. A FREQ part starts a fresh rule before the other parts
/// are applied; without one the parts update the existing rule in place. In strict mode the
/// rule is left untouched when any part is rejected.
pub(super) fn parse_into(
    rule: &mut RecurrenceRule,
    input: &str,
    mode: ParseMode,
) -> Result<(), RecurrenceError> {
    let input = strip_prefix(input.trim());
    if input.is_empty() {
        rule.reset();
        return Ok(());
    }

    let mut parts = Vec::new();
    for token in input.split(';').map(str::trim).filter(|token| !token.is_empty()) {
        match token.split_once('=') {
            Some((key, value)) => parts.push((key.trim().to_ascii_uppercase(), value.trim())),
            None => recover(mode, RecurrenceError::MalformedToken(token.to_string()))?,
        }
    }

    let mut staged = rule.clone();

    if let Some((_, value)) = parts.iter().find(|(key, _)| key == "FREQ") {
        match Frequency::from_str(value) {
            Ok(frequency) => staged.set_frequency(frequency),
            Err(err) => recover(mode, err)?,
        }
    }

    for (key, value) in &parts {
        if let Err(err) = apply_part(&mut staged, key, value) {
            match err {
                RecurrenceError::InvalidUntil(_) if mode == ParseMode::Lenient => {
                    log::warn!("{}; using the current time", err);
                    staged.set_until(Utc::now());
                }
                err => recover(mode, err)?,
            }
        }
    }

    *rule = staged;
    Ok(())
}

fn apply_part(rule: &mut RecurrenceRule, key: &str, value: &str) -> Result<(), RecurrenceError> {
    let change = match key {
        "FREQ" => return Ok(()),
        "INTERVAL" => {
            let interval = parse_number(key, value)?;
            RuleChange::Interval(
                u32::try_from(interval)
                    .map_err(|_| RecurrenceError::IntervalOutOfRange(interval))?,
            )
        }
        "COUNT" => {
            let count = parse_number(key, value)?;
            RuleChange::Count(
                u32::try_from(count).map_err(|_| RecurrenceError::CountOutOfRange(count))?,
            )
        }
        "UNTIL" => RuleChange::Until(
            parse_until(value).ok_or_else(|| RecurrenceError::InvalidUntil(value.to_string()))?,
        ),
        "BYDAY" => RuleChange::ByDay(ByDay::Raw(value.to_string())),
        "BYMONTHDAY" => {
            let day = parse_number(key, value)?;
            RuleChange::ByMonthDay(
                i32::try_from(day).map_err(|_| RecurrenceError::MonthDayOutOfRange(day))?,
            )
        }
        "BYMONTH" => {
            let month = parse_number(key, value)?;
            RuleChange::ByMonth(
                u32::try_from(month).map_err(|_| RecurrenceError::MonthOutOfRange(month))?,
            )
        }
        _ => return Err(RecurrenceError::UnknownPart(key.to_string())),
    };

    log::debug!("Applying rule part {}={}", key, value);
    rule.apply(change)
}

fn parse_number(key: &str, value: &str) -> Result<i64, RecurrenceError> {
    value
        .parse::<i64>()
        .map_err(|_| RecurrenceError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Lenient mode logs and continues; strict mode reports the error.
fn recover(mode: ParseMode, err: RecurrenceError) -> Result<(), RecurrenceError> {
    match mode {
        ParseMode::Strict => Err(err),
        ParseMode::Lenient => {
            match err {
                RecurrenceError::UnknownPart(_) => log::debug!("Ignoring {}", err),
                _ => log::warn!("Ignoring {}", err),
            }
            Ok(())
        }
    }
}

fn strip_prefix(input: &str) -> &str {
    match input.get(..RRULE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(RRULE_PREFIX) => &input[RRULE_PREFIX.len()..],
        _ => input,
    }
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    /// Lenient parse into a fresh rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rule = RecurrenceRule::new();
        parse_into(&mut rule, s, ParseMode::Lenient)?;
        Ok(rule)
    }
}
