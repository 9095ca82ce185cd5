// Date utility functions
// Weekday codes, RRULE date values and month arithmetic

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};

/// Fixed-width UTC DATE-TIME format used for `UNTIL` values.
pub const UNTIL_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// DATE form accepted for `UNTIL` values on input.
pub const UNTIL_DATE_FORMAT: &str = "%Y%m%d";

pub fn weekday_from_code(code: &str) -> Option<Weekday> {
    match code.to_ascii_uppercase().as_str() {
        "SU" => Some(Weekday::Sun),
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "SU",
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
    }
}

/// Parse an `UNTIL` value. Accepts `YYYYMMDDTHHMMSSZ` and the DATE form `YYYYMMDD`
/// (midnight UTC).
pub fn parse_until(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, UNTIL_FORMAT) {
        return Some(naive.and_utc());
    }

    if value.len() == 8 {
        let date = NaiveDate::parse_from_str(value, UNTIL_DATE_FORMAT).ok()?;
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

pub fn format_until(until: &DateTime<Utc>) -> String {
    until.format(UNTIL_FORMAT).to_string()
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// Returns `(year, month)` moved forward by `months`.
pub fn advance_month(year: i32, month: u32, months: i64) -> Option<(i32, u32)> {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1 + months;
    let new_year = i32::try_from(zero_based.div_euclid(12)).ok()?;
    let new_month = u32::try_from(zero_based.rem_euclid(12)).ok()? + 1;
    Some((new_year, new_month))
}

/// Resolve a signed day-of-month (`-1` is the last day) within a month.
pub fn select_month_day(year: i32, month: u32, day: i32) -> Option<NaiveDate> {
    let len = i32::try_from(days_in_month(year, month)?).ok()?;
    let resolved = if day > 0 { day } else { len + day + 1 };
    if resolved < 1 || resolved > len {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, u32::try_from(resolved).ok()?)
}

/// Resolve the `position`-th `weekday` of a month; negative positions count from the end.
/// A month holds at most five of any weekday.
pub fn select_positional_weekday(
    year: i32,
    month: u32,
    position: i32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    if position == 0 || position.unsigned_abs() > 5 {
        return None;
    }

    let weeks = i64::from(position.unsigned_abs() - 1);
    let date = if position > 0 {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days_until_target = (i64::from(weekday.num_days_from_monday())
            - i64::from(first.weekday().num_days_from_monday())
            + 7)
            % 7;
        first.checked_add_signed(Duration::days(days_until_target + 7 * weeks))?
    } else {
        let last = select_month_day(year, month, -1)?;
        let days_back_to_target = (i64::from(last.weekday().num_days_from_monday())
            - i64::from(weekday.num_days_from_monday())
            + 7)
            % 7;
        last.checked_sub_signed(Duration::days(days_back_to_target + 7 * weeks))?
    };
    (date.month() == month).then_some(date)
}
