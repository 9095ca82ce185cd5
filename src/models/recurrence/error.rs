use thiserror::Error;

/// Errors raised while building or parsing a recurrence rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Malformed rule part `{0}` (expected KEY=VALUE)")]
    MalformedToken(String),
    #[error("Unknown rule part `{0}`")]
    UnknownPart(String),
    #[error("Unsupported frequency `{0}`")]
    UnknownFrequency(String),
    #[error("Invalid number `{value}` for {key}")]
    InvalidNumber { key: String, value: String },
    #[error("Invalid UNTIL value `{0}` (expected YYYYMMDDTHHMMSSZ)")]
    InvalidUntil(String),
    #[error("INTERVAL must be at least 1, got {0}")]
    IntervalOutOfRange(i64),
    #[error("COUNT must be at least 1, got {0}")]
    CountOutOfRange(i64),
    #[error("BYMONTHDAY must be in [-31, -1] or [1, 31], got {0}")]
    MonthDayOutOfRange(i64),
    #[error("BYMONTH must be in [1, 12], got {0}")]
    MonthOutOfRange(i64),
}
