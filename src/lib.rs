// Calendar Recurrence Library
// RRULE parsing, serialization, descriptions and occurrence expansion

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{EngineConfig, ParseMode, Phrases};
pub use models::recurrence::{
    ByDay, Frequency, NthWeekday, RecurrenceError, RecurrenceRule, RuleChange,
};
pub use services::recurrence::{to_rule_string, RecurrenceService};
