use chrono::{NaiveDate, NaiveDateTime};

use crate::config::EngineConfig;
use crate::models::recurrence::{RecurrenceError, RecurrenceRule};

mod describe;
mod expand;
mod parser;
mod serializer;

pub use serializer::to_rule_string;

/// Parses, serializes, describes and expands recurrence rules using one configuration.
pub struct RecurrenceService<'a> {
    config: &'a EngineConfig,
}

impl<'a> RecurrenceService<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Parse a rule string into a fresh rule.
    ///
    /// # Examples
    /// ```
    /// use calendar_recurrence::config::EngineConfig;
    /// use calendar_recurrence::services::recurrence::RecurrenceService;
    ///
    /// let config = EngineConfig::default();
    /// let service = RecurrenceService::new(&config);
    /// let rule = service.parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE;COUNT=5;").unwrap();
    /// assert_eq!(
    ///     service.describe(&rule, None),
    ///     "Every 2 weeks on Monday and Wednesday, 5 times"
    /// );
    /// ```
    pub fn parse(&self, rule_string: &str) -> Result<RecurrenceRule, RecurrenceError> {
        let mut rule = RecurrenceRule::new();
        self.parse_into(&mut rule, rule_string)?;
        Ok(rule)
    }

    /// Apply a rule string to an existing rule. Without a FREQ part the other parts
    /// update the rule in place; an empty string clears it.
    pub fn parse_into(
        &self,
        rule: &mut RecurrenceRule,
        rule_string: &str,
    ) -> Result<(), RecurrenceError> {
        parser::parse_into(rule, rule_string, self.config.parse_mode)
    }

    pub fn to_rule_string(&self, rule: &RecurrenceRule) -> String {
        to_rule_string(rule)
    }

    /// Describe the rule in words, using `start` in place of the rule's own start date.
    pub fn describe(&self, rule: &RecurrenceRule, start: Option<NaiveDate>) -> String {
        describe::describe(rule, start.or(rule.start_date()), &self.config.phrases)
    }

    /// Occurrence start times of the series beginning at `dtstart`, at most `limit` of them.
    pub fn expand(
        &self,
        rule: &RecurrenceRule,
        dtstart: NaiveDateTime,
        limit: usize,
    ) -> Vec<NaiveDateTime> {
        expand::expand(rule, dtstart, limit)
    }
}
