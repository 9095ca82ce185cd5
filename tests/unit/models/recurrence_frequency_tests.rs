// Unit tests for the Frequency enum
// Covers the RRULE names and parsing of every supported frequency

#[cfg(test)]
mod tests {
    use calendar_recurrence::{Frequency, RecurrenceError, RecurrenceRule};
    use test_case::test_case;

    #[test_case(Frequency::Daily, "DAILY"; "daily frequency")]
    #[test_case(Frequency::Weekly, "WEEKLY"; "weekly frequency")]
    #[test_case(Frequency::Weekdays, "WEEKDAYS"; "weekdays frequency")]
    #[test_case(Frequency::Monthly, "MONTHLY"; "monthly frequency")]
    #[test_case(Frequency::Yearly, "YEARLY"; "yearly frequency")]
    fn test_frequency_rrule_name(freq: Frequency, expected_rrule: &str) {
        assert_eq!(freq.to_rrule_freq(), expected_rrule);
        assert_eq!(freq.to_string(), expected_rrule);
        assert_eq!(expected_rrule.parse::<Frequency>(), Ok(freq));
    }

    #[test_case("daily", Frequency::Daily; "lowercase")]
    #[test_case(" Monthly ", Frequency::Monthly; "padded mixed case")]
    fn test_frequency_parse_is_case_insensitive(value: &str, expected: Frequency) {
        assert_eq!(Frequency::from_rrule_freq(value), Some(expected));
    }

    #[test]
    fn test_unknown_frequency_is_rejected() {
        assert_eq!(
            "HOURLY".parse::<Frequency>(),
            Err(RecurrenceError::UnknownFrequency("HOURLY".to_string()))
        );
        assert_eq!(Frequency::from_rrule_freq("FORTNIGHTLY"), None);
    }

    #[test]
    fn test_every_frequency_serializes_alone() {
        for freq in Frequency::all() {
            let rule = RecurrenceRule::with_frequency(freq);
            assert_eq!(rule.to_string(), format!("FREQ={};", freq.to_rrule_freq()));
        }
    }

    #[test]
    fn test_frequency_equality() {
        assert_eq!(Frequency::Weekdays, Frequency::Weekdays);
        assert_ne!(Frequency::Weekdays, Frequency::Weekly);
    }
}
