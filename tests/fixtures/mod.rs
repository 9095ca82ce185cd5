// Test fixtures - reusable test data
// Provides consistent rule strings and start dates across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Sample start dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Nov 5, 2025
    pub fn nov_5_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 5).unwrap()
    }

    /// Monday Nov 3, 2025 at 09:00
    pub fn nov_3_2025_nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample rule strings in canonical form
pub mod rules {
    pub const DAILY: &str = "FREQ=DAILY;";
    pub const BIWEEKLY_MON_WED: &str = "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE;COUNT=5;";
    pub const WORK_WEEK: &str = "FREQ=WEEKDAYS;";
    pub const LAST_DAY_OF_MONTH: &str = "FREQ=MONTHLY;BYMONTHDAY=-1;";
    pub const FOURTH_THURSDAY: &str = "FREQ=MONTHLY;BYDAY=4TH;";
    pub const LAST_SUNDAY_OF_NOVEMBER: &str = "FREQ=YEARLY;BYDAY=-1SU;BYMONTH=11;";
    pub const QUARTERLY_UNTIL: &str = "FREQ=MONTHLY;INTERVAL=3;UNTIL=20261231T235959Z;";

    /// Every canonical fixture, for round-trip checks
    pub fn all() -> [&'static str; 7] {
        [
            DAILY,
            BIWEEKLY_MON_WED,
            WORK_WEEK,
            LAST_DAY_OF_MONTH,
            FOURTH_THURSDAY,
            LAST_SUNDAY_OF_NOVEMBER,
            QUARTERLY_UNTIL,
        ]
    }
}
