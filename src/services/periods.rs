//! Local-time reporting windows shared by the visit and sale
//! aggregates. All stored dates are compared on their calendar day.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::validation::parse_date;

/// Inclusive day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn day_range(day: NaiveDate) -> DateRange {
    DateRange {
        start: day,
        end: day,
    }
}

/// ISO week, Monday through Sunday.
pub fn week_range(day: NaiveDate) -> DateRange {
    let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
    DateRange {
        start: monday,
        end: monday + Duration::days(6),
    }
}

pub fn month_range(day: NaiveDate) -> DateRange {
    let first = day.with_day(1).unwrap_or(day);
    let next_month = first + Months::new(1);
    DateRange {
        start: first,
        end: next_month - Duration::days(1),
    }
}

/// Calendar day of a stored date string, if it parses.
pub fn stored_day(s: &str) -> Option<NaiveDate> {
    parse_date(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_range_is_monday_through_sunday() {
        // 2024-05-15 is a Wednesday
        let range = week_range(d(2024, 5, 15));
        assert_eq!(range.start, d(2024, 5, 13));
        assert_eq!(range.end, d(2024, 5, 19));
        // Monday maps onto itself
        assert_eq!(week_range(d(2024, 5, 13)).start, d(2024, 5, 13));
    }

    #[test]
    fn month_range_covers_the_calendar_month() {
        let range = month_range(d(2024, 2, 10));
        assert_eq!(range.start, d(2024, 2, 1));
        assert_eq!(range.end, d(2024, 2, 29));
        assert!(range.contains(d(2024, 2, 29)));
        assert!(!range.contains(d(2024, 3, 1)));
    }

    #[test]
    fn stored_day_handles_both_wire_formats() {
        assert_eq!(stored_day("2024-05-12"), Some(d(2024, 5, 12)));
        assert_eq!(stored_day("2024-05-12T09:30:00Z"), Some(d(2024, 5, 12)));
        assert_eq!(stored_day("n/a"), None);
    }
}
