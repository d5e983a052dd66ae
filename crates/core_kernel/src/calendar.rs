//! Calendar checks for birth dates
//!
//! Birth dates reach the system either as an already-typed `NaiveDate` or as
//! raw year/month/day numbers collected by a form. The raw path is checked
//! here so that impossible dates (day 0, 31 April, 29 February in a common
//! year) are rejected before they reach any encoder.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors related to calendar input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month out of range: {0}")]
    MonthOutOfRange(u32),

    #[error("Day {day} does not exist in {year}-{month:02}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}

/// Builds a calendar date from raw parts, rejecting anything that is not a real day
///
/// # Arguments
///
/// * `year` - Full year, e.g. 1985
/// * `month` - 1-based month number
/// * `day` - 1-based day of month
///
/// # Returns
///
/// The corresponding `NaiveDate`, or a `CalendarError` naming the offending part
pub fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(CalendarError::YearOutOfRange(year));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::DayOutOfRange { year, month, day })
}

/// Last two digits of the year of `date` (1985 -> 85, 2001 -> 1)
pub fn two_digit_year(date: &NaiveDate) -> u32 {
    date.year().rem_euclid(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_date_valid() {
        let date = checked_date(1985, 3, 15).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1985, 3, 15).unwrap());
    }

    #[test]
    fn test_checked_date_rejects_april_31() {
        assert_eq!(
            checked_date(2020, 4, 31),
            Err(CalendarError::DayOutOfRange { year: 2020, month: 4, day: 31 })
        );
    }

    #[test]
    fn test_checked_date_rejects_day_zero() {
        assert!(matches!(
            checked_date(2020, 1, 0),
            Err(CalendarError::DayOutOfRange { day: 0, .. })
        ));
    }

    #[test]
    fn test_checked_date_rejects_month_13() {
        assert_eq!(checked_date(2020, 13, 1), Err(CalendarError::MonthOutOfRange(13)));
    }

    #[test]
    fn test_two_digit_year() {
        let date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(two_digit_year(&date), 1);
        let date = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
        assert_eq!(two_digit_year(&date), 85);
    }
}
