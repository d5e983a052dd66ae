//! Tests for calendar checks on raw birth-date input

use chrono::{Datelike, NaiveDate};
use core_kernel::{checked_date, two_digit_year, CalendarError};
use proptest::prelude::*;

mod checked_date_tests {
    use super::*;

    #[test]
    fn test_accepts_leap_day_in_leap_year() {
        let date = checked_date(2000, 2, 29).unwrap();
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_rejects_leap_day_in_common_year() {
        assert_eq!(
            checked_date(1900, 2, 29),
            Err(CalendarError::DayOutOfRange { year: 1900, month: 2, day: 29 })
        );
    }

    #[test]
    fn test_rejects_month_zero() {
        assert_eq!(checked_date(1990, 0, 10), Err(CalendarError::MonthOutOfRange(0)));
    }

    #[test]
    fn test_rejects_day_32() {
        assert!(checked_date(1990, 1, 32).is_err());
    }

    #[test]
    fn test_rejects_year_outside_chrono_range() {
        assert_eq!(checked_date(i32::MAX, 1, 1), Err(CalendarError::YearOutOfRange(i32::MAX)));
    }
}

mod two_digit_year_tests {
    use super::*;

    #[test]
    fn test_century_boundary() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 1).unwrap();
        assert_eq!(two_digit_year(&date), 0);

        let date = NaiveDate::from_ymd_opt(1999, 6, 1).unwrap();
        assert_eq!(two_digit_year(&date), 99);
    }
}

proptest! {
    #[test]
    fn checked_date_accepts_exactly_real_days(
        year in 1900i32..2100i32,
        month in 0u32..=13u32,
        day in 0u32..=32u32
    ) {
        let real = NaiveDate::from_ymd_opt(year, month, day);
        prop_assert_eq!(checked_date(year, month, day).ok(), real);
    }

    #[test]
    fn two_digit_year_is_below_100(year in -3000i32..3000i32) {
        let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        prop_assert!(two_digit_year(&date) < 100);
    }
}
