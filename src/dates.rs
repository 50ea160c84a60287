//! Calendar Dates
//!
//! Customer dates are kept as the strings they were supplied in and only
//! parsed when a derived value needs them.

use std::fmt;

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};

use crate::customers::CustomerError;

const MILLIS_PER_DAY: i128 = 24 * 60 * 60 * 1000;

/// Which date attribute of a customer a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Customer birth date
    BirthDate,

    /// Stay check-in date
    CheckIn,

    /// Stay check-out date
    CheckOut,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::BirthDate => "birth date",
            DateField::CheckIn => "check-in date",
            DateField::CheckOut => "check-out date",
        };

        f.write_str(name)
    }
}

/// Parse an ISO 8601 date or date-time.
///
/// A date-time carrying a UTC offset (`Z` or `±hh:mm`) is converted to UTC.
/// One without an offset is taken as civil time, and a bare date means
/// midnight.
///
/// # Errors
///
/// Returns [`CustomerError::InvalidDate`] if `value` is none of these forms.
pub fn parse(field: DateField, value: &str) -> Result<DateTime, CustomerError> {
    let trimmed = value.trim();

    trimmed
        .parse::<Timestamp>()
        .map(|instant| instant.to_zoned(TimeZone::UTC).datetime())
        .or_else(|_instant_err| trimmed.parse::<DateTime>())
        .or_else(|_datetime_err| {
            trimmed
                .parse::<Date>()
                .map(|date| date.to_datetime(Time::midnight()))
        })
        .map_err(|source| CustomerError::InvalidDate {
            field,
            value: value.to_string(),
            source,
        })
}

/// Whole calendar years from `birth` to `today`.
///
/// Negative when `birth` is after `today`.
pub fn years_between(birth: Date, today: Date) -> i16 {
    let years = today.year() - birth.year();

    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Absolute distance between two instants in days, rounded to the nearest day.
///
/// Measured in whole milliseconds; exact half days round up.
pub fn whole_days_between(from: DateTime, to: DateTime) -> i64 {
    let millis = to.duration_since(from).abs().as_millis();
    let days = (millis + MILLIS_PER_DAY / 2) / MILLIS_PER_DAY;

    // civil date-times span under 20,000 years, far inside i64 days
    i64::try_from(days).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_accepts_bare_dates_at_midnight() -> TestResult {
        let parsed = parse(DateField::CheckIn, "2024-07-20")?;

        assert_eq!(parsed, date(2024, 7, 20).at(0, 0, 0, 0));

        Ok(())
    }

    #[test]
    fn parse_accepts_date_times() -> TestResult {
        let parsed = parse(DateField::CheckOut, "2024-07-25T11:30")?;

        assert_eq!(parsed, date(2024, 7, 25).at(11, 30, 0, 0));

        Ok(())
    }

    #[test]
    fn parse_converts_zulu_time_to_utc() -> TestResult {
        let parsed = parse(DateField::CheckIn, "2024-07-20T00:00:00Z")?;

        assert_eq!(parsed, date(2024, 7, 20).at(0, 0, 0, 0));

        Ok(())
    }

    #[test]
    fn parse_applies_numeric_offsets() -> TestResult {
        let behind = parse(DateField::CheckIn, "2024-07-20T00:00:00-04:00")?;
        let ahead = parse(DateField::CheckOut, "2024-07-21T10:00+09:00")?;

        assert_eq!(behind, date(2024, 7, 20).at(4, 0, 0, 0));
        assert_eq!(ahead, date(2024, 7, 21).at(1, 0, 0, 0));

        Ok(())
    }

    #[test]
    fn parse_zulu_birth_date_keeps_the_day() -> TestResult {
        let parsed = parse(DateField::BirthDate, "1961-05-06T00:00Z")?;

        assert_eq!(parsed.date(), date(1961, 5, 6));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage_and_names_the_field() {
        let result = parse(DateField::BirthDate, "sometime in May");

        match result {
            Err(CustomerError::InvalidDate { field, value, .. }) => {
                assert_eq!(field, DateField::BirthDate);
                assert_eq!(value, "sometime in May");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_impossible_calendar_days() {
        assert!(
            parse(DateField::CheckIn, "2024-02-30").is_err(),
            "February 30th should not parse"
        );
    }

    #[test]
    fn years_between_counts_birthday_already_passed() {
        assert_eq!(years_between(date(1961, 5, 6), date(2024, 7, 20)), 63);
    }

    #[test]
    fn years_between_on_the_birthday_itself() {
        assert_eq!(years_between(date(1990, 7, 20), date(2024, 7, 20)), 34);
    }

    #[test]
    fn years_between_birthday_later_this_month() {
        assert_eq!(years_between(date(1990, 7, 21), date(2024, 7, 20)), 33);
    }

    #[test]
    fn years_between_birthday_later_this_year() {
        assert_eq!(years_between(date(1990, 12, 1), date(2024, 7, 20)), 33);
    }

    #[test]
    fn years_between_future_birth_is_negative() {
        assert_eq!(years_between(date(2030, 1, 1), date(2024, 7, 20)), -6);
    }

    #[test]
    fn whole_days_between_is_symmetric() {
        let check_in = date(2024, 7, 20).at(0, 0, 0, 0);
        let check_out = date(2024, 7, 25).at(0, 0, 0, 0);

        assert_eq!(whole_days_between(check_in, check_out), 5);
        assert_eq!(whole_days_between(check_out, check_in), 5);
    }

    #[test]
    fn whole_days_between_rounds_to_nearest_day() {
        let start = date(2024, 7, 20).at(0, 0, 0, 0);

        assert_eq!(whole_days_between(start, date(2024, 7, 22).at(11, 59, 59, 0)), 2);
        assert_eq!(whole_days_between(start, date(2024, 7, 22).at(12, 0, 0, 0)), 3);
    }

    #[test]
    fn whole_days_between_counts_milliseconds() {
        let start = date(2024, 7, 20).at(0, 0, 0, 0);

        assert_eq!(
            whole_days_between(start, date(2024, 7, 22).at(11, 59, 59, 999_000_000)),
            2
        );
        assert_eq!(
            whole_days_between(start, date(2024, 7, 22).at(12, 0, 0, 1_000_000)),
            3
        );
    }

    #[test]
    fn mixed_offset_stay_is_measured_in_utc() -> TestResult {
        let check_in = parse(DateField::CheckIn, "2024-07-20T22:00-05:00")?;
        let check_out = parse(DateField::CheckOut, "2024-07-21T10:00+09:00")?;

        assert_eq!(whole_days_between(check_in, check_out), 0);

        Ok(())
    }

    #[test]
    fn whole_days_between_same_instant_is_zero() {
        let start = date(2024, 7, 20).at(15, 0, 0, 0);

        assert_eq!(whole_days_between(start, start), 0);
    }
}
