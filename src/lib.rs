//! Availability calendar for a single rental property.
//!
//! [`BookingSet`] answers which nights are reserved; [`CalendarNavigator`]
//! keeps a rolling window of months inside the bookable horizon and assembles
//! per-day render data ([`MonthGrid`]) from the booking set.
//!
//! All dates are plain Gregorian `(year, month, day)` triples. Nothing here
//! touches timestamps or time zones.

mod booking;
mod consts;
mod grid;
mod month;
mod navigator;
mod prelude;
pub mod sample;
mod types;

pub use booking::{Booking, BookingId, BookingSet, FeedError};
pub use consts::*;
pub use grid::{DayCell, DayStatus, MonthGrid, WeekStart};
pub use month::MonthKey;
pub use navigator::{CalendarNavigator, ConfigError, NavigatorConfig};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, weekday};

use crate::prelude::*;
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// A concrete calendar day.
///
/// Ordering is chronological. The textual form is the fixed-width
/// `YYYY-MM-DD`, so string order and date order agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {} (expected YYYY-MM-DD)", "_0")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its numeric components (1-based month).
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for an out-of-range component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// The first day of the given month.
    pub const fn first_of(month: MonthKey) -> Self {
        Self {
            year:  month.year_typed(),
            month: month.month_typed(),
            day:   Day::FIRST,
        }
    }

    /// Converts a chrono date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for a year in `0` or
    /// `MAX_YEAR + 1..=u16::MAX`, and `ParseError::InvalidFormat` for a year
    /// that does not fit in a `u16` (negative or above `u16::MAX`).
    pub fn from_naive(date: chrono::NaiveDate) -> Result<Self, ParseError> {
        let out_of_range = || ParseError::InvalidFormat(date.to_string());
        let year = u16::try_from(date.year()).map_err(|_| out_of_range())?;
        let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;
        Self::new(year, month, day)
    }

    /// Today's date on the local wall clock.
    ///
    /// # Errors
    /// Fails only if the system clock reports a year outside `1..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the 1-based month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The month this date falls in.
    pub const fn month_key(&self) -> MonthKey {
        MonthKey::from_parts(self.year, self.month)
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub const fn weekday(&self) -> u8 {
        types::weekday(self.year(), self.month(), self.day())
    }

    /// The following calendar day.
    /// Returns `None` past the last representable date (9999-12-31).
    pub fn succ(&self) -> Option<Self> {
        if let Ok(day) = Day::new(self.day() + 1, self.year, self.month) {
            return Some(Self { day, ..*self });
        }
        self.month_key().succ().map(Self::first_of)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical zero-padded `YYYY-MM-DD` form only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = parse_fixed::<u16>(year, 4, trimmed)?;
        let month = parse_fixed::<u8>(month, 2, trimmed)?;
        let day = parse_fixed::<u8>(day, 2, trimmed)?;

        Self::new(year, month, day)
    }
}

/// Parses a fixed-width, all-digit component.
fn parse_fixed<T: FromStr>(part: &str, width: usize, whole: &str) -> Result<T, ParseError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(whole.to_owned()));
    }
    part.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(whole.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_canonical() {
        let d = date("2026-03-14");
        assert_eq!((d.year(), d.month(), d.day()), (2026, 3, 14));
        assert_eq!(d.to_string(), "2026-03-14");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(date("  2026-03-14\n"), date("2026-03-14"));
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2026-3-14",
                description: "unpadded month",
            },
            TestCase {
                input:       "2026-03-4",
                description: "unpadded day",
            },
            TestCase {
                input:       "26-03-14",
                description: "two-digit year",
            },
            TestCase {
                input:       "2026/03/14",
                description: "slash separators",
            },
            TestCase {
                input:       "2026-03",
                description: "month precision only",
            },
            TestCase {
                input:       "2026-03-14-01",
                description: "too many components",
            },
            TestCase {
                input:       "2026-0a-14",
                description: "non-digit month",
            },
            TestCase {
                input:       "+026-03-14",
                description: "signed year",
            },
        ];

        for case in &cases {
            assert!(
                matches!(case.input.parse::<CalendarDate>(), Err(ParseError::InvalidFormat(_))),
                "Expected InvalidFormat for {} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_component_errors() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert_eq!("0000-01-01".parse::<CalendarDate>(), Err(ParseError::InvalidYear(0)));
        assert_eq!("2026-13-01".parse::<CalendarDate>(), Err(ParseError::InvalidMonth(13)));
        assert_eq!(
            "2026-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                month: 2,
                day:   29,
                year:  2026,
            })
        );
        assert!("2028-02-29".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = "2026-04-31".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 31 for month 2026-04");
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let samples = ["2025-12-31", "2026-01-01", "2026-02-28", "2026-03-01", "2026-03-14", "2026-10-09", "2026-10-10"];
        for a in samples {
            for b in samples {
                assert_eq!(date(a).cmp(&date(b)), a.cmp(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_succ_rollover() {
        struct TestCase {
            from:     &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                from:     "2026-05-30",
                expected: "2026-05-31",
            },
            TestCase {
                from:     "2026-05-31",
                expected: "2026-06-01",
            },
            TestCase {
                from:     "2026-02-28",
                expected: "2026-03-01",
            },
            TestCase {
                from:     "2028-02-28",
                expected: "2028-02-29",
            },
            TestCase {
                from:     "2026-12-31",
                expected: "2027-01-01",
            },
        ];

        for case in &cases {
            assert_eq!(date(case.from).succ(), Some(date(case.expected)), "{}", case.from);
        }
        assert_eq!(date("9999-12-31").succ(), None);
    }

    #[test]
    fn test_first_of_and_month_key() {
        let d = date("2026-05-28");
        assert_eq!(CalendarDate::first_of(d.month_key()), date("2026-05-01"));
        assert_eq!(d.month_key().month(), 4);
    }

    #[test]
    fn test_from_naive() {
        let naive = chrono::NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(CalendarDate::from_naive(naive), Ok(date("2026-03-15")));

        let too_late = chrono::NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(CalendarDate::from_naive(too_late), Err(ParseError::InvalidYear(10_000)));

        let year_zero = chrono::NaiveDate::from_ymd_opt(0, 6, 1).unwrap();
        assert_eq!(CalendarDate::from_naive(year_zero), Err(ParseError::InvalidYear(0)));

        let before_epoch = chrono::NaiveDate::from_ymd_opt(-1, 6, 1).unwrap();
        assert!(matches!(CalendarDate::from_naive(before_epoch), Err(ParseError::InvalidFormat(_))));

        let beyond_u16 = chrono::NaiveDate::from_ymd_opt(70_000, 1, 1).unwrap();
        assert!(matches!(CalendarDate::from_naive(beyond_u16), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date("2026-06-02");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2026-06-02""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>(r#""2026-6-2""#).is_err());
    }
}
