use std::{fmt, str::FromStr};

use crate::{CalendarDate, DATE_SEPARATOR, MONTHS_PER_YEAR, ParseError, types::{self, Month, Year}};

/// Identifies one calendar month across year boundaries.
///
/// The month is addressed by zero-based index (0 = January, 11 = December).
/// Keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year:  Year,
    month: Month,
}

impl MonthKey {
    /// Creates a month key from a year and a zero-based month index.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` when
    /// either component is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::from_index(month)?,
        })
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Zero-based month index (0 = January)
    pub const fn month(&self) -> u8 {
        self.month.index()
    }

    /// One-based month number (1 = January)
    pub const fn month_number(&self) -> u8 {
        self.month.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Months elapsed since January of year 0. Consecutive months have
    /// consecutive ordinals.
    pub const fn ordinal(&self) -> u32 {
        self.year.get() as u32 * MONTHS_PER_YEAR as u32 + self.month.index() as u32
    }

    /// Inverse of [`MonthKey::ordinal`].
    /// Returns `None` if the ordinal falls outside the representable years.
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let per_year = u32::from(MONTHS_PER_YEAR);
        let year = u16::try_from(ordinal / per_year).ok()?;
        let month = u8::try_from(ordinal % per_year).ok()?;
        Self::new(year, month).ok()
    }

    /// Moves `months` forward (or backward when negative).
    pub fn offset(&self, months: i64) -> Option<Self> {
        let target = i64::from(self.ordinal()).checked_add(months)?;
        Self::from_ordinal(u32::try_from(target).ok()?)
    }

    /// The following month; December rolls into January of the next year.
    pub fn succ(&self) -> Option<Self> {
        self.offset(1)
    }

    /// The preceding month; January rolls back into December of the previous year.
    pub fn pred(&self) -> Option<Self> {
        self.offset(-1)
    }

    pub const fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year.get(), self.month.get())
    }

    pub const fn first_day(&self) -> CalendarDate {
        CalendarDate::first_of(*self)
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub const fn first_weekday(&self) -> u8 {
        types::weekday(self.year.get(), self.month.get(), 1)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.month_key() == *self
    }

    /// Every day of the month in order.
    pub fn days(self) -> impl Iterator<Item = CalendarDate> {
        std::iter::successors(Some(self.first_day()), CalendarDate::succ)
            .take_while(move |date| self.contains(*date))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DATE_SEPARATOR}{}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseError;

    /// Parses `YYYY-MM` with a 1-based month, the same form `Display` emits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let invalid = || ParseError::InvalidFormat(trimmed.to_owned());
        let (year, month) = trimmed.split_once(DATE_SEPARATOR).ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = Year::new(year.parse().map_err(|_| invalid())?)?;
        let month = Month::new(month.parse().map_err(|_| invalid())?)?;
        Ok(Self { year, month })
    }
}

impl serde::Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
