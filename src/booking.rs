use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CalendarDate, MonthKey, prelude::*};

/// Opaque booking identifier, e.g. the UID of an iCal event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A reserved stay.
///
/// `start` is the check-in day and is unavailable; `end` is the checkout day
/// and is *not* reserved by this booking, so another stay may begin on it.
/// A booking with `start >= end` covers no nights and never marks a day booked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BookingRecord")]
pub struct Booking {
    id:    BookingId,
    start: CalendarDate,
    end:   CalendarDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Wire shape of a feed record. iCal exports name the text `summary`; when a
/// record carries both names, `label` wins.
#[derive(Deserialize)]
struct BookingRecord {
    id:      BookingId,
    start:   CalendarDate,
    end:     CalendarDate,
    #[serde(default)]
    label:   Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Self {
            id:    record.id,
            start: record.start,
            end:   record.end,
            label: record.label.or(record.summary),
        }
    }
}

/// Error type for loading a booking feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The document is not a JSON array of booking records.
    #[error("Invalid booking feed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Booking {
    pub fn new(id: impl Into<BookingId>, start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub const fn id(&self) -> &BookingId {
        &self.id
    }

    /// Check-in day (inclusive)
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Checkout day (exclusive)
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True when the booking covers no nights at all.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open membership: `start <= date < end`.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Every reserved day, check-in first, checkout excluded.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.days_from(self.start)
    }

    pub fn nights(&self) -> usize {
        self.days().count()
    }

    /// Reserved days that fall inside `month`.
    pub fn days_in(&self, month: MonthKey) -> impl Iterator<Item = CalendarDate> + '_ {
        let from = self.start.max(month.first_day());
        self.days_from(from).take_while(move |date| month.contains(*date))
    }

    fn days_from(&self, from: CalendarDate) -> impl Iterator<Item = CalendarDate> + '_ {
        let end = self.end;
        std::iter::successors(Some(from).filter(|day| *day < end), move |day| {
            day.succ().filter(|next| *next < end)
        })
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{}", self.id, self.start, self.end)
    }
}

/// The reservations known for the property.
///
/// Bookings may overlap; a day is booked if any booking covers it. The set is
/// never edited in place: a refreshed feed becomes a new `BookingSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingSet {
    bookings: Vec<Booking>,
}

impl BookingSet {
    pub fn new(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let bookings: Vec<Booking> = bookings.into_iter().collect();
        for booking in bookings.iter().filter(|b| b.is_empty()) {
            debug!(id = %booking.id, start = %booking.start, end = %booking.end, "booking covers no nights");
        }
        debug!(count = bookings.len(), "booking set loaded");
        Self { bookings }
    }

    /// Loads a JSON array of `{id, start, end, label?, summary?}` records.
    /// `summary` stands in for `label` when `label` is absent.
    ///
    /// # Errors
    /// Returns `FeedError::Json` if the document is malformed or a date is not
    /// a valid `YYYY-MM-DD` string.
    pub fn from_json_str(json: &str) -> Result<Self, FeedError> {
        let bookings: Vec<Booking> = serde_json::from_str(json)?;
        Ok(Self::new(bookings))
    }

    /// Like [`BookingSet::from_json_str`], reading from any byte source.
    ///
    /// # Errors
    /// Returns `FeedError::Json` on I/O failure or malformed content.
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, FeedError> {
        let bookings: Vec<Booking> = serde_json::from_reader(reader)?;
        Ok(Self::new(bookings))
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Booking> {
        self.bookings.iter()
    }

    /// Whether any booking covers `date`.
    pub fn is_booked(&self, date: CalendarDate) -> bool {
        self.bookings.iter().any(|booking| booking.contains(date))
    }

    /// Union of every booking's reserved days within `month`.
    pub fn booked_days_in_month(&self, month: MonthKey) -> BTreeSet<CalendarDate> {
        self.bookings
            .iter()
            .flat_map(|booking| booking.days_in(month))
            .collect()
    }

    /// Reserved days of a month as `YYYY-MM-DD` strings. `month` is zero-based.
    ///
    /// An invalid year or month is a caller bug: debug builds panic, release
    /// builds return an empty set.
    pub fn booked_dates_in_month(&self, year: u16, month: u8) -> BTreeSet<String> {
        let Ok(key) = MonthKey::new(year, month) else {
            if cfg!(debug_assertions) {
                panic!("booked_dates_in_month called with invalid month {year}/{month}");
            }
            return BTreeSet::new();
        };

        self.booked_days_in_month(key)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl FromIterator<Booking> for BookingSet {
    fn from_iter<I: IntoIterator<Item = Booking>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a BookingSet {
    type Item = &'a Booking;
    type IntoIter = std::slice::Iter<'a, Booking>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
