//! Placeholder reservations used until a live calendar feed is wired in.
//!
//! The document has the same shape an iCal-to-JSON import would produce, so
//! swapping it for real data is a matter of passing a different string to
//! [`BookingSet::from_json_str`].

use crate::{BookingSet, FeedError};

/// February to August 2026, heavier in the summer months.
pub const SAMPLE_FEED: &str = r#"[
    {"id": "booking-1", "start": "2026-02-14", "end": "2026-02-18", "summary": "Reserved"},
    {"id": "booking-2", "start": "2026-02-22", "end": "2026-02-25", "summary": "Reserved"},
    {"id": "booking-3", "start": "2026-03-07", "end": "2026-03-14", "summary": "Reserved"},
    {"id": "booking-4", "start": "2026-03-21", "end": "2026-03-28", "summary": "Reserved"},
    {"id": "booking-5", "start": "2026-04-04", "end": "2026-04-11", "summary": "Reserved"},
    {"id": "booking-6", "start": "2026-04-18", "end": "2026-04-25", "summary": "Reserved"},
    {"id": "booking-7", "start": "2026-05-01", "end": "2026-05-05", "summary": "Reserved"},
    {"id": "booking-8", "start": "2026-05-15", "end": "2026-05-22", "summary": "Reserved"},
    {"id": "booking-9", "start": "2026-05-28", "end": "2026-06-02", "summary": "Reserved"},
    {"id": "booking-10", "start": "2026-06-06", "end": "2026-06-13", "summary": "Reserved"},
    {"id": "booking-11", "start": "2026-06-15", "end": "2026-06-22", "summary": "Reserved"},
    {"id": "booking-12", "start": "2026-06-27", "end": "2026-07-04", "summary": "Reserved"},
    {"id": "booking-13", "start": "2026-07-04", "end": "2026-07-11", "summary": "Reserved"},
    {"id": "booking-14", "start": "2026-07-13", "end": "2026-07-25", "summary": "Reserved"},
    {"id": "booking-15", "start": "2026-07-27", "end": "2026-08-03", "summary": "Reserved"},
    {"id": "booking-16", "start": "2026-08-03", "end": "2026-08-10", "summary": "Reserved"},
    {"id": "booking-17", "start": "2026-08-15", "end": "2026-08-29", "summary": "Reserved"}
]"#;

/// The sample reservations as a [`BookingSet`].
///
/// # Errors
/// Only if [`SAMPLE_FEED`] itself stops parsing.
pub fn booking_set() -> Result<BookingSet, FeedError> {
    BookingSet::from_json_str(SAMPLE_FEED)
}
