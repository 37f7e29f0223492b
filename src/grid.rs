//! Render data for one displayed month.
//!
//! A [`MonthGrid`] is a flat, row-major list of cells: blank padding up to the
//! weekday of the 1st, then one cell per day. Renderers draw it seven cells to
//! a row.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{BookingSet, CalendarDate, DAYS_PER_WEEK, MonthKey};

/// First column of the week grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Weekday number of the first column, 0 = Sunday.
    pub const fn weekday(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
        }
    }

    /// Blank cells needed before a day falling on `weekday`.
    pub const fn leading_blanks(self, weekday: u8) -> u8 {
        (weekday + DAYS_PER_WEEK - self.weekday()) % DAYS_PER_WEEK
    }
}

/// What a day offers a guest. Past wins over booked, booked over available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Past,
    Booked,
    Available,
}

impl DayStatus {
    pub fn classify(date: CalendarDate, today: CalendarDate, booked: bool) -> Self {
        if date < today {
            Self::Past
        } else if booked {
            Self::Booked
        } else {
            Self::Available
        }
    }
}

/// One square of the month grid.
///
/// `is_today` is an overlay on top of `status`, not an alternative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DayCell {
    Blank,
    Day {
        date:     CalendarDate,
        status:   DayStatus,
        is_today: bool,
    },
}

impl DayCell {
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Blank => None,
            Self::Day { date, .. } => Some(*date),
        }
    }

    pub const fn day_number(&self) -> Option<u8> {
        match self {
            Self::Blank => None,
            Self::Day { date, .. } => Some(date.day()),
        }
    }

    pub fn date_string(&self) -> Option<String> {
        self.date().map(|date| date.to_string())
    }

    pub const fn status(&self) -> Option<DayStatus> {
        match self {
            Self::Blank => None,
            Self::Day { status, .. } => Some(*status),
        }
    }

    pub const fn is_today(&self) -> bool {
        matches!(self, Self::Day { is_today: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: MonthKey,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Classifies every day of `month` against `bookings` as seen on `today`.
    pub fn build(month: MonthKey, bookings: &BookingSet, today: CalendarDate, week_start: WeekStart) -> Self {
        let booked = bookings.booked_days_in_month(month);
        let blanks = week_start.leading_blanks(month.first_weekday());

        let mut cells = Vec::with_capacity(usize::from(blanks) + usize::from(month.days_in_month()));
        cells.extend((0..blanks).map(|_| DayCell::Blank));
        cells.extend(month.days().map(|date| DayCell::Day {
            date,
            status: DayStatus::classify(date, today, booked.contains(&date)),
            is_today: date == today,
        }));

        trace!(%month, blanks, booked = booked.len(), "month grid assembled");
        Self { month, cells }
    }

    pub const fn month(&self) -> MonthKey {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    /// Non-blank cells, the 1st first.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| !cell.is_blank())
    }

    /// Cells grouped into week rows; the final row may be short.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(usize::from(DAYS_PER_WEEK))
    }
}
