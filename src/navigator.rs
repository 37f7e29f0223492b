use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    BookingSet, CalendarDate, DEFAULT_HORIZON_MONTHS, DEFAULT_WINDOW_SIZE, MonthGrid, MonthKey, ParseError, WeekStart,
};

const DEFAULT_WINDOW: NonZeroU8 = match NonZeroU8::new(DEFAULT_WINDOW_SIZE) {
    Some(size) => size,
    None => NonZeroU8::MIN,
};

/// Shape and reach of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Months shown side by side.
    pub window_size: NonZeroU8,

    /// How many months past the current one the last displayed month may be.
    pub horizon_months: u16,

    /// First column of each week row.
    pub week_start: WeekStart,
}

/// Error type for loading navigator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid calendar configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            window_size:    DEFAULT_WINDOW,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            week_start:     WeekStart::default(),
        }
    }
}

impl NavigatorConfig {
    /// Parses a TOML table such as:
    ///
    /// ```toml
    /// window_size = 2
    /// horizon_months = 12
    /// week_start = "sunday"
    /// ```
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed TOML, unknown keys, or a zero
    /// window size.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    #[must_use]
    pub const fn with_window_size(mut self, window_size: NonZeroU8) -> Self {
        self.window_size = window_size;
        self
    }

    #[must_use]
    pub const fn with_horizon_months(mut self, horizon_months: u16) -> Self {
        self.horizon_months = horizon_months;
        self
    }

    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }
}

/// The month window a visitor is looking at.
///
/// The first displayed month never precedes the month containing `today`,
/// and the last displayed month never passes `today`'s month plus
/// `horizon_months`. Transitions that would break either bound are refused
/// and leave the window where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    config: NavigatorConfig,
    today:  CalendarDate,
    first:  MonthKey,
}

impl CalendarNavigator {
    /// Opens the view on the month containing `today`.
    pub const fn new(today: CalendarDate, config: NavigatorConfig) -> Self {
        Self {
            config,
            today,
            first: today.month_key(),
        }
    }

    /// Opens the view using the local wall clock as `today`.
    ///
    /// # Errors
    /// Fails only if the clock reports a year outside the supported range.
    pub fn starting_today(config: NavigatorConfig) -> Result<Self, ParseError> {
        Ok(Self::new(CalendarDate::today()?, config))
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// First displayed month
    pub const fn first_month(&self) -> MonthKey {
        self.first
    }

    /// Earliest month the window may start on.
    pub const fn min_month(&self) -> MonthKey {
        self.today.month_key()
    }

    /// Latest month the window may show.
    /// `None` if that lies beyond the last representable year.
    pub fn horizon(&self) -> Option<MonthKey> {
        MonthKey::from_ordinal(self.horizon_ordinal())
    }

    /// The consecutive months currently on screen.
    pub fn visible_months(&self) -> Vec<MonthKey> {
        std::iter::successors(Some(self.first), MonthKey::succ)
            .take(usize::from(self.config.window_size.get()))
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        self.next_window().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.previous_window().is_some()
    }

    /// Shifts the window one month forward. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        let moved = self.next_window();
        self.apply("advance", moved)
    }

    /// Shifts the window one month back. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        let moved = self.previous_window();
        self.apply("retreat", moved)
    }

    /// Starts the window at `month` if the whole window fits the bounds.
    /// Returns whether it moved.
    pub fn jump_to(&mut self, month: MonthKey) -> bool {
        let target = Some(month).filter(|m| *m >= self.min_month() && self.fits_horizon(*m));
        self.apply("jump", target)
    }

    /// Moves the reference date, e.g. when a session outlives midnight.
    ///
    /// The window is pulled back inside the new bounds if it no longer fits.
    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;

        let min = self.min_month();
        let clamped = if self.first < min {
            min
        } else if self.fits_horizon(self.first) {
            self.first
        } else {
            self.latest_first().map_or(min, |latest| latest.max(min))
        };

        if clamped != self.first {
            debug!(%today, from = %self.first, to = %clamped, "calendar window clamped to new bounds");
            self.first = clamped;
        }
    }

    /// `date` is strictly before `today`; both are `YYYY-MM-DD` strings.
    pub fn is_past(date: &str, today: &str) -> bool {
        date < today
    }

    /// `date` and `today` name the same day; both are `YYYY-MM-DD` strings.
    pub fn is_today(date: &str, today: &str) -> bool {
        date == today
    }

    /// Day grids for every visible month.
    pub fn render(&self, bookings: &BookingSet) -> Vec<MonthGrid> {
        self.visible_months()
            .into_iter()
            .map(|month| MonthGrid::build(month, bookings, self.today, self.config.week_start))
            .collect()
    }

    fn next_window(&self) -> Option<MonthKey> {
        self.first.succ().filter(|next| self.fits_horizon(*next))
    }

    fn previous_window(&self) -> Option<MonthKey> {
        self.first.pred().filter(|prev| *prev >= self.min_month())
    }

    fn apply(&mut self, transition: &'static str, target: Option<MonthKey>) -> bool {
        match target {
            Some(month) => {
                debug!(transition, from = %self.first, to = %month, "calendar window moved");
                self.first = month;
                true
            },
            None => {
                debug!(transition, at = %self.first, "calendar window move rejected");
                false
            },
        }
    }

    fn horizon_ordinal(&self) -> u32 {
        self.min_month().ordinal() + u32::from(self.config.horizon_months)
    }

    /// Months between a window's first and last month.
    fn span(&self) -> u8 {
        self.config.window_size.get() - 1
    }

    fn fits_horizon(&self, first: MonthKey) -> bool {
        first
            .offset(i64::from(self.span()))
            .is_some_and(|last| last.ordinal() <= self.horizon_ordinal())
    }

    fn latest_first(&self) -> Option<MonthKey> {
        self.horizon_ordinal()
            .checked_sub(u32::from(self.span()))
            .and_then(MonthKey::from_ordinal)
    }
}
