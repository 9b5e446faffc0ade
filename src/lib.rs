//! Calendar grid engine for week and month calendar widgets.
//!
//! The pieces, leaves first:
//!
//! - [`CalendarDate`] and the validated [`Year`], [`Month`], [`Day`] components
//! - [`DateCell`], one day of a grid with its lunar label and scheme marker
//! - [`GridBuilder`], which lays out a week or month of cells
//! - [`merge`], which attaches a [`SchemeSet`] to a grid by date
//! - [`Selection`] and the coordinate/cell resolvers
//! - [`GestureClassifier`], which tells taps from drags
//! - [`GridView`], which owns a grid and wires the above to [`Listeners`],
//!   a [`Container`] and a [`Renderer`]

mod cell;
mod config;
mod consts;
mod gesture;
mod grid;
mod listener;
mod lunar;
mod prelude;
mod render;
mod scheme;
mod selection;
mod types;
mod view;

pub use cell::DateCell;
pub use config::{Granularity, ViewConfig};
pub use consts::*;
pub use gesture::{GestureClassifier, GestureState, PointerAction, PointerEvent, Tap};
pub use grid::{Grid, GridBuilder, GridError, week_of_month};
pub use listener::{Container, DateCallback, DateChangeCallback, Listeners, RedrawCallback};
pub use lunar::{LunarConverter, NoLunar};
pub use render::{CellOrigin, GridLayout, Renderer, TextRenderer, draw};
pub use scheme::{Scheme, SchemeSet, merge};
pub use selection::{Selection, resolve_from_cell, resolve_from_coordinate};
pub use types::{Day, Month, Weekday, Year, day_of_week, days_in_month, is_leap_year};
pub use view::GridView;

use crate::prelude::*;
use std::str::FromStr;

/// A complete Gregorian date.
///
/// Ordering is chronological. Displays and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Builds a date from already-validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Validates and builds a date from raw numbers.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn weekday(&self) -> Weekday {
        day_of_week(self.year(), self.month(), self.day())
    }

    /// Length of this date's month in days
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Whether `other` falls in the same year and month
    pub const fn same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// First day of this date's month
    pub fn first_of_month(&self) -> Self {
        // day 1 exists in every month
        Self::new(self.year(), self.month(), MIN_DAY).unwrap_or(*self)
    }

    /// The following day, or `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        if self.day() < self.days_in_month() {
            return Self::new(self.year(), self.month(), self.day() + 1).ok();
        }
        let (year, month) = types::next_month(self.year(), self.month())?;
        Self::new(year, month, MIN_DAY).ok()
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        if self.day() > MIN_DAY {
            return Self::new(self.year(), self.month(), self.day() - 1).ok();
        }
        let (year, month) = types::previous_month(self.year(), self.month())?;
        Self::new(year, month, days_in_month(year, month)).ok()
    }

    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
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
