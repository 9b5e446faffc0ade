use crate::cell::DateCell;
use crate::config::Granularity;
use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::lunar::LunarConverter;
use crate::types::{self, Weekday, days_in_month};
use crate::{CalendarDate, DateError};

/// An ordered, gap-free run of date cells covering whole weeks.
///
/// Index 0 always falls on the first day of the week the grid was built with.
/// `Grid::default()` is the empty grid a view holds before its first build.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<DateCell>,
    reference: Option<CalendarDate>,
    granularity: Granularity,
    first_day_of_week: Weekday,
    leading: usize,
    trailing: usize,
}

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid would need a day outside 0001-01-01..=9999-12-31.
    #[error("Grid around {reference} reaches outside the supported date range")]
    OutOfRange { reference: CalendarDate },

    #[error(transparent)]
    Date(#[from] DateError),
}

impl Grid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [DateCell] {
        &mut self.cells
    }

    pub fn get(&self, index: usize) -> Option<&DateCell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateCell> {
        self.cells.iter()
    }

    /// The date the grid was built around, `None` for the empty grid
    pub const fn reference(&self) -> Option<CalendarDate> {
        self.reference
    }

    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub const fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Cells borrowed from the end of the previous month
    pub const fn leading_overflow(&self) -> usize {
        self.leading
    }

    /// Cells borrowed from the start of the next month
    pub const fn trailing_overflow(&self) -> usize {
        self.trailing
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Index of the first cell dated `date`
    pub fn position(&self, date: CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| *cell == date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.position(date).is_some()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a DateCell;
    type IntoIter = std::slice::Iter<'a, DateCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// How a grid splits into previous-month tail, reference-month body and
/// next-month head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    leading: usize,
    first_day: u8,
    trailing: usize,
    len: usize,
}

/// Lays out week or month grids around a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridBuilder {
    granularity: Granularity,
    first_day_of_week: Weekday,
}

impl GridBuilder {
    pub const fn new(granularity: Granularity, first_day_of_week: Weekday) -> Self {
        Self {
            granularity,
            first_day_of_week,
        }
    }

    pub const fn week(first_day_of_week: Weekday) -> Self {
        Self::new(Granularity::Week, first_day_of_week)
    }

    pub const fn month(first_day_of_week: Weekday) -> Self {
        Self::new(Granularity::Month, first_day_of_week)
    }

    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub const fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Builds the grid containing `reference`.
    ///
    /// Every cell is labelled through `lunar` once. Cells equal to `today` are
    /// flagged. The result depends only on the arguments.
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` when the grid would need a day before
    /// year 1 or after year 9999.
    pub fn build<L>(
        &self,
        reference: CalendarDate,
        lunar: &L,
        today: Option<CalendarDate>,
    ) -> Result<Grid, GridError>
    where
        L: LunarConverter + ?Sized,
    {
        let span = match self.granularity {
            Granularity::Week => self.week_span(reference),
            Granularity::Month => self.month_span(reference),
        };
        debug_assert!(span.leading == 0 || span.trailing == 0 || self.granularity == Granularity::Month);

        let out_of_range = || GridError::OutOfRange { reference };
        let previous = if span.leading > 0 {
            let (year, month) =
                types::previous_month(reference.year(), reference.month()).ok_or_else(out_of_range)?;
            Some((year, month, days_in_month(year, month)))
        } else {
            None
        };
        let next = if span.trailing > 0 {
            Some(types::next_month(reference.year(), reference.month()).ok_or_else(out_of_range)?)
        } else {
            None
        };

        let mut cells = Vec::with_capacity(span.len);
        for index in 0..span.len {
            let date = match (previous, next) {
                (Some((year, month, count)), _) if index < span.leading => {
                    // leading < 7 and count >= 28, so this never underflows
                    let day = count as usize - span.leading + index + 1;
                    CalendarDate::new(year, month, day as u8)?
                }
                (_, Some((year, month))) if index >= span.len - span.trailing => {
                    let day = index - (span.len - span.trailing) + 1;
                    CalendarDate::new(year, month, day as u8)?
                }
                _ => {
                    let day = span.first_day as usize + index - span.leading;
                    CalendarDate::new(reference.year(), reference.month(), day as u8)?
                }
            };

            cells.push(DateCell::new(
                date,
                date.same_month(&reference),
                today == Some(date),
                lunar.lunar_label(date),
            ));
        }

        tracing::debug!(
            %reference,
            granularity = ?self.granularity,
            first_day_of_week = %self.first_day_of_week,
            cells = cells.len(),
            leading = span.leading,
            trailing = span.trailing,
            "built grid"
        );

        Ok(Grid {
            cells,
            reference: Some(reference),
            granularity: self.granularity,
            first_day_of_week: self.first_day_of_week,
            leading: span.leading,
            trailing: span.trailing,
        })
    }

    fn week_span(&self, reference: CalendarDate) -> Span {
        let week = reference.weekday().offset_from(self.first_day_of_week) as i32;
        let day = i32::from(reference.day());
        let day_count = i32::from(reference.days_in_month());
        let len = DAYS_PER_WEEK;

        if day - week <= 0 {
            // Week starts in the previous month; day 1 sits at its own offset.
            let leading = reference
                .first_of_month()
                .weekday()
                .offset_from(self.first_day_of_week);
            Span {
                leading,
                first_day: MIN_DAY,
                trailing: 0,
                len,
            }
        } else if day + 6 - week > day_count {
            Span {
                leading: 0,
                first_day: (day - week) as u8,
                trailing: (day + 6 - week - day_count) as usize,
                len,
            }
        } else {
            Span {
                leading: 0,
                first_day: (day - week) as u8,
                trailing: 0,
                len,
            }
        }
    }

    fn month_span(&self, reference: CalendarDate) -> Span {
        let leading = reference
            .first_of_month()
            .weekday()
            .offset_from(self.first_day_of_week);
        let day_count = reference.days_in_month() as usize;
        let rows = (leading + day_count).div_ceil(DAYS_PER_WEEK);
        let len = rows * DAYS_PER_WEEK;
        Span {
            leading,
            first_day: MIN_DAY,
            trailing: len - leading - day_count,
            len,
        }
    }
}

/// Zero-based week row that `date` occupies in its month's grid.
///
/// This is the scope index handed to a `Container` when a day is selected.
pub fn week_of_month(date: CalendarDate, first_day_of_week: Weekday) -> usize {
    let offset = date
        .first_of_month()
        .weekday()
        .offset_from(first_day_of_week);
    (offset + date.day() as usize - 1) / DAYS_PER_WEEK
}
