use crate::CalendarDate;
use crate::consts::NO_COLOR;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// One day of a grid.
///
/// Identity is the date alone: two cells are equal when their year, month and
/// day match, whatever their labels, flags or scheme.
#[derive(Debug, Clone, Serialize)]
pub struct DateCell {
    date: CalendarDate,
    belongs_to_reference_period: bool,
    is_today: bool,
    lunar_text: String,
    scheme: Option<String>,
    scheme_color: u32,
}

impl DateCell {
    pub(crate) fn new(
        date: CalendarDate,
        belongs_to_reference_period: bool,
        is_today: bool,
        lunar_text: String,
    ) -> Self {
        Self {
            date,
            belongs_to_reference_period,
            is_today,
            lunar_text,
            scheme: None,
            scheme_color: NO_COLOR,
        }
    }

    #[inline]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.date.year()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// False for cells borrowed from the previous or next month
    pub const fn belongs_to_reference_period(&self) -> bool {
        self.belongs_to_reference_period
    }

    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn lunar_text(&self) -> &str {
        &self.lunar_text
    }

    /// Scheme label, if a scheme matched this date on the last merge
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Marker color, `NO_COLOR` when no scheme matched
    pub const fn scheme_color(&self) -> u32 {
        self.scheme_color
    }

    pub const fn has_scheme(&self) -> bool {
        self.scheme.is_some()
    }

    pub(crate) fn set_scheme(&mut self, label: &str, color: u32) {
        self.scheme = Some(label.to_owned());
        self.scheme_color = color;
    }

    pub(crate) fn clear_scheme(&mut self) {
        self.scheme = None;
        self.scheme_color = NO_COLOR;
    }
}

impl PartialEq for DateCell {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DateCell {}

impl Hash for DateCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialEq<CalendarDate> for DateCell {
    fn eq(&self, other: &CalendarDate) -> bool {
        self.date == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_equality_ignores_enrichments() {
        let mut a = DateCell::new(date(2024, 1, 2), true, false, "廿一".to_owned());
        let b = DateCell::new(date(2024, 1, 2), false, true, String::new());
        a.set_scheme("meeting", 0xFF00_00FF);
        assert_eq!(a, b);
        assert_eq!(a, date(2024, 1, 2));
        assert_ne!(a, DateCell::new(date(2024, 1, 3), true, false, String::new()));
    }

    #[test]
    fn test_scheme_defaults_and_clear() {
        let mut cell = DateCell::new(date(2024, 1, 2), true, false, String::new());
        assert!(!cell.has_scheme());
        assert_eq!(cell.scheme_color(), NO_COLOR);

        cell.set_scheme("假", 0xFFED_5353);
        assert_eq!(cell.scheme(), Some("假"));
        assert_eq!(cell.scheme_color(), 0xFFED_5353);

        cell.clear_scheme();
        assert_eq!(cell.scheme(), None);
        assert_eq!(cell.scheme_color(), NO_COLOR);
    }

    #[test]
    fn test_accessors() {
        let cell = DateCell::new(date(2023, 12, 31), false, false, "十九".to_owned());
        assert_eq!((cell.year(), cell.month(), cell.day()), (2023, 12, 31));
        assert!(!cell.belongs_to_reference_period());
        assert_eq!(cell.lunar_text(), "十九");
    }
}
