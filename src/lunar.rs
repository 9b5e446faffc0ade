use crate::CalendarDate;

/// Maps a Gregorian date to the lunar-calendar label shown under the day number.
///
/// Implementations must be deterministic: grids are rebuilt freely and are
/// expected to come out identical for the same inputs.
pub trait LunarConverter {
    fn lunar_label(&self, date: CalendarDate) -> String;
}

impl<F> LunarConverter for F
where
    F: Fn(CalendarDate) -> String,
{
    fn lunar_label(&self, date: CalendarDate) -> String {
        self(date)
    }
}

/// Converter that labels every day with an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunar;

impl LunarConverter for NoLunar {
    fn lunar_label(&self, _date: CalendarDate) -> String {
        String::new()
    }
}
