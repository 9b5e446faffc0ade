use crate::CalendarDate;
use crate::grid::Grid;

/// Maps a point to a cell index in a grid `columns` wide and `len` cells long.
///
/// Coordinates are relative to the grid's top-left corner. Columns past the
/// right edge clamp to the last column (and negative x to the first); a point
/// above the grid or below its last row resolves to `None`, as do
/// non-positive cell sizes.
pub fn resolve_from_coordinate(
    x: f32,
    y: f32,
    cell_width: f32,
    cell_height: f32,
    columns: usize,
    len: usize,
) -> Option<usize> {
    if columns == 0 || cell_width <= 0.0 || cell_height <= 0.0 || y < 0.0 {
        return None;
    }
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index_x = ((x / cell_width).floor().max(0.0) as usize).min(columns - 1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index_y = (y / cell_height).floor() as usize;

    let index = index_y.checked_mul(columns)?.checked_add(index_x)?;
    (index < len).then_some(index)
}

/// Index of the first cell in `grid` dated `date`.
pub fn resolve_from_cell(grid: &Grid, date: CalendarDate) -> Option<usize> {
    grid.position(date)
}

/// The selected cell of a grid.
///
/// Holds the index and the selected date. The date survives rebuilds so
/// [`carry_over`](Self::carry_over) can find the same day in a new grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
    date: Option<CalendarDate>,
}

impl Selection {
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    pub const fn is_selected(&self, index: usize) -> bool {
        matches!(self.index, Some(i) if i == index)
    }

    /// Selects `index` in `grid`. Out-of-range indices leave the selection
    /// untouched and return false.
    pub fn select(&mut self, grid: &Grid, index: usize) -> bool {
        let Some(cell) = grid.get(index) else {
            tracing::debug!(index, len = grid.len(), "ignoring out-of-range selection");
            return false;
        };
        self.index = Some(index);
        self.date = Some(cell.date());
        true
    }

    /// Points the selection at `date` if `grid` holds it, clears it otherwise.
    pub fn select_date(&mut self, grid: &Grid, date: CalendarDate) -> Option<usize> {
        self.index = resolve_from_cell(grid, date);
        self.date = self.index.map(|_| date);
        self.index
    }

    /// Re-resolves the remembered date against a freshly built grid.
    pub fn carry_over(&mut self, grid: &Grid) -> Option<usize> {
        match self.date {
            Some(date) => self.select_date(grid, date),
            None => {
                self.index = None;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.index = None;
        self.date = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;
    use crate::grid::GridBuilder;
    use crate::lunar::NoLunar;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn week_of(y: u16, m: u8, d: u8) -> Grid {
        GridBuilder::week(Weekday::Sunday)
            .build(date(y, m, d), &NoLunar, None)
            .unwrap()
    }

    #[test]
    fn test_resolve_coordinate_basic() {
        assert_eq!(resolve_from_coordinate(0.0, 0.0, 50.0, 100.0, 7, 7), Some(0));
        assert_eq!(resolve_from_coordinate(49.9, 10.0, 50.0, 100.0, 7, 7), Some(0));
        assert_eq!(resolve_from_coordinate(50.0, 10.0, 50.0, 100.0, 7, 7), Some(1));
        assert_eq!(resolve_from_coordinate(320.0, 99.0, 50.0, 100.0, 7, 7), Some(6));
    }

    #[test]
    fn test_resolve_coordinate_clamps_columns() {
        let width = 350.0;
        assert_eq!(
            resolve_from_coordinate(width + 10.0, 5.0, width / 7.0, 100.0, 7, 7),
            Some(6)
        );
        assert_eq!(resolve_from_coordinate(-4.0, 5.0, 50.0, 100.0, 7, 7), Some(0));
    }

    #[test]
    fn test_resolve_coordinate_rows() {
        // month grid of five rows
        assert_eq!(resolve_from_coordinate(60.0, 150.0, 50.0, 100.0, 7, 35), Some(8));
        assert_eq!(resolve_from_coordinate(60.0, 450.0, 50.0, 100.0, 7, 35), Some(29));
        assert_eq!(resolve_from_coordinate(60.0, 500.0, 50.0, 100.0, 7, 35), None);
        // a week grid only has one row
        assert_eq!(resolve_from_coordinate(60.0, 150.0, 50.0, 100.0, 7, 7), None);
    }

    #[test]
    fn test_resolve_coordinate_degenerate() {
        assert_eq!(resolve_from_coordinate(10.0, -1.0, 50.0, 100.0, 7, 7), None);
        assert_eq!(resolve_from_coordinate(10.0, 10.0, 0.0, 100.0, 7, 7), None);
        assert_eq!(resolve_from_coordinate(10.0, 10.0, 50.0, 0.0, 7, 7), None);
        assert_eq!(resolve_from_coordinate(10.0, 10.0, 50.0, 100.0, 7, 0), None);
        assert_eq!(resolve_from_coordinate(f32::NAN, 10.0, 50.0, 100.0, 7, 7), None);
    }

    #[test]
    fn test_resolve_from_cell() {
        let grid = week_of(2024, 1, 2);
        assert_eq!(resolve_from_cell(&grid, date(2023, 12, 31)), Some(0));
        assert_eq!(resolve_from_cell(&grid, date(2024, 1, 6)), Some(6));
        assert_eq!(resolve_from_cell(&grid, date(2024, 1, 7)), None);
        assert_eq!(resolve_from_cell(&Grid::default(), date(2024, 1, 7)), None);
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let grid = week_of(2024, 1, 2);
        let mut selection = Selection::default();
        assert!(!selection.select(&grid, 7));
        assert_eq!(selection.index(), None);

        assert!(selection.select(&grid, 3));
        assert!(!selection.select(&grid, 42));
        assert_eq!(selection.index(), Some(3));
        assert_eq!(selection.date(), Some(date(2024, 1, 3)));
        assert!(selection.is_selected(3));
        assert!(!selection.is_selected(2));
    }

    #[test]
    fn test_carry_over_keeps_same_day() {
        let week = week_of(2024, 1, 2);
        let mut selection = Selection::default();
        selection.select(&week, 0); // 2023-12-31

        let december = GridBuilder::month(Weekday::Sunday)
            .build(date(2023, 12, 1), &NoLunar, None)
            .unwrap();
        let index = selection.carry_over(&december);
        assert_eq!(index, december.position(date(2023, 12, 31)));
        assert_eq!(selection.date(), Some(date(2023, 12, 31)));
    }

    #[test]
    fn test_carry_over_resets_when_missing() {
        let mut selection = Selection::default();
        selection.select(&week_of(2024, 1, 2), 2);
        assert_eq!(selection.carry_over(&week_of(2024, 1, 10)), None);
        assert_eq!(selection.index(), None);
        assert_eq!(selection.date(), None);
    }
}
