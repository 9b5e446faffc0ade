use crate::CalendarDate;
use crate::consts::NO_COLOR;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// An event marker attached to one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scheme {
    pub date: CalendarDate,
    pub label: String,
    /// ARGB marker color, `NO_COLOR` to fall back to the view default
    #[serde(default)]
    pub color: u32,
}

impl Scheme {
    pub fn new(date: CalendarDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
            color: NO_COLOR,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }
}

/// Markers supplied by the host. Expected to be unique by date; when they are
/// not, the last entry for a date wins on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeSet(Vec<Scheme>);

impl SchemeSet {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, scheme: Scheme) {
        self.0.push(scheme);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scheme> {
        self.0.iter()
    }

    /// Last entry dated `date`
    pub fn find(&self, date: CalendarDate) -> Option<&Scheme> {
        self.0.iter().rev().find(|s| s.date == date)
    }
}

impl From<Vec<Scheme>> for SchemeSet {
    fn from(schemes: Vec<Scheme>) -> Self {
        Self(schemes)
    }
}

impl FromIterator<Scheme> for SchemeSet {
    fn from_iter<I: IntoIterator<Item = Scheme>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SchemeSet {
    type Item = &'a Scheme;
    type IntoIter = std::slice::Iter<'a, Scheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Attaches `schemes` to the cells of `grid` by date.
///
/// Every cell is cleared first, so a `None` set or an empty set wipes all
/// markers and merging the same set twice changes nothing. A matched scheme
/// without a color gets `fallback_color`. Returns the number of marked cells.
pub fn merge(grid: &mut Grid, schemes: Option<&SchemeSet>, fallback_color: u32) -> usize {
    let mut marked = 0;
    for cell in grid.cells_mut() {
        cell.clear_scheme();
        let Some(scheme) = schemes.and_then(|set| set.find(cell.date())) else {
            continue;
        };
        let color = if scheme.color == NO_COLOR {
            fallback_color
        } else {
            scheme.color
        };
        cell.set_scheme(&scheme.label, color);
        marked += 1;
    }

    tracing::debug!(
        schemes = schemes.map_or(0, SchemeSet::len),
        marked,
        "merged schemes into grid"
    );
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;
    use crate::grid::GridBuilder;
    use crate::lunar::NoLunar;

    const FALLBACK: u32 = 0xFFEF_EFEF;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn week_of(y: u16, m: u8, d: u8) -> Grid {
        GridBuilder::week(Weekday::Sunday)
            .build(date(y, m, d), &NoLunar, None)
            .unwrap()
    }

    fn snapshot(grid: &Grid) -> Vec<(Option<String>, u32)> {
        grid.iter()
            .map(|c| (c.scheme().map(str::to_owned), c.scheme_color()))
            .collect()
    }

    #[test]
    fn test_merge_marks_matching_cells() {
        let mut grid = week_of(2024, 1, 2);
        let set: SchemeSet = vec![
            Scheme::new(date(2023, 12, 31), "eve"),
            Scheme::new(date(2024, 1, 4), "work").with_color(0xFF00_FF00),
            Scheme::new(date(2024, 2, 1), "elsewhere"),
        ]
        .into();

        assert_eq!(merge(&mut grid, Some(&set), FALLBACK), 2);
        assert_eq!(grid.cells()[0].scheme(), Some("eve"));
        assert_eq!(grid.cells()[0].scheme_color(), FALLBACK);
        assert_eq!(grid.cells()[4].scheme(), Some("work"));
        assert_eq!(grid.cells()[4].scheme_color(), 0xFF00_FF00);
        assert!(!grid.cells()[1].has_scheme());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut once = week_of(2024, 12, 30);
        let mut twice = once.clone();
        let set: SchemeSet = vec![
            Scheme::new(date(2024, 12, 31), "nye"),
            Scheme::new(date(2025, 1, 1), "new year").with_color(0xFFED_5353),
        ]
        .into();

        merge(&mut once, Some(&set), FALLBACK);
        merge(&mut twice, Some(&set), FALLBACK);
        merge(&mut twice, Some(&set), FALLBACK);
        assert_eq!(snapshot(&once), snapshot(&twice));
    }

    #[test]
    fn test_merge_replaces_previous_markers() {
        let mut grid = week_of(2024, 1, 2);
        let first: SchemeSet = vec![Scheme::new(date(2024, 1, 1), "a")].into();
        let second: SchemeSet = vec![Scheme::new(date(2024, 1, 2), "b")].into();

        merge(&mut grid, Some(&first), FALLBACK);
        merge(&mut grid, Some(&second), FALLBACK);
        assert!(!grid.cells()[1].has_scheme());
        assert_eq!(grid.cells()[2].scheme(), Some("b"));
    }

    #[test]
    fn test_merge_absent_set_clears() {
        let mut grid = week_of(2024, 1, 2);
        let set: SchemeSet = vec![Scheme::new(date(2024, 1, 1), "a")].into();
        merge(&mut grid, Some(&set), FALLBACK);

        assert_eq!(merge(&mut grid, None, FALLBACK), 0);
        assert!(grid.iter().all(|c| !c.has_scheme() && c.scheme_color() == NO_COLOR));
    }

    #[test]
    fn test_duplicate_dates_last_wins() {
        let mut grid = week_of(2024, 1, 2);
        let set: SchemeSet = vec![
            Scheme::new(date(2024, 1, 3), "first").with_color(0xFF11_1111),
            Scheme::new(date(2024, 1, 3), "second"),
        ]
        .into();
        merge(&mut grid, Some(&set), FALLBACK);
        assert_eq!(grid.cells()[3].scheme(), Some("second"));
        assert_eq!(grid.cells()[3].scheme_color(), FALLBACK);
    }

    #[test]
    fn test_merge_on_empty_grid() {
        let mut grid = Grid::default();
        let set: SchemeSet = vec![Scheme::new(date(2024, 1, 3), "x")].into();
        assert_eq!(merge(&mut grid, Some(&set), FALLBACK), 0);
    }

    #[test]
    fn test_scheme_set_from_json() {
        let set: SchemeSet = serde_json::from_str(
            r#"[
                {"date": "2024-01-01", "label": "New Year", "color": 4293213779},
                {"date": "2024-02-10", "label": "Spring Festival"}
            ]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.find(date(2024, 1, 1)).unwrap().color, 0xFFE5_3E53);
        assert_eq!(set.find(date(2024, 2, 10)).unwrap().color, NO_COLOR);
        assert!(set.find(date(2024, 3, 1)).is_none());
    }
}
