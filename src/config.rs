use crate::consts::{DEFAULT_CLICK_THRESHOLD_DP, DEFAULT_PADDING_DP, DEFAULT_SCHEME_COLOR};
use crate::types::Weekday;
use serde::{Deserialize, Serialize};

/// How much of the calendar one grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One row of seven days around the reference date
    #[default]
    Week,
    /// Every week row touching the reference month
    Month,
}

/// Configuration for a [`GridView`](crate::GridView).
///
/// Lengths ending in `_dp` are density-independent and are scaled by
/// `density` to get pixels. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub granularity: Granularity,

    /// Weekday shown in the leftmost column.
    pub first_day_of_week: Weekday,

    /// Vertical travel allowed between press and release for a tap.
    pub click_threshold_dp: f32,

    /// Pixels per dp on the target display.
    pub density: f32,

    pub padding_left_dp: f32,
    pub padding_right_dp: f32,

    /// Height of one week row, in pixels.
    pub item_height: f32,

    /// Marker color for schemes that carry none.
    pub default_scheme_color: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Week,
            first_day_of_week: Weekday::Sunday,
            click_threshold_dp: DEFAULT_CLICK_THRESHOLD_DP,
            density: 1.0,
            padding_left_dp: DEFAULT_PADDING_DP,
            padding_right_dp: DEFAULT_PADDING_DP,
            item_height: 0.0,
            default_scheme_color: DEFAULT_SCHEME_COLOR,
        }
    }
}

impl ViewConfig {
    /// Converts a dp length to pixels, truncating like the platform does.
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        (dp * self.density + 0.5).trunc()
    }

    pub fn click_threshold_px(&self) -> f32 {
        self.dp_to_px(self.click_threshold_dp)
    }

    pub fn padding_left_px(&self) -> f32 {
        self.dp_to_px(self.padding_left_dp)
    }

    pub fn padding_right_px(&self) -> f32 {
        self.dp_to_px(self.padding_right_dp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.granularity, Granularity::Week);
        assert_eq!(config.first_day_of_week, Weekday::Sunday);
        assert!((config.click_threshold_px() - 50.0).abs() < f32::EPSILON);
        assert!((config.padding_left_px() - 8.0).abs() < f32::EPSILON);
        assert_eq!(config.default_scheme_color, 0xFFEF_EFEF);
    }

    #[test]
    fn test_density_scaling() {
        let config = ViewConfig {
            density: 2.75,
            ..ViewConfig::default()
        };
        // 50 * 2.75 = 137.5, rounds half up
        assert!((config.click_threshold_px() - 138.0).abs() < f32::EPSILON);
        assert!((config.padding_right_px() - 22.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ViewConfig = serde_json::from_str(
            r#"{"granularity": "month", "first_day_of_week": "monday", "item_height": 120.0}"#,
        )
        .unwrap();
        assert_eq!(config.granularity, Granularity::Month);
        assert_eq!(config.first_day_of_week, Weekday::Monday);
        assert!((config.item_height - 120.0).abs() < f32::EPSILON);
        assert!((config.density - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.default_scheme_color, DEFAULT_SCHEME_COLOR);
    }

    #[test]
    fn test_unknown_weekday_rejected() {
        let result: Result<ViewConfig, _> =
            serde_json::from_str(r#"{"first_day_of_week": "funday"}"#);
        assert!(result.is_err());
    }
}
