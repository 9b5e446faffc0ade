/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month, 1-indexed; February holds the common-year length.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0, // unused
    31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Columns in every grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Separator used by the `YYYY-MM-DD` date form
pub const DATE_SEPARATOR: char = '-';

/// Vertical travel (in dp) a press may make and still count as a tap
pub const DEFAULT_CLICK_THRESHOLD_DP: f32 = 50.0;

/// Horizontal padding (in dp) on each side of the grid
pub const DEFAULT_PADDING_DP: f32 = 8.0;

/// Scheme marker color used when a scheme carries no color of its own
pub const DEFAULT_SCHEME_COLOR: u32 = 0xFFEF_EFEF;

/// Color value meaning "unset"
pub const NO_COLOR: u32 = 0;
