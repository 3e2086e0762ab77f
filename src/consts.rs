/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1901;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 2999;

/// First valid day of any month
pub const MIN_DAY: u8 = 1;

/// Days in February during a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a leap year
pub const DAYS_IN_A_LEAP_YEAR: u16 = 366;

/// Days in a non-leap year
pub const DAYS_IN_A_NON_LEAP_YEAR: u16 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (yyyy-MM-dd)
pub const DATE_SEPARATOR: char = '-';

/// Digit widths of the three groups in the yyyy-MM-dd pattern
pub(crate) const YEAR_WIDTH: usize = 4;
pub(crate) const MONTH_WIDTH: usize = 2;
pub(crate) const DAY_WIDTH: usize = 2;
