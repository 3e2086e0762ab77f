mod between;
mod consts;
mod prelude;
#[cfg(test)]
pub(crate) mod test_utils;
mod types;

pub use between::{MissingDateError, full_days_between, is_leap_year, try_full_days_between};
pub use consts::*;
pub use types::Month;

use crate::prelude::*;
use std::cmp::Ordering;
use std::num::ParseIntError;
use std::str::FromStr;

/// A validated date in the proleptic Gregorian calendar, restricted to the
/// years 1901-2999.
///
/// A `CalendarDate` is constructed exclusively by parsing its canonical
/// `yyyy-MM-dd` form, so every instance is a real calendar date within the
/// supported range. Ordering is chronological and `Display` renders the
/// canonical form back, making parsing and rendering exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.ordinal()", day)]
pub struct CalendarDate {
    year: u16,
    month: Month,
    day: u8,
    leap_year: bool,
}

/// Failure kinds for turning user text into a [`CalendarDate`].
///
/// Lexical and semantic failures are separate kinds; callers that reprompt on
/// bad input can still tell a malformed string from an impossible date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not match the yyyy-MM-dd shape.
    #[error("Invalid date format! Date should be in yyyy-MM-dd format. For e.g. 1968-12-18.")]
    InvalidFormat(#[source] Option<ParseIntError>),

    /// Input is well-formed but names no real date in the supported range.
    #[error("Invalid date! {0}")]
    InvalidDate(#[from] InvalidDate),
}

/// Semantic validation failures, one variant per violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDate {
    /// Year falls outside the supported 1901-2999 range.
    #[error("Year must be between 1901-2999.")]
    YearOutOfRange(u16),

    /// Month ordinal maps to none of the twelve months.
    #[error("Month must be between 01-12.")]
    MonthOutOfRange(u8),

    /// Day is below 1.
    #[error("Day must be more than 0.")]
    DayTooSmall(u8),

    /// Day exceeds the true length of the month in that year.
    #[error("There cannot be more than {max} days in the month of {month} of year {year}")]
    DayTooLarge { max: u8, month: Month, year: u16 },
}

impl CalendarDate {
    /// Returns the year (1901..=2999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day within the month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns true if this date falls in a leap year
    #[inline]
    pub const fn is_leap_year(self) -> bool {
        self.leap_year
    }

    /// Returns the total number of days in this date's year (365 or 366).
    pub const fn days_this_year(self) -> u16 {
        if self.leap_year {
            DAYS_IN_A_LEAP_YEAR
        } else {
            DAYS_IN_A_NON_LEAP_YEAR
        }
    }

    /// Returns the total number of days in this date's month, with February
    /// adjusted for leap years.
    pub const fn days_this_month(self) -> u8 {
        self.month.days(self.leap_year)
    }

    /// Returns the 1-based ordinal position of this date within its year.
    ///
    /// January 1 is 1; December 31 is 365, or 366 in a leap year.
    pub fn day_of_year(self) -> u16 {
        let mut ordinal = u16::from(self.day);
        for month in Month::ALL {
            if month == self.month {
                break;
            }
            ordinal += u16::from(month.days(self.leap_year));
        }
        ordinal
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (year_group, month_group, day_group) = split_groups(text)?;

        // Fixed-order, fail-fast pipeline: the year must validate before the
        // leap flag exists, and the leap flag feeds the day bound.
        let year = parse_group(year_group)?;
        validate_year(year)?;
        let leap_year = is_leap_year(year);

        let month_ordinal = parse_group(month_group)?;
        let month =
            Month::from_ordinal(month_ordinal).ok_or(InvalidDate::MonthOutOfRange(month_ordinal))?;

        let day = parse_group(day_group)?;
        validate_day(day, month, leap_year, year)?;

        Ok(Self {
            year,
            month,
            day,
            leap_year,
        })
    }
}

/// Splits the input into its yyyy, MM, and dd digit groups, rejecting
/// anything that does not match the NNNN-NN-NN shape exactly.
fn split_groups(text: &str) -> Result<(&str, &str, &str), ParseError> {
    let mut groups = text.split(DATE_SEPARATOR);
    match (groups.next(), groups.next(), groups.next(), groups.next()) {
        (Some(year), Some(month), Some(day), None)
            if is_digit_group(year, YEAR_WIDTH)
                && is_digit_group(month, MONTH_WIDTH)
                && is_digit_group(day, DAY_WIDTH) =>
        {
            Ok((year, month, day))
        }
        _ => Err(ParseError::InvalidFormat(None)),
    }
}

fn is_digit_group(group: &str, width: usize) -> bool {
    group.len() == width && group.bytes().all(|byte| byte.is_ascii_digit())
}

/// Parses one digit group. The shape check makes integer parse failure
/// unreachable, but it is still surfaced as `InvalidFormat` with the cause
/// attached rather than unwrapped.
fn parse_group<N>(group: &str) -> Result<N, ParseError>
where
    N: FromStr<Err = ParseIntError>,
{
    group
        .parse()
        .map_err(|cause| ParseError::InvalidFormat(Some(cause)))
}

fn validate_year(year: u16) -> Result<(), InvalidDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(InvalidDate::YearOutOfRange(year));
    }
    Ok(())
}

fn validate_day(day: u8, month: Month, leap_year: bool, year: u16) -> Result<(), InvalidDate> {
    if day < MIN_DAY {
        return Err(InvalidDate::DayTooSmall(day));
    }

    let max = month.days(leap_year);
    if day > max {
        return Err(InvalidDate::DayTooLarge { max, month, year });
    }
    Ok(())
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Years order dates outright; within a shared year the ordinal day
        // decides. Only the sign is meaningful, never a distance.
        match self.year.cmp(&other.year) {
            Ordering::Equal => self.day_of_year().cmp(&other.day_of_year()),
            ord => ord,
        }
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
